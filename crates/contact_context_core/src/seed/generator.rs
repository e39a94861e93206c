//! Pure record generation for seeding.
//!
//! # Invariants
//! - Contact emails are unique within one batch: the 0-based batch index is
//!   appended to the local part.
//! - Phone numbers are `DDD-DDD-DDDD`.
//! - Primary zip codes lie in `[10000, 99998]`, secondary ones in
//!   `[90000, 99998]`.

use crate::model::address::NewAddress;
use crate::model::contact::{Contact, NewContact};
use crate::seed::vocabulary::{
    sample, CITIES, COUNTRIES, EMAIL_DOMAINS, FIRST_NAMES, LAST_NAMES, STATE_PROVINCES,
    STREET_TYPES,
};
use rand::Rng;

/// Generates `count` contacts without identifiers.
pub fn generate_contacts<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<NewContact> {
    (0..count).map(|index| generate_contact(index, rng)).collect()
}

/// Generates a primary address per contact, plus a secondary PO box address
/// with probability `secondary_probability`.
///
/// `secondary_probability` must lie in `[0.0, 1.0]`; `SeedConfig::validate`
/// enforces this for the seeder.
pub fn generate_addresses<R: Rng + ?Sized>(
    contacts: &[Contact],
    secondary_probability: f64,
    rng: &mut R,
) -> Vec<NewAddress> {
    let mut addresses = Vec::with_capacity(contacts.len());
    for contact in contacts {
        let city = sample(&CITIES, rng);
        let state_province = sample(&STATE_PROVINCES, rng);
        let country = sample(&COUNTRIES, rng);

        addresses.push(NewAddress {
            contact_id: contact.contact_id,
            street_address: format!(
                "{} {} {}",
                rng.random_range(100..9100),
                contact.last_name,
                sample(&STREET_TYPES, rng)
            ),
            city: city.to_string(),
            state_province: state_province.to_string(),
            zip_code: format!("{:05}", rng.random_range(10_000..99_999)),
            country: country.to_string(),
        });

        if rng.random_bool(secondary_probability) {
            addresses.push(NewAddress {
                contact_id: contact.contact_id,
                street_address: format!("PO Box {}", rng.random_range(100..5100)),
                city: format!("Alt-{}", sample(&CITIES, rng)),
                state_province: sample(&STATE_PROVINCES, rng).to_string(),
                zip_code: format!("{:05}", rng.random_range(90_000..99_999)),
                country: country.to_string(),
            });
        }
    }
    addresses
}

fn generate_contact<R: Rng + ?Sized>(index: usize, rng: &mut R) -> NewContact {
    let first_name = sample(&FIRST_NAMES, rng);
    let last_name = sample(&LAST_NAMES, rng);
    let domain = sample(&EMAIL_DOMAINS, rng);

    let first = first_name.to_lowercase();
    let last = last_name.to_lowercase();
    let local_part = if rng.random_bool(0.5) {
        let initial: String = first.chars().take(1).collect();
        format!("{initial}{last}")
    } else {
        format!("{first}.{last}")
    };

    let phone_number = format!(
        "{:03}-{:03}-{:04}",
        rng.random_range(500..599),
        rng.random_range(100..999),
        rng.random_range(1000..9999)
    );

    NewContact {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: format!("{local_part}{index}@{domain}"),
        phone_number,
    }
}

#[cfg(test)]
mod tests {
    use super::{generate_addresses, generate_contacts};
    use crate::model::contact::NewContact;
    use crate::seed::vocabulary::{CITIES, COUNTRIES, FIRST_NAMES, LAST_NAMES, STATE_PROVINCES};
    use once_cell::sync::Lazy;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use regex::Regex;
    use std::collections::{BTreeMap, BTreeSet};

    static PHONE_RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^\d{3}-\d{3}-\d{4}$").expect("valid phone regex"));

    fn persisted(contacts: Vec<NewContact>) -> Vec<crate::model::contact::Contact> {
        contacts
            .into_iter()
            .zip(1..)
            .map(|(contact, id)| contact.persisted(id))
            .collect()
    }

    #[test]
    fn contacts_have_unique_single_at_emails() {
        let mut rng = StdRng::seed_from_u64(11);
        let contacts = generate_contacts(1000, &mut rng);
        assert_eq!(contacts.len(), 1000);

        let mut emails = BTreeSet::new();
        for contact in &contacts {
            assert!(!contact.email.is_empty());
            assert_eq!(contact.email.matches('@').count(), 1);
            assert_eq!(contact.email, contact.email.to_lowercase());
            assert!(emails.insert(contact.email.clone()), "duplicate email");
        }
    }

    #[test]
    fn email_local_part_ends_with_batch_index() {
        let mut rng = StdRng::seed_from_u64(12);
        for (index, contact) in generate_contacts(50, &mut rng).iter().enumerate() {
            let local_part = contact.email.split('@').next().unwrap_or_default();
            assert!(local_part.ends_with(&index.to_string()));
            let last = contact.last_name.to_lowercase();
            assert!(local_part.contains(&last));
        }
    }

    #[test]
    fn names_come_from_reference_vocabularies() {
        let mut rng = StdRng::seed_from_u64(13);
        for contact in generate_contacts(200, &mut rng) {
            assert!(FIRST_NAMES.contains(&contact.first_name));
            assert!(LAST_NAMES.contains(&contact.last_name));
        }
    }

    #[test]
    fn phone_numbers_match_pattern_and_ranges() {
        let mut rng = StdRng::seed_from_u64(14);
        for contact in generate_contacts(500, &mut rng) {
            assert!(PHONE_RE.is_match(&contact.phone_number), "{}", contact.phone_number);
            let groups: Vec<u32> = contact
                .phone_number
                .split('-')
                .map(|group| group.parse().expect("digits"))
                .collect();
            assert!((500..=598).contains(&groups[0]));
            assert!((100..=998).contains(&groups[1]));
            assert!((1000..=9998).contains(&groups[2]));
        }
    }

    #[test]
    fn addresses_respect_ranges_and_linkage() {
        let mut rng = StdRng::seed_from_u64(15);
        let contacts = persisted(generate_contacts(300, &mut rng));
        let addresses = generate_addresses(&contacts, 0.3, &mut rng);

        let ids: BTreeSet<i64> = contacts.iter().map(|contact| contact.contact_id).collect();
        let mut per_contact: BTreeMap<i64, usize> = BTreeMap::new();
        for address in &addresses {
            assert!(ids.contains(&address.contact_id));
            *per_contact.entry(address.contact_id).or_default() += 1;

            let zip: u32 = address.zip_code.parse().expect("numeric zip");
            assert_eq!(address.zip_code.len(), 5);
            if address.street_address.starts_with("PO Box ") {
                assert!((90_000..=99_999).contains(&zip));
                assert!(address.city.starts_with("Alt-"));
                assert!(CITIES.contains(address.city.trim_start_matches("Alt-")));
            } else {
                assert!((10_000..=99_999).contains(&zip));
                assert!(CITIES.contains(&address.city));
            }
            assert!(STATE_PROVINCES.contains(&address.state_province));
            assert!(COUNTRIES.contains(&address.country));
        }

        assert_eq!(per_contact.len(), contacts.len());
        assert!(per_contact.values().all(|count| (1..=2).contains(count)));
    }

    #[test]
    fn secondary_address_follows_primary_with_shared_country() {
        let mut rng = StdRng::seed_from_u64(16);
        let contacts = persisted(generate_contacts(100, &mut rng));
        let addresses = generate_addresses(&contacts, 1.0, &mut rng);
        assert_eq!(addresses.len(), 200);

        for (contact, pair) in contacts.iter().zip(addresses.chunks(2)) {
            let (primary, secondary) = (&pair[0], &pair[1]);
            assert!(primary.street_address.contains(&contact.last_name));
            let number: u32 = primary
                .street_address
                .split(' ')
                .next()
                .and_then(|value| value.parse().ok())
                .expect("street number");
            assert!((100..=9099).contains(&number));

            let box_number: u32 = secondary
                .street_address
                .trim_start_matches("PO Box ")
                .parse()
                .expect("po box number");
            assert!((100..=5099).contains(&box_number));
            assert_eq!(primary.country, secondary.country);
        }
    }

    #[test]
    fn zero_probability_yields_primary_only() {
        let mut rng = StdRng::seed_from_u64(17);
        let contacts = persisted(generate_contacts(100, &mut rng));
        let addresses = generate_addresses(&contacts, 0.0, &mut rng);
        assert_eq!(addresses.len(), 100);
        assert!(addresses
            .iter()
            .all(|address| !address.street_address.starts_with("PO Box ")));
    }

    #[test]
    fn same_seed_same_batch() {
        let first = generate_contacts(20, &mut StdRng::seed_from_u64(99));
        let second = generate_contacts(20, &mut StdRng::seed_from_u64(99));
        assert_eq!(first, second);
    }
}
