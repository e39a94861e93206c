//! Fixed reference vocabularies and uniform sampling.

use rand::Rng;

/// Named, non-empty list of words to draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vocabulary {
    name: &'static str,
    words: &'static [&'static str],
}

impl Vocabulary {
    /// Builds a vocabulary. An empty word list fails const evaluation.
    pub const fn new(name: &'static str, words: &'static [&'static str]) -> Self {
        assert!(!words.is_empty(), "vocabulary must not be empty");
        Self { name, words }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn words(&self) -> &'static [&'static str] {
        self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word)
    }
}

/// Draws one word uniformly at random.
pub fn sample<R: Rng + ?Sized>(vocabulary: &Vocabulary, rng: &mut R) -> &'static str {
    let index = rng.random_range(0..vocabulary.words.len());
    vocabulary.words[index]
}

pub const FIRST_NAMES: Vocabulary = Vocabulary::new(
    "first_names",
    &[
        "James",
        "Mary",
        "Robert",
        "Patricia",
        "John",
        "Jennifer",
        "Michael",
        "Linda",
        "David",
        "Elizabeth",
        "William",
        "Barbara",
        "Richard",
        "Susan",
        "Joseph",
        "Jessica",
        "Thomas",
        "Sarah",
        "Charles",
        "Karen",
    ],
);

pub const LAST_NAMES: Vocabulary = Vocabulary::new(
    "last_names",
    &[
        "Smith",
        "Johnson",
        "Williams",
        "Brown",
        "Jones",
        "Garcia",
        "Miller",
        "Davis",
        "Rodriguez",
        "Martinez",
        "Hernandez",
        "Lopez",
        "Gonzalez",
        "Wilson",
        "Anderson",
        "Thomas",
        "Taylor",
        "Moore",
        "Jackson",
        "Martin",
    ],
);

pub const EMAIL_DOMAINS: Vocabulary = Vocabulary::new(
    "email_domains",
    &[
        "example.com",
        "corp.com",
        "mailservice.net",
        "businessco.org",
        "inboxpro.io",
    ],
);

pub const STREET_TYPES: Vocabulary =
    Vocabulary::new("street_types", &["St", "Ave", "Blvd", "Rd", "Ln", "Pkwy"]);

pub const CITIES: Vocabulary = Vocabulary::new(
    "cities",
    &[
        "New York",
        "Los Angeles",
        "Chicago",
        "Houston",
        "Phoenix",
        "Philadelphia",
        "San Antonio",
        "San Diego",
        "Dallas",
        "San Jose",
        "Austin",
        "Jacksonville",
        "Fort Worth",
        "Columbus",
    ],
);

pub const STATE_PROVINCES: Vocabulary = Vocabulary::new(
    "state_provinces",
    &[
        "CA", "NY", "TX", "FL", "IL", "PA", "AZ", "OH", "NC", "MI", "GA", "NJ", "VA", "WA", "MA",
        "IN",
    ],
);

pub const COUNTRIES: Vocabulary = Vocabulary::new("countries", &["USA", "Canada", "Mexico"]);

#[cfg(test)]
mod tests {
    use super::{
        sample, Vocabulary, CITIES, COUNTRIES, EMAIL_DOMAINS, FIRST_NAMES, LAST_NAMES,
        STATE_PROVINCES, STREET_TYPES,
    };
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::BTreeSet;

    #[test]
    fn reference_vocabulary_sizes() {
        assert_eq!(FIRST_NAMES.len(), 20);
        assert_eq!(LAST_NAMES.len(), 20);
        assert_eq!(EMAIL_DOMAINS.len(), 5);
        assert_eq!(STREET_TYPES.len(), 6);
        assert_eq!(CITIES.len(), 14);
        assert_eq!(STATE_PROVINCES.len(), 16);
        assert_eq!(COUNTRIES.len(), 3);
    }

    #[test]
    fn sample_always_returns_member() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            assert!(CITIES.contains(sample(&CITIES, &mut rng)));
        }
    }

    #[test]
    fn sample_reaches_every_word_eventually() {
        let mut rng = StdRng::seed_from_u64(42);
        let seen: BTreeSet<&str> = (0..1000).map(|_| sample(&COUNTRIES, &mut rng)).collect();
        assert_eq!(seen.len(), COUNTRIES.len());
    }

    #[test]
    fn single_word_vocabulary_is_deterministic() {
        const ONLY: Vocabulary = Vocabulary::new("only", &["solo"]);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(sample(&ONLY, &mut rng), "solo");
        assert_eq!(ONLY.name(), "only");
    }
}
