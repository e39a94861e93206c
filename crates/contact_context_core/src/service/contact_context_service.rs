//! Contact lookup service.
//!
//! # Responsibility
//! - Answer "who owns this email" and "where does contact X live" lookups.
//!
//! # Invariants
//! - Both lookups are thin pass-throughs; no input validation.
//! - Not found is `Ok(None)` / `Ok(vec![])`; store failures propagate unchanged.

use crate::model::address::Address;
use crate::model::contact::{Contact, ContactId};
use crate::repo::address_repo::AddressRepository;
use crate::repo::contact_repo::ContactRepository;
use crate::repo::RepoResult;
use log::debug;

/// Read-only lookups over contacts and addresses.
pub struct ContactContextService<C: ContactRepository, A: AddressRepository> {
    contacts: C,
    addresses: A,
}

impl<C: ContactRepository, A: AddressRepository> ContactContextService<C, A> {
    pub fn new(contacts: C, addresses: A) -> Self {
        Self {
            contacts,
            addresses,
        }
    }

    /// Returns the contact stored under `email`, if any.
    ///
    /// Malformed input simply does not match.
    pub fn get_contact_info(&self, email: &str) -> RepoResult<Option<Contact>> {
        let contact = self.contacts.find_contact_by_email(email)?;
        debug!(
            "event=contact_lookup module=service status=ok found={}",
            contact.is_some()
        );
        Ok(contact)
    }

    /// Returns every address referencing `contact_id`.
    ///
    /// An unknown contact and a contact without addresses both yield an
    /// empty list.
    pub fn get_contact_addresses(&self, contact_id: ContactId) -> RepoResult<Vec<Address>> {
        let addresses = self.addresses.find_addresses_by_contact_id(contact_id)?;
        debug!(
            "event=address_lookup module=service status=ok contact_id={contact_id} count={}",
            addresses.len()
        );
        Ok(addresses)
    }
}
