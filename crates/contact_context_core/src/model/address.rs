//! Address domain model.

use crate::model::contact::ContactId;
use serde::{Deserialize, Serialize};

/// Store-assigned surrogate identifier of an address.
pub type AddressId = i64;

/// Address that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAddress {
    /// Owning contact. Must reference an already persisted contact.
    pub contact_id: ContactId,
    pub street_address: String,
    pub city: String,
    pub state_province: String,
    /// Five digits, zero-padded.
    pub zip_code: String,
    pub country: String,
}

impl NewAddress {
    /// Attaches the identifier the store assigned on insert.
    pub fn persisted(self, address_id: AddressId) -> Address {
        Address {
            address_id,
            contact_id: self.contact_id,
            street_address: self.street_address,
            city: self.city,
            state_province: self.state_province,
            zip_code: self.zip_code,
            country: self.country,
        }
    }
}

/// Persisted address record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub address_id: AddressId,
    pub contact_id: ContactId,
    pub street_address: String,
    pub city: String,
    pub state_province: String,
    pub zip_code: String,
    pub country: String,
}
