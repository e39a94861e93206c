//! Contact domain model.

use serde::{Deserialize, Serialize};

/// Store-assigned surrogate identifier of a contact.
pub type ContactId = i64;

/// Contact that has not been persisted yet and therefore has no identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub first_name: String,
    pub last_name: String,
    /// Intended to be unique; the store does not enforce it.
    pub email: String,
    /// `DDD-DDD-DDDD` for generated data.
    pub phone_number: String,
}

impl NewContact {
    /// Attaches the identifier the store assigned on insert.
    pub fn persisted(self, contact_id: ContactId) -> Contact {
        Contact {
            contact_id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone_number: self.phone_number,
        }
    }
}

/// Persisted contact record.
///
/// Serialized in camelCase because that is the shape tool callers receive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub contact_id: ContactId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
}
