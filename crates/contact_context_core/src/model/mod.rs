//! Domain model for contacts and their addresses.
//!
//! # Responsibility
//! - Define the records persisted by the store and returned by lookups.
//! - Separate not-yet-persisted shapes (`New*`) from persisted ones.
//!
//! # Invariants
//! - Identifiers are assigned by the store and never change afterwards.
//! - `Address::contact_id` is a reference value, not an ownership pointer.

pub mod address;
pub mod contact;
