//! Synthetic contact/address seeding.
//!
//! # Responsibility
//! - Generate realistic-looking, internally consistent records from fixed
//!   vocabularies and an injected random source.
//! - Populate an under-filled store once at startup.
//!
//! # Invariants
//! - Every generated address references a contact persisted earlier in the
//!   same run.
//! - Generation is pure; persistence goes through repositories only.

pub mod generator;
pub mod seeder;
pub mod vocabulary;
