//! Core use-case services.
//!
//! # Responsibility
//! - Expose read-only lookups to callers outside the core.
//! - Keep callers decoupled from storage details.

pub mod contact_context_service;
