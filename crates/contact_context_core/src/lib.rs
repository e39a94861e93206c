//! Contact context core: contact/address store, synthetic seeding and the
//! lookup tools exposed to external callers.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod seed;
pub mod service;
pub mod tool;

pub use config::{ConfigError, SeedConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::address::{Address, AddressId, NewAddress};
pub use model::contact::{Contact, ContactId, NewContact};
pub use repo::address_repo::{AddressRepository, SqliteAddressRepository};
pub use repo::contact_repo::{ContactRepository, SqliteContactRepository};
pub use repo::{RepoError, RepoResult};
pub use seed::seeder::{DatabaseSeeder, SeedError, SeedOutcome, SeedResult};
pub use service::contact_context_service::ContactContextService;
pub use tool::contact_tools::{GET_CONTACT_ADDRESSES, GET_CONTACT_INFO};
pub use tool::registry::ToolRegistry;
pub use tool::{ToolDefinition, ToolProvider, ToolRegistryError, ToolResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
