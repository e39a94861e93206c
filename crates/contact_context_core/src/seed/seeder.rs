//! Startup seeding of an under-populated store.
//!
//! # Responsibility
//! - Decide whether seeding is needed from the current contact count.
//! - Persist contacts first, then addresses built from the returned ids.
//!
//! # Invariants
//! - A store holding `threshold` or more contacts receives no writes.
//! - Each batch persist is all-or-nothing; no retry or partial recovery.
//! - The guard is coarse: a store below the threshold gets a full batch.

use crate::config::{ConfigError, SeedConfig};
use crate::repo::address_repo::AddressRepository;
use crate::repo::contact_repo::ContactRepository;
use crate::repo::RepoError;
use crate::seed::generator::{generate_addresses, generate_contacts};
use log::{error, info};
use rand::Rng;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

pub type SeedResult<T> = Result<T, SeedError>;

/// Seeding failure.
#[derive(Debug)]
pub enum SeedError {
    Config(ConfigError),
    Repo(RepoError),
}

impl Display for SeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid seed config: {err}"),
            Self::Repo(err) => write!(f, "seeding failed: {err}"),
        }
    }
}

impl Error for SeedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<ConfigError> for SeedError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<RepoError> for SeedError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// What a seeding run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Store was already populated; nothing was written.
    Skipped { existing_contacts: u64 },
    Seeded {
        contacts_created: usize,
        addresses_created: usize,
        total_contacts: u64,
        total_addresses: u64,
    },
}

impl Display for SeedOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Skipped { existing_contacts } => {
                write!(f, "skipped existing_contacts={existing_contacts}")
            }
            Self::Seeded {
                contacts_created,
                addresses_created,
                total_contacts,
                total_addresses,
            } => write!(
                f,
                "contacts_created={contacts_created} addresses_created={addresses_created} total_contacts={total_contacts} total_addresses={total_addresses}"
            ),
        }
    }
}

/// Populates contacts and addresses through repository contracts.
pub struct DatabaseSeeder<C: ContactRepository, A: AddressRepository> {
    contacts: C,
    addresses: A,
}

impl<C: ContactRepository, A: AddressRepository> DatabaseSeeder<C, A> {
    pub fn new(contacts: C, addresses: A) -> Self {
        Self {
            contacts,
            addresses,
        }
    }

    /// Seeds one batch unless the store already meets `config.threshold`.
    ///
    /// # Errors
    /// - `SeedError::Config` when `config` fails validation (before any read).
    /// - `SeedError::Repo` when a count or batch persist fails.
    pub fn run<R: Rng + ?Sized>(
        &self,
        config: &SeedConfig,
        rng: &mut R,
    ) -> SeedResult<SeedOutcome> {
        config.validate()?;
        let started_at = Instant::now();

        let existing_contacts = self.contacts.count_contacts()?;
        if existing_contacts >= config.threshold {
            info!(
                "event=seed_skip module=seed status=ok existing_contacts={existing_contacts} threshold={}",
                config.threshold
            );
            return Ok(SeedOutcome::Skipped { existing_contacts });
        }

        info!(
            "event=seed_run module=seed status=start existing_contacts={existing_contacts} batch_size={}",
            config.batch_size
        );

        let outcome = self.seed_batch(config, rng).inspect_err(|err| {
            error!(
                "event=seed_run module=seed status=error duration_ms={} error={err}",
                started_at.elapsed().as_millis()
            );
        })?;
        info!(
            "event=seed_run module=seed status=ok duration_ms={} {outcome}",
            started_at.elapsed().as_millis()
        );
        Ok(outcome)
    }

    fn seed_batch<R: Rng + ?Sized>(
        &self,
        config: &SeedConfig,
        rng: &mut R,
    ) -> SeedResult<SeedOutcome> {
        let new_contacts = generate_contacts(config.batch_size, rng);
        let saved_contacts = self.contacts.create_contacts(&new_contacts)?;

        let new_addresses =
            generate_addresses(&saved_contacts, config.secondary_address_probability, rng);
        self.addresses.create_addresses(&new_addresses)?;

        Ok(SeedOutcome::Seeded {
            contacts_created: saved_contacts.len(),
            addresses_created: new_addresses.len(),
            total_contacts: self.contacts.count_contacts()?,
            total_addresses: self.addresses.count_addresses()?,
        })
    }
}
