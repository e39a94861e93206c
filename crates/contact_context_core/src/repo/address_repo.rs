//! Address repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist addresses that reference already persisted contacts.
//! - Answer "all addresses of contact X" lookups.
//!
//! # Invariants
//! - The repository does not verify that `contact_id` exists; callers do.
//! - Lookup result order is not part of the contract.

use crate::model::address::{Address, AddressId, NewAddress};
use crate::model::contact::ContactId;
use crate::repo::{count_rows, ensure_table_exists, RepoResult};
use rusqlite::{params, Connection, Row};

const ADDRESS_SELECT_SQL: &str = "SELECT
    address_id,
    contact_id,
    street_address,
    city,
    state_province,
    zip_code,
    country
FROM addresses";

const ADDRESS_INSERT_SQL: &str = "INSERT INTO addresses (
    contact_id,
    street_address,
    city,
    state_province,
    zip_code,
    country
) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
RETURNING address_id;";

/// Repository interface for address storage.
pub trait AddressRepository {
    fn create_address(&self, address: &NewAddress) -> RepoResult<Address>;
    /// Persists a batch atomically.
    fn create_addresses(&self, addresses: &[NewAddress]) -> RepoResult<()>;
    fn count_addresses(&self) -> RepoResult<u64>;
    fn find_addresses_by_contact_id(&self, contact_id: ContactId) -> RepoResult<Vec<Address>>;
}

/// SQLite-backed address repository.
pub struct SqliteAddressRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAddressRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table_exists(conn, "addresses")?;
        Ok(Self { conn })
    }
}

impl AddressRepository for SqliteAddressRepository<'_> {
    fn create_address(&self, address: &NewAddress) -> RepoResult<Address> {
        insert_address(self.conn, address)
    }

    fn create_addresses(&self, addresses: &[NewAddress]) -> RepoResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        for address in addresses {
            insert_address(&tx, address)?;
        }
        tx.commit()?;
        Ok(())
    }

    fn count_addresses(&self) -> RepoResult<u64> {
        count_rows(self.conn, "addresses")
    }

    fn find_addresses_by_contact_id(&self, contact_id: ContactId) -> RepoResult<Vec<Address>> {
        let mut stmt = self.conn.prepare_cached(&format!(
            "{ADDRESS_SELECT_SQL}
             WHERE contact_id = ?1
             ORDER BY address_id ASC;"
        ))?;
        let mut rows = stmt.query([contact_id])?;
        let mut addresses = Vec::new();

        while let Some(row) = rows.next()? {
            addresses.push(parse_address_row(row)?);
        }

        Ok(addresses)
    }
}

fn insert_address(conn: &Connection, address: &NewAddress) -> RepoResult<Address> {
    let mut stmt = conn.prepare_cached(ADDRESS_INSERT_SQL)?;
    let address_id: AddressId = stmt.query_row(
        params![
            address.contact_id,
            address.street_address.as_str(),
            address.city.as_str(),
            address.state_province.as_str(),
            address.zip_code.as_str(),
            address.country.as_str(),
        ],
        |row| row.get(0),
    )?;
    Ok(address.clone().persisted(address_id))
}

fn parse_address_row(row: &Row<'_>) -> rusqlite::Result<Address> {
    Ok(Address {
        address_id: row.get("address_id")?,
        contact_id: row.get("contact_id")?,
        street_address: row.get("street_address")?,
        city: row.get("city")?,
        state_province: row.get("state_province")?,
        zip_code: row.get("zip_code")?,
        country: row.get("country")?,
    })
}
