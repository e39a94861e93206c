//! Contact repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist contacts and hand back store-assigned identifiers.
//! - Answer exact-email point lookups.
//!
//! # Invariants
//! - `create_contacts` returns records in input order.
//! - Identifiers are available as soon as a create call returns.

use crate::model::contact::{Contact, ContactId, NewContact};
use crate::repo::{count_rows, ensure_table_exists, RepoResult};
use rusqlite::{params, Connection, OptionalExtension, Row};

const CONTACT_SELECT_SQL: &str = "SELECT
    contact_id,
    first_name,
    last_name,
    email,
    phone_number
FROM contacts";

const CONTACT_INSERT_SQL: &str = "INSERT INTO contacts (
    first_name,
    last_name,
    email,
    phone_number
) VALUES (?1, ?2, ?3, ?4)
RETURNING contact_id;";

/// Repository interface for contact storage.
pub trait ContactRepository {
    /// Persists one contact and returns it with its assigned id.
    fn create_contact(&self, contact: &NewContact) -> RepoResult<Contact>;
    /// Persists a batch atomically; output order matches input order.
    fn create_contacts(&self, contacts: &[NewContact]) -> RepoResult<Vec<Contact>>;
    fn count_contacts(&self) -> RepoResult<u64>;
    /// Exact, case-sensitive email match. Lowest id wins on duplicates.
    fn find_contact_by_email(&self, email: &str) -> RepoResult<Option<Contact>>;
}

/// SQLite-backed contact repository.
pub struct SqliteContactRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteContactRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table_exists(conn, "contacts")?;
        Ok(Self { conn })
    }
}

impl ContactRepository for SqliteContactRepository<'_> {
    fn create_contact(&self, contact: &NewContact) -> RepoResult<Contact> {
        insert_contact(self.conn, contact)
    }

    fn create_contacts(&self, contacts: &[NewContact]) -> RepoResult<Vec<Contact>> {
        // Repositories share one connection, so the transaction is taken
        // through `&Connection`.
        let tx = self.conn.unchecked_transaction()?;
        let mut created = Vec::with_capacity(contacts.len());
        for contact in contacts {
            created.push(insert_contact(&tx, contact)?);
        }
        tx.commit()?;
        Ok(created)
    }

    fn count_contacts(&self) -> RepoResult<u64> {
        count_rows(self.conn, "contacts")
    }

    fn find_contact_by_email(&self, email: &str) -> RepoResult<Option<Contact>> {
        let mut stmt = self.conn.prepare_cached(&format!(
            "{CONTACT_SELECT_SQL}
             WHERE email = ?1
             ORDER BY contact_id ASC
             LIMIT 1;"
        ))?;
        let contact = stmt.query_row([email], parse_contact_row).optional()?;
        Ok(contact)
    }
}

fn insert_contact(conn: &Connection, contact: &NewContact) -> RepoResult<Contact> {
    let mut stmt = conn.prepare_cached(CONTACT_INSERT_SQL)?;
    let contact_id: ContactId = stmt.query_row(
        params![
            contact.first_name.as_str(),
            contact.last_name.as_str(),
            contact.email.as_str(),
            contact.phone_number.as_str(),
        ],
        |row| row.get(0),
    )?;
    Ok(contact.clone().persisted(contact_id))
}

fn parse_contact_row(row: &Row<'_>) -> rusqlite::Result<Contact> {
    Ok(Contact {
        contact_id: row.get("contact_id")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        email: row.get("email")?,
        phone_number: row.get("phone_number")?,
    })
}
