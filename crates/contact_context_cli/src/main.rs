//! Contact context CLI.
//!
//! Opens the contact store, seeds it when under-populated, registers the
//! lookup tools and answers one request.
//!
//! # Usage
//!
//! ```bash
//! # Seed a file database (no-op once it holds 100+ contacts)
//! contact-context --db contacts.db seed
//!
//! # List advertised tools
//! contact-context --db contacts.db tools
//!
//! # Invoke a tool with JSON arguments
//! contact-context --db contacts.db call getContactInfo '{"email":"jsmith0@example.com"}'
//! ```

use clap::{Parser, Subcommand};
use contact_context_core::db::{open_db, open_db_in_memory};
use contact_context_core::{
    default_log_level, init_logging, ContactContextService, DatabaseSeeder, SeedConfig,
    SeedOutcome, SqliteAddressRepository, SqliteContactRepository, ToolProvider, ToolRegistry,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rusqlite::Connection;
use serde_json::Value;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

type CliResult<T> = Result<T, Box<dyn Error>>;

#[derive(Parser)]
#[command(name = "contact-context")]
#[command(version, about = "Contact lookup tools over a seeded SQLite store")]
struct Cli {
    /// SQLite database file; an in-memory store is used when omitted
    #[arg(long)]
    db: Option<PathBuf>,

    /// Log level (`trace`, `debug`, `info`, `warn`, `error`)
    #[arg(long)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off when omitted
    #[arg(long)]
    log_dir: Option<String>,

    /// Skip seeding when the store holds at least this many contacts
    #[arg(long, default_value_t = contact_context_core::config::DEFAULT_SEED_THRESHOLD)]
    threshold: u64,

    /// Contacts generated per seeding run
    #[arg(long, default_value_t = contact_context_core::config::DEFAULT_SEED_BATCH_SIZE)]
    batch_size: usize,

    /// Probability that a contact gets a secondary PO box address
    #[arg(long, default_value_t = contact_context_core::config::DEFAULT_SECONDARY_ADDRESS_PROBABILITY)]
    secondary_probability: f64,

    /// Seed for the random source, for reproducible data
    #[arg(long)]
    rng_seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run startup seeding only and report the outcome
    Seed,
    /// Print advertised tool definitions as JSON
    Tools,
    /// Invoke a tool by name with a JSON arguments object
    Call {
        /// Tool name, e.g. `getContactInfo`
        name: String,
        /// JSON arguments, e.g. '{"email":"jsmith0@example.com"}'
        #[arg(default_value = "{}")]
        arguments: String,
    },
    /// Look up a contact by exact email
    Contact { email: String },
    /// List addresses of a contact
    Addresses { contact_id: i64 },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> CliResult<()> {
    if let Some(log_dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir)?;
    }

    let conn = match &cli.db {
        Some(path) => open_db(path)?,
        None => open_db_in_memory()?,
    };

    let outcome = seed(&conn, cli)?;
    let service = ContactContextService::new(
        SqliteContactRepository::try_new(&conn)?,
        SqliteAddressRepository::try_new(&conn)?,
    );

    match &cli.command {
        Commands::Seed => println!("{}", describe_outcome(&outcome)),
        Commands::Contact { email } => {
            print_json(&serde_json::to_value(service.get_contact_info(email)?)?)?;
        }
        Commands::Addresses { contact_id } => {
            print_json(&serde_json::to_value(
                service.get_contact_addresses(*contact_id)?,
            )?)?;
        }
        Commands::Tools => {
            let registry = tool_registry(service)?;
            print_json(&serde_json::to_value(registry.definitions())?)?;
        }
        Commands::Call { name, arguments } => {
            let arguments: Value = serde_json::from_str(arguments)?;
            let registry = tool_registry(service)?;
            print_json(&registry.call(name, &arguments)?)?;
        }
    }
    Ok(())
}

fn seed(conn: &Connection, cli: &Cli) -> CliResult<SeedOutcome> {
    let config = SeedConfig {
        threshold: cli.threshold,
        batch_size: cli.batch_size,
        secondary_address_probability: cli.secondary_probability,
    };
    let mut rng = match cli.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let seeder = DatabaseSeeder::new(
        SqliteContactRepository::try_new(conn)?,
        SqliteAddressRepository::try_new(conn)?,
    );
    Ok(seeder.run(&config, &mut rng)?)
}

fn tool_registry<'p>(provider: impl ToolProvider + 'p) -> CliResult<ToolRegistry<'p>> {
    let mut registry = ToolRegistry::new();
    registry.register(provider)?;
    Ok(registry)
}

fn describe_outcome(outcome: &SeedOutcome) -> String {
    match outcome {
        SeedOutcome::Skipped { existing_contacts } => {
            format!("Seeding skipped: store already holds {existing_contacts} contacts.")
        }
        SeedOutcome::Seeded {
            total_contacts,
            total_addresses,
            ..
        } => format!(
            "Seeding complete. Total contacts: {total_contacts}\nTotal addresses: {total_addresses}"
        ),
    }
}

fn print_json(value: &Value) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
