//! Objects - command line entry point
//!
//! Resolves counties into full addresses and validates CPF/CNPJ documents.
//!
//! # Usage
//!
//! ```bash
//! # Resolve county 5 and attach street details
//! objects county 5 --place "Main St" --number 742 --zipcode 62701
//!
//! # Validate a document
//! objects document 529.982.247-25 --label
//!
//! # Check the database
//! OBJECTS_DATABASE_URL=postgres://... objects health
//! ```
//!
//! # Environment Variables
//!
//! * `OBJECTS_DATABASE_URL` - PostgreSQL connection string (falls back to `DATABASE_URL`)
//! * `OBJECTS_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `OBJECTS_MAX_CONNECTIONS` - Pool size (default: 5)
//! * `OBJECTS_CONNECT_TIMEOUT_SECS` - Connection timeout (default: 30)

use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use core_kernel::CountyId;
use domain_party::AddressPatch;
use infra_db::{create_pool, PostgresGeographyAdapter};
use interface_cli::{commands, config::CliConfig, error::exit_code_of, CliError};

#[derive(Parser)]
#[command(name = "objects")]
#[command(about = "Address lookups and Brazilian document validation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolves a county id into country, state and county
    County {
        /// Index in the counties table, with or without the CNTY- prefix
        id: CountyId,
        #[arg(long)]
        neighborhood: Option<String>,
        /// Road, avenue, ...
        #[arg(long)]
        place: Option<String>,
        #[arg(long)]
        number: Option<String>,
        #[arg(long)]
        zipcode: Option<String>,
        /// Complementary information
        #[arg(long)]
        detail: Option<String>,
    },
    /// Validates a CPF or CNPJ
    Document {
        raw: String,
        /// Prefix the output with the document type
        #[arg(short, long)]
        label: bool,
    },
    /// Checks that the geography store answers
    Health,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = match CliConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            let err = CliError::from(err);
            eprintln!("error: {err}");
            return ExitCode::from(err.exit_code() as u8);
        }
    };
    init_tracing(&config.log_level);

    match run(cli, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(exit_code_of(&err) as u8)
        }
    }
}

async fn run(cli: Cli, config: &CliConfig) -> anyhow::Result<()> {
    match cli.command {
        Commands::Document { raw, label } => {
            let report = commands::document(&raw, label)?;
            println!("{}", report.formatted);
            tracing::debug!(kind = %report.kind, number = %report.number, "Document valid");
        }
        Commands::County {
            id,
            neighborhood,
            place,
            number,
            zipcode,
            detail,
        } => {
            let adapter = connect(config).await?;
            let patch = AddressPatch {
                neighborhood,
                place,
                number,
                zipcode,
                detail,
            };
            let dump = commands::county(&adapter, id, patch).await?;
            let text = serde_json::to_string_pretty(&dump).map_err(CliError::from)?;
            println!("{text}");
        }
        Commands::Health => {
            let adapter = connect(config).await?;
            let result = commands::health(&adapter).await;
            println!("{}", serde_json::to_string_pretty(&result).map_err(CliError::from)?);
            commands::require_operational(&result)?;
        }
    }
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}

async fn connect(config: &CliConfig) -> anyhow::Result<PostgresGeographyAdapter> {
    tracing::info!(max_connections = config.max_connections, "Connecting to database...");
    let pool = create_pool(config.database_config())
        .await
        .map_err(CliError::from)
        .context("could not open the geography database")?;
    Ok(PostgresGeographyAdapter::new(pool))
}
