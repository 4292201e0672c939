//! Command-line interface for schema-mock
//!
//! # Usage Examples
//!
//! ```bash
//! # 20 users as pretty JSON, reproducible
//! schema-mock generate --schema users.yaml --count 20 --seed demo
//!
//! # German locale, one document per line, to a file
//! schema-mock generate --schema users.yaml --locale de --format jsonl -o users.jsonl
//!
//! # Pin relative dates for byte-identical output across days
//! schema-mock generate --schema users.yaml --seed 1 --reference-date 2024-01-01
//!
//! # Discover what overrides can call
//! schema-mock locales
//! schema-mock methods
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use schema_mock::args::GenerateArgs;
use schema_mock::output::write_values;
use schema_mock::{MockConfig, MockSchema, Mocker, Provider};
use std::fs::File;
use std::io::{self, BufWriter};

#[derive(Parser)]
#[command(name = "schema-mock")]
#[command(about = "Generate realistic mock data from a schema description")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate mock data for a schema file
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },

    /// List the built-in locale codes
    Locales,

    /// List the method identifiers usable in overrides
    Methods,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { args } => run_generate(args).await,
        Commands::Locales => {
            for code in Mocker::available_locales() {
                println!("{code}");
            }
            Ok(())
        }
        Commands::Methods => {
            for method in Provider::methods() {
                println!("{method}");
            }
            Ok(())
        }
    }
}

async fn run_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let schema = MockSchema::from_file(&args.schema)
        .with_context(|| format!("Failed to load schema from {:?}", args.schema))?;
    let options = args.options(&schema)?;

    let mocker = Mocker::new();
    let mut generator = mocker.create(schema.schema.clone(), MockConfig::from_schema(&schema));
    let values = generator.generate(options).await?;

    tracing::info!(
        "Generated {} items from {:?} ({:?})",
        values.len(),
        args.schema,
        args.format
    );

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {path:?}"))?;
            write_values(BufWriter::new(file), values, args.format)
        }
        None => write_values(io::stdout().lock(), values, args.format),
    }
}
