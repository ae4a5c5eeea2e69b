//! Command-line interface for chembl-enrich.
//!
//! Available commands:
//!
//! - **enrich**: Resolve every name in an input CSV and write the metadata
//!   and targets tables
//! - **resolve**: Resolve a single name and print the result
//!
//! ## Usage
//!
//! ```text
//! # Enrich a drug list
//! chembl-enrich enrich DILIrank.csv
//!
//! # Custom output paths and a faster polling interval
//! chembl-enrich enrich drugs.csv --meta-out meta.csv --targets-out targets.csv --sleep-ms 100
//!
//! # Look up a single compound, JSON output for scripting
//! chembl-enrich resolve aspirin --format json
//! ```

use clap::{Parser, Subcommand};

pub mod enrich;
pub mod resolve;

#[derive(Parser)]
#[command(name = "chembl-enrich")]
#[command(version)]
#[command(about = "Resolve drug names to ChEMBL IDs and fetch structures and mechanisms")]
#[command(
    long_about = "chembl-enrich resolves free-text drug names against the ChEMBL compound database.\n\nFor each name it tries an exact preferred-name match, falls back to a bounded free-text search, ranks the candidates, verifies the top hits against their synonym lists, and fetches canonical SMILES, InChIKey, and mechanism-of-action data for resolved small molecules."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (applies to `resolve`)
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Enrich a CSV of drug names with ChEMBL structures and mechanisms
    Enrich(enrich::EnrichArgs),

    /// Resolve a single drug name
    Resolve(resolve::ResolveArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Remote-endpoint options shared by both subcommands
#[derive(clap::Args)]
pub struct ClientArgs {
    /// Base URL of the ChEMBL REST API
    #[arg(long, default_value = crate::client::chembl::DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Courtesy pause between remote calls, in milliseconds
    #[arg(long, default_value = "250")]
    pub sleep_ms: u64,

    /// Maximum free-text search hits to inspect per name
    #[arg(long, default_value = "5")]
    pub max_hits: usize,

    /// How many top-ranked hits to verify against synonym lists
    #[arg(long, default_value = "3")]
    pub deep_check: usize,
}

impl ClientArgs {
    /// Build the HTTP client and resolver configuration from the flags
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn build(
        &self,
    ) -> anyhow::Result<(crate::client::ChemblClient, crate::resolve::ResolverConfig)> {
        let pacer = if self.sleep_ms == 0 {
            crate::client::Pacer::NoDelay
        } else {
            crate::client::Pacer::FixedDelay(std::time::Duration::from_millis(self.sleep_ms))
        };
        let client = crate::client::ChemblClient::new(&self.base_url, pacer)?;
        let config = crate::resolve::ResolverConfig {
            max_hits: self.max_hits,
            deep_check: self.deep_check,
        };
        Ok((client, config))
    }
}
