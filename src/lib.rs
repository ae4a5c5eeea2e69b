//! # chembl-enrich
//!
//! A library for resolving free-text drug names to ChEMBL identifiers and
//! enriching them with structure and mechanism-of-action data.
//!
//! Drug lists from the clinical literature identify compounds by name only,
//! and the same drug appears under brand names, salts, and spelling
//! variants. `chembl-enrich` maps each name to a stable ChEMBL identifier,
//! fetches the canonical SMILES and InChIKey for resolved small molecules,
//! and collects their recorded mechanisms of action.
//!
//! ## Features
//!
//! - **Exact-first resolution**: case-insensitive preferred-name lookup
//!   short-circuits the free-text search
//! - **Heuristic ranking**: name equality, containment, and development
//!   phase score the search hits deterministically
//! - **Synonym verification**: top hits are checked against their full
//!   synonym lists before being accepted
//! - **Best-effort fetching**: remote failures degrade to status fields in
//!   the output instead of aborting the run
//!
//! ## Example
//!
//! ```rust,no_run
//! use chembl_enrich::{ChemblClient, Resolver};
//!
//! let client = ChemblClient::public().unwrap();
//! let resolver = Resolver::new(&client);
//!
//! let resolution = resolver.resolve("aspirin");
//! println!("{}: {:?}", resolution.query_name, resolution.chembl_id);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Data types for candidates, resolutions, and mechanisms
//! - [`client`]: The `CompoundDatabase` trait and the ChEMBL HTTP client
//! - [`resolve`]: Candidate scoring and the resolution engine
//! - [`tables`]: CSV input loading and the two output tables
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod client;
pub mod core;
pub mod resolve;
pub mod tables;

// Re-export commonly used types for convenience
pub use client::{ChemblClient, ClientError, CompoundDatabase, Pacer};
pub use core::{Candidate, ChemblId, Mechanism, MechanismRow, MoleculeRecord, Resolution, ResolutionStatus};
pub use resolve::{EnrichReport, Resolver, ResolverConfig};
