//! Access to the remote compound database.
//!
//! The resolver never talks to ChEMBL directly; it goes through the
//! [`CompoundDatabase`] trait so the real HTTP client can be swapped for a
//! fake in tests. Every method is best-effort from the caller's point of
//! view: the resolver degrades any [`ClientError`] to "no result" and keeps
//! going.

use thiserror::Error;

use crate::core::{Candidate, ChemblId, Mechanism, MoleculeRecord};

pub mod chembl;
pub mod pacing;

pub use chembl::ChemblClient;
pub use pacing::{Pacer, DEFAULT_PAUSE};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Capability set exposed by the remote compound database
pub trait CompoundDatabase {
    /// Case-insensitive preferred-name lookup; at most one hit.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` when the remote call fails; callers treat any
    /// error as "no result".
    fn exact_lookup(&self, name: &str) -> Result<Option<Candidate>, ClientError>;

    /// Free-text search, truncated to the first `limit` hits.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` when the remote call fails.
    fn search(&self, name: &str, limit: usize) -> Result<Vec<Candidate>, ClientError>;

    /// Fetch the full record for an identifier; `Ok(None)` when unknown.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` when the remote call fails.
    fn get(&self, id: &ChemblId) -> Result<Option<MoleculeRecord>, ClientError>;

    /// All mechanism-of-action rows recorded for an identifier.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` when the remote call fails.
    fn mechanisms(&self, id: &ChemblId) -> Result<Vec<Mechanism>, ClientError>;
}
