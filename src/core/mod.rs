//! Core data types for candidates, resolved molecules, and mechanisms.

pub mod mechanism;
pub mod molecule;
pub mod types;

pub use mechanism::{Mechanism, MechanismRow};
pub use molecule::{Candidate, MoleculeRecord};
pub use types::{ChemblId, Resolution, ResolutionStatus};
