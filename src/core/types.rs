use serde::{Deserialize, Serialize};

/// Stable ChEMBL identifier for a molecule or target (e.g. `CHEMBL25`)
///
/// Identifiers come from the remote database and are never rewritten locally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChemblId(pub String);

impl ChemblId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ChemblId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of resolving one query name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionStatus {
    /// Small molecule with a canonical SMILES
    Ok,
    /// No candidates found by exact lookup or search
    NoHit,
    /// Candidates existed but ranking produced no usable identifier
    NoCandidate,
    /// Resolved, but not a small molecule or missing a SMILES
    NonSmallOrNoSmiles,
}

impl ResolutionStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::NoHit => "no_hit",
            Self::NoCandidate => "no_candidate",
            Self::NonSmallOrNoSmiles => "non_small_or_no_smiles",
        }
    }
}

impl std::fmt::Display for ResolutionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Metadata row for one query name: exactly one per input name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub query_name: String,
    pub chembl_id: Option<ChemblId>,
    pub smiles: Option<String>,
    pub inchi_key: Option<String>,
    pub molecule_type: Option<String>,
    pub status: ResolutionStatus,
}

impl Resolution {
    /// A resolution with no identifier and all structure fields empty
    #[must_use]
    pub fn unresolved(query_name: impl Into<String>, status: ResolutionStatus) -> Self {
        Self {
            query_name: query_name.into(),
            chembl_id: None,
            smiles: None,
            inchi_key: None,
            molecule_type: None,
            status,
        }
    }
}
