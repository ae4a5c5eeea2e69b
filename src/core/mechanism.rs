use serde::{Deserialize, Serialize};

use crate::core::types::ChemblId;

/// A mechanism-of-action record as returned by the database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mechanism {
    pub target_chembl_id: Option<ChemblId>,
    pub target_pref_name: Option<String>,
    pub target_organism: Option<String>,
    pub action_type: Option<String>,
    pub mechanism_of_action: Option<String>,
}

/// One output row of the targets table: a mechanism tied back to the
/// molecule it belongs to and the query name that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MechanismRow {
    pub molecule_chembl_id: ChemblId,
    pub target_chembl_id: Option<ChemblId>,
    pub target_pref_name: Option<String>,
    pub target_organism: Option<String>,
    pub action_type: Option<String>,
    pub mechanism_of_action: Option<String>,
    pub query_name: String,
}

impl MechanismRow {
    #[must_use]
    pub fn from_mechanism(
        mechanism: Mechanism,
        molecule_chembl_id: &ChemblId,
        query_name: &str,
    ) -> Self {
        Self {
            molecule_chembl_id: molecule_chembl_id.clone(),
            target_chembl_id: mechanism.target_chembl_id,
            target_pref_name: mechanism.target_pref_name,
            target_organism: mechanism.target_organism,
            action_type: mechanism.action_type,
            mechanism_of_action: mechanism.mechanism_of_action,
            query_name: query_name.to_string(),
        }
    }
}
