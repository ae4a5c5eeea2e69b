use crate::core::types::ChemblId;

/// A partial molecule record returned by exact lookup or free-text search
///
/// Candidates are ephemeral: they exist only long enough to be ranked and
/// (for the top few) deep-verified, then discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Identifier, when the search backend supplied one
    pub chembl_id: Option<ChemblId>,
    /// Canonical display name in the database
    pub pref_name: Option<String>,
    /// Development/approval phase; `None` when absent or non-numeric
    pub max_phase: Option<f64>,
}

/// A full molecule record from get-by-identifier
#[derive(Debug, Clone, PartialEq)]
pub struct MoleculeRecord {
    pub chembl_id: ChemblId,
    pub pref_name: Option<String>,
    /// e.g. "Small molecule", "Antibody", "Protein"
    pub molecule_type: Option<String>,
    pub canonical_smiles: Option<String>,
    pub standard_inchi_key: Option<String>,
    pub synonyms: Vec<String>,
}

impl MoleculeRecord {
    /// Lowercased, whitespace-trimmed set of all names this record answers to:
    /// the preferred name plus every synonym. Used by deep verification.
    #[must_use]
    pub fn known_names(&self) -> std::collections::HashSet<String> {
        let mut names = std::collections::HashSet::new();
        if let Some(pref) = &self.pref_name {
            names.insert(pref.to_lowercase().trim().to_string());
        }
        for syn in &self.synonyms {
            let s = syn.to_lowercase().trim().to_string();
            if !s.is_empty() {
                names.insert(s);
            }
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_names_includes_pref_name_and_synonyms() {
        let record = MoleculeRecord {
            chembl_id: ChemblId::new("CHEMBL25"),
            pref_name: Some("ASPIRIN".to_string()),
            molecule_type: Some("Small molecule".to_string()),
            canonical_smiles: Some("CC(=O)Oc1ccccc1C(=O)O".to_string()),
            standard_inchi_key: Some("BSYNRYMUTXBXSQ-UHFFFAOYSA-N".to_string()),
            synonyms: vec!["Acetylsalicylic acid ".to_string(), String::new()],
        };

        let names = record.known_names();
        assert!(names.contains("aspirin"));
        assert!(names.contains("acetylsalicylic acid"));
        // Blank synonyms are dropped
        assert!(!names.contains(""));
    }
}
