use serde::Deserialize;
use tracing::debug;

use crate::client::pacing::Pacer;
use crate::client::{ClientError, CompoundDatabase};
use crate::core::{Candidate, ChemblId, Mechanism, MoleculeRecord};

/// Public ChEMBL REST endpoint
pub const DEFAULT_BASE_URL: &str = "https://www.ebi.ac.uk/chembl/api/data";

/// Per-request timeout in seconds
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Blocking HTTP client for the ChEMBL web services.
///
/// All calls are synchronous; after every request the injected [`Pacer`] is
/// invoked to space out traffic to the public endpoint.
pub struct ChemblClient {
    base_url: String,
    client: reqwest::blocking::Client,
    pacer: Pacer,
}

impl ChemblClient {
    /// Create a client against `base_url` with the given pacing policy.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Http` if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(base_url: &str, pacer: Pacer) -> Result<Self, ClientError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| ClientError::Http(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            pacer,
        })
    }

    /// Client against the public ChEMBL endpoint with default pacing
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Http` if the HTTP client cannot be constructed.
    pub fn public() -> Result<Self, ClientError> {
        Self::new(DEFAULT_BASE_URL, Pacer::default())
    }

    /// GET `path` with `params`, decode JSON into `T`, then pace.
    fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<Option<T>, ClientError> {
        let url = format!("{}/{path}", self.base_url);
        debug!(%url, "GET");

        let response = self.client.get(&url).query(params).send();
        // Pace even on failure: the remote end still saw the request
        self.pacer.pause();

        let response = response.map_err(|e| ClientError::Http(e.to_string()))?;
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let decoded = response
            .json::<T>()
            .map_err(|e| ClientError::Decode(e.to_string()))?;
        Ok(Some(decoded))
    }
}

impl CompoundDatabase for ChemblClient {
    fn exact_lookup(&self, name: &str) -> Result<Option<Candidate>, ClientError> {
        let page: Option<WireMoleculePage> = self.get_json(
            "molecule.json",
            &[("pref_name__iexact", name), ("limit", "1")],
        )?;
        Ok(page
            .and_then(|p| p.molecules.into_iter().next())
            .map(WireMolecule::into_candidate))
    }

    fn search(&self, name: &str, limit: usize) -> Result<Vec<Candidate>, ClientError> {
        let limit_str = limit.to_string();
        let page: Option<WireMoleculePage> = self.get_json(
            "molecule/search.json",
            &[("q", name), ("limit", limit_str.as_str())],
        )?;
        let molecules = page.map(|p| p.molecules).unwrap_or_default();
        Ok(molecules
            .into_iter()
            .take(limit)
            .map(WireMolecule::into_candidate)
            .collect())
    }

    fn get(&self, id: &ChemblId) -> Result<Option<MoleculeRecord>, ClientError> {
        let path = format!("molecule/{id}.json");
        let molecule: Option<WireMolecule> = self.get_json(&path, &[])?;
        Ok(molecule.and_then(WireMolecule::into_record))
    }

    fn mechanisms(&self, id: &ChemblId) -> Result<Vec<Mechanism>, ClientError> {
        let page: Option<WireMechanismPage> = self.get_json(
            "mechanism.json",
            &[("molecule_chembl_id", id.as_str()), ("limit", "1000")],
        )?;
        Ok(page.map(|p| p.mechanisms).unwrap_or_default())
    }
}

// ---------------------------------------------------------------------------
// Wire formats
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct WireMoleculePage {
    #[serde(default)]
    molecules: Vec<WireMolecule>,
}

#[derive(Deserialize)]
struct WireMolecule {
    #[serde(default)]
    molecule_chembl_id: Option<String>,
    #[serde(default)]
    pref_name: Option<String>,
    /// ChEMBL serves this as a number, a numeric string, or null depending
    /// on the record; anything non-numeric counts as absent.
    #[serde(default, deserialize_with = "lenient_f64")]
    max_phase: Option<f64>,
    #[serde(default)]
    molecule_type: Option<String>,
    #[serde(default)]
    molecule_structures: Option<WireStructures>,
    #[serde(default)]
    molecule_synonyms: Vec<WireSynonym>,
}

#[derive(Deserialize)]
struct WireStructures {
    #[serde(default)]
    canonical_smiles: Option<String>,
    #[serde(default)]
    standard_inchi_key: Option<String>,
}

#[derive(Deserialize)]
struct WireSynonym {
    #[serde(default)]
    synonyms: Option<String>,
    #[serde(default)]
    molecule_synonym: Option<String>,
}

impl WireSynonym {
    fn into_name(self) -> Option<String> {
        self.synonyms
            .or(self.molecule_synonym)
            .filter(|s| !s.is_empty())
    }
}

#[derive(Deserialize)]
struct WireMechanismPage {
    #[serde(default)]
    mechanisms: Vec<Mechanism>,
}

impl WireMolecule {
    fn into_candidate(self) -> Candidate {
        Candidate {
            chembl_id: self.molecule_chembl_id.map(ChemblId::new),
            pref_name: self.pref_name,
            max_phase: self.max_phase,
        }
    }

    /// Full record; `None` when the payload carries no identifier
    fn into_record(self) -> Option<MoleculeRecord> {
        let chembl_id = ChemblId::new(self.molecule_chembl_id?);
        let (canonical_smiles, standard_inchi_key) = match self.molecule_structures {
            Some(s) => (s.canonical_smiles, s.standard_inchi_key),
            None => (None, None),
        };
        Some(MoleculeRecord {
            chembl_id,
            pref_name: self.pref_name,
            molecule_type: self.molecule_type,
            canonical_smiles,
            standard_inchi_key,
            synonyms: self
                .molecule_synonyms
                .into_iter()
                .filter_map(WireSynonym::into_name)
                .collect(),
        })
    }
}

/// Accept a JSON number, a numeric string, or anything else (as `None`)
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ChemblClient::new("http://localhost:9999/", Pacer::NoDelay).unwrap();
        assert_eq!(client.base_url, "http://localhost:9999");
    }

    #[test]
    fn test_wire_molecule_lenient_max_phase() {
        let as_number: WireMolecule =
            serde_json::from_str(r#"{"molecule_chembl_id":"CHEMBL25","max_phase":4}"#).unwrap();
        assert_eq!(as_number.max_phase, Some(4.0));

        let as_string: WireMolecule =
            serde_json::from_str(r#"{"molecule_chembl_id":"CHEMBL25","max_phase":"4.0"}"#).unwrap();
        assert_eq!(as_string.max_phase, Some(4.0));

        let junk: WireMolecule =
            serde_json::from_str(r#"{"molecule_chembl_id":"CHEMBL25","max_phase":"unknown"}"#)
                .unwrap();
        assert_eq!(junk.max_phase, None);

        let null: WireMolecule =
            serde_json::from_str(r#"{"molecule_chembl_id":"CHEMBL25","max_phase":null}"#).unwrap();
        assert_eq!(null.max_phase, None);
    }

    #[test]
    fn test_wire_molecule_into_record() {
        let json = r#"{
            "molecule_chembl_id": "CHEMBL25",
            "pref_name": "ASPIRIN",
            "molecule_type": "Small molecule",
            "molecule_structures": {
                "canonical_smiles": "CC(=O)Oc1ccccc1C(=O)O",
                "standard_inchi_key": "BSYNRYMUTXBXSQ-UHFFFAOYSA-N"
            },
            "molecule_synonyms": [
                {"molecule_synonym": "Acetylsalicylic acid", "synonyms": "Acetylsalicylic acid"},
                {"molecule_synonym": "ASA"}
            ]
        }"#;
        let record = serde_json::from_str::<WireMolecule>(json)
            .unwrap()
            .into_record()
            .unwrap();

        assert_eq!(record.chembl_id.as_str(), "CHEMBL25");
        assert_eq!(record.canonical_smiles.as_deref(), Some("CC(=O)Oc1ccccc1C(=O)O"));
        assert_eq!(record.synonyms, vec!["Acetylsalicylic acid", "ASA"]);
    }

    #[test]
    fn test_wire_molecule_without_id_yields_no_record() {
        let molecule: WireMolecule = serde_json::from_str(r#"{"pref_name":"MYSTERY"}"#).unwrap();
        assert!(molecule.into_record().is_none());
    }

    #[test]
    fn test_mechanism_page_decodes() {
        let json = r#"{"mechanisms":[{
            "target_chembl_id": "CHEMBL204",
            "target_pref_name": "Prothrombin",
            "target_organism": "Homo sapiens",
            "action_type": "INHIBITOR",
            "mechanism_of_action": "Prothrombin inhibitor"
        }]}"#;
        let page: WireMechanismPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.mechanisms.len(), 1);
        assert_eq!(page.mechanisms[0].action_type.as_deref(), Some("INHIBITOR"));
    }
}
