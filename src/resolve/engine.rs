use tracing::{debug, info, warn};

use crate::client::CompoundDatabase;
use crate::core::{
    Candidate, ChemblId, MechanismRow, Resolution, ResolutionStatus,
};
use crate::resolve::scoring::{first_token, normalize, rank_candidates};

/// Default cap on free-text search hits inspected per name
pub const DEFAULT_MAX_HITS: usize = 5;

/// Default number of top-ranked candidates to deep-verify
pub const DEFAULT_DEEP_CHECK: usize = 3;

/// Molecule type required for a resolution to count as usable
const SMALL_MOLECULE: &str = "small molecule";

/// Configuration for the resolver
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Maximum free-text search hits to rank
    pub max_hits: usize,
    /// How many top-ranked candidates to verify against synonym sets
    pub deep_check: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_hits: DEFAULT_MAX_HITS,
            deep_check: DEFAULT_DEEP_CHECK,
        }
    }
}

/// Everything produced by a batch run: one [`Resolution`] per query name
/// plus the mechanism rows of every molecule that resolved with status `ok`
#[derive(Debug, Clone, Default)]
pub struct EnrichReport {
    pub resolutions: Vec<Resolution>,
    pub targets: Vec<MechanismRow>,
}

impl EnrichReport {
    /// Count of resolutions with status `ok`
    #[must_use]
    pub fn ok_count(&self) -> usize {
        self.resolutions
            .iter()
            .filter(|r| r.status == ResolutionStatus::Ok)
            .count()
    }
}

/// Resolves free-text compound names against a [`CompoundDatabase`].
///
/// Every remote failure is degraded to absence: a name that cannot be
/// resolved gets a status other than `ok`, and the run continues.
pub struct Resolver<'a, D: CompoundDatabase> {
    db: &'a D,
    config: ResolverConfig,
}

impl<'a, D: CompoundDatabase> Resolver<'a, D> {
    /// Create a resolver with default configuration
    pub fn new(db: &'a D) -> Self {
        Self {
            db,
            config: ResolverConfig::default(),
        }
    }

    /// Create a resolver with custom configuration
    pub fn with_config(db: &'a D, config: ResolverConfig) -> Self {
        Self { db, config }
    }

    /// Resolve a single query name to a metadata record.
    ///
    /// Exact preferred-name lookup short-circuits the free-text search; when
    /// both come back empty the status is `no_hit`. Ranked candidates are
    /// deep-verified against their synonym sets before the structure fetch.
    pub fn resolve(&self, name: &str) -> Resolution {
        let candidates = match self.exact_candidates(name) {
            Some(candidate) => vec![candidate],
            None => self.search_candidates(name),
        };

        if candidates.is_empty() {
            debug!(name, "no candidates");
            return Resolution::unresolved(name, ResolutionStatus::NoHit);
        }

        let ranked = rank_candidates(candidates, name);
        let Some(chembl_id) = self.verify(&ranked, name) else {
            debug!(name, "candidates found but none usable");
            return Resolution::unresolved(name, ResolutionStatus::NoCandidate);
        };

        let (smiles, inchi_key, molecule_type) = self.fetch_structure(&chembl_id);
        let is_small_molecule = molecule_type
            .as_deref()
            .is_some_and(|t| t.eq_ignore_ascii_case(SMALL_MOLECULE));
        let status = if is_small_molecule && smiles.is_some() {
            ResolutionStatus::Ok
        } else {
            ResolutionStatus::NonSmallOrNoSmiles
        };

        Resolution {
            query_name: name.to_string(),
            chembl_id: Some(chembl_id),
            smiles,
            inchi_key,
            molecule_type,
            status,
        }
    }

    /// Fetch the mechanism rows for a resolved molecule.
    ///
    /// Only meaningful for `ok` resolutions; remote failure yields an empty
    /// list, never an error.
    pub fn mechanisms_for(&self, chembl_id: &ChemblId, query_name: &str) -> Vec<MechanismRow> {
        let mechanisms = match self.db.mechanisms(chembl_id) {
            Ok(mechanisms) => mechanisms,
            Err(err) => {
                warn!(%chembl_id, %err, "mechanism fetch failed");
                Vec::new()
            }
        };
        mechanisms
            .into_iter()
            .map(|m| MechanismRow::from_mechanism(m, chembl_id, query_name))
            .collect()
    }

    /// Resolve a whole batch of names, collecting both output tables.
    ///
    /// Names are expected to be trimmed, non-blank, and deduplicated; each
    /// one yields exactly one resolution. Mechanisms are fetched only for
    /// molecules whose status is `ok`.
    pub fn run(&self, names: &[String]) -> EnrichReport {
        let mut report = EnrichReport::default();

        for name in names {
            let resolution = self.resolve(name);

            if resolution.status == ResolutionStatus::Ok {
                if let Some(chembl_id) = &resolution.chembl_id {
                    report
                        .targets
                        .extend(self.mechanisms_for(chembl_id, name));
                }
            }

            info!(name, status = %resolution.status, "resolved");
            report.resolutions.push(resolution);
        }

        report
    }

    fn exact_candidates(&self, name: &str) -> Option<Candidate> {
        match self.db.exact_lookup(name) {
            Ok(candidate) => candidate,
            Err(err) => {
                warn!(name, %err, "exact lookup failed");
                None
            }
        }
    }

    fn search_candidates(&self, name: &str) -> Vec<Candidate> {
        match self.db.search(name, self.config.max_hits) {
            Ok(candidates) => candidates,
            Err(err) => {
                warn!(name, %err, "search failed");
                Vec::new()
            }
        }
    }

    /// Deep-verify the top-ranked candidates by synonym match.
    ///
    /// Accepts the first of the top `deep_check` candidates whose full
    /// record's name set contains the normalized query or its first token.
    /// When none match, falls back to the top-ranked candidate's identifier
    /// unconditionally.
    fn verify(&self, ranked: &[Candidate], name: &str) -> Option<ChemblId> {
        let query = normalize(name);
        let query_head = first_token(&query).map(str::to_string);

        for candidate in ranked.iter().take(self.config.deep_check) {
            let Some(chembl_id) = &candidate.chembl_id else {
                continue;
            };
            let record = match self.db.get(chembl_id) {
                Ok(Some(record)) => record,
                Ok(None) => continue,
                Err(err) => {
                    warn!(%chembl_id, %err, "deep check fetch failed");
                    continue;
                }
            };

            let known = record.known_names();
            let head_matches = query_head
                .as_deref()
                .is_some_and(|head| known.contains(head));
            if known.contains(&query) || head_matches {
                return Some(chembl_id.clone());
            }
        }

        ranked.first().and_then(|c| c.chembl_id.clone())
    }

    fn fetch_structure(
        &self,
        chembl_id: &ChemblId,
    ) -> (Option<String>, Option<String>, Option<String>) {
        match self.db.get(chembl_id) {
            Ok(Some(record)) => (
                record.canonical_smiles,
                record.standard_inchi_key,
                record.molecule_type,
            ),
            Ok(None) => (None, None, None),
            Err(err) => {
                warn!(%chembl_id, %err, "structure fetch failed");
                (None, None, None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientError;
    use crate::core::MoleculeRecord;

    /// Database that fails every call; the resolver must degrade to no_hit
    struct BrokenDatabase;

    impl CompoundDatabase for BrokenDatabase {
        fn exact_lookup(&self, _name: &str) -> Result<Option<Candidate>, ClientError> {
            Err(ClientError::Http("connection refused".to_string()))
        }

        fn search(&self, _name: &str, _limit: usize) -> Result<Vec<Candidate>, ClientError> {
            Err(ClientError::Http("connection refused".to_string()))
        }

        fn get(&self, _id: &ChemblId) -> Result<Option<MoleculeRecord>, ClientError> {
            Err(ClientError::Http("connection refused".to_string()))
        }

        fn mechanisms(&self, _id: &ChemblId) -> Result<Vec<crate::core::Mechanism>, ClientError> {
            Err(ClientError::Http("connection refused".to_string()))
        }
    }

    #[test]
    fn test_all_failures_degrade_to_no_hit() {
        let db = BrokenDatabase;
        let resolver = Resolver::new(&db);

        let resolution = resolver.resolve("aspirin");
        assert_eq!(resolution.status, ResolutionStatus::NoHit);
        assert!(resolution.chembl_id.is_none());
    }

    #[test]
    fn test_run_yields_one_resolution_per_name_even_when_broken() {
        let db = BrokenDatabase;
        let resolver = Resolver::new(&db);

        let names = vec!["aspirin".to_string(), "warfarin".to_string()];
        let report = resolver.run(&names);

        assert_eq!(report.resolutions.len(), 2);
        assert!(report.targets.is_empty());
        assert_eq!(report.ok_count(), 0);
    }

    #[test]
    fn test_mechanism_failure_yields_empty_list() {
        let db = BrokenDatabase;
        let resolver = Resolver::new(&db);

        let rows = resolver.mechanisms_for(&ChemblId::new("CHEMBL25"), "aspirin");
        assert!(rows.is_empty());
    }
}
