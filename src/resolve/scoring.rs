use crate::core::Candidate;

/// Points for an exact normalized preferred-name match
const EXACT_NAME_POINTS: f64 = 200.0;

/// Points when one normalized name contains the other
const CONTAINMENT_POINTS: f64 = 20.0;

/// Points per development phase
const PHASE_POINTS: f64 = 5.0;

/// Lowercase and trim a name for comparison
#[must_use]
pub fn normalize(name: &str) -> String {
    name.to_lowercase().trim().to_string()
}

/// First whitespace-delimited token of a normalized name, e.g.
/// `"aspirin 81mg"` → `"aspirin"`
#[must_use]
pub fn first_token(normalized: &str) -> Option<&str> {
    normalized.split_whitespace().next()
}

/// Heuristic relevance of a candidate for a query name.
///
/// Exact preferred-name equality dominates (200), substring containment in
/// either direction adds 20, and each development phase adds 5 so that, all
/// names being equal, approved drugs outrank experimental ones. An absent or
/// non-numeric phase contributes nothing.
#[must_use]
pub fn score_candidate(candidate: &Candidate, query: &str) -> f64 {
    let q = normalize(query);
    let pref = candidate.pref_name.as_deref().map(normalize).unwrap_or_default();

    let mut score = 0.0;
    if pref == q {
        score += EXACT_NAME_POINTS;
    }
    if pref.contains(&q) || q.contains(&pref) {
        score += CONTAINMENT_POINTS;
    }
    if let Some(phase) = candidate.max_phase {
        score += PHASE_POINTS * phase;
    }
    score
}

/// Sort candidates by descending score; ties keep encounter order.
#[must_use]
pub fn rank_candidates(mut candidates: Vec<Candidate>, query: &str) -> Vec<Candidate> {
    // sort_by is stable, so equal scores preserve the order the database
    // returned the hits in
    candidates.sort_by(|a, b| score_candidate(b, query).total_cmp(&score_candidate(a, query)));
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ChemblId;

    fn candidate(pref_name: &str, max_phase: Option<f64>) -> Candidate {
        Candidate {
            chembl_id: Some(ChemblId::new("CHEMBL1")),
            pref_name: Some(pref_name.to_string()),
            max_phase,
        }
    }

    #[test]
    fn test_exact_name_dominates() {
        let exact = candidate("Aspirin", None);
        let phase4 = candidate("Aspirin lysine", Some(4.0));

        assert!(score_candidate(&exact, "aspirin") > score_candidate(&phase4, "aspirin"));
        // Exact match also earns containment points
        assert!((score_candidate(&exact, "aspirin") - 220.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_containment_and_phase() {
        let contained = candidate("Aspirin lysine", Some(2.0));
        // 20 containment + 2 * 5 phase
        assert!((score_candidate(&contained, "aspirin") - 30.0).abs() < f64::EPSILON);

        let unrelated = candidate("Warfarin", None);
        assert!((score_candidate(&unrelated, "aspirin") - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_normalization_ignores_case_and_whitespace() {
        let c = candidate("  ASPIRIN  ", None);
        assert!(score_candidate(&c, "aspirin") >= 200.0);
        assert!(score_candidate(&c, " Aspirin ") >= 200.0);
    }

    #[test]
    fn test_missing_pref_name_scores_containment_only() {
        let anonymous = Candidate {
            chembl_id: Some(ChemblId::new("CHEMBL2")),
            pref_name: None,
            max_phase: Some(3.0),
        };
        // Empty preferred name is trivially contained in the query
        assert!((score_candidate(&anonymous, "aspirin") - 35.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_ranking_is_stable_for_ties() {
        let first = candidate("Aspirin", Some(4.0));
        let second = candidate("Aspirin", Some(2.0));
        let third = candidate("Aspirin", Some(4.0));

        let ranked = rank_candidates(vec![first.clone(), second, third.clone()], "Aspirin");

        // Both phase-4 entries outrank phase-2, in encounter order
        assert_eq!(ranked[0], first);
        assert_eq!(ranked[1], third);
        assert_eq!(ranked[2].max_phase, Some(2.0));
        assert!(score_candidate(&ranked[0], "Aspirin") >= 200.0);
        assert!(score_candidate(&ranked[2], "Aspirin") >= 200.0);
    }

    #[test]
    fn test_first_token() {
        assert_eq!(first_token("acetylsalicylic acid"), Some("acetylsalicylic"));
        assert_eq!(first_token("aspirin"), Some("aspirin"));
        assert_eq!(first_token(""), None);
    }
}
