//! Candidate scoring.
//!
//! Ranks compounds for a slot by keyword relevance plus evidence, safety,
//! legal and budget factors:
//!
//! ```text
//! score = keyword_matches * 18
//!       + (evidence ?? 0) * 1.1
//!       + (safety ?? 50) * 0.9
//!       - severe_side_effects * 20
//!       - legal_penalty
//!       - budget_penalty
//! ```

use crate::types::{Category, CompoundRecord, LegalStatus};

const KEYWORD_WEIGHT: f64 = 18.0;
const EVIDENCE_WEIGHT: f64 = 1.1;
const SAFETY_WEIGHT: f64 = 0.9;
const SEVERE_SIDE_EFFECT_PENALTY: f64 = 20.0;
const BUDGET_PENALTY: f64 = 15.0;
const DEFAULT_SAFETY: f64 = 50.0;

/// A compound with its computed score.
#[derive(Debug, Clone, Copy)]
pub struct ScoredCandidate<'a> {
    pub compound: &'a CompoundRecord,
    pub score: f64,
}

/// Penalty for a compound's legal status.
pub fn legal_penalty(status: LegalStatus) -> f64 {
    match status {
        LegalStatus::Legal => 0.0,
        LegalStatus::Prescription => 4.0,
        LegalStatus::GrayMarket | LegalStatus::Scheduled | LegalStatus::ResearchOnly => 7.0,
    }
}

/// Penalty applied when budget is preferred and the category is not budget-friendly.
pub fn budget_penalty(category: Category, budget_preferred: bool) -> f64 {
    if budget_preferred && !category.is_budget() {
        BUDGET_PENALTY
    } else {
        0.0
    }
}

/// Number of keywords found (case-insensitive) in the compound's mechanism text.
pub fn keyword_matches(compound: &CompoundRecord, keywords: &[&str]) -> usize {
    if keywords.is_empty() {
        return 0;
    }
    let haystack = compound.mechanism_haystack();
    keywords
        .iter()
        .filter(|keyword| haystack.contains(&keyword.to_lowercase()))
        .count()
}

/// Score a single compound.
pub fn score_candidate(compound: &CompoundRecord, keywords: &[&str], budget_preferred: bool) -> f64 {
    keyword_matches(compound, keywords) as f64 * KEYWORD_WEIGHT
        + compound.evidence_score.unwrap_or(0.0) * EVIDENCE_WEIGHT
        + compound.safety_score.unwrap_or(DEFAULT_SAFETY) * SAFETY_WEIGHT
        - compound.severe_side_effect_count() as f64 * SEVERE_SIDE_EFFECT_PENALTY
        - legal_penalty(compound.legal_status)
        - budget_penalty(compound.category, budget_preferred)
}

/// Score and sort candidates, highest first.
///
/// The sort is stable, so ties keep catalog order.
pub fn rank<'a>(
    candidates: impl IntoIterator<Item = &'a CompoundRecord>,
    keywords: &[&str],
    budget_preferred: bool,
) -> Vec<ScoredCandidate<'a>> {
    let mut scored: Vec<ScoredCandidate<'a>> = candidates
        .into_iter()
        .map(|compound| ScoredCandidate {
            compound,
            score: score_candidate(compound, keywords, budget_preferred),
        })
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MechanismRecord, SideEffectRecord};

    fn compound(id: &str, evidence: Option<f64>, safety: Option<f64>) -> CompoundRecord {
        CompoundRecord {
            id: id.to_string(),
            slug: id.to_string(),
            name: id.to_uppercase(),
            category: Category::Supplement,
            legal_status: LegalStatus::Legal,
            evidence_score: evidence,
            safety_score: safety,
            mechanism: None,
            typical_dose: None,
            min_dose: None,
            max_dose: None,
            dose_unit: None,
            frequency: None,
            mechanisms: vec![],
            interactions: vec![],
            side_effects: vec![],
            studies: vec![],
        }
    }

    #[test]
    fn test_base_formula() {
        let c = compound("a", Some(60.0), Some(80.0));
        let score = score_candidate(&c, &[], false);
        assert!((score - (66.0 + 72.0)).abs() < 1e-9);

        // missing scores fall back to 0 evidence / 50 safety
        let c = compound("b", None, None);
        assert!((score_candidate(&c, &[], false) - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_keyword_matching() {
        let mut c = compound("mg", Some(50.0), Some(50.0));
        c.mechanism = Some("NMDA receptor antagonist".to_string());
        c.mechanisms.push(MechanismRecord {
            name: None,
            description: "Improves Deep Sleep architecture".to_string(),
        });

        assert_eq!(keyword_matches(&c, &["nmda", "deep sleep", "melatonin"]), 2);
        let with = score_candidate(&c, &["nmda", "deep sleep"], false);
        let without = score_candidate(&c, &[], false);
        assert!((with - without - 36.0).abs() < 1e-9);
    }

    #[test]
    fn test_penalties() {
        let mut c = compound("x", Some(50.0), Some(50.0));
        let base = score_candidate(&c, &[], false);

        c.legal_status = LegalStatus::Prescription;
        assert!((base - score_candidate(&c, &[], false) - 4.0).abs() < 1e-9);
        c.legal_status = LegalStatus::ResearchOnly;
        assert!((base - score_candidate(&c, &[], false) - 7.0).abs() < 1e-9);

        c.legal_status = LegalStatus::Legal;
        c.side_effects.push(SideEffectRecord {
            name: "Hepatotoxicity".to_string(),
            severity: "severe".to_string(),
        });
        assert!((base - score_candidate(&c, &[], false) - 20.0).abs() < 1e-9);

        c.side_effects.clear();
        c.category = Category::Peptide;
        assert!((base - score_candidate(&c, &[], true) - 15.0).abs() < 1e-9);
        c.category = Category::FatLoss;
        assert!((base - score_candidate(&c, &[], true)).abs() < 1e-9);
    }

    #[test]
    fn test_rank_is_stable() {
        let catalog = vec![
            compound("first", Some(50.0), Some(50.0)),
            compound("best", Some(90.0), Some(50.0)),
            compound("second", Some(50.0), Some(50.0)),
        ];

        let ranked = rank(&catalog, &[], false);
        let ids: Vec<_> = ranked.iter().map(|c| c.compound.id.as_str()).collect();
        assert_eq!(ids, vec!["best", "first", "second"]);
    }
}
