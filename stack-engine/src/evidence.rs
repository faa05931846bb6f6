//! Evidence scoring from study lists.
//!
//! Produces the 0-100 composite evidence score that the rest of the engine
//! treats as an opaque input. The composite blends six sub-scores:
//!
//! - **study count**: more studies, with diminishing returns
//! - **study quality**: weighted by study design, with a meta-analysis bonus
//! - **sample size**: aggregate participants across studies
//! - **consistency**: agreement on effect direction, blended with significance
//! - **replication**: number of independent institutions
//! - **recency**: share of studies in the last five and three years
//!
//! Sub-scores fall back to neutral defaults when the ingestion pipeline could
//! not extract the underlying field from abstracts.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// Study design classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StudyType {
    MetaAnalysis,
    SystematicReview,
    Rct,
    ControlledTrial,
    Cohort,
    CaseControl,
    CrossSectional,
    CaseReport,
    Review,
    Animal,
    InVitro,
    /// Unclassified (mostly Semantic Scholar results)
    #[serde(other)]
    Other,
}

impl StudyType {
    /// Quality weight on a 0.5-5.0 scale.
    pub fn quality_weight(&self) -> f64 {
        match self {
            Self::MetaAnalysis => 5.0,
            Self::SystematicReview => 4.5,
            Self::Rct => 4.0,
            Self::ControlledTrial => 3.5,
            Self::Cohort => 3.0,
            Self::CaseControl => 2.5,
            Self::CrossSectional => 2.0,
            Self::CaseReport => 1.0,
            Self::Review => 2.5,
            Self::Animal => 1.0,
            Self::InVitro => 0.5,
            Self::Other => 2.0,
        }
    }
}

/// Direction of a reported effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EffectDirection {
    Increase,
    Decrease,
    NoChange,
    Mixed,
}

/// Minimal study data needed for scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyInput {
    pub study_type: StudyType,
    #[serde(default)]
    pub sample_size: Option<u64>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub effect_direction: Option<EffectDirection>,
    #[serde(default)]
    pub statistically_significant: Option<bool>,
    #[serde(default)]
    pub authors_institutions: Vec<String>,
}

/// GRADE-style evidence level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvidenceLevel {
    /// Strong evidence
    A,
    /// Moderate evidence
    B,
    /// Weak evidence
    C,
    /// Very weak or preliminary
    D,
}

/// Per-factor sub-scores, each 0-100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceFactors {
    pub study_count: f64,
    pub study_quality: f64,
    pub sample_size: f64,
    pub consistency: f64,
    pub replication: f64,
    pub recency: f64,
}

impl EvidenceFactors {
    const WEIGHTS: [f64; 6] = [0.40, 0.30, 0.10, 0.10, 0.05, 0.05];

    fn as_array(&self) -> [f64; 6] {
        [
            self.study_count,
            self.study_quality,
            self.sample_size,
            self.consistency,
            self.replication,
            self.recency,
        ]
    }

    fn weighted_sum(&self) -> f64 {
        self.as_array()
            .iter()
            .zip(Self::WEIGHTS)
            .map(|(factor, weight)| factor * weight)
            .sum()
    }

    fn rounded(&self) -> Self {
        Self {
            study_count: round1(self.study_count),
            study_quality: round1(self.study_quality),
            sample_size: round1(self.sample_size),
            consistency: round1(self.consistency),
            replication: round1(self.replication),
            recency: round1(self.recency),
        }
    }
}

/// Result of scoring a study list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceAssessment {
    pub composite: f64,
    pub factors: EvidenceFactors,
    pub evidence_level: EvidenceLevel,
    pub study_count: usize,
    pub meta_analysis_count: usize,
}

/// Compute the composite evidence score for a list of studies.
///
/// `current_year` anchors the recency window so results are reproducible.
pub fn compute_evidence_score(studies: &[StudyInput], current_year: i32) -> EvidenceAssessment {
    if studies.is_empty() {
        return EvidenceAssessment {
            composite: 0.0,
            factors: EvidenceFactors::default(),
            evidence_level: EvidenceLevel::D,
            study_count: 0,
            meta_analysis_count: 0,
        };
    }

    let factors = EvidenceFactors {
        study_count: score_study_count(studies),
        study_quality: score_study_quality(studies),
        sample_size: score_sample_size(studies),
        consistency: score_consistency(studies),
        replication: score_replication(studies),
        recency: score_recency(studies, current_year),
    };
    let composite = factors.weighted_sum();

    EvidenceAssessment {
        composite: round1(composite),
        factors: factors.rounded(),
        evidence_level: determine_level(composite, studies),
        study_count: studies.len(),
        meta_analysis_count: count_type(studies, StudyType::MetaAnalysis),
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn count_type(studies: &[StudyInput], study_type: StudyType) -> usize {
    studies.iter().filter(|s| s.study_type == study_type).count()
}

/// 5 studies ≈ 44, 10 ≈ 60, 20 ≈ 75, 50+ ≈ 98.
fn score_study_count(studies: &[StudyInput]) -> f64 {
    let n = studies.len() as f64;
    (25.0 * (n + 1.0).ln()).min(100.0)
}

fn score_study_quality(studies: &[StudyInput]) -> f64 {
    let total: f64 = studies.iter().map(|s| s.study_type.quality_weight()).sum();
    let normalized = total / studies.len() as f64 / 5.0 * 100.0;

    // +3 per meta-analysis, max +15
    let meta_bonus = (count_type(studies, StudyType::MetaAnalysis) as f64 * 3.0).min(15.0);

    (normalized + meta_bonus).min(100.0)
}

fn score_sample_size(studies: &[StudyInput]) -> f64 {
    let total: u64 = studies.iter().filter_map(|s| s.sample_size).sum();
    if total == 0 {
        return 45.0;
    }
    // 100 participants ≈ 40, 1000 ≈ 60, 10000 ≈ 80
    (20.0 * (total as f64 + 1.0).log10()).min(100.0)
}

fn score_consistency(studies: &[StudyInput]) -> f64 {
    let mut counts: HashMap<EffectDirection, usize> = HashMap::new();
    for direction in studies.iter().filter_map(|s| s.effect_direction) {
        if direction != EffectDirection::Mixed {
            *counts.entry(direction).or_default() += 1;
        }
    }

    let directional: usize = counts.values().sum();
    let Some(majority) = counts.values().max().copied() else {
        return 55.0;
    };

    let consistency_ratio = majority as f64 / directional as f64;
    let significant = studies
        .iter()
        .filter(|s| s.statistically_significant == Some(true))
        .count();
    let significance_ratio = significant as f64 / studies.len() as f64;

    (consistency_ratio * 70.0 + significance_ratio * 30.0).min(100.0)
}

fn score_replication(studies: &[StudyInput]) -> f64 {
    let groups: HashSet<String> = studies
        .iter()
        .flat_map(|s| s.authors_institutions.iter())
        .map(|institution| institution.trim().to_lowercase())
        .collect();

    if groups.is_empty() {
        return 40.0;
    }
    (20.0 * (groups.len() as f64 + 1.0).ln() + 20.0).min(100.0)
}

fn score_recency(studies: &[StudyInput], current_year: i32) -> f64 {
    let years: Vec<i32> = studies.iter().filter_map(|s| s.year).collect();
    if years.is_empty() {
        return 45.0;
    }

    let recent = years.iter().filter(|y| current_year - **y <= 5).count();
    let very_recent = years.iter().filter(|y| current_year - **y <= 3).count();
    let n = years.len() as f64;

    (recent as f64 / n * 50.0 + very_recent as f64 / n * 40.0 + 10.0).min(100.0)
}

fn determine_level(composite: f64, studies: &[StudyInput]) -> EvidenceLevel {
    let has_meta = count_type(studies, StudyType::MetaAnalysis) > 0;
    let rct_count = count_type(studies, StudyType::Rct);

    if composite >= 75.0 && has_meta && rct_count >= 3 {
        EvidenceLevel::A
    } else if composite >= 50.0 && (rct_count > 0 || has_meta) {
        EvidenceLevel::B
    } else if composite >= 25.0 {
        EvidenceLevel::C
    } else {
        EvidenceLevel::D
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn study(study_type: StudyType, year: i32, institution: &str) -> StudyInput {
        StudyInput {
            study_type,
            sample_size: Some(200),
            year: Some(year),
            effect_direction: Some(EffectDirection::Increase),
            statistically_significant: Some(true),
            authors_institutions: vec![institution.to_string()],
        }
    }

    #[test]
    fn test_empty_studies() {
        let result = compute_evidence_score(&[], 2026);
        assert_eq!(result.composite, 0.0);
        assert_eq!(result.evidence_level, EvidenceLevel::D);
        assert_eq!(result.factors, EvidenceFactors::default());
    }

    #[test]
    fn test_strong_corpus_is_level_a() {
        let mut studies = Vec::new();
        for i in 0..4 {
            studies.push(study(StudyType::MetaAnalysis, 2025, &format!("Uni {i}")));
        }
        for i in 0..40 {
            studies.push(study(StudyType::Rct, 2024, &format!("Lab {i}")));
        }

        let result = compute_evidence_score(&studies, 2026);
        assert!(result.composite >= 75.0, "composite was {}", result.composite);
        assert_eq!(result.evidence_level, EvidenceLevel::A);
        assert_eq!(result.meta_analysis_count, 4);
        assert_eq!(result.study_count, 44);
    }

    #[test]
    fn test_sparse_fields_use_defaults() {
        let studies = vec![StudyInput {
            study_type: StudyType::Other,
            sample_size: None,
            year: None,
            effect_direction: None,
            statistically_significant: None,
            authors_institutions: vec![],
        }];

        let result = compute_evidence_score(&studies, 2026);
        assert_eq!(result.factors.sample_size, 45.0);
        assert_eq!(result.factors.consistency, 55.0);
        assert_eq!(result.factors.replication, 40.0);
        assert_eq!(result.factors.recency, 45.0);
        assert_eq!(result.factors.study_quality, 40.0);
    }

    #[test]
    fn test_recent_research_scores_higher() {
        let fresh = vec![study(StudyType::Rct, 2026, "A"), study(StudyType::Rct, 2025, "B")];
        let stale = vec![study(StudyType::Rct, 2010, "A"), study(StudyType::Rct, 2009, "B")];

        let fresh = compute_evidence_score(&fresh, 2026);
        let stale = compute_evidence_score(&stale, 2026);
        assert!(fresh.factors.recency > stale.factors.recency);
        assert!(fresh.composite > stale.composite);
    }

    #[test]
    fn test_institutions_are_case_folded() {
        let studies = vec![
            study(StudyType::Cohort, 2020, "Harvard"),
            study(StudyType::Cohort, 2020, " harvard "),
        ];
        let result = compute_evidence_score(&studies, 2026);
        // one group: 20 ln 2 + 20
        assert_eq!(result.factors.replication, 33.9);
    }

    #[test]
    fn test_blank_institution_counts_as_group() {
        let studies = vec![
            study(StudyType::Cohort, 2020, "Harvard"),
            study(StudyType::Cohort, 2020, "   "),
        ];
        let result = compute_evidence_score(&studies, 2026);
        // two groups: 20 ln 3 + 20
        assert_eq!(result.factors.replication, 42.0);
    }

    #[test]
    fn test_unknown_study_type_parses_as_other() {
        let study: StudyInput =
            serde_json::from_str(r#"{"studyType": "EDITORIAL", "year": 2021}"#).unwrap();
        assert_eq!(study.study_type, StudyType::Other);
        assert_eq!(study.year, Some(2021));
    }
}
