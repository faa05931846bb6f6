//! Composite scoring and narrative assembly.
//!
//! Builds the human-facing parts of a generated stack: the composite
//! evidence score, the name and description, and the top-level warnings
//! (legal/medical disclaimers plus goal validation notices).

use crate::constraints::{Constraint, EligibilityPolicy};
use crate::types::{Category, CompoundRecord, ExperienceTier, Goal, LegalStatus};

/// Assembles names, descriptions and warnings for generated stacks.
pub struct NarrativeBuilder;

impl NarrativeBuilder {
    /// Mean evidence score of the scored compounds, rounded to one decimal.
    ///
    /// Unscored compounds are ignored; returns 0 when nothing is scored.
    pub fn composite_score(compounds: &[&CompoundRecord]) -> f64 {
        let scores: Vec<f64> = compounds.iter().filter_map(|c| c.evidence_score).collect();
        if scores.is_empty() {
            return 0.0;
        }
        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        ((mean * 10.0).round() / 10.0).clamp(0.0, 100.0)
    }

    /// "<Tier> <Goal> Stack", e.g. "Beginner Sleep Stack".
    pub fn stack_name(tier: ExperienceTier, goal: Goal) -> String {
        format!("{} {} Stack", tier.label(), goal.label())
    }

    /// Tone sentence for the description.
    ///
    /// `otc-only` wins over `minimal-sides`, which wins over `high-evidence`;
    /// otherwise the tier decides.
    pub fn tone(policy: &EligibilityPolicy) -> &'static str {
        if policy.has(Constraint::OtcOnly) {
            "Limited to over-the-counter compounds you can buy without a prescription."
        } else if policy.has(Constraint::MinimalSides) {
            "Prioritizes compounds with a light side-effect burden."
        } else if policy.has(Constraint::HighEvidence) {
            "Restricted to compounds with strong research backing."
        } else {
            match policy.tier {
                ExperienceTier::Beginner => {
                    "Built around well-tolerated, over-the-counter options with strong safety profiles."
                }
                ExperienceTier::Intermediate => {
                    "Balances proven compounds with a measured step into research-grade options."
                }
                ExperienceTier::Advanced => {
                    "Assumes prior experience, regular bloodwork and medical oversight."
                }
            }
        }
    }

    /// Templated description sentence.
    pub fn description(
        as_of_label: &str,
        goal: Goal,
        policy: &EligibilityPolicy,
        composite_score: f64,
        compounds: &[&CompoundRecord],
    ) -> String {
        let names = if compounds.is_empty() {
            "no compounds matched the current constraints".to_string()
        } else {
            compounds
                .iter()
                .map(|c| c.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };

        format!(
            "As of {as_of_label}, this {} stack reflects the current catalog. {} \
             Composite evidence score: {composite_score:.1}/100. Includes: {names}.",
            goal.label().to_lowercase(),
            Self::tone(policy),
        )
    }

    /// Legal and medical disclaimers for the final compound list.
    pub fn disclaimers(tier: ExperienceTier, compounds: &[&CompoundRecord]) -> Vec<String> {
        let has = |status: LegalStatus| compounds.iter().any(|c| c.legal_status == status);
        let mut warnings = Vec::new();

        if tier != ExperienceTier::Beginner && has(LegalStatus::GrayMarket) {
            warnings.push(
                "Contains gray-market compounds: sourcing, purity and legality vary by \
                 jurisdiction. Verify local laws and use third-party tested sources."
                    .to_string(),
            );
        }
        if has(LegalStatus::Prescription) {
            warnings.push(
                "Contains prescription compounds: use only under the supervision of a \
                 licensed physician."
                    .to_string(),
            );
        }
        if has(LegalStatus::Scheduled) {
            warnings.push(
                "Contains controlled substances: possession without a prescription may be \
                 illegal where you live."
                    .to_string(),
            );
        }

        warnings
    }

    /// Notice for a stack that could not reach its minimum size.
    pub fn underfilled(count: usize, max_compounds: usize) -> Option<String> {
        let target = 3.min(max_compounds);
        (count < target).then(|| {
            format!(
                "Only {count} eligible compound(s) matched; constraints may be too restrictive \
                 for a complete stack."
            )
        })
    }

    /// Check that goal-critical categories made it into the stack.
    ///
    /// Beginner stacks are exempt since they never see these categories.
    pub fn validate_goal(
        goal: Goal,
        tier: ExperienceTier,
        compounds: &[&CompoundRecord],
    ) -> Vec<String> {
        if tier == ExperienceTier::Beginner {
            return Vec::new();
        }

        let required: &[Category] = match goal {
            Goal::Bulk | Goal::Cut | Goal::Recomp => &[Category::Anabolic, Category::Hormonal],
            Goal::HormoneOptimization => &[Category::Hormonal],
            Goal::Libido => &[Category::Hormonal, Category::Anabolic, Category::Peptide],
            Goal::Strength
            | Goal::Endurance
            | Goal::Recovery
            | Goal::InjuryHealing
            | Goal::Sleep
            | Goal::Cognitive
            | Goal::Mood
            | Goal::Stress
            | Goal::Longevity
            | Goal::GeneralHealth => return Vec::new(),
        };

        if compounds.iter().any(|c| required.contains(&c.category)) {
            return Vec::new();
        }

        let wanted = required
            .iter()
            .map(Category::as_str)
            .collect::<Vec<_>>()
            .join(" or ");
        tracing::warn!(
            goal = goal.as_str(),
            tier = tier.label(),
            required = %wanted,
            "Generated stack is missing goal-critical categories"
        );

        vec![format!(
            "No {wanted} compound was selected for a {} {} stack; constraints may be too \
             restrictive for this goal.",
            tier.label().to_lowercase(),
            goal.label().to_lowercase(),
        )]
    }
}
