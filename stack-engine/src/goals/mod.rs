//! Goal plan table.
//!
//! Each goal maps to an immutable [`GoalPlan`]: an ordered list of slots
//! describing the compound roles the stack should fill, plus a cycle length.
//! The table is plain static data, shared process-wide and never mutated.

pub mod cognition;
pub mod physique;
pub mod restoration;
pub mod wellness;

use serde::Serialize;

use crate::types::{Category, ExperienceTier, Goal};

/// How many compounds a slot wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SlotCount {
    /// Same count for every tier
    Fixed(usize),
    /// Indexed by tier: beginner, intermediate, advanced
    PerTier([usize; 3]),
}

impl SlotCount {
    pub fn for_tier(&self, tier: ExperienceTier) -> usize {
        match self {
            Self::Fixed(count) => *count,
            Self::PerTier(counts) => counts[tier.index()],
        }
    }
}

/// A compound role within a goal plan.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotTemplate {
    /// Stable slot identifier (e.g. `gh_deep_sleep`)
    pub id: &'static str,
    /// Human-readable role label
    pub role: &'static str,
    /// Categories a candidate must belong to
    pub categories: &'static [Category],
    /// Relevance keywords matched against mechanism text
    pub keywords: &'static [&'static str],
    pub count: SlotCount,
    /// Tiers below this gate skip the slot entirely
    pub min_tier: Option<ExperienceTier>,
    /// Attached to every compound picked for this slot
    pub reasoning: &'static str,
}

impl SlotTemplate {
    /// Number of compounds to pick at this tier (0 when gated out).
    pub fn count_for(&self, tier: ExperienceTier) -> usize {
        match self.min_tier {
            Some(gate) if tier < gate => 0,
            _ => self.count.for_tier(tier),
        }
    }

    pub fn accepts(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }
}

/// The slot plan for one goal.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalPlan {
    pub goal: Goal,
    pub duration_weeks: u32,
    pub slots: &'static [SlotTemplate],
}

/// Look up the plan for a goal.
pub fn plan_for(goal: Goal) -> &'static GoalPlan {
    match goal {
        Goal::Bulk => &physique::BULK,
        Goal::Cut => &physique::CUT,
        Goal::Recomp => &physique::RECOMP,
        Goal::Strength => &physique::STRENGTH,
        Goal::Endurance => &physique::ENDURANCE,
        Goal::Recovery => &restoration::RECOVERY,
        Goal::InjuryHealing => &restoration::INJURY_HEALING,
        Goal::Sleep => &restoration::SLEEP,
        Goal::Cognitive => &cognition::COGNITIVE,
        Goal::Mood => &cognition::MOOD,
        Goal::Stress => &cognition::STRESS,
        Goal::Longevity => &wellness::LONGEVITY,
        Goal::HormoneOptimization => &wellness::HORMONE_OPTIMIZATION,
        Goal::Libido => &wellness::LIBIDO,
        Goal::GeneralHealth => &wellness::GENERAL_HEALTH,
    }
}

/// Every plan, in sweep order.
pub fn all_plans() -> Vec<&'static GoalPlan> {
    Goal::all().into_iter().map(plan_for).collect()
}
