//! Recovery, injury healing and sleep goals.

use super::{GoalPlan, SlotCount, SlotTemplate};
use crate::types::{Category, ExperienceTier, Goal};

pub static RECOVERY: GoalPlan = GoalPlan {
    goal: Goal::Recovery,
    duration_weeks: 6,
    slots: &[
        SlotTemplate {
            id: "inflammation_control",
            role: "Inflammation control",
            categories: &[Category::Supplement, Category::VitaminMineral],
            keywords: &["inflammation", "cytokine", "omega-3", "curcumin"],
            count: SlotCount::Fixed(1),
            min_tier: None,
            reasoning: "Dampens exercise-induced inflammation between sessions.",
        },
        SlotTemplate {
            id: "tissue_repair",
            role: "Tissue repair",
            categories: &[Category::Peptide],
            keywords: &["healing", "angiogenesis", "repair", "tendon"],
            count: SlotCount::PerTier([0, 1, 1]),
            min_tier: Some(ExperienceTier::Intermediate),
            reasoning: "Accelerates soft-tissue repair.",
        },
        SlotTemplate {
            id: "sleep_recovery",
            role: "Sleep-driven recovery",
            categories: &[Category::AminoAcid, Category::VitaminMineral],
            keywords: &["magnesium", "glycine", "sleep", "nervous system"],
            count: SlotCount::Fixed(1),
            min_tier: None,
            reasoning: "Most repair happens during sleep; this deepens it.",
        },
        SlotTemplate {
            id: "muscle_repair",
            role: "Muscle repair",
            categories: &[Category::AminoAcid, Category::Supplement],
            keywords: &["leucine", "protein synthesis", "muscle damage", "soreness"],
            count: SlotCount::Fixed(1),
            min_tier: None,
            reasoning: "Reduces soreness and supports muscle fibre repair.",
        },
        SlotTemplate {
            id: "gh_recovery",
            role: "GH-mediated recovery",
            categories: &[Category::GhSecretagogue],
            keywords: &["growth hormone", "igf-1", "recovery"],
            count: SlotCount::PerTier([0, 0, 1]),
            min_tier: Some(ExperienceTier::Advanced),
            reasoning: "Growth hormone pulse amplification to shorten recovery windows.",
        },
    ],
};

pub static INJURY_HEALING: GoalPlan = GoalPlan {
    goal: Goal::InjuryHealing,
    duration_weeks: 8,
    slots: &[
        SlotTemplate {
            id: "healing_peptide",
            role: "Healing peptide",
            categories: &[Category::Peptide],
            keywords: &["angiogenesis", "healing", "tendon", "collagen"],
            count: SlotCount::PerTier([0, 2, 2]),
            min_tier: Some(ExperienceTier::Intermediate),
            reasoning: "Research peptide studied for tendon, ligament and gut repair.",
        },
        SlotTemplate {
            id: "collagen_support",
            role: "Collagen support",
            categories: &[Category::Supplement, Category::AminoAcid],
            keywords: &["collagen", "glycine", "proline", "connective tissue"],
            count: SlotCount::Fixed(1),
            min_tier: None,
            reasoning: "Provides building blocks for connective tissue remodelling.",
        },
        SlotTemplate {
            id: "anti_inflammatory",
            role: "Anti-inflammatory",
            categories: &[Category::Supplement, Category::VitaminMineral],
            keywords: &["inflammation", "cox", "cytokine", "pain"],
            count: SlotCount::Fixed(1),
            min_tier: None,
            reasoning: "Controls inflammation without blocking the healing response.",
        },
        SlotTemplate {
            id: "healing_micronutrients",
            role: "Healing micronutrients",
            categories: &[Category::VitaminMineral],
            keywords: &["vitamin c", "zinc", "collagen synthesis", "wound"],
            count: SlotCount::Fixed(1),
            min_tier: None,
            reasoning: "Cofactors required for collagen synthesis and wound healing.",
        },
    ],
};

pub static SLEEP: GoalPlan = GoalPlan {
    goal: Goal::Sleep,
    duration_weeks: 8,
    slots: &[
        SlotTemplate {
            id: "sleep_onset",
            role: "Sleep onset",
            categories: &[Category::Supplement, Category::VitaminMineral, Category::AminoAcid],
            keywords: &["melatonin", "circadian", "sleep onset", "gaba"],
            count: SlotCount::Fixed(1),
            min_tier: None,
            reasoning: "Shortens the time it takes to fall asleep.",
        },
        SlotTemplate {
            id: "sleep_quality",
            role: "Sleep quality",
            categories: &[Category::AminoAcid, Category::VitaminMineral],
            keywords: &["glycine", "magnesium", "deep sleep", "body temperature", "nmda"],
            count: SlotCount::Fixed(1),
            min_tier: None,
            reasoning: "Improves sleep depth and continuity.",
        },
        SlotTemplate {
            id: "wind_down",
            role: "Wind-down",
            categories: &[Category::Adaptogen, Category::Nootropic],
            keywords: &["cortisol", "anxiety", "relaxation", "alpha waves"],
            count: SlotCount::Fixed(1),
            min_tier: None,
            reasoning: "Lowers evening arousal and stress hormones.",
        },
        SlotTemplate {
            id: "gh_deep_sleep",
            role: "GH-mediated deep sleep",
            categories: &[Category::GhSecretagogue, Category::Peptide],
            keywords: &["growth hormone", "slow-wave", "ghrelin", "deep sleep"],
            count: SlotCount::PerTier([0, 1, 1]),
            min_tier: Some(ExperienceTier::Intermediate),
            reasoning: "Extends slow-wave sleep through growth hormone release.",
        },
    ],
};
