//! Cognitive, mood and stress goals.

use super::{GoalPlan, SlotCount, SlotTemplate};
use crate::types::{Category, ExperienceTier, Goal};

pub static COGNITIVE: GoalPlan = GoalPlan {
    goal: Goal::Cognitive,
    duration_weeks: 8,
    slots: &[
        SlotTemplate {
            id: "cholinergic",
            role: "Cholinergic support",
            categories: &[Category::Nootropic, Category::Supplement],
            keywords: &["acetylcholine", "choline", "memory", "learning"],
            count: SlotCount::Fixed(1),
            min_tier: None,
            reasoning: "Supports acetylcholine signalling behind memory and learning.",
        },
        SlotTemplate {
            id: "neuroprotection",
            role: "Neuroprotection",
            categories: &[Category::Nootropic, Category::Adaptogen, Category::Supplement],
            keywords: &["bdnf", "neurogenesis", "neuroprotect", "nerve growth factor"],
            count: SlotCount::Fixed(1),
            min_tier: None,
            reasoning: "Promotes neuronal health and plasticity over the long term.",
        },
        SlotTemplate {
            id: "focus_energy",
            role: "Focus and energy",
            categories: &[Category::Nootropic, Category::AminoAcid],
            keywords: &["dopamine", "caffeine", "theanine", "attention", "focus"],
            count: SlotCount::Fixed(1),
            min_tier: None,
            reasoning: "Improves sustained attention without jitters.",
        },
        SlotTemplate {
            id: "research_nootropic",
            role: "Research nootropic",
            categories: &[Category::Peptide, Category::Nootropic],
            keywords: &["bdnf", "neuropeptide", "cognitive", "memory"],
            count: SlotCount::PerTier([0, 1, 1]),
            min_tier: Some(ExperienceTier::Intermediate),
            reasoning: "Research-grade compound with early cognitive data.",
        },
    ],
};

pub static MOOD: GoalPlan = GoalPlan {
    goal: Goal::Mood,
    duration_weeks: 8,
    slots: &[
        SlotTemplate {
            id: "serotonergic",
            role: "Serotonergic support",
            categories: &[Category::Supplement, Category::AminoAcid],
            keywords: &["serotonin", "5-htp", "tryptophan", "mood"],
            count: SlotCount::Fixed(1),
            min_tier: None,
            reasoning: "Supports serotonin synthesis for a steadier baseline mood.",
        },
        SlotTemplate {
            id: "dopaminergic",
            role: "Dopaminergic support",
            categories: &[Category::AminoAcid, Category::Nootropic],
            keywords: &["dopamine", "tyrosine", "motivation", "reward"],
            count: SlotCount::Fixed(1),
            min_tier: None,
            reasoning: "Supports motivation and drive.",
        },
        SlotTemplate {
            id: "stress_buffer",
            role: "Stress buffer",
            categories: &[Category::Adaptogen],
            keywords: &["cortisol", "hpa axis", "stress", "resilience"],
            count: SlotCount::Fixed(1),
            min_tier: None,
            reasoning: "Blunts the stress response that drags mood down.",
        },
        SlotTemplate {
            id: "mood_micronutrients",
            role: "Mood micronutrients",
            categories: &[Category::VitaminMineral],
            keywords: &["vitamin d", "omega-3", "b12", "folate"],
            count: SlotCount::Fixed(1),
            min_tier: None,
            reasoning: "Corrects deficiencies commonly linked to low mood.",
        },
    ],
};

pub static STRESS: GoalPlan = GoalPlan {
    goal: Goal::Stress,
    duration_weeks: 6,
    slots: &[
        SlotTemplate {
            id: "adaptogen_core",
            role: "Core adaptogen",
            categories: &[Category::Adaptogen],
            keywords: &["cortisol", "hpa axis", "stress resilience", "adaptogen"],
            count: SlotCount::PerTier([1, 2, 2]),
            min_tier: None,
            reasoning: "Normalizes cortisol output under chronic stress.",
        },
        SlotTemplate {
            id: "calming",
            role: "Calming",
            categories: &[Category::AminoAcid, Category::Supplement],
            keywords: &["gaba", "theanine", "alpha waves", "relaxation"],
            count: SlotCount::Fixed(1),
            min_tier: None,
            reasoning: "Promotes calm without sedation.",
        },
        SlotTemplate {
            id: "nervous_system_minerals",
            role: "Nervous system minerals",
            categories: &[Category::VitaminMineral],
            keywords: &["magnesium", "nmda", "nervous system", "b vitamins"],
            count: SlotCount::Fixed(1),
            min_tier: None,
            reasoning: "Replenishes minerals depleted by prolonged stress.",
        },
        SlotTemplate {
            id: "research_anxiolytic",
            role: "Research anxiolytic",
            categories: &[Category::Peptide, Category::Nootropic],
            keywords: &["anxiolytic", "gaba", "bdnf", "anxiety"],
            count: SlotCount::PerTier([0, 1, 1]),
            min_tier: Some(ExperienceTier::Intermediate),
            reasoning: "Research compound with anxiolytic signals for experienced users.",
        },
    ],
};
