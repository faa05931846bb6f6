//! Longevity, hormonal, libido and general health goals.

use super::{GoalPlan, SlotCount, SlotTemplate};
use crate::types::{Category, ExperienceTier, Goal};

pub static LONGEVITY: GoalPlan = GoalPlan {
    goal: Goal::Longevity,
    duration_weeks: 16,
    slots: &[
        SlotTemplate {
            id: "nad_support",
            role: "NAD+ support",
            categories: &[Category::Supplement],
            keywords: &["nad", "sirtuin", "mitochondria", "dna repair"],
            count: SlotCount::Fixed(1),
            min_tier: None,
            reasoning: "Restores NAD+ levels that decline with age.",
        },
        SlotTemplate {
            id: "autophagy",
            role: "Autophagy and senescence",
            categories: &[Category::Supplement, Category::Other],
            keywords: &["ampk", "mtor", "autophagy", "senescen"],
            count: SlotCount::Fixed(1),
            min_tier: None,
            reasoning: "Targets cellular clean-up pathways tied to ageing.",
        },
        SlotTemplate {
            id: "antioxidant",
            role: "Antioxidant defence",
            categories: &[Category::VitaminMineral, Category::Supplement],
            keywords: &["oxidative stress", "antioxidant", "glutathione", "free radical"],
            count: SlotCount::Fixed(1),
            min_tier: None,
            reasoning: "Reduces oxidative damage accumulation.",
        },
        SlotTemplate {
            id: "cardiometabolic",
            role: "Cardiometabolic health",
            categories: &[Category::Supplement, Category::VitaminMineral],
            keywords: &["cardiovascular", "lipid", "glucose", "insulin"],
            count: SlotCount::Fixed(1),
            min_tier: None,
            reasoning: "Supports the cardiovascular and metabolic markers that predict lifespan.",
        },
        SlotTemplate {
            id: "longevity_peptide",
            role: "Longevity peptide",
            categories: &[Category::Peptide, Category::GhSecretagogue],
            keywords: &["telomer", "thymus", "mitochondrial", "immune"],
            count: SlotCount::PerTier([0, 1, 1]),
            min_tier: Some(ExperienceTier::Intermediate),
            reasoning: "Research peptide with early longevity signals.",
        },
        SlotTemplate {
            id: "prescription_geroprotector",
            role: "Prescription geroprotector",
            categories: &[Category::Other, Category::Hormonal],
            keywords: &["ampk", "mtor", "geroprotect", "insulin sensitivity"],
            count: SlotCount::PerTier([0, 0, 1]),
            min_tier: Some(ExperienceTier::Advanced),
            reasoning: "Prescription compound studied for healthspan extension; requires physician oversight.",
        },
    ],
};

pub static HORMONE_OPTIMIZATION: GoalPlan = GoalPlan {
    goal: Goal::HormoneOptimization,
    duration_weeks: 12,
    slots: &[
        SlotTemplate {
            id: "hormone_base",
            role: "Hormone base",
            categories: &[Category::Hormonal],
            keywords: &["testosterone", "estrogen", "luteinizing", "hpg axis"],
            count: SlotCount::PerTier([0, 1, 1]),
            min_tier: Some(ExperienceTier::Intermediate),
            reasoning: "Directly restores hormone levels to an optimal range.",
        },
        SlotTemplate {
            id: "natural_support",
            role: "Natural production support",
            categories: &[Category::Supplement, Category::Adaptogen, Category::VitaminMineral],
            keywords: &["testosterone", "luteinizing", "dhea", "zinc"],
            count: SlotCount::Fixed(1),
            min_tier: None,
            reasoning: "Supports the body's own hormone production.",
        },
        SlotTemplate {
            id: "estrogen_management",
            role: "Estrogen management",
            categories: &[Category::Hormonal, Category::Supplement],
            keywords: &["aromatase", "estrogen", "dht", "shbg"],
            count: SlotCount::Fixed(1),
            min_tier: None,
            reasoning: "Keeps the androgen to estrogen ratio balanced.",
        },
        SlotTemplate {
            id: "hormone_micronutrients",
            role: "Hormone micronutrients",
            categories: &[Category::VitaminMineral],
            keywords: &["zinc", "vitamin d", "magnesium", "boron"],
            count: SlotCount::Fixed(1),
            min_tier: None,
            reasoning: "Supplies cofactors for steroid hormone synthesis.",
        },
    ],
};

pub static LIBIDO: GoalPlan = GoalPlan {
    goal: Goal::Libido,
    duration_weeks: 8,
    slots: &[
        SlotTemplate {
            id: "libido_core",
            role: "Libido core",
            categories: &[Category::Supplement, Category::Adaptogen],
            keywords: &["libido", "desire", "arousal", "nitric oxide"],
            count: SlotCount::Fixed(1),
            min_tier: None,
            reasoning: "Supports sexual desire and arousal.",
        },
        SlotTemplate {
            id: "hormonal_driver",
            role: "Hormonal driver",
            categories: &[Category::Hormonal, Category::Anabolic],
            keywords: &["testosterone", "androgen", "libido"],
            count: SlotCount::PerTier([0, 1, 1]),
            min_tier: Some(ExperienceTier::Intermediate),
            reasoning: "Raises androgen levels that underpin libido.",
        },
        SlotTemplate {
            id: "melanocortin",
            role: "Melanocortin agonist",
            categories: &[Category::Peptide],
            keywords: &["melanocortin", "arousal", "mc4r"],
            count: SlotCount::PerTier([0, 1, 1]),
            min_tier: Some(ExperienceTier::Intermediate),
            reasoning: "Acts centrally on arousal pathways.",
        },
        SlotTemplate {
            id: "vascular",
            role: "Vascular support",
            categories: &[Category::AminoAcid, Category::Supplement],
            keywords: &["nitric oxide", "vasodilation", "blood flow", "citrulline"],
            count: SlotCount::Fixed(1),
            min_tier: None,
            reasoning: "Improves blood flow.",
        },
    ],
};

pub static GENERAL_HEALTH: GoalPlan = GoalPlan {
    goal: Goal::GeneralHealth,
    duration_weeks: 12,
    slots: &[
        SlotTemplate {
            id: "foundation_micronutrients",
            role: "Foundation micronutrients",
            categories: &[Category::VitaminMineral],
            keywords: &["vitamin d", "magnesium", "zinc", "immune"],
            count: SlotCount::Fixed(2),
            min_tier: None,
            reasoning: "Covers the most common micronutrient gaps.",
        },
        SlotTemplate {
            id: "essential_fats",
            role: "Essential fats",
            categories: &[Category::Supplement],
            keywords: &["omega-3", "epa", "dha", "cardiovascular"],
            count: SlotCount::Fixed(1),
            min_tier: None,
            reasoning: "Supports heart, brain and joint health.",
        },
        SlotTemplate {
            id: "stress_resilience",
            role: "Stress resilience",
            categories: &[Category::Adaptogen],
            keywords: &["cortisol", "stress", "resilience"],
            count: SlotCount::Fixed(1),
            min_tier: None,
            reasoning: "Builds resilience to day-to-day stress.",
        },
        SlotTemplate {
            id: "gut_health",
            role: "Gut health",
            categories: &[Category::Supplement, Category::Other],
            keywords: &["gut", "microbiome", "digestion", "intestinal"],
            count: SlotCount::Fixed(1),
            min_tier: None,
            reasoning: "Supports digestion and the gut barrier.",
        },
        SlotTemplate {
            id: "daily_cognition",
            role: "Daily cognition",
            categories: &[Category::Nootropic],
            keywords: &["focus", "memory", "attention"],
            count: SlotCount::Fixed(1),
            min_tier: None,
            reasoning: "A gentle cognitive baseline.",
        },
    ],
};
