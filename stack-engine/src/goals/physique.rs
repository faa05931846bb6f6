//! Body-composition and performance goals: bulk, cut, recomp, strength,
//! endurance.

use super::{GoalPlan, SlotCount, SlotTemplate};
use crate::types::{Category, ExperienceTier, Goal};

pub static BULK: GoalPlan = GoalPlan {
    goal: Goal::Bulk,
    duration_weeks: 12,
    slots: &[
        SlotTemplate {
            id: "primary_anabolic",
            role: "Primary anabolic",
            categories: &[Category::Anabolic, Category::Sarm],
            keywords: &["androgen receptor", "protein synthesis", "nitrogen retention", "muscle"],
            count: SlotCount::PerTier([0, 1, 2]),
            min_tier: Some(ExperienceTier::Intermediate),
            reasoning: "Primary driver of lean mass accrual through androgen receptor signalling.",
        },
        SlotTemplate {
            id: "gh_axis",
            role: "GH / IGF-1 axis",
            categories: &[Category::GhSecretagogue, Category::Peptide],
            keywords: &["growth hormone", "igf-1", "ghrh", "ghrelin"],
            count: SlotCount::PerTier([0, 1, 1]),
            min_tier: Some(ExperienceTier::Intermediate),
            reasoning: "Raises growth hormone output to support tissue growth and recovery.",
        },
        SlotTemplate {
            id: "strength_base",
            role: "Strength foundation",
            categories: &[Category::Supplement, Category::AminoAcid],
            keywords: &["creatine", "phosphocreatine", "atp", "power output"],
            count: SlotCount::Fixed(1),
            min_tier: None,
            reasoning: "Improves high-intensity output so training volume keeps climbing.",
        },
        SlotTemplate {
            id: "protein_synthesis",
            role: "Protein synthesis",
            categories: &[Category::AminoAcid, Category::Supplement],
            keywords: &["leucine", "mtor", "protein synthesis", "essential amino"],
            count: SlotCount::Fixed(1),
            min_tier: None,
            reasoning: "Supplies the amino acid signal for muscle protein synthesis.",
        },
        SlotTemplate {
            id: "hormonal_support",
            role: "Hormonal support",
            categories: &[Category::Hormonal],
            keywords: &["testosterone", "estrogen", "aromatase", "luteinizing"],
            count: SlotCount::PerTier([0, 0, 1]),
            min_tier: Some(ExperienceTier::Advanced),
            reasoning: "Keeps the hormonal environment in range during an anabolic cycle.",
        },
        SlotTemplate {
            id: "micronutrient_base",
            role: "Micronutrient base",
            categories: &[Category::VitaminMineral],
            keywords: &["zinc", "vitamin d", "magnesium", "testosterone"],
            count: SlotCount::Fixed(1),
            min_tier: None,
            reasoning: "Covers micronutrients that commonly limit hormone production in heavy training.",
        },
    ],
};

pub static CUT: GoalPlan = GoalPlan {
    goal: Goal::Cut,
    duration_weeks: 8,
    slots: &[
        SlotTemplate {
            id: "fat_oxidation",
            role: "Fat oxidation",
            categories: &[Category::FatLoss, Category::Supplement],
            keywords: &["lipolysis", "thermogen", "fat oxidation", "metabolic rate", "beta-adrenergic"],
            count: SlotCount::Fixed(1),
            min_tier: None,
            reasoning: "Increases fat mobilization and energy expenditure in a deficit.",
        },
        SlotTemplate {
            id: "muscle_preservation",
            role: "Muscle preservation",
            categories: &[Category::Anabolic, Category::Sarm],
            keywords: &["anti-catabolic", "muscle", "androgen receptor", "nitrogen retention"],
            count: SlotCount::PerTier([0, 1, 1]),
            min_tier: Some(ExperienceTier::Intermediate),
            reasoning: "Protects lean mass while calories are restricted.",
        },
        SlotTemplate {
            id: "appetite_control",
            role: "Appetite control",
            categories: &[Category::Peptide, Category::Supplement, Category::FatLoss],
            keywords: &["appetite", "glp-1", "satiety", "insulin sensitivity"],
            count: SlotCount::Fixed(1),
            min_tier: None,
            reasoning: "Makes the deficit sustainable by blunting hunger.",
        },
        SlotTemplate {
            id: "amino_support",
            role: "Amino acid support",
            categories: &[Category::AminoAcid],
            keywords: &["carnitine", "fatty acid", "leucine", "catabolic"],
            count: SlotCount::Fixed(1),
            min_tier: None,
            reasoning: "Supports fatty acid transport and limits muscle breakdown.",
        },
        SlotTemplate {
            id: "energy_focus",
            role: "Energy and focus",
            categories: &[Category::Nootropic, Category::Adaptogen],
            keywords: &["caffeine", "dopamine", "energy", "fatigue", "focus"],
            count: SlotCount::Fixed(1),
            min_tier: None,
            reasoning: "Offsets the low energy and focus dips typical of dieting.",
        },
    ],
};

pub static RECOMP: GoalPlan = GoalPlan {
    goal: Goal::Recomp,
    duration_weeks: 10,
    slots: &[
        SlotTemplate {
            id: "lean_mass",
            role: "Lean mass driver",
            categories: &[Category::Anabolic, Category::Sarm, Category::Hormonal],
            keywords: &["androgen receptor", "muscle", "protein synthesis", "testosterone"],
            count: SlotCount::PerTier([0, 1, 1]),
            min_tier: Some(ExperienceTier::Intermediate),
            reasoning: "Drives muscle gain while body fat comes down.",
        },
        SlotTemplate {
            id: "nutrient_partitioning",
            role: "Nutrient partitioning",
            categories: &[Category::Supplement, Category::FatLoss, Category::Peptide],
            keywords: &["insulin sensitivity", "glucose", "partitioning", "ampk"],
            count: SlotCount::Fixed(1),
            min_tier: None,
            reasoning: "Shifts nutrients toward muscle rather than fat storage.",
        },
        SlotTemplate {
            id: "performance",
            role: "Training performance",
            categories: &[Category::Supplement, Category::AminoAcid],
            keywords: &["creatine", "atp", "beta-alanine", "endurance"],
            count: SlotCount::Fixed(1),
            min_tier: None,
            reasoning: "Keeps training quality high through the recomposition phase.",
        },
        SlotTemplate {
            id: "recovery_support",
            role: "Recovery support",
            categories: &[Category::AminoAcid, Category::VitaminMineral],
            keywords: &["recovery", "inflammation", "magnesium", "omega"],
            count: SlotCount::Fixed(1),
            min_tier: None,
            reasoning: "Speeds recovery between sessions.",
        },
    ],
};

pub static STRENGTH: GoalPlan = GoalPlan {
    goal: Goal::Strength,
    duration_weeks: 8,
    slots: &[
        SlotTemplate {
            id: "power_output",
            role: "Power output",
            categories: &[Category::Supplement, Category::AminoAcid],
            keywords: &["creatine", "phosphocreatine", "atp", "power"],
            count: SlotCount::Fixed(1),
            min_tier: None,
            reasoning: "Raises short-burst power for heavy, low-rep work.",
        },
        SlotTemplate {
            id: "neural_drive",
            role: "Neural drive",
            categories: &[Category::Nootropic, Category::Adaptogen],
            keywords: &["dopamine", "acetylcholine", "choline", "focus"],
            count: SlotCount::Fixed(1),
            min_tier: None,
            reasoning: "Sharpens focus and neuromuscular drive for maximal efforts.",
        },
        SlotTemplate {
            id: "androgen_support",
            role: "Androgen support",
            categories: &[Category::Anabolic, Category::Hormonal, Category::Sarm],
            keywords: &["androgen receptor", "strength", "testosterone", "nitrogen retention"],
            count: SlotCount::PerTier([0, 1, 1]),
            min_tier: Some(ExperienceTier::Intermediate),
            reasoning: "Supports strength gains through androgenic signalling.",
        },
        SlotTemplate {
            id: "joint_support",
            role: "Joint support",
            categories: &[Category::Supplement, Category::Peptide, Category::VitaminMineral],
            keywords: &["collagen", "joint", "tendon", "cartilage"],
            count: SlotCount::Fixed(1),
            min_tier: None,
            reasoning: "Protects joints and connective tissue under heavy loads.",
        },
    ],
};

pub static ENDURANCE: GoalPlan = GoalPlan {
    goal: Goal::Endurance,
    duration_weeks: 8,
    slots: &[
        SlotTemplate {
            id: "oxygen_delivery",
            role: "Oxygen delivery",
            categories: &[Category::Supplement, Category::AminoAcid],
            keywords: &["nitric oxide", "vasodilation", "blood flow", "citrulline"],
            count: SlotCount::Fixed(1),
            min_tier: None,
            reasoning: "Improves blood flow and oxygen delivery to working muscle.",
        },
        SlotTemplate {
            id: "acid_buffering",
            role: "Acid buffering",
            categories: &[Category::AminoAcid, Category::Supplement],
            keywords: &["beta-alanine", "carnosine", "lactate", "buffer"],
            count: SlotCount::Fixed(1),
            min_tier: None,
            reasoning: "Delays fatigue from acid build-up at high intensity.",
        },
        SlotTemplate {
            id: "mitochondrial",
            role: "Mitochondrial support",
            categories: &[Category::Supplement, Category::VitaminMineral, Category::Adaptogen],
            keywords: &["mitochondria", "atp", "coq10", "vo2"],
            count: SlotCount::Fixed(1),
            min_tier: None,
            reasoning: "Supports aerobic energy production.",
        },
        SlotTemplate {
            id: "fatigue_resistance",
            role: "Fatigue resistance",
            categories: &[Category::Adaptogen, Category::Nootropic],
            keywords: &["fatigue", "stamina", "cortisol", "perceived exertion"],
            count: SlotCount::Fixed(1),
            min_tier: None,
            reasoning: "Reduces perceived exertion over long efforts.",
        },
        SlotTemplate {
            id: "metabolic_peptide",
            role: "Metabolic peptide",
            categories: &[Category::Peptide],
            keywords: &["ampk", "mitochondrial", "endurance", "fatty acid oxidation"],
            count: SlotCount::PerTier([0, 0, 1]),
            min_tier: Some(ExperienceTier::Advanced),
            reasoning: "Research peptide targeting metabolic efficiency for experienced users.",
        },
    ],
};
