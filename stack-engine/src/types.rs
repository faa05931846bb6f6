//! Core types for stack generation.
//!
//! These types model the compound catalog, the generator request, and the
//! generated stack handed back to callers.
//!
//! With the `typescript` feature enabled, the wire types can be exported to
//! TypeScript using ts-rs for consistency with the web frontend.

use serde::{Deserialize, Serialize};

#[cfg(feature = "typescript")]
use ts_rs::TS;

use crate::evidence::StudyInput;

/// Compound category.
///
/// Closed set; every filter and scoring site matches on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Supplement,
    Nootropic,
    Peptide,
    Anabolic,
    Sarm,
    GhSecretagogue,
    FatLoss,
    Hormonal,
    Adaptogen,
    AminoAcid,
    VitaminMineral,
    Other,
}

impl Category {
    /// Categories a beginner (or a `beginner-safe` request) may see.
    pub const SAFE: &'static [Category] = &[
        Category::Supplement,
        Category::VitaminMineral,
        Category::AminoAcid,
        Category::Adaptogen,
        Category::Nootropic,
    ];

    /// Categories admitted by a `budget-friendly` request.
    pub const BUDGET: &'static [Category] = &[
        Category::Supplement,
        Category::VitaminMineral,
        Category::AminoAcid,
        Category::Adaptogen,
        Category::Nootropic,
        Category::FatLoss,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Supplement => "SUPPLEMENT",
            Self::Nootropic => "NOOTROPIC",
            Self::Peptide => "PEPTIDE",
            Self::Anabolic => "ANABOLIC",
            Self::Sarm => "SARM",
            Self::GhSecretagogue => "GH_SECRETAGOGUE",
            Self::FatLoss => "FAT_LOSS",
            Self::Hormonal => "HORMONAL",
            Self::Adaptogen => "ADAPTOGEN",
            Self::AminoAcid => "AMINO_ACID",
            Self::VitaminMineral => "VITAMIN_MINERAL",
            Self::Other => "OTHER",
        }
    }

    pub fn is_safe(&self) -> bool {
        Self::SAFE.contains(self)
    }

    pub fn is_budget(&self) -> bool {
        Self::BUDGET.contains(self)
    }
}

/// Legal status of a compound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LegalStatus {
    /// Over the counter
    Legal,
    /// Requires a prescription
    Prescription,
    /// Sold without clear legal standing
    GrayMarket,
    /// Controlled substance
    Scheduled,
    /// Sold "for research purposes only"
    ResearchOnly,
}

impl LegalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Legal => "LEGAL",
            Self::Prescription => "PRESCRIPTION",
            Self::GrayMarket => "GRAY_MARKET",
            Self::Scheduled => "SCHEDULED",
            Self::ResearchOnly => "RESEARCH_ONLY",
        }
    }
}

/// Classification of an interaction between two compounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InteractionType {
    Synergistic,
    Caution,
    Antagonistic,
    Contraindicated,
}

impl InteractionType {
    /// Severity rank (higher = more dangerous).
    ///
    /// Used to pick one classification when both orderings of a pair are
    /// stored with different types.
    pub fn severity_rank(&self) -> u8 {
        match self {
            Self::Synergistic => 0,
            Self::Caution => 1,
            Self::Antagonistic => 2,
            Self::Contraindicated => 3,
        }
    }
}

/// User experience tier.
///
/// Ordered: a tier "meets" a gate when it is greater than or equal to it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum ExperienceTier {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl ExperienceTier {
    /// Position in per-tier tables (0, 1, 2).
    pub fn index(&self) -> usize {
        match self {
            Self::Beginner => 0,
            Self::Intermediate => 1,
            Self::Advanced => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    pub fn all() -> [Self; 3] {
        [Self::Beginner, Self::Intermediate, Self::Advanced]
    }
}

impl std::str::FromStr for ExperienceTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(format!("unknown experience tier: {other}")),
        }
    }
}

/// A generation goal. Each goal has exactly one plan in the goal table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Goal {
    Bulk,
    Cut,
    Recomp,
    Strength,
    Endurance,
    Recovery,
    InjuryHealing,
    Sleep,
    Cognitive,
    Mood,
    Stress,
    Longevity,
    HormoneOptimization,
    Libido,
    GeneralHealth,
}

impl Goal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bulk => "BULK",
            Self::Cut => "CUT",
            Self::Recomp => "RECOMP",
            Self::Strength => "STRENGTH",
            Self::Endurance => "ENDURANCE",
            Self::Recovery => "RECOVERY",
            Self::InjuryHealing => "INJURY_HEALING",
            Self::Sleep => "SLEEP",
            Self::Cognitive => "COGNITIVE",
            Self::Mood => "MOOD",
            Self::Stress => "STRESS",
            Self::Longevity => "LONGEVITY",
            Self::HormoneOptimization => "HORMONE_OPTIMIZATION",
            Self::Libido => "LIBIDO",
            Self::GeneralHealth => "GENERAL_HEALTH",
        }
    }

    /// Human-readable label used in stack names.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Bulk => "Bulk",
            Self::Cut => "Cut",
            Self::Recomp => "Recomp",
            Self::Strength => "Strength",
            Self::Endurance => "Endurance",
            Self::Recovery => "Recovery",
            Self::InjuryHealing => "Injury Healing",
            Self::Sleep => "Sleep",
            Self::Cognitive => "Cognitive",
            Self::Mood => "Mood",
            Self::Stress => "Stress",
            Self::Longevity => "Longevity",
            Self::HormoneOptimization => "Hormone Optimization",
            Self::Libido => "Libido",
            Self::GeneralHealth => "General Health",
        }
    }

    /// All goals, in sweep order.
    pub fn all() -> [Self; 15] {
        [
            Self::Bulk,
            Self::Cut,
            Self::Recomp,
            Self::Strength,
            Self::Endurance,
            Self::Recovery,
            Self::InjuryHealing,
            Self::Sleep,
            Self::Cognitive,
            Self::Mood,
            Self::Stress,
            Self::Longevity,
            Self::HormoneOptimization,
            Self::Libido,
            Self::GeneralHealth,
        ]
    }
}

impl std::str::FromStr for Goal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase().replace(['-', ' '], "_");
        Self::all()
            .into_iter()
            .find(|goal| goal.as_str() == wanted)
            .ok_or_else(|| format!("unknown goal: {s}"))
    }
}

/// A mechanism of action attached to a compound.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct MechanismRecord {
    #[serde(default)]
    pub name: Option<String>,
    pub description: String,
}

/// A directed interaction edge as stored in the catalog.
///
/// Storage may hold only one direction per pair; lookups are symmetric.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct InteractionEdge {
    pub source_id: String,
    pub target_id: String,
    pub interaction_type: InteractionType,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A known side effect.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct SideEffectRecord {
    pub name: String,
    /// Free text ("mild", "Moderate", "HIGH", "severe in overdose", ...)
    #[serde(default)]
    pub severity: String,
}

impl SideEffectRecord {
    /// "severe" or "high" anywhere in the severity text counts as severe.
    pub fn is_severe(&self) -> bool {
        let severity = self.severity.to_lowercase();
        severity.contains("severe") || severity.contains("high")
    }
}

/// A compound as read from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct CompoundRecord {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub category: Category,
    pub legal_status: LegalStatus,
    /// Research support, 0-100
    #[serde(default)]
    pub evidence_score: Option<f64>,
    /// Safety profile, 0-100
    #[serde(default)]
    pub safety_score: Option<f64>,
    #[serde(default)]
    pub mechanism: Option<String>,
    #[serde(default)]
    pub typical_dose: Option<f64>,
    #[serde(default)]
    pub min_dose: Option<f64>,
    #[serde(default)]
    pub max_dose: Option<f64>,
    #[serde(default)]
    pub dose_unit: Option<String>,
    #[serde(default)]
    pub frequency: Option<String>,
    #[serde(default)]
    pub mechanisms: Vec<MechanismRecord>,
    #[serde(default)]
    pub interactions: Vec<InteractionEdge>,
    #[serde(default)]
    pub side_effects: Vec<SideEffectRecord>,
    /// Studies backing the evidence score, when the catalog ships them
    #[serde(default)]
    #[cfg_attr(feature = "typescript", ts(skip))]
    pub studies: Vec<StudyInput>,
}

impl CompoundRecord {
    /// Number of side effects classified as severe.
    pub fn severe_side_effect_count(&self) -> usize {
        self.side_effects.iter().filter(|s| s.is_severe()).count()
    }

    pub fn has_severe_side_effect(&self) -> bool {
        self.side_effects.iter().any(SideEffectRecord::is_severe)
    }

    /// Lower-cased mechanism text plus all mechanism descriptions.
    pub fn mechanism_haystack(&self) -> String {
        let mut haystack = self.mechanism.clone().unwrap_or_default();
        for mechanism in &self.mechanisms {
            haystack.push(' ');
            haystack.push_str(&mechanism.description);
        }
        haystack.to_lowercase()
    }
}

/// A request to generate a stack.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct GeneratorInput {
    pub goal: Goal,
    pub experience: ExperienceTier,
    #[serde(default)]
    pub constraints: Vec<String>,
    pub max_compounds: usize,
    /// Rotation offset for producing distinct, reproducible variants
    #[serde(default)]
    pub selection_offset: usize,
}

impl GeneratorInput {
    /// Create an input with no constraints and offset 0.
    pub fn new(goal: Goal, experience: ExperienceTier, max_compounds: usize) -> Self {
        Self {
            goal,
            experience,
            constraints: Vec::new(),
            max_compounds,
            selection_offset: 0,
        }
    }

    /// Builder: add a constraint token.
    pub fn with_constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraints.push(constraint.into());
        self
    }

    /// Builder: set the selection offset.
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.selection_offset = offset;
        self
    }
}

/// A compound selected into a generated stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct StackCompound {
    pub compound_id: String,
    pub slug: String,
    pub name: String,
    pub dose: Option<f64>,
    pub unit: Option<String>,
    pub frequency: Option<String>,
    pub start_week: u32,
    pub reasoning: String,
}

/// The engine's output record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct GeneratedStack {
    pub name: String,
    pub description: String,
    pub goal: Goal,
    pub duration_weeks: u32,
    pub compounds: Vec<StackCompound>,
    /// Contraindication removals, then cautions, then synergy notes
    pub interaction_warnings: Vec<String>,
    pub composite_score: f64,
    pub warnings: Vec<String>,
}

impl GeneratedStack {
    /// Ids of the selected compounds, in stack order.
    pub fn compound_ids(&self) -> Vec<&str> {
        self.compounds.iter().map(|c| c.compound_id.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_ordering() {
        assert!(ExperienceTier::Advanced > ExperienceTier::Intermediate);
        assert!(ExperienceTier::Intermediate > ExperienceTier::Beginner);
        assert_eq!(ExperienceTier::Advanced.index(), 2);
    }

    #[test]
    fn test_generator_input_wire_format() {
        let input: GeneratorInput = serde_json::from_str(
            r#"{"goal": "SLEEP", "experience": "intermediate", "maxCompounds": 4}"#,
        )
        .unwrap();
        assert_eq!(input.experience, ExperienceTier::Intermediate);
        assert_eq!(input.selection_offset, 0);
        assert!(input.constraints.is_empty());

        let json = serde_json::to_value(GeneratorInput::new(Goal::Bulk, ExperienceTier::Advanced, 6)).unwrap();
        assert_eq!(json["experience"], "advanced");
        assert_eq!(json["goal"], "BULK");
    }

    #[test]
    fn test_goal_parsing() {
        assert_eq!("sleep".parse::<Goal>(), Ok(Goal::Sleep));
        assert_eq!("hormone-optimization".parse::<Goal>(), Ok(Goal::HormoneOptimization));
        assert_eq!("INJURY_HEALING".parse::<Goal>(), Ok(Goal::InjuryHealing));
        assert!("teleportation".parse::<Goal>().is_err());
    }

    #[test]
    fn test_side_effect_severity() {
        let effect = |severity: &str| SideEffectRecord {
            name: "test".to_string(),
            severity: severity.to_string(),
        };
        assert!(effect("Severe").is_severe());
        assert!(effect("HIGH").is_severe());
        assert!(effect("high at supratherapeutic doses").is_severe());
        assert!(!effect("mild").is_severe());
        assert!(!effect("").is_severe());
    }

    #[test]
    fn test_compound_wire_format() {
        let json = r#"{
            "id": "c1",
            "slug": "magnesium-glycinate",
            "name": "Magnesium Glycinate",
            "category": "VITAMIN_MINERAL",
            "legalStatus": "LEGAL",
            "evidenceScore": 72.5,
            "sideEffects": [{"name": "GI upset", "severity": "mild"}],
            "interactions": [{
                "sourceId": "c1",
                "targetId": "c2",
                "interactionType": "SYNERGISTIC"
            }]
        }"#;

        let compound: CompoundRecord = serde_json::from_str(json).unwrap();
        assert_eq!(compound.category, Category::VitaminMineral);
        assert_eq!(compound.legal_status, LegalStatus::Legal);
        assert_eq!(compound.safety_score, None);
        assert_eq!(compound.interactions[0].interaction_type, InteractionType::Synergistic);
        assert_eq!(compound.severe_side_effect_count(), 0);
    }
}
