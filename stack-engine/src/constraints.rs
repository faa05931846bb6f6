//! Constraint resolution.
//!
//! Turns an experience tier plus free-text constraint tokens into an
//! [`EligibilityPolicy`]: the concrete set of legal statuses, category
//! filters, and evidence/safety floors a compound must satisfy to be
//! considered at all. Over-constrained requests are not errors; they simply
//! produce a smaller catalog view.

use std::collections::BTreeSet;

use crate::types::{Category, CompoundRecord, ExperienceTier, LegalStatus};

/// A recognized constraint token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Constraint {
    OtcOnly,
    NoGrayMarket,
    NoPrescription,
    NoSarms,
    BeginnerSafe,
    BudgetFriendly,
    HighEvidence,
    MinimalSides,
}

impl Constraint {
    /// Canonical lower-case hyphenated token.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OtcOnly => "otc-only",
            Self::NoGrayMarket => "no-gray-market",
            Self::NoPrescription => "no-prescription",
            Self::NoSarms => "no-sarms",
            Self::BeginnerSafe => "beginner-safe",
            Self::BudgetFriendly => "budget-friendly",
            Self::HighEvidence => "high-evidence",
            Self::MinimalSides => "minimal-sides",
        }
    }

    /// Parse a raw token; casing, underscores and spaces are ignored.
    pub fn parse(raw: &str) -> Option<Self> {
        match normalize_token(raw).as_str() {
            "otc-only" => Some(Self::OtcOnly),
            "no-gray-market" => Some(Self::NoGrayMarket),
            "no-prescription" => Some(Self::NoPrescription),
            "no-sarms" => Some(Self::NoSarms),
            "beginner-safe" => Some(Self::BeginnerSafe),
            "budget-friendly" => Some(Self::BudgetFriendly),
            "high-evidence" => Some(Self::HighEvidence),
            "minimal-sides" => Some(Self::MinimalSides),
            _ => None,
        }
    }
}

/// Normalize a constraint token to lower-case hyphenated form.
pub fn normalize_token(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Legal statuses a tier may see before any constraint applies.
pub fn base_legal_statuses(tier: ExperienceTier) -> BTreeSet<LegalStatus> {
    let mut allowed = BTreeSet::from([LegalStatus::Legal]);
    if tier >= ExperienceTier::Intermediate {
        allowed.extend([
            LegalStatus::Prescription,
            LegalStatus::GrayMarket,
            LegalStatus::ResearchOnly,
        ]);
    }
    if tier >= ExperienceTier::Advanced {
        allowed.insert(LegalStatus::Scheduled);
    }
    allowed
}

/// Evidence floor applied by `high-evidence`.
pub fn default_evidence_floor(tier: ExperienceTier) -> f64 {
    match tier {
        ExperienceTier::Beginner => 45.0,
        ExperienceTier::Intermediate => 35.0,
        ExperienceTier::Advanced => 25.0,
    }
}

/// Safety floor applied by `minimal-sides`.
pub fn default_safety_floor(tier: ExperienceTier) -> f64 {
    match tier {
        ExperienceTier::Beginner => 65.0,
        ExperienceTier::Intermediate => 55.0,
        ExperienceTier::Advanced => 45.0,
    }
}

/// Concrete eligibility rules for one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct EligibilityPolicy {
    pub tier: ExperienceTier,
    pub allowed_legal_statuses: BTreeSet<LegalStatus>,
    pub excluded_categories: BTreeSet<Category>,
    /// When set, only these categories are visible
    pub category_allow_list: Option<BTreeSet<Category>>,
    pub evidence_floor: Option<f64>,
    pub safety_floor: Option<f64>,
    /// Soft scoring penalty for categories outside the budget list
    pub budget_preferred: bool,
    /// Exclude anything with a severe side effect
    pub minimal_sides: bool,
    /// Recognized constraints, for narrative wording
    pub constraints: BTreeSet<Constraint>,
}

impl EligibilityPolicy {
    /// Resolve a policy from a tier and raw constraint tokens.
    pub fn resolve<S: AsRef<str>>(tier: ExperienceTier, raw_constraints: &[S]) -> Self {
        let mut constraints = BTreeSet::new();
        for raw in raw_constraints {
            match Constraint::parse(raw.as_ref()) {
                Some(constraint) => {
                    constraints.insert(constraint);
                }
                None => {
                    tracing::debug!(token = %raw.as_ref(), "Ignoring unrecognized constraint");
                }
            }
        }

        let has = |c: Constraint| constraints.contains(&c);
        let mut allowed = base_legal_statuses(tier);
        let mut excluded_categories = BTreeSet::new();
        let mut allow_lists: Vec<&'static [Category]> = Vec::new();

        if has(Constraint::OtcOnly) {
            allowed = BTreeSet::from([LegalStatus::Legal]);
        }
        if has(Constraint::NoGrayMarket) {
            allowed.remove(&LegalStatus::GrayMarket);
        }
        if has(Constraint::NoPrescription) {
            allowed.remove(&LegalStatus::Prescription);
            allowed.remove(&LegalStatus::Scheduled);
        }
        if has(Constraint::NoSarms) {
            excluded_categories.insert(Category::Sarm);
        }
        if has(Constraint::BeginnerSafe) {
            allow_lists.push(Category::SAFE);
            allowed.retain(|status| *status == LegalStatus::Legal);
        }
        if has(Constraint::BudgetFriendly) {
            allow_lists.push(Category::BUDGET);
        }

        let evidence_floor = has(Constraint::HighEvidence).then(|| default_evidence_floor(tier));
        let minimal_sides = has(Constraint::MinimalSides);
        let safety_floor = minimal_sides.then(|| default_safety_floor(tier));

        // Beginners only ever see safe categories.
        if tier == ExperienceTier::Beginner && !has(Constraint::BeginnerSafe) {
            allow_lists.push(Category::SAFE);
        }

        let category_allow_list = allow_lists
            .into_iter()
            .map(|list| list.iter().copied().collect::<BTreeSet<_>>())
            .reduce(|acc, list| acc.intersection(&list).copied().collect());

        Self {
            tier,
            allowed_legal_statuses: allowed,
            excluded_categories,
            category_allow_list,
            evidence_floor,
            safety_floor,
            budget_preferred: has(Constraint::BudgetFriendly),
            minimal_sides,
            constraints,
        }
    }

    pub fn has(&self, constraint: Constraint) -> bool {
        self.constraints.contains(&constraint)
    }

    /// Whether the category is visible under this policy.
    pub fn allows_category(&self, category: Category) -> bool {
        if self.excluded_categories.contains(&category) {
            return false;
        }
        self.category_allow_list
            .as_ref()
            .map_or(true, |allowed| allowed.contains(&category))
    }

    /// Whether a compound passes every eligibility rule.
    pub fn admits(&self, compound: &CompoundRecord) -> bool {
        if !self.allowed_legal_statuses.contains(&compound.legal_status) {
            return false;
        }
        if !self.allows_category(compound.category) {
            return false;
        }
        if let Some(floor) = self.evidence_floor {
            if compound.evidence_score.unwrap_or(0.0) < floor {
                return false;
            }
        }
        if let Some(floor) = self.safety_floor {
            if compound.safety_score.unwrap_or(50.0) < floor {
                return false;
            }
        }
        if self.minimal_sides && compound.has_severe_side_effect() {
            return false;
        }
        true
    }

    /// The eligible catalog view, in catalog order.
    pub fn filter<'a>(&self, catalog: &'a [CompoundRecord]) -> Vec<&'a CompoundRecord> {
        catalog.iter().filter(|c| self.admits(c)).collect()
    }
}
