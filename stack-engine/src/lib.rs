//! Deterministic compound stack generation for Compound Atlas
//!
//! Turns a catalog of compounds (supplements, nootropics, peptides,
//! hormonal agents and so on) into a goal-specific regimen for one of three
//! experience tiers:
//!
//! - **Beginner**: legal compounds from the safe categories only
//! - **Intermediate**: adds gray-market research compounds
//! - **Advanced**: adds prescription agents
//!
//! Each goal carries a plan of ordered slots. Slots are filled from the
//! eligible catalog by a keyword-weighted score, short stacks are
//! backfilled, contraindicated pairs are pruned, and the result carries a
//! composite evidence score plus disclaimers.
//!
//! # Key Components
//!
//! - [`StackGenerator`]: Fetches a catalog snapshot and builds a stack
//! - [`EligibilityPolicy`]: Tier and constraint filtering
//! - [`InteractionResolver`]: Contraindication pruning and interaction notes
//! - [`SweepRunner`]: Regenerates the stored stack for every goal and tier
//! - [`compute_evidence_score`]: Scores a compound from its study corpus
//!
//! # Example
//!
//! ```ignore
//! use stack_engine::{GeneratorConfig, GeneratorInput, Goal, ExperienceTier, StackGenerator};
//!
//! let generator = StackGenerator::new(Arc::new(catalog), GeneratorConfig::default());
//! let input = GeneratorInput::new(Goal::Sleep, ExperienceTier::Beginner, 6)
//!     .with_constraint("otc-only");
//! let stack = generator.generate(&input).await?;
//! ```

pub mod catalog;
pub mod config;
pub mod constraints;
pub mod evidence;
pub mod generator;
pub mod goals;
pub mod interactions;
pub mod narrative;
pub mod repository;
pub mod scoring;
pub mod selection;
pub mod sweep;
pub mod types;

// Re-export main types
pub use catalog::{CatalogError, CatalogSource, InMemoryCatalog, JsonFileCatalog};
pub use config::{GeneratorConfig, SweepConfig};
pub use constraints::{Constraint, EligibilityPolicy};
pub use evidence::{compute_evidence_score, EvidenceAssessment, EvidenceLevel, StudyInput};
pub use generator::{generate_from_snapshot, GeneratorError, StackGenerator};
pub use goals::{all_plans, plan_for, GoalPlan, SlotTemplate};
pub use interactions::{InteractionIndex, InteractionResolver};
pub use narrative::NarrativeBuilder;
pub use repository::{InMemoryStackRepository, PersistedStack, RepositoryError, StackRepository};
pub use sweep::{SweepOutcome, SweepReport, SweepRunner};
pub use types::*;
