//! Scheduled regeneration of the system-authored stacks.
//!
//! Walks every (goal, tier) cell in a fixed order and reconciles the stored
//! stack with a freshly generated one. A failing cell is logged and counted;
//! the sweep always runs to completion.

use std::sync::Arc;

use serde::Serialize;

use crate::config::SweepConfig;
use crate::generator::{GeneratorError, StackGenerator};
use crate::repository::{PersistedStack, RepositoryError, StackRepository};
use crate::types::{ExperienceTier, GeneratorInput, Goal};

/// What happened to a single sweep cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepOutcome {
    Created,
    Updated,
    Skipped,
    Failed,
}

/// Per-run tallies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SweepReport {
    pub cells: usize,
    pub created: usize,
    pub updated: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl SweepReport {
    fn record(&mut self, outcome: SweepOutcome) {
        self.cells += 1;
        match outcome {
            SweepOutcome::Created => self.created += 1,
            SweepOutcome::Updated => self.updated += 1,
            SweepOutcome::Skipped => self.skipped += 1,
            SweepOutcome::Failed => self.failed += 1,
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum CellError {
    #[error(transparent)]
    Generate(#[from] GeneratorError),
    #[error(transparent)]
    Store(#[from] RepositoryError),
}

/// Regenerates one stack per (goal, tier) cell.
pub struct SweepRunner {
    generator: StackGenerator,
    repository: Arc<dyn StackRepository>,
    config: SweepConfig,
}

impl SweepRunner {
    pub fn new(
        generator: StackGenerator,
        repository: Arc<dyn StackRepository>,
        config: SweepConfig,
    ) -> Self {
        Self {
            generator,
            repository,
            config,
        }
    }

    /// Run one full sweep, cells processed sequentially.
    pub async fn run(&self) -> SweepReport {
        let mut report = SweepReport::default();

        for goal in Goal::all() {
            for tier in ExperienceTier::all() {
                let outcome = match self.reconcile(goal, tier).await {
                    Ok(outcome) => outcome,
                    Err(e) => {
                        tracing::error!(
                            goal = goal.as_str(),
                            tier = tier.label(),
                            error = %e,
                            "Sweep cell failed"
                        );
                        SweepOutcome::Failed
                    }
                };
                report.record(outcome);
            }
        }

        tracing::info!(
            cells = report.cells,
            created = report.created,
            updated = report.updated,
            skipped = report.skipped,
            failed = report.failed,
            "Sweep complete"
        );
        report
    }

    async fn reconcile(&self, goal: Goal, tier: ExperienceTier) -> Result<SweepOutcome, CellError> {
        let mut input = GeneratorInput::new(goal, tier, self.config.max_compounds)
            .with_offset(self.config.selection_offset);
        input.constraints = self.config.constraints.clone();

        let stack = self.generator.generate(&input).await?;
        let existing = self
            .repository
            .find_by_name_and_creator(&stack.name, &self.config.creator)
            .await?;

        match existing {
            None => {
                let record = PersistedStack::from_generated(&stack, self.config.creator.as_str());
                tracing::info!(name = %stack.name, score = stack.composite_score, "Created stack");
                self.repository.create(record).await?;
                Ok(SweepOutcome::Created)
            }
            Some(mut record) => {
                let delta = (stack.composite_score - record.evidence_score).abs();
                if delta <= self.config.score_change_threshold {
                    tracing::debug!(name = %stack.name, delta, "Stack unchanged");
                    return Ok(SweepOutcome::Skipped);
                }

                tracing::info!(
                    name = %stack.name,
                    from = record.evidence_score,
                    to = stack.composite_score,
                    "Updated stack"
                );
                record.apply(&stack);
                self.repository.update(record).await?;
                Ok(SweepOutcome::Updated)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogError, CatalogSource, InMemoryCatalog};
    use crate::config::GeneratorConfig;
    use crate::repository::InMemoryStackRepository;
    use crate::types::{Category, CompoundRecord, LegalStatus};
    use async_trait::async_trait;

    struct DownCatalog;

    #[async_trait]
    impl CatalogSource for DownCatalog {
        async fn fetch_compounds(&self) -> Result<Vec<CompoundRecord>, CatalogError> {
            Err(CatalogError::Unavailable("connection refused".to_string()))
        }
    }

    fn compound(id: &str, category: Category, evidence: f64) -> CompoundRecord {
        CompoundRecord {
            id: id.to_string(),
            slug: id.to_string(),
            name: id.to_string(),
            category,
            legal_status: LegalStatus::Legal,
            evidence_score: Some(evidence),
            safety_score: Some(80.0),
            mechanism: None,
            typical_dose: None,
            min_dose: None,
            max_dose: None,
            dose_unit: None,
            frequency: None,
            mechanisms: vec![],
            interactions: vec![],
            side_effects: vec![],
            studies: vec![],
        }
    }

    fn runner(catalog: Vec<CompoundRecord>, repo: Arc<InMemoryStackRepository>) -> SweepRunner {
        let generator = StackGenerator::new(
            Arc::new(InMemoryCatalog::new(catalog)),
            GeneratorConfig::default(),
        );
        SweepRunner::new(generator, repo, SweepConfig::default())
    }

    fn small_catalog() -> Vec<CompoundRecord> {
        vec![
            compound("creatine", Category::Supplement, 90.0),
            compound("magnesium", Category::VitaminMineral, 70.0),
            compound("ashwagandha", Category::Adaptogen, 65.0),
        ]
    }

    #[tokio::test]
    async fn test_first_run_creates_every_cell() {
        let repo = Arc::new(InMemoryStackRepository::new());
        let report = runner(small_catalog(), repo.clone()).run().await;

        assert_eq!(report.cells, 45);
        assert_eq!(report.created, 45);
        assert_eq!(repo.len().await, 45);
    }

    #[tokio::test]
    async fn test_second_run_skips_unchanged() {
        let repo = Arc::new(InMemoryStackRepository::new());
        runner(small_catalog(), repo.clone()).run().await;
        let report = runner(small_catalog(), repo.clone()).run().await;

        assert_eq!(report.skipped, 45);
        assert_eq!(report.created + report.updated + report.failed, 0);
    }

    #[tokio::test]
    async fn test_score_shift_triggers_update() {
        let repo = Arc::new(InMemoryStackRepository::new());
        runner(small_catalog(), repo.clone()).run().await;

        let mut shifted = small_catalog();
        for compound in &mut shifted {
            compound.evidence_score = compound.evidence_score.map(|s| s - 10.0);
        }
        let report = runner(shifted, repo.clone()).run().await;

        assert!(report.updated > 0);
        assert_eq!(report.created, 0);
        assert_eq!(repo.len().await, 45);
    }

    #[tokio::test]
    async fn test_failing_catalog_fails_every_cell() {
        let repo = Arc::new(InMemoryStackRepository::new());
        let generator = StackGenerator::new(Arc::new(DownCatalog), GeneratorConfig::default());
        let report = SweepRunner::new(generator, repo.clone(), SweepConfig::default())
            .run()
            .await;

        assert_eq!(report.failed, 45);
        assert_eq!(report.cells, 45);
        assert_eq!(repo.len().await, 0);
    }
}
