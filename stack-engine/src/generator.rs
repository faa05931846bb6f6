//! Stack generation.
//!
//! One invocation is a fresh, stateless pass over a catalog snapshot:
//!
//! 1. resolve the eligibility policy from tier and constraints
//! 2. fill the goal's slots in order
//! 3. backfill an under-filled selection
//! 4. drop contraindicated pairs and collect interaction notes
//! 5. compute the composite score and narrative

use std::sync::Arc;

use crate::catalog::{CatalogError, CatalogSource};
use crate::config::GeneratorConfig;
use crate::constraints::EligibilityPolicy;
use crate::goals::plan_for;
use crate::interactions::{InteractionIndex, InteractionResolver};
use crate::narrative::NarrativeBuilder;
use crate::selection::{backfill, select_slots, Pick};
use crate::types::*;

/// Error types for stack generation.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// The catalog could not be fetched
    #[error("Catalog fetch failed: {0}")]
    Catalog(#[from] CatalogError),
}

/// Generates stacks from an injected catalog source.
pub struct StackGenerator {
    catalog: Arc<dyn CatalogSource>,
    config: GeneratorConfig,
}

impl StackGenerator {
    pub fn new(catalog: Arc<dyn CatalogSource>, config: GeneratorConfig) -> Self {
        Self { catalog, config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Fetch a catalog snapshot and generate a stack from it.
    ///
    /// Fetch failures propagate unchanged; nothing is retried.
    pub async fn generate(&self, input: &GeneratorInput) -> Result<GeneratedStack, GeneratorError> {
        let catalog = self.catalog.fetch_compounds().await?;
        Ok(generate_from_snapshot(input, &catalog, &self.config))
    }
}

/// Generate a stack from an already-fetched snapshot.
///
/// Never fails: sparse data yields a smaller (possibly empty) stack.
pub fn generate_from_snapshot(
    input: &GeneratorInput,
    catalog: &[CompoundRecord],
    config: &GeneratorConfig,
) -> GeneratedStack {
    let plan = plan_for(input.goal);
    let policy = EligibilityPolicy::resolve(input.experience, &input.constraints);
    let eligible = policy.filter(catalog);

    tracing::debug!(
        goal = input.goal.as_str(),
        tier = input.experience.label(),
        catalog = catalog.len(),
        eligible = eligible.len(),
        "Resolved eligibility"
    );

    let mut picks = select_slots(
        plan,
        &eligible,
        &policy,
        input.max_compounds,
        input.selection_offset,
    );
    backfill(
        &mut picks,
        &eligible,
        &policy,
        input.max_compounds,
        input.selection_offset,
    );

    let selected: Vec<&CompoundRecord> = picks.iter().map(|p| p.compound).collect();
    let index = InteractionIndex::build(catalog);
    let report = InteractionResolver::new(&index).resolve(&selected);

    let safe: Vec<&Pick<'_>> = report.kept.iter().map(|&i| &picks[i]).collect();
    let safe_compounds: Vec<&CompoundRecord> = safe.iter().map(|p| p.compound).collect();

    let composite_score = NarrativeBuilder::composite_score(&safe_compounds);

    let mut warnings = NarrativeBuilder::disclaimers(input.experience, &safe_compounds);
    warnings.extend(NarrativeBuilder::underfilled(
        safe_compounds.len(),
        input.max_compounds,
    ));
    warnings.extend(NarrativeBuilder::validate_goal(
        input.goal,
        input.experience,
        &safe_compounds,
    ));

    let stack = GeneratedStack {
        name: NarrativeBuilder::stack_name(input.experience, input.goal),
        description: NarrativeBuilder::description(
            &config.as_of_label,
            input.goal,
            &policy,
            composite_score,
            &safe_compounds,
        ),
        goal: input.goal,
        duration_weeks: plan.duration_weeks,
        compounds: safe.iter().map(|p| to_stack_compound(p)).collect(),
        interaction_warnings: report.warnings,
        composite_score,
        warnings,
    };

    tracing::info!(
        name = %stack.name,
        compounds = stack.compounds.len(),
        removed = report.removed.len(),
        composite_score = stack.composite_score,
        offset = input.selection_offset,
        "Generated stack"
    );

    stack
}

fn to_stack_compound(pick: &Pick<'_>) -> StackCompound {
    let compound = pick.compound;
    StackCompound {
        compound_id: compound.id.clone(),
        slug: compound.slug.clone(),
        name: compound.name.clone(),
        dose: compound.typical_dose,
        unit: compound.dose_unit.clone(),
        frequency: compound.frequency.clone(),
        start_week: 1,
        reasoning: pick.reasoning.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryCatalog;

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
            typical_dose: Some(3.0),
            min_dose: None,
            max_dose: None,
            dose_unit: Some("mg".to_string()),
            frequency: Some("nightly".to_string()),
            mechanisms: vec![],
            interactions: vec![],
            side_effects: vec![],
            studies: vec![],
        }
    }

    #[tokio::test]
    async fn test_generate_through_catalog_source() {
        let catalog = InMemoryCatalog::new(vec![
            compound("melatonin", Category::Supplement, 80.0),
            compound("glycine", Category::AminoAcid, 60.0),
            compound("ashwagandha", Category::Adaptogen, 70.0),
        ]);
        let generator = StackGenerator::new(Arc::new(catalog), GeneratorConfig::default());

        let input = GeneratorInput::new(Goal::Sleep, ExperienceTier::Beginner, 6);
        let stack = generator.generate(&input).await.unwrap();

        assert_eq!(stack.name, "Beginner Sleep Stack");
        assert_eq!(stack.compounds.len(), 3);
        assert_eq!(stack.composite_score, 70.0);
        assert!(stack.compounds.iter().all(|c| c.start_week == 1));
        assert_eq!(stack.compounds[0].dose, Some(3.0));
        assert_eq!(stack.compounds[0].unit.as_deref(), Some("mg"));
    }

    #[test]
    fn test_zero_max_compounds_yields_empty_stack() {
        let catalog = vec![compound("melatonin", Category::Supplement, 80.0)];
        let input = GeneratorInput::new(Goal::Sleep, ExperienceTier::Beginner, 0);
        let stack = generate_from_snapshot(&input, &catalog, &GeneratorConfig::default());

        assert!(stack.compounds.is_empty());
        assert_eq!(stack.composite_score, 0.0);
    }

    #[test]
    fn test_reasoning_comes_from_slot() {
        let catalog = vec![compound("melatonin", Category::Supplement, 80.0)];
        let input = GeneratorInput::new(Goal::Sleep, ExperienceTier::Beginner, 6);
        let stack = generate_from_snapshot(&input, &catalog, &GeneratorConfig::default());

        let sleep_onset = plan_for(Goal::Sleep).slots[0];
        assert_eq!(stack.compounds[0].reasoning, sleep_onset.reasoning);
    }
}
