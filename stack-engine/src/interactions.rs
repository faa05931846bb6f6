//! Interaction safety resolution.
//!
//! Interaction edges may be stored in only one direction, so they are folded
//! into a symmetric index keyed by the sorted id pair. The resolver then walks
//! every pair of the selected compounds once: contraindicated pairs lose their
//! lower-evidence member, cautions are reported, and synergies among the
//! survivors are noted last.

use std::collections::{HashMap, HashSet};

use crate::types::{CompoundRecord, InteractionEdge, InteractionType};

/// Symmetric lookup over the catalog's interaction edges.
#[derive(Debug, Default)]
pub struct InteractionIndex {
    edges: HashMap<(String, String), InteractionEdge>,
}

fn pair_key(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

impl InteractionIndex {
    /// Build the index from every edge among catalog compounds.
    ///
    /// Edges pointing outside the catalog are ignored. When both orderings of
    /// a pair are stored with different types, the more severe one wins.
    pub fn build(catalog: &[CompoundRecord]) -> Self {
        let known: HashSet<&str> = catalog.iter().map(|c| c.id.as_str()).collect();
        let mut edges: HashMap<(String, String), InteractionEdge> = HashMap::new();

        for edge in catalog.iter().flat_map(|c| c.interactions.iter()) {
            if !known.contains(edge.source_id.as_str()) || !known.contains(edge.target_id.as_str())
            {
                continue;
            }
            let key = pair_key(&edge.source_id, &edge.target_id);
            match edges.get(&key) {
                Some(existing)
                    if existing.interaction_type.severity_rank()
                        >= edge.interaction_type.severity_rank() => {}
                _ => {
                    edges.insert(key, edge.clone());
                }
            }
        }

        Self { edges }
    }

    /// Edge between two compounds, in either direction.
    pub fn get(&self, a: &str, b: &str) -> Option<&InteractionEdge> {
        self.edges.get(&pair_key(a, b))
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Result of resolving interactions within a selection.
#[derive(Debug, Clone, Default)]
pub struct InteractionReport {
    /// Indices (into the selection) of compounds that survive
    pub kept: Vec<usize>,
    /// Ids removed because of contraindications
    pub removed: Vec<String>,
    /// Contraindication removals, then cautions, then synergy notes
    pub warnings: Vec<String>,
}

/// Resolves pairwise interaction conflicts.
pub struct InteractionResolver<'a> {
    index: &'a InteractionIndex,
}

impl<'a> InteractionResolver<'a> {
    pub fn new(index: &'a InteractionIndex) -> Self {
        Self { index }
    }

    /// Resolve interactions among `selected`, in selection order.
    ///
    /// Single pass: removals are applied after all pairs are visited, so a
    /// compound may appear in several warnings before it is dropped.
    pub fn resolve(&self, selected: &[&CompoundRecord]) -> InteractionReport {
        let mut removed: HashSet<usize> = HashSet::new();
        let mut contraindications = Vec::new();
        let mut cautions = Vec::new();

        for i in 0..selected.len() {
            for j in (i + 1)..selected.len() {
                let (a, b) = (selected[i], selected[j]);
                let Some(edge) = self.index.get(&a.id, &b.id) else {
                    continue;
                };

                match edge.interaction_type {
                    InteractionType::Contraindicated => {
                        let (loser, loser_index) = if b.evidence_score.unwrap_or(0.0)
                            <= a.evidence_score.unwrap_or(0.0)
                        {
                            (b, j)
                        } else {
                            (a, i)
                        };
                        removed.insert(loser_index);
                        tracing::debug!(
                            first = %a.id,
                            second = %b.id,
                            removed = %loser.id,
                            "Contraindicated pair"
                        );
                        contraindications.push(Self::describe(
                            &format!(
                                "Contraindicated: {} and {} should not be combined; removed {}.",
                                a.name, b.name, loser.name
                            ),
                            edge,
                        ));
                    }
                    InteractionType::Caution => {
                        cautions.push(Self::describe(
                            &format!("Caution: {} + {}.", a.name, b.name),
                            edge,
                        ));
                    }
                    InteractionType::Antagonistic => {
                        tracing::debug!(first = %a.id, second = %b.id, "Antagonistic pair kept");
                    }
                    InteractionType::Synergistic => {}
                }
            }
        }

        let kept: Vec<usize> = (0..selected.len()).filter(|i| !removed.contains(i)).collect();

        let mut synergies = Vec::new();
        for (n, &i) in kept.iter().enumerate() {
            for &j in &kept[n + 1..] {
                let (a, b) = (selected[i], selected[j]);
                if let Some(edge) = self.index.get(&a.id, &b.id) {
                    if edge.interaction_type == InteractionType::Synergistic {
                        synergies.push(Self::describe(
                            &format!("Synergy: {} + {}.", a.name, b.name),
                            edge,
                        ));
                    }
                }
            }
        }

        let mut removed_ids: Vec<usize> = removed.into_iter().collect();
        removed_ids.sort_unstable();

        let mut warnings = contraindications;
        warnings.extend(cautions);
        warnings.extend(synergies);

        InteractionReport {
            kept,
            removed: removed_ids
                .into_iter()
                .map(|i| selected[i].id.clone())
                .collect(),
            warnings,
        }
    }

    fn describe(headline: &str, edge: &InteractionEdge) -> String {
        match edge.description.as_deref().map(str::trim) {
            Some(description) if !description.is_empty() => format!("{headline} {description}"),
            _ => headline.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, LegalStatus};

    fn compound(id: &str, evidence: Option<f64>) -> CompoundRecord {
        CompoundRecord {
            id: id.to_string(),
            slug: id.to_string(),
            name: id.to_uppercase(),
            category: Category::Anabolic,
            legal_status: LegalStatus::Prescription,
            evidence_score: evidence,
            safety_score: None,
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

    fn link(from: &mut CompoundRecord, to: &str, interaction_type: InteractionType) {
        from.interactions.push(InteractionEdge {
            source_id: from.id.clone(),
            target_id: to.to_string(),
            interaction_type,
            severity: None,
            description: Some("Test interaction.".to_string()),
        });
    }

    #[test]
    fn test_index_is_symmetric() {
        let mut a = compound("a", None);
        let b = compound("b", None);
        link(&mut a, "b", InteractionType::Caution);

        let index = InteractionIndex::build(&[a, b]);
        assert!(index.get("a", "b").is_some());
        assert!(index.get("b", "a").is_some());
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_index_prefers_more_severe_direction() {
        let mut a = compound("a", None);
        let mut b = compound("b", None);
        link(&mut a, "b", InteractionType::Synergistic);
        link(&mut b, "a", InteractionType::Contraindicated);

        let index = InteractionIndex::build(&[a, b]);
        let edge = index.get("a", "b").unwrap();
        assert_eq!(edge.interaction_type, InteractionType::Contraindicated);
    }

    #[test]
    fn test_contraindication_removes_lower_evidence() {
        let mut x = compound("x", Some(60.0));
        let y = compound("y", Some(80.0));
        link(&mut x, "y", InteractionType::Contraindicated);
        let catalog = vec![x, y];

        let index = InteractionIndex::build(&catalog);
        let selected: Vec<&CompoundRecord> = catalog.iter().collect();
        let report = InteractionResolver::new(&index).resolve(&selected);

        assert_eq!(report.kept, vec![1]);
        assert_eq!(report.removed, vec!["x".to_string()]);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("X"));
        assert!(report.warnings[0].contains("Y"));
        assert!(report.warnings[0].contains("Test interaction."));
    }

    #[test]
    fn test_contraindication_tie_removes_second() {
        let mut a = compound("a", None);
        let b = compound("b", Some(0.0));
        link(&mut a, "b", InteractionType::Contraindicated);
        let catalog = vec![a, b];

        let index = InteractionIndex::build(&catalog);
        let selected: Vec<&CompoundRecord> = catalog.iter().collect();
        let report = InteractionResolver::new(&index).resolve(&selected);
        assert_eq!(report.removed, vec!["b".to_string()]);
    }

    #[test]
    fn test_warning_order() {
        let mut a = compound("a", Some(90.0));
        let mut b = compound("b", Some(70.0));
        let c = compound("c", Some(50.0));
        link(&mut a, "b", InteractionType::Synergistic);
        link(&mut a, "c", InteractionType::Caution);
        link(&mut b, "c", InteractionType::Contraindicated);
        let catalog = vec![a, b, c];

        let index = InteractionIndex::build(&catalog);
        let selected: Vec<&CompoundRecord> = catalog.iter().collect();
        let report = InteractionResolver::new(&index).resolve(&selected);

        // c is removed but still reported in the caution with a
        assert_eq!(report.kept, vec![0, 1]);
        assert!(report.warnings[0].starts_with("Contraindicated"));
        assert!(report.warnings[1].starts_with("Caution"));
        assert!(report.warnings[2].starts_with("Synergy"));
    }

    #[test]
    fn test_synergy_with_removed_compound_not_reported() {
        let mut a = compound("a", Some(90.0));
        let mut b = compound("b", Some(40.0));
        let c = compound("c", Some(70.0));
        link(&mut a, "b", InteractionType::Synergistic);
        link(&mut b, "c", InteractionType::Contraindicated);
        let catalog = vec![a, b, c];

        let index = InteractionIndex::build(&catalog);
        let selected: Vec<&CompoundRecord> = catalog.iter().collect();
        let report = InteractionResolver::new(&index).resolve(&selected);

        assert_eq!(report.removed, vec!["b".to_string()]);
        assert!(report.warnings.iter().all(|w| !w.starts_with("Synergy")));
    }
}
