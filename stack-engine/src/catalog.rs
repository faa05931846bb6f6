//! Compound catalog access.
//!
//! The engine never owns the compound store. It receives a [`CatalogSource`]
//! and fetches one snapshot per invocation; fetching is the only suspension
//! point in a generation pass.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Datelike;

use crate::evidence::compute_evidence_score;
use crate::types::CompoundRecord;

/// Error types for catalog access.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Backing store is not reachable
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),

    /// Failed to read catalog data
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog data is malformed
    #[error("Invalid catalog data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Source of compound catalog snapshots.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the full compound list, with mechanisms, interactions and side
    /// effects populated.
    async fn fetch_compounds(&self) -> Result<Vec<CompoundRecord>, CatalogError>;
}

/// A fixed, in-memory catalog.
///
/// Every fetch returns a clone of the same snapshot.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    compounds: Arc<Vec<CompoundRecord>>,
}

impl InMemoryCatalog {
    pub fn new(compounds: Vec<CompoundRecord>) -> Self {
        Self {
            compounds: Arc::new(compounds),
        }
    }

    pub fn len(&self) -> usize {
        self.compounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.compounds.is_empty()
    }
}

#[async_trait]
impl CatalogSource for InMemoryCatalog {
    async fn fetch_compounds(&self) -> Result<Vec<CompoundRecord>, CatalogError> {
        Ok(self.compounds.as_ref().clone())
    }
}

/// Catalog read from a JSON export (an array of compound records).
///
/// The file is re-read on every fetch so a long-running sweep sees catalog
/// edits between iterations. Records without an evidence score but with
/// attached studies are scored on load.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for JsonFileCatalog {
    async fn fetch_compounds(&self) -> Result<Vec<CompoundRecord>, CatalogError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| CatalogError::Io {
                path: self.path.clone(),
                source,
            })?;
        let mut compounds: Vec<CompoundRecord> = serde_json::from_str(&raw)?;

        let enriched = enrich_evidence_scores(&mut compounds, chrono::Utc::now().year());
        tracing::debug!(
            path = %self.path.display(),
            compounds = compounds.len(),
            enriched,
            "Loaded catalog"
        );
        Ok(compounds)
    }
}

/// Fill missing evidence scores from attached studies.
///
/// Returns the number of records that were scored.
pub fn enrich_evidence_scores(compounds: &mut [CompoundRecord], current_year: i32) -> usize {
    let mut enriched = 0;
    for compound in compounds.iter_mut() {
        if compound.evidence_score.is_some() || compound.studies.is_empty() {
            continue;
        }
        let assessment = compute_evidence_score(&compound.studies, current_year);
        compound.evidence_score = Some(assessment.composite);
        enriched += 1;
    }
    enriched
}
