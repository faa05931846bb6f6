//! Persisted stack storage.
//!
//! The engine owns no persistent state; callers that keep generated stacks
//! go through [`StackRepository`]. An in-memory implementation backs the
//! sweep in tests and in the CLI.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::types::{GeneratedStack, Goal};

/// Error types for stack persistence.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Stack not found
    #[error("Stack not found: {0}")]
    NotFound(String),

    /// A stack with the same name and creator already exists
    #[error("Duplicate stack: {name} by {creator}")]
    Duplicate { name: String, creator: String },

    /// Storage error
    #[error("Storage error: {0}")]
    StorageError(String),
}

/// A compound row of a persisted stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedStackCompound {
    pub compound_id: String,
    pub dose: Option<f64>,
    pub unit: Option<String>,
    pub frequency: Option<String>,
    pub start_week: u32,
    pub notes: String,
}

/// A stored stack.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedStack {
    pub id: String,
    pub name: String,
    pub creator: String,
    pub description: String,
    pub goal: Goal,
    pub duration_weeks: u32,
    pub evidence_score: f64,
    pub compounds: Vec<PersistedStackCompound>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PersistedStack {
    /// Build a new record from a generated stack.
    pub fn from_generated(stack: &GeneratedStack, creator: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: stack.name.clone(),
            creator: creator.into(),
            description: stack.description.clone(),
            goal: stack.goal,
            duration_weeks: stack.duration_weeks,
            evidence_score: stack.composite_score,
            compounds: Self::compounds_from(stack),
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the generated fields, keeping identity and creation time.
    pub fn apply(&mut self, stack: &GeneratedStack) {
        self.description = stack.description.clone();
        self.goal = stack.goal;
        self.duration_weeks = stack.duration_weeks;
        self.evidence_score = stack.composite_score;
        self.compounds = Self::compounds_from(stack);
        self.updated_at = Utc::now();
    }

    fn compounds_from(stack: &GeneratedStack) -> Vec<PersistedStackCompound> {
        stack
            .compounds
            .iter()
            .map(|c| PersistedStackCompound {
                compound_id: c.compound_id.clone(),
                dose: c.dose,
                unit: c.unit.clone(),
                frequency: c.frequency.clone(),
                start_week: c.start_week,
                notes: c.reasoning.clone(),
            })
            .collect()
    }
}

/// Storage for generated stacks.
#[async_trait]
pub trait StackRepository: Send + Sync {
    /// Find a stack by its (name, creator) key.
    async fn find_by_name_and_creator(
        &self,
        name: &str,
        creator: &str,
    ) -> Result<Option<PersistedStack>, RepositoryError>;

    /// Store a new stack.
    async fn create(&self, stack: PersistedStack) -> Result<(), RepositoryError>;

    /// Replace an existing stack (matched by id).
    async fn update(&self, stack: PersistedStack) -> Result<(), RepositoryError>;

    /// All stored stacks.
    async fn list(&self) -> Result<Vec<PersistedStack>, RepositoryError>;
}

/// In-memory stack repository.
#[derive(Default)]
pub struct InMemoryStackRepository {
    /// Stacks by id
    stacks: Arc<RwLock<HashMap<String, PersistedStack>>>,
    /// (name, creator) → id
    by_key: Arc<RwLock<HashMap<(String, String), String>>>,
}

impl InMemoryStackRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.stacks.read().await.len()
    }
}

#[async_trait]
impl StackRepository for InMemoryStackRepository {
    async fn find_by_name_and_creator(
        &self,
        name: &str,
        creator: &str,
    ) -> Result<Option<PersistedStack>, RepositoryError> {
        let by_key = self.by_key.read().await;
        let stacks = self.stacks.read().await;

        Ok(by_key
            .get(&(name.to_string(), creator.to_string()))
            .and_then(|id| stacks.get(id))
            .cloned())
    }

    async fn create(&self, stack: PersistedStack) -> Result<(), RepositoryError> {
        let key = (stack.name.clone(), stack.creator.clone());
        let mut by_key = self.by_key.write().await;
        if by_key.contains_key(&key) {
            return Err(RepositoryError::Duplicate {
                name: key.0,
                creator: key.1,
            });
        }

        by_key.insert(key, stack.id.clone());
        tracing::debug!(stack_id = %stack.id, name = %stack.name, "Stored stack");
        self.stacks.write().await.insert(stack.id.clone(), stack);
        Ok(())
    }

    async fn update(&self, stack: PersistedStack) -> Result<(), RepositoryError> {
        let mut stacks = self.stacks.write().await;
        match stacks.get_mut(&stack.id) {
            Some(existing) => {
                *existing = stack;
                Ok(())
            }
            None => Err(RepositoryError::NotFound(stack.id)),
        }
    }

    async fn list(&self) -> Result<Vec<PersistedStack>, RepositoryError> {
        let stacks = self.stacks.read().await;
        let mut all: Vec<PersistedStack> = stacks.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }
}
