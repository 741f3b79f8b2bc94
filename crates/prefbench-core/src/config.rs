use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{BenchError, Result};

fn default_batch_size() -> usize {
    8
}

/// Configuration for a single benchmark run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalConfig {
    /// Number of instances handed to the judge per call.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Evaluate only the first `n` instances of the dataset.
    #[serde(default)]
    pub max_instances: Option<usize>,

    /// Unique identifier for this run.
    #[serde(default = "Uuid::new_v4")]
    pub run_id: Uuid,

    /// Tags for filtering and categorization.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            max_instances: None,
            run_id: Uuid::new_v4(),
            tags: Vec::new(),
        }
    }
}

impl EvalConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_max_instances(mut self, max_instances: usize) -> Self {
        self.max_instances = Some(max_instances);
        self
    }

    pub fn with_run_id(mut self, run_id: Uuid) -> Self {
        self.run_id = run_id;
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(BenchError::InvalidArgument(
                "batch_size must be positive".into(),
            ));
        }
        Ok(())
    }
}
