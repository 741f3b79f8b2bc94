use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque record produced by a judge for one instance (scores, rationale, ...).
pub type JudgmentOutput = serde_json::Map<String, Value>;

/// A single labeled preference example.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardBenchInstance {
    /// The prompt both responses answer.
    pub prompt: String,
    /// Response preferred by the ground-truth label.
    pub chosen: String,
    /// Response rejected by the ground-truth label.
    pub rejected: String,
    /// Benchmark subset this instance belongs to, if any.
    #[serde(default)]
    pub category_key: Option<String>,
    /// Extra metadata copied into the judge output after evaluation.
    #[serde(default)]
    pub extra_info: HashMap<String, Value>,
}

impl RewardBenchInstance {
    pub fn new(
        prompt: impl Into<String>,
        chosen: impl Into<String>,
        rejected: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            chosen: chosen.into(),
            rejected: rejected.into(),
            category_key: None,
            extra_info: HashMap::new(),
        }
    }

    pub fn with_category(mut self, category_key: impl Into<String>) -> Self {
        self.category_key = Some(category_key.into());
        self
    }

    pub fn with_extra_info(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra_info.insert(key.into(), value);
        self
    }
}
