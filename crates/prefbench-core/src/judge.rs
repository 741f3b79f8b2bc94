use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{BenchError, JudgeError, Result};
use crate::instance::{JudgmentOutput, RewardBenchInstance};

/// A judge's decision for one instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Judgment {
    /// Whether the judge preferred `chosen` over `rejected`.
    pub chosen_is_better: bool,
    /// Decision artifact produced by the judge.
    #[serde(default)]
    pub output: JudgmentOutput,
}

impl Judgment {
    pub fn new(chosen_is_better: bool, output: JudgmentOutput) -> Self {
        Self {
            chosen_is_better,
            output,
        }
    }

    /// Pair up parallel verdict and output sequences.
    pub fn zip(verdicts: Vec<bool>, outputs: Vec<JudgmentOutput>) -> Result<Vec<Self>> {
        if verdicts.len() != outputs.len() {
            return Err(BenchError::Inconsistency {
                context: "judge outputs",
                expected: verdicts.len(),
                actual: outputs.len(),
            });
        }
        Ok(verdicts
            .into_iter()
            .zip(outputs)
            .map(|(chosen_is_better, output)| Self::new(chosen_is_better, output))
            .collect())
    }
}

/// A pairwise preference model under evaluation.
///
/// Implementations must return exactly one [`Judgment`] per instance, in the
/// order of `batch`.
#[async_trait]
pub trait RewardJudge: Send + Sync {
    /// Judge every instance of the batch.
    async fn batch_judge(
        &self,
        batch: &[&RewardBenchInstance],
    ) -> std::result::Result<Vec<Judgment>, JudgeError>;
}

#[async_trait]
impl<J: RewardJudge + ?Sized> RewardJudge for &J {
    async fn batch_judge(
        &self,
        batch: &[&RewardBenchInstance],
    ) -> std::result::Result<Vec<Judgment>, JudgeError> {
        (**self).batch_judge(batch).await
    }
}

#[async_trait]
impl<J: RewardJudge + ?Sized> RewardJudge for Box<J> {
    async fn batch_judge(
        &self,
        batch: &[&RewardBenchInstance],
    ) -> std::result::Result<Vec<Judgment>, JudgeError> {
        (**self).batch_judge(batch).await
    }
}

#[async_trait]
impl<J: RewardJudge + ?Sized> RewardJudge for std::sync::Arc<J> {
    async fn batch_judge(
        &self,
        batch: &[&RewardBenchInstance],
    ) -> std::result::Result<Vec<Judgment>, JudgeError> {
        (**self).batch_judge(batch).await
    }
}
