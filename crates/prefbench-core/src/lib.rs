pub mod config;
pub mod dataset;
pub mod error;
pub mod instance;
pub mod judge;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::EvalConfig;
    pub use crate::dataset::{BenchmarkDataset, Dataset};
    pub use crate::error::{BenchError, JudgeError, Result};
    pub use crate::instance::{JudgmentOutput, RewardBenchInstance};
    pub use crate::judge::{Judgment, RewardJudge};
}
