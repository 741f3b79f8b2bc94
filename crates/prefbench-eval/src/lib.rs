pub mod batch;
pub mod enrich;
pub mod metrics;
pub mod observer;
pub mod runner;

pub mod prelude {
    pub use crate::batch::{BatchIter, batch_iter};
    pub use crate::enrich::{enrich_output, enrich_outputs};
    pub use crate::metrics::Metrics;
    pub use crate::observer::{EvalObserver, FirstBatchSample, NoopObserver, TracingObserver};
    pub use crate::runner::{
        JudgedInstance, RewardBenchReport, RewardBenchRunner, evaluate_reward_model,
    };
    pub use prefbench_core::prelude::*;
}
