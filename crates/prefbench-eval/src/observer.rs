use tracing::{debug, info};

use prefbench_core::instance::{JudgmentOutput, RewardBenchInstance};

use crate::metrics::Metrics;

/// The first instance of the first batch together with its judge output.
#[derive(Debug, Clone, Copy)]
pub struct FirstBatchSample<'a> {
    pub instance: &'a RewardBenchInstance,
    pub output: &'a JudgmentOutput,
}

/// Receives progress and diagnostics from a benchmark run.
///
/// Callbacks are informational only and cannot affect results.
pub trait EvalObserver: Send + Sync {
    /// Called once, after the first batch has been judged.
    fn on_first_batch(&self, _sample: &FirstBatchSample<'_>) {}

    /// Called after every batch with the number of instances judged so far.
    fn on_progress(&self, _processed: usize, _total: usize) {}

    /// Called once metrics have been computed.
    fn on_complete(&self, _metrics: &Metrics) {}
}

/// Logs diagnostics through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl EvalObserver for TracingObserver {
    fn on_first_batch(&self, sample: &FirstBatchSample<'_>) {
        let output = serde_json::to_string(sample.output).unwrap_or_default();
        info!("Example of the model inputs and outputs:");
        info!(prompt = %sample.instance.prompt);
        info!(chosen = %sample.instance.chosen);
        info!(rejected = %sample.instance.rejected);
        info!(%output);
    }

    fn on_progress(&self, processed: usize, total: usize) {
        debug!(processed, total, "Judged batch");
    }

    fn on_complete(&self, metrics: &Metrics) {
        info!(%metrics, "Reward benchmark finished");
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl EvalObserver for NoopObserver {}
