use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{Instrument, info_span};
use uuid::Uuid;

use prefbench_core::config::EvalConfig;
use prefbench_core::dataset::BenchmarkDataset;
use prefbench_core::error::{BenchError, Result};
use prefbench_core::instance::{JudgmentOutput, RewardBenchInstance};
use prefbench_core::judge::RewardJudge;

use crate::batch::batch_iter;
use crate::enrich::enrich_outputs;
use crate::metrics::Metrics;
use crate::observer::{EvalObserver, FirstBatchSample, TracingObserver};

/// One evaluated instance with the judge's verdict and output.
#[derive(Debug, Clone)]
pub struct JudgedInstance<'a> {
    pub instance: &'a RewardBenchInstance,
    pub chosen_is_better: bool,
    pub output: JudgmentOutput,
}

/// Summary report of a benchmark run.
#[derive(Debug, Clone, Serialize)]
pub struct RewardBenchReport {
    pub run_id: Uuid,
    pub dataset_name: Option<String>,
    pub num_instances: usize,
    pub tags: Vec<String>,
    pub metrics: Metrics,
    /// Judge outputs enriched with dataset fields, in instance order.
    pub outputs: Vec<JudgmentOutput>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

/// Runs a [`RewardJudge`] over a benchmark dataset.
pub struct RewardBenchRunner {
    config: EvalConfig,
    observer: Box<dyn EvalObserver>,
}

impl RewardBenchRunner {
    pub fn new(config: EvalConfig) -> Self {
        Self {
            config,
            observer: Box::new(TracingObserver),
        }
    }

    pub fn with_observer(mut self, observer: impl EvalObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Judge every selected instance batch by batch, then aggregate.
    ///
    /// A judge failure aborts the run; no partial report is produced.
    pub async fn run<J, D>(&self, judge: &J, dataset: &D) -> Result<RewardBenchReport>
    where
        J: RewardJudge + ?Sized,
        D: BenchmarkDataset + ?Sized,
    {
        self.config.validate()?;
        let started_at = Utc::now();

        let instances = select_instances(dataset, self.config.max_instances)?;
        let span = info_span!(
            "reward_bench",
            run_id = %self.config.run_id,
            batch_size = self.config.batch_size,
            total = instances.len(),
        );
        let judged = self.judge_all(judge, &instances).instrument(span).await?;

        let verdicts: Vec<bool> = judged.iter().map(|j| j.chosen_is_better).collect();
        let category_keys: Vec<Option<&str>> = judged
            .iter()
            .map(|j| j.instance.category_key.as_deref())
            .collect();
        let (evaluated, mut outputs): (Vec<_>, Vec<_>) =
            judged.into_iter().map(|j| (j.instance, j.output)).unzip();

        enrich_outputs(&mut outputs, &evaluated)?;
        let metrics = Metrics::compute(&verdicts, &category_keys)?;
        self.observer.on_complete(&metrics);

        Ok(RewardBenchReport {
            run_id: self.config.run_id,
            dataset_name: dataset.name().map(str::to_string),
            num_instances: evaluated.len(),
            tags: self.config.tags.clone(),
            metrics,
            outputs,
            started_at,
            finished_at: Utc::now(),
        })
    }

    async fn judge_all<'a, J>(
        &self,
        judge: &J,
        instances: &[&'a RewardBenchInstance],
    ) -> Result<Vec<JudgedInstance<'a>>>
    where
        J: RewardJudge + ?Sized,
    {
        let total = instances.len();
        let mut judged = Vec::with_capacity(total);

        let batches = batch_iter(instances.iter().copied(), self.config.batch_size)?;
        for (i, batch) in batches.enumerate() {
            let judgments = judge.batch_judge(&batch).await?;
            if judgments.len() != batch.len() {
                return Err(BenchError::Inconsistency {
                    context: "judge batch",
                    expected: batch.len(),
                    actual: judgments.len(),
                });
            }

            if let (0, Some(&instance), Some(first)) = (i, batch.first(), judgments.first()) {
                self.observer.on_first_batch(&FirstBatchSample {
                    instance,
                    output: &first.output,
                });
            }

            judged.extend(batch.into_iter().zip(judgments).map(|(instance, judgment)| {
                JudgedInstance {
                    instance,
                    chosen_is_better: judgment.chosen_is_better,
                    output: judgment.output,
                }
            }));
            self.observer.on_progress(judged.len(), total);
        }

        Ok(judged)
    }
}

/// First `max_instances` instances in dataset order, or all of them.
fn select_instances<D>(
    dataset: &D,
    max_instances: Option<usize>,
) -> Result<Vec<&RewardBenchInstance>>
where
    D: BenchmarkDataset + ?Sized,
{
    let count = max_instances.map_or(dataset.len(), |max| max.min(dataset.len()));
    (0..count)
        .map(|i| {
            dataset.get(i).ok_or(BenchError::Inconsistency {
                context: "dataset",
                expected: count,
                actual: i,
            })
        })
        .collect()
}

/// Evaluate `judge` on `dataset` and return metrics with enriched outputs.
pub async fn evaluate_reward_model<J, D>(
    judge: &J,
    dataset: &D,
    batch_size: usize,
    max_instances: Option<usize>,
) -> Result<(Metrics, Vec<JudgmentOutput>)>
where
    J: RewardJudge + ?Sized,
    D: BenchmarkDataset + ?Sized,
{
    let mut config = EvalConfig::new().with_batch_size(batch_size);
    config.max_instances = max_instances;
    let report = RewardBenchRunner::new(config).run(judge, dataset).await?;
    Ok((report.metrics, report.outputs))
}
