use async_trait::async_trait;
use proptest::prelude::*;
use serde_json::json;

use prefbench_eval::prelude::*;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Prefers `chosen` when its text starts with "+", so verdicts are driven
/// entirely by the generated dataset.
struct MarkerJudge;

#[async_trait]
impl RewardJudge for MarkerJudge {
    async fn batch_judge(
        &self,
        batch: &[&RewardBenchInstance],
    ) -> std::result::Result<Vec<Judgment>, JudgeError> {
        Ok(batch
            .iter()
            .map(|instance| {
                let mut output = JudgmentOutput::new();
                output.insert("seen".into(), json!(instance.prompt));
                Judgment::new(instance.chosen.starts_with('+'), output)
            })
            .collect())
    }
}

fn arb_instance() -> impl Strategy<Value = RewardBenchInstance> {
    (
        "[a-z]{1,8}",
        prop::bool::ANY,
        prop::option::of(prop::sample::select(vec!["chat", "code", "math", "safety"])),
    )
        .prop_map(|(prompt, hit, category)| {
            let chosen = if hit { "+yes" } else { "-no" };
            let instance = RewardBenchInstance::new(prompt, chosen, "other");
            match category {
                Some(c) => instance.with_category(c),
                None => instance,
            }
        })
}

fn run(
    instances: &[RewardBenchInstance],
    batch_size: usize,
    max_instances: Option<usize>,
) -> Result<(Metrics, Vec<JudgmentOutput>)> {
    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(evaluate_reward_model(
        &MarkerJudge,
        instances,
        batch_size,
        max_instances,
    ))
}

// ---------------------------------------------------------------------------
// Property-based tests
// ---------------------------------------------------------------------------

proptest! {
    /// Concatenating the batches reproduces the input exactly.
    #[test]
    fn batches_concatenate_to_input(items in prop::collection::vec(any::<u16>(), 0..50), size in 1usize..12) {
        let batches: Vec<Vec<u16>> = batch_iter(items.clone(), size).unwrap().collect();

        prop_assert_eq!(batches.len(), items.len().div_ceil(size));
        for batch in batches.iter().take(batches.len().saturating_sub(1)) {
            prop_assert_eq!(batch.len(), size);
        }
        let flat: Vec<u16> = batches.into_iter().flatten().collect();
        prop_assert_eq!(flat, items);
    }

    /// One output per evaluated instance, in dataset order.
    #[test]
    fn outputs_align_with_instances(
        instances in prop::collection::vec(arb_instance(), 1..30),
        size in 1usize..8,
    ) {
        let (_, outputs) = run(&instances, size, None).unwrap();

        prop_assert_eq!(outputs.len(), instances.len());
        for (output, instance) in outputs.iter().zip(&instances) {
            prop_assert_eq!(&output["seen"], &json!(instance.prompt));
            prop_assert_eq!(&output["prompt"], &json!(instance.prompt));
        }
    }

    /// Overall accuracy is hits / total.
    #[test]
    fn accuracy_is_hit_ratio(
        instances in prop::collection::vec(arb_instance(), 1..30),
        size in 1usize..8,
    ) {
        let (metrics, _) = run(&instances, size, None).unwrap();

        let hits = instances.iter().filter(|i| i.chosen.starts_with('+')).count();
        let expected = hits as f64 / instances.len() as f64;
        prop_assert!((metrics.accuracy - expected).abs() < 1e-12);
        prop_assert!((0.0..=1.0).contains(&metrics.accuracy));
    }

    /// Truncation keeps the first `k` instances.
    #[test]
    fn truncation_keeps_prefix(
        instances in prop::collection::vec(arb_instance(), 1..30),
        k in 1usize..40,
        size in 1usize..8,
    ) {
        let (metrics, outputs) = run(&instances, size, Some(k)).unwrap();

        let kept = k.min(instances.len());
        prop_assert_eq!(outputs.len(), kept);
        for (output, instance) in outputs.iter().zip(&instances[..kept]) {
            prop_assert_eq!(&output["prompt"], &json!(instance.prompt));
        }
        let hits = instances[..kept].iter().filter(|i| i.chosen.starts_with('+')).count();
        prop_assert!((metrics.accuracy - hits as f64 / kept as f64).abs() < 1e-12);
    }

    /// Category accuracies match per-key ratios; uncategorized instances never
    /// produce an `accuracy-*` entry.
    #[test]
    fn category_accuracy_matches_groups(
        instances in prop::collection::vec(arb_instance(), 1..30),
        size in 1usize..8,
    ) {
        let (metrics, _) = run(&instances, size, None).unwrap();

        let mut seen: Vec<String> = Vec::new();
        for instance in &instances {
            if let Some(key) = instance.category_key.as_ref().filter(|k| !seen.contains(*k)) {
                seen.push(key.clone());
            }
        }
        prop_assert_eq!(metrics.categories.len(), seen.len());

        for key in &seen {
            let group: Vec<_> = instances
                .iter()
                .filter(|i| i.category_key.as_ref() == Some(key))
                .collect();
            let hits = group.iter().filter(|i| i.chosen.starts_with('+')).count();
            let value = metrics.get(&format!("accuracy-{key}")).unwrap();
            prop_assert!((value - hits as f64 / group.len() as f64).abs() < 1e-12);
        }
        let names: Vec<String> = metrics.iter().map(|(name, _)| name).collect();
        prop_assert_eq!(&names[0], "accuracy");
        prop_assert_eq!(names.len(), seen.len() + 1);
    }

    /// Enriching twice gives the same record as enriching once.
    #[test]
    fn enrichment_is_idempotent(instance in arb_instance(), score in any::<i32>()) {
        let mut output = JudgmentOutput::new();
        output.insert("score".into(), json!(score));

        enrich_output(&mut output, &instance);
        let once = output.clone();
        enrich_output(&mut output, &instance);

        prop_assert_eq!(once, output);
    }
}

#[test]
fn zero_instances_is_empty_input() {
    let instances: Vec<RewardBenchInstance> = Vec::new();
    let err = run(&instances, 4, None).unwrap_err();
    assert!(matches!(err, BenchError::EmptyInput));
}
