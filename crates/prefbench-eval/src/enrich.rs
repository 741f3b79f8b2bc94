use serde_json::Value;

use prefbench_core::error::{BenchError, Result};
use prefbench_core::instance::{JudgmentOutput, RewardBenchInstance};

/// Copy dataset fields into a judge output.
///
/// `extra_info` entries are merged first, then `prompt`, `chosen` and
/// `rejected` are written, overwriting any existing keys of the same name.
pub fn enrich_output(output: &mut JudgmentOutput, instance: &RewardBenchInstance) {
    for (key, value) in &instance.extra_info {
        output.insert(key.clone(), value.clone());
    }
    output.insert("prompt".into(), Value::String(instance.prompt.clone()));
    output.insert("chosen".into(), Value::String(instance.chosen.clone()));
    output.insert("rejected".into(), Value::String(instance.rejected.clone()));
}

/// Enrich `outputs[i]` with `instances[i]` for every position.
///
/// The two sequences must have the same length.
pub fn enrich_outputs(
    outputs: &mut [JudgmentOutput],
    instances: &[&RewardBenchInstance],
) -> Result<()> {
    if outputs.len() != instances.len() {
        return Err(BenchError::Inconsistency {
            context: "enrichment",
            expected: instances.len(),
            actual: outputs.len(),
        });
    }
    for (output, instance) in outputs.iter_mut().zip(instances) {
        enrich_output(output, instance);
    }
    Ok(())
}
