use std::collections::HashMap;
use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use prefbench_core::error::{BenchError, Result};

const OVERALL_KEY: &str = "accuracy";
const CATEGORY_PREFIX: &str = "accuracy-";

/// Overall and per-category accuracy of a benchmark run.
///
/// Categories are kept in the order they were first seen.
#[derive(Debug, Clone, PartialEq)]
pub struct Metrics {
    pub accuracy: f64,
    pub categories: Vec<(String, f64)>,
}

#[derive(Default)]
struct Tally {
    hits: usize,
    total: usize,
}

impl Tally {
    fn record(&mut self, hit: bool) {
        self.total += 1;
        if hit {
            self.hits += 1;
        }
    }

    fn ratio(&self) -> f64 {
        self.hits as f64 / self.total as f64
    }
}

impl Metrics {
    /// Aggregate aligned verdicts and category keys.
    ///
    /// Instances without a category count toward `accuracy` only.
    pub fn compute<K: AsRef<str>>(verdicts: &[bool], category_keys: &[Option<K>]) -> Result<Self> {
        if verdicts.len() != category_keys.len() {
            return Err(BenchError::Inconsistency {
                context: "category keys",
                expected: verdicts.len(),
                actual: category_keys.len(),
            });
        }
        if verdicts.is_empty() {
            return Err(BenchError::EmptyInput);
        }

        let mut overall = Tally::default();
        let mut order: Vec<&str> = Vec::new();
        let mut tallies: HashMap<&str, Tally> = HashMap::new();

        for (&hit, key) in verdicts.iter().zip(category_keys) {
            overall.record(hit);
            let Some(key) = key.as_ref().map(<K as AsRef<str>>::as_ref) else {
                continue;
            };
            tallies
                .entry(key)
                .or_insert_with(|| {
                    order.push(key);
                    Tally::default()
                })
                .record(hit);
        }

        let categories = order
            .into_iter()
            .map(|key| (key.to_string(), tallies[key].ratio()))
            .collect();

        Ok(Self {
            accuracy: overall.ratio(),
            categories,
        })
    }

    /// Look up a metric by its emitted name.
    pub fn get(&self, name: &str) -> Option<f64> {
        if name == OVERALL_KEY {
            return Some(self.accuracy);
        }
        let key = name.strip_prefix(CATEGORY_PREFIX)?;
        self.categories
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| *v)
    }

    /// Metric names and values in emission order, `accuracy` first.
    pub fn iter(&self) -> impl Iterator<Item = (String, f64)> + '_ {
        std::iter::once((OVERALL_KEY.to_string(), self.accuracy)).chain(
            self.categories
                .iter()
                .map(|(k, v)| (format!("{CATEGORY_PREFIX}{k}"), *v)),
        )
    }

    pub fn len(&self) -> usize {
        1 + self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Serialize for Metrics {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(&name, &value)?;
        }
        map.end()
    }
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}={value:.4}")?;
        }
        Ok(())
    }
}
