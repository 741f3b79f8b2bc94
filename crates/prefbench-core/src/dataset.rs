use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::instance::RewardBenchInstance;

/// Positional, stable-order access to benchmark instances.
pub trait BenchmarkDataset {
    fn len(&self) -> usize;

    /// Human-readable name, carried into run reports.
    fn name(&self) -> Option<&str> {
        None
    }

    /// Instance at `index`. Must return `Some` for every index below `len()`.
    fn get(&self, index: usize) -> Option<&RewardBenchInstance>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &RewardBenchInstance> + '_> {
        Box::new((0..self.len()).filter_map(move |i| self.get(i)))
    }
}

impl BenchmarkDataset for [RewardBenchInstance] {
    fn len(&self) -> usize {
        <[RewardBenchInstance]>::len(self)
    }

    fn get(&self, index: usize) -> Option<&RewardBenchInstance> {
        <[RewardBenchInstance]>::get(self, index)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &RewardBenchInstance> + '_> {
        Box::new(<[RewardBenchInstance]>::iter(self))
    }
}

impl BenchmarkDataset for Vec<RewardBenchInstance> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn get(&self, index: usize) -> Option<&RewardBenchInstance> {
        self.as_slice().get(index)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &RewardBenchInstance> + '_> {
        Box::new(self.as_slice().iter())
    }
}

/// A named collection of benchmark instances.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    /// Dataset name.
    pub name: String,
    /// Description of what this benchmark measures.
    #[serde(default)]
    pub description: String,
    /// The instances, in evaluation order.
    pub instances: Vec<RewardBenchInstance>,
}

impl Dataset {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            instances: Vec::new(),
        }
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    pub fn add_instance(&mut self, instance: RewardBenchInstance) -> &mut Self {
        self.instances.push(instance);
        self
    }

    /// Parse from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl BenchmarkDataset for Dataset {
    fn len(&self) -> usize {
        self.instances.len()
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn get(&self, index: usize) -> Option<&RewardBenchInstance> {
        self.instances.get(index)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &RewardBenchInstance> + '_> {
        Box::new(self.instances.iter())
    }
}
