use super::bundle::BundleKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Cell of the quantity grid: a bundle in one size
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct QuantityKey {
    pub bundle: BundleKey,
    pub size_label: String,
}

impl QuantityKey {
    pub fn new(bundle: BundleKey, size_label: impl Into<String>) -> Self {
        Self {
            bundle,
            size_label: size_label.into(),
        }
    }

    /// DOM id / field name of the grid cell, e.g. "male_regular_shirt_M"
    pub fn as_string(&self) -> String {
        format!("{}_{}", self.bundle.as_string(), self.size_label)
    }
}

/// Quantities entered by the user; only strictly positive values are kept
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderQuantities {
    entries: BTreeMap<QuantityKey, u32>,
}

impl OrderQuantities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a quantity. Zero or negative input removes the cell.
    pub fn set(&mut self, key: QuantityKey, quantity: i64) {
        if quantity <= 0 {
            self.entries.remove(&key);
        } else {
            let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
            self.entries.insert(key, quantity);
        }
    }

    pub fn get(&self, key: &QuantityKey) -> u32 {
        self.entries.get(key).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.entries.values().map(|&q| u64::from(q)).sum()
    }

    pub fn bundle_total(&self, bundle: &BundleKey) -> u64 {
        self.entries
            .iter()
            .filter(|(key, _)| &key.bundle == bundle)
            .map(|(_, &q)| u64::from(q))
            .sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QuantityKey, u32)> {
        self.entries.iter().map(|(k, &q)| (k, q))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Total number of items across all cells
pub fn total_quantity(quantities: &OrderQuantities) -> u64 {
    quantities.total()
}
