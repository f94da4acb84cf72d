//! Labelled quantity vectors returned by oracles and nutrition lookups

use serde::{Deserialize, Serialize};

use crate::Map;
use crate::error::LookupError;

use super::Label;

/// An ordered series of `(label, quantity)` pairs.
///
/// Labels are not required to be unique: evaluator output is taken as-is.
/// Every lookup resolves a repeated label to its first occurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "K: Serialize",
    deserialize = "K: Deserialize<'de>"
))]
pub struct Quantities<K> {
    entries: Vec<(K, f64)>,
}

impl<K> Default for Quantities<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: Label> Quantities<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, even if the label is already present
    pub fn push(&mut self, label: impl Into<K>, quantity: f64) {
        self.entries.push((label.into(), quantity));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, f64)> {
        self.entries.iter().map(|(k, v)| (k, *v))
    }

    /// Labels in insertion order, repeats included
    pub fn labels(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// First quantity recorded for `label`
    #[must_use]
    pub fn get(&self, label: &K) -> Option<f64> {
        self.entries
            .iter()
            .find(|(k, _)| k == label)
            .map(|(_, v)| *v)
    }

    /// Like `get`, but a missing label is a lookup error
    pub fn require(&self, label: &K) -> Result<f64, LookupError> {
        self.get(label).ok_or_else(|| label.not_found())
    }

    /// Whether any label occurs more than once
    #[must_use]
    pub fn has_duplicates(&self) -> bool {
        self.index().len() != self.entries.len()
    }

    /// Copy with repeated labels dropped, keeping each label's first occurrence
    #[must_use]
    pub fn dedup_first(&self) -> Self {
        self.index()
            .into_iter()
            .map(|(k, v)| (k.clone(), v))
            .collect()
    }

    /// Quantities for `labels`, in the order requested.
    ///
    /// Fails on the first label that is absent; nothing is returned partially.
    pub fn select(&self, labels: &[K]) -> Result<Vec<f64>, LookupError> {
        let index = self.index();
        labels
            .iter()
            .map(|label| index.get(label).copied().ok_or_else(|| label.not_found()))
            .collect()
    }

    /// Copy holding only the first occurrence of each label in `labels`,
    /// in this series' order. Requested labels that are absent are skipped.
    #[must_use]
    pub fn restrict(&self, labels: &[K]) -> Self {
        self.index()
            .into_iter()
            .filter(|(k, _)| labels.contains(k))
            .map(|(k, v)| (k.clone(), v))
            .collect()
    }

    /// Label → first quantity, in first-appearance order
    fn index(&self) -> Map<&K, f64> {
        let mut index = Map::default();
        for (k, v) in &self.entries {
            index.entry(k).or_insert(*v);
        }
        index
    }
}

impl<K: Label, L: Into<K>> FromIterator<(L, f64)> for Quantities<K> {
    fn from_iter<I: IntoIterator<Item = (L, f64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
