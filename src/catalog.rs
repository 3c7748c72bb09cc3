//! Feature catalog for the loaded municipality.

use std::collections::HashSet;
use std::sync::Arc;

use crate::feature::Feature;

/// The full feature set of the active plan.
///
/// Entries are shared: the filtered view and the route list hold clones of
/// the same `Arc`, never copies of the feature.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    features: Vec<Arc<Feature>>,
}

impl Catalog {
    pub fn new(features: Vec<Feature>) -> Self {
        let mut catalog = Self::default();
        catalog.replace(features);
        catalog
    }

    /// Replaces the whole feature set.
    ///
    /// Ids stay unique: a repeated id keeps its first occurrence and later
    /// ones are dropped.
    pub fn replace(&mut self, features: Vec<Feature>) {
        let mut seen: HashSet<String> = HashSet::with_capacity(features.len());
        let mut kept = Vec::with_capacity(features.len());
        let mut dropped = 0usize;

        for feature in features {
            if seen.insert(feature.id.clone()) {
                kept.push(Arc::new(feature));
            } else {
                dropped += 1;
            }
        }

        if dropped > 0 {
            tracing::warn!(dropped, "dropped features with duplicate ids");
        }

        self.features = kept;
    }

    pub fn features(&self) -> &[Arc<Feature>] {
        &self.features
    }

    pub fn get(&self, id: &str) -> Option<&Arc<Feature>> {
        self.features.iter().find(|feature| feature.id == id)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
