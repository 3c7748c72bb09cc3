//! Summary figures over the filtered view.

use std::sync::Arc;

use crate::feature::{BuildingType, Feature};

/// Aggregates for a set of features. Derived only, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Stats {
    pub total: usize,
    pub rd: usize,
    pub bd: usize,
    pub byty: u64,
    pub letaky: u64,
    pub nejiste: usize,
    pub nejiste_percent: f64,
}

impl Stats {
    pub fn from_features(features: &[Arc<Feature>]) -> Self {
        let mut stats = Stats {
            total: features.len(),
            ..Stats::default()
        };

        for feature in features {
            match feature.typ {
                BuildingType::Rd => stats.rd += 1,
                BuildingType::Bd => stats.bd += 1,
            }
            stats.byty += u64::from(feature.byty);
            stats.letaky += u64::from(feature.letaky);
            if feature.nejiste {
                stats.nejiste += 1;
            }
        }

        if stats.total > 0 {
            stats.nejiste_percent = stats.nejiste as f64 / stats.total as f64 * 100.0;
        }

        stats
    }
}
