//! Filter criteria and the derived (filtered) view of the catalog.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::feature::{BuildingType, Feature};

/// Building-type selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TypeFilter {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "RD")]
    Rd,
    #[serde(rename = "BD")]
    Bd,
}

impl TypeFilter {
    pub fn accepts(&self, typ: BuildingType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Rd => typ == BuildingType::Rd,
            TypeFilter::Bd => typ == BuildingType::Bd,
        }
    }
}

/// Current filter settings.
///
/// `min_byty` and `max_byty` are inclusive and not kept ordered; an inverted
/// range simply matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub typ: TypeFilter,
    pub nejiste_only: bool,
    pub min_byty: u32,
    pub max_byty: u32,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            typ: TypeFilter::All,
            nejiste_only: false,
            min_byty: 0,
            max_byty: 100,
        }
    }
}

impl FilterCriteria {
    pub fn matches(&self, feature: &Feature) -> bool {
        self.typ.accepts(feature.typ)
            && (!self.nejiste_only || feature.nejiste)
            && feature.byty >= self.min_byty
            && feature.byty <= self.max_byty
    }

    /// Overwrites only the fields set in `update`.
    pub fn merge(&mut self, update: CriteriaUpdate) {
        if let Some(typ) = update.typ {
            self.typ = typ;
        }
        if let Some(nejiste_only) = update.nejiste_only {
            self.nejiste_only = nejiste_only;
        }
        if let Some(min_byty) = update.min_byty {
            self.min_byty = min_byty;
        }
        if let Some(max_byty) = update.max_byty {
            self.max_byty = max_byty;
        }
    }
}

/// Partial criteria change. Unset fields keep their current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CriteriaUpdate {
    pub typ: Option<TypeFilter>,
    pub nejiste_only: Option<bool>,
    pub min_byty: Option<u32>,
    pub max_byty: Option<u32>,
}

impl CriteriaUpdate {
    pub fn typ(mut self, typ: TypeFilter) -> Self {
        self.typ = Some(typ);
        self
    }

    pub fn nejiste_only(mut self, nejiste_only: bool) -> Self {
        self.nejiste_only = Some(nejiste_only);
        self
    }

    pub fn min_byty(mut self, min_byty: u32) -> Self {
        self.min_byty = Some(min_byty);
        self
    }

    pub fn max_byty(mut self, max_byty: u32) -> Self {
        self.max_byty = Some(max_byty);
        self
    }
}

/// Holds criteria and the view derived from them.
///
/// Criteria changes are batched: `set_criteria` only merges, `apply`
/// recomputes the view in one pass.
#[derive(Debug, Clone, Default)]
pub struct FilterEngine {
    criteria: FilterCriteria,
    view: Vec<Arc<Feature>>,
}

impl FilterEngine {
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn set_criteria(&mut self, update: CriteriaUpdate) {
        self.criteria.merge(update);
    }

    /// Recomputes the view from `catalog`, keeping catalog order.
    pub fn apply(&mut self, catalog: &Catalog) {
        self.view = filter_features(catalog.features(), &self.criteria);
        tracing::debug!(
            visible = self.view.len(),
            total = catalog.len(),
            "filters applied"
        );
    }

    pub fn view(&self) -> &[Arc<Feature>] {
        &self.view
    }
}

/// Stable filter over shared features.
pub fn filter_features(features: &[Arc<Feature>], criteria: &FilterCriteria) -> Vec<Arc<Feature>> {
    features
        .iter()
        .filter(|feature| criteria.matches(feature))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feature(id: &str, typ: BuildingType, byty: u32, nejiste: bool) -> Feature {
        Feature {
            id: id.into(),
            typ,
            byty,
            letaky: byty,
            lon: None,
            lat: None,
            address: String::new(),
            cast_obce: None,
            psc: None,
            doporuceni: Vec::new(),
            nejiste,
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            feature("a", BuildingType::Rd, 1, false),
            feature("b", BuildingType::Bd, 8, true),
            feature("c", BuildingType::Bd, 40, false),
            feature("d", BuildingType::Rd, 1, true),
            feature("e", BuildingType::Bd, 150, true),
        ])
    }

    fn ids(engine: &FilterEngine) -> Vec<&str> {
        engine.view().iter().map(|f| f.id.as_str()).collect()
    }

    #[test]
    fn default_criteria_cap_at_one_hundred_units() {
        let mut engine = FilterEngine::default();
        engine.apply(&catalog());
        assert_eq!(ids(&engine), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn type_filter() {
        let mut engine = FilterEngine::default();
        engine.set_criteria(CriteriaUpdate::default().typ(TypeFilter::Bd).max_byty(1000));
        engine.apply(&catalog());
        assert_eq!(ids(&engine), vec!["b", "c", "e"]);
    }

    #[test]
    fn nejiste_only_filter() {
        let mut engine = FilterEngine::default();
        engine.set_criteria(CriteriaUpdate::default().nejiste_only(true));
        engine.apply(&catalog());
        assert_eq!(ids(&engine), vec!["b", "d"]);
    }

    #[test]
    fn byty_bounds_are_inclusive() {
        let mut engine = FilterEngine::default();
        engine.set_criteria(CriteriaUpdate::default().min_byty(8).max_byty(40));
        engine.apply(&catalog());
        assert_eq!(ids(&engine), vec!["b", "c"]);
    }

    #[test]
    fn inverted_range_is_empty() {
        let mut engine = FilterEngine::default();
        engine.set_criteria(CriteriaUpdate::default().min_byty(50).max_byty(10));
        engine.apply(&catalog());
        assert!(engine.view().is_empty());
    }

    #[test]
    fn set_criteria_does_not_recompute() {
        let mut engine = FilterEngine::default();
        engine.apply(&catalog());
        engine.set_criteria(CriteriaUpdate::default().typ(TypeFilter::Rd));
        assert_eq!(engine.view().len(), 4);
        engine.apply(&catalog());
        assert_eq!(ids(&engine), vec!["a", "d"]);
    }

    #[test]
    fn merge_keeps_unset_fields() {
        let mut criteria = FilterCriteria::default();
        criteria.merge(CriteriaUpdate::default().typ(TypeFilter::Bd));
        criteria.merge(CriteriaUpdate::default().min_byty(3));
        assert_eq!(
            criteria,
            FilterCriteria {
                typ: TypeFilter::Bd,
                nejiste_only: false,
                min_byty: 3,
                max_byty: 100,
            }
        );
    }
}
