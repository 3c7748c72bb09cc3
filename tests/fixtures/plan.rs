//! Plan fixtures for Rudíkov-like village data.
//!
//! Coordinates are real-looking WGS84 points around 49.29N / 15.96E.

use flyer_planner::feature::{BuildingType, Feature};
use flyer_planner::wire::PlanCollection;

/// Builder for catalog features with sensible defaults.
#[derive(Clone, Debug)]
pub struct TestFeature {
    feature: Feature,
}

impl TestFeature {
    pub fn new(id: &str) -> Self {
        Self {
            feature: Feature {
                id: id.to_string(),
                typ: BuildingType::Rd,
                byty: 1,
                letaky: 1,
                lon: Some(15.96),
                lat: Some(49.29),
                address: String::new(),
                cast_obce: None,
                psc: None,
                doporuceni: Vec::new(),
                nejiste: false,
            },
        }
    }

    pub fn bd(mut self, byty: u32) -> Self {
        self.feature.typ = BuildingType::Bd;
        self.feature.byty = byty;
        self.feature.letaky = byty;
        self
    }

    pub fn byty(mut self, byty: u32) -> Self {
        self.feature.byty = byty;
        self
    }

    pub fn nejiste(mut self) -> Self {
        self.feature.nejiste = true;
        self
    }

    pub fn at(mut self, lon: f64, lat: f64) -> Self {
        self.feature.lon = Some(lon);
        self.feature.lat = Some(lat);
        self
    }

    pub fn unlocated(mut self) -> Self {
        self.feature.lon = None;
        self.feature.lat = None;
        self
    }

    pub fn address(mut self, address: &str) -> Self {
        self.feature.address = address.to_string();
        self
    }

    pub fn build(self) -> Feature {
        self.feature
    }
}

/// The two-feature catalog used in the documented end-to-end example.
pub fn example_catalog() -> Vec<Feature> {
    vec![
        TestFeature::new("a").byty(2).build(),
        TestFeature::new("b").bd(8).nejiste().build(),
    ]
}

pub const PLAN_JSON: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {
            "type": "Feature",
            "geometry": {"type": "Point", "coordinates": [15.9581, 49.2893]},
            "properties": {
                "id_obj": "21790241", "typ": "RD", "byty_odhad": 1, "letaky": 1,
                "ulice": "Rudíkov", "cp_ce": "14", "cast_obce": "Rudíkov", "psc": "67505",
                "doporuceni": ["Standardní doručení"], "nejiste": false
            }
        },
        {
            "type": "Feature",
            "geometry": {"type": "Point", "coordinates": [15.9602, 49.2901]},
            "properties": {
                "id_obj": "21790259", "typ": "BD", "byty_odhad": 12, "letaky": 12,
                "ulice": "Rudíkov", "cp_ce": "210", "cast_obce": "Rudíkov", "psc": "67505",
                "doporuceni": ["Zvonek u vchodu", "Vhodit do schránek"], "nejiste": false
            }
        },
        {
            "type": "Feature",
            "geometry": {"type": "Point", "coordinates": null},
            "properties": {
                "id_obj": "21790267", "typ": "RD", "byty_odhad": 1, "letaky": 1,
                "ulice": null, "cp_ce": "301", "doporuceni": []
            }
        },
        {
            "type": "Feature",
            "geometry": {"type": "Point", "coordinates": [15.9633, 49.2885]},
            "properties": {
                "id_obj": "21790275", "typ": "BD", "byty_odhad": 100, "letaky": 100,
                "ulice": "Trnava", "cp_ce": "5", "cast_obce": "Trnava", "psc": "67505",
                "doporuceni": ["Zvonek u vchodu"], "nejiste": true
            }
        }
    ]
}"#;

pub fn sample_plan() -> PlanCollection {
    serde_json::from_str(PLAN_JSON).expect("plan fixture parses")
}
