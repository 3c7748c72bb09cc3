//! Planning features: one delivery target per feature.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Building classification of a delivery target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildingType {
    /// Single-family house (rodinný dům).
    #[serde(rename = "RD")]
    Rd,
    /// Multi-unit building (bytový dům).
    #[serde(rename = "BD")]
    Bd,
}

impl BuildingType {
    pub fn code(&self) -> &'static str {
        match self {
            BuildingType::Rd => "RD",
            BuildingType::Bd => "BD",
        }
    }
}

impl fmt::Display for BuildingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One physical delivery target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub id: String,
    pub typ: BuildingType,
    /// Estimated dwelling-unit count.
    pub byty: u32,
    /// Recommended leaflet count.
    pub letaky: u32,
    pub lon: Option<f64>,
    pub lat: Option<f64>,
    pub address: String,
    pub cast_obce: Option<String>,
    pub psc: Option<String>,
    pub doporuceni: Vec<String>,
    pub nejiste: bool,
}

impl Feature {
    /// (longitude, latitude) when both are known.
    pub fn position(&self) -> Option<(f64, f64)> {
        match (self.lon, self.lat) {
            (Some(lon), Some(lat)) => Some((lon, lat)),
            _ => None,
        }
    }

    pub fn is_mappable(&self) -> bool {
        self.position().is_some()
    }

    /// Display label for lists: the address, or the id when it is blank.
    pub fn label(&self) -> &str {
        if self.address.is_empty() {
            &self.id
        } else {
            &self.address
        }
    }
}

/// The municipality a plan is loaded for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Municipality {
    pub name: String,
    pub kod: String,
}

impl Municipality {
    pub fn new(name: impl Into<String>, kod: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kod: kod.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feature(address: &str, lon: Option<f64>, lat: Option<f64>) -> Feature {
        Feature {
            id: "so-1".into(),
            typ: BuildingType::Rd,
            byty: 1,
            letaky: 1,
            lon,
            lat,
            address: address.into(),
            cast_obce: None,
            psc: None,
            doporuceni: Vec::new(),
            nejiste: false,
        }
    }

    #[test]
    fn position_requires_both_axes() {
        assert_eq!(feature("", Some(15.0), Some(49.0)).position(), Some((15.0, 49.0)));
        assert!(!feature("", Some(15.0), None).is_mappable());
        assert!(!feature("", None, Some(49.0)).is_mappable());
    }

    #[test]
    fn label_falls_back_to_id() {
        assert_eq!(feature("Husova 12", None, None).label(), "Husova 12");
        assert_eq!(feature("", None, None).label(), "so-1");
    }

    #[test]
    fn building_type_wire_codes() {
        let typ: BuildingType = serde_json::from_str("\"BD\"").unwrap();
        assert_eq!(typ, BuildingType::Bd);
        assert_eq!(BuildingType::Rd.to_string(), "RD");
    }
}
