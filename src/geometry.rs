//! GeoJSON line geometry for returned routes.
//!
//! Coordinates are kept in GeoJSON order (longitude, latitude) exactly as the
//! route service sends them. Map layers that want (latitude, longitude) pairs
//! go through [`LineString::positions`].

use serde::{Deserialize, Serialize};

const LINE_STRING: &str = "LineString";

/// A route path as a GeoJSON geometry object.
///
/// Point order follows the travelled path, which is not necessarily the
/// stop order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineString {
    #[serde(rename = "type", default = "line_string_kind")]
    kind: String,
    #[serde(default)]
    coordinates: Vec<(f64, f64)>,
}

fn line_string_kind() -> String {
    LINE_STRING.to_string()
}

impl LineString {
    /// Creates a line from (longitude, latitude) points.
    pub fn new(coordinates: Vec<(f64, f64)>) -> Self {
        Self {
            kind: line_string_kind(),
            coordinates,
        }
    }

    /// GeoJSON geometry type reported by the service.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Only `LineString` geometries are drawn as a route line.
    pub fn is_line_string(&self) -> bool {
        self.kind == LINE_STRING
    }

    pub fn coordinates(&self) -> &[(f64, f64)] {
        &self.coordinates
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Points as (latitude, longitude) for map rendering.
    pub fn positions(&self) -> Vec<(f64, f64)> {
        self.coordinates.iter().map(|&(lon, lat)| (lat, lon)).collect()
    }
}

impl Default for LineString {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
