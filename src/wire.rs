//! Request and response shapes exchanged with the planner service.

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;
use crate::feature::{BuildingType, Feature};
use crate::geometry::LineString;
use crate::route::RouteResult;
use crate::routing::{RoutingEngine, RoutingProfile};

#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest<'a> {
    pub q: &'a str,
}

/// One hit of a municipality search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MunicipalityCandidate {
    pub name: String,
    pub kod_obce: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanRequest {
    pub kod_obce: String,
    pub routing: RoutingEngine,
}

/// GeoJSON feature collection returned by plan generation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlanCollection {
    #[serde(default)]
    pub features: Vec<PlanFeature>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlanFeature {
    #[serde(default)]
    pub geometry: Option<PointGeometry>,
    pub properties: PlanProperties,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PointGeometry {
    /// `[lon, lat]`, or null for objects without a definition point.
    #[serde(default)]
    pub coordinates: Option<Vec<f64>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlanProperties {
    pub id_obj: String,
    pub typ: BuildingType,
    pub byty_odhad: u32,
    pub letaky: u32,
    #[serde(default)]
    pub ulice: Option<String>,
    #[serde(default)]
    pub cp_ce: Option<String>,
    #[serde(default)]
    pub cast_obce: Option<String>,
    #[serde(default)]
    pub psc: Option<String>,
    #[serde(default)]
    pub doporuceni: Vec<String>,
    #[serde(default)]
    pub nejiste: bool,
}

impl PlanFeature {
    /// Converts to a catalog feature; `None` when the entry has no coordinates.
    pub fn into_feature(self) -> Option<Feature> {
        let coordinates = self.geometry?.coordinates?;
        let (lon, lat) = match coordinates.as_slice() {
            [lon, lat, ..] => (*lon, *lat),
            _ => return None,
        };

        let props = self.properties;
        let address = format!(
            "{} {}",
            props.ulice.as_deref().unwrap_or_default(),
            props.cp_ce.as_deref().unwrap_or_default()
        )
        .trim()
        .to_string();

        Some(Feature {
            id: props.id_obj,
            typ: props.typ,
            byty: props.byty_odhad,
            letaky: props.letaky,
            lon: Some(lon),
            lat: Some(lat),
            address,
            cast_obce: props.cast_obce,
            psc: props.psc,
            doporuceni: props.doporuceni,
            nejiste: props.nejiste,
        })
    }
}

impl PlanCollection {
    /// Catalog-ready features, dropping entries without coordinates.
    pub fn into_features(self) -> Vec<Feature> {
        let received = self.features.len();
        let features: Vec<Feature> = self
            .features
            .into_iter()
            .filter_map(PlanFeature::into_feature)
            .collect();
        if features.len() < received {
            tracing::debug!(
                dropped = received - features.len(),
                "skipped plan entries without coordinates"
            );
        }
        features
    }
}

/// A route stop as submitted for optimization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePoint {
    pub id: String,
    pub lon: f64,
    pub lat: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteRequest {
    pub features: Vec<RoutePoint>,
    pub profile: RoutingProfile,
    pub engine: RoutingEngine,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct RouteProperties {
    #[serde(default)]
    pub order: Vec<String>,
    #[serde(default)]
    pub distance_m: Option<f64>,
    #[serde(default)]
    pub duration_s: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RoutePayload {
    #[serde(default)]
    pub geometry: LineString,
    #[serde(default)]
    pub properties: RouteProperties,
}

impl From<RoutePayload> for RouteResult {
    fn from(payload: RoutePayload) -> Self {
        RouteResult {
            geometry: payload.geometry,
            order: payload.properties.order,
            distance_m: payload.properties.distance_m.unwrap_or_default(),
            duration_s: payload.properties.duration_s.unwrap_or_default(),
        }
    }
}

/// Raw route response: a primary route, a fallback, or both.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct RouteEnvelope {
    #[serde(default)]
    pub geometry: Option<LineString>,
    #[serde(default)]
    pub properties: Option<RouteProperties>,
    #[serde(default)]
    pub engine_error: Option<String>,
    #[serde(default)]
    pub fallback: Option<RoutePayload>,
}

impl RouteEnvelope {
    pub fn primary(geometry: LineString, properties: RouteProperties) -> Self {
        Self {
            geometry: Some(geometry),
            properties: Some(properties),
            ..Self::default()
        }
    }

    /// The authoritative route. A fallback always wins over the primary fields.
    pub fn resolve(self) -> Result<RouteResult, PlannerError> {
        if let Some(fallback) = self.fallback {
            if let Some(reason) = &self.engine_error {
                tracing::warn!(reason = %reason, "routing engine failed, using fallback route");
            }
            return Ok(fallback.into());
        }

        match (self.geometry, self.properties) {
            (Some(geometry), Some(properties)) => Ok(RoutePayload {
                geometry,
                properties,
            }
            .into()),
            _ => Err(PlannerError::EmptyRouteResponse),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceStatus {
    pub status: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Error body of a rejected request (`{"detail": ...}`).
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub detail: serde_json::Value,
}

impl ErrorBody {
    pub fn message(&self) -> String {
        match &self.detail {
            serde_json::Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }
}
