//! Error type shared by the planner store and the HTTP adapter.

use thiserror::Error;

/// Errors surfaced by planner actions.
///
/// Input validation failures block an action before anything is sent.
/// Collaborator failures leave the previously applied state untouched.
#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("route stops without coordinates: {}", .0.join(", "))]
    MissingCoordinates(Vec<String>),

    #[error("no municipality selected")]
    NoMunicipality,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("planner service returned {status}: {detail}")]
    Service { status: u16, detail: String },

    #[error("invalid response payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("route response carried neither a route nor a fallback")]
    EmptyRouteResponse,

    #[error("invalid {kind}: {value:?}")]
    InvalidValue { kind: &'static str, value: String },

    #[error("invalid service URL: {0}")]
    InvalidUrl(String),
}
