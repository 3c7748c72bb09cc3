//! Collaborator interfaces consumed by the planner store.
//!
//! These are intentionally narrow: each covers one service call. The HTTP
//! client in [`crate::api`] implements all of them; tests supply doubles.

use crate::error::PlannerError;
use crate::wire::{MunicipalityCandidate, PlanCollection, PlanRequest, RouteEnvelope, RouteRequest};

/// Free-text municipality lookup.
pub trait MunicipalitySearch {
    fn search(&self, query: &str) -> Result<Vec<MunicipalityCandidate>, PlannerError>;
}

/// Produces the feature collection for a municipality.
pub trait PlanSource {
    fn plan(&self, request: &PlanRequest) -> Result<PlanCollection, PlannerError>;
}

/// Computes a route over the submitted stops.
///
/// Returns the raw envelope; precedence between a primary route and a
/// fallback is resolved by the caller.
pub trait RouteOptimizer {
    fn optimize(&self, request: &RouteRequest) -> Result<RouteEnvelope, PlannerError>;
}
