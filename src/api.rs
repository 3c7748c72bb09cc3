//! HTTP adapter for the planner service.

use reqwest::StatusCode;
use reqwest::Url;
use reqwest::blocking::Response;
use serde::de::DeserializeOwned;

use crate::config::PlannerConfig;
use crate::error::PlannerError;
use crate::export::{self, ExportFormat};
use crate::traits::{MunicipalitySearch, PlanSource, RouteOptimizer};
use crate::wire::{
    ErrorBody, MunicipalityCandidate, PlanCollection, PlanRequest, RouteEnvelope, RouteRequest,
    SearchRequest, ServiceStatus,
};

const STATUS_PATH: &str = "/api/status";
const SEARCH_PATH: &str = "/api/search-municipality";
const PLAN_PATH: &str = "/api/plan";
const ROUTE_PATH: &str = "/api/route";

#[derive(Debug, Clone)]
pub struct PlannerApiClient {
    config: PlannerConfig,
    client: reqwest::blocking::Client,
}

impl PlannerApiClient {
    pub fn new(config: PlannerConfig) -> Result<Self, PlannerError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Health check (`GET /api/status`).
    pub fn status(&self) -> Result<ServiceStatus, PlannerError> {
        let response = self.client.get(self.config.endpoint(STATUS_PATH)).send()?;
        decode(response)
    }

    pub fn export_url(&self, kod_obce: &str, format: ExportFormat) -> Result<Url, PlannerError> {
        export::export_url(&self.config.base_url, kod_obce, format)
    }
}

impl MunicipalitySearch for PlannerApiClient {
    fn search(&self, query: &str) -> Result<Vec<MunicipalityCandidate>, PlannerError> {
        let response = self
            .client
            .post(self.config.endpoint(SEARCH_PATH))
            .json(&SearchRequest { q: query })
            .send()?;
        let candidates: Vec<MunicipalityCandidate> = decode(response)?;
        tracing::info!(query, count = candidates.len(), "municipality search finished");
        Ok(candidates)
    }
}

impl PlanSource for PlannerApiClient {
    fn plan(&self, request: &PlanRequest) -> Result<PlanCollection, PlannerError> {
        let response = self
            .client
            .post(self.config.endpoint(PLAN_PATH))
            .json(request)
            .send()?;
        let plan: PlanCollection = decode(response)?;
        tracing::info!(
            kod_obce = %request.kod_obce,
            count = plan.features.len(),
            "plan received"
        );
        Ok(plan)
    }
}

impl RouteOptimizer for PlannerApiClient {
    fn optimize(&self, request: &RouteRequest) -> Result<RouteEnvelope, PlannerError> {
        let response = self
            .client
            .post(self.config.endpoint(ROUTE_PATH))
            .json(request)
            .send()?;

        let status = response.status();
        let body = response.text()?;
        let envelope = route_envelope(status, &body)?;
        tracing::info!(
            stops = request.features.len(),
            engine = %request.engine,
            fallback = envelope.fallback.is_some(),
            "route received"
        );
        Ok(envelope)
    }
}

/// Interprets a route response body.
///
/// The service answers engine failures with 503 and a `fallback` route, so
/// any status carrying a fallback counts as a usable response.
fn route_envelope(status: StatusCode, body: &str) -> Result<RouteEnvelope, PlannerError> {
    if status.is_success() {
        return Ok(serde_json::from_str(body)?);
    }

    match serde_json::from_str::<RouteEnvelope>(body) {
        Ok(envelope) if envelope.fallback.is_some() => Ok(envelope),
        _ => Err(service_error(status, body)),
    }
}

fn decode<T: DeserializeOwned>(response: Response) -> Result<T, PlannerError> {
    let status = response.status();
    let body = response.text()?;
    if !status.is_success() {
        return Err(service_error(status, &body));
    }
    Ok(serde_json::from_str(&body)?)
}

fn service_error(status: StatusCode, body: &str) -> PlannerError {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .map(|err| err.message())
        .unwrap_or_else(|_| body.trim().to_string());
    tracing::warn!(status = status.as_u16(), detail = %detail, "planner service request failed");
    PlannerError::Service {
        status: status.as_u16(),
        detail,
    }
}
