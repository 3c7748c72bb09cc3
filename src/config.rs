//! Client configuration.

use std::env;

use crate::routing::{RoutingEngine, RoutingProfile};

/// Settings for talking to the planner service.
///
/// `from_env` reads `PLANNER_API_URL`, `PLANNER_TIMEOUT_SECS`,
/// `PLANNER_ROUTING_ENGINE` and `PLANNER_ROUTING_PROFILE`, keeping the
/// default for anything unset or unparseable.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    /// Service root, without the `/api` prefix.
    pub base_url: String,
    pub timeout_secs: u64,
    /// Engine requested for plan loads and route submissions.
    pub engine: RoutingEngine,
    pub profile: RoutingProfile,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_URL.to_string(),
            timeout_secs: 15,
            engine: RoutingEngine::None,
            profile: RoutingProfile::Foot,
        }
    }
}

impl PlannerConfig {
    pub const DEFAULT_URL: &'static str = "http://localhost:8000";

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup (the environment in
    /// production, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("PLANNER_API_URL").filter(|url| !url.trim().is_empty()) {
            config.base_url = url.trim().to_string();
        }
        if let Some(raw) = lookup("PLANNER_TIMEOUT_SECS") {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout_secs = secs,
                _ => tracing::warn!(value = %raw, "ignoring invalid PLANNER_TIMEOUT_SECS"),
            }
        }
        if let Some(raw) = lookup("PLANNER_ROUTING_ENGINE") {
            match raw.parse() {
                Ok(engine) => config.engine = engine,
                Err(err) => tracing::warn!(error = %err, "ignoring PLANNER_ROUTING_ENGINE"),
            }
        }
        if let Some(raw) = lookup("PLANNER_ROUTING_PROFILE") {
            match raw.parse() {
                Ok(profile) => config.profile = profile,
                Err(err) => tracing::warn!(error = %err, "ignoring PLANNER_ROUTING_PROFILE"),
            }
        }

        config
    }

    /// `base_url` joined with an `/api/...` path.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
