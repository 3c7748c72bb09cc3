//! Routing selectors sent to the route optimizer and the plan service.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;

/// Travel mode used by the routing engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutingProfile {
    #[default]
    Foot,
    Car,
}

impl RoutingProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoutingProfile::Foot => "foot",
            RoutingProfile::Car => "car",
        }
    }
}

/// Which engine the service should route with.
///
/// `None` asks the service for its built-in nearest-neighbour ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutingEngine {
    Osrm,
    Graphhopper,
    #[default]
    None,
}

impl RoutingEngine {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoutingEngine::Osrm => "osrm",
            RoutingEngine::Graphhopper => "graphhopper",
            RoutingEngine::None => "none",
        }
    }
}

impl fmt::Display for RoutingProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for RoutingEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoutingProfile {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "foot" => Ok(RoutingProfile::Foot),
            "car" => Ok(RoutingProfile::Car),
            _ => Err(PlannerError::InvalidValue {
                kind: "routing profile",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for RoutingEngine {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "osrm" => Ok(RoutingEngine::Osrm),
            "graphhopper" => Ok(RoutingEngine::Graphhopper),
            "none" => Ok(RoutingEngine::None),
            _ => Err(PlannerError::InvalidValue {
                kind: "routing engine",
                value: s.to_string(),
            }),
        }
    }
}
