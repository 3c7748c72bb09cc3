//! flyer-planner client core
//!
//! Planning state for door-to-door leaflet distribution: a catalog of
//! geocoded addresses, a filtered view over it, and an operator-curated
//! route list submitted to an external route optimizer.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod feature;
pub mod filter;
pub mod geometry;
pub mod route;
pub mod routing;
pub mod stats;
pub mod store;
pub mod ticket;
pub mod traits;
pub mod wire;

pub use error::PlannerError;
pub use store::PlannerStore;
