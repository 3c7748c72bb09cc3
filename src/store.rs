//! Planner state store.
//!
//! `PlannerStore` is the single owner of planning state. Every public method
//! is one transition: it either applies fully or leaves the previous state
//! untouched. Collaborators are passed in per call.
//!
//! Asynchronous presentation layers use the `begin_*` / `finish_*` pairs and
//! run the collaborator call themselves; the ticket returned by `begin_*`
//! decides whether the completion still applies. Synchronous callers use
//! [`PlannerStore::search`], [`PlannerStore::load_plan`] and
//! [`PlannerStore::optimize_route`].

use std::sync::Arc;

use reqwest::Url;

use crate::catalog::Catalog;
use crate::config::PlannerConfig;
use crate::error::PlannerError;
use crate::export::{self, ExportFormat};
use crate::feature::{Feature, Municipality};
use crate::filter::{CriteriaUpdate, FilterCriteria, FilterEngine};
use crate::route::{Direction, RouteList, RouteResult};
use crate::routing::{RoutingEngine, RoutingProfile};
use crate::stats::Stats;
use crate::ticket::{RequestKind, RequestTicket, RequestTracker};
use crate::traits::{MunicipalitySearch, PlanSource, RouteOptimizer};
use crate::wire::{MunicipalityCandidate, PlanCollection, PlanRequest, RouteEnvelope, RouteRequest};

/// Queries shorter than this never reach the search service.
pub const MIN_QUERY_CHARS: usize = 3;

#[derive(Debug, Clone)]
pub struct PlannerStore {
    municipality: Option<Municipality>,
    catalog: Catalog,
    filter: FilterEngine,
    route: RouteList,
    route_result: Option<RouteResult>,
    query: String,
    candidates: Vec<MunicipalityCandidate>,
    search_requests: RequestTracker,
    plan_requests: RequestTracker,
    route_requests: RequestTracker,
    last_error: Option<String>,
}

impl Default for PlannerStore {
    fn default() -> Self {
        Self {
            municipality: None,
            catalog: Catalog::default(),
            filter: FilterEngine::default(),
            route: RouteList::default(),
            route_result: None,
            query: String::new(),
            candidates: Vec::new(),
            search_requests: RequestTracker::new(RequestKind::Search),
            plan_requests: RequestTracker::new(RequestKind::PlanLoad),
            route_requests: RequestTracker::new(RequestKind::RouteSubmit),
            last_error: None,
        }
    }
}

impl PlannerStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Read access
    // ------------------------------------------------------------------

    pub fn municipality(&self) -> Option<&Municipality> {
        self.municipality.as_ref()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn criteria(&self) -> &FilterCriteria {
        self.filter.criteria()
    }

    /// Features passing the current criteria, in catalog order.
    pub fn filtered(&self) -> &[Arc<Feature>] {
        self.filter.view()
    }

    /// Filtered features that can be placed on a map.
    pub fn mappable(&self) -> impl Iterator<Item = &Arc<Feature>> {
        self.filter.view().iter().filter(|feature| feature.is_mappable())
    }

    pub fn stats(&self) -> Stats {
        Stats::from_features(self.filter.view())
    }

    pub fn route_list(&self) -> &RouteList {
        &self.route
    }

    pub fn route_result(&self) -> Option<&RouteResult> {
        self.route_result.as_ref()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn candidates(&self) -> &[MunicipalityCandidate] {
        &self.candidates
    }

    /// Message of the most recent failed action, cleared by the next success.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_searching(&self) -> bool {
        self.search_requests.in_flight()
    }

    pub fn is_loading_plan(&self) -> bool {
        self.plan_requests.in_flight()
    }

    pub fn is_optimizing(&self) -> bool {
        self.route_requests.in_flight()
    }

    // ------------------------------------------------------------------
    // Municipality search
    // ------------------------------------------------------------------

    /// Records `query` and supersedes any in-flight search.
    ///
    /// Returns `None` for queries below [`MIN_QUERY_CHARS`]; candidates are
    /// cleared and no request should be made.
    pub fn begin_search(&mut self, query: &str) -> Option<RequestTicket> {
        self.query = query.to_string();
        if query.chars().count() < MIN_QUERY_CHARS {
            self.search_requests.supersede();
            self.candidates.clear();
            return None;
        }
        Some(self.search_requests.issue())
    }

    /// Applies a search completion. Returns `Ok(false)` for a superseded
    /// search, which leaves the candidates alone.
    pub fn finish_search(
        &mut self,
        ticket: RequestTicket,
        result: Result<Vec<MunicipalityCandidate>, PlannerError>,
    ) -> Result<bool, PlannerError> {
        if !self.search_requests.complete(&ticket) {
            return Ok(false);
        }
        match result {
            Ok(candidates) => {
                self.candidates = candidates;
                self.last_error = None;
                Ok(true)
            }
            Err(err) => {
                self.candidates.clear();
                Err(self.fail(err))
            }
        }
    }

    pub fn search<S: MunicipalitySearch>(
        &mut self,
        service: &S,
        query: &str,
    ) -> Result<&[MunicipalityCandidate], PlannerError> {
        if let Some(ticket) = self.begin_search(query) {
            let result = service.search(query);
            self.finish_search(ticket, result)?;
        }
        Ok(&self.candidates)
    }

    /// Makes `candidate` the active municipality and ends the search.
    ///
    /// The loaded catalog stays until the next plan load.
    pub fn select_candidate(&mut self, candidate: &MunicipalityCandidate) {
        self.set_municipality(Municipality::new(&candidate.name, &candidate.kod_obce));
        self.query = candidate.name.clone();
        self.candidates.clear();
        self.search_requests.supersede();
    }

    /// Selecting a different municipality supersedes an in-flight plan load
    /// for the previous one.
    pub fn set_municipality(&mut self, municipality: Municipality) {
        tracing::debug!(
            kod = %municipality.kod,
            name = %municipality.name,
            "municipality selected"
        );
        let changed = self
            .municipality
            .as_ref()
            .is_none_or(|current| current.kod != municipality.kod);
        if changed {
            self.plan_requests.supersede();
        }
        self.municipality = Some(municipality);
    }

    // ------------------------------------------------------------------
    // Plan load / catalog
    // ------------------------------------------------------------------

    pub fn begin_plan_load(
        &mut self,
        engine: RoutingEngine,
    ) -> Result<(RequestTicket, PlanRequest), PlannerError> {
        let Some(kod_obce) = self.municipality.as_ref().map(|m| m.kod.clone()) else {
            return Err(self.fail(PlannerError::NoMunicipality));
        };
        let ticket = self.plan_requests.issue();
        Ok((ticket, PlanRequest { kod_obce, routing: engine }))
    }

    /// Applies a plan completion: the catalog is replaced and all derived
    /// state reset. A failed load keeps the current catalog.
    pub fn finish_plan_load(
        &mut self,
        ticket: RequestTicket,
        result: Result<PlanCollection, PlannerError>,
    ) -> Result<bool, PlannerError> {
        if !self.plan_requests.complete(&ticket) {
            return Ok(false);
        }
        match result {
            Ok(plan) => {
                self.replace_catalog(plan.into_features());
                self.last_error = None;
                Ok(true)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Loads the plan for the selected municipality. Returns the catalog size.
    pub fn load_plan<P: PlanSource>(
        &mut self,
        source: &P,
        engine: RoutingEngine,
    ) -> Result<usize, PlannerError> {
        let (ticket, request) = self.begin_plan_load(engine)?;
        let result = source.plan(&request);
        self.finish_plan_load(ticket, result)?;
        Ok(self.catalog.len())
    }

    /// [`Self::load_plan`] with the engine configured in `config`.
    pub fn load_plan_using<P: PlanSource>(
        &mut self,
        source: &P,
        config: &PlannerConfig,
    ) -> Result<usize, PlannerError> {
        self.load_plan(source, config.engine)
    }

    /// Replaces the catalog in one transition: the filtered view is
    /// recomputed with the current criteria, the route list and route result
    /// are cleared, and in-flight route submissions are superseded.
    pub fn replace_catalog(&mut self, features: Vec<Feature>) {
        self.catalog.replace(features);
        self.filter.apply(&self.catalog);
        self.route.clear();
        self.route_result = None;
        self.route_requests.supersede();
        tracing::debug!(
            features = self.catalog.len(),
            visible = self.filter.view().len(),
            "catalog replaced"
        );
    }

    // ------------------------------------------------------------------
    // Filters
    // ------------------------------------------------------------------

    /// Merges `update` without recomputing; follow with [`Self::apply_filters`].
    pub fn set_criteria(&mut self, update: CriteriaUpdate) {
        self.filter.set_criteria(update);
    }

    pub fn apply_filters(&mut self) {
        self.filter.apply(&self.catalog);
    }

    pub fn update_filters(&mut self, update: CriteriaUpdate) {
        self.set_criteria(update);
        self.apply_filters();
    }

    // ------------------------------------------------------------------
    // Route list
    // ------------------------------------------------------------------

    /// Adds the catalog feature `id` to the route list.
    ///
    /// Returns `false` when it is already listed or not in the catalog.
    pub fn add_to_route(&mut self, id: &str) -> bool {
        match self.catalog.get(id) {
            Some(feature) => self.route.add(Arc::clone(feature)),
            None => {
                tracing::debug!(id, "ignoring route add for unknown feature");
                false
            }
        }
    }

    pub fn remove_from_route(&mut self, id: &str) -> bool {
        self.route.remove(id)
    }

    pub fn move_route_entry(&mut self, index: usize, direction: Direction) -> bool {
        self.route.move_entry(index, direction)
    }

    /// Empties the route list and drops the route result.
    pub fn clear_route(&mut self) {
        self.route.clear();
        self.route_result = None;
        self.route_requests.supersede();
    }

    // ------------------------------------------------------------------
    // Route optimization
    // ------------------------------------------------------------------

    /// Builds the route request. `Ok(None)` for an empty route list, which
    /// is not submitted.
    pub fn begin_route_submit(
        &mut self,
        profile: RoutingProfile,
        engine: RoutingEngine,
    ) -> Result<Option<(RequestTicket, RouteRequest)>, PlannerError> {
        if self.route.is_empty() {
            tracing::debug!("route list empty, nothing to optimize");
            return Ok(None);
        }
        let features = match self.route.build_submission() {
            Ok(features) => features,
            Err(err) => return Err(self.fail(err)),
        };
        let ticket = self.route_requests.issue();
        Ok(Some((
            ticket,
            RouteRequest {
                features,
                profile,
                engine,
            },
        )))
    }

    /// Applies a route completion. A fallback payload wins over the primary
    /// route. Failures keep the previous result.
    pub fn finish_route_submit(
        &mut self,
        ticket: RequestTicket,
        result: Result<RouteEnvelope, PlannerError>,
    ) -> Result<bool, PlannerError> {
        if !self.route_requests.complete(&ticket) {
            return Ok(false);
        }
        match result.and_then(RouteEnvelope::resolve) {
            Ok(route) => {
                tracing::debug!(
                    stops = route.order.len(),
                    distance_m = route.distance_m,
                    duration_s = route.duration_s,
                    "route result stored"
                );
                self.route_result = Some(route);
                self.last_error = None;
                Ok(true)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Submits the route list. `Ok(None)` when the list is empty.
    pub fn optimize_route<O: RouteOptimizer>(
        &mut self,
        optimizer: &O,
        profile: RoutingProfile,
        engine: RoutingEngine,
    ) -> Result<Option<&RouteResult>, PlannerError> {
        let Some((ticket, request)) = self.begin_route_submit(profile, engine)? else {
            return Ok(None);
        };
        let result = optimizer.optimize(&request);
        self.finish_route_submit(ticket, result)?;
        Ok(self.route_result.as_ref())
    }

    /// [`Self::optimize_route`] with the profile and engine configured in
    /// `config`.
    pub fn optimize_route_using<O: RouteOptimizer>(
        &mut self,
        optimizer: &O,
        config: &PlannerConfig,
    ) -> Result<Option<&RouteResult>, PlannerError> {
        self.optimize_route(optimizer, config.profile, config.engine)
    }

    // ------------------------------------------------------------------
    // Export
    // ------------------------------------------------------------------

    pub fn export_url(&self, base_url: &str, format: ExportFormat) -> Result<Url, PlannerError> {
        let municipality = self.municipality.as_ref().ok_or(PlannerError::NoMunicipality)?;
        export::export_url(base_url, &municipality.kod, format)
    }

    fn fail(&mut self, err: PlannerError) -> PlannerError {
        tracing::warn!(error = %err, "planner action failed");
        self.last_error = Some(err.to_string());
        err
    }
}
