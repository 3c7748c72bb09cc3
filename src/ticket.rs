//! Generation tickets for superseding in-flight requests.
//!
//! Every request start issues a ticket. A completion is applied only if its
//! ticket is still the latest one issued for the same request kind.

/// Which store action a ticket belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    Search,
    PlanLoad,
    RouteSubmit,
}

/// Proof of a started request. Not `Clone`: each completion consumes one.
#[derive(Debug, PartialEq, Eq)]
pub struct RequestTicket {
    kind: RequestKind,
    generation: u64,
}

impl RequestTicket {
    pub fn kind(&self) -> RequestKind {
        self.kind
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Generation counter for one request kind.
#[derive(Debug, Clone)]
pub struct RequestTracker {
    kind: RequestKind,
    latest: u64,
    in_flight: bool,
}

impl RequestTracker {
    pub fn new(kind: RequestKind) -> Self {
        Self {
            kind,
            latest: 0,
            in_flight: false,
        }
    }

    /// Starts a request, superseding any earlier one.
    pub fn issue(&mut self) -> RequestTicket {
        self.latest += 1;
        self.in_flight = true;
        RequestTicket {
            kind: self.kind,
            generation: self.latest,
        }
    }

    /// Invalidates outstanding tickets without starting a new request.
    pub fn supersede(&mut self) {
        self.latest += 1;
        self.in_flight = false;
    }

    pub fn is_current(&self, ticket: &RequestTicket) -> bool {
        ticket.kind == self.kind && ticket.generation == self.latest
    }

    /// Settles a completion. Returns `false` for stale tickets, which must
    /// not touch state.
    pub fn complete(&mut self, ticket: &RequestTicket) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(
                kind = ?ticket.kind,
                generation = ticket.generation,
                latest = self.latest,
                "discarding stale response"
            );
            return false;
        }
        self.in_flight = false;
        true
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }
}
