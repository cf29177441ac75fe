//! Results of planning one request.

use std::fmt;

use serde::Serialize;

use crate::domain::{CityId, RestrictionKind, TransportMode};

/// One step of a route: the mode taken and the city it arrives at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hop {
    pub mode: TransportMode,
    pub city: CityId,
}

/// A feasible route with both of its metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Itinerary {
    pub origin: CityId,
    /// Steps in travel order. Empty when origin and destination coincide.
    pub hops: Vec<Hop>,
    /// Minutes from departure to arrival, waits included.
    pub duration: u64,
    pub cost: u64,
}

impl Itinerary {
    /// The city where the route ends.
    pub fn destination(&self) -> CityId {
        self.hops.last().map(|hop| hop.city).unwrap_or(self.origin)
    }

    /// Cities visited in order, origin included.
    pub fn cities(&self) -> impl Iterator<Item = CityId> + '_ {
        std::iter::once(self.origin).chain(self.hops.iter().map(|hop| hop.city))
    }
}

/// Why a request has no route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Infeasible {
    /// The start or end city is not in the network
    EndpointOutOfRange,
    /// No allowed route reaches the destination
    NoRoute,
    /// The best route breaks a trip-total cap
    TripCapExceeded {
        kind: RestrictionKind,
        limit: u64,
        actual: u64,
    },
}

impl fmt::Display for Infeasible {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndpointOutOfRange => f.write_str("endpoint out of range"),
            Self::NoRoute => f.write_str("no route"),
            Self::TripCapExceeded {
                kind,
                limit,
                actual,
            } => write!(f, "{kind} cap {limit} exceeded by best route ({actual})"),
        }
    }
}

/// The answer to one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    Feasible(Itinerary),
    Infeasible(Infeasible),
}

impl RouteOutcome {
    pub fn is_feasible(&self) -> bool {
        matches!(self, Self::Feasible(_))
    }

    pub fn itinerary(&self) -> Option<&Itinerary> {
        match self {
            Self::Feasible(itinerary) => Some(itinerary),
            Self::Infeasible(_) => None,
        }
    }
}
