//! Constrained shortest-route search.
//!
//! A Dijkstra search over the network that minimises one metric (cost or
//! duration) while carrying the other alongside for reporting. Edges are
//! filtered by the request's restrictions as they are relaxed, and the
//! trip-total cap on the optimised metric is checked once the search ends.
//!
//! When minimising duration the primary weight is an absolute clock that
//! starts at the departure time, so schedule waits can be computed from it
//! directly. When minimising cost the secondary weight plays that role.

use tracing::{debug, trace};

use crate::domain::{
    CityId, Objective, RestrictionSet, TransportMode, TravelRequest, clock_label,
};
use crate::network::{Edge, Network};

use super::config::SearchConfig;
use super::outcome::{Hop, Infeasible, Itinerary, RouteOutcome};
use super::queue::{MinQueue, Slot};

/// A request with endpoints resolved against the network.
#[derive(Debug, Clone, Copy)]
pub struct RouteQuery<'a> {
    pub from: CityId,
    pub to: CityId,
    /// Departure clock, in minutes.
    pub departure: u32,
    pub objective: Objective,
    pub restrictions: &'a RestrictionSet,
}

/// Per-request search state, indexed by city.
///
/// Created fresh for every search and dropped with it.
#[derive(Debug)]
struct SearchState {
    /// Tentative value of the optimised metric; `None` until reached.
    primary: Vec<Option<u64>>,
    /// The other metric, accumulated along the current best route.
    secondary: Vec<u64>,
    /// City and mode of the edge the current best route arrives by.
    predecessor: Vec<Option<(CityId, TransportMode)>>,
    /// Position of each city in the queue.
    slots: Vec<Slot>,
}

impl SearchState {
    fn new(city_count: usize) -> Self {
        Self {
            primary: vec![None; city_count],
            secondary: vec![0; city_count],
            predecessor: vec![None; city_count],
            slots: vec![Slot::Absent; city_count],
        }
    }

    fn is_finalized(&self, city: CityId) -> bool {
        self.slots[city.index()] == Slot::Finalized
    }

    /// Walk predecessor links back from `to` and return the hops in travel order.
    fn path_to(&self, to: CityId) -> Vec<Hop> {
        let mut hops = Vec::new();
        let mut at = to;
        while let Some((prev, mode)) = self.predecessor[at.index()] {
            hops.push(Hop { mode, city: at });
            at = prev;
        }
        hops.reverse();
        hops
    }
}

/// Route planner over a shared, read-only network.
pub struct Planner<'a> {
    network: &'a Network,
    config: &'a SearchConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(network: &'a Network, config: &'a SearchConfig) -> Self {
        Self { network, config }
    }

    /// Plan a request as read from the clients file.
    ///
    /// Requests naming a city outside the network are infeasible without
    /// searching.
    pub fn plan(&self, request: &TravelRequest) -> RouteOutcome {
        let (Some(from), Some(to)) = (self.network.city(request.start), self.network.city(request.end))
        else {
            debug!(
                client = %request.client,
                start = request.start,
                end = request.end,
                "endpoint outside network"
            );
            return RouteOutcome::Infeasible(Infeasible::EndpointOutOfRange);
        };

        self.route(&RouteQuery {
            from,
            to,
            departure: request.departure,
            objective: request.objective,
            restrictions: &request.restrictions,
        })
    }

    /// Find the best route for a resolved query.
    pub fn route(&self, query: &RouteQuery<'_>) -> RouteOutcome {
        let city_count = self.network.city_count();
        let mut state = SearchState::new(city_count);
        let mut queue = MinQueue::with_capacity(city_count);

        let departure = u64::from(query.departure);
        let (primary, secondary) = match query.objective {
            Objective::Cost => (0, departure),
            Objective::Duration => (departure, 0),
        };
        state.primary[query.from.index()] = Some(primary);
        state.secondary[query.from.index()] = secondary;
        queue.insert(query.from, primary, &mut state.slots);

        let mut settled = 0usize;
        while let Some((u, weight)) = queue.extract_min(&mut state.slots) {
            settled += 1;
            if u == query.to && self.config.stop_at_destination {
                break;
            }
            self.relax_from(u, weight, query, &mut state, &mut queue);
        }

        let outcome = self.finish(query, &state);
        debug!(
            from = %query.from,
            to = %query.to,
            departure = %clock_label(departure),
            objective = %query.objective,
            restrictions = %query.restrictions,
            settled,
            feasible = outcome.is_feasible(),
            "search complete"
        );
        outcome
    }

    /// Relax every allowed edge leaving the settled city `u`.
    fn relax_from(
        &self,
        u: CityId,
        weight: u64,
        query: &RouteQuery<'_>,
        state: &mut SearchState,
        queue: &mut MinQueue,
    ) {
        let secondary = state.secondary[u.index()];

        for edge in self.network.edges_from(u) {
            let v = edge.destination;
            if !query.restrictions.allows(edge) || state.is_finalized(v) {
                continue;
            }

            let (candidate, secondary_step) = step(query.objective, edge, weight, secondary);
            if candidate >= state.primary[v.index()].unwrap_or(u64::MAX) {
                continue;
            }

            trace!(from = %u, to = %v, mode = %edge.mode, candidate, "improved");
            state.primary[v.index()] = Some(candidate);
            state.secondary[v.index()] = secondary + secondary_step;
            state.predecessor[v.index()] = Some((u, edge.mode));

            match state.slots[v.index()] {
                Slot::Absent => {
                    queue.insert(v, candidate, &mut state.slots);
                }
                _ => {
                    queue.decrease_key(v, candidate, &mut state.slots);
                }
            }
        }
    }

    /// Read the destination's weights and apply the trip-total cap.
    fn finish(&self, query: &RouteQuery<'_>, state: &SearchState) -> RouteOutcome {
        let Some(primary) = state.primary[query.to.index()] else {
            return RouteOutcome::Infeasible(Infeasible::NoRoute);
        };
        let secondary = state.secondary[query.to.index()];
        let departure = u64::from(query.departure);

        let (duration, cost) = match query.objective {
            Objective::Cost => (secondary - departure, primary),
            Objective::Duration => (primary - departure, secondary),
        };

        // Caps apply to the primary weight as accumulated. In duration mode
        // that is the arrival clock, departure offset included.
        if let Some(cap) = query.restrictions.trip_cap(query.objective) {
            let actual = primary;
            if actual > cap.limit {
                return RouteOutcome::Infeasible(Infeasible::TripCapExceeded {
                    kind: cap.kind,
                    limit: cap.limit,
                    actual,
                });
            }
        }

        RouteOutcome::Feasible(Itinerary {
            origin: query.from,
            hops: state.path_to(query.to),
            duration,
            cost,
        })
    }
}

/// The candidate primary weight for crossing `edge`, and what crossing it
/// adds to the secondary weight.
///
/// `weight` and `secondary` are the values at the edge's origin. Whichever
/// of them is the clock decides how long to wait for a departure.
fn step(objective: Objective, edge: &Edge, weight: u64, secondary: u64) -> (u64, u64) {
    match objective {
        Objective::Cost => {
            let wait = edge.schedule.waiting_time(secondary);
            (
                weight + u64::from(edge.cost),
                u64::from(wait) + u64::from(edge.duration),
            )
        }
        Objective::Duration => {
            let wait = edge.schedule.waiting_time(weight);
            (
                weight + u64::from(wait) + u64::from(edge.duration),
                u64::from(edge.cost),
            )
        }
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
