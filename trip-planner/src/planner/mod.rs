//! Route planner using a constrained Dijkstra search.
//!
//! This module answers: "leaving this city at this time, what is the
//! cheapest (or quickest) way to reach that one without breaking my
//! restrictions?"
//!
//! The search settles cities in order of the optimised metric, waiting at
//! each city for the next scheduled departure of the chosen link.

mod config;
mod outcome;
mod queue;
mod search;

pub use config::SearchConfig;
pub use outcome::{Hop, Infeasible, Itinerary, RouteOutcome};
pub use queue::{MinQueue, Slot};
pub use search::{Planner, RouteQuery};
