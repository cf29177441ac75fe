//! Domain types for the trip planner.
//!
//! This module contains the validated value types that the network,
//! planner and readers share. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod city;
mod error;
mod request;
mod restriction;
mod schedule;
mod transport;

pub use city::CityId;
pub use error::DomainError;
pub use request::{ClientId, Objective, TravelRequest};
pub use restriction::{MAX_RESTRICTIONS, Restriction, RestrictionKind, RestrictionSet, TripCap};
pub use schedule::{InvalidSchedule, MINUTES_PER_DAY, Schedule, clock_label};
pub use transport::{InvalidTransportMode, MAX_MODE_LEN, TransportMode};
