//! Travel requests.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::{DomainError, RestrictionSet};

/// The metric a request minimises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Objective {
    /// Minimise total monetary cost.
    Cost,
    /// Minimise arrival time, and so total travel duration.
    Duration,
}

impl Objective {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cost => "cost",
            Self::Duration => "duration",
        }
    }
}

impl FromStr for Objective {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cost" => Ok(Self::Cost),
            "duration" => Ok(Self::Duration),
            other => Err(DomainError::UnknownObjective(other.to_string())),
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of the client who made a request, echoed on the result line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ClientId(pub i64);

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One travel request as read from the clients file.
///
/// Endpoints keep their raw 1-based values; they are only checked against
/// the network when the request is planned, so an out-of-range city is an
/// infeasible request rather than malformed input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelRequest {
    pub client: ClientId,
    pub start: i64,
    pub end: i64,
    /// Departure clock, in minutes.
    pub departure: u32,
    pub objective: Objective,
    pub restrictions: RestrictionSet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_objective() {
        assert_eq!("cost".parse::<Objective>().unwrap(), Objective::Cost);
        assert_eq!("duration".parse::<Objective>().unwrap(), Objective::Duration);
    }

    #[test]
    fn reject_unknown_objective() {
        let err = "time".parse::<Objective>().unwrap_err();
        assert_eq!(err.to_string(), "unknown optimisation mode \"time\"");
        assert!("Cost".parse::<Objective>().is_err());
        assert!("".parse::<Objective>().is_err());
    }

    #[test]
    fn objective_display_roundtrip() {
        for objective in [Objective::Cost, Objective::Duration] {
            assert_eq!(objective.to_string().parse::<Objective>().unwrap(), objective);
        }
    }

    #[test]
    fn client_id_display() {
        assert_eq!(ClientId(17).to_string(), "17");
        assert_eq!(ClientId(-3).to_string(), "-3");
    }
}
