//! Per-request travel restrictions.
//!
//! A request may carry up to two restrictions, each of a different kind.
//! Edge-local kinds (`A1`, `A2`, `A3`) filter individual links during the
//! search. Trip-total kinds (`B1`, `B2`) can only be judged once a route
//! is known, so the planner checks them after the search finishes.

use std::fmt;

use serde::Serialize;

use super::{DomainError, Objective, TransportMode};
use crate::network::Edge;

/// Most restrictions a single request may carry.
pub const MAX_RESTRICTIONS: usize = 2;

/// The five kinds of restriction, named by their input tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RestrictionKind {
    /// `A1`: never use a given transport mode.
    ForbiddenMode,
    /// `A2`: every link must take at most this many minutes.
    MaxLegDuration,
    /// `A3`: every link must cost at most this much.
    MaxLegCost,
    /// `B1`: the whole trip must take at most this many minutes.
    MaxTripDuration,
    /// `B2`: the whole trip must cost at most this much.
    MaxTripCost,
}

impl RestrictionKind {
    /// Look up a kind from its input tag (`A1` to `B2`).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "A1" => Some(Self::ForbiddenMode),
            "A2" => Some(Self::MaxLegDuration),
            "A3" => Some(Self::MaxLegCost),
            "B1" => Some(Self::MaxTripDuration),
            "B2" => Some(Self::MaxTripCost),
            _ => None,
        }
    }

    /// The input tag for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            Self::ForbiddenMode => "A1",
            Self::MaxLegDuration => "A2",
            Self::MaxLegCost => "A3",
            Self::MaxTripDuration => "B1",
            Self::MaxTripCost => "B2",
        }
    }

    /// Whether this kind can be judged one edge at a time.
    pub fn is_edge_local(self) -> bool {
        matches!(
            self,
            Self::ForbiddenMode | Self::MaxLegDuration | Self::MaxLegCost
        )
    }
}

impl fmt::Display for RestrictionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A single restriction with its threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Restriction {
    ForbiddenMode(TransportMode),
    MaxLegDuration(u32),
    MaxLegCost(u32),
    MaxTripDuration(u64),
    MaxTripCost(u64),
}

impl Restriction {
    pub fn kind(&self) -> RestrictionKind {
        match self {
            Self::ForbiddenMode(_) => RestrictionKind::ForbiddenMode,
            Self::MaxLegDuration(_) => RestrictionKind::MaxLegDuration,
            Self::MaxLegCost(_) => RestrictionKind::MaxLegCost,
            Self::MaxTripDuration(_) => RestrictionKind::MaxTripDuration,
            Self::MaxTripCost(_) => RestrictionKind::MaxTripCost,
        }
    }

    /// Whether `edge` satisfies this restriction.
    ///
    /// Trip-total restrictions always allow individual edges.
    pub fn allows(&self, edge: &Edge) -> bool {
        match *self {
            Self::ForbiddenMode(mode) => edge.mode != mode,
            Self::MaxLegDuration(max) => edge.duration <= max,
            Self::MaxLegCost(max) => edge.cost <= max,
            Self::MaxTripDuration(_) | Self::MaxTripCost(_) => true,
        }
    }
}

impl fmt::Display for Restriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ForbiddenMode(mode) => write!(f, "{} {mode}", self.kind()),
            Self::MaxLegDuration(v) | Self::MaxLegCost(v) => write!(f, "{} {v}", self.kind()),
            Self::MaxTripDuration(v) | Self::MaxTripCost(v) => write!(f, "{} {v}", self.kind()),
        }
    }
}

/// A trip-total cap that applies to a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripCap {
    pub kind: RestrictionKind,
    pub limit: u64,
}

/// The validated restrictions of one request: at most two, of distinct kinds.
///
/// # Examples
///
/// ```
/// use trip_planner::domain::{Restriction, RestrictionSet};
///
/// let set = RestrictionSet::new(vec![
///     Restriction::MaxLegCost(50),
///     Restriction::MaxTripDuration(600),
/// ])
/// .unwrap();
/// assert_eq!(set.len(), 2);
///
/// // Two restrictions of the same kind are rejected
/// assert!(RestrictionSet::new(vec![
///     Restriction::MaxLegCost(50),
///     Restriction::MaxLegCost(60),
/// ])
/// .is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestrictionSet {
    items: Vec<Restriction>,
}

impl RestrictionSet {
    /// Validate and build a restriction set.
    pub fn new(items: Vec<Restriction>) -> Result<Self, DomainError> {
        if items.len() > MAX_RESTRICTIONS {
            return Err(DomainError::TooManyRestrictions(items.len()));
        }
        for (i, item) in items.iter().enumerate() {
            if items[..i].iter().any(|seen| seen.kind() == item.kind()) {
                return Err(DomainError::DuplicateRestriction(item.kind()));
            }
        }
        Ok(Self { items })
    }

    /// A set with no restrictions.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Restriction> {
        self.items.iter()
    }

    /// Whether `edge` may be used under every active restriction.
    pub fn allows(&self, edge: &Edge) -> bool {
        self.items.iter().all(|r| r.allows(edge))
    }

    /// The trip-total cap checked after searching under `objective`.
    ///
    /// Only the cap on the optimised metric is checked: `B2` when
    /// minimising cost and `B1` when minimising duration.
    pub fn trip_cap(&self, objective: Objective) -> Option<TripCap> {
        self.items.iter().find_map(|r| match (*r, objective) {
            (Restriction::MaxTripCost(limit), Objective::Cost) => Some(TripCap {
                kind: RestrictionKind::MaxTripCost,
                limit,
            }),
            (Restriction::MaxTripDuration(limit), Objective::Duration) => Some(TripCap {
                kind: RestrictionKind::MaxTripDuration,
                limit,
            }),
            _ => None,
        })
    }
}

impl fmt::Display for RestrictionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.items.is_empty() {
            return f.write_str("none");
        }
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}
