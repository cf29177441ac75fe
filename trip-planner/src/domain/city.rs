//! City identifiers.

use std::fmt;

use serde::{Serialize, Serializer};

/// A city in the network, stored 0-based.
///
/// Input and output files number cities from 1. `CityId` keeps the
/// 0-based index used for array lookups and converts at the boundary,
/// so `Display` always prints the external 1-based number.
///
/// # Examples
///
/// ```
/// use trip_planner::domain::CityId;
///
/// let city = CityId::from_external(3, 5).unwrap();
/// assert_eq!(city.index(), 2);
/// assert_eq!(city.to_string(), "3");
///
/// // Out of range for a 5-city network
/// assert!(CityId::from_external(0, 5).is_none());
/// assert!(CityId::from_external(6, 5).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CityId(u32);

impl CityId {
    /// Create from a 0-based index.
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Convert a 1-based external number, checking it against the city count.
    ///
    /// Returns `None` when `external` is outside `[1, city_count]`.
    pub fn from_external(external: i64, city_count: usize) -> Option<Self> {
        if external < 1 || external > city_count as i64 {
            return None;
        }
        u32::try_from(external - 1).ok().map(Self)
    }

    /// The 0-based index, for array lookups.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The 1-based number used in files.
    pub const fn external(self) -> u32 {
        self.0 + 1
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.external())
    }
}

impl Serialize for CityId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.external())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_roundtrip() {
        for n in 1..=10 {
            let city = CityId::from_external(n, 10).unwrap();
            assert_eq!(i64::from(city.external()), n);
            assert_eq!(city.index(), (n - 1) as usize);
        }
    }

    #[test]
    fn reject_out_of_range() {
        assert!(CityId::from_external(0, 3).is_none());
        assert!(CityId::from_external(-1, 3).is_none());
        assert!(CityId::from_external(4, 3).is_none());
        assert!(CityId::from_external(99, 3).is_none());
        assert!(CityId::from_external(1, 0).is_none());
    }

    #[test]
    fn display_is_one_based() {
        assert_eq!(CityId::new(0).to_string(), "1");
        assert_eq!(CityId::new(41).to_string(), "42");
    }

    #[test]
    fn serializes_as_external_number() {
        let json = serde_json::to_string(&CityId::new(4)).unwrap();
        assert_eq!(json, "5");
    }
}
