//! The transport network.
//!
//! Cities are joined by scheduled links. Each undirected connection in the
//! input becomes two directed [`Edge`]s sharing every field but the
//! endpoints. The network is built once and then only read, so every
//! request can borrow it.

use std::cmp::Reverse;

use crate::domain::{CityId, Schedule, TransportMode};

/// Errors from assembling a network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// A connection names a city the network doesn't have
    #[error("city {city} is outside the network of {city_count} cities")]
    CityOutOfRange { city: CityId, city_count: usize },
}

/// A directed, scheduled link between two cities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub origin: CityId,
    pub destination: CityId,
    pub mode: TransportMode,
    /// Minutes in transit once departed.
    pub duration: u32,
    pub cost: u32,
    pub schedule: Schedule,
}

/// An undirected connection as listed in the maps file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    pub from: CityId,
    pub to: CityId,
    pub mode: TransportMode,
    pub duration: u32,
    pub cost: u32,
    pub schedule: Schedule,
}

impl Connection {
    /// The forward and reverse directed edges for this connection.
    pub fn edges(&self) -> [Edge; 2] {
        let forward = Edge {
            origin: self.from,
            destination: self.to,
            mode: self.mode,
            duration: self.duration,
            cost: self.cost,
            schedule: self.schedule,
        };
        let reverse = Edge {
            origin: self.to,
            destination: self.from,
            ..forward
        };
        [forward, reverse]
    }
}

/// A read-only network stored as one edge arena.
///
/// Edges leaving a city occupy a contiguous slice of the arena, found
/// through `offsets`. Within a slice, the most recently added edge comes
/// first, which decides which of several equally good routes is reported.
#[derive(Debug, Clone)]
pub struct Network {
    edges: Box<[Edge]>,
    /// `offsets[c]..offsets[c + 1]` is the slice of edges leaving city `c`.
    offsets: Box<[usize]>,
}

impl Network {
    /// Number of cities, including isolated ones.
    pub fn city_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Number of directed edges (twice the number of connections).
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Resolve a 1-based city number from a request.
    pub fn city(&self, external: i64) -> Option<CityId> {
        CityId::from_external(external, self.city_count())
    }

    /// Edges leaving `city`, most recently added first.
    pub fn edges_from(&self, city: CityId) -> &[Edge] {
        let idx = city.index();
        &self.edges[self.offsets[idx]..self.offsets[idx + 1]]
    }

    /// Iterate over all cities.
    pub fn cities(&self) -> impl Iterator<Item = CityId> + '_ {
        (0..self.city_count() as u32).map(CityId::new)
    }
}

/// Builder for a [`Network`].
///
/// Connections are collected in input order; [`NetworkBuilder::build`]
/// then lays the edges out per city.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    city_count: usize,
    edges: Vec<Edge>,
}

impl NetworkBuilder {
    /// Create a builder for a network of `city_count` cities.
    pub fn new(city_count: usize) -> Self {
        Self {
            city_count,
            edges: Vec::new(),
        }
    }

    /// Add a connection as two directed edges.
    pub fn add(&mut self, connection: Connection) -> Result<&mut Self, NetworkError> {
        for city in [connection.from, connection.to] {
            if city.index() >= self.city_count {
                return Err(NetworkError::CityOutOfRange {
                    city,
                    city_count: self.city_count,
                });
            }
        }
        self.edges.extend(connection.edges());
        Ok(self)
    }

    /// Lay out the edges per origin city.
    pub fn build(self) -> Network {
        let mut ordered: Vec<(usize, Edge)> = self.edges.into_iter().enumerate().collect();
        ordered.sort_by_key(|(seq, edge)| (edge.origin, Reverse(*seq)));

        let mut offsets = vec![0usize; self.city_count + 1];
        for (_, edge) in &ordered {
            offsets[edge.origin.index() + 1] += 1;
        }
        for c in 0..self.city_count {
            offsets[c + 1] += offsets[c];
        }

        Network {
            edges: ordered.into_iter().map(|(_, edge)| edge).collect(),
            offsets: offsets.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city(n: i64) -> CityId {
        CityId::from_external(n, 10).unwrap()
    }

    fn connection(from: i64, to: i64, mode: &str, duration: u32, cost: u32) -> Connection {
        Connection {
            from: city(from),
            to: city(to),
            mode: TransportMode::parse(mode).unwrap(),
            duration,
            cost,
            schedule: Schedule::new(0, 1400, 60).unwrap(),
        }
    }

    #[test]
    fn connection_makes_two_edges() {
        let [forward, reverse] = connection(1, 2, "bus", 30, 10).edges();
        assert_eq!(forward.origin, city(1));
        assert_eq!(forward.destination, city(2));
        assert_eq!(reverse.origin, city(2));
        assert_eq!(reverse.destination, city(1));
        assert_eq!(forward.mode, reverse.mode);
        assert_eq!(forward.duration, reverse.duration);
        assert_eq!(forward.cost, reverse.cost);
        assert_eq!(forward.schedule, reverse.schedule);
    }

    #[test]
    fn edges_are_grouped_by_origin() {
        let mut builder = NetworkBuilder::new(3);
        builder.add(connection(1, 2, "bus", 30, 10)).unwrap();
        builder.add(connection(2, 3, "train", 20, 5)).unwrap();
        let network = builder.build();

        assert_eq!(network.city_count(), 3);
        assert_eq!(network.edge_count(), 4);
        assert_eq!(network.edges_from(city(1)).len(), 1);
        assert_eq!(network.edges_from(city(2)).len(), 2);
        assert_eq!(network.edges_from(city(3)).len(), 1);
        for c in network.cities() {
            assert!(network.edges_from(c).iter().all(|e| e.origin == c));
        }
    }

    #[test]
    fn newest_edge_first() {
        let mut builder = NetworkBuilder::new(3);
        builder
            .add(connection(1, 2, "bus", 30, 10))
            .unwrap()
            .add(connection(1, 3, "train", 20, 5))
            .unwrap()
            .add(connection(1, 2, "ferry", 40, 2))
            .unwrap();
        let network = builder.build();

        let modes: Vec<&str> = network
            .edges_from(city(1))
            .iter()
            .map(|e| e.mode.as_str())
            .collect();
        assert_eq!(modes, ["ferry", "train", "bus"]);
    }

    #[test]
    fn isolated_cities_have_no_edges() {
        let mut builder = NetworkBuilder::new(5);
        builder.add(connection(2, 4, "bus", 1, 1)).unwrap();
        let network = builder.build();

        assert!(network.edges_from(city(1)).is_empty());
        assert!(network.edges_from(city(3)).is_empty());
        assert!(network.edges_from(city(5)).is_empty());
    }

    #[test]
    fn reject_out_of_range_city() {
        let mut builder = NetworkBuilder::new(2);
        let err = builder.add(connection(1, 3, "bus", 1, 1)).unwrap_err();
        assert_eq!(err.to_string(), "city 3 is outside the network of 2 cities");
    }

    #[test]
    fn resolve_request_cities() {
        let network = NetworkBuilder::new(3).build();
        assert_eq!(network.city(1), Some(city(1)));
        assert_eq!(network.city(3), Some(city(3)));
        assert_eq!(network.city(0), None);
        assert_eq!(network.city(99), None);
    }
}
