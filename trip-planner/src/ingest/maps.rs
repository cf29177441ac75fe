//! Reader for the maps file.
//!
//! The file starts with the number of cities and the number of connections,
//! followed by one record per connection:
//!
//! ```text
//! from to mode duration cost first last period
//! ```
//!
//! Fields are separated by any whitespace; records need not sit on their own
//! lines.

use tracing::{debug, warn};

use crate::domain::{CityId, Schedule, TransportMode};
use crate::network::{Connection, Network, NetworkBuilder};

use super::IngestError;
use super::tokens::Tokens;

/// Parse a complete maps file into a network.
pub fn read_network(text: &str) -> Result<Network, IngestError> {
    let mut tokens = Tokens::new(text);
    // City ids are u32, so a larger count is rejected as unparseable.
    let city_count = tokens.number::<u32>("city count")? as usize;
    // Untrusted until the records are read; nothing is reserved from it.
    let connection_count: usize = tokens.number("connection count")?;

    let mut builder = NetworkBuilder::new(city_count);
    for _ in 0..connection_count {
        let connection = read_connection(&mut tokens, city_count)?;
        builder.add(connection)?;
    }

    if let Some(extra) = tokens.next_token() {
        warn!(
            token = extra.text,
            line = extra.line,
            "ignoring input after the last connection"
        );
    }

    let network = builder.build();
    debug!(
        cities = network.city_count(),
        edges = network.edge_count(),
        "network built"
    );
    Ok(network)
}

fn read_city(
    tokens: &mut Tokens<'_>,
    field: &'static str,
    city_count: usize,
) -> Result<CityId, IngestError> {
    let line = tokens.line();
    let city: i64 = tokens.number(field)?;
    CityId::from_external(city, city_count).ok_or(IngestError::CityOutOfRange {
        city,
        city_count,
        line,
    })
}

fn read_connection(tokens: &mut Tokens<'_>, city_count: usize) -> Result<Connection, IngestError> {
    let from = read_city(tokens, "origin city", city_count)?;
    let to = read_city(tokens, "destination city", city_count)?;

    let mode = tokens.expect("transport mode")?;
    let mode = TransportMode::parse(mode.text).map_err(|e| IngestError::domain(mode.line, e))?;

    let duration = tokens.number("duration")?;
    let cost = tokens.number("cost")?;

    let line = tokens.line();
    let first = tokens.number("first departure")?;
    let last = tokens.number("last departure")?;
    let period = tokens.number("period")?;
    let schedule = Schedule::new(first, last, period).map_err(|e| IngestError::domain(line, e))?;

    Ok(Connection {
        from,
        to,
        mode,
        duration,
        cost,
        schedule,
    })
}
