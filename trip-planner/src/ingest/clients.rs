//! Reader for the clients file.
//!
//! The file starts with the number of requests, followed by one record per
//! request:
//!
//! ```text
//! client start end departure cost|duration count [tag value]{count}
//! ```
//!
//! Records are read until the end of the input. The declared count is kept
//! for reporting but does not limit how many records are returned.

use crate::domain::{
    ClientId, MAX_RESTRICTIONS, Objective, Restriction, RestrictionKind, RestrictionSet,
    TransportMode, TravelRequest,
};

use super::tokens::Tokens;
use super::{IngestError, MalformedRequest};

/// How request records are delimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Framing {
    /// Records are separated by any whitespace, like every other field.
    #[default]
    Stream,
    /// Each non-blank line holds exactly one record.
    ///
    /// A bad record then only spoils its own line, and reading resumes at
    /// the next one.
    Lines,
}

/// Iterator over the requests in a clients file.
///
/// Yields one item per record, in input order. With [`Framing::Stream`] a
/// malformed record leaves the stream misaligned, so callers should stop
/// at the first error.
#[derive(Debug)]
pub struct RequestReader<'a> {
    tokens: Tokens<'a>,
    framing: Framing,
    declared: usize,
    read: usize,
}

impl<'a> RequestReader<'a> {
    /// Read the header and position the reader at the first record.
    pub fn new(text: &'a str, framing: Framing) -> Result<Self, IngestError> {
        let mut tokens = Tokens::new(text);
        let declared = tokens.number("request count")?;
        Ok(Self {
            tokens,
            framing,
            declared,
            read: 0,
        })
    }

    /// Number of requests announced in the header.
    pub fn declared(&self) -> usize {
        self.declared
    }

    /// Number of records returned so far, malformed ones included.
    pub fn read(&self) -> usize {
        self.read
    }

    fn next_line(&mut self) -> Option<Result<TravelRequest, MalformedRequest>> {
        loop {
            let (text, line) = self.tokens.take_line()?;
            let mut tokens = Tokens::at_line(text, line);
            if tokens.is_exhausted() {
                continue;
            }
            let record = read_request(&mut tokens).and_then(|request| {
                match tokens.next_token() {
                    None => Ok(request),
                    Some(extra) => Err(MalformedRequest {
                        raw_client: request.client.to_string(),
                        source: IngestError::TrailingInput {
                            token: extra.text.to_string(),
                            line: extra.line,
                        },
                    }),
                }
            });
            return Some(record);
        }
    }
}

impl Iterator for RequestReader<'_> {
    type Item = Result<TravelRequest, MalformedRequest>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = match self.framing {
            Framing::Stream => {
                if self.tokens.is_exhausted() {
                    return None;
                }
                read_request(&mut self.tokens)
            }
            Framing::Lines => self.next_line()?,
        };
        self.read += 1;
        Some(item)
    }
}

/// Read one record. The caller guarantees at least one token remains.
fn read_request(tokens: &mut Tokens<'_>) -> Result<TravelRequest, MalformedRequest> {
    let raw_client = match tokens.next_token() {
        Some(token) => token,
        None => {
            let line = tokens.line();
            return Err(MalformedRequest {
                raw_client: String::new(),
                source: IngestError::UnexpectedEof {
                    field: "client id",
                    line,
                },
            });
        }
    };

    read_fields(raw_client.text, raw_client.line, tokens).map_err(|source| MalformedRequest {
        raw_client: raw_client.text.to_string(),
        source,
    })
}

fn read_fields(
    raw_client: &str,
    line: usize,
    tokens: &mut Tokens<'_>,
) -> Result<TravelRequest, IngestError> {
    let client = raw_client
        .parse()
        .map(ClientId)
        .map_err(|_| IngestError::InvalidNumber {
            field: "client id",
            token: raw_client.to_string(),
            line,
        })?;
    let start = tokens.number("start city")?;
    let end = tokens.number("end city")?;
    let departure = tokens.number("departure time")?;

    let objective = tokens.expect("optimisation mode")?;
    let objective: Objective = objective
        .text
        .parse()
        .map_err(|e| IngestError::domain(objective.line, e))?;

    let line = tokens.line();
    let count: i64 = tokens.number("restriction count")?;
    let count = usize::try_from(count)
        .ok()
        .filter(|&n| n <= MAX_RESTRICTIONS)
        .ok_or(IngestError::RestrictionCount { count, line })?;

    let mut restrictions = Vec::with_capacity(count);
    for _ in 0..count {
        restrictions.push(read_restriction(tokens)?);
    }
    let restrictions = RestrictionSet::new(restrictions).map_err(|e| IngestError::domain(line, e))?;

    Ok(TravelRequest {
        client,
        start,
        end,
        departure,
        objective,
        restrictions,
    })
}

fn read_restriction(tokens: &mut Tokens<'_>) -> Result<Restriction, IngestError> {
    let tag = tokens.expect("restriction tag")?;
    let kind = RestrictionKind::from_tag(tag.text).ok_or_else(|| IngestError::UnknownRestriction {
        tag: tag.text.to_string(),
        line: tag.line,
    })?;

    Ok(match kind {
        RestrictionKind::ForbiddenMode => {
            let mode = tokens.expect("forbidden mode")?;
            let parsed =
                TransportMode::parse(mode.text).map_err(|e| IngestError::domain(mode.line, e))?;
            Restriction::ForbiddenMode(parsed)
        }
        RestrictionKind::MaxLegDuration => Restriction::MaxLegDuration(tokens.number("leg duration cap")?),
        RestrictionKind::MaxLegCost => Restriction::MaxLegCost(tokens.number("leg cost cap")?),
        RestrictionKind::MaxTripDuration => {
            Restriction::MaxTripDuration(tokens.number("trip duration cap")?)
        }
        RestrictionKind::MaxTripCost => Restriction::MaxTripCost(tokens.number("trip cost cap")?),
    })
}
