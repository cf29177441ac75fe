//! Ingestion error types.

use std::io;
use std::path::PathBuf;

use crate::domain::DomainError;
use crate::network::NetworkError;

/// Errors from reading the maps or clients file.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// The file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Input ended part-way through a record
    #[error("unexpected end of input while reading {field} (line {line})")]
    UnexpectedEof { field: &'static str, line: usize },

    /// A numeric field did not parse
    #[error("invalid {field} {token:?} on line {line}")]
    InvalidNumber {
        field: &'static str,
        token: String,
        line: usize,
    },

    /// A restriction tag other than `A1`, `A2`, `A3`, `B1` or `B2`
    #[error("unknown restriction tag {tag:?} on line {line}")]
    UnknownRestriction { tag: String, line: usize },

    /// A request declared more restrictions than allowed
    #[error("restriction count {count} on line {line} is outside 0..=2")]
    RestrictionCount { count: i64, line: usize },

    /// A connection names a city outside the network
    #[error("connection city {city} on line {line} is outside 1..={city_count}")]
    CityOutOfRange {
        city: i64,
        city_count: usize,
        line: usize,
    },

    /// A request line has tokens left after its last field
    #[error("unexpected {token:?} after end of request on line {line}")]
    TrailingInput { token: String, line: usize },

    /// A field parsed but failed validation
    #[error("{source} (line {line})")]
    Domain {
        line: usize,
        #[source]
        source: DomainError,
    },

    #[error(transparent)]
    Network(#[from] NetworkError),
}

impl IngestError {
    pub(crate) fn domain(line: usize, source: impl Into<DomainError>) -> Self {
        Self::Domain {
            line,
            source: source.into(),
        }
    }
}

/// A request record that could not be read.
///
/// Carries the record's first token so a result line can still be written
/// for it.
#[derive(Debug, thiserror::Error)]
#[error("malformed request {raw_client:?}: {source}")]
pub struct MalformedRequest {
    /// The client field exactly as written, whether or not it is a number.
    pub raw_client: String,
    #[source]
    pub source: IngestError,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransportMode;

    #[test]
    fn error_display() {
        let err = IngestError::RestrictionCount { count: 3, line: 4 };
        assert_eq!(
            err.to_string(),
            "restriction count 3 on line 4 is outside 0..=2"
        );

        let err = IngestError::CityOutOfRange {
            city: 9,
            city_count: 3,
            line: 2,
        };
        assert_eq!(
            err.to_string(),
            "connection city 9 on line 2 is outside 1..=3"
        );
    }

    #[test]
    fn domain_errors_carry_line() {
        let invalid = TransportMode::parse("hovercraft").unwrap_err();
        let err = IngestError::domain(5, invalid);
        assert!(err.to_string().ends_with("(line 5)"));
        assert!(matches!(err, IngestError::Domain { line: 5, .. }));
    }

    #[test]
    fn malformed_request_display() {
        let err = MalformedRequest {
            raw_client: "17".to_string(),
            source: IngestError::UnknownRestriction {
                tag: "C9".to_string(),
                line: 3,
            },
        };
        assert_eq!(
            err.to_string(),
            "malformed request \"17\": unknown restriction tag \"C9\" on line 3"
        );
    }
}
