//! Transport mode labels.

use std::fmt;

use serde::{Serialize, Serializer};

/// Longest label the input format allows.
pub const MAX_MODE_LEN: usize = 9;

/// Error returned when parsing an invalid transport mode label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid transport mode {label:?}: {reason}")]
pub struct InvalidTransportMode {
    label: String,
    reason: &'static str,
}

/// A transport mode label such as `bus` or `train`.
///
/// Labels are 1 to 9 printable, non-whitespace ASCII characters. They are
/// stored inline so edges and path hops stay `Copy`. Overlong labels are
/// rejected rather than truncated.
///
/// # Examples
///
/// ```
/// use trip_planner::domain::TransportMode;
///
/// let bus = TransportMode::parse("bus").unwrap();
/// assert_eq!(bus.as_str(), "bus");
///
/// // Ten characters is one too many
/// assert!(TransportMode::parse("helicopter").is_err());
/// assert!(TransportMode::parse("").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransportMode {
    bytes: [u8; MAX_MODE_LEN],
    len: u8,
}

impl TransportMode {
    /// Parse a transport mode label.
    pub fn parse(s: &str) -> Result<Self, InvalidTransportMode> {
        let invalid = |reason| InvalidTransportMode {
            label: s.to_string(),
            reason,
        };

        let raw = s.as_bytes();
        if raw.is_empty() {
            return Err(invalid("must not be empty"));
        }
        if raw.len() > MAX_MODE_LEN {
            return Err(invalid("must be at most 9 characters"));
        }
        if !raw.iter().all(|b| b.is_ascii_graphic()) {
            return Err(invalid("must be printable ASCII without whitespace"));
        }

        let mut bytes = [0u8; MAX_MODE_LEN];
        bytes[..raw.len()].copy_from_slice(raw);
        Ok(Self {
            bytes,
            len: raw.len() as u8,
        })
    }

    /// Returns the label as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII is ever stored, so this cannot fail.
        std::str::from_utf8(&self.bytes[..self.len as usize]).unwrap_or_default()
    }
}

impl fmt::Debug for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TransportMode({})", self.as_str())
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TransportMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
