//! Readers for the maps and clients files.
//!
//! Both files are whitespace-separated text. The maps file becomes a
//! [`Network`](crate::network::Network); the clients file becomes a stream
//! of [`TravelRequest`](crate::domain::TravelRequest)s in input order.

mod clients;
mod error;
mod maps;
mod tokens;

use std::fs;
use std::path::Path;

pub use clients::{Framing, RequestReader};
pub use error::{IngestError, MalformedRequest};
pub use maps::read_network;
pub use tokens::{Token, Tokens};

/// Read a whole input file into memory.
pub fn load(path: &Path) -> Result<String, IngestError> {
    fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })
}
