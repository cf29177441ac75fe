//! Batch driver.
//!
//! Builds the network once, then reads requests one at a time and writes
//! one result per request, in input order.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::ingest::{self, Framing, IngestError, MalformedRequest, RequestReader};
use crate::network::Network;
use crate::planner::{Planner, SearchConfig};
use crate::report::{ReportFormat, ReportWriter};

/// What to do with a request record that cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedPolicy {
    /// Stop the whole run at the first bad record.
    #[default]
    Abort,
    /// Report the record as infeasible and carry on with the next line.
    ///
    /// Requests must then sit one per line.
    Skip,
}

impl MalformedPolicy {
    fn framing(self) -> Framing {
        match self {
            Self::Abort => Framing::Stream,
            Self::Skip => Framing::Lines,
        }
    }
}

/// Configuration for one batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchConfig {
    pub on_malformed: MalformedPolicy,
    pub format: ReportFormat,
    pub search: SearchConfig,
}

/// Errors that end a batch run.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Malformed(#[from] MalformedRequest),

    #[error("failed to create {}: {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write results: {0}")]
    Write(#[from] io::Error),
}

/// Counts from a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    /// Result lines written.
    pub requests: usize,
    pub feasible: usize,
    pub infeasible: usize,
    /// Records that could not be read, reported as infeasible.
    pub malformed: usize,
}

/// Where results go when no output path is given.
///
/// The clients path with its extension replaced by the format's own.
pub fn default_output_path(clients: &Path, format: ReportFormat) -> PathBuf {
    clients.with_extension(format.extension())
}

/// Plan every request in `clients` against `network`, writing results to `out`.
pub fn run<W: Write>(
    network: &Network,
    clients: &str,
    out: &mut W,
    config: &BatchConfig,
) -> Result<BatchSummary, BatchError> {
    let planner = Planner::new(network, &config.search);
    let mut reader = RequestReader::new(clients, config.on_malformed.framing())?;
    let mut writer = ReportWriter::new(out, config.format);
    let mut summary = BatchSummary::default();

    for record in reader.by_ref() {
        match record {
            Ok(request) => {
                let outcome = planner.plan(&request);
                match outcome.itinerary() {
                    Some(itinerary) => {
                        summary.feasible += 1;
                        debug!(
                            client = %request.client,
                            duration = itinerary.duration,
                            cost = itinerary.cost,
                            hops = itinerary.hops.len(),
                            "route found"
                        );
                    }
                    None => summary.infeasible += 1,
                }
                writer.planned(&request, &outcome)?;
            }
            Err(malformed) => match config.on_malformed {
                MalformedPolicy::Abort => return Err(malformed.into()),
                MalformedPolicy::Skip => {
                    warn!(error = %malformed, "skipping malformed request");
                    summary.malformed += 1;
                    writer.malformed(&malformed)?;
                }
            },
        }
    }

    if reader.read() != reader.declared() {
        warn!(
            declared = reader.declared(),
            read = reader.read(),
            "request count differs from header"
        );
    }

    summary.requests = writer.written();
    writer.finish()?;
    Ok(summary)
}

/// Run a batch from files on disk.
pub fn run_files(
    maps: &Path,
    clients: &Path,
    output: &Path,
    config: &BatchConfig,
) -> Result<BatchSummary, BatchError> {
    let network = ingest::read_network(&ingest::load(maps)?)?;
    info!(
        path = %maps.display(),
        cities = network.city_count(),
        edges = network.edge_count(),
        "loaded network"
    );

    let clients_text = ingest::load(clients)?;

    let file = File::create(output).map_err(|source| BatchError::Create {
        path: output.to_path_buf(),
        source,
    })?;
    let mut out = BufWriter::new(file);
    let summary = run(&network, &clients_text, &mut out, config)?;

    info!(
        output = %output.display(),
        requests = summary.requests,
        feasible = summary.feasible,
        infeasible = summary.infeasible,
        malformed = summary.malformed,
        "batch complete"
    );
    Ok(summary)
}
