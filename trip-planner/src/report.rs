//! Result emission.
//!
//! One line per request, in input order. The default `.sol` format is
//!
//! ```text
//! <client> <start> {<mode> <city>}* <duration> <cost>
//! ```
//!
//! for a feasible route, or `<client> -1` otherwise. Duration always comes
//! before cost, whichever metric was optimised. The JSON-lines format
//! carries the same information plus the reason a request failed.

use std::fmt::Write as _;
use std::io::{self, Write};

use serde::Serialize;

use crate::domain::{ClientId, Objective, TravelRequest};
use crate::ingest::MalformedRequest;
use crate::planner::{Infeasible, Itinerary, RouteOutcome};

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Plain text, one result line per request.
    #[default]
    Sol,
    /// One JSON object per request.
    JsonLines,
}

impl ReportFormat {
    /// File extension used when the output path is derived.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Sol => "sol",
            Self::JsonLines => "jsonl",
        }
    }
}

/// Format a `.sol` result line, without the trailing newline.
pub fn sol_line(client: impl std::fmt::Display, outcome: &RouteOutcome) -> String {
    let mut line = client.to_string();
    match outcome {
        RouteOutcome::Infeasible(_) => line.push_str(" -1"),
        RouteOutcome::Feasible(itinerary) => {
            // Writing to a String cannot fail
            let _ = write!(line, " {}", itinerary.origin);
            for hop in &itinerary.hops {
                let _ = write!(line, " {} {}", hop.mode, hop.city);
            }
            let _ = write!(line, " {} {}", itinerary.duration, itinerary.cost);
        }
    }
    line
}

/// A result as written in the JSON-lines format.
#[derive(Debug, Serialize)]
pub struct ResultRecord {
    /// Client id, for requests that were read successfully
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<ClientId>,

    /// Client field as written, for malformed requests
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_client: Option<String>,

    /// Whether a route was found
    pub feasible: bool,

    /// Metric the request minimised
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objective: Option<Objective>,

    /// The route, when feasible
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<Itinerary>,

    /// Why no route was reported
    #[serde(flatten)]
    pub infeasible: Option<Infeasible>,

    /// Why the request could not be read
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResultRecord {
    pub fn planned(request: &TravelRequest, outcome: &RouteOutcome) -> Self {
        let (route, infeasible) = match outcome {
            RouteOutcome::Feasible(itinerary) => (Some(itinerary.clone()), None),
            RouteOutcome::Infeasible(reason) => (None, Some(*reason)),
        };
        Self {
            client: Some(request.client),
            raw_client: None,
            feasible: route.is_some(),
            objective: Some(request.objective),
            route,
            infeasible,
            error: None,
        }
    }

    pub fn malformed(error: &MalformedRequest) -> Self {
        Self {
            client: None,
            raw_client: Some(error.raw_client.clone()),
            feasible: false,
            objective: None,
            route: None,
            infeasible: None,
            error: Some(error.source.to_string()),
        }
    }
}

/// Writes results in the chosen format.
pub struct ReportWriter<W: Write> {
    out: W,
    format: ReportFormat,
    written: usize,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W, format: ReportFormat) -> Self {
        Self {
            out,
            format,
            written: 0,
        }
    }

    /// Number of result lines written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Write the result of a planned request.
    pub fn planned(&mut self, request: &TravelRequest, outcome: &RouteOutcome) -> io::Result<()> {
        match self.format {
            ReportFormat::Sol => writeln!(self.out, "{}", sol_line(request.client, outcome))?,
            ReportFormat::JsonLines => {
                self.json(&ResultRecord::planned(request, outcome))?;
            }
        }
        self.written += 1;
        Ok(())
    }

    /// Write an infeasible result for a request that could not be read.
    pub fn malformed(&mut self, error: &MalformedRequest) -> io::Result<()> {
        match self.format {
            ReportFormat::Sol => writeln!(self.out, "{} -1", error.raw_client)?,
            ReportFormat::JsonLines => self.json(&ResultRecord::malformed(error))?,
        }
        self.written += 1;
        Ok(())
    }

    fn json(&mut self, record: &ResultRecord) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, record)?;
        self.out.write_all(b"\n")
    }

    /// Flush and return the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
