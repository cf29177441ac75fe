use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use trip_planner::batch::{self, BatchConfig, MalformedPolicy};
use trip_planner::planner::SearchConfig;
use trip_planner::report::ReportFormat;

/// Plan the best route for every request in a clients file.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Maps file describing cities and scheduled connections
    maps: PathBuf,

    /// Clients file with one travel request per record
    clients: PathBuf,

    /// Where to write results. Defaults to the clients path with a new extension
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Result format
    #[arg(long, value_enum, default_value_t = Format::Sol)]
    format: Format,

    /// What to do with a request that cannot be read
    #[arg(long, value_enum, default_value_t = OnMalformed::Abort)]
    on_malformed: OnMalformed,

    /// Settle every reachable city instead of stopping at the destination
    #[arg(long)]
    full_search: bool,

    /// Log more. Repeat for per-edge tracing
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Sol,
    JsonLines,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OnMalformed {
    Abort,
    Skip,
}

impl Args {
    fn config(&self) -> BatchConfig {
        BatchConfig {
            on_malformed: match self.on_malformed {
                OnMalformed::Abort => MalformedPolicy::Abort,
                OnMalformed::Skip => MalformedPolicy::Skip,
            },
            format: match self.format {
                Format::Sol => ReportFormat::Sol,
                Format::JsonLines => ReportFormat::JsonLines,
            },
            search: SearchConfig::new(!self.full_search),
        }
    }
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `-v` picks the level.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(spec) if verbose == 0 => EnvFilter::try_new(&spec).unwrap_or_else(|err| {
            eprintln!(
                "invalid {}, falling back to level '{default_level}': {err}",
                EnvFilter::DEFAULT_ENV
            );
            EnvFilter::new(default_level)
        }),
        _ => EnvFilter::new(default_level),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = args.config();
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| batch::default_output_path(&args.clients, config.format));
    info!(
        maps = %args.maps.display(),
        clients = %args.clients.display(),
        output = %output.display(),
        "starting batch"
    );

    match batch::run_files(&args.maps, &args.clients, &output, &config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
