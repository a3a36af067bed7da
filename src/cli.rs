use attack_paths::application::dto::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// Enumerate and filter attack paths through a service dependency graph
#[derive(Parser, Debug)]
#[command(name = "attack-paths")]
#[command(version)]
#[command(
    about = "Enumerate and filter attack paths through a service dependency graph",
    long_about = None
)]
pub struct Args {
    /// Architecture snapshot: JSON document with "nodes" and "edges" [default: data.json]
    #[arg(short, long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Configuration file (defaults to ./attack-paths.config.yml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Keep only paths that start at a publicly exposed service
    #[arg(long)]
    pub exposed_only: bool,

    /// Keep only paths that end at a sink service (see --sink-kind)
    #[arg(long)]
    pub sink_only: bool,

    /// Keep only paths containing at least one vulnerable service
    #[arg(long)]
    pub vulnerable_only: bool,

    /// Output format: json or markdown [default: json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Service kind treated as a sink; repeat to list several [default: rds, sqs]
    #[arg(long = "sink-kind", value_name = "KIND")]
    pub sink_kinds: Vec<String>,

    /// Exit with code 1 when any path matches the filters
    #[arg(long)]
    pub fail_on_paths: bool,

    /// Run the HTTP service instead of a one-shot query
    #[arg(long, conflicts_with_all = ["output", "format", "fail_on_paths"])]
    pub serve: bool,

    /// Port for --serve; falls back to the PORT env var in serve mode [default: 3000]
    #[arg(long)]
    pub port: Option<u16>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
