mod cli;
mod config;

use anyhow::Context;
use attack_paths::adapters::inbound::http::{serve, AppState, ServerSettings};
use attack_paths::adapters::outbound::console::StderrProgressReporter;
use attack_paths::adapters::outbound::filesystem::FileSystemReader;
use attack_paths::application::dto::{OutputFormat, PathQueryRequest};
use attack_paths::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use attack_paths::application::read_models::PathReportBuilder;
use attack_paths::application::use_cases::AnalyzePathsUseCase;
use attack_paths::path_analysis::domain::FilterOptions;
use attack_paths::path_analysis::policies::SinkPolicy;
use attack_paths::shared::error::{AnalysisError, ExitCode};
use attack_paths::shared::Result;
use cli::Args;
use config::ConfigFile;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_DATA_FILE: &str = "data.json";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3001";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();

    match run(args) {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(args.config.as_deref())?;
    let settings = Settings::resolve(&args, config)?;

    if args.serve {
        init_tracing("attack_paths=info,tower_http=info", "json");
        run_server(settings)
    } else {
        init_tracing("warn", "pretty");
        run_query(settings)
    }
}

fn load_config(explicit: Option<&Path>) -> Result<ConfigFile> {
    let config = match explicit {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => {
            let discovered = config::discover_config(Path::new("."))?;
            if discovered.is_some() {
                eprintln!("📄 Auto-discovered config file: {}", config::CONFIG_FILENAME);
            }
            discovered
        }
    };
    Ok(config.unwrap_or_default())
}

/// Initialize the tracing subscriber on stderr, JSON or pretty per `LOG_FORMAT`
fn init_tracing(default_filter: &str, default_format: &str) {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| default_format.to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let registry = tracing_subscriber::registry().with(filter);
    let result = if log_format == "json" {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .flatten_event(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .try_init()
    };

    if let Err(e) = result {
        eprintln!("⚠️  Warning: Failed to initialize logging: {}", e);
    }
}

/// Effective settings after merging CLI flags, the config file and defaults
#[derive(Debug)]
struct Settings {
    data_path: PathBuf,
    format: OutputFormat,
    options: FilterOptions,
    sink_policy: SinkPolicy,
    output: Option<PathBuf>,
    fail_on_paths: bool,
    port: u16,
    allowed_origin: String,
    query_timeout: Duration,
}

impl Settings {
    /// CLI flag > config file > built-in default
    fn resolve(args: &Args, config: ConfigFile) -> Result<Self> {
        let format = match (args.format, config.format.as_deref()) {
            (Some(format), _) => format,
            (None, Some(raw)) => raw
                .parse::<OutputFormat>()
                .map_err(|message| AnalysisError::Validation { message })?,
            (None, None) => OutputFormat::default(),
        };

        let sink_policy = if !args.sink_kinds.is_empty() {
            SinkPolicy::new(args.sink_kinds.iter().cloned())?
        } else if let Some(kinds) = config.sink_kinds {
            SinkPolicy::new(kinds)?
        } else {
            SinkPolicy::default()
        };

        let options = FilterOptions::new(
            args.exposed_only || config.exposed_only.unwrap_or(false),
            args.sink_only || config.sink_only.unwrap_or(false),
            args.vulnerable_only || config.vulnerable_only.unwrap_or(false),
        );

        let port = if args.serve {
            resolve_port(args.port, std::env::var("PORT").ok(), config.port)?
        } else {
            args.port.or(config.port).unwrap_or(DEFAULT_PORT)
        };

        Ok(Self {
            data_path: args
                .data
                .clone()
                .or(config.data_file)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE)),
            format,
            options,
            sink_policy,
            output: args.output.clone(),
            fail_on_paths: args.fail_on_paths,
            port,
            allowed_origin: config
                .allowed_origin
                .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_string()),
            query_timeout: Duration::from_secs(
                config.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
        })
    }
}

/// `--port` > `PORT` env > config file > 3000
///
/// Only consulted in serve mode, so a stray `PORT` never breaks a one-shot query.
fn resolve_port(cli: Option<u16>, env: Option<String>, config: Option<u16>) -> Result<u16> {
    if let Some(port) = cli {
        return Ok(port);
    }
    if let Some(raw) = env.filter(|raw| !raw.trim().is_empty()) {
        return raw.trim().parse::<u16>().map_err(|_| {
            AnalysisError::Validation {
                message: format!("Invalid PORT environment variable: '{}'", raw),
            }
            .into()
        });
    }
    Ok(config.unwrap_or(DEFAULT_PORT))
}

fn run_query(settings: Settings) -> Result<ExitCode> {
    // Create adapters (Dependency Injection)
    let use_case = AnalyzePathsUseCase::new(FileSystemReader::new(), StderrProgressReporter::new());

    let request = PathQueryRequest::new(settings.data_path, settings.options, settings.sink_policy);
    let response = use_case.execute(request)?;

    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let report = PathReportBuilder::build(&response);
    let formatted_output = FormatterFactory::create(settings.format).format(&report)?;

    PresenterFactory::create(PresenterType::from_output(settings.output))
        .present(&formatted_output)?;

    if settings.fail_on_paths && response.has_paths() {
        eprintln!(
            "⚠️  {} path(s) matched the active filters ({}).",
            response.paths.len(),
            response.options
        );
        return Ok(ExitCode::PathsDetected);
    }

    Ok(ExitCode::Success)
}

fn run_server(settings: Settings) -> Result<ExitCode> {
    let state = AppState::new(settings.data_path, settings.sink_policy)
        .with_query_timeout(settings.query_timeout);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start the async runtime")?;

    runtime.block_on(serve(ServerSettings {
        port: settings.port,
        allowed_origin: settings.allowed_origin,
        state,
    }))?;

    Ok(ExitCode::Success)
}
