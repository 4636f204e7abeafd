//! CLI entrypoint for Expert Council
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use council_application::{
    CoordinateError, CoordinateInput, CoordinateUseCase, CoordinationLogger, NoCoordinationLogger,
    SearchEnhancer, SourceAttributor,
};
use council_domain::{OutputFormat, SpecialistRegistry};
use council_infrastructure::{
    CatalogSourceAttributor, ConfigLoader, FileConfig, HeuristicSearchEnhancer,
    JsonlCoordinationLogger, SearchBackend,
};
use council_presentation::{Cli, ConsoleFormatter, ProgressReporter, SimpleProgress};
use std::fs::File;
use std::io::IsTerminal;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = init_logging(&cli)?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let issues = config.validate();
    if !issues.is_empty() {
        eprint!("{}", ConsoleFormatter::format_config_issues(&issues));
    }
    if !config.output.color {
        ConsoleFormatter::disable_color();
    }

    let registry = Arc::new(SpecialistRegistry::with_builtins());

    if cli.list_specialists {
        print!("{}", ConsoleFormatter::format_specialists(&registry.descriptors()));
        return Ok(());
    }

    let Some(query) = cli.query.clone() else {
        bail!("A query is required. Run with --help for usage.");
    };
    let profile = cli.parse_profile().map_err(|e| anyhow!(e))?;

    info!("Starting Expert Council");

    // === Dependency Injection ===
    let mut params = config.coordination.to_params();
    if let Some(secs) = cli.timeout {
        params = params.with_specialist_timeout((secs > 0).then(|| Duration::from_secs(secs)));
    }
    if cli.no_search {
        params = params.with_search(false);
    }

    let cancellation = CancellationToken::new();
    let ctrl_c_token = cancellation.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling");
            ctrl_c_token.cancel();
        }
    });

    let use_case = CoordinateUseCase::new(Arc::clone(&registry))
        .with_search(build_search(&config))
        .with_sources(build_sources(&config))
        .with_logger(build_logger(&cli))
        .with_params(params)
        .with_cancellation(cancellation);

    let mut input = CoordinateInput::new(query.clone());
    if let Some(profile) = profile {
        input = input.with_profile(profile);
    }
    if let Some(ref mode) = cli.mode {
        input = input.with_analysis_mode(mode.clone());
    }

    let result = if cli.quiet {
        use_case.execute(input).await
    } else if std::io::stderr().is_terminal() {
        use_case.execute_with_progress(input, &ProgressReporter::new()).await
    } else {
        use_case.execute_with_progress(input, &SimpleProgress).await
    };

    let answer = match result {
        Ok(answer) => answer,
        Err(CoordinateError::Cancelled) => bail!("Cancelled before the council finished"),
        Err(e) => return Err(e.into()),
    };

    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();

    let output = match format {
        OutputFormat::Full => ConsoleFormatter::format(&query, &answer),
        OutputFormat::Analysis => ConsoleFormatter::format_analysis_only(&answer),
        OutputFormat::Json => ConsoleFormatter::format_json(&answer),
    };

    println!("{}", output);

    Ok(())
}

/// Install the tracing subscriber. The returned guard flushes the file log on drop.
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    match cli.log_file {
        Some(ref path) => {
            let file = File::create(path)
                .map_err(|e| anyhow!("Cannot open log file {}: {}", path.display(), e))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}

fn build_search(config: &FileConfig) -> Arc<dyn SearchEnhancer> {
    match config.search.parse_backend().0 {
        SearchBackend::Heuristic => Arc::new(HeuristicSearchEnhancer::new()),
        SearchBackend::DuckDuckGo => duckduckgo(config.search.max_results),
    }
}

#[cfg(feature = "web-tools")]
fn duckduckgo(max_results: usize) -> Arc<dyn SearchEnhancer> {
    match council_infrastructure::DuckDuckGoSearchEnhancer::new(max_results) {
        Ok(enhancer) => Arc::new(enhancer),
        Err(e) => {
            warn!("DuckDuckGo search unavailable ({}), using heuristic search", e);
            Arc::new(HeuristicSearchEnhancer::new())
        }
    }
}

#[cfg(not(feature = "web-tools"))]
fn duckduckgo(_max_results: usize) -> Arc<dyn SearchEnhancer> {
    Arc::new(HeuristicSearchEnhancer::new())
}

fn build_sources(config: &FileConfig) -> Arc<dyn SourceAttributor> {
    let (extra, _) = config.sources.parse_catalog();
    let attributor = CatalogSourceAttributor::with_builtins(extra)
        .with_max_sources(config.sources.max_sources);

    #[cfg(feature = "web-tools")]
    let attributor = if config.sources.validate_urls {
        match council_infrastructure::UrlValidator::new() {
            Ok(validator) => attributor.with_validator(validator),
            Err(e) => {
                warn!("URL validation unavailable: {}", e);
                attributor
            }
        }
    } else {
        attributor
    };

    Arc::new(attributor)
}

fn build_logger(cli: &Cli) -> Arc<dyn CoordinationLogger> {
    match cli.event_log.as_ref().and_then(JsonlCoordinationLogger::new) {
        Some(logger) => {
            info!("Writing coordination events to {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoCoordinationLogger),
    }
}
