//! CLI command definitions

use clap::{Parser, ValueEnum};
use council_domain::CallerProfile;
use std::path::PathBuf;

/// Output format for coordinated answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Analysis plus specialists, confidence, complexity, sources and timing
    Full,
    /// Only the merged analysis, insights and recommendations
    Analysis,
    /// JSON output
    Json,
}

impl From<OutputFormat> for council_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => council_domain::OutputFormat::Full,
            OutputFormat::Analysis => council_domain::OutputFormat::Analysis,
            OutputFormat::Json => council_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for expert-council
#[derive(Parser, Debug)]
#[command(name = "expert-council")]
#[command(author, version, about = "Expert Council - Specialists analyse a query and merge one answer")]
#[command(long_about = r#"
Expert Council routes a query to a council of rule-based specialists and
merges their answers into one response.

Each request runs four steps:
1. Scoring: the query is scored for complexity, data focus and research focus
2. Selection: the analyst always answers; the data scientist and researcher join when the scores call for them
3. Dispatch: selected specialists answer concurrently; a failing specialist only loses its own answer
4. Synthesis: answers are ranked by confidence and merged, with reference sources attached

Configuration files are loaded from (in priority order):
1. COUNCIL_* environment variables
2. --config <path>     Explicit config file
3. ./council.toml      Project-level config
4. ~/.config/expert-council/config.toml   Global config

Example:
  expert-council "Compare machine learning models to optimize prediction accuracy"
  expert-council -o full --profile '{"industry":"retail"}' "Forecast holiday demand"
  expert-council --list-specialists
"#)]
pub struct Cli {
    /// The query to analyse
    pub query: Option<String>,

    /// Caller profile as a JSON object, passed through to the council
    #[arg(long, value_name = "JSON")]
    pub profile: Option<String>,

    /// Free-form analysis mode tag
    #[arg(long, value_name = "TAG")]
    pub mode: Option<String>,

    /// Output format (defaults to the config file, then "analysis")
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Per-specialist timeout in seconds (0 waits indefinitely)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Skip search enhancement
    #[arg(long)]
    pub no_search: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// List registered specialists and exit
    #[arg(long)]
    pub list_specialists: bool,

    /// Append structured coordination events (JSONL) to this file
    #[arg(long, value_name = "PATH")]
    pub event_log: Option<PathBuf>,

    /// Write diagnostic logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Parse `--profile`. Anything but a JSON object is rejected.
    pub fn parse_profile(&self) -> Result<Option<CallerProfile>, String> {
        let Some(raw) = self.profile.as_deref() else {
            return Ok(None);
        };
        match serde_json::from_str::<serde_json::Value>(raw) {
            Ok(serde_json::Value::Object(map)) => Ok(Some(map)),
            Ok(_) => Err("--profile must be a JSON object".to_string()),
            Err(e) => Err(format!("--profile is not valid JSON: {}", e)),
        }
    }
}
