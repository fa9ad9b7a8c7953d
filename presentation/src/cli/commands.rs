//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for debate results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Roles, every turn, statistics and the verdict
    Full,
    /// Only the judge's verdict
    Verdict,
    /// JSON output
    Json,
}

impl From<OutputFormat> for arena_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => arena_domain::OutputFormat::Full,
            OutputFormat::Verdict => arena_domain::OutputFormat::Verdict,
            OutputFormat::Json => arena_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for debate-arena
#[derive(Parser, Debug)]
#[command(name = "debate-arena")]
#[command(author, version, about = "Two LLMs debate a topic, a third one judges")]
#[command(long_about = r#"
Debate Arena pits two language models against each other on a topic.

The session has three steps:
1. Role Assignment: a moderator model refines the topic and assigns
   opposing stances to LLM 1 and LLM 2
2. Debate: the two models alternate for N rounds, each answering the
   other's latest turn
3. Judgment: a judge model reads the transcript and names a winner

Configuration is merged from (lowest to highest priority):
1. ~/.config/debate-arena/config.toml   Global config
2. ./arena.toml                         Project-level config
3. --config <path>                      Explicit config file
4. ARENA_* environment variables        e.g. ARENA_DEBATE__ROUNDS=2

The API key is read from $GROQ_API_KEY by default (a .env file works too).

Example:
  debate-arena "Should social media be regulated?"
  debate-arena --rounds 1 --judge-model llama-3.3-70b-versatile "Tabs or spaces?"
  debate-arena -o json --no-judge "Is remote work here to stay?"
"#)]
pub struct Cli {
    /// The topic to debate
    pub topic: Option<String>,

    /// Number of rounds (each round is one turn per model)
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
    pub rounds: Option<u16>,

    /// Model for LLM 1 (speaks first)
    #[arg(long, value_name = "MODEL")]
    pub model_a: Option<String>,

    /// Model for LLM 2
    #[arg(long, value_name = "MODEL")]
    pub model_b: Option<String>,

    /// Model that refines the topic and assigns roles
    #[arg(long, value_name = "MODEL")]
    pub moderator: Option<String>,

    /// Model that judges the finished debate
    #[arg(long, value_name = "MODEL")]
    pub judge_model: Option<String>,

    /// Skip the judgment step
    #[arg(long)]
    pub no_judge: bool,

    /// Output format (defaults to the config file, then "full")
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Append debate events as JSON lines to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Also write diagnostics to a daily-rotated file in this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_full_invocation() {
        let cli = Cli::try_parse_from([
            "debate-arena",
            "--rounds",
            "2",
            "--model-a",
            "gemma2-9b-it",
            "--judge-model",
            "llama-3.3-70b-versatile",
            "-o",
            "json",
            "-vv",
            "Should social media be regulated?",
        ])
        .unwrap();

        assert_eq!(cli.topic.as_deref(), Some("Should social media be regulated?"));
        assert_eq!(cli.rounds, Some(2));
        assert_eq!(cli.model_a.as_deref(), Some("gemma2-9b-it"));
        assert_eq!(cli.judge_model.as_deref(), Some("llama-3.3-70b-versatile"));
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
        assert!(!cli.no_judge);
    }

    #[test]
    fn test_zero_rounds_rejected() {
        assert!(Cli::try_parse_from(["debate-arena", "--rounds", "0", "topic"]).is_err());
    }

    #[test]
    fn test_output_maps_to_domain_format() {
        assert_eq!(
            arena_domain::OutputFormat::from(OutputFormat::Verdict),
            arena_domain::OutputFormat::Verdict
        );
    }
}
