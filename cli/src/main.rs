//! CLI entrypoint for Debate Arena
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use arena_application::{
    ArenaModels, AssignRolesUseCase, ConversationEvent, ConversationLogger, DebateParams,
    DebateProgressNotifier, JudgeDebateUseCase, NoConversationLogger, NoProgress, RunDebateError,
    RunDebateInput, RunDebateUseCase,
};
use arena_domain::{OutputFormat, Verdict};
use arena_infrastructure::{ConfigLoader, FileConfig, JsonlConversationLogger, OpenAiCompatGateway};
use arena_presentation::{Cli, ConsoleFormatter, DebateReport, ProgressReporter, SimpleProgress};
use clap::Parser;
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Everything the session needs once config and flags are merged
struct Session {
    topic: String,
    models: ArenaModels,
    params: DebateParams,
    format: OutputFormat,
    judge: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let _guard = init_tracing(cli.verbose, cli.log_dir.as_deref())?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };
    // flags are the top layer, so they take part in validation
    apply_cli_overrides(&cli, &mut config);
    check_config(&config)?;

    let session = resolve_session(&cli, &config)?;
    colored::control::set_override(config.output.color && std::io::stdout().is_terminal());

    info!("Starting Debate Arena");

    // === Dependency Injection ===
    let gateway = Arc::new(OpenAiCompatGateway::from_config(&config.provider)?);
    let logger = conversation_logger(cli.log_file.as_ref().or(config.logging.conversation_log.as_ref()));

    // turns are printed live; the final output only needs the summary
    let streamed = !cli.quiet
        && session.format == OutputFormat::Full
        && std::io::stdout().is_terminal()
        && std::io::stderr().is_terminal();

    // progress goes to stderr so stdout stays parseable
    let progress: Box<dyn DebateProgressNotifier> = if cli.quiet {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        let reporter = ProgressReporter::new(session.models.clone());
        if streamed {
            Box::new(reporter.with_turns())
        } else {
            Box::new(reporter)
        }
    } else {
        Box::new(SimpleProgress::new())
    };

    if streamed {
        println!();
        println!("+============================================================+");
        println!("|                       Debate Arena                         |");
        println!("+============================================================+");
        println!();
        println!("Topic: {}", session.topic);
        println!();
    }

    // 1. Role assignment
    let roles = AssignRolesUseCase::new(Arc::clone(&gateway))
        .with_conversation_logger(Arc::clone(&logger))
        .execute_with_progress(&session.topic, &session.models.moderator, progress.as_ref())
        .await
        .context("Role assignment failed")?;

    // 2. Debate
    let (responder_a, responder_b) = session.models.responders(&roles);
    let input = RunDebateInput::new(session.topic.clone(), responder_a, responder_b)
        .with_params(session.params);

    let transcript = match RunDebateUseCase::new(Arc::clone(&gateway))
        .with_conversation_logger(Arc::clone(&logger))
        .execute_with_progress(input, progress.as_ref())
        .await
    {
        Ok(transcript) => transcript,
        Err(e) => return Err(report_debate_failure(e, logger.as_ref())),
    };

    // 3. Judgment
    let verdict: Option<Verdict> = if session.judge {
        Some(
            JudgeDebateUseCase::new(Arc::clone(&gateway))
                .with_conversation_logger(Arc::clone(&logger))
                .execute_with_progress(&transcript, &session.models.judge, progress.as_ref())
                .await
                .context("Judgment failed")?,
        )
    } else {
        None
    };

    // Output results
    let report = DebateReport::new(&roles, &session.models, &transcript, verdict.as_ref());
    println!("{}", render(&report, session.format, streamed));

    Ok(())
}

fn render(report: &DebateReport<'_>, format: OutputFormat, streamed: bool) -> String {
    match format {
        OutputFormat::Full if streamed => ConsoleFormatter::format_summary(report),
        OutputFormat::Full => ConsoleFormatter::format(report),
        OutputFormat::Verdict => ConsoleFormatter::format_verdict_only(report),
        OutputFormat::Json => ConsoleFormatter::format_json(report),
    }
}

/// Initialize logging based on verbosity level; `RUST_LOG` wins when set.
///
/// The returned guard must live until exit so the file writer flushes.
fn init_tracing(verbose: u8, log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Cannot create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(dir, "debate-arena.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}

/// Print every config issue; refuse to run if any is fatal.
fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    for issue in &issues {
        if issue.is_fatal() {
            eprintln!("config error: {}", issue.message);
        } else {
            warn!("{}", issue.message);
        }
    }
    if issues.iter().any(|i| i.is_fatal()) {
        bail!("Invalid configuration ({} error(s))", issues.iter().filter(|i| i.is_fatal()).count());
    }
    Ok(())
}

/// Write model and round flags into the loaded configuration.
fn apply_cli_overrides(cli: &Cli, config: &mut FileConfig) {
    let overrides = [
        (&cli.model_a, &mut config.models.responder_a),
        (&cli.model_b, &mut config.models.responder_b),
        (&cli.moderator, &mut config.models.moderator),
        (&cli.judge_model, &mut config.models.judge),
    ];
    for (flag, slot) in overrides {
        if let Some(name) = flag.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
            *slot = Some(name.to_string());
        }
    }
    if let Some(rounds) = cli.rounds {
        config.debate.rounds = usize::from(rounds);
    }
}

/// Settle what the session runs with; overrides are already applied.
fn resolve_session(cli: &Cli, config: &FileConfig) -> Result<Session> {
    let topic = match cli.topic.as_deref().map(str::trim) {
        Some(t) if !t.is_empty() => t.to_string(),
        _ => bail!("A debate topic is required, e.g. debate-arena \"Should social media be regulated?\""),
    };

    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();

    Ok(Session {
        topic,
        models: config.arena_models(),
        params: config.debate_params(),
        format,
        judge: !cli.no_judge,
    })
}

fn conversation_logger(path: Option<&std::path::PathBuf>) -> Arc<dyn ConversationLogger> {
    match path.and_then(|p| JsonlConversationLogger::new(p)) {
        Some(logger) => {
            info!("Logging debate events to {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoConversationLogger),
    }
}

/// Show what was said before the failure, record it, and hand back the error.
fn report_debate_failure(error: RunDebateError, logger: &dyn ConversationLogger) -> anyhow::Error {
    logger.log(ConversationEvent::new(
        "debate_failed",
        serde_json::json!({
            "error": error.to_string(),
            "turns_completed": error
                .partial_transcript()
                .map(|t| t.turn_count() - 1)
                .unwrap_or(0),
        }),
    ));

    if let Some(partial) = error.partial_transcript() {
        eprintln!("{}", ConsoleFormatter::format_partial(partial, &error));
    }

    anyhow::Error::new(error).context("Debate did not finish")
}
