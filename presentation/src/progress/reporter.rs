//! Progress reporting for a running debate
//!
//! Everything here goes to stderr; stdout carries only the final result.

use crate::output::console::ConsoleFormatter;
use arena_application::ArenaModels;
use arena_application::ports::progress::DebateProgressNotifier;
use arena_domain::{RoleAssignment, Speaker, Transcript, Turn, Verdict, one_line_preview};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::sync::Mutex;
use std::time::Duration;

const PREVIEW_LEN: usize = 80;

/// Spinner while each model is working; prints each turn as it lands
pub struct ProgressReporter {
    models: ArenaModels,
    /// Print whole turns instead of one-line previews
    show_turns: bool,
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new(models: ArenaModels) -> Self {
        Self {
            models,
            show_turns: false,
            spinner: Mutex::new(None),
        }
    }

    /// Render every turn in full as soon as it is appended
    pub fn with_turns(mut self) -> Self {
        self.show_turns = true;
        self
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn start_spinner(&self, prefix: String, message: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(prefix);
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock()
            && let Some(previous) = slot.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    fn clear_spinner(&self) {
        if let Ok(mut slot) = self.spinner.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_and_clear();
        }
    }

    fn speaker_label(&self, speaker: Speaker) -> String {
        match self.models.model_for(speaker) {
            Some(model) => format!("{} ({})", speaker, model),
            None => speaker.to_string(),
        }
    }
}

impl DebateProgressNotifier for ProgressReporter {
    fn on_assignment_start(&self) {
        self.start_spinner(
            format!("Moderator ({})", self.models.moderator),
            "assigning roles...",
        );
    }

    fn on_roles_assigned(&self, roles: &RoleAssignment) {
        self.clear_spinner();
        eprintln!("{} {}", "v".green(), "Roles assigned".bold());
        eprintln!("  {} {}", "Goal:".dimmed(), roles.refined_goal);
        for speaker in [Speaker::ResponderA, Speaker::ResponderB] {
            eprintln!(
                "  {} {}",
                format!("{}:", speaker).dimmed(),
                one_line_preview(roles.role_of(speaker).unwrap_or_default(), PREVIEW_LEN)
            );
        }
    }

    fn on_round_start(&self, round: usize, total_rounds: usize) {
        eprintln!(
            "\n{} {}",
            "->".cyan(),
            format!("Round {}/{}", round, total_rounds).bold()
        );
    }

    fn on_turn_start(&self, _round: usize, speaker: Speaker) {
        self.start_spinner(self.speaker_label(speaker), "is thinking...");
    }

    fn on_turn_complete(&self, round: usize, turn: &Turn) {
        self.clear_spinner();
        if self.show_turns {
            let model = self.models.model_for(turn.speaker()).map(|m| m.as_str());
            eprint!("{}", ConsoleFormatter::format_turn(round, turn, model));
        } else {
            eprintln!(
                "  {} {}: {}",
                "v".green(),
                turn.speaker(),
                one_line_preview(turn.text(), PREVIEW_LEN).dimmed()
            );
        }
    }

    fn on_debate_complete(&self, transcript: &Transcript) {
        eprintln!(
            "\n{} ({} turns)",
            "Debate complete".green().bold(),
            transcript.turn_count() - 1
        );
    }

    fn on_judge_start(&self) {
        self.start_spinner(format!("Judge ({})", self.models.judge), "is deliberating...");
    }

    fn on_judge_complete(&self, _verdict: &Verdict) {
        self.clear_spinner();
        eprintln!("{} {}", "v".green(), "Verdict received".bold());
    }
}

/// Plain progress lines (no spinners), for non-terminal output
pub struct SimpleProgress {
    out: Mutex<Box<dyn Write + Send>>,
}

impl SimpleProgress {
    pub fn new() -> Self {
        Self::with_writer(std::io::stderr())
    }

    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            out: Mutex::new(Box::new(writer)),
        }
    }

    fn line(&self, args: std::fmt::Arguments<'_>) {
        if let Ok(mut out) = self.out.lock() {
            // a closed pipe must not abort the debate
            let _ = writeln!(out, "{}", args);
        }
    }
}

impl Default for SimpleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl DebateProgressNotifier for SimpleProgress {
    fn on_assignment_start(&self) {
        self.line(format_args!("{} {}", "->".cyan(), "Assigning roles".bold()));
    }

    fn on_roles_assigned(&self, roles: &RoleAssignment) {
        self.line(format_args!("  {} {}", "v".green(), roles.refined_goal));
    }

    fn on_round_start(&self, round: usize, total_rounds: usize) {
        self.line(format_args!("{} Round {}/{}", "->".cyan(), round, total_rounds));
    }

    fn on_turn_complete(&self, _round: usize, turn: &Turn) {
        self.line(format_args!(
            "  {} {}: {}",
            "v".green(),
            turn.speaker(),
            one_line_preview(turn.text(), PREVIEW_LEN)
        ));
    }

    fn on_judge_start(&self) {
        self.line(format_args!("{} {}", "->".cyan(), "Judging".bold()));
    }

    fn on_judge_complete(&self, _verdict: &Verdict) {
        self.line(format_args!("{} {}", "v".green(), "Verdict received"));
    }
}
