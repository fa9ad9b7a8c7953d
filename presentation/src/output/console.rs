//! Console output formatter for debate results

use crate::output::formatter::DebateReport;
use arena_application::ArenaModels;
use arena_domain::{DebateStats, ParsedVerdict, RoleAssignment, Speaker, Transcript, Turn, Verdict};
use colored::Colorize;

/// Formats debate results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete debate: roles, transcript, stats, verdict
    pub fn format(report: &DebateReport<'_>) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Debate Arena"));
        output.push('\n');
        output.push_str(&Self::format_roles(report.roles, report.models, report.topic));

        output.push_str(&Self::section_header("Debate"));
        for (index, turn) in report.transcript.responder_turns().enumerate() {
            let round = index / 2 + 1;
            let model = report.models.model_for(turn.speaker());
            output.push_str(&Self::format_turn(round, turn, model.map(|m| m.as_str())));
        }

        output.push_str(&Self::summary_sections(report));
        output.push_str(&Self::footer());

        output
    }

    /// Statistics and verdict only, for when the turns were already
    /// printed while the debate ran
    pub fn format_summary(report: &DebateReport<'_>) -> String {
        let mut output = Self::summary_sections(report);
        output.push_str(&Self::footer());
        output
    }

    /// Format as JSON
    pub fn format_json(report: &DebateReport<'_>) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the verdict only (concise output)
    pub fn format_verdict_only(report: &DebateReport<'_>) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n\n", "=== Debate Verdict ===".cyan().bold()));
        output.push_str(&format!("{} {}\n\n", "Topic:".bold(), report.topic));

        match report.verdict {
            Some(verdict) => {
                output.push_str(&Self::format_verdict(verdict, report.parsed_verdict.as_ref()));
            }
            None => output.push_str(&format!("{}\n", "(judgment skipped)".dimmed())),
        }

        output
    }

    /// Refined goal plus each responder's model and stance
    pub fn format_roles(roles: &RoleAssignment, models: &ArenaModels, topic: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("{} {}\n", "Topic:".cyan().bold(), topic));
        if roles.refined_goal != topic {
            output.push_str(&format!(
                "{} {}\n",
                "Refined goal:".cyan().bold(),
                roles.refined_goal
            ));
        }

        output.push_str(&Self::section_header("Roles"));
        for speaker in [Speaker::ResponderA, Speaker::ResponderB] {
            let model = models
                .model_for(speaker)
                .map(|m| m.to_string())
                .unwrap_or_default();
            output.push_str(&format!(
                "\n{} {}\n{}\n",
                speaker.display_name().yellow().bold(),
                format!("({})", model).dimmed(),
                Self::indent(roles.role_of(speaker).unwrap_or_default(), "  ")
            ));
        }
        output.push_str(&format!(
            "\n{} {}\n",
            "Judge:".dimmed(),
            models.judge.to_string().dimmed()
        ));

        output
    }

    /// One turn with its round and speaker
    pub fn format_turn(round: usize, turn: &Turn, model: Option<&str>) -> String {
        let title = match model {
            Some(model) => format!("── Round {} | {} ({}) ──", round, turn.speaker(), model),
            None => format!("── Round {} | {} ──", round, turn.speaker()),
        };
        let title = match turn.speaker() {
            Speaker::ResponderA => title.blue().bold(),
            _ => title.magenta().bold(),
        };

        let text = if turn.text().trim().is_empty() {
            "(empty response)".dimmed().to_string()
        } else {
            turn.text().trim().to_string()
        };

        format!("\n{}\n{}\n", title, text)
    }

    pub fn format_stats(stats: &DebateStats) -> String {
        format!(
            "  {} {}\n  {} {}\n  {} {}\n  {} {}\n",
            "Rounds completed:".dimmed(),
            stats.rounds,
            "LLM 1 turns:".dimmed(),
            stats.responder_a_turns,
            "LLM 2 turns:".dimmed(),
            stats.responder_b_turns,
            "Total exchanges:".dimmed(),
            stats.total_exchanges
        )
    }

    /// Winner and reason when the verdict followed the requested format,
    /// otherwise the judge's raw text
    pub fn format_verdict(verdict: &Verdict, parsed: Option<&ParsedVerdict>) -> String {
        let judge = format!("Judge: {}", verdict.judge).yellow().bold();
        match parsed {
            Some(parsed) => {
                let mut output = format!(
                    "\n{}\n\n{} {}\n",
                    judge,
                    "Winner:".green().bold(),
                    parsed.winner.display_name().bold()
                );
                if !parsed.reason.is_empty() {
                    output.push_str(&format!(
                        "{}\n{}\n",
                        "Reason:".green().bold(),
                        Self::indent(&parsed.reason, "  ")
                    ));
                }
                output
            }
            None => format!("\n{}\n\n{}\n", judge, verdict.raw.trim()),
        }
    }

    /// What was said before a debate failed, followed by the error
    pub fn format_partial(transcript: &Transcript, error: &dyn std::fmt::Display) -> String {
        let mut output = String::new();

        output.push_str(&Self::section_header("Debate interrupted"));
        if transcript.has_responder_turns() {
            for (index, turn) in transcript.responder_turns().enumerate() {
                output.push_str(&Self::format_turn(index / 2 + 1, turn, None));
            }
        } else {
            output.push_str(&format!("{}\n", "(no turns were completed)".dimmed()));
        }

        output.push_str(&format!("\n{}\n", "Statistics:".cyan().bold()));
        output.push_str(&Self::format_stats(&DebateStats::from_transcript(transcript)));
        output.push_str(&format!("\n{} {}\n", "Error:".red().bold(), error));

        output
    }

    fn summary_sections(report: &DebateReport<'_>) -> String {
        let mut output = String::new();

        output.push_str(&Self::section_header("Statistics"));
        output.push_str(&Self::format_stats(&report.stats));

        if let Some(verdict) = report.verdict {
            output.push_str(&Self::section_header("Verdict"));
            output.push_str(&Self::format_verdict(verdict, report.parsed_verdict.as_ref()));
        }

        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
