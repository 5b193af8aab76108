//! Console and JSON rendering of grading reports

use colored::*;

use super::grader::GradingReport;
use crate::Result;

const SEPARATOR: &str = "=========================";

/// Human-readable report: one block per mistake, then a summary line
pub fn render_human(report: &GradingReport) -> String {
    let mut out = String::new();

    for mistake in &report.mistakes {
        out.push('\n');
        out.push_str(&format!("{}\n", format!("Mistake in problem #{}.", mistake.id).bright_red().bold()));
        out.push_str(&format!("Correct answer: {}.\n", mistake.correct_answer));
        if !mistake.help_msg.is_empty() {
            out.push_str(&format!("{}\n", mistake.help_msg.bright_yellow()));
        }
        out.push_str(&format!("Your answer: {}.\n", mistake.student_answer));
        out.push_str(SEPARATOR);
    }

    if report.is_clean() {
        out.push_str(&format!(
            "{}\n",
            "Your algorithm solved all test problems correctly. Congratulations!".bright_green()
        ));
    } else {
        out.push_str(&format!(
            "\n{}\n",
            format!("Your algorithm made {} mistake(s).", report.mistake_count()).bright_red()
        ));
    }

    out.push_str(&format!("{} {}ms.\n", "Running time:".bright_cyan(), report.time_ms));
    out
}

/// Pretty-printed JSON report
pub fn render_json(report: &GradingReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
