//! Terminal rendering for transcript checks: one tagged line per example,
//! mismatch detail indented underneath, and a one-line summary at the end.

use colored::Colorize;

use crate::transcript::Mismatch;

/// Outcome of checking one example.
#[derive(Debug, Clone)]
pub enum CheckOutcome {
    Pass,
    Fail(Vec<Mismatch>),
    /// No transcript file on disk for this example.
    Skipped,
    /// The example could not be run or its transcript could not be loaded.
    Error(String),
}

/// Render one outcome line plus any detail lines.
pub fn render(chapter: &str, example: &str, outcome: &CheckOutcome) -> String {
    let tag = match outcome {
        CheckOutcome::Pass => "PASS".green().bold().to_string(),
        CheckOutcome::Fail(_) => "FAIL".red().bold().to_string(),
        CheckOutcome::Skipped => "SKIP".yellow().to_string(),
        CheckOutcome::Error(_) => "ERROR".red().bold().to_string(),
    };
    let mut out = format!("{tag} {chapter}/{example}");
    match outcome {
        CheckOutcome::Fail(mismatches) => {
            for mismatch in mismatches {
                out.push('\n');
                out.push_str(&describe_mismatch(mismatch));
            }
        }
        CheckOutcome::Error(message) => {
            out.push('\n');
            out.push_str(&format!("    {message}"));
        }
        _ => {}
    }
    out
}

fn describe_mismatch(mismatch: &Mismatch) -> String {
    match mismatch {
        Mismatch::Line {
            number,
            expected,
            actual,
        } => format!("    line {number}: expected `{expected}`, got `{actual}`"),
        Mismatch::MissingLine { number, expected } => {
            format!("    line {number}: expected `{expected}`, output ended")
        }
        Mismatch::ExtraLine { number, actual } => {
            format!("    line {number}: unexpected `{actual}`")
        }
    }
}

/// Totals across one checking run.
#[derive(Debug, Clone, Copy, Default)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub errored: usize,
}

impl Summary {
    pub fn record(&mut self, outcome: &CheckOutcome) {
        match outcome {
            CheckOutcome::Pass => self.passed += 1,
            CheckOutcome::Fail(_) => self.failed += 1,
            CheckOutcome::Skipped => self.skipped += 1,
            CheckOutcome::Error(_) => self.errored += 1,
        }
    }

    pub fn all_green(&self) -> bool {
        self.failed == 0 && self.errored == 0
    }

    pub fn line(&self) -> String {
        format!(
            "{} passed, {} failed, {} skipped, {} errored",
            self.passed, self.failed, self.skipped, self.errored
        )
    }
}
