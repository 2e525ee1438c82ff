//! Expected-output files for the runnable examples. A transcript is matched
//! line by line against an example's stdout: lines match literally unless
//! they start with `re: `, in which case the rest of the line is compiled as
//! a regular expression and must match the produced line in full.

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::CourseError;

/// Prefix marking a transcript line as a regular expression.
pub const REGEX_PREFIX: &str = "re: ";

/// One expected line of example output.
#[derive(Debug, Clone)]
pub enum ExpectedLine {
    Literal(String),
    Pattern(Regex),
}

impl ExpectedLine {
    pub fn matches(&self, actual: &str) -> bool {
        match self {
            ExpectedLine::Literal(text) => text == actual,
            ExpectedLine::Pattern(re) => re.is_match(actual),
        }
    }

    /// The form shown in mismatch reports.
    pub fn display(&self) -> String {
        match self {
            ExpectedLine::Literal(text) => text.clone(),
            ExpectedLine::Pattern(re) => format!("{REGEX_PREFIX}{}", re.as_str()),
        }
    }
}

/// A difference between expected and produced output. Line numbers are
/// 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mismatch {
    Line {
        number: usize,
        expected: String,
        actual: String,
    },
    /// Output ended before this expected line.
    MissingLine { number: usize, expected: String },
    /// Output continued past the end of the transcript.
    ExtraLine { number: usize, actual: String },
}

/// Parsed expected output for one example.
#[derive(Debug, Clone)]
pub struct Transcript {
    pub lines: Vec<ExpectedLine>,
}

impl Transcript {
    /// Parse transcript text; `origin` is only used for error context.
    pub fn parse(text: &str, origin: &Path) -> Result<Self, CourseError> {
        let mut lines = Vec::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = if let Some(pattern) = raw.strip_prefix(REGEX_PREFIX) {
                let re = Regex::new(&format!("^(?:{pattern})$")).map_err(|err| {
                    CourseError::Transcript {
                        path: origin.to_path_buf(),
                        line: idx + 1,
                        message: err.to_string(),
                    }
                })?;
                ExpectedLine::Pattern(re)
            } else {
                ExpectedLine::Literal(raw.to_string())
            };
            lines.push(line);
        }
        Ok(Transcript { lines })
    }

    pub fn load(path: &Path) -> Result<Self, CourseError> {
        let text = fs::read_to_string(path).map_err(|err| CourseError::Io {
            path: path.to_path_buf(),
            source: err,
        })?;
        Self::parse(&text, path)
    }

    /// Compare produced output against the transcript, line by line.
    pub fn match_output(&self, output: &str) -> Vec<Mismatch> {
        let actual: Vec<&str> = output.lines().collect();
        let mut mismatches = Vec::new();

        for (idx, expected) in self.lines.iter().enumerate() {
            match actual.get(idx) {
                Some(line) if expected.matches(line) => {}
                Some(line) => mismatches.push(Mismatch::Line {
                    number: idx + 1,
                    expected: expected.display(),
                    actual: (*line).to_string(),
                }),
                None => mismatches.push(Mismatch::MissingLine {
                    number: idx + 1,
                    expected: expected.display(),
                }),
            }
        }
        for (idx, line) in actual.iter().enumerate().skip(self.lines.len()) {
            mismatches.push(Mismatch::ExtraLine {
                number: idx + 1,
                actual: (*line).to_string(),
            });
        }
        mismatches
    }
}
