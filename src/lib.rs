//! # coursekit
//!
//! Maintenance tooling for the pattern course. The chapters under
//! `source-code/` are standalone packages whose runnable examples print a
//! fixed transcript; this crate discovers the chapters, reads their example
//! registrations, and verifies the transcripts.
//!
//! ## Modules
//!
//! - [`manifest`]: a chapter's `Cargo.toml`, reduced to package name and
//!   `[[example]]` entries
//! - [`catalog`]: chapter discovery and TOC rendering
//! - [`transcript`]: expected-output files and line matching
//! - [`report`]: terminal rendering of check results
//!
//! ## Bins
//!
//! - `check_transcripts`: run every registered example, compare its stdout
//!   with `transcripts/<chapter>/<example>.txt`
//! - `toc_maker`: regenerate `TOC.md` from the chapter manifests
//! - `count_examples`: example inventory, `--json` for machine output

use std::path::PathBuf;

use thiserror::Error;

pub mod catalog;
pub mod manifest;
pub mod report;
pub mod transcript;

pub use catalog::{Catalog, Chapter};
pub use manifest::{ExampleEntry, Manifest};
pub use transcript::{ExpectedLine, Mismatch, Transcript};

/// Errors produced by the course tooling.
#[derive(Debug, Error)]
pub enum CourseError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid manifest {}: {message}", .path.display())]
    Manifest { path: PathBuf, message: String },

    #[error("invalid transcript {} at line {line}: {message}", .path.display())]
    Transcript {
        path: PathBuf,
        line: usize,
        message: String,
    },
}
