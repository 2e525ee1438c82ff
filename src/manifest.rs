//! A chapter package's `Cargo.toml`, reduced to what the tooling needs:
//! the package name and the registered `[[example]]` entries.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::CourseError;

#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    pub package: Package,
    #[serde(default, rename = "example")]
    pub examples: Vec<ExampleEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Package {
    pub name: String,
}

/// One `[[example]]` registration, in manifest order.
#[derive(Debug, Clone, Deserialize)]
pub struct ExampleEntry {
    pub name: String,
    pub path: String,
}

impl Manifest {
    /// Parse manifest text; `origin` is only used for error context.
    pub fn parse(text: &str, origin: &Path) -> Result<Self, CourseError> {
        toml::from_str(text).map_err(|err| CourseError::Manifest {
            path: origin.to_path_buf(),
            message: err.message().to_string(),
        })
    }

    /// Read and parse the `Cargo.toml` directly under `dir`.
    pub fn load(dir: &Path) -> Result<Self, CourseError> {
        let path = dir.join("Cargo.toml");
        let text = fs::read_to_string(&path).map_err(|err| CourseError::Io {
            path: path.clone(),
            source: err,
        })?;
        Self::parse(&text, &path)
    }
}
