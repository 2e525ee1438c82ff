//! Chapter discovery. A chapter is a numbered `NN-name` directory directly
//! under the course root that contains a `Cargo.toml`; everything else is
//! ignored.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::manifest::Manifest;
use crate::CourseError;

/// One discovered chapter: its directory and parsed manifest.
#[derive(Debug, Clone)]
pub struct Chapter {
    pub dir: PathBuf,
    pub manifest: Manifest,
}

impl Chapter {
    /// The `NN-name` directory label.
    pub fn label(&self) -> String {
        self.dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.dir.join("Cargo.toml")
    }

    /// Expected-output file for one of this chapter's examples.
    pub fn transcript_path(&self, transcripts_root: &Path, example: &str) -> PathBuf {
        transcripts_root
            .join(self.label())
            .join(format!("{example}.txt"))
    }
}

/// The chapters under a course root, sorted by directory label.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub chapters: Vec<Chapter>,
}

impl Catalog {
    /// Discover chapter packages directly under `root`.
    pub fn discover(root: &Path) -> Result<Self, CourseError> {
        let mut chapters = Vec::new();
        let walker = WalkDir::new(root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();
        for entry in walker {
            let entry = entry.map_err(|err| CourseError::Io {
                path: root.to_path_buf(),
                source: err.into(),
            })?;
            if !entry.file_type().is_dir() {
                continue;
            }
            if !is_chapter_label(&entry.file_name().to_string_lossy()) {
                continue;
            }
            let dir = entry.path().to_path_buf();
            if !dir.join("Cargo.toml").is_file() {
                continue;
            }
            let manifest = Manifest::load(&dir)?;
            chapters.push(Chapter { dir, manifest });
        }
        Ok(Catalog { chapters })
    }

    pub fn example_count(&self) -> usize {
        self.chapters
            .iter()
            .map(|chapter| chapter.manifest.examples.len())
            .sum()
    }
}

/// `NN-name`: two leading digits, a dash, then the chapter name.
fn is_chapter_label(name: &str) -> bool {
    let bytes = name.as_bytes();
    bytes.len() > 3
        && bytes[0].is_ascii_digit()
        && bytes[1].is_ascii_digit()
        && bytes[2] == b'-'
}

/// Render the committed `TOC.md` for a catalog.
pub fn render_toc(catalog: &Catalog) -> String {
    let mut out = String::from("# Course Index\n\nGenerated by `cargo run --bin toc_maker`.\n");
    for chapter in &catalog.chapters {
        out.push_str(&format!(
            "\n## {} (`{}`)\n\n",
            chapter.label(),
            chapter.manifest.package.name
        ));
        if chapter.manifest.examples.is_empty() {
            out.push_str("No registered examples.\n");
            continue;
        }
        for example in &chapter.manifest.examples {
            out.push_str(&format!("- `{}`: {}\n", example.name, example.path));
        }
        out.push_str(&format!(
            "\nRun with `cargo run --example <name> --manifest-path {}`.\n",
            chapter.manifest_path().display()
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::{ExampleEntry, Package};
    use std::fs;

    fn write_chapter(root: &Path, label: &str, package: &str, examples: &[&str]) {
        let dir = root.join(label);
        fs::create_dir_all(dir.join("examples")).unwrap();
        let mut manifest = format!(
            "[package]\nname = \"{package}\"\nversion = \"0.1.0\"\nedition = \"2021\"\n"
        );
        for example in examples {
            manifest.push_str(&format!(
                "\n[[example]]\nname = \"{example}\"\npath = \"examples/{example}.rs\"\n"
            ));
        }
        fs::write(dir.join("Cargo.toml"), manifest).unwrap();
    }

    #[test]
    fn finds_numbered_chapters_in_label_order() {
        let root = tempfile::tempdir().unwrap();
        write_chapter(root.path(), "02-beta", "beta-patterns", &["p1_only"]);
        write_chapter(root.path(), "01-alpha", "alpha-patterns", &["p1_a", "p2_b"]);
        // Ignored: no leading chapter number.
        write_chapter(root.path(), "notes", "notes", &[]);
        // Ignored: numbered directory without a manifest.
        fs::create_dir_all(root.path().join("03-empty")).unwrap();

        let catalog = Catalog::discover(root.path()).unwrap();
        let labels: Vec<String> = catalog.chapters.iter().map(Chapter::label).collect();
        assert_eq!(labels, ["01-alpha", "02-beta"]);
        assert_eq!(catalog.example_count(), 3);
    }

    #[test]
    fn empty_root_yields_an_empty_catalog() {
        let root = tempfile::tempdir().unwrap();
        let catalog = Catalog::discover(root.path()).unwrap();
        assert!(catalog.chapters.is_empty());
        assert_eq!(catalog.example_count(), 0);
    }

    #[test]
    fn transcript_path_mirrors_chapter_and_example() {
        let chapter = Chapter {
            dir: PathBuf::from("source-code/01-alpha"),
            manifest: Manifest {
                package: Package {
                    name: "alpha-patterns".into(),
                },
                examples: vec![],
            },
        };
        assert_eq!(
            chapter.transcript_path(Path::new("transcripts"), "p1_a"),
            PathBuf::from("transcripts/01-alpha/p1_a.txt")
        );
    }

    #[test]
    fn toc_rendering_is_stable() {
        let catalog = Catalog {
            chapters: vec![Chapter {
                dir: PathBuf::from("source-code/01-alpha"),
                manifest: Manifest {
                    package: Package {
                        name: "alpha-patterns".into(),
                    },
                    examples: vec![ExampleEntry {
                        name: "p1_a".into(),
                        path: "examples/p1_a.rs".into(),
                    }],
                },
            }],
        };
        let expected = "\
# Course Index

Generated by `cargo run --bin toc_maker`.

## 01-alpha (`alpha-patterns`)

- `p1_a`: examples/p1_a.rs

Run with `cargo run --example <name> --manifest-path source-code/01-alpha/Cargo.toml`.
";
        assert_eq!(render_toc(&catalog), expected);
    }
}
