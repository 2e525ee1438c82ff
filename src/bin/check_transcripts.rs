//! Run every registered chapter example and compare its stdout against the
//! committed transcript under `transcripts/<chapter>/<example>.txt`.
//! Examples without a transcript are reported as skipped; any failure or
//! error makes the process exit nonzero.

use std::error::Error;
use std::path::Path;
use std::process::{self, Command};

use coursekit::report::{self, CheckOutcome, Summary};
use coursekit::{Catalog, Chapter, Transcript};

const SOURCE_ROOT: &str = "source-code";
const TRANSCRIPTS_ROOT: &str = "transcripts";
const STDERR_TAIL_LINES: usize = 3;

fn main() -> Result<(), Box<dyn Error>> {
    let catalog = Catalog::discover(Path::new(SOURCE_ROOT))?;
    if catalog.chapters.is_empty() {
        eprintln!("No chapters found under {SOURCE_ROOT}/");
        process::exit(1);
    }

    let transcripts = Path::new(TRANSCRIPTS_ROOT);
    let mut summary = Summary::default();

    for chapter in &catalog.chapters {
        for example in &chapter.manifest.examples {
            let outcome = check_example(chapter, transcripts, &example.name);
            println!(
                "{}",
                report::render(&chapter.label(), &example.name, &outcome)
            );
            summary.record(&outcome);
        }
    }

    println!("\n{}", summary.line());
    if !summary.all_green() {
        process::exit(1);
    }
    Ok(())
}

fn check_example(chapter: &Chapter, transcripts: &Path, example: &str) -> CheckOutcome {
    let transcript_path = chapter.transcript_path(transcripts, example);
    if !transcript_path.is_file() {
        return CheckOutcome::Skipped;
    }
    let transcript = match Transcript::load(&transcript_path) {
        Ok(transcript) => transcript,
        Err(err) => return CheckOutcome::Error(err.to_string()),
    };
    let output = match run_example(&chapter.manifest_path(), example) {
        Ok(output) => output,
        Err(message) => return CheckOutcome::Error(message),
    };
    let mismatches = transcript.match_output(&output);
    if mismatches.is_empty() {
        CheckOutcome::Pass
    } else {
        CheckOutcome::Fail(mismatches)
    }
}

fn run_example(manifest_path: &Path, example: &str) -> Result<String, String> {
    let output = Command::new("cargo")
        .args(["run", "--quiet", "--example", example, "--manifest-path"])
        .arg(manifest_path)
        .output()
        .map_err(|err| format!("failed to spawn cargo: {err}"))?;
    if !output.status.success() {
        let mut message = format!("example exited with {}", output.status);
        if let Some(tail) = stderr_tail(&String::from_utf8_lossy(&output.stderr)) {
            message.push_str(&format!(": {tail}"));
        }
        return Err(message);
    }
    String::from_utf8(output.stdout).map_err(|err| format!("output was not UTF-8: {err}"))
}

/// Last non-empty stderr lines of a failed run, joined for the report.
fn stderr_tail(stderr: &str) -> Option<String> {
    let lines: Vec<&str> = stderr
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .collect();
    if lines.is_empty() {
        return None;
    }
    let start = lines.len().saturating_sub(STDERR_TAIL_LINES);
    Some(lines[start..].join(" | "))
}

#[cfg(test)]
mod tests {
    use super::stderr_tail;

    #[test]
    fn tail_keeps_the_last_lines_and_drops_blanks() {
        let stderr = "warning: noise\n\nerror: it broke\nnote: details here\n";
        assert_eq!(
            stderr_tail(stderr).unwrap(),
            "warning: noise | error: it broke | note: details here"
        );
    }

    #[test]
    fn long_stderr_is_trimmed_to_the_tail() {
        let stderr = "one\ntwo\nthree\nfour\nfive\n";
        assert_eq!(stderr_tail(stderr).unwrap(), "three | four | five");
    }

    #[test]
    fn silent_failure_yields_no_tail() {
        assert_eq!(stderr_tail(""), None);
        assert_eq!(stderr_tail("\n   \n"), None);
    }
}
