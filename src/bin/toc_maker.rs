//! Regenerate `TOC.md` from the chapter manifests under `source-code/`.

use std::error::Error;
use std::fs;
use std::path::Path;
use std::process;

use coursekit::catalog::{render_toc, Catalog};

const SOURCE_ROOT: &str = "source-code";
const TOC_PATH: &str = "TOC.md";

fn main() -> Result<(), Box<dyn Error>> {
    let root = Path::new(SOURCE_ROOT);
    if !root.is_dir() {
        eprintln!("Error: '{SOURCE_ROOT}' is not a directory");
        process::exit(1);
    }

    let catalog = Catalog::discover(root)?;
    fs::write(TOC_PATH, render_toc(&catalog))?;
    println!(
        "Wrote {} chapters ({} examples) to {}",
        catalog.chapters.len(),
        catalog.example_count(),
        TOC_PATH
    );
    Ok(())
}
