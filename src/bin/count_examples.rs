//! Example inventory: how many runnable examples each chapter registers.
//! `--json` prints the inventory as JSON for scripting.

use std::env;
use std::error::Error;
use std::path::Path;

use serde::Serialize;

use coursekit::Catalog;

const SOURCE_ROOT: &str = "source-code";

#[derive(Serialize)]
struct Inventory {
    chapters: Vec<ChapterCount>,
    total: usize,
}

#[derive(Serialize)]
struct ChapterCount {
    chapter: String,
    package: String,
    examples: usize,
}

fn main() -> Result<(), Box<dyn Error>> {
    let as_json = env::args().skip(1).any(|arg| arg == "--json");
    let catalog = Catalog::discover(Path::new(SOURCE_ROOT))?;

    let inventory = Inventory {
        chapters: catalog
            .chapters
            .iter()
            .map(|chapter| ChapterCount {
                chapter: chapter.label(),
                package: chapter.manifest.package.name.clone(),
                examples: chapter.manifest.examples.len(),
            })
            .collect(),
        total: catalog.example_count(),
    };

    if as_json {
        println!("{}", serde_json::to_string_pretty(&inventory)?);
        return Ok(());
    }

    println!("Examples per chapter:");
    for chapter in &inventory.chapters {
        println!(
            "  {} ({}): {}",
            chapter.chapter, chapter.package, chapter.examples
        );
    }
    println!("\nTotal examples: {}", inventory.total);
    Ok(())
}
