use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DemoEntry {
    slug: String,
    title: String,
    summary: String,
    stories: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct DemoCatalog {
    schema_version: u32,
    demos: Vec<DemoEntry>,
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("demos.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let catalog: DemoCatalog = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if catalog.schema_version != SCHEMA_VERSION {
        panic!(
            "demo catalog schema mismatch in {}: expected {SCHEMA_VERSION} found {}",
            path.display(),
            catalog.schema_version
        );
    }

    let mut seen = BTreeSet::new();
    for demo in &catalog.demos {
        if demo.slug.is_empty() || !demo.slug.chars().all(|c| c.is_ascii_lowercase() || c == '-') {
            panic!("invalid demo slug `{}` in {}", demo.slug, path.display());
        }
        if !seen.insert(demo.slug.as_str()) {
            panic!("duplicate demo slug `{}` in {}", demo.slug, path.display());
        }
        if demo.stories.is_empty() {
            panic!("demo `{}` lists no stories in {}", demo.slug, path.display());
        }
    }

    let json = serde_json::to_string_pretty(&catalog.demos).expect("serialize demo catalog");
    let generated = format!(
        "/// Build-time generated demo catalog JSON.\n\
pub const DEMO_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("demo_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
