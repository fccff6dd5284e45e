//! Demo catalog embedded from `demos.toml` at build time.

use std::sync::OnceLock;

use leptos::logging;
use serde::Deserialize;

include!(concat!(env!("OUT_DIR"), "/demo_catalog_generated.rs"));

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// One component page in the sandbox.
pub struct DemoEntry {
    /// Route segment under `/components/`.
    pub slug: String,
    /// Section heading.
    pub title: String,
    /// One-line description.
    pub summary: String,
    /// Story names rendered by the demo, in order.
    pub stories: Vec<String>,
}

impl DemoEntry {
    /// Route of the standalone demo page.
    pub fn href(&self) -> String {
        format!("/components/{}", self.slug)
    }

    /// Component demo rendered for this entry, if the slug is known.
    pub fn kind(&self) -> Option<DemoKind> {
        DemoKind::from_slug(&self.slug)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Component families with a demo.
pub enum DemoKind {
    /// Alert stories.
    Alert,
    /// Badge stories.
    Badge,
    /// Button stories.
    Button,
    /// Calendar stories.
    Calendar,
    /// Card stories.
    Card,
}

impl DemoKind {
    /// Maps a catalog slug to its demo.
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "alert" => Some(Self::Alert),
            "badge" => Some(Self::Badge),
            "button" => Some(Self::Button),
            "calendar" => Some(Self::Calendar),
            "card" => Some(Self::Card),
            _ => None,
        }
    }
}

fn parse_catalog(raw: &str) -> Vec<DemoEntry> {
    match serde_json::from_str(raw) {
        Ok(entries) => entries,
        Err(err) => {
            logging::error!("demo catalog parse failed: {err}");
            Vec::new()
        }
    }
}

/// Parsed catalog entries in declaration order.
pub fn demo_entries() -> &'static [DemoEntry] {
    static CATALOG: OnceLock<Vec<DemoEntry>> = OnceLock::new();
    CATALOG.get_or_init(|| parse_catalog(DEMO_CATALOG_JSON))
}

/// Looks up a catalog entry by slug.
pub fn find_demo(slug: &str) -> Option<&'static DemoEntry> {
    demo_entries().iter().find(|entry| entry.slug == slug)
}
