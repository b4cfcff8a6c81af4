//! Static site catalog embedded in the binary.
//!
//! The catalog is the raw content source: frameworks, concepts, patterns,
//! guides, tools, and glossary terms. It is deserialized once at startup
//! and never mutated afterwards; everything else in the crate reads from
//! the [`crate::index::SearchIndex`] built on top of it.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Embedded catalog data (JSON, checked into the source tree).
const CATALOG_JSON: &str = include_str!("catalog.json");

/// The closed set of content kinds the site knows about.
///
/// Every kind-keyed lookup in the crate (section slug, display label,
/// accent color) is an exhaustive `match` on this enum, so adding a kind
/// is a compile-time checklist rather than a silent runtime miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Framework,
    Concept,
    Pattern,
    Guide,
    Tool,
    Glossary,
}

impl ItemKind {
    /// Section order used for page navigation (next/previous).
    pub const ALL: [ItemKind; 6] = [
        ItemKind::Framework,
        ItemKind::Concept,
        ItemKind::Pattern,
        ItemKind::Guide,
        ItemKind::Tool,
        ItemKind::Glossary,
    ];

    /// URL path segment for the kind's section page.
    pub fn section_slug(self) -> &'static str {
        match self {
            ItemKind::Framework => "frameworks",
            ItemKind::Concept => "concepts",
            ItemKind::Pattern => "patterns",
            ItemKind::Guide => "guides",
            ItemKind::Tool => "tools",
            ItemKind::Glossary => "glossary",
        }
    }

    /// Singular label shown next to individual items.
    pub fn label(self) -> &'static str {
        match self {
            ItemKind::Framework => "Framework",
            ItemKind::Concept => "Concept",
            ItemKind::Pattern => "Pattern",
            ItemKind::Guide => "Guide",
            ItemKind::Tool => "Tool",
            ItemKind::Glossary => "Glossary",
        }
    }

    /// Heading for the kind's section page.
    pub fn section_title(self) -> &'static str {
        match self {
            ItemKind::Framework => "Frameworks",
            ItemKind::Concept => "Concepts",
            ItemKind::Pattern => "Design Patterns",
            ItemKind::Guide => "Guides",
            ItemKind::Tool => "Tools",
            ItemKind::Glossary => "Glossary",
        }
    }

    /// One-line description shown under the section heading.
    pub fn blurb(self) -> &'static str {
        match self {
            ItemKind::Framework => "Orchestration frameworks and SDKs for building agent systems.",
            ItemKind::Concept => "Core ideas behind how agents reason, act, and remember.",
            ItemKind::Pattern => "Reusable architectures for composing models, tools, and people.",
            ItemKind::Guide => "Practical walkthroughs for designing and shipping agents.",
            ItemKind::Tool => "Protocols and platforms for testing and observing agents.",
            ItemKind::Glossary => "Short definitions of terms used across the catalog.",
        }
    }

    /// Inverse of [`ItemKind::section_slug`], used by href resolution.
    pub fn from_section_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.section_slug() == slug)
    }
}

/// One raw catalog entry as authored in `catalog.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub kind: ItemKind,
    pub slug: String,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl CatalogEntry {
    /// Site-relative path of the entry's detail page.
    pub fn href(&self) -> String {
        format!("/{}/{}", self.kind.section_slug(), self.slug)
    }
}

/// The full content catalog, in authoring order.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    pub entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Load the catalog embedded in the binary.
    pub fn embedded() -> Result<Self> {
        serde_json::from_str(CATALOG_JSON).context("Failed to parse embedded catalog")
    }

    /// Number of entries of a given kind.
    pub fn count(&self, kind: ItemKind) -> usize {
        self.entries.iter().filter(|e| e.kind == kind).count()
    }
}
