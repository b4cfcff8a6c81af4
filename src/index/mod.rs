//! The search index and href routing.
//!
//! The index is a flat, immutable list of [`SearchItem`] records built once
//! from the catalog at startup. It is the only data structure the matcher,
//! the TUI, and the CLI read from; after [`SearchIndex::build`] returns it
//! is never mutated, recreated, or invalidated.

use crate::catalog::{Catalog, ItemKind};
use crate::search;
use anyhow::{Result, bail};
use serde::Serialize;
use std::collections::HashSet;

/// Position of an item in the index (insertion order, stable for ranking).
pub type ItemId = usize;

/// One searchable record.
#[derive(Debug, Clone, Serialize)]
pub struct SearchItem {
    pub title: String,
    pub description: String,
    /// Site-relative path, unique across the index.
    pub href: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// A resolved navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Section(ItemKind),
    Detail(ItemId),
    /// Generic fallback for hrefs the catalog does not know.
    NotFound,
}

/// Immutable, ordered collection of every searchable record on the site.
#[derive(Debug)]
pub struct SearchIndex {
    items: Vec<SearchItem>,
}

impl SearchIndex {
    /// Build the index from a catalog, validating its invariants:
    /// hrefs are unique and titles are non-empty.
    pub fn build(catalog: &Catalog) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut items = Vec::with_capacity(catalog.entries.len());

        for entry in &catalog.entries {
            if entry.name.trim().is_empty() {
                bail!("Catalog entry '{}' has an empty title", entry.slug);
            }
            let href = entry.href();
            if !seen.insert(href.clone()) {
                bail!("Duplicate href in catalog: {}", href);
            }
            items.push(SearchItem {
                title: entry.name.clone(),
                description: entry.description.clone(),
                href,
                kind: entry.kind,
                category: entry.category.clone(),
            });
        }

        Ok(Self { items })
    }

    /// Build the index from the catalog embedded in the binary.
    pub fn embedded() -> Result<Self> {
        Self::build(&Catalog::embedded()?)
    }

    pub fn items(&self) -> &[SearchItem] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&SearchItem> {
        self.items.get(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Ids of all items of a kind, in insertion order.
    pub fn ids_of_kind(&self, kind: ItemKind) -> Vec<ItemId> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.kind == kind)
            .map(|(id, _)| id)
            .collect()
    }

    /// Rank items for a query, capped at [`search::RESULT_CAP`].
    pub fn search(&self, query: &str) -> Vec<&SearchItem> {
        self.search_with_limit(query, search::RESULT_CAP)
    }

    /// Rank items for a query with an explicit cap (0 = unlimited).
    pub fn search_with_limit(&self, query: &str, limit: usize) -> Vec<&SearchItem> {
        search::rank_with_cap(query, &self.items, limit)
            .into_iter()
            .map(|id| &self.items[id])
            .collect()
    }

    /// Resolve a site-relative href to a navigation target.
    ///
    /// Unknown paths resolve to [`Route::NotFound`]; a bad link in content
    /// is an authoring error, never a runtime fault.
    pub fn resolve(&self, href: &str) -> Route {
        let path = href.trim_end_matches('/');
        if path.is_empty() || path == "/" {
            return Route::Home;
        }

        let mut segments = path.trim_start_matches('/').splitn(2, '/');
        let section = segments.next().unwrap_or_default();
        let rest = segments.next();

        let Some(kind) = ItemKind::from_section_slug(section) else {
            return Route::NotFound;
        };

        match rest {
            None => Route::Section(kind),
            Some(_) => self
                .items
                .iter()
                .position(|item| item.href == path)
                .map_or(Route::NotFound, Route::Detail),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogEntry;

    fn entry(kind: ItemKind, slug: &str, name: &str) -> CatalogEntry {
        CatalogEntry {
            kind,
            slug: slug.to_string(),
            name: name.to_string(),
            description: format!("{} description", name),
            category: None,
        }
    }

    #[test]
    fn test_build_embedded() {
        let index = SearchIndex::embedded().unwrap();
        assert!(index.len() >= 30);
    }

    #[test]
    fn test_duplicate_href_rejected() {
        let catalog = Catalog {
            entries: vec![
                entry(ItemKind::Tool, "mcp", "MCP"),
                entry(ItemKind::Tool, "mcp", "MCP again"),
            ],
        };
        assert!(SearchIndex::build(&catalog).is_err());
    }

    #[test]
    fn test_empty_title_rejected() {
        let catalog = Catalog {
            entries: vec![entry(ItemKind::Concept, "blank", "   ")],
        };
        assert!(SearchIndex::build(&catalog).is_err());
    }

    #[test]
    fn test_same_slug_different_sections_ok() {
        let catalog = Catalog {
            entries: vec![
                entry(ItemKind::Concept, "reflection", "Reflection"),
                entry(ItemKind::Pattern, "reflection", "Reflection Loop"),
            ],
        };
        let index = SearchIndex::build(&catalog).unwrap();
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_resolve_home() {
        let index = SearchIndex::embedded().unwrap();
        assert_eq!(index.resolve("/"), Route::Home);
        assert_eq!(index.resolve(""), Route::Home);
    }

    #[test]
    fn test_resolve_section() {
        let index = SearchIndex::embedded().unwrap();
        assert_eq!(index.resolve("/frameworks"), Route::Section(ItemKind::Framework));
        assert_eq!(index.resolve("/glossary/"), Route::Section(ItemKind::Glossary));
    }

    #[test]
    fn test_resolve_detail() {
        let index = SearchIndex::embedded().unwrap();
        match index.resolve("/frameworks/langgraph") {
            Route::Detail(id) => assert_eq!(index.get(id).unwrap().title, "LangGraph"),
            other => panic!("expected Detail, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_unknown_is_not_found() {
        let index = SearchIndex::embedded().unwrap();
        assert_eq!(index.resolve("/frameworks/zzz-no-such"), Route::NotFound);
        assert_eq!(index.resolve("/blog/post"), Route::NotFound);
    }

    #[test]
    fn test_ids_of_kind_preserve_order() {
        let index = SearchIndex::embedded().unwrap();
        let ids = index.ids_of_kind(ItemKind::Framework);
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        assert!(ids.iter().all(|&id| index.get(id).unwrap().kind == ItemKind::Framework));
    }
}
