//! Query matching and ranking.
//!
//! The matcher is a pure function over the immutable index: case-insensitive
//! substring containment against title and description, no tokenization and
//! no fuzzy matching. Title matches outrank description-only matches, and
//! within each tier the index's insertion order is preserved.

use crate::index::{ItemId, SearchItem};

/// Maximum results shown in the search modal, bounding its height.
pub const RESULT_CAP: usize = 8;

/// Rank items for a query, capped at [`RESULT_CAP`].
pub fn rank(query: &str, items: &[SearchItem]) -> Vec<ItemId> {
    rank_with_cap(query, items, RESULT_CAP)
}

/// Rank items for a query with an explicit cap (0 = unlimited).
///
/// Returns ids into `items`: title matches first, then description-only
/// matches, insertion order within each tier. An empty or whitespace-only
/// query ranks to nothing.
pub fn rank_with_cap(query: &str, items: &[SearchItem], cap: usize) -> Vec<ItemId> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut title_hits = Vec::new();
    let mut desc_hits = Vec::new();

    for (id, item) in items.iter().enumerate() {
        if item.title.to_lowercase().contains(&needle) {
            title_hits.push(id);
        } else if item.description.to_lowercase().contains(&needle) {
            desc_hits.push(id);
        }
    }

    title_hits.append(&mut desc_hits);
    if cap != 0 {
        title_hits.truncate(cap);
    }
    title_hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ItemKind;

    fn item(title: &str, description: &str) -> SearchItem {
        SearchItem {
            title: title.to_string(),
            description: description.to_string(),
            href: format!("/concepts/{}", title.to_lowercase().replace(' ', "-")),
            kind: ItemKind::Concept,
            category: None,
        }
    }

    fn fixture() -> Vec<SearchItem> {
        vec![
            item("LangGraph", "Graph-based orchestration for stateful workflows"),
            item("CrewAI", "Role-based crews with LangGraph-style delegation"),
            item("AutoGen", "Conversation-driven multi-agent framework"),
            item("ReAct", "Think-act-observe loop for single agents"),
        ]
    }

    #[test]
    fn test_empty_query_ranks_nothing() {
        let items = fixture();
        assert!(rank("", &items).is_empty());
        assert!(rank("   ", &items).is_empty());
        assert!(rank("\t\n", &items).is_empty());
    }

    #[test]
    fn test_no_match_ranks_nothing() {
        let items = fixture();
        assert!(rank("zzz-no-match", &items).is_empty());
    }

    #[test]
    fn test_case_insensitive_both_fields() {
        let items = fixture();
        let hits = rank("LaNgGrApH", &items);
        // Title match ranks above the description-only match.
        assert_eq!(hits, vec![0, 1]);
    }

    #[test]
    fn test_every_hit_contains_query() {
        let items = fixture();
        for id in rank("agent", &items) {
            let it = &items[id];
            let q = "agent";
            assert!(
                it.title.to_lowercase().contains(q) || it.description.to_lowercase().contains(q)
            );
        }
    }

    #[test]
    fn test_tier_order_is_stable() {
        let items = vec![
            item("alpha loop", "nothing"),
            item("beta", "a loop in the description"),
            item("gamma loop", "nothing"),
            item("delta", "another loop here"),
        ];
        assert_eq!(rank("loop", &items), vec![0, 2, 1, 3]);
    }

    #[test]
    fn test_cap_is_enforced() {
        let items: Vec<SearchItem> = (0..20)
            .map(|i| item(&format!("agent {}", i), "description"))
            .collect();
        assert_eq!(rank("agent", &items).len(), RESULT_CAP);
        assert_eq!(rank_with_cap("agent", &items, 3).len(), 3);
    }

    #[test]
    fn test_zero_cap_is_unlimited() {
        let items: Vec<SearchItem> = (0..20)
            .map(|i| item(&format!("agent {}", i), "description"))
            .collect();
        assert_eq!(rank_with_cap("agent", &items, 0).len(), 20);
    }

    #[test]
    fn test_query_with_surrounding_whitespace() {
        let items = fixture();
        assert_eq!(rank("  react  ", &items), vec![3]);
    }
}
