//! Integration tests exercising the embedded catalog through the library
//! API, end to end: load, index, search, resolve.

use agx::catalog::ItemKind;
use agx::index::{Route, SearchIndex};
use agx::search::RESULT_CAP;
use std::collections::HashSet;

fn index() -> SearchIndex {
    SearchIndex::embedded().expect("embedded catalog must build")
}

#[test]
fn embedded_index_upholds_invariants() {
    let index = index();
    let mut hrefs = HashSet::new();
    for item in index.items() {
        assert!(!item.title.trim().is_empty(), "empty title at {}", item.href);
        assert!(hrefs.insert(item.href.clone()), "duplicate href {}", item.href);
        assert!(item.href.starts_with('/'), "relative href {}", item.href);
    }
}

#[test]
fn every_item_resolves_to_its_own_detail_page() {
    let index = index();
    for (id, item) in index.items().iter().enumerate() {
        assert_eq!(index.resolve(&item.href), Route::Detail(id));
    }
}

#[test]
fn mixed_case_query_ranks_title_hit_first() {
    let index = index();
    let results = index.search("lAnGgRaPh");
    assert!(results.len() >= 2, "expected title and description hits");
    assert_eq!(results[0].title, "LangGraph");
    for item in &results[1..] {
        assert!(
            item.description.to_lowercase().contains("langgraph"),
            "{} should mention langgraph",
            item.title
        );
    }
}

#[test]
fn broad_query_is_capped() {
    let index = index();
    let capped = index.search("agent");
    assert_eq!(capped.len(), RESULT_CAP);
    let all = index.search_with_limit("agent", 0);
    assert!(all.len() > RESULT_CAP);
}

#[test]
fn unmatched_query_returns_empty() {
    let index = index();
    assert!(index.search("zzz-no-match").is_empty());
    assert!(index.search("").is_empty());
}

#[test]
fn results_respect_insertion_order_within_tiers() {
    let index = index();
    let results = index.search_with_limit("observability", 0);
    // All hits of the same tier must appear in catalog order; map each
    // result back to its index position and check monotonicity per tier.
    let positions: Vec<usize> = results
        .iter()
        .map(|r| {
            index
                .items()
                .iter()
                .position(|item| item.href == r.href)
                .unwrap()
        })
        .collect();
    let title_tier: Vec<usize> = results
        .iter()
        .zip(&positions)
        .filter(|(r, _)| r.title.to_lowercase().contains("observability"))
        .map(|(_, &p)| p)
        .collect();
    let desc_tier: Vec<usize> = results
        .iter()
        .zip(&positions)
        .filter(|(r, _)| !r.title.to_lowercase().contains("observability"))
        .map(|(_, &p)| p)
        .collect();
    assert!(title_tier.windows(2).all(|w| w[0] < w[1]));
    assert!(desc_tier.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn section_pages_resolve_for_every_kind() {
    let index = index();
    for kind in ItemKind::ALL {
        let href = format!("/{}", kind.section_slug());
        assert_eq!(index.resolve(&href), Route::Section(kind));
    }
}

#[test]
fn unknown_paths_fall_back_to_not_found() {
    let index = index();
    for href in ["/blog", "/frameworks/langgraph/extra", "/concepts/zzz"] {
        assert_eq!(index.resolve(href), Route::NotFound, "href {}", href);
    }
}
