//! Property tests for the list/paginate query layer.

use fishdesk_core::models::tenant::Tenant;
use fishdesk_core::query::{self, ListQuery};
use proptest::prelude::*;

fn tenant(i: usize, name: String) -> Tenant {
    Tenant {
        id: format!("tenant-{i:03}"),
        name,
        address: String::new(),
        created_at: None,
        updated_at: None,
    }
}

fn named(names: &[&str]) -> Vec<Tenant> {
    names
        .iter()
        .enumerate()
        .map(|(i, n)| tenant(i, (*n).to_string()))
        .collect()
}

/// Follow tokens from the first page, returning every page.
fn walk(source: &[Tenant], base: &ListQuery) -> Vec<Vec<Tenant>> {
    let mut pages = Vec::new();
    let mut query = base.clone();
    loop {
        let page = query::list(source.to_vec(), &query);
        pages.push(page.items);
        match page.next_token {
            Some(token) => query.next_token = Some(token),
            None => break,
        }
        assert!(pages.len() <= source.len() + 1, "pagination did not terminate");
    }
    pages
}

proptest! {
    #[test]
    fn pages_partition_the_filtered_sequence(
        names in prop::collection::vec("[a-cA-C]{0,4}", 0..60),
        limit in 1u32..12,
        needle in prop::option::of("[abc]{1,2}"),
    ) {
        let source: Vec<Tenant> = names
            .into_iter()
            .enumerate()
            .map(|(i, n)| tenant(i, n))
            .collect();
        let mut base = ListQuery::new().with_limit(limit);
        base.name_cont = needle;

        let expected = query::filter(source.clone(), &base);
        let pages = walk(&source, &base);

        let n = expected.len();
        let l = limit as usize;
        let expected_pages = if n == 0 { 1 } else { n.div_ceil(l) };
        prop_assert_eq!(pages.len(), expected_pages);

        let concatenated: Vec<Tenant> = pages.into_iter().flatten().collect();
        prop_assert_eq!(concatenated, expected);
    }

    #[test]
    fn arbitrary_tokens_never_panic_or_loop(token in ".{0,12}", limit in 0u32..5) {
        let source = named(&["a", "b", "c", "d", "e"]);
        let query = ListQuery::new().with_limit(limit).after(token);
        let page = query::list(source, &query);
        prop_assert!(page.items.len() <= 5);
    }
}

#[test]
fn substring_scenario_returns_single_match() {
    let source = named(&["T1", "T2", "T3", "T4", "T5"]);
    let page = query::list(source, &ListQuery::new().name_contains("T3").with_limit(10));
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].name, "T3");
    assert!(page.next_token.is_none());
}

#[test]
fn hostile_cursors_fall_back_to_first_page() {
    let source = named(&["T1", "T2", "T3", "T4", "T5"]);
    for token in ["abc", "-5", "6", "5000"] {
        let page = query::list(source.clone(), &ListQuery::new().with_limit(2).after(token));
        assert_eq!(page.items[0].name, "T1", "token {token:?}");
        assert_eq!(page.next_token.as_deref(), Some("2"));
    }
}

#[test]
fn repeated_walks_are_identical() {
    let source = named(&["T1", "x", "T2", "test T3", "T4", "T5", "T6"]);
    let base = ListQuery::new().with_limit(2).name_contains("t").excluding_test();
    assert_eq!(walk(&source, &base), walk(&source, &base));
    let all: Vec<String> = walk(&source, &base)
        .into_iter()
        .flatten()
        .map(|t| t.name)
        .collect();
    assert_eq!(all, ["T1", "T2", "T4", "T5", "T6"]);
}
