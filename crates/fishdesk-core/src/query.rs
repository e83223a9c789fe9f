//! Filtering and offset pagination over in-memory collections.
//!
//! A page is addressed by a continuation token holding the decimal
//! offset of its first item in the *filtered* sequence. Following the
//! tokens from the first page partitions the filtered sequence into
//! consecutive, non-overlapping pages, provided the source collection
//! keeps a stable order between calls.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_LIMIT: u32 = 30;
/// Smallest accepted page size; `0` is clamped up to this.
pub const MIN_PAGE_LIMIT: u32 = 1;
/// Largest accepted page size.
pub const MAX_PAGE_LIMIT: u32 = 1000;
/// Names containing this marker (any case) are dropped by `exclude_test`.
pub const TEST_MARKER: &str = "test";

/// Anything that can be filtered by name.
pub trait Named {
    fn name(&self) -> &str;
}

/// Parameters of a list call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    /// Requested page size. `None` means [`DEFAULT_PAGE_LIMIT`].
    pub limit: Option<u32>,
    /// Continuation token returned by the previous page.
    pub next_token: Option<String>,
    /// Case-insensitive substring the name must contain.
    pub name_cont: Option<String>,
    /// Drop entities whose name contains [`TEST_MARKER`].
    #[serde(default)]
    pub exclude_test: bool,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn after(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }

    pub fn name_contains(mut self, needle: impl Into<String>) -> Self {
        self.name_cont = Some(needle.into());
        self
    }

    pub fn excluding_test(mut self) -> Self {
        self.exclude_test = true;
        self
    }

    /// Page size after defaulting and clamping.
    pub fn effective_limit(&self) -> usize {
        let limit = match self.limit {
            None => DEFAULT_PAGE_LIMIT,
            Some(l) if l < MIN_PAGE_LIMIT => {
                warn!(requested = l, clamped = MIN_PAGE_LIMIT, "Page limit below minimum");
                MIN_PAGE_LIMIT
            }
            Some(l) if l > MAX_PAGE_LIMIT => {
                warn!(requested = l, clamped = MAX_PAGE_LIMIT, "Page limit above maximum");
                MAX_PAGE_LIMIT
            }
            Some(l) => l,
        };
        limit as usize
    }
}

/// One page of a list result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Token for the following page; `None` on the last page.
    pub next_token: Option<String>,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            next_token: None,
        }
    }

    pub fn is_last(&self) -> bool {
        self.next_token.is_none()
    }
}

/// Whether `entity` carries the test marker in its name.
pub fn is_test_entity<T: Named>(entity: &T) -> bool {
    entity.name().to_lowercase().contains(TEST_MARKER)
}

/// Apply the name filter, then the test exclusion, preserving order.
pub fn filter<T: Named>(items: impl IntoIterator<Item = T>, query: &ListQuery) -> Vec<T> {
    filter_with(items, query, |_| false)
}

/// Like [`filter`], additionally dropping anything `exclude` accepts.
pub fn filter_with<T, F>(items: impl IntoIterator<Item = T>, query: &ListQuery, exclude: F) -> Vec<T>
where
    T: Named,
    F: Fn(&T) -> bool,
{
    let needle = query
        .name_cont
        .as_deref()
        .filter(|n| !n.is_empty())
        .map(str::to_lowercase);

    items
        .into_iter()
        .filter(|item| match &needle {
            Some(n) => item.name().to_lowercase().contains(n.as_str()),
            None => true,
        })
        .filter(|item| !(query.exclude_test && is_test_entity(item)))
        .filter(|item| !exclude(item))
        .collect()
}

/// Resolve a continuation token to an offset into a sequence of `len`
/// items. Missing, malformed, negative and out-of-range tokens all
/// resolve to `0`.
pub fn parse_cursor(next_token: Option<&str>, len: usize) -> usize {
    let Some(token) = next_token else {
        return 0;
    };
    match token.trim().parse::<usize>() {
        Ok(offset) if offset < len => offset,
        Ok(offset) => {
            debug!(offset, len, "Cursor past end of result set, restarting at 0");
            0
        }
        Err(e) => {
            debug!(token, error = %e, "Malformed cursor, restarting at 0");
            0
        }
    }
}

/// Cut one page out of an already filtered sequence.
pub fn paginate<T>(filtered: Vec<T>, limit: usize, next_token: Option<&str>) -> Page<T> {
    let len = filtered.len();
    if len == 0 {
        return Page::empty();
    }

    let offset = parse_cursor(next_token, len);
    let end = offset.saturating_add(limit);
    let next_token = (end < len).then(|| end.to_string());
    let items = filtered.into_iter().skip(offset).take(limit).collect();

    Page { items, next_token }
}

/// Filter and paginate `items` according to `query`.
pub fn list<T: Named>(items: impl IntoIterator<Item = T>, query: &ListQuery) -> Page<T> {
    list_with(items, query, |_| false)
}

/// Filter with an extra exclusion predicate, then paginate.
pub fn list_with<T, F>(items: impl IntoIterator<Item = T>, query: &ListQuery, exclude: F) -> Page<T>
where
    T: Named,
    F: Fn(&T) -> bool,
{
    let filtered = filter_with(items, query, exclude);
    paginate(
        filtered,
        query.effective_limit(),
        query.next_token.as_deref(),
    )
}
