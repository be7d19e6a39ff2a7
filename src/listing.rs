//! List helpers shared by the console views: client-local filtering,
//! fixed-size pagination, and id -> display-label resolution.
//!
//! Every list screen holds the full fetched collection in memory and
//! derives its visible rows from it; nothing here mutates the source
//! list.

use std::collections::HashMap;

/// Sentinel label for a foreign key whose parent is missing from the
/// locally cached sibling list (stale id, deleted parent, fetch race).
pub const UNKNOWN: &str = "Unknown";

/// Case-insensitive substring filter over a derived display key.
pub fn filter_by<'a, T, K>(items: &'a [T], query: &str, key: K) -> Vec<&'a T>
where
    K: Fn(&T) -> String,
{
    let query = query.to_lowercase();
    items
        .iter()
        .filter(|item| key(item).to_lowercase().contains(&query))
        .collect()
}

/// 1-based page slice. An out-of-range page yields an empty slice.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1) * page_size;
    if start >= items.len() {
        return &[];
    }
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

/// Id -> display label map, built once per fetched list instead of a
/// linear scan per row.
pub struct DisplayIndex {
    labels: HashMap<String, String>,
}

impl DisplayIndex {
    pub fn new<T, I, L>(items: &[T], id: I, label: L) -> Self
    where
        I: Fn(&T) -> &str,
        L: Fn(&T) -> String,
    {
        let labels = items
            .iter()
            .map(|item| (id(item).to_string(), label(item)))
            .collect();
        Self { labels }
    }

    /// Missing ids resolve to the `UNKNOWN` sentinel, never an error.
    pub fn resolve(&self, id: &str) -> &str {
        self.labels.get(id).map(String::as_str).unwrap_or(UNKNOWN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        id: &'static str,
        nom: &'static str,
    }

    const ROWS: [Row; 4] = [
        Row {
            id: "a",
            nom: "Essilor",
        },
        Row {
            id: "b",
            nom: "Zeiss Vision",
        },
        Row {
            id: "c",
            nom: "Hoya",
        },
        Row {
            id: "d",
            nom: "essilor maroc",
        },
    ];

    #[test]
    fn filter_is_case_insensitive_substring() {
        let hits = filter_by(&ROWS, "ESSI", |r| r.nom.to_string());
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id, "a");
        assert_eq!(hits[1].id, "d");
    }

    #[test]
    fn empty_query_matches_everything() {
        assert_eq!(filter_by(&ROWS, "", |r| r.nom.to_string()).len(), 4);
    }

    #[test]
    fn filter_does_not_mutate_source() {
        let _ = filter_by(&ROWS, "zeiss", |r| r.nom.to_string());
        assert_eq!(ROWS.len(), 4);
        assert_eq!(ROWS[1].nom, "Zeiss Vision");
    }

    #[test]
    fn paginate_slices_by_page() {
        let items: Vec<i32> = (1..=25).collect();
        assert_eq!(paginate(&items, 1, 10), (1..=10).collect::<Vec<_>>());
        assert_eq!(paginate(&items, 2, 10), (11..=20).collect::<Vec<_>>());
        assert_eq!(paginate(&items, 3, 10), (21..=25).collect::<Vec<_>>());
    }

    #[test]
    fn out_of_range_page_is_empty_not_an_error() {
        let items: Vec<i32> = (1..=5).collect();
        assert!(paginate(&items, 4, 10).is_empty());
        assert!(paginate(&items, 0, 10).is_empty());
    }

    #[test]
    fn display_index_resolves_known_and_unknown_ids() {
        let index = DisplayIndex::new(&ROWS, |r| r.id, |r| r.nom.to_string());
        assert_eq!(index.resolve("b"), "Zeiss Vision");
        assert_eq!(index.resolve("missing"), UNKNOWN);
    }
}
