//! Category and text filtering over a decrypted working set.

use super::entry::Entry;

/// Category value that matches every entry.
pub const ALL_CATEGORIES: &str = "all";

/// Select the entries matching both filters, preserving order.
///
/// - `category`: exact category name, or `None`/`"all"` for any.
/// - `search`: case-insensitive substring of `website` or `username`;
///   `None` or empty matches everything.
pub fn filter<'a>(
    entries: &'a [Entry],
    category: Option<&str>,
    search: Option<&str>,
) -> Vec<&'a Entry> {
    let category = category.filter(|c| *c != ALL_CATEGORIES);
    let needle = search.map(str::to_lowercase).filter(|s| !s.is_empty());

    entries
        .iter()
        .filter(|e| category.map_or(true, |c| e.category.as_str() == c))
        .filter(|e| {
            needle.as_deref().map_or(true, |n| {
                e.website.to_lowercase().contains(n) || e.username.to_lowercase().contains(n)
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::vault::entry::Category;

    fn entry(id: &str, website: &str, username: &str, category: Category) -> Entry {
        let now = Utc::now();
        Entry {
            id: id.into(),
            website: website.into(),
            url: None,
            username: username.into(),
            password: "pw".into(),
            category,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn fixtures() -> Vec<Entry> {
        vec![
            entry("1", "GitHub", "octocat", Category::Work),
            entry("2", "BankOfX", "alice", Category::Banking),
        ]
    }

    #[test]
    fn category_filter_is_exact() {
        let entries = fixtures();
        let hits = filter(&entries, Some("work"), Some(""));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].website, "GitHub");

        assert!(filter(&entries, Some("Work"), None).is_empty());
    }

    #[test]
    fn all_with_search_matches_website_case_insensitively() {
        let entries = fixtures();
        let hits = filter(&entries, Some("all"), Some("bank"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].website, "BankOfX");
    }

    #[test]
    fn search_matches_username() {
        let entries = fixtures();
        let hits = filter(&entries, None, Some("OCTO"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");
    }

    #[test]
    fn filters_combine_with_and() {
        let entries = fixtures();
        assert!(filter(&entries, Some("banking"), Some("github")).is_empty());
    }

    #[test]
    fn no_filters_return_everything_in_order() {
        let entries = fixtures();
        let ids: Vec<&str> = filter(&entries, None, None)
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, ["1", "2"]);
    }
}
