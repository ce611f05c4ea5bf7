//! Quick-open command palette

use super::SearchEntry;
use std::sync::Arc;
use tracing::debug;

/// Receives navigation requests.
pub trait Navigator {
    fn navigate(&mut self, path: &str);
}

/// Case-insensitive match of `query` against an entry.
///
/// Every whitespace-separated token of the query must occur somewhere in
/// the entry's haystack. An empty query matches everything.
pub fn matches_query(entry: &SearchEntry, query: &str) -> bool {
    let haystack = entry.haystack().to_lowercase();
    query
        .split_whitespace()
        .all(|token| haystack.contains(&token.to_lowercase()))
}

/// Palette state: open flag, current query and the entries to search.
#[derive(Debug, Clone)]
pub struct CommandPalette {
    entries: Arc<[SearchEntry]>,
    query: String,
    open: bool,
}

impl CommandPalette {
    /// Create a closed palette over `entries`.
    pub fn new(entries: Arc<[SearchEntry]>) -> Self {
        Self {
            entries,
            query: String::new(),
            open: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close the palette and clear the query.
    pub fn close(&mut self) {
        self.open = false;
        self.query.clear();
    }

    /// The Ctrl/Cmd+K shortcut.
    pub fn toggle_open(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Swap in freshly built entries (e.g. after the index was rebuilt).
    pub fn set_entries(&mut self, entries: Arc<[SearchEntry]>) {
        self.entries = entries;
    }

    /// Entries matching the current query, in index order.
    pub fn filter(&self) -> Vec<&SearchEntry> {
        self.entries
            .iter()
            .filter(|entry| matches_query(entry, &self.query))
            .collect()
    }

    /// Select the entry with `id`: issue one navigation to its path and close.
    ///
    /// Returns `false` without navigating when no entry has that id.
    pub fn select(&mut self, id: &str, navigator: &mut dyn Navigator) -> bool {
        let Some(entry) = self.entries.iter().find(|e| e.id == id) else {
            debug!(id, "Palette selection matched no entry");
            return false;
        };
        let path = entry.path.clone();
        debug!(id, path = %path, "Palette selection");
        navigator.navigate(&path);
        self.close();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl Navigator for Recorder {
        fn navigate(&mut self, path: &str) {
            self.0.push(path.to_string());
        }
    }

    fn entry(id: &str, label: &str, category: &str, description: &str) -> SearchEntry {
        SearchEntry {
            id: id.to_string(),
            label: label.to_string(),
            description: description.to_string(),
            path: format!("/tools/{}/{}", category.to_lowercase(), id),
            category_label: category.to_string(),
        }
    }

    fn palette() -> CommandPalette {
        CommandPalette::new(
            vec![
                entry("format", "Format", "JSON", "Pretty-print JSON with 2-space indentation."),
                entry("trim", "Trim", "Strings", "Removes leading and trailing whitespace."),
                entry("upper-case", "Upper Case", "Strings", ""),
            ]
            .into(),
        )
    }

    #[test]
    fn test_empty_query_matches_all() {
        assert_eq!(palette().filter().len(), 3);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let mut palette = palette();
        palette.set_query("JSON");
        let ids: Vec<_> = palette.filter().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["format"]);

        palette.set_query("strings WHITESPACE");
        let ids: Vec<_> = palette.filter().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["trim"]);
    }

    #[test]
    fn test_select_navigates_once_and_closes() {
        let mut palette = palette();
        palette.open();
        palette.set_query("json");
        let mut nav = Recorder::default();

        assert!(palette.select("format", &mut nav));
        assert_eq!(nav.0, vec!["/tools/json/format".to_string()]);
        assert!(!palette.is_open());
        assert_eq!(palette.query(), "");
    }

    #[test]
    fn test_select_unknown_is_noop() {
        let mut palette = palette();
        palette.open();
        let mut nav = Recorder::default();

        assert!(!palette.select("nope", &mut nav));
        assert!(nav.0.is_empty());
        assert!(palette.is_open());
    }

    #[test]
    fn test_toggle_open() {
        let mut palette = palette();
        palette.toggle_open();
        assert!(palette.is_open());
        palette.set_query("x");
        palette.toggle_open();
        assert!(!palette.is_open());
        assert_eq!(palette.query(), "");
    }
}
