//! Tool descriptions shown in the command palette
//!
//! Descriptions belong to the tool modules rather than the catalog; each
//! module contributes a table keyed by tool id.

use std::collections::HashMap;

/// Supplies a one-line description for a tool id.
pub trait DescriptionSource {
    /// Description for `tool_id`, or `None` when the tool has none.
    fn describe(&self, tool_id: &str) -> Option<&str>;
}

/// Immutable tool id -> description map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Descriptions {
    by_id: HashMap<String, String>,
}

impl Descriptions {
    /// Create an empty description set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge several tables; the first table to mention an id wins.
    pub fn from_tables(tables: &[&[(&str, &str)]]) -> Self {
        let mut by_id = HashMap::new();
        for table in tables {
            for (id, text) in table.iter() {
                by_id
                    .entry((*id).to_string())
                    .or_insert_with(|| (*text).to_string());
            }
        }
        Self { by_id }
    }

    /// Descriptions for every built-in tool.
    pub fn builtin() -> Self {
        Self::from_tables(&[
            STRING_TOOL_DESCRIPTIONS,
            JSON_TOOL_DESCRIPTIONS,
            LOREM_TOOL_DESCRIPTIONS,
        ])
    }

    /// Number of described tools.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Check if no tool is described.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl DescriptionSource for Descriptions {
    fn describe(&self, tool_id: &str) -> Option<&str> {
        self.by_id.get(tool_id).map(String::as_str)
    }
}

impl DescriptionSource for HashMap<String, String> {
    fn describe(&self, tool_id: &str) -> Option<&str> {
        self.get(tool_id).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Descriptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut by_id = HashMap::new();
        for (id, text) in iter {
            by_id.entry(id.into()).or_insert_with(|| text.into());
        }
        Self { by_id }
    }
}

pub const STRING_TOOL_DESCRIPTIONS: &[(&str, &str)] = &[
    (
        "url-encode",
        "Encodes text for safe use in URL query strings (spaces become +, special characters percent-encoded).",
    ),
    ("url-decode", "Decodes URL-encoded text back to plain text."),
    (
        "url-parse-params",
        "Parses query parameters from a full URL or raw query string and returns them as JSON.",
    ),
    (
        "url-param-creator",
        "Builds a URL from a base URL (first line) and key=value params (one per line).",
    ),
    ("base64-encode", "Encodes text to Base64."),
    ("base64-decode", "Decodes Base64 back to plain text."),
    ("trim", "Removes leading and trailing whitespace."),
    ("upper-case", "Converts all characters to uppercase."),
    ("lower-case", "Converts all characters to lowercase."),
    (
        "capital-case",
        "Converts to title case (first letter of each word uppercase).",
    ),
    (
        "snake-case",
        "Converts words to snake_case (lowercase with underscores).",
    ),
    (
        "kebab-case",
        "Converts words to kebab-case (lowercase with hyphens).",
    ),
    (
        "camel-case",
        "Converts words to camelCase (first word lowercase, rest capitalized).",
    ),
    (
        "pascal-case",
        "Converts words to PascalCase (each word capitalized).",
    ),
    (
        "sentence-case",
        "Converts to sentence case (first character uppercase, rest lowercase).",
    ),
];

pub const JSON_TOOL_DESCRIPTIONS: &[(&str, &str)] = &[
    ("format", "Pretty-print JSON with 2-space indentation."),
    ("minify", "Remove unnecessary whitespace from JSON."),
    ("validate", "Check whether the input is valid JSON."),
    (
        "path",
        "Extract a value at a dot-separated path (e.g. \"a.b\" or \"items.0.name\").",
    ),
    (
        "diff",
        "Compare two JSON values and show structural differences.",
    ),
];

pub const LOREM_TOOL_DESCRIPTIONS: &[(&str, &str)] = &[
    (
        "generator",
        "Generate placeholder text by words, sentences, or paragraphs.",
    ),
    (
        "characters",
        "Generate a string of exactly N characters (optionally whole words only).",
    ),
    (
        "bytes",
        "Generate a string of exactly N bytes (optionally whole words only).",
    ),
    ("title", "Generate one short title phrase of N words."),
    ("slug", "Generate a URL-friendly slug of N hyphenated words."),
    (
        "camel-case-name",
        "Generate a camelCase variable name of N words.",
    ),
    ("list", "Generate a bullet or numbered list of N lorem items."),
    (
        "headings",
        "Generate N heading lines (plain or markdown style).",
    ),
    ("html", "Generate lorem wrapped in HTML (paragraphs or list)."),
    (
        "markdown",
        "Generate lorem in Markdown (paragraphs, list, or headings).",
    ),
    ("json", "Generate a JSON object with lorem values for API mocking."),
];
