//! Built-in catalog - the compiled-in dashboard layout
//!
//! Every tool the dashboard ships with is declared here, in sidebar order.
//! Descriptions live with the tool modules (see [`crate::descriptions`]).

use super::{ToolCategory, ToolItem};

/// Number of built-in tools.
pub const BUILTIN_ITEM_COUNT: usize = 31;

fn tool(category: &str, id: &str, label: &str) -> ToolItem {
    ToolItem::new(id, label, format!("/tools/{}/{}", category, id))
}

fn string_tools() -> ToolCategory {
    let s = |id, label| tool("string", id, label);
    ToolCategory::new("string", "Strings")
        // URL (4 tools)
        .with_item(s("url-encode", "URL encode").in_group("URL"))
        .with_item(s("url-decode", "URL decode").in_group("URL"))
        .with_item(s("url-parse-params", "URL - Parser for params").in_group("URL"))
        .with_item(s("url-param-creator", "URL - param creator").in_group("URL"))
        // Base64 (2 tools)
        .with_item(s("base64-encode", "Base64 encode").in_group("Base64"))
        .with_item(s("base64-decode", "Base64 decode").in_group("Base64"))
        .with_item(s("trim", "Trim").in_group("Trim"))
        // Case (8 tools)
        .with_item(s("upper-case", "Upper Case").in_group("Case"))
        .with_item(s("lower-case", "Lower Case").in_group("Case"))
        .with_item(s("capital-case", "Capital Case").in_group("Case"))
        .with_item(s("snake-case", "Snake Case").in_group("Case"))
        .with_item(s("kebab-case", "Kebab Case").in_group("Case"))
        .with_item(s("camel-case", "Camel Case").in_group("Case"))
        .with_item(s("pascal-case", "Pascal Case").in_group("Case"))
        .with_item(s("sentence-case", "Sentence Case").in_group("Case"))
}

fn json_tools() -> ToolCategory {
    let j = |id, label| tool("json", id, label);
    ToolCategory::new("json", "JSON")
        .with_item(j("format", "Format"))
        .with_item(j("minify", "Minify"))
        .with_item(j("validate", "Validate"))
        .with_item(j("path", "Path query"))
        .with_item(j("diff", "Diff"))
}

fn lorem_tools() -> ToolCategory {
    let l = |id, label| tool("lorem", id, label);
    ToolCategory::new("lorem", "Lorem Ipsum")
        .with_item(l("generator", "Generator").in_group("Text"))
        .with_item(l("characters", "Characters").in_group("Text"))
        .with_item(l("bytes", "Bytes").in_group("Text"))
        .with_item(l("title", "Title").in_group("Text"))
        .with_item(l("slug", "Slug").in_group("Identifiers"))
        .with_item(l("camel-case-name", "camelCase name").in_group("Identifiers"))
        .with_item(l("list", "List").in_group("Markup"))
        .with_item(l("headings", "Headings").in_group("Markup"))
        .with_item(l("html", "HTML").in_group("Markup"))
        .with_item(l("markdown", "Markdown").in_group("Markup"))
        .with_item(l("json", "JSON").in_group("Markup"))
}

/// Returns the built-in catalog in sidebar order.
pub fn builtin_categories() -> Vec<ToolCategory> {
    vec![
        string_tools(),
        json_tools(),
        lorem_tools(),
        ToolCategory::new("other", "Other"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_count() {
        let total: usize = builtin_categories().iter().map(|c| c.items.len()).sum();
        assert_eq!(total, BUILTIN_ITEM_COUNT);
    }

    #[test]
    fn test_builtin_ids_globally_unique() {
        let mut seen = HashSet::new();
        for category in builtin_categories() {
            for item in category.items {
                assert!(seen.insert(item.id.clone()), "duplicate id {}", item.id);
            }
        }
    }

    #[test]
    fn test_paths_follow_category() {
        for category in builtin_categories() {
            for item in &category.items {
                assert_eq!(item.path, format!("/tools/{}/{}", category.id, item.id));
            }
        }
    }

    #[test]
    fn test_other_is_empty_leaf() {
        let categories = builtin_categories();
        let other = categories.last().unwrap();
        assert_eq!(other.id, "other");
        assert!(!other.has_items());
    }
}
