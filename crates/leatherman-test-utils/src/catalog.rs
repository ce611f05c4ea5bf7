//! The reference catalog: "Strings" with URL and Case sub-groups, plus a
//! single-tool "JSON" category.

use leatherman_nav::{Descriptions, Registry, ToolCategory, ToolItem};
use std::sync::Arc;

/// The reference catalog in on-disk TOML form.
pub const SCENARIO_CATALOG_TOML: &str = r#"
[[categories]]
id = "string"
label = "Strings"

[[categories.items]]
id = "url-encode"
label = "URL encode"
path = "/tools/string/url-encode"
sub_group = "URL"

[[categories.items]]
id = "url-decode"
label = "URL decode"
path = "/tools/string/url-decode"
sub_group = "URL"

[[categories.items]]
id = "upper-case"
label = "Upper Case"
path = "/tools/string/upper-case"
sub_group = "Case"

[[categories.items]]
id = "lower-case"
label = "Lower Case"
path = "/tools/string/lower-case"
sub_group = "Case"

[[categories]]
id = "json"
label = "JSON"

[[categories.items]]
id = "format"
label = "Format"
path = "/tools/json/format"
"#;

/// The reference catalog as a shared registry.
pub fn scenario_registry() -> Arc<Registry> {
    let strings = ToolCategory::new("string", "Strings")
        .with_item(ToolItem::new("url-encode", "URL encode", "/tools/string/url-encode").in_group("URL"))
        .with_item(ToolItem::new("url-decode", "URL decode", "/tools/string/url-decode").in_group("URL"))
        .with_item(ToolItem::new("upper-case", "Upper Case", "/tools/string/upper-case").in_group("Case"))
        .with_item(ToolItem::new("lower-case", "Lower Case", "/tools/string/lower-case").in_group("Case"));
    let json = ToolCategory::new("json", "JSON")
        .with_item(ToolItem::new("format", "Format", "/tools/json/format"));

    Arc::new(
        Registry::new(vec![strings, json])
            .expect("scenario_registry: reference catalog must be valid"),
    )
}

/// Descriptions for the reference catalog; `lower-case` deliberately has none.
pub fn scenario_descriptions() -> Descriptions {
    Descriptions::from_tables(&[&[
        ("url-encode", "Encodes text for safe use in URL query strings."),
        ("url-decode", "Decodes URL-encoded text back to plain text."),
        ("upper-case", "Converts all characters to uppercase."),
        ("format", "Pretty-print JSON with 2-space indentation."),
    ]])
}
