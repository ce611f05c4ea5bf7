//! End-to-end integration test for the dashboard navigation
//!
//! Exercises the complete flow a user sees: config loading -> first render
//! -> sidebar clicks -> palette search -> route changes -> breadcrumbs.

use leatherman_nav::breadcrumb::render_trail;
use leatherman_nav::{
    CommandPalette, Config, DescriptionSource, Descriptions, NavigationSession, NodeId, Registry,
};
use leatherman_test_utils::{TestDir, scenario_descriptions, scenario_registry};
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn builtin_session(start: &str) -> NavigationSession {
    NavigationSession::new(
        Arc::new(Registry::builtin()),
        Arc::new(Descriptions::builtin()),
        &Config::default(),
        start,
    )
    .unwrap()
}

fn expanded(session: &NavigationSession) -> Vec<&str> {
    session.state().iter().map(NodeId::as_str).collect()
}

fn crumbs(session: &NavigationSession) -> String {
    render_trail(&session.breadcrumb_trail())
}

#[test]
fn test_user_journey_over_builtin_catalog() {
    // Deep link straight into a case converter
    let mut session = builtin_session("/tools/string/camel-case");
    assert_eq!(expanded(&session), vec!["string", "string--Case"]);
    assert_eq!(crumbs(&session), "Home / Strings / Camel Case");

    // User opens the Base64 group by hand, then collapses Case
    session.toggle(&NodeId::sub_group("string", "Base64"));
    session.toggle(&NodeId::sub_group("string", "Case"));
    assert_eq!(expanded(&session), vec!["string", "string--Base64"]);

    // Ctrl+K, search, pick
    let mut palette: CommandPalette = session.palette();
    palette.toggle_open();
    palette.set_query("markdown");
    let hits: Vec<_> = palette.filter().iter().map(|e| e.id.clone()).collect();
    assert_eq!(hits, vec!["headings".to_string(), "markdown".to_string()]);
    assert!(palette.select("markdown", &mut session));
    assert!(!palette.is_open());

    assert_eq!(session.current_path(), "/tools/lorem/markdown");
    assert_eq!(
        expanded(&session),
        vec!["lorem", "lorem--Markup", "string", "string--Base64"]
    );
    assert_eq!(crumbs(&session), "Home / Lorem Ipsum / Markdown");

    // Settings hides the sidebar but keeps expansion for when the user returns
    session.navigate("/settings");
    assert!(session.sidebar().is_none());
    assert_eq!(crumbs(&session), "Home / Settings");
    assert_eq!(expanded(&session).len(), 4);

    // A stale bookmark lands on the default tool
    session.navigate("/tools/string/rot13");
    assert_eq!(session.current_path(), "/tools/string/url-encode");
    assert!(session.state().contains(&NodeId::sub_group("string", "URL")));
}

#[test]
fn test_singleton_group_renders_as_link() {
    let session = builtin_session("/tools/string/trim");
    assert_eq!(expanded(&session), vec!["string"]);

    let text = session.sidebar().unwrap().render_text();
    assert!(text.contains("\n  * Trim\n"));
    assert!(!text.contains("▼ Trim"));
    assert!(!text.contains("▶ Trim"));
}

#[test]
fn test_config_and_catalog_from_disk() {
    let dir = TestDir::new();
    let config_path = dir.write(
        "leatherman.toml",
        "[routes]\ndefault = \"/tools/json/format\"\n",
    );
    let config = Config::load(&config_path).unwrap();

    let mut session = NavigationSession::new(
        scenario_registry(),
        Arc::new(scenario_descriptions()),
        &config,
        "/",
    )
    .unwrap();
    assert_eq!(session.current_path(), "/tools/json/format");
    assert_eq!(expanded(&session), vec!["json"]);

    session.navigate("/tools/string/upper-case");
    assert_eq!(expanded(&session), vec!["json", "string", "string--Case"]);
}

#[test]
fn test_descriptions_swap_rebuilds_index() {
    let mut session = builtin_session("/");
    let before = session.search_entries();
    assert!(before.iter().all(|e| !e.description.is_empty()));

    let sparse: Arc<dyn DescriptionSource> =
        Arc::new(Descriptions::from_tables(&[&[("trim", "Strip whitespace.")]]));
    session.set_descriptions(sparse);
    let after = session.search_entries();

    assert_eq!(after.len(), before.len());
    assert_eq!(session.index().builds(), 2);
    let described: Vec<_> = after
        .iter()
        .filter(|e| !e.description.is_empty())
        .map(|e| e.id.as_str())
        .collect();
    assert_eq!(described, vec!["trim"]);
}
