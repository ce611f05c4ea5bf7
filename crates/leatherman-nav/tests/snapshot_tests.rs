use leatherman_nav::breadcrumb::{self, render_trail, trail};
use leatherman_nav::{Config, NavigationSession, NodeId, Registry, SidebarView};
use leatherman_test_utils::{scenario_descriptions, scenario_registry};
use std::sync::Arc;

fn session(start: &str) -> NavigationSession {
    NavigationSession::new(
        scenario_registry(),
        Arc::new(scenario_descriptions()),
        &Config::default(),
        start,
    )
    .unwrap()
}

#[test]
fn snapshot_sidebar_initial_load() {
    let session = session("/tools/string/url-encode");
    let text = session.sidebar().unwrap().render_text();

    insta::assert_snapshot!(text, @r"
    ▼ Strings
      ▼ URL
        * URL encode
          URL decode
      ▶ Case
    ▶ JSON
    ");
}

#[test]
fn snapshot_sidebar_after_navigation_and_toggle() {
    let mut session = session("/tools/string/url-encode");
    session.navigate("/tools/json/format");
    session.toggle(&NodeId::sub_group("string", "Case"));

    let text = session.sidebar().unwrap().render_text();
    insta::assert_snapshot!(text, @r"
    ▼ Strings
      ▼ URL
          URL encode
          URL decode
      ▼ Case
          Upper Case
          Lower Case
    ▼ JSON
      * Format
    ");
}

#[test]
fn snapshot_builtin_sidebar_collapsed() {
    let registry = Registry::builtin();
    let view = SidebarView::project(&registry, &Default::default(), "/settings");

    insta::assert_snapshot!(view.render_text(), @r"
    ▶ Strings
    ▶ JSON
    ▶ Lorem Ipsum
    ○ Other
    ");
}

#[test]
fn snapshot_breadcrumb_trails() {
    let registry = scenario_registry();
    let routes = Config::default().routes;
    let rendered: Vec<String> = ["/", "/tools/string/lower-case", "/tools/json/format", "/settings"]
        .iter()
        .map(|path| {
            let labels = breadcrumb::resolve(&registry, &routes, path).unwrap();
            format!("{} => {}", path, render_trail(&trail(path, &labels, &routes.home_label)))
        })
        .collect();

    insta::assert_snapshot!(rendered.join("\n"), @r"
    / => Home
    /tools/string/lower-case => Home / Strings / Lower Case
    /tools/json/format => Home / JSON / Format
    /settings => Home / Settings
    ");
}
