//! Sidebar tree command

use colored::Colorize;
use leatherman_nav::NavigationSession;
use leatherman_nav::breadcrumb::render_trail;

use crate::context::AppContext;
use crate::error::Result;

/// Breadcrumb line plus sidebar text for the session's current route.
pub fn render_view(session: &NavigationSession) -> String {
    let mut out = String::new();
    let crumbs = session.breadcrumb_trail();
    if !crumbs.is_empty() {
        out.push_str(&render_trail(&crumbs));
        out.push_str("\n\n");
    }
    match session.sidebar() {
        Some(view) => out.push_str(&view.render_text()),
        None => out.push_str("(sidebar hidden on this route)\n"),
    }
    out
}

/// Run the tree command
pub fn run_tree(ctx: &AppContext, path: &str, json: bool) -> Result<()> {
    let session = ctx.session(path)?;

    if json {
        let value = serde_json::json!({
            "path": session.current_path(),
            "expanded": session.state(),
            "breadcrumb": session.breadcrumb(),
            "sidebar": session.sidebar(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if session.current_path() != path {
        println!(
            "{} {} -> {}",
            "redirected:".yellow(),
            path,
            session.current_path().cyan()
        );
    }
    print!("{}", render_view(&session));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_render_view_for_tool() {
        let ctx = AppContext::load(Path::new("/nonexistent-dir"), None, None).unwrap();
        let session = ctx.session("/tools/json/validate").unwrap();
        let text = render_view(&session);

        assert!(text.starts_with("Home / JSON / Validate\n\n"));
        assert!(text.contains("▼ JSON\n"));
        assert!(text.contains("  * Validate\n"));
        assert!(text.contains("▶ Strings\n"));
    }

    #[test]
    fn test_render_view_for_settings() {
        let ctx = AppContext::load(Path::new("/nonexistent-dir"), None, None).unwrap();
        let session = ctx.session("/settings").unwrap();
        assert_eq!(
            render_view(&session),
            "Home / Settings\n\n(sidebar hidden on this route)\n"
        );
    }
}
