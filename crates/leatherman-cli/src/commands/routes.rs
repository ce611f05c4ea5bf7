//! Routes command

use colored::Colorize;
use leatherman_nav::{RouteMatch, RouteTable};
use serde_json::json;

use crate::context::AppContext;
use crate::error::Result;

/// Run the routes command
pub fn run_routes(ctx: &AppContext, json: bool) -> Result<()> {
    let table = RouteTable::new(ctx.registry.clone(), &ctx.config.routes)?;

    if json {
        let routes: Vec<_> = table
            .paths()
            .map(|path| {
                let kind = match table.resolve(path) {
                    RouteMatch::Tool(_) => "tool",
                    RouteMatch::Special(_) => "special",
                    RouteMatch::Home | RouteMatch::Fallback => "unknown",
                };
                json!({ "path": path, "kind": kind, "default": path == table.default_route() })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&routes)?);
        return Ok(());
    }

    for category in ctx.registry.categories() {
        println!("{}:", category.label.cyan().bold());
        if !category.has_items() {
            println!("  {}", "(no tools)".dimmed());
        }
        for item in &category.items {
            let marker = if item.path == table.default_route() {
                " (default)".yellow().to_string()
            } else {
                String::new()
            };
            println!("  {:<36} {}{}", item.path.green(), item.label, marker);
        }
        println!();
    }

    println!("{}:", "Other routes".cyan().bold());
    for route in table.special_routes() {
        let sidebar = if route.show_sidebar { "" } else { " (no sidebar)" };
        println!("  {:<36} {}{}", route.path.green(), route.label, sidebar.dimmed());
    }
    println!(
        "  {:<36} {} {}",
        "/".green(),
        "Home",
        format!("(redirects to {})", table.default_route()).dimmed()
    );
    println!();
    println!(
        "{} anything else redirects to {}",
        "Fallback:".dimmed(),
        table.default_route().cyan()
    );

    Ok(())
}
