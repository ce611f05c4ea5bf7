//! Breadcrumb command

use colored::Colorize;
use leatherman_nav::breadcrumb::{self, render_trail, trail};

use crate::context::AppContext;
use crate::error::Result;

/// Run the breadcrumb command
pub fn run_breadcrumb(ctx: &AppContext, path: &str, json: bool) -> Result<()> {
    let labels = breadcrumb::resolve(&ctx.registry, &ctx.config.routes, path);

    if json {
        println!("{}", serde_json::to_string_pretty(&labels)?);
        return Ok(());
    }

    match labels {
        Some(labels) => {
            let crumbs = trail(path, &labels, &ctx.config.routes.home_label);
            println!("{}", render_trail(&crumbs));
        }
        None => println!("{}", "(no breadcrumb for this path)".dimmed()),
    }
    Ok(())
}
