//! Search command - the palette's filtering, from the terminal

use colored::Colorize;
use leatherman_nav::search::matches_query;
use leatherman_nav::{SearchEntry, SearchIndex};

use crate::context::AppContext;
use crate::error::Result;

/// Entries matching `query`, in catalog order.
pub fn search(ctx: &AppContext, query: &str) -> Vec<SearchEntry> {
    let entries = SearchIndex::new().entries(&ctx.registry, &ctx.descriptions);
    entries
        .iter()
        .filter(|entry| matches_query(entry, query))
        .cloned()
        .collect()
}

/// Run the search command
pub fn run_search(ctx: &AppContext, query: &str, json: bool) -> Result<()> {
    let hits = search(ctx, query);

    if json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    if hits.is_empty() {
        println!("{}", "No tools found.".dimmed());
        return Ok(());
    }

    for entry in &hits {
        println!(
            "{:<24} {:<12} {}",
            entry.label.green(),
            entry.category_label,
            entry.path.cyan()
        );
        if !entry.description.is_empty() {
            println!("    {}", entry.description.dimmed());
        }
    }
    println!();
    println!("{} {} of {} tools", "Matched:".dimmed(), hits.len(), ctx.registry.item_count());
    Ok(())
}
