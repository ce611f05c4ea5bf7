//! Session command - replay navigation steps

use colored::Colorize;
use leatherman_nav::breadcrumb::render_trail;
use leatherman_nav::{NavigationSession, NodeId};
use std::str::FromStr;

use super::tree::render_view;
use crate::context::AppContext;
use crate::error::{CliError, Result};

/// One scripted interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Navigate to a route
    Go(String),
    /// Flip a sidebar node
    Toggle(NodeId),
    /// Select a tool in the palette by id
    Pick(String),
}

impl FromStr for Step {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        let (verb, arg) = s
            .split_once(':')
            .ok_or_else(|| CliError::user(format!("Invalid step '{}': expected <verb>:<arg>", s)))?;
        if arg.is_empty() {
            return Err(CliError::user(format!("Invalid step '{}': missing argument", s)));
        }
        match verb {
            "go" => Ok(Self::Go(arg.to_string())),
            "toggle" => Ok(Self::Toggle(NodeId::from(arg))),
            "pick" => Ok(Self::Pick(arg.to_string())),
            other => Err(CliError::user(format!(
                "Unknown step '{}'. Valid: go, toggle, pick",
                other
            ))),
        }
    }
}

/// Apply `step` to `session`, returning a one-line log of what happened.
pub fn apply(session: &mut NavigationSession, step: &Step) -> String {
    match step {
        Step::Go(path) => {
            session.navigate(path);
            let crumbs = render_trail(&session.breadcrumb_trail());
            format!("go {} -> {} [{}]", path, session.current_path(), crumbs)
        }
        Step::Toggle(node) => {
            session.toggle(node);
            let state = if session.state().contains(node) {
                "expanded"
            } else {
                "collapsed"
            };
            format!("toggle {} -> {}", node, state)
        }
        Step::Pick(id) => {
            let mut palette = session.palette();
            palette.open();
            if palette.select(id, session) {
                format!("pick {} -> {}", id, session.current_path())
            } else {
                format!("pick {} -> no such tool", id)
            }
        }
    }
}

/// Run the session command
pub fn run_session(ctx: &AppContext, start: &str, steps: &[String]) -> Result<()> {
    let steps = steps
        .iter()
        .map(|s| s.parse::<Step>())
        .collect::<Result<Vec<_>>>()?;

    let mut session = ctx.session(start)?;
    println!("{} {}", "start".dimmed(), session.current_path());
    for step in &steps {
        println!("{}", apply(&mut session, step));
    }
    println!();
    print!("{}", render_view(&session));
    Ok(())
}
