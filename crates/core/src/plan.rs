//! Layout plan construction.
//!
//! [`build_plan`] turns a [`PlanRequest`] into the full directive sequence
//! for a session:
//!
//! 1. `new-session` running the first command in the initial pane
//! 2. outer splits arranging one pane per group (seeded with each group's
//!    leading command)
//! 3. `select-pane` resets walking focus back to the first group
//! 4. per group, inner splits for the group's remaining commands, with an
//!    advance `select-pane` between groups
//! 5. one `set-window-option` per entry of the options JSON object
//!
//! Commands are padded with empty strings (blank shells) up to the
//! layout's pane count; extra commands are ignored.

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde_json::Value;

use crate::{
    layout::{Layout, Orientation},
    splitter::split,
    tmux::Directive,
};

/// Everything needed to build one layout plan.
///
/// This is the argument surface of the CLI as an explicit struct, so the
/// driver takes no ambient state.
#[derive(Debug, Clone, Default)]
pub struct PlanRequest {
    /// Tmux session name
    pub session: String,
    /// JSON object of window options; `None` or an empty string means none
    pub options_json: Option<String>,
    /// Layout descriptor, e.g. `"32"` or `"22ltr"`
    pub layout: String,
    /// Explicit orientation; overrides any descriptor suffix
    pub orientation: Option<Orientation>,
    /// One shell command per pane, in display order
    pub commands: Vec<String>,
}

/// Build the directive sequence for a request.
///
/// Errors on an invalid layout descriptor or malformed options JSON; the
/// JSON failure stays downcastable to [`serde_json::Error`] so callers can
/// report it separately.
pub fn build_plan(request: &PlanRequest) -> Result<Vec<Directive>> {
    let layout = Layout::parse(&request.layout)?;
    let orientation = request
        .orientation
        .or(layout.orientation)
        .unwrap_or(Orientation::TopToBottom);
    let options = parse_window_options(request.options_json.as_deref())?;

    let mut commands = request.commands.clone();
    commands.resize(layout.total_panes(), String::new());

    let mut plan = vec![Directive::NewSession {
        session: request.session.clone(),
        command: commands[0].clone(),
    }];

    // Each group's leading command seeds the outer pane for that group
    let mut leaders = Vec::with_capacity(layout.groups.len());
    let mut offset = 0;
    for &size in &layout.groups {
        leaders.push(commands[offset].clone());
        offset += size;
    }
    plan.extend(split(&leaders, orientation.outer()));

    // Walk focus back to the first group before filling groups in
    for _ in 1..layout.groups.len() {
        plan.push(Directive::SelectPane {
            compass: orientation.reset(),
        });
    }

    let mut offset = 0;
    for (index, &size) in layout.groups.iter().enumerate() {
        plan.extend(split(&commands[offset..offset + size], orientation.inner()));
        offset += size;
        if index + 1 < layout.groups.len() {
            plan.push(Directive::SelectPane {
                compass: orientation.advance(),
            });
        }
    }

    for (option, value) in &options {
        plan.push(Directive::SetWindowOption {
            option: option.clone(),
            value: option_value_text(value),
        });
    }

    Ok(plan)
}

/// Parse the window-options JSON object, preserving key order
fn parse_window_options(json: Option<&str>) -> Result<IndexMap<String, Value>> {
    match json {
        None | Some("") => Ok(IndexMap::new()),
        Some(text) => {
            serde_json::from_str(text).context("failed to parse window options JSON")
        }
    }
}

/// Option values render bare for strings, JSON-form otherwise
fn option_value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
