//! Tessel CLI - tmux layout command generator.
//!
//! Tessel prints a single tmux command line that creates a session, lays
//! out a grid of panes per a digit layout descriptor, and runs one shell
//! command in each pane. The line is suitable for direct execution or for
//! embedding in a shell alias:
//!
//! ```text
//! $ tessel dev 22 vim cargo htop "tail -f app.log"
//! tmux new-session -s dev "vim" \; split-window -v "htop" \; ...
//! ```
//!
//! Tessel never talks to a tmux server itself; all planning lives in
//! `tessel-core` and the CLI is glue from arguments to one stdout line.
//!
//! # Exit codes
//!
//! - 0: plan rendered to stdout
//! - 1: malformed options JSON (labeled diagnostic on stderr) or invalid
//!   layout/orientation

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use colored::Colorize;
use tessel_core::{Orientation, PlanRequest, build_plan, render};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let orientation = cli
        .orientation
        .as_deref()
        .map(str::parse::<Orientation>)
        .transpose()?;

    let request = PlanRequest {
        session: cli.session,
        options_json: cli.options,
        layout: cli.layout,
        orientation,
        commands: cli.commands,
    };

    let plan = match build_plan(&request) {
        Ok(plan) => plan,
        Err(err) => {
            // Bad options JSON gets its own labeled one-liner; layout and
            // orientation errors propagate as fatal diagnostics
            if let Some(json_err) = err.downcast_ref::<serde_json::Error>() {
                eprintln!("{} invalid options JSON: {}", "✘".red(), json_err);
                std::process::exit(1);
            }
            return Err(err);
        }
    };

    println!("{}", render(&plan));

    Ok(())
}
