//! Recursive pane splitting.
//!
//! Converts an ordered command list into a balanced binary tree of
//! `split-window` directives. The first command is assumed to already be
//! running in the current pane (started by `new-session` or an enclosing
//! split), so N commands produce N-1 splits.
//!
//! # Strategy
//!
//! - Even counts halve the list: one deferred split creates a pane for the
//!   second half without stealing focus, the first half is built out in
//!   place, focus advances one pane along the axis, and the second half is
//!   built there. Halving keeps the panes proportionate instead of
//!   producing a cascade of ever-smaller splits.
//! - Odd counts peel one pane off the front, sized so that `1 - 1/len` of
//!   the space stays with the remaining group, then recurse on the rest
//!   until an even-sized remainder is reached.

use crate::tmux::{Direction, Directive};

/// Percentage of the parent pane left to the remaining group when peeling
/// one pane off a list of `len` commands.
fn peel_percentage(len: usize) -> u32 {
    100 - (100.0 / len as f64).round() as u32
}

/// Build the split directives that arrange `commands` along `direction`.
///
/// Returns an empty plan for fewer than two commands: there is nothing to
/// split, the lone command (if any) already owns the current pane.
pub fn split(commands: &[String], direction: Direction) -> Vec<Directive> {
    match commands.len() {
        0 | 1 => Vec::new(),
        2 => vec![Directive::SplitWindow {
            direction,
            percentage: None,
            deferred: false,
            command: commands[1].clone(),
        }],
        len if len % 2 == 1 => {
            let mut plan = vec![Directive::SplitWindow {
                direction,
                percentage: Some(peel_percentage(len)),
                deferred: false,
                command: commands[1].clone(),
            }];
            plan.extend(split(&commands[1..], direction));
            plan
        }
        len => {
            let (first_half, second_half) = commands.split_at(len / 2);
            let mut plan = vec![Directive::SplitWindow {
                direction,
                percentage: None,
                deferred: true,
                command: second_half[0].clone(),
            }];
            plan.extend(split(first_half, direction));
            plan.push(Directive::SelectPane {
                compass: direction.advance(),
            });
            plan.extend(split(second_half, direction));
            plan
        }
    }
}
