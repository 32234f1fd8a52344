//! Tmux directive model for tessel layout plans.
//!
//! Unlike a launcher that shells out to tmux one sub-command at a time,
//! tessel only ever *describes* a session: a plan is a list of
//! [`Directive`] values and [`render`] turns it into the single command
//! line tmux accepts with `\;`-chained sub-commands.

mod directive;

pub use directive::*;
