//! Tessel Core - Core library for the tessel layout generator
//!
//! This crate provides the pure planning half of tessel:
//! - Tmux directive types and rendering
//! - The recursive balanced pane splitter
//! - Layout descriptor parsing and orientation tables
//! - Plan construction from a [`PlanRequest`]
//!
//! Nothing here touches a tmux server; the output is a directive list
//! that [`render`] turns into one shell-ready command line.

pub mod layout;
pub mod plan;
pub mod splitter;
pub mod tmux;

// Re-export commonly used types at crate root
pub use layout::{Layout, Orientation};
pub use plan::{PlanRequest, build_plan};
pub use splitter::split;
pub use tmux::{Compass, Direction, Directive, render};
