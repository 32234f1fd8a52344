//! Tmux directive types and rendering.
//!
//! A layout plan is an ordered list of [`Directive`] values. Each directive
//! corresponds to one tmux sub-command; [`render`] joins their textual forms
//! with tmux's command-chaining separator into a single shell-ready line.
//! Keeping the directives as a tagged enum keeps the splitting algorithm
//! free of string formatting.

use std::{fmt, str::FromStr};

use anyhow::bail;

/// Separator tmux uses to chain sub-commands on one line: space, escaped
/// semicolon, space. Callers paste the rendered line straight into a shell.
pub const COMMAND_SEPARATOR: &str = " \\; ";

// =============================================================================
// Direction
// =============================================================================

/// Axis along which a split divides a pane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Side-by-side panes (`split-window -h`)
    Horizontal,
    /// Stacked panes (`split-window -v`)
    Vertical,
}

impl Direction {
    /// The tmux flag letter for this direction
    pub fn flag(self) -> char {
        match self {
            Direction::Horizontal => 'h',
            Direction::Vertical => 'v',
        }
    }

    /// Compass step that reaches the pane created by a split along this axis
    pub fn advance(self) -> Compass {
        match self {
            Direction::Horizontal => Compass::Right,
            Direction::Vertical => Compass::Down,
        }
    }
}

impl FromStr for Direction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "h" | "horizontal" => Ok(Direction::Horizontal),
            "v" | "vertical" => Ok(Direction::Vertical),
            other => bail!("invalid split direction: {}", other),
        }
    }
}

// =============================================================================
// Compass
// =============================================================================

/// Navigation direction for moving focus between panes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compass {
    Up,
    Down,
    Left,
    Right,
}

impl Compass {
    /// The tmux flag letter for this compass direction
    pub fn letter(self) -> char {
        match self {
            Compass::Up => 'U',
            Compass::Down => 'D',
            Compass::Left => 'L',
            Compass::Right => 'R',
        }
    }
}

// =============================================================================
// Directive
// =============================================================================

/// One tmux sub-command in a layout plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Start the session; the first command runs in the initial pane
    NewSession { session: String, command: String },
    /// Split the active pane and run a command in the new half
    SplitWindow {
        direction: Direction,
        /// Size of the new pane, in percent of the parent; `None` for 50/50
        percentage: Option<u32>,
        /// Create the pane without moving focus to it (`-d`)
        deferred: bool,
        command: String,
    },
    /// Move focus to the neighboring pane in a compass direction
    SelectPane { compass: Compass },
    /// Set a tmux window option on the session's window
    SetWindowOption { option: String, value: String },
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Directive::NewSession { session, command } => {
                write!(f, "tmux new-session -s {} \"{}\"", session, command)
            }
            Directive::SplitWindow {
                direction,
                percentage,
                deferred,
                command,
            } => {
                write!(f, "split-window -{}", direction.flag())?;
                if let Some(pct) = percentage {
                    write!(f, " -p{}", pct)?;
                }
                if *deferred {
                    write!(f, " -d")?;
                }
                write!(f, " \"{}\"", command)
            }
            Directive::SelectPane { compass } => {
                write!(f, "select-pane -{}", compass.letter())
            }
            Directive::SetWindowOption { option, value } => {
                write!(f, "set-window-option {} {}", option, value)
            }
        }
    }
}

/// Render a plan as a single tmux command line
pub fn render(plan: &[Directive]) -> String {
    plan.iter()
        .map(|directive| directive.to_string())
        .collect::<Vec<_>>()
        .join(COMMAND_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_text() {
        let directive = Directive::NewSession {
            session: "dev".to_string(),
            command: "vim".to_string(),
        };
        assert_eq!(directive.to_string(), "tmux new-session -s dev \"vim\"");
    }

    #[test]
    fn test_plain_split_text() {
        let directive = Directive::SplitWindow {
            direction: Direction::Vertical,
            percentage: None,
            deferred: false,
            command: "htop".to_string(),
        };
        assert_eq!(directive.to_string(), "split-window -v \"htop\"");
    }

    #[test]
    fn test_percentage_split_text() {
        let directive = Directive::SplitWindow {
            direction: Direction::Horizontal,
            percentage: Some(67),
            deferred: false,
            command: "".to_string(),
        };
        assert_eq!(directive.to_string(), "split-window -h -p67 \"\"");
    }

    #[test]
    fn test_deferred_split_text() {
        let directive = Directive::SplitWindow {
            direction: Direction::Vertical,
            percentage: None,
            deferred: true,
            command: "tail -f log".to_string(),
        };
        assert_eq!(directive.to_string(), "split-window -v -d \"tail -f log\"");
    }

    #[test]
    fn test_select_pane_text() {
        let directive = Directive::SelectPane {
            compass: Compass::Up,
        };
        assert_eq!(directive.to_string(), "select-pane -U");
    }

    #[test]
    fn test_set_window_option_text() {
        let directive = Directive::SetWindowOption {
            option: "mouse".to_string(),
            value: "on".to_string(),
        };
        assert_eq!(directive.to_string(), "set-window-option mouse on");
    }

    #[test]
    fn test_render_joins_with_escaped_semicolon() {
        let plan = vec![
            Directive::NewSession {
                session: "s".to_string(),
                command: "a".to_string(),
            },
            Directive::SelectPane {
                compass: Compass::Down,
            },
        ];
        assert_eq!(
            render(&plan),
            "tmux new-session -s s \"a\" \\; select-pane -D"
        );
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!("h".parse::<Direction>().unwrap(), Direction::Horizontal);
        assert_eq!(
            "vertical".parse::<Direction>().unwrap(),
            Direction::Vertical
        );
        assert!("d".parse::<Direction>().is_err());
    }
}
