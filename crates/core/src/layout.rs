//! Layout descriptor parsing and orientation tables.
//!
//! A layout descriptor is a string of digits, one per pane group, e.g.
//! `"32"` for a group of three panes next to a group of two. The
//! descriptor may carry a trailing orientation keyword (`"32ltr"`), which
//! is stripped before digit parsing.

use std::str::FromStr;

use anyhow::{Result, bail};

use crate::tmux::{Compass, Direction};

// =============================================================================
// Orientation
// =============================================================================

/// How pane groups are arranged on screen.
///
/// The orientation fixes every axis role in the plan: which direction the
/// outer (group-level) splits use, which direction splits within a group
/// use, and which compass letters walk focus back to the first group
/// (`reset`) or forward to the next one (`advance`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Groups stacked top to bottom (the default)
    TopToBottom,
    /// Groups side by side, left to right
    LeftToRight,
}

impl Orientation {
    const KEYWORDS: [(&'static str, Orientation); 2] = [
        ("ttb", Orientation::TopToBottom),
        ("ltr", Orientation::LeftToRight),
    ];

    /// Split direction for the outer, group-level splits
    pub fn outer(self) -> Direction {
        match self {
            Orientation::TopToBottom => Direction::Vertical,
            Orientation::LeftToRight => Direction::Horizontal,
        }
    }

    /// Split direction for splits within a group
    pub fn inner(self) -> Direction {
        match self {
            Orientation::TopToBottom => Direction::Horizontal,
            Orientation::LeftToRight => Direction::Vertical,
        }
    }

    /// Compass step back toward the first group
    pub fn reset(self) -> Compass {
        match self {
            Orientation::TopToBottom => Compass::Up,
            Orientation::LeftToRight => Compass::Left,
        }
    }

    /// Compass step forward to the next group
    pub fn advance(self) -> Compass {
        match self {
            Orientation::TopToBottom => Compass::Down,
            Orientation::LeftToRight => Compass::Right,
        }
    }
}

impl FromStr for Orientation {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::KEYWORDS
            .iter()
            .find(|(keyword, _)| *keyword == s)
            .map(|&(_, orientation)| orientation)
            .ok_or_else(|| anyhow::anyhow!("invalid orientation: {} (expected ttb or ltr)", s))
    }
}

// =============================================================================
// Layout
// =============================================================================

/// A parsed layout descriptor: pane count per group, plus the orientation
/// suffix if the descriptor carried one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Number of panes in each group, in display order
    pub groups: Vec<usize>,
    /// Orientation embedded as a descriptor suffix, if any
    pub orientation: Option<Orientation>,
}

impl Layout {
    /// Parse a layout descriptor like `"32"` or `"221ltr"`.
    ///
    /// Each group digit must be 1-9; zero-pane groups and empty
    /// descriptors are rejected.
    pub fn parse(spec: &str) -> Result<Self> {
        let mut digits = spec;
        let mut orientation = None;

        for (keyword, value) in Orientation::KEYWORDS {
            if let Some(stripped) = spec.strip_suffix(keyword) {
                digits = stripped;
                orientation = Some(value);
                break;
            }
        }

        if digits.is_empty() {
            bail!("empty layout descriptor: {:?}", spec);
        }

        let groups = digits
            .chars()
            .map(|ch| match ch {
                '1'..='9' => Ok(ch as usize - '0' as usize),
                _ => bail!("invalid layout descriptor {:?}: group sizes must be digits 1-9", spec),
            })
            .collect::<Result<Vec<usize>>>()?;

        Ok(Layout { groups, orientation })
    }

    /// Total number of panes the layout describes
    pub fn total_panes(&self) -> usize {
        self.groups.iter().sum()
    }
}
