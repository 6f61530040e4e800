//! Work-order pipeline stages and the lifecycle flags derived from them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Fixed pipeline position of a work order.
///
/// Wire format: `u8` (0 = Backlog, 1 = Unassigned, 2 = In Progress, 3 = In Review,
/// 4 = Completed). Stored rows may carry values outside this set; those are
/// anomalies to be reported, never rejected on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Stage {
    Backlog = 0,
    Unassigned = 1,
    InProgress = 2,
    InReview = 3,
    Completed = 4,
}

impl Stage {
    /// Every stage, in board column order.
    pub const ALL: [Stage; 5] = [
        Self::Backlog,
        Self::Unassigned,
        Self::InProgress,
        Self::InReview,
        Self::Completed,
    ];

    /// Convert from `u8` wire value. Returns `None` for unknown values.
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Backlog),
            1 => Some(Self::Unassigned),
            2 => Some(Self::InProgress),
            3 => Some(Self::InReview),
            4 => Some(Self::Completed),
            _ => None,
        }
    }

    /// Convert to `u8` wire value.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Column title shown on the board.
    pub fn name(self) -> &'static str {
        match self {
            Self::Backlog => "Backlog",
            Self::Unassigned => "Unassigned",
            Self::InProgress => "In Progress",
            Self::InReview => "In Review",
            Self::Completed => "Completed",
        }
    }

    /// Flags a work order must carry once it sits in this stage.
    pub fn flags(self) -> LifecycleFlags {
        LifecycleFlags::for_stage(self)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Stage> for u8 {
    fn from(stage: Stage) -> Self {
        stage.as_u8()
    }
}

impl TryFrom<u8> for Stage {
    type Error = ParseStageError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        Self::from_u8(v).ok_or_else(|| ParseStageError(v.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown stage: {0}")]
pub struct ParseStageError(pub String);

/// Accepts the wire number (`"2"`) or the column name in any case, with
/// spaces, hyphens or underscores between words (`"in-progress"`).
impl FromStr for Stage {
    type Err = ParseStageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(v) = trimmed.parse::<u8>() {
            return Self::from_u8(v).ok_or_else(|| ParseStageError(s.to_owned()));
        }
        let normalized: String = trimmed
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        Self::ALL
            .into_iter()
            .find(|stage| stage.name().replace(' ', "").to_lowercase() == normalized)
            .ok_or_else(|| ParseStageError(s.to_owned()))
    }
}

/// Status flags coupled to the stage.
///
/// `complete` holds only in `Completed`, `active` only in `InProgress` and
/// `InReview`. A stage move never marks a work order canceled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifecycleFlags {
    pub complete: bool,
    pub active: bool,
    pub canceled: bool,
}

impl LifecycleFlags {
    pub fn for_stage(stage: Stage) -> Self {
        Self {
            complete: stage == Stage::Completed,
            active: matches!(stage, Stage::InProgress | Stage::InReview),
            canceled: false,
        }
    }
}
