//! The three states of the download button (pure Rust, no host types).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ButtonError;

/// Current stage of the download the button represents.
///
/// Transitions are driven by the host; the button never advances on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonState {
    /// Idle. Drawn as a downward arrow and the only tappable state.
    #[default]
    Start,
    /// Downloading. Drawn as an arc sweeping with the completion fraction.
    Progress,
    /// Finished. Drawn as a full circle with a checkmark.
    Done,
}

impl ButtonState {
    /// All states, in lifecycle order.
    pub const ALL: [ButtonState; 3] = [ButtonState::Start, ButtonState::Progress, ButtonState::Done];

    /// Returns true if a tap in this state should fire the download action.
    pub fn is_tappable(self) -> bool {
        matches!(self, ButtonState::Start)
    }

    /// Returns a human-readable description of the state for debugging.
    pub fn description(self) -> &'static str {
        match self {
            ButtonState::Start => "Download arrow",
            ButtonState::Progress => "Progress arc",
            ButtonState::Done => "Done checkmark",
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            ButtonState::Start => "start",
            ButtonState::Progress => "progress",
            ButtonState::Done => "done",
        }
    }
}

impl fmt::Display for ButtonState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ButtonState {
    type Err = ButtonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" => Ok(ButtonState::Start),
            "progress" => Ok(ButtonState::Progress),
            "done" => Ok(ButtonState::Done),
            _ => Err(ButtonError::UnknownState(s.to_string())),
        }
    }
}
