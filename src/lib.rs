//! Craftshop library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// What a popup-dismiss timer may clear when it fires.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DismissPolicy {
    /// A timer only clears the popup it was scheduled for. Showing a new
    /// popup supersedes (and aborts) the previous timer.
    #[default]
    Supersede,
    /// Every timer clears whatever popup is showing when it fires, so an
    /// older timer can cut a newer popup short.
    Legacy,
}

impl DismissPolicy {
    pub fn label(self) -> &'static str {
        match self {
            DismissPolicy::Supersede => "supersede",
            DismissPolicy::Legacy => "legacy",
        }
    }
}
