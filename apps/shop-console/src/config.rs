//! # Session Configuration
//!
//! Settings for one run of the shop. The binary always uses the defaults;
//! tests switch the screen effects off so output stays deterministic.

use serde::{Deserialize, Serialize};

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Header shown above the menu.
    pub title: String,

    /// Erase the screen before drawing the menu.
    pub clear_screen: bool,

    /// Wait for Enter after every menu action.
    pub pause_after_action: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            title: "SHOP".to_string(),
            clear_screen: true,
            pause_after_action: true,
        }
    }
}

impl SessionConfig {
    /// Defaults with clearing and pausing turned off.
    pub fn plain() -> Self {
        SessionConfig {
            clear_screen: false,
            pause_after_action: false,
            ..SessionConfig::default()
        }
    }
}
