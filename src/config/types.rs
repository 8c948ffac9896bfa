use serde::{Deserialize, Serialize};

use crate::display::ColorChoice;
use crate::markup::Target;

/// Tilg configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output settings
    pub output: Output,

    /// Display settings
    pub display: Display,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Output {
    /// Render target: inline ANSI codes or CSS `%c` payloads
    pub target: Target,

    /// Terminal color handling (auto, always, never)
    pub color: ColorChoice,

    /// Console cannot render styles next to object arguments
    pub restricted: bool,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Display {
    /// Append the caller location to argument messages
    pub show_trace: bool,

    /// Number repeated instances of the same component, e.g. `(2)`
    pub instance_notes: bool,
}

impl Default for Output {
    fn default() -> Self {
        Self {
            target: Target::Ansi,
            color: ColorChoice::Auto,
            restricted: false,
        }
    }
}

impl Default for Display {
    fn default() -> Self {
        Self {
            show_trace: true,
            instance_notes: true,
        }
    }
}
