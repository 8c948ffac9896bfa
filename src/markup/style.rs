//! Style text for each markup kind, per render target

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TilgError;

/// Where a formatted message is headed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// Terminal: escape codes are inlined in the format string
    #[default]
    Ansi,
    /// Browser devtools: styles travel as `%c` payloads
    Css,
}

/// Markup kinds that carry a style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Bold,
    Italic,
    Code,
    /// Underline around a value that changed since the previous render
    Changed,
}

pub(crate) const CSS_TRACE: &str =
    "color: #999; font-style: italic; font-size: 0.9em; padding-left: 2em;";

impl Target {
    /// Style text that opens `kind`
    pub fn open(self, kind: Kind) -> &'static str {
        match (self, kind) {
            (Target::Ansi, Kind::Bold) => "\u{1b}[1m",
            (Target::Ansi, Kind::Italic) => "\u{1b}[3m",
            (Target::Ansi, Kind::Code) => "\u{1b}[96m\u{1b}[1m",
            // Underline is deliberately not rendered in terminals
            (Target::Ansi, Kind::Changed) => "",
            (Target::Css, Kind::Bold) => "font-weight: bold;",
            (Target::Css, Kind::Italic) => "font-style: italic;",
            (Target::Css, Kind::Code) => {
                "background: hsla(0,0%,70%,.3); border-radius:3px; padding: 0 2px;"
            }
            (Target::Css, Kind::Changed) => {
                "text-decoration: underline; text-decoration-color: green; \
                 text-decoration-style: wavy; padding-bottom: 1px; \
                 text-decoration-skip-ink: none;"
            }
        }
    }

    /// Style text that closes `kind`
    pub fn close(self, kind: Kind) -> &'static str {
        match (self, kind) {
            (Target::Ansi, Kind::Bold) => "\u{1b}[22m",
            (Target::Ansi, Kind::Italic) => "\u{1b}[23m",
            (Target::Ansi, Kind::Code) => "\u{1b}[39m\u{1b}[22m",
            (Target::Ansi, Kind::Changed) => "",
            (Target::Css, Kind::Bold) => "font-weight: normal;",
            (Target::Css, Kind::Italic) => "font-style: normal;",
            (Target::Css, Kind::Code) => "background: unset;",
            (Target::Css, Kind::Changed) => "text-decoration: none; padding-bottom: 0;",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Ansi => write!(f, "ansi"),
            Target::Css => write!(f, "css"),
        }
    }
}

impl FromStr for Target {
    type Err = TilgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ansi" => Ok(Target::Ansi),
            "css" => Ok(Target::Css),
            other => Err(TilgError::Config(format!(
                "Unknown target '{}', expected 'ansi' or 'css'",
                other
            ))),
        }
    }
}
