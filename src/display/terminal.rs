//! TTY detection and color support logic

use serde::{Deserialize, Serialize};
use std::io::IsTerminal;

/// Whether ANSI styling reaches the terminal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn enabled(self) -> bool {
        match self {
            ColorChoice::Auto => should_use_colors(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

/// Determine if colors should be used based on environment and TTY status
pub fn should_use_colors() -> bool {
    // Priority order:
    // 1. NO_COLOR takes precedence (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // 2. CLICOLOR_FORCE enables colors even when piped
    if let Ok(val) = std::env::var("CLICOLOR_FORCE") {
        if val != "0" {
            return true;
        }
    }

    // 3. CLICOLOR=0 disables colors
    if let Ok(val) = std::env::var("CLICOLOR") {
        if val == "0" {
            return false;
        }
    }

    // 4. Check if stdout is a TTY
    std::io::stdout().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var("NO_COLOR");
        std::env::remove_var("CLICOLOR_FORCE");
        std::env::remove_var("CLICOLOR");
    }

    #[test]
    #[serial]
    fn test_no_color_disables() {
        clear_env();
        std::env::set_var("NO_COLOR", "1");
        assert!(!should_use_colors());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_clicolor_force_enables() {
        clear_env();
        std::env::set_var("CLICOLOR_FORCE", "1");
        assert!(should_use_colors());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_no_color_overrides_force() {
        clear_env();
        std::env::set_var("NO_COLOR", "1");
        std::env::set_var("CLICOLOR_FORCE", "1");
        assert!(!should_use_colors());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_clicolor_zero_disables() {
        clear_env();
        std::env::set_var("CLICOLOR", "0");
        assert!(!should_use_colors());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_choice_overrides_environment() {
        clear_env();
        std::env::set_var("NO_COLOR", "1");
        assert!(ColorChoice::Always.enabled());
        assert!(!ColorChoice::Auto.enabled());
        clear_env();
        assert!(!ColorChoice::Never.enabled());
    }
}
