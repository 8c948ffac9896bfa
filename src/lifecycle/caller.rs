//! Caller identification from captured frames

use serde::{Deserialize, Serialize};

/// One captured call frame, innermost first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub function: String,
    pub location: String,
}

impl Frame {
    pub fn new(function: &str, location: &str) -> Self {
        Self {
            function: function.to_string(),
            location: location.to_string(),
        }
    }
}

/// Picks a provenance path for a log message out of captured frames
pub trait CallerResolver {
    fn resolve(&self, frames: &[Frame]) -> Option<String>;
}

/// Location of the nearest frame that is not the logging hook itself
///
/// Walks outward through hook frames (`use*`, `Foo.use*`) and stops at the
/// first frame that looks like a component.
#[derive(Debug, Clone)]
pub struct NearestNonHook {
    hook_prefix: String,
}

impl NearestNonHook {
    pub fn new(hook_prefix: &str) -> Self {
        Self {
            hook_prefix: hook_prefix.to_string(),
        }
    }
}

impl Default for NearestNonHook {
    fn default() -> Self {
        Self::new("useTilg")
    }
}

fn is_hook(function: &str) -> bool {
    function.starts_with("use")
        || function
            .match_indices(".use")
            .any(|(i, _)| i > 0 && i + ".use".len() < function.len())
}

impl CallerResolver for NearestNonHook {
    fn resolve(&self, frames: &[Frame]) -> Option<String> {
        let mut location = None;

        for frame in frames.iter().filter(|f| !f.function.is_empty()) {
            if !frame.function.starts_with(&self.hook_prefix) {
                location = Some(frame.location.clone());
            }
            if !is_hook(&frame.function) {
                break;
            }
        }

        location.filter(|l| !l.is_empty())
    }
}

/// Resolver for callers that have no frames to offer
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl CallerResolver for NoTrace {
    fn resolve(&self, _frames: &[Frame]) -> Option<String> {
        None
    }
}
