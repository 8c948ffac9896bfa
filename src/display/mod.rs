//! Terminal display module
//!
//! Prints formatted messages with automatic TTY detection.

mod sink;
mod terminal;

pub use sink::{render_line, MemorySink, Sink, TerminalSink};
pub use terminal::{should_use_colors, ColorChoice};
