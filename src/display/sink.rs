//! Destinations for formatted messages

use ansi_str::AnsiStr;
use std::io::Write;

use crate::display::terminal::ColorChoice;
use crate::error::Result;
use crate::markup::Formatted;

/// Receives every message a logger produces
pub trait Sink {
    fn emit(&mut self, message: &Formatted) -> Result<()>;
}

/// Prints messages to stdout, one per line
pub struct TerminalSink {
    colors: bool,
}

impl TerminalSink {
    pub fn new(color: ColorChoice) -> Self {
        Self {
            colors: color.enabled(),
        }
    }
}

impl Sink for TerminalSink {
    fn emit(&mut self, message: &Formatted) -> Result<()> {
        let line = render_line(message, self.colors);
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", line)?;
        Ok(())
    }
}

/// Render a message for a terminal, dropping escape codes when colors are off
pub fn render_line(message: &Formatted, colors: bool) -> String {
    let rendered = message.render();
    if colors {
        rendered
    } else {
        rendered.ansi_strip().into_owned()
    }
}

/// Keeps messages in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    pub messages: Vec<Formatted>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered text of every message so far, escape codes stripped
    pub fn lines(&self) -> Vec<String> {
        self.messages
            .iter()
            .map(|message| render_line(message, false))
            .collect()
    }
}

impl Sink for MemorySink {
    fn emit(&mut self, message: &Formatted) -> Result<()> {
        self.messages.push(message.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::{md, Arg};

    #[test]
    fn test_render_line_strips_without_colors() {
        let message = md(&["**bold** ", ""], &[Arg::from(1i64)]).unwrap();
        assert_eq!(render_line(&message, false), "bold 1");
        assert_eq!(
            render_line(&message, true),
            "\u{1b}[1mbold\u{1b}[22m 1"
        );
    }

    #[test]
    fn test_memory_sink_records() {
        let mut sink = MemorySink::new();
        sink.emit(&md(&["one"], &[]).unwrap()).unwrap();
        sink.emit(&md(&["`two`"], &[]).unwrap()).unwrap();
        assert_eq!(sink.lines(), vec!["one".to_string(), "two".to_string()]);
    }

    #[test]
    fn test_terminal_sink_emits() {
        let mut sink = TerminalSink::new(ColorChoice::Never);
        assert!(sink.emit(&md(&["hello"], &[]).unwrap()).is_ok());
    }
}
