//! Lifecycle logger: mount, render, unmount and argument-change messages

use crate::config::{Config, Display};
use crate::display::Sink;
use crate::error::Result;
use crate::lifecycle::caller::{CallerResolver, Frame, NearestNonHook};
use crate::lifecycle::registry::{Mark, Registry};
use crate::markup::{Arg, Formatter, Hints};

/// Formats lifecycle events and hands them to a sink
///
/// The logger owns its instance registry; nothing is shared between
/// loggers.
pub struct Logger<S: Sink> {
    formatter: Formatter,
    registry: Registry,
    resolver: Box<dyn CallerResolver>,
    display: Display,
    sink: S,
}

impl<S: Sink> Logger<S> {
    pub fn new(formatter: Formatter, sink: S) -> Self {
        Self {
            formatter,
            registry: Registry::new(),
            resolver: Box::new(NearestNonHook::default()),
            display: Display::default(),
            sink,
        }
    }

    /// Logger with the target, console restriction and display settings of
    /// `config`
    pub fn from_config(config: &Config, sink: S) -> Self {
        let formatter = Formatter::new(config.output.target, config.output.restricted);
        Self::new(formatter, sink).with_display(config.display.clone())
    }

    pub fn with_resolver(mut self, resolver: impl CallerResolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    pub fn with_display(mut self, display: Display) -> Self {
        self.display = display;
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Backticked component tag with its instance number when repeated
    fn tag(&self, mark: Mark) -> Result<String> {
        let component = self.registry.component(mark)?;
        let index = self.registry.instance_index(mark)?;
        let note = if self.display.instance_notes && index > 0 {
            format!(" ({})", index + 1)
        } else {
            String::new()
        };
        Ok(format!("`<{}/>`{}", component, note))
    }

    fn emit<T: AsRef<str>>(
        &mut self,
        segments: &[T],
        values: &[Arg],
        hints: &Hints,
        trace: &str,
    ) -> Result<()> {
        let message = self.formatter.format(segments, values, hints, trace)?;
        self.sink.emit(&message)
    }

    pub fn mounted(&mut self, component: &str) -> Result<Mark> {
        let mark = self.registry.mount(component);
        let tag = self.tag(mark)?;
        self.emit(&[format!("{} mounted.", tag)], &[], &Hints::new(), "")?;
        Ok(mark)
    }

    pub fn unmounted(&mut self, mark: Mark) -> Result<()> {
        let tag = self.tag(mark)?;
        self.registry.unmount(mark)?;
        self.emit(&[format!("{} unmounted.", tag)], &[], &Hints::new(), "")
    }

    pub fn rendered(&mut self, mark: Mark, props: &Arg) -> Result<()> {
        let tag = self.tag(mark)?;
        let segments = [format!("{} rendered with props: `", tag), "`.".to_string()];
        self.emit(&segments, std::slice::from_ref(props), &Hints::new(), "")
    }

    /// Log a template whose values are tracked between renders
    ///
    /// Prints only when a value changed (or on the first call), with the
    /// changed values highlighted. Returns whether a message was printed.
    pub fn args<T: AsRef<str>>(
        &mut self,
        mark: Mark,
        segments: &[T],
        values: &[Arg],
        frames: &[Frame],
    ) -> Result<bool> {
        let Some(hints) = self.registry.track(mark, values)? else {
            return Ok(false);
        };

        let trace = if self.display.show_trace {
            self.resolver.resolve(frames).unwrap_or_default()
        } else {
            String::new()
        };

        self.emit(segments, values, &hints, &trace)?;
        Ok(true)
    }

    /// Log values on their own, separated by commas
    pub fn inline(&mut self, mark: Mark, values: &[Arg], frames: &[Frame]) -> Result<bool> {
        self.args(mark, &inline_segments(values.len()), values, frames)
    }
}

/// Segments that join `count` values with `", "`
fn inline_segments(count: usize) -> Vec<&'static str> {
    (0..count)
        .map(|i| if i > 0 { ", " } else { "" })
        .chain(std::iter::once(""))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::MemorySink;
    use crate::lifecycle::caller::NoTrace;
    use crate::markup::Target;
    use serde_json::json;

    fn logger() -> Logger<MemorySink> {
        Logger::new(Formatter::new(Target::Ansi, false), MemorySink::new())
    }

    #[test]
    fn test_inline_segments() {
        assert_eq!(inline_segments(0), vec![""]);
        assert_eq!(inline_segments(3), vec!["", ", ", ", ", ""]);
    }

    #[test]
    fn test_mount_and_unmount_messages() {
        let mut logger = logger();
        let first = logger.mounted("Counter").unwrap();
        let second = logger.mounted("Counter").unwrap();
        logger.unmounted(second).unwrap();
        logger.unmounted(first).unwrap();

        assert_eq!(
            logger.sink().lines(),
            vec![
                "<Counter/> mounted.",
                "<Counter/> (2) mounted.",
                "<Counter/> (2) unmounted.",
                "<Counter/> unmounted.",
            ]
        );
        assert!(logger.registry().is_empty());
    }

    #[test]
    fn test_instance_notes_disabled() {
        let mut logger = logger().with_display(Display {
            show_trace: true,
            instance_notes: false,
        });
        logger.mounted("Row").unwrap();
        logger.mounted("Row").unwrap();
        assert_eq!(
            logger.sink().lines(),
            vec!["<Row/> mounted.", "<Row/> mounted."]
        );
    }

    #[test]
    fn test_rendered_with_props() {
        let mut logger = logger();
        let mark = logger.mounted("App").unwrap();
        logger
            .rendered(mark, &Arg::object(json!({"title": "hi"})))
            .unwrap();
        assert_eq!(
            logger.sink().lines()[1],
            "<App/> rendered with props: {\"title\":\"hi\"}."
        );
    }

    #[test]
    fn test_args_logs_only_on_change() {
        let mut logger = logger().with_resolver(NoTrace);
        let mark = logger.mounted("App").unwrap();
        let segments = ["count = ", ", step = ", ""];

        assert!(logger
            .args(mark, &segments, &[Arg::from(1i64), Arg::from(1i64)], &[])
            .unwrap());
        assert!(!logger
            .args(mark, &segments, &[Arg::from(1i64), Arg::from(1i64)], &[])
            .unwrap());
        assert!(logger
            .args(mark, &segments, &[Arg::from(2i64), Arg::from(1i64)], &[])
            .unwrap());

        assert_eq!(
            logger.sink().lines(),
            vec![
                "<App/> mounted.",
                "count = 1, step = 1",
                "count = 2, step = 1",
            ]
        );
    }

    #[test]
    fn test_args_highlights_changed_value_in_css() {
        let mut logger = Logger::new(Formatter::new(Target::Css, false), MemorySink::new())
            .with_resolver(NoTrace);
        let mark = logger.mounted("App").unwrap();
        logger
            .inline(mark, &[Arg::from(1i64), Arg::from(2i64)], &[])
            .unwrap();
        logger
            .inline(mark, &[Arg::from(1i64), Arg::from(3i64)], &[])
            .unwrap();

        let last = logger.sink().messages.last().unwrap().console_args();
        assert_eq!(last[0], json!("1, %c3%c"));
        assert_eq!(last.len(), 3);
    }

    #[test]
    fn test_args_appends_trace() {
        let mut logger = logger();
        let mark = logger.mounted("App").unwrap();
        let frames = [
            Frame::new("useTilg", "tilg.js:1"),
            Frame::new("App", "src/App.jsx:4"),
        ];
        logger.inline(mark, &[Arg::from("x")], &frames).unwrap();
        assert_eq!(logger.sink().lines()[1], "x  (@ src/App.jsx:4)");
    }

    #[test]
    fn test_trace_hidden_when_disabled() {
        let mut logger = logger().with_display(Display {
            show_trace: false,
            instance_notes: true,
        });
        let mark = logger.mounted("App").unwrap();
        let frames = [Frame::new("App", "src/App.jsx:4")];
        logger.inline(mark, &[Arg::from("x")], &frames).unwrap();
        assert_eq!(logger.sink().lines()[1], "x");
    }

    #[test]
    fn test_unknown_mark() {
        let mut logger = logger();
        assert!(logger.unmounted(99).is_err());
        assert!(logger.rendered(99, &Arg::from(1i64)).is_err());
        assert!(logger.inline(99, &[], &[]).is_err());
    }

    #[test]
    fn test_into_sink() {
        let mut logger = logger();
        logger.mounted("App").unwrap();
        assert_eq!(logger.into_sink().messages.len(), 1);
    }
}
