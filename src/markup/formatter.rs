//! Template formatter with a Markdown subset: `**bold**`, `__bold__`,
//! `*italic*`, `_italic_` and `` `code` ``.

use std::collections::BTreeSet;

use super::arg::Arg;
use super::output::{Formatted, Fragment, Payload};
use super::style::{Kind, Target, CSS_TRACE};
use crate::error::{Result, TilgError};

/// Positions of values that changed since the previous render
pub type Hints = BTreeSet<usize>;

/// Characters that may border a delimiter
const SEPARATORS: &[char] = &[
    '-', '–', '—', '!', '$', '%', '^', '&', '*', '(', ')', '_', '+', '|', '~', '=', '`', '{', '}',
    '[', ']', ':', '/', '\\', '"', '\'', '“', '”', '‘', '’', ';', '<', '>', '?', ',', '.', '@', '#',
];

fn is_separator(c: char) -> bool {
    c.is_whitespace() || SEPARATORS.contains(&c)
}

/// A boundary is the segment edge, a resolved delimiter, or a separator
fn is_boundary(c: Option<char>) -> bool {
    c.is_none_or(is_separator)
}

/// Delimiters; doubled and single forms keep separate open flags
#[derive(Debug, Clone, Copy)]
enum Delimiter {
    DoubleStar,
    DoubleUnderscore,
    Star,
    Underscore,
    Backtick,
}

impl Delimiter {
    const COUNT: usize = 5;

    fn at(chars: &[char], i: usize) -> Option<Self> {
        let doubled = chars.get(i + 1) == Some(&chars[i]);
        match chars[i] {
            '*' if doubled => Some(Delimiter::DoubleStar),
            '*' => Some(Delimiter::Star),
            '_' if doubled => Some(Delimiter::DoubleUnderscore),
            '_' => Some(Delimiter::Underscore),
            '`' => Some(Delimiter::Backtick),
            _ => None,
        }
    }

    fn kind(self) -> Kind {
        match self {
            Delimiter::DoubleStar | Delimiter::DoubleUnderscore => Kind::Bold,
            Delimiter::Star | Delimiter::Underscore => Kind::Italic,
            Delimiter::Backtick => Kind::Code,
        }
    }

    fn literal(self) -> &'static str {
        match self {
            Delimiter::DoubleStar => "**",
            Delimiter::DoubleUnderscore => "__",
            Delimiter::Star => "*",
            Delimiter::Underscore => "_",
            Delimiter::Backtick => "`",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

/// Accumulates the message text and its payloads
struct Writer {
    target: Target,
    styled: bool,
    buf: String,
    payloads: Vec<Payload>,
    /// Byte offset right after the last `%c`, for coalescing
    style_end: Option<usize>,
}

impl Writer {
    fn new(target: Target, styled: bool) -> Self {
        Self {
            target,
            styled,
            buf: String::new(),
            payloads: Vec::new(),
            style_end: None,
        }
    }

    fn text(&mut self, text: &str) {
        if self.styled {
            // A literal `%` must not read as a placeholder
            self.buf.push_str(&text.replace('%', "%%"));
        } else {
            self.buf.push_str(text);
        }
    }

    fn style(&mut self, style: &str) {
        if !self.styled {
            return;
        }
        match self.target {
            Target::Ansi => self.buf.push_str(style),
            Target::Css => {
                if self.style_end == Some(self.buf.len()) {
                    if let Some(Payload::Style(last)) = self.payloads.last_mut() {
                        last.push_str(style);
                        return;
                    }
                }
                self.style_placeholder(style);
            }
        }
    }

    fn style_placeholder(&mut self, style: &str) {
        self.buf.push_str("%c");
        self.payloads.push(Payload::Style(style.to_string()));
        self.style_end = Some(self.buf.len());
    }

    fn inspect(&mut self, arg: &Arg) {
        self.buf.push_str("%o");
        self.payloads.push(Payload::Inspect(arg.clone()));
    }

    fn take(&mut self) -> String {
        self.style_end = None;
        std::mem::take(&mut self.buf)
    }
}

/// Formats templates for one target and console capability
#[derive(Debug, Clone, Copy)]
pub struct Formatter {
    target: Target,
    restricted: bool,
}

impl Formatter {
    /// `restricted` marks a console that cannot render styles next to
    /// object references
    pub fn new(target: Target, restricted: bool) -> Self {
        Self { target, restricted }
    }

    pub fn target(&self) -> Target {
        self.target
    }

    /// Format `segments` interleaved with `values`
    ///
    /// `segments` must hold exactly one more entry than `values`. Values at
    /// positions in `hints` are wrapped in the changed style. A non-empty
    /// `trace` is appended as a dim `(@ trace)` annotation.
    pub fn format<S: AsRef<str>>(
        &self,
        segments: &[S],
        values: &[Arg],
        hints: &Hints,
        trace: &str,
    ) -> Result<Formatted> {
        if segments.len() != values.len() + 1 {
            return Err(TilgError::Template {
                segments: segments.len(),
                values: values.len(),
            });
        }

        let disable_styling = self.restricted && values.iter().any(Arg::is_reference);
        if disable_styling {
            log::debug!("Restricted console with object arguments, styling disabled");
            Ok(self.format_plain(segments, values, trace))
        } else {
            Ok(self.format_rich(segments, values, hints, trace))
        }
    }

    fn format_rich<S: AsRef<str>>(
        &self,
        segments: &[S],
        values: &[Arg],
        hints: &Hints,
        trace: &str,
    ) -> Formatted {
        let mut scanner = Scanner::new(self.target);
        let mut writer = Writer::new(self.target, true);

        for (i, segment) in segments.iter().enumerate() {
            scanner.scan(segment.as_ref(), &mut writer);

            let Some(value) = values.get(i) else {
                continue;
            };
            let changed = hints.contains(&i);
            if changed {
                writer.style(self.target.open(Kind::Changed));
            }
            if value.is_reference() {
                writer.inspect(value);
            } else {
                writer.text(&value.to_inline_text());
            }
            if changed {
                writer.style(self.target.close(Kind::Changed));
            }
        }

        if !trace.is_empty() {
            match self.target {
                Target::Ansi => {
                    writer.buf.push_str("  \u{1b}[2m");
                    writer.text(&format!("(@ {})", trace));
                    writer.buf.push_str("\u{1b}[22m");
                }
                Target::Css => {
                    writer.style_placeholder(CSS_TRACE);
                    writer.text(&format!("(@ {})", trace));
                }
            }
        }

        Formatted::Rich {
            format: writer.buf,
            payloads: writer.payloads,
        }
    }

    fn format_plain<S: AsRef<str>>(&self, segments: &[S], values: &[Arg], trace: &str) -> Formatted {
        let mut scanner = Scanner::new(self.target);
        let mut writer = Writer::new(self.target, false);
        let mut fragments = Vec::new();

        for (i, segment) in segments.iter().enumerate() {
            scanner.scan(segment.as_ref(), &mut writer);
            let value = values.get(i);

            // The console puts a space between arguments already
            let mut text = writer.take();
            if value.is_some() && text.ends_with(' ') {
                text.pop();
            }
            if i > 0 && text.starts_with(' ') {
                text.remove(0);
            }
            if !text.is_empty() {
                fragments.push(Fragment::Text(text));
            }

            match value {
                Some(arg) if arg.is_reference() => fragments.push(Fragment::Value(arg.clone())),
                Some(arg) => fragments.push(Fragment::Text(arg.to_json_text())),
                None => {}
            }
        }

        if !trace.is_empty() {
            fragments.push(Fragment::Text(format!(" (@ {})", trace)));
        }

        Formatted::Plain { fragments }
    }
}

/// Delimiter state, carried across every segment of one template
struct Scanner {
    target: Target,
    open: [bool; Delimiter::COUNT],
}

impl Scanner {
    fn new(target: Target) -> Self {
        Self {
            target,
            open: [false; Delimiter::COUNT],
        }
    }

    fn scan(&mut self, segment: &str, writer: &mut Writer) {
        let chars: Vec<char> = segment.chars().collect();
        let mut prev: Option<char> = None;
        let mut i = 0;

        while i < chars.len() {
            let Some(delimiter) = Delimiter::at(&chars, i) else {
                let mut buf = [0u8; 4];
                writer.text(chars[i].encode_utf8(&mut buf));
                prev = Some(chars[i]);
                i += 1;
                continue;
            };

            let literal = delimiter.literal();
            i += literal.len();
            let next = chars.get(i).copied();
            let slot = delimiter.slot();

            if self.open[slot] && is_boundary(next) {
                writer.style(self.target.close(delimiter.kind()));
                self.open[slot] = false;
                prev = None;
            } else if !self.open[slot] && is_boundary(prev) {
                writer.style(self.target.open(delimiter.kind()));
                self.open[slot] = true;
                prev = None;
            } else {
                writer.text(literal);
                prev = literal.chars().last();
            }
        }
    }
}

/// Format for a terminal with no hints and no trace
pub fn md<S: AsRef<str>>(segments: &[S], values: &[Arg]) -> Result<Formatted> {
    Formatter::new(Target::Ansi, false).format(segments, values, &Hints::new(), "")
}
