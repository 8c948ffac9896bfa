//! Formatted messages and their two consumer contracts

use serde_json::Value;

use super::arg::Arg;

/// One entry of the payload list that follows a rich format string
#[derive(Debug, Clone)]
pub enum Payload {
    /// Consumed by a `%c` placeholder
    Style(String),
    /// Consumed by a `%o` placeholder
    Inspect(Arg),
}

/// One printable piece of an unstyled message
#[derive(Debug, Clone)]
pub enum Fragment {
    Text(String),
    Value(Arg),
}

/// Result of formatting a template
#[derive(Debug, Clone)]
pub enum Formatted {
    /// Composite format string plus positional payloads
    Rich {
        format: String,
        payloads: Vec<Payload>,
    },
    /// Unstyled fragments, used when the console cannot mix styles with
    /// object references
    Plain { fragments: Vec<Fragment> },
}

impl Formatted {
    /// The variadic argument list for a console-style print primitive
    pub fn console_args(&self) -> Vec<Value> {
        match self {
            Formatted::Rich { format, payloads } => {
                let mut args = Vec::with_capacity(payloads.len() + 1);
                args.push(Value::String(format.clone()));
                args.extend(payloads.iter().map(|payload| match payload {
                    Payload::Style(style) => Value::String(style.clone()),
                    Payload::Inspect(arg) => arg.inspect(),
                }));
                args
            }
            Formatted::Plain { fragments } => fragments
                .iter()
                .map(|fragment| match fragment {
                    Fragment::Text(text) => Value::String(text.clone()),
                    Fragment::Value(arg) => arg.inspect(),
                })
                .collect(),
        }
    }

    /// Resolve placeholders the way a console would, for printing to a
    /// terminal
    pub fn render(&self) -> String {
        match self {
            Formatted::Rich { format, payloads } => render_rich(format, payloads),
            Formatted::Plain { fragments } => fragments
                .iter()
                .map(|fragment| match fragment {
                    Fragment::Text(text) => text.clone(),
                    Fragment::Value(arg) => arg.to_json_text(),
                })
                .collect::<Vec<_>>()
                .join(" "),
        }
    }

    /// Number of `%c` / `%o` placeholders in a rich format string
    pub fn placeholder_count(&self) -> usize {
        match self {
            Formatted::Rich { format, .. } => count_placeholders(format),
            Formatted::Plain { .. } => 0,
        }
    }
}

fn render_rich(format: &str, payloads: &[Payload]) -> String {
    let mut output = String::with_capacity(format.len());
    let mut payloads = payloads.iter();
    let mut chars = format.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            output.push(c);
            continue;
        }
        match chars.peek() {
            Some('%') => {
                chars.next();
                output.push('%');
            }
            Some('c') => {
                chars.next();
                payloads.next();
            }
            Some('o') => {
                chars.next();
                if let Some(Payload::Inspect(arg)) = payloads.next() {
                    output.push_str(&arg.to_json_text());
                }
            }
            _ => output.push('%'),
        }
    }

    output
}

fn count_placeholders(format: &str) -> usize {
    let mut count = 0;
    let mut chars = format.chars();
    while let Some(c) = chars.next() {
        if c == '%' {
            match chars.next() {
                Some('c') | Some('o') => count += 1,
                _ => {}
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_rich_resolves_placeholders() {
        let formatted = Formatted::Rich {
            format: "%cbold%c 100%% %o".to_string(),
            payloads: vec![
                Payload::Style("font-weight: bold;".to_string()),
                Payload::Style("font-weight: normal;".to_string()),
                Payload::Inspect(Arg::object(json!({"a": 1}))),
            ],
        };
        assert_eq!(formatted.render(), "bold 100% {\"a\":1}");
        assert_eq!(formatted.placeholder_count(), 3);
    }

    #[test]
    fn test_render_plain_joins_with_spaces() {
        let formatted = Formatted::Plain {
            fragments: vec![
                Fragment::Text("value:".to_string()),
                Fragment::Value(Arg::function("onClick")),
                Fragment::Text("done".to_string()),
            ],
        };
        assert_eq!(formatted.render(), "value: [Function: onClick] done");
    }

    #[test]
    fn test_console_args_rich() {
        let formatted = Formatted::Rich {
            format: "%cx".to_string(),
            payloads: vec![Payload::Style("font-style: italic;".to_string())],
        };
        assert_eq!(
            formatted.console_args(),
            vec![json!("%cx"), json!("font-style: italic;")]
        );
    }

    #[test]
    fn test_console_args_plain() {
        let formatted = Formatted::Plain {
            fragments: vec![
                Fragment::Text("props".to_string()),
                Fragment::Value(Arg::object(json!([1]))),
            ],
        };
        assert_eq!(formatted.console_args(), vec![json!("props"), json!([1])]);
    }

    #[test]
    fn test_escaped_percent_is_not_a_placeholder() {
        assert_eq!(count_placeholders("50%% off %c"), 1);
    }
}
