//! Template and argument parsing shared by `fmt` and `replay`

use serde_json::Value;
use tilg::Arg;

/// Interpolation point in a command-line template
pub const PLACEHOLDER: &str = "{}";

/// Split a template on `{}` into literal segments
pub fn split_template(template: &str) -> Vec<&str> {
    template.split(PLACEHOLDER).collect()
}

/// Parse a command-line argument as JSON, keeping it as a string otherwise
pub fn parse_arg(raw: &str) -> Arg {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => Arg::from(value),
        Err(_) => Arg::from(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_template() {
        assert_eq!(split_template("a {} b {}"), vec!["a ", " b ", ""]);
        assert_eq!(split_template("plain"), vec!["plain"]);
    }

    #[test]
    fn test_parse_arg() {
        assert_eq!(parse_arg("5").to_json_text(), "5");
        assert_eq!(parse_arg("\"x\"").to_json_text(), "\"x\"");
        assert_eq!(parse_arg("world").to_json_text(), "\"world\"");
        assert!(parse_arg("{\"a\":1}").is_reference());
    }
}
