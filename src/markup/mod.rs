//! Markup formatting module
//!
//! Turns a template (literal segments interleaved with values) written in a
//! small Markdown subset into a styled console message.

mod arg;
mod formatter;
mod output;
mod style;

pub use arg::Arg;
pub use formatter::{md, Formatter, Hints};
pub use output::{Formatted, Fragment, Payload};
pub use style::{Kind, Target};
