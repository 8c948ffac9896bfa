//! Development-time logging of component lifecycles with inline Markdown
//! styling for terminals and browser consoles.

pub mod config;
pub mod display;
pub mod error;
pub mod lifecycle;
pub mod markup;

pub use error::{Result, TilgError};
pub use markup::{md, Arg, Formatted, Formatter, Hints, Target};
