//! Command-line interface module
//!
//! Implements all CLI commands using clap:
//! - fmt: Format one template
//! - replay: Replay a scripted lifecycle session
//! - config init: Initialize configuration file
pub mod config;
pub mod fmt;
pub mod replay;
pub mod template;
