use std::path::PathBuf;

use tilg::config;
use tilg::display::{Sink, TerminalSink};
use tilg::error::Result;
use tilg::{Formatter, Hints, Target};

use crate::cli::template::{parse_arg, split_template};

/// Options of `tilg fmt`
pub struct FmtArgs {
    pub template: String,
    pub args: Vec<String>,
    pub hints: Vec<usize>,
    pub trace: Option<String>,
    pub target: Option<Target>,
    pub restricted: bool,
    pub json: bool,
    pub config: Option<PathBuf>,
}

/// Format one template and print it
pub fn run(opts: FmtArgs) -> Result<()> {
    let config = config::load_or_default(opts.config.as_deref())?;

    let target = opts.target.unwrap_or(config.output.target);
    let restricted = opts.restricted || config.output.restricted;
    let formatter = Formatter::new(target, restricted);

    let segments = split_template(&opts.template);
    let values: Vec<_> = opts.args.iter().map(String::as_str).map(parse_arg).collect();
    let hints: Hints = opts.hints.into_iter().collect();
    let trace = opts.trace.unwrap_or_default();

    let formatted = formatter.format(&segments, &values, &hints, &trace)?;

    if opts.json {
        println!("{}", serde_json::to_string(&formatted.console_args())?);
    } else {
        TerminalSink::new(config.output.color).emit(&formatted)?;
    }

    Ok(())
}
