mod cli;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use tilg::Target;

#[derive(Parser)]
#[command(name = "tilg")]
#[command(about = "Format component lifecycle logs with inline Markdown styling", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a single template, `{}` marking each value
    Fmt {
        /// Template text, e.g. "Hello **{}**"
        template: String,

        /// Value for the next `{}` (parsed as JSON, otherwise taken as a string)
        #[arg(short, long = "arg")]
        args: Vec<String>,

        /// Position of a value that changed (repeatable)
        #[arg(long = "hint")]
        hints: Vec<usize>,

        /// Provenance path appended as `(@ trace)`
        #[arg(long)]
        trace: Option<String>,

        /// Render target (ansi, css)
        #[arg(long)]
        target: Option<Target>,

        /// Console cannot render styles next to object arguments
        #[arg(long)]
        restricted: bool,

        /// Print the console argument list as JSON
        #[arg(long)]
        json: bool,

        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Replay a lifecycle script (JSON list of events)
    Replay {
        /// Path to the script
        script: PathBuf,

        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Initialize tilg.toml configuration file
    Init {
        /// Path where to create the config file
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Fmt {
            template,
            args,
            hints,
            trace,
            target,
            restricted,
            json,
            config,
        } => cli::fmt::run(cli::fmt::FmtArgs {
            template,
            args,
            hints,
            trace,
            target,
            restricted,
            json,
            config,
        }),
        Commands::Replay { script, config } => cli::replay::run(script, config),
        Commands::Config { command } => match command {
            ConfigCommands::Init { path } => cli::config::init(path),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
