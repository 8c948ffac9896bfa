use std::path::PathBuf;

use tilg::config::{self, Config};
use tilg::error::Result;

/// Initialize tilg.toml configuration file
pub fn init(path: Option<PathBuf>) -> Result<()> {
    let config_path = path.unwrap_or_else(|| PathBuf::from(config::DEFAULT_PATH));

    // Check if file already exists
    if config_path.exists() {
        eprintln!(
            "Configuration file already exists at: {}",
            config_path.display()
        );
        eprintln!("Remove it first if you want to reinitialize.");
        return Ok(());
    }

    config::save(&Config::default(), &config_path)?;

    println!("Configuration file created: {}", config_path.display());
    println!("\nNext steps:");
    println!(
        "1. Edit {} to pick the output target and display options",
        config_path.display()
    );
    println!("2. Run 'tilg fmt \"Hello **{{}}**\" --arg world' to try it out");

    Ok(())
}
