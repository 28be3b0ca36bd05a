use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use regionseek_core::config::FrontendConfig;

#[derive(Args)]
pub struct ConfigArgs {
    /// Write config to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the built-in defaults instead of the loaded config
    #[arg(long)]
    pub defaults: bool,
}

/// Print or save the effective FrontendConfig as TOML.
pub fn run(args: &ConfigArgs, loaded: &FrontendConfig) -> Result<()> {
    let config = if args.defaults {
        FrontendConfig::default()
    } else {
        loaded.clone()
    };

    if let Some(ref path) = args.output {
        config
            .save(path)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        println!("Config saved to {}", path.display());
    } else {
        print!("{}", config.to_toml_string()?);
    }

    Ok(())
}
