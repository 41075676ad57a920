//! Defaults command implementation

use anyhow::Result;
use clap::Args;

use super::utils::{render, OutputFormat};
use crate::config::defaults::{default_exclude, sample_override};

#[derive(Args)]
pub struct DefaultsArgs {
    /// Print the full sample override layer instead of just the exclude globs
    #[arg(long)]
    pub full: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,
}

pub fn run(args: DefaultsArgs) -> Result<()> {
    if args.full {
        let rendered = render(&sample_override(), args.format)?;
        print!("{rendered}");
        return Ok(());
    }

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&default_exclude())?);
        }
        _ => {
            for pattern in default_exclude() {
                println!("{pattern}");
            }
        }
    }

    Ok(())
}
