#![forbid(unsafe_code)]

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use colfit_runtime::ResponsiveConfig;
use tracing::debug;

use crate::error::Result;
use crate::replay::{Step, replay, split_widths};

#[derive(Debug, Parser)]
#[command(
    name = "colfit-demo",
    about = "Replay container resizes and column swaps against a grid config",
    version
)]
pub struct Cli {
    /// Grid configuration (TOML, or JSON with a .json extension).
    #[arg(long, short)]
    pub config: PathBuf,

    /// Container widths, in order. The first is the width at attach time.
    #[arg(long = "width", short, required = true, allow_negative_numbers = true)]
    pub widths: Vec<f64>,

    /// Swap cycles to run after the last width.
    #[arg(long, default_value_t = 0)]
    pub cycle: usize,

    /// Columns to click with the column switcher after cycling.
    #[arg(long = "switch")]
    pub switches: Vec<String>,

    /// Emit JSON lines instead of key=value text.
    #[arg(long)]
    pub json: bool,
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    run(cli, &mut std::io::stdout().lock())
}

pub fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let config = ResponsiveConfig::from_file(&cli.config)?;
    debug!(path = %cli.config.display(), breakpoints = config.breakpoints.len(), "config loaded");
    let grid = config.build()?;

    let (initial, mut steps) = split_widths(&cli.widths)?;
    steps.extend(std::iter::repeat_n(Step::Cycle, cli.cycle));
    steps.extend(
        cli.switches
            .into_iter()
            .map(|column| Step::Switch(column.into())),
    );

    for emission in replay(grid, initial, &steps) {
        if cli.json {
            writeln!(out, "{}", serde_json::to_string(&emission.to_json())?)?;
        } else {
            writeln!(out, "{emission}")?;
        }
    }
    Ok(())
}
