//! Command-line arguments.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about = "Compare a lending market's oracle prices against Uniswap V2 spot prices")]
pub struct Cli {
    /// ERC20 asset address to check (defaults to every asset in the market)
    #[arg(short, long)]
    pub asset: Option<String>,

    /// Log a warning for any deviation above this ratio (e.g. 0.05 for 5%)
    #[arg(long)]
    pub max_deviation: Option<f64>,

    /// Tokens analyzed concurrently; output order is unaffected
    #[arg(long, default_value_t = 1)]
    pub concurrency: usize,
}
