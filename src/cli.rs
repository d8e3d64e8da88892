//! Command-line argument parsing for the sample plugin
//!
//! The host agent invokes the plugin without arguments; these flags exist for
//! running it by hand.

use clap::Parser;
use std::path::PathBuf;

/// sample-plugin - Emit a custom metrics record for the vps-screener agent
#[derive(Parser, Debug)]
#[command(name = "sample-plugin")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", env = "VPS_PLUGIN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging (written to stderr)
    #[arg(short, long)]
    pub debug: bool,
}
