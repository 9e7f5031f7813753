// cli.rs - Command-line interface configuration
use clap::Parser;

use crate::pattern::Pattern;

#[derive(Parser, Debug, Clone)]
#[command(name = "surface-info")]
#[command(about = "Create a bitmap surface and report its pixel format", long_about = None)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Surface width in pixels
    #[arg(long)]
    pub width: i64,

    /// Surface height in pixels
    #[arg(long)]
    pub height: i64,

    /// Test pattern to draw after creation
    #[arg(long, value_enum, default_value_t = Pattern::None)]
    pub pattern: Pattern,

    /// Refuse surfaces whose buffer would exceed this many bytes
    #[arg(long = "max-bytes")]
    pub max_bytes: Option<u64>,

    /// Print the report as JSON
    #[arg(long, default_value = "false")]
    pub json: bool,
}
