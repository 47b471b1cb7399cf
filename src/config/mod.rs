use clap::Parser;

use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};

#[derive(Debug, Clone, Parser)]
#[command(name = "boatyard")]
#[command(about = "Marina vessel inventory and billing manager")]
pub struct CliConfig {
    /// CSV file holding the fleet records; rewritten on exit
    pub data_file: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("data_file", &self.data_file)
    }
}
