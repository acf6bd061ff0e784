//! Command line arguments.

use crate::config::{Config, OutputFormat};
use crate::models::MaskCheck;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "subnet-planner")]
#[command(version, about = "IPv4 subnet calculator and VLSM planner")]
pub struct Cli {
    /// IPv4 address, e.g. 192.168.1.0
    pub address: String,
    /// Subnet mask as /N, N or dotted-decimal, e.g. /24 or 255.255.255.0
    pub mask: String,
    /// Host counts of the subnets to carve out, comma separated or repeated
    #[arg(short = 'n', long = "hosts", value_delimiter = ',')]
    pub hosts: Vec<u64>,
    /// Also print binary views of every address
    #[arg(short, long)]
    pub binary: bool,
    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
    /// Accept dotted masks with non-contiguous one-bits
    #[arg(long)]
    pub permissive_mask: bool,
}

impl Cli {
    /// Flags given on the command line win over the environment.
    pub fn apply(&self, config: &mut Config) {
        if self.binary {
            config.full_binary = true;
        }
        if self.json {
            config.format = OutputFormat::Json;
        }
        if self.permissive_mask {
            config.mask_check = MaskCheck::Permissive;
        }
    }
}
