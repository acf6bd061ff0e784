//! IPv4 addressing and variable-length subnet planning.
//!
//! - [`models`] - octets, segments and addresses
//! - [`processing`] - the VLSM planner
//! - [`output`] - report formatting used by the binary

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

use cli::Cli;
use config::{Config, OutputFormat};
use output::{print_binary, PlanReport};
use std::error::Error;

pub use error::{MaskHint, ParseError, PlanError};
pub use models::{Address, MaskCheck};
pub use processing::{Planner, SubnetPlan, SubnetRequest};

/// Parse the address and mask, plan the requested subnets and print the report.
///
/// Host counts that do not fit are reported and skipped, the rest are still planned.
pub fn run(cli: &Cli, config: &Config) -> Result<(), Box<dyn Error>> {
    let mut address = Address::new();
    address
        .parse_address(&cli.address)
        .map_err(|e| format!("Invalid address {}: {e}", cli.address))?;
    address
        .parse_mask_with(&cli.mask, config.mask_check)
        .map_err(|e| format!("Invalid mask {}: {e}", cli.mask))?;
    log::info!("Network {address}, capacity {}", address.capacity());

    let (report, addresses) = if cli.hosts.is_empty() {
        (PlanReport::from_address(&address), vec![address])
    } else {
        let plan = plan_subnets(address, &cli.hosts)?;
        (PlanReport::from_plan(&plan), plan.into_addresses())
    };

    match config.format {
        OutputFormat::Csv => report.print_csv(),
        OutputFormat::Json => report.print_json()?,
    }
    if config.full_binary {
        for (i, address) in addresses.iter().enumerate() {
            print_binary(i, address);
        }
    }
    Ok(())
}

/// Add every host count to a planner on `parent` and lay the subnets out.
pub fn plan_subnets(parent: Address, hosts: &[u64]) -> Result<SubnetPlan, PlanError> {
    let mut planner = Planner::new(parent);
    for count in hosts {
        if let Err(e) = planner.add(*count) {
            log::error!("Skipping subnet of {count} hosts: {e}");
        }
    }
    planner.plan()
}
