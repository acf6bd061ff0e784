//! Plan report: one row per address plus the unreserved range and host totals.

use super::terminal::{binary_with_boundary, dotted_label, format_field};
use crate::models::Address;
use crate::processing::{SubnetPlan, UnreservedRange};
use colored::Colorize;
use itertools::Itertools;
use serde::Serialize;
use std::net::Ipv4Addr;

const HEADER: [&str; 9] = [
    "idx",
    "address",
    "network",
    "mask",
    "broadcast",
    "first_host",
    "last_host",
    "hosts",
    "requested",
];
const FIELD_WIDTHS: [usize; 9] = [5, 20, 17, 17, 17, 17, 17, 12, 11];
const LABEL_WIDTH: usize = 24;

/// Represents one address of a plan for output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanRow {
    /// 0 for the parent network, 1.. for subnets.
    pub index: usize,
    /// Address as given, with prefix length.
    pub address: String,
    pub network: String,
    pub mask: String,
    pub broadcast: String,
    pub first_host: String,
    pub last_host: String,
    /// Usable host addresses.
    pub hosts: u64,
    /// Host count asked for, subnets only.
    pub requested: Option<u64>,
}

impl PlanRow {
    pub fn new(index: usize, address: &Address, requested: Option<u64>) -> PlanRow {
        PlanRow {
            index,
            address: address.to_string(),
            network: address.network_address(),
            mask: address.mask_address(),
            broadcast: address.broadcast_address(),
            first_host: host_field(address.first_host()),
            last_host: host_field(address.last_host()),
            hosts: address.usable_hosts(),
            requested,
        }
    }

    fn fields(&self) -> [String; 9] {
        [
            self.index.to_string(),
            self.address.clone(),
            self.network.clone(),
            self.mask.clone(),
            self.broadcast.clone(),
            self.first_host.clone(),
            self.last_host.clone(),
            self.hosts.to_string(),
            self.requested
                .map(|r| r.to_string())
                .unwrap_or_else(|| "-".to_string()),
        ]
    }
}

fn host_field(host: Option<Ipv4Addr>) -> String {
    match host {
        Some(host) => host.to_string(),
        None => "-".to_string(),
    }
}

/// Everything printed for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanReport {
    pub rows: Vec<PlanRow>,
    pub unreserved: Option<UnreservedRange>,
    /// Total addresses in the parent network.
    pub capacity: u64,
    pub hosts_assigned: u64,
    pub hosts_left: u64,
}

impl PlanReport {
    /// Report for a single address without subnets.
    pub fn from_address(address: &Address) -> PlanReport {
        PlanReport {
            rows: vec![PlanRow::new(0, address, None)],
            unreserved: None,
            capacity: address.capacity(),
            hosts_assigned: 0,
            hosts_left: address.capacity(),
        }
    }

    pub fn from_plan(plan: &SubnetPlan) -> PlanReport {
        let mut rows = vec![PlanRow::new(0, plan.parent(), None)];
        for (i, (child, request)) in plan.children().iter().zip(plan.requests()).enumerate() {
            rows.push(PlanRow::new(i + 1, child, Some(request.requested)));
        }
        PlanReport {
            rows,
            unreserved: plan.unreserved().copied(),
            capacity: plan.parent().capacity(),
            hosts_assigned: plan.hosts_assigned(),
            hosts_left: plan.hosts_left(),
        }
    }

    /// Header and one quoted, comma separated line per row.
    pub fn csv_lines(&self) -> Vec<String> {
        let header = HEADER
            .iter()
            .zip(FIELD_WIDTHS)
            .map(|(name, width)| format_field(name, width))
            .join(",");
        let mut lines = vec![header];
        for row in &self.rows {
            lines.push(
                row.fields()
                    .iter()
                    .zip(FIELD_WIDTHS)
                    .map(|(field, width)| format_field(field, width))
                    .join(","),
            );
        }
        lines
    }

    /// Summary lines, uncolored.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        match &self.unreserved {
            Some(range) => lines.push(format!(
                "Unreserved addresses: {} - {}",
                range.start, range.end
            )),
            None if self.rows.len() > 1 => lines.push("Unreserved addresses: none".to_string()),
            None => {}
        }
        lines.push(format!(
            "Hosts left: {} out of {}, assigned: {}",
            self.hosts_left, self.capacity, self.hosts_assigned
        ));
        lines
    }

    pub fn print_csv(&self) {
        for line in self.csv_lines() {
            println!("{line}");
        }
        for line in self.summary_lines() {
            println!("#{}# {line}", "NOTE".on_blue());
        }
    }

    pub fn print_json(&self) -> Result<(), serde_json::Error> {
        println!("{}", serde_json::to_string_pretty(self)?);
        Ok(())
    }
}

/// Binary view of one address, octets separated and the mask boundary marked.
pub fn binary_lines(address: &Address) -> Vec<String> {
    let prefix = address.prefix_length();
    let views = [
        ("IPv4 Address", address.binary_address()),
        ("Network Address", address.binary_network()),
        ("Subnet Mask", address.binary_mask()),
        ("NOT(Subnet Mask)", address.binary_not_mask()),
        ("Broadcast Address", address.binary_broadcast()),
    ];
    views
        .iter()
        .map(|(label, bits)| {
            format!(
                "{} {}",
                dotted_label(label, LABEL_WIDTH),
                binary_with_boundary(bits, prefix)
            )
        })
        .collect()
}

pub fn print_binary(index: usize, address: &Address) {
    let title = if index == 0 {
        format!(">> Network {address}")
    } else {
        format!(">> Subnet {index}: {address}")
    };
    println!("{}", title.bold());
    for line in binary_lines(address) {
        println!("\t{line}");
    }
}
