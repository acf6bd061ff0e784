//! Variable-length subnet allocation.
//!
//! Requests are rounded up to power-of-two blocks, kept largest first and
//! laid out back to back from the parent's network address.

use crate::error::PlanError;
use crate::models::{power, Address, ADDRESS_BITS};
use serde::Serialize;
use std::cmp::Reverse;
use std::net::Ipv4Addr;

/// An accepted request for a subnet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubnetRequest {
    /// Host count as asked for.
    pub requested: u64,
    /// Committed block size, `2^k` addresses including network and broadcast.
    pub hosts: u64,
    /// Prefix length of the block, `32 - k`.
    pub mask_bits: u32,
}

impl SubnetRequest {
    /// Round `hosts` up to the smallest block `2^k` with `hosts <= 2^k - 2`.
    ///
    /// Returns `None` when not even a /0 block is large enough.
    pub fn for_hosts(hosts: u64) -> Option<SubnetRequest> {
        (0..=ADDRESS_BITS)
            .map(|k| (k, power(2, k)))
            .find(|(_, block)| hosts.saturating_add(2) <= *block)
            .map(|(k, block)| SubnetRequest {
                requested: hosts,
                hosts: block,
                mask_bits: ADDRESS_BITS - k,
            })
    }
}

/// Parent capacity that no child claimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UnreservedRange {
    pub start: Ipv4Addr,
    pub end: Ipv4Addr,
}

/// Result of [`Planner::plan`].
#[derive(Debug, Clone)]
pub struct SubnetPlan {
    addresses: Vec<Address>,
    requests: Vec<SubnetRequest>,
    unreserved: Option<UnreservedRange>,
    total_hosts_committed: u64,
}

impl SubnetPlan {
    /// Parent at index 0, then one child per request in request order.
    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    pub fn into_addresses(self) -> Vec<Address> {
        self.addresses
    }

    pub fn parent(&self) -> &Address {
        &self.addresses[0]
    }

    pub fn children(&self) -> &[Address] {
        &self.addresses[1..]
    }

    pub fn requests(&self) -> &[SubnetRequest] {
        &self.requests
    }

    /// `None` when the children fill the whole parent.
    pub fn unreserved(&self) -> Option<&UnreservedRange> {
        self.unreserved.as_ref()
    }

    pub fn hosts_assigned(&self) -> u64 {
        self.total_hosts_committed
    }

    pub fn hosts_left(&self) -> u64 {
        self.parent()
            .capacity()
            .saturating_sub(self.total_hosts_committed)
    }
}

/// Collects subnet requests against one parent network and lays them out.
#[derive(Debug, Clone)]
pub struct Planner {
    parent: Address,
    /// Sorted by block size, largest first; equal sizes keep insertion order.
    requests: Vec<SubnetRequest>,
    total_hosts_committed: u64,
}

impl Planner {
    pub fn new(parent: Address) -> Planner {
        Planner {
            parent,
            requests: Vec::new(),
            total_hosts_committed: 0,
        }
    }

    pub fn parent(&self) -> &Address {
        &self.parent
    }

    /// Accepted requests in the order they will be allocated.
    pub fn requests(&self) -> &[SubnetRequest] {
        &self.requests
    }

    pub fn total_hosts_committed(&self) -> u64 {
        self.total_hosts_committed
    }

    /// Parent addresses not yet committed to a request.
    pub fn hosts_left(&self) -> u64 {
        self.parent
            .capacity()
            .saturating_sub(self.total_hosts_committed)
    }

    /// Request a subnet for `hosts` hosts.
    ///
    /// On error nothing is recorded.
    pub fn add(&mut self, hosts: u64) -> Result<SubnetRequest, PlanError> {
        if hosts == 0 {
            return Err(PlanError::ZeroHosts);
        }
        let left = self.hosts_left();
        let request = SubnetRequest::for_hosts(hosts).ok_or(PlanError::Capacity {
            requested: hosts,
            block: hosts.saturating_add(2),
            left,
        })?;
        if request.hosts > left {
            log::warn!(
                "Rejected {hosts} hosts: block of {} exceeds {left} addresses left in {}",
                request.hosts,
                self.parent
            );
            return Err(PlanError::Capacity {
                requested: hosts,
                block: request.hosts,
                left,
            });
        }

        self.requests.push(request);
        self.requests.sort_by_key(|r| Reverse(r.hosts));
        self.total_hosts_committed += request.hosts;
        log::info!(
            "Added {hosts} hosts as /{} ({} addresses), {} left",
            request.mask_bits,
            request.hosts,
            self.hosts_left()
        );
        Ok(request)
    }

    /// Remove the request at 1-based `index` of [`Planner::requests`].
    pub fn remove(&mut self, index: usize) -> Result<SubnetRequest, PlanError> {
        if index == 0 || index > self.requests.len() {
            return Err(PlanError::Index {
                index,
                len: self.requests.len(),
            });
        }
        let removed = self.requests.remove(index - 1);
        self.total_hosts_committed -= removed.hosts;
        log::info!(
            "Removed subnet {index} of {} hosts, {} left",
            removed.requested,
            self.hosts_left()
        );
        Ok(removed)
    }

    /// Drop every request.
    pub fn clear(&mut self) {
        self.requests.clear();
        self.total_hosts_committed = 0;
    }

    /// Lay out the requested subnets inside the parent.
    ///
    /// The first child starts at the parent's network address; every further
    /// child starts right after the block of the one before it.
    pub fn plan(&self) -> Result<SubnetPlan, PlanError> {
        if self.requests.is_empty() {
            return Err(PlanError::NoRequests);
        }
        log::info!(
            "Planning {} subnet(s) in {}",
            self.requests.len(),
            self.parent
        );

        let mut addresses = vec![self.parent.clone()];
        for (i, request) in self.requests.iter().enumerate() {
            let base = if i == 0 {
                self.parent.network()
            } else {
                next_network(&addresses[i], self.requests[i - 1].hosts)?
            };
            let mut child = Address::new();
            child.set_prefix_length(request.mask_bits);
            child.set_octets(base);
            log::debug!("Subnet {}: {child}", i + 1);
            addresses.push(child);
        }
        for address in &addresses {
            address.configure();
        }

        let unreserved = match (addresses.last(), self.requests.last()) {
            (Some(last), Some(request)) if self.hosts_left() > 0 => Some(UnreservedRange {
                start: next_network(last, request.hosts)?,
                end: self.parent.broadcast(),
            }),
            _ => None,
        };

        Ok(SubnetPlan {
            addresses,
            requests: self.requests.clone(),
            unreserved,
            total_hosts_committed: self.total_hosts_committed,
        })
    }
}

fn next_network(previous: &Address, hosts: u64) -> Result<Ipv4Addr, PlanError> {
    previous.follow(hosts).ok_or(PlanError::Overflow {
        base: previous.address(),
        offset: hosts,
    })
}
