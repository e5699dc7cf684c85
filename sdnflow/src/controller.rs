// SdnFlow: Flow Routing and Failure Recovery for Software-Defined Networks
// Copyright (C) 2021  Tibor Schneider
//
// This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation; either version 2 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along
// with this program; if not, write to the Free Software Foundation, Inc.,
// 51 Franklin Street, Fifth Floor, Boston, MA 02110-1301 USA.

//! # Controller
//!
//! The controller owns the [`Topology`] and the [`FlowTable`], and is the only place where link
//! loads and flow records are changed. Every operation runs to completion before the next one
//! starts, and either succeeds or leaves both the topology and the flow table unchanged.

use crate::error::Error;
use crate::flow_table::{FlowKey, FlowRecord, FlowTable};
use crate::printer;
use crate::routing::{compute_backup, contains_link, path_links, select_path};
use crate::topology::{Load, NodeId, Path, Topology};

use log::*;
use std::collections::HashMap;
use std::num::NonZeroUsize;

/// What happened to a flow affected by a link failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowAction {
    /// The flow was switched to its backup path, which is given here.
    Rerouted(Path),
    /// The flow was removed from the flow table.
    Evicted,
}

/// Outcome for a single flow affected by a link failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowOutcome {
    /// Source of the affected flow
    pub source: NodeId,
    /// Destination of the affected flow
    pub destination: NodeId,
    /// What happened to the flow
    pub action: FlowAction,
}

/// # Controller
///
/// The struct contains the topology and all installed flows. The link loads of the topology are
/// always kept consistent with the flow table: the load of every link equals the number of flows
/// whose *active* path traverses it.
///
/// ## Installing a flow
/// The path of a new flow is chosen by [`select_path`]. If the flow is critical, a link-disjoint
/// backup path is computed by [`compute_backup`]. A critical flow without any disjoint alternative
/// is still installed, just without a backup. Then, the load of every link on the primary path is
/// incremented. A flow can only be installed once for every `(source, destination)` pair. To
/// change a flow, remove it first.
///
/// ## Link failures
/// When a link fails, it is removed from the topology first. Then, every flow whose active path
/// used this link is handled, in the order in which the flows were installed:
///
/// 1. The load on all remaining links of its active path is decremented.
/// 2. If the flow is critical, still on its primary path, and its backup path is intact, the flow
///    is switched to the backup path and the load on the backup path is incremented.
/// 3. Otherwise, the flow is evicted from the flow table.
///
/// Flows still on their primary path whose backup path used the failed link lose their backup.
/// It is never restored, even if the link is added again.
///
/// A flow is never switched back to its primary path.
#[derive(Debug, Clone, Default)]
pub struct Controller {
    topology: Topology,
    flows: FlowTable,
    path_limit: Option<NonZeroUsize>,
}

impl Controller {
    /// Create a new controller managing the given topology, without any flows installed. All loads
    /// of the topology are reset to 0.
    pub fn new(mut topology: Topology) -> Self {
        for (a, b, load) in topology.links() {
            for _ in 0..load {
                topology.decrement_load(a, b);
            }
        }
        Self { topology, flows: FlowTable::new(), path_limit: None }
    }

    /// Returns a reference to the topology.
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Returns a reference to the flow table.
    pub fn flows(&self) -> &FlowTable {
        &self.flows
    }

    /// Limit the number of candidate paths that are compared when selecting the path for a
    /// non-priority flow. `None` (the default) compares all simple paths.
    pub fn set_path_limit(&mut self, limit: Option<NonZeroUsize>) {
        self.path_limit = limit;
    }

    /// Returns the current limit on candidate paths.
    pub fn path_limit(&self) -> Option<NonZeroUsize> {
        self.path_limit
    }

    /// Returns the id of the node with the given name.
    pub fn get_node_id(&self, name: impl AsRef<str>) -> Result<NodeId, Error> {
        Ok(self.topology.get_node_id(name)?)
    }

    /// Returns the load of the link between `a` and `b`.
    pub fn get_load(&self, a: NodeId, b: NodeId) -> Result<Load, Error> {
        Ok(self.topology.get_load(a, b)?)
    }

    /// Add a new node to the topology.
    pub fn add_node<S: Into<String>>(&mut self, name: S) -> Result<NodeId, Error> {
        Ok(self.topology.add_node(name)?)
    }

    /// Add a new link with load 0 to the topology. Existing flows are not rerouted onto it.
    pub fn add_link(&mut self, a: NodeId, b: NodeId) -> Result<(), Error> {
        self.topology.add_link(a, b)?;
        info!("Added link {} -- {}", self.name(a), self.name(b));
        Ok(())
    }

    /// Remove a node from the topology. All links of the node are failed first (see
    /// [`Controller::fail_link`]), and the outcome for all affected flows is returned. Flows whose
    /// backup path visits the node therefore lose their backup path, even if a later node gets
    /// the same id.
    pub fn remove_node(&mut self, node: NodeId) -> Result<Vec<FlowOutcome>, Error> {
        let neighbors = self.topology.neighbors(node)?;
        info!("Removing node {} with {} links", self.name(node), neighbors.len());
        let mut outcomes = Vec::new();
        for neighbor in neighbors {
            outcomes.extend(self.fail_link(node, neighbor)?);
        }
        self.topology.remove_node(node)?;
        Ok(outcomes)
    }

    /// Install a new flow from `source` to `destination`, and return the installed record.
    ///
    /// If no path can be found, [`Error::NoPathFound`] is returned and nothing is changed. If a
    /// flow is already installed for this pair, [`Error::FlowAlreadyExists`] is returned.
    pub fn install_flow(
        &mut self,
        source: NodeId,
        destination: NodeId,
        priority: bool,
        critical: bool,
    ) -> Result<&FlowRecord, Error> {
        if !self.topology.has_node(source) || !self.topology.has_node(destination) {
            return Err(Error::NoPathFound(source, destination));
        }
        if source == destination {
            return Err(Error::SameEndpoints(source));
        }
        let key: FlowKey = (source, destination);
        if self.flows.contains(key) {
            return Err(Error::FlowAlreadyExists(source, destination));
        }

        let selected = select_path(&self.topology, source, destination, priority, self.path_limit);
        let primary = match selected {
            Some(path) => path,
            None => {
                warn!(
                    "Failed to find a path for {} -> {}",
                    self.name(source),
                    self.name(destination)
                );
                return Err(Error::NoPathFound(source, destination));
            }
        };

        let backup = if critical {
            let backup = compute_backup(&self.topology, &primary);
            if backup.is_none() {
                info!(
                    "No link-disjoint backup for {} -> {}",
                    self.name(source),
                    self.name(destination)
                );
            }
            backup
        } else {
            None
        };

        let record = FlowRecord::new(priority, critical, primary.clone(), backup)
            .ok_or(Error::NoPathFound(source, destination))?;
        self.flows.insert(record).map_err(|_| Error::FlowAlreadyExists(source, destination))?;
        for (a, b) in path_links(&primary) {
            self.topology.increment_load(a, b)?;
        }
        info!(
            "Installed flow {} -> {} on {}",
            self.name(source),
            self.name(destination),
            printer::path(&self.topology, &primary)
        );
        debug_assert!(self.is_consistent());

        self.flows.get(key).ok_or(Error::FlowNotFound(source, destination))
    }

    /// Remove the flow from `source` to `destination`, and release the load on its active path.
    /// The removed record is returned.
    pub fn remove_flow(&mut self, source: NodeId, destination: NodeId) -> Result<FlowRecord, Error> {
        let record = self
            .flows
            .remove((source, destination))
            .ok_or(Error::FlowNotFound(source, destination))?;
        for (a, b) in path_links(record.active_path()) {
            self.topology.decrement_load(a, b);
        }
        info!("Flow from {} to {} removed", self.name(source), self.name(destination));
        debug_assert!(self.is_consistent());
        Ok(record)
    }

    /// Fail the link between `a` and `b`. The link is removed from the topology, and every flow
    /// whose active path used the link is either rerouted onto its backup path, or evicted. The
    /// outcome of every affected flow is returned, in table order.
    ///
    /// If the link does not exist, the [topology error](crate::topology::TopologyError)
    /// `LinkNotFound` is returned and nothing is changed.
    pub fn fail_link(&mut self, a: NodeId, b: NodeId) -> Result<Vec<FlowOutcome>, Error> {
        let carried = self.topology.remove_link(a, b)?;
        info!("Failing link {} -- {} (carrying {} flows)", self.name(a), self.name(b), carried);

        // a backup that lost a link stays unusable, even if the link (or a node with the same id)
        // is added again later
        let stale: Vec<FlowKey> = self
            .flows
            .iter()
            .filter(|f| !f.is_rerouted() && f.backup().map_or(false, |p| contains_link(p, a, b)))
            .map(|f| f.key())
            .collect();
        for key in stale {
            if let Some(flow) = self.flows.get_mut(key) {
                flow.discard_backup();
            }
            info!("Backup of flow {} -> {} discarded", self.name(key.0), self.name(key.1));
        }

        let affected: Vec<FlowKey> =
            self.flows.iter().filter(|f| f.traverses(a, b)).map(|f| f.key()).collect();

        let mut outcomes = Vec::with_capacity(affected.len());
        for key in affected {
            let (source, destination) = key;
            let flow = match self.flows.get_mut(key) {
                Some(flow) => flow,
                None => continue,
            };

            for (x, y) in path_links(flow.active_path()) {
                self.topology.decrement_load(x, y);
            }

            // a backup that lost a link since it was computed cannot carry the flow
            let backup_intact = match flow.backup() {
                Some(path) => self.topology.contains_path(path),
                None => false,
            };
            let rerouted = if backup_intact { flow.promote().map(|p| p.to_vec()) } else { None };

            let action = match rerouted {
                Some(path) => {
                    for (x, y) in path_links(&path) {
                        self.topology.increment_load(x, y)?;
                    }
                    info!(
                        "Rerouted {} -> {} to backup path {}",
                        self.name(source),
                        self.name(destination),
                        printer::path(&self.topology, &path)
                    );
                    FlowAction::Rerouted(path)
                }
                None => {
                    self.flows.remove(key);
                    info!(
                        "Flow {} -> {} removed (no backup available)",
                        self.name(source),
                        self.name(destination)
                    );
                    FlowAction::Evicted
                }
            };
            outcomes.push(FlowOutcome { source, destination, action });
        }

        debug_assert!(self.is_consistent());
        Ok(outcomes)
    }

    /// Returns a snapshot of the flow from `source` to `destination`.
    pub fn query_flow(&self, source: NodeId, destination: NodeId) -> Result<FlowRecord, Error> {
        self.flows
            .get((source, destination))
            .cloned()
            .ok_or(Error::FlowNotFound(source, destination))
    }

    /// Compute the load of every link from the flow table, i.e., the number of flows whose active
    /// path traverses the link. Links are keyed with the smaller id first, and links without any
    /// flow are omitted.
    pub fn expected_loads(&self) -> HashMap<(NodeId, NodeId), Load> {
        let mut loads: HashMap<(NodeId, NodeId), Load> = HashMap::new();
        for flow in self.flows.iter() {
            for (a, b) in path_links(flow.active_path()) {
                *loads.entry(crate::topology::ordered(a, b)).or_insert(0) += 1;
            }
        }
        loads
    }

    /// Returns true if the load of every link equals the number of flows whose active path
    /// traverses it, and every active path only uses existing links.
    pub fn is_consistent(&self) -> bool {
        let mut expected = self.expected_loads();
        for (a, b, load) in self.topology.links() {
            if expected.remove(&(a, b)).unwrap_or(0) != load {
                return false;
            }
        }
        expected.is_empty()
    }

    fn name(&self, node: NodeId) -> String {
        printer::node(&self.topology, node)
    }
}
