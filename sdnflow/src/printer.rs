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

//! # Helper (printer) functions for the Controller
//! Module containing helper functions to get formatted strings of paths, flows and links, with the
//! names of the nodes inserted.

use crate::controller::{FlowAction, FlowOutcome};
use crate::flow_table::FlowRecord;
use crate::topology::{NodeId, Topology};

use petgraph::dot::Dot;

/// Returns the name of the node. Unknown nodes are printed with their id.
pub fn node(topo: &Topology, node: NodeId) -> String {
    match topo.get_node_name(node) {
        Ok(name) => name.to_string(),
        Err(_) => format!("{:?}", node),
    }
}

/// Returns the path as a sequence of node names, like `A -> E -> C`.
pub fn path(topo: &Topology, path: &[NodeId]) -> String {
    path.iter().map(|n| node(topo, *n)).collect::<Vec<_>>().join(" -> ")
}

/// Returns a single line describing the flow, its active path selector, and both paths.
pub fn flow(topo: &Topology, flow: &FlowRecord) -> String {
    format!(
        "Flow {src} -> {dst} | Priority: {prio} | Critical: {crit} | Active: {active} | Primary: {primary} | Backup: {backup}",
        src = node(topo, flow.source()),
        dst = node(topo, flow.destination()),
        prio = flow.priority(),
        crit = flow.critical(),
        active = flow.active(),
        primary = path(topo, flow.primary()),
        backup = flow.backup().map(|p| path(topo, p)).unwrap_or_else(|| String::from("None")),
    )
}

/// Returns a single line describing what happened to a flow during a link failure.
pub fn outcome(topo: &Topology, outcome: &FlowOutcome) -> String {
    let src = node(topo, outcome.source);
    let dst = node(topo, outcome.destination);
    match &outcome.action {
        FlowAction::Rerouted(p) => {
            format!("Rerouted {} -> {} to backup path: {}", src, dst, path(topo, p))
        }
        FlowAction::Evicted => format!("Flow {} -> {} removed (no backup available)", src, dst),
    }
}

/// Get a vector of strings, one for each link of the topology, with its current load.
pub fn links(topo: &Topology) -> Vec<String> {
    topo.links()
        .into_iter()
        .map(|(a, b, load)| format!("{} -- {}: load {}", node(topo, a), node(topo, b), load))
        .collect()
}

/// Render the topology in the Graphviz DOT format. Nodes are labelled with their name, and links
/// with their current load.
pub fn dot(topo: &Topology) -> String {
    format!("{}", Dot::new(topo.graph()))
}
