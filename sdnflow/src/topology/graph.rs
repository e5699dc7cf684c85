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

//! # Topology graph
//!
//! This module contains the [`Topology`], the undirected graph of switches and links, together
//! with the per-link load counters.

use super::types::{Load, NodeId, TopologyError, TopologyGraph};
use crate::routing::path_links;

use log::*;
use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use std::collections::HashMap;

/// # Topology
/// The struct contains the undirected graph of nodes and links. Nodes are identified by a unique
/// name, and referenced by their [`NodeId`]. Every pair of nodes is connected by at most one link,
/// and every link stores its current [`Load`].
///
/// The graph is backed by a `StableGraph`, such that node ids stay valid when other nodes are
/// removed. The id of a removed node may be handed out again to a node added later.
#[derive(Debug, Clone)]
pub struct Topology {
    graph: TopologyGraph,
    names: HashMap<String, NodeId>,
}

impl Default for Topology {
    fn default() -> Self {
        Self::new()
    }
}

impl Topology {
    /// Generate an empty topology
    pub fn new() -> Self {
        Self { graph: TopologyGraph::with_capacity(0, 0), names: HashMap::new() }
    }

    /// Add a new node to the topology, and return its id. The name must be unique.
    pub fn add_node<S: Into<String>>(&mut self, name: S) -> Result<NodeId, TopologyError> {
        let name = name.into();
        if self.names.contains_key(&name) {
            return Err(TopologyError::DuplicateNode(name));
        }
        let node = self.graph.add_node(name.clone());
        debug!("Added node {} as {:?}", name, node);
        self.names.insert(name, node);
        Ok(node)
    }

    /// Remove a node and all of its links from the topology. The name of the removed node is
    /// returned.
    ///
    /// **Warning** This does not update any flow that traverses the node. Use
    /// [`Controller::remove_node`](crate::Controller::remove_node) to keep the flow table and the
    /// link loads consistent.
    pub fn remove_node(&mut self, node: NodeId) -> Result<String, TopologyError> {
        let name = self.graph.remove_node(node).ok_or(TopologyError::NodeNotFound(node))?;
        self.names.remove(&name);
        debug!("Removed node {}", name);
        Ok(name)
    }

    /// Connect two nodes with a new link. The link starts with a load of 0. Links are undirected,
    /// so adding `b -- a` after `a -- b` fails with [`TopologyError::DuplicateEdge`].
    pub fn add_link(&mut self, a: NodeId, b: NodeId) -> Result<(), TopologyError> {
        self.check_node(a)?;
        self.check_node(b)?;
        if a == b {
            return Err(TopologyError::SelfLoop(a));
        }
        if self.graph.find_edge(a, b).is_some() {
            return Err(TopologyError::DuplicateEdge(a, b));
        }
        self.graph.add_edge(a, b, 0);
        Ok(())
    }

    /// Remove the link between two nodes, and return the load it carried at the time of removal.
    pub fn remove_link(&mut self, a: NodeId, b: NodeId) -> Result<Load, TopologyError> {
        let edge = self.graph.find_edge(a, b).ok_or(TopologyError::LinkNotFound(a, b))?;
        self.graph.remove_edge(edge).ok_or(TopologyError::LinkNotFound(a, b))
    }

    /// Returns a copy of the topology, in which all the given links are removed. Links which do
    /// not exist are ignored. The current topology is not changed.
    pub fn without_links<I>(&self, links: I) -> Self
    where
        I: IntoIterator<Item = (NodeId, NodeId)>,
    {
        let mut reduced = self.clone();
        for (a, b) in links {
            let _ = reduced.remove_link(a, b);
        }
        reduced
    }

    /// Returns true if the node exists.
    pub fn has_node(&self, node: NodeId) -> bool {
        self.graph.node_weight(node).is_some()
    }

    /// Returns true if the two nodes are connected by a link (in either direction).
    pub fn has_link(&self, a: NodeId, b: NodeId) -> bool {
        self.graph.find_edge(a, b).is_some()
    }

    /// Returns true if every node and every link along the path exist. An empty path is never
    /// contained in the topology.
    pub fn contains_path(&self, path: &[NodeId]) -> bool {
        !path.is_empty()
            && path.iter().all(|n| self.has_node(*n))
            && path_links(path).all(|(a, b)| self.has_link(a, b))
    }

    /// Returns the current load of the link between `a` and `b`.
    pub fn get_load(&self, a: NodeId, b: NodeId) -> Result<Load, TopologyError> {
        self.graph
            .find_edge(a, b)
            .and_then(|e| self.graph.edge_weight(e))
            .copied()
            .ok_or(TopologyError::LinkNotFound(a, b))
    }

    /// Increment the load of a link by one.
    pub(crate) fn increment_load(&mut self, a: NodeId, b: NodeId) -> Result<(), TopologyError> {
        let load = self
            .graph
            .find_edge(a, b)
            .and_then(|e| self.graph.edge_weight_mut(e))
            .ok_or(TopologyError::LinkNotFound(a, b))?;
        *load += 1;
        Ok(())
    }

    /// Decrement the load of a link by one, but never below 0. Links which no longer exist are
    /// ignored, since their load vanished with them.
    pub(crate) fn decrement_load(&mut self, a: NodeId, b: NodeId) {
        if let Some(load) = self.graph.find_edge(a, b).and_then(|e| self.graph.edge_weight_mut(e))
        {
            *load = load.saturating_sub(1);
        }
    }

    /// Returns the id of the node with the given name.
    pub fn get_node_id(&self, name: impl AsRef<str>) -> Result<NodeId, TopologyError> {
        self.names
            .get(name.as_ref())
            .copied()
            .ok_or_else(|| TopologyError::NodeNameNotFound(name.as_ref().to_string()))
    }

    /// Returns the name of the node with the given id.
    pub fn get_node_name(&self, node: NodeId) -> Result<&str, TopologyError> {
        self.graph.node_weight(node).map(|s| s.as_str()).ok_or(TopologyError::NodeNotFound(node))
    }

    /// Returns all nodes, sorted by their id (i.e., by the order in which they were added).
    pub fn get_nodes(&self) -> Vec<NodeId> {
        let mut nodes: Vec<NodeId> = self.names.values().copied().collect();
        nodes.sort();
        nodes
    }

    /// Returns all neighbors of a node, sorted by their id. Path computations explore neighbors in
    /// this order, which makes them deterministic.
    pub fn neighbors(&self, node: NodeId) -> Result<Vec<NodeId>, TopologyError> {
        self.check_node(node)?;
        let mut neighbors: Vec<NodeId> = self.graph.neighbors(node).collect();
        neighbors.sort();
        neighbors.dedup();
        Ok(neighbors)
    }

    /// Returns all links with their load. Every link is reported once as `(a, b, load)` with
    /// `a < b`, and the list is sorted.
    pub fn links(&self) -> Vec<(NodeId, NodeId, Load)> {
        let mut links: Vec<(NodeId, NodeId, Load)> = self
            .graph
            .edge_references()
            .map(|e| {
                let (a, b) = ordered(e.source(), e.target());
                (a, b, *e.weight())
            })
            .collect();
        links.sort();
        links
    }

    /// Returns the number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of links.
    pub fn num_links(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns a reference to the underlying graph.
    pub fn graph(&self) -> &TopologyGraph {
        &self.graph
    }

    fn check_node(&self, node: NodeId) -> Result<(), TopologyError> {
        if self.has_node(node) {
            Ok(())
        } else {
            Err(TopologyError::NodeNotFound(node))
        }
    }
}

/// Order the two endpoints of an undirected link, such that the smaller id comes first.
pub(crate) fn ordered(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
