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

//! Module containing all type definitions

use petgraph::prelude::*;
use petgraph::stable_graph::StableGraph;
use thiserror::Error;

type IndexType = u32;
/// Node (switch) identification, and index into the graph
pub type NodeId = NodeIndex<IndexType>;
/// Number of active flows routed across a link
pub type Load = usize;
/// A path through the topology, given as the sequence of nodes it visits
pub type Path = Vec<NodeId>;
/// Undirected topology graph. Nodes carry their name, and links carry their current load.
pub type TopologyGraph = StableGraph<String, Load, Undirected, IndexType>;

/// Topology Errors
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum TopologyError {
    /// Node is not present in the topology
    #[error("Node was not found in topology: {0:?}")]
    NodeNotFound(NodeId),
    /// Node name is not present in the topology
    #[error("Node name was not found in topology: {0}")]
    NodeNameNotFound(String),
    /// A node with the same name already exists
    #[error("Node already exists: {0}")]
    DuplicateNode(String),
    /// The two nodes are already connected
    #[error("Link already exists: {0:?} -- {1:?}")]
    DuplicateEdge(NodeId, NodeId),
    /// The two nodes are not adjacent
    #[error("Link does not exist: {0:?} -- {1:?}")]
    LinkNotFound(NodeId, NodeId),
    /// A link must connect two different nodes
    #[error("Cannot connect node {0:?} to itself")]
    SelfLoop(NodeId),
}
