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

//! Module containing all error types

use crate::topology::{NodeId, TopologyError};
use crate::topology_zoo::GmlError;
use thiserror::Error;

/// Main error type
#[derive(Debug, Error)]
pub enum Error {
    /// Error propagated from the topology
    #[error("Topology Error: {0}")]
    Topology(#[from] TopologyError),
    /// No path exists between the two nodes, or one of them is not part of the topology
    #[error("No path found from {0:?} to {1:?}")]
    NoPathFound(NodeId, NodeId),
    /// No flow is installed for the given source and destination
    #[error("No flow installed from {0:?} to {1:?}")]
    FlowNotFound(NodeId, NodeId),
    /// A flow is already installed for the given source and destination. It must be removed before
    /// it can be installed again.
    #[error("Flow from {0:?} to {1:?} is already installed")]
    FlowAlreadyExists(NodeId, NodeId),
    /// Source and destination of a flow must be different
    #[error("Source and destination of a flow are the same: {0:?}")]
    SameEndpoints(NodeId),
    /// Error while reading a topology from a GML file
    #[error("Cannot parse GML file: {0}")]
    GmlError(#[from] GmlError),
}
