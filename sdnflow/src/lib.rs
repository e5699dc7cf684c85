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

#![deny(missing_docs)]

//! # SdnFlow: Flow Routing and Failure Recovery for Software-Defined Networks
//! This is a library modelling the control plane of a software-defined network. It maintains a
//! topology, installs and removes flows (routes from a source to a destination) according to a
//! routing policy, and reacts to link failures by rerouting or dropping the affected flows.
//!
//! ## Structure
//!
//! This library is structured in the following way:
//!
//! - **[`Topology`](topology)**: Undirected graph of nodes and links, where every link keeps track
//!   of its load (the number of flows routed across it). See the main structure
//!   [`Topology`](topology::Topology).
//!
//! - **[`Routing`](routing)**: Path computations. The [path selector](routing::select_path) picks
//!   the shortest path for priority flows, and the path with the smallest bottleneck load for all
//!   other flows. The [backup planner](routing::compute_backup) computes a link-disjoint
//!   alternative for critical flows.
//!
//! - **[`FlowTable`](flow_table)**: The authoritative state of all installed flows, with at most one
//!   [`FlowRecord`](flow_table::FlowRecord) for every source and destination.
//!
//! - **[`Controller`]**: Owns both the topology and the flow table, and exposes all operations:
//!   installing, removing and querying flows, failing links, and editing the topology. The
//!   controller guarantees that the load of every link always equals the number of flows whose
//!   active path traverses it.
//!
//! - **[`Printer`](printer)**: Formatted strings of paths, flows and links, and a Graphviz
//!   rendering of the topology.
//!
//! - **[`ExampleNetworks`](example_networks)**: Collection of prepared topologies.
//!
//! - **[`TopologyZoo`](topology_zoo)**: Functions to read a topology from a `GML` file downloaded
//!   from [TopologyZoo](http://www.topology-zoo.org/dataset.html).
//!
//! ## Usage
//!
//! ```
//! use sdnflow::{Controller, Error, FlowAction};
//! use sdnflow::flow_table::ActivePath;
//! use sdnflow::topology::Topology;
//!
//! fn main() -> Result<(), Error> {
//!     // prepare the topology
//!     let mut t = Topology::new();
//!     let a = t.add_node("A")?;
//!     let b = t.add_node("B")?;
//!     let c = t.add_node("C")?;
//!     t.add_link(a, b)?;
//!     t.add_link(b, c)?;
//!     t.add_link(a, c)?;
//!
//!     // install a critical flow
//!     let mut controller = Controller::new(t);
//!     let flow = controller.install_flow(a, c, false, true)?;
//!     assert_eq!(flow.primary(), &[a, c]);
//!     assert_eq!(flow.backup(), Some(&[a, b, c][..]));
//!
//!     // fail the link on the primary path
//!     let outcomes = controller.fail_link(a, c)?;
//!     assert_eq!(outcomes[0].action, FlowAction::Rerouted(vec![a, b, c]));
//!     assert_eq!(controller.query_flow(a, c)?.active(), ActivePath::Backup);
//!     assert_eq!(controller.get_load(a, b)?, 1);
//!
//!     Ok(())
//! }
//! ```
// test modules
pub mod example_networks;
mod test;
pub mod topology_zoo;

mod controller;
mod error;
pub mod flow_table;
pub mod printer;
pub mod routing;
pub mod topology;

pub use controller::{Controller, FlowAction, FlowOutcome};
pub use error::Error;
