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

//! # Topology
//!
//! The topology is an undirected graph of switches connected by links. Every link carries a
//! load counter, which is the number of installed flows whose active path traverses it. The
//! load is only ever changed by the [`Controller`](crate::Controller), while the structure of
//! the graph can be edited by adding and removing nodes and links.
//!
//! ```rust
//! use sdnflow::topology::Topology;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut t = Topology::new();
//!     let a = t.add_node("A")?;
//!     let b = t.add_node("B")?;
//!     t.add_link(a, b)?;
//!
//!     assert!(t.has_link(b, a));
//!     assert_eq!(t.get_load(a, b)?, 0);
//!     assert!(t.add_link(b, a).is_err());
//!     Ok(())
//! }
//! ```

mod graph;
mod types;

pub(crate) use graph::ordered;
pub use graph::Topology;
pub use types::{Load, NodeId, Path, TopologyError, TopologyGraph};
