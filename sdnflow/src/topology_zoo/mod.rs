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

//! # Topology Zoo
//!
//! Functions to generate a [`Topology`](crate::topology::Topology) from a topology downloaded
//! from [TopologyZoo](http://www.topology-zoo.org/dataset.html) (as `GML` files). Only the
//! structure of the graph is read. All links start without load.

mod gml_parser;

pub use gml_parser::{parse_gml_str, parse_gml_topology, GmlError};
