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

//! Ring

use super::ExampleNetwork;
use crate::topology::Topology;
use crate::Error;

/// Number of nodes in the ring
const RING_SIZE: usize = 6;

/// # Ring
///
/// Six nodes `N0` to `N5`, where every node is connected to its two neighbors.
///
/// ```text
///    N0 ---- N1
///   /          \
/// N5            N2
///   \          /
///    N4 ---- N3
/// ```
pub struct Ring;

impl ExampleNetwork for Ring {
    fn topology() -> Result<Topology, Error> {
        let mut t = Topology::new();

        let nodes = (0..RING_SIZE)
            .map(|i| t.add_node(format!("N{}", i)))
            .collect::<Result<Vec<_>, _>>()?;

        for i in 0..RING_SIZE {
            t.add_link(nodes[i], nodes[(i + 1) % RING_SIZE])?;
        }

        Ok(t)
    }
}
