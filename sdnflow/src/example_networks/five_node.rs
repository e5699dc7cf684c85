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

//! FiveNode

use super::ExampleNetwork;
use crate::topology::Topology;
use crate::{Controller, Error};

/// # FiveNode
///
/// ```text
/// A ---- C
///  \    /
///   \  /
///    E ---- B
///    |
///    D
/// ```
///
/// The controller starts with the following flows installed:
/// - `A -> B`: neither priority nor critical, routed along `A -> E -> B`
/// - `A -> C`: critical, routed along `A -> C` with backup `A -> E -> C`
/// - `B -> C`: priority, routed along `B -> E -> C`
pub struct FiveNode;

impl ExampleNetwork for FiveNode {
    fn topology() -> Result<Topology, Error> {
        let mut t = Topology::new();

        let a = t.add_node("A")?;
        let b = t.add_node("B")?;
        let c = t.add_node("C")?;
        let d = t.add_node("D")?;
        let e = t.add_node("E")?;

        t.add_link(a, c)?;
        t.add_link(a, e)?;
        t.add_link(b, e)?;
        t.add_link(c, e)?;
        t.add_link(d, e)?;

        Ok(t)
    }

    fn controller() -> Result<Controller, Error> {
        let mut c = Controller::new(Self::topology()?);

        let a = c.get_node_id("A")?;
        let b = c.get_node_id("B")?;
        let dst_c = c.get_node_id("C")?;

        c.install_flow(a, b, false, false)?;
        c.install_flow(a, dst_c, false, true)?;
        c.install_flow(b, dst_c, true, false)?;

        Ok(c)
    }
}
