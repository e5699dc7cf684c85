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

//! Diamond

use super::ExampleNetwork;
use crate::topology::Topology;
use crate::Error;

/// # Diamond
///
/// Two link-disjoint paths of equal length between `S` and `T`.
///
/// ```text
///      A
///    /   \
///   S     T
///    \   /
///      B
/// ```
pub struct Diamond;

impl ExampleNetwork for Diamond {
    fn topology() -> Result<Topology, Error> {
        let mut t = Topology::new();

        let s = t.add_node("S")?;
        let a = t.add_node("A")?;
        let b = t.add_node("B")?;
        let d = t.add_node("T")?;

        t.add_link(s, a)?;
        t.add_link(a, d)?;
        t.add_link(s, b)?;
        t.add_link(b, d)?;

        Ok(t)
    }
}
