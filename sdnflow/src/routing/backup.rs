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

//! Backup path computation

use super::{path_links, shortest_path};
use crate::topology::{NodeId, Path, Topology};

/// Compute a backup path for the given primary path. The backup path connects the same two
/// endpoints, but does not share any link with the primary path. It may still visit the same
/// nodes.
///
/// The backup is computed on a transient copy of the topology without the links of the primary
/// path, and is the shortest path (by hop count) in this reduced topology. Link loads are not
/// considered. `None` is returned if the endpoints are disconnected without the primary links, or
/// if the primary path is empty.
pub fn compute_backup(topo: &Topology, primary: &[NodeId]) -> Option<Path> {
    let source = *primary.first()?;
    let target = *primary.last()?;
    let reduced = topo.without_links(path_links(primary));
    shortest_path(&reduced, source, target)
}
