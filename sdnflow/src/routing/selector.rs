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

//! Path selection policy

use super::{path_links, ShortestSimplePaths};
use crate::topology::{Load, NodeId, Path, Topology};

use log::*;
use std::num::NonZeroUsize;

/// Select the path for a new flow from `source` to `target`.
///
/// - If `priority` is set, the first (shortest) path is returned. Priority flows never consider
///   the load on the network.
/// - Otherwise, all simple paths are enumerated (at most `limit` of them, if given), and the one
///   with the smallest [bottleneck load](bottleneck_load) is returned. If multiple paths have the
///   same bottleneck load, the first one in enumeration order (i.e., the shortest) is chosen.
///
/// `None` is returned if no path exists, or if one of the two nodes is not part of the topology.
pub fn select_path(
    topo: &Topology,
    source: NodeId,
    target: NodeId,
    priority: bool,
    limit: Option<NonZeroUsize>,
) -> Option<Path> {
    let mut paths = ShortestSimplePaths::new(topo, source, target);
    if priority {
        return paths.next();
    }

    let mut best: Option<(Load, Path)> = None;
    for path in paths.take(limit.map_or(usize::MAX, NonZeroUsize::get)) {
        let cost = bottleneck_load(topo, &path);
        trace!("candidate path {:?} with bottleneck load {}", path, cost);
        if best.as_ref().map_or(true, |(best_cost, _)| cost < *best_cost) {
            best = Some((cost, path));
        }
        // nothing can beat an unloaded path
        if cost == 0 {
            break;
        }
    }

    best.map(|(_, path)| path)
}

/// Returns the bottleneck load of the path, which is the largest load of any link along the path.
/// Links which do not exist are ignored, and a path without any link has a bottleneck load of 0.
pub fn bottleneck_load(topo: &Topology, path: &[NodeId]) -> Load {
    path_links(path).filter_map(|(a, b)| topo.get_load(a, b).ok()).max().unwrap_or(0)
}
