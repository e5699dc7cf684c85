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

//! # Routing
//!
//! This module contains all path computations of the controller:
//!
//! - **[`ShortestSimplePaths`]**: Enumerates all simple paths between two nodes in non-decreasing
//!   order of their length (Yen's algorithm on top of `petgraph::algo::dijkstra`).
//! - **[`select_path`]**: The routing policy. Priority flows always take the shortest path, while
//!   all other flows take the path with the smallest [bottleneck load](bottleneck_load).
//! - **[`compute_backup`]**: Computes a backup path, which shares no link with the primary path.
//!
//! All computations are pure queries on the [`Topology`]; none of them changes the topology.
//!
//! Paths are compared by hop count only. Whenever two shortest paths are equally long, the one
//! with the lexicographically smallest sequence of [`NodeId`]s wins, and Yen's algorithm keeps
//! equally long candidates in the order they were found. Hence, every computation is
//! deterministic for a given topology.

mod backup;
mod k_shortest;
mod selector;

pub use backup::compute_backup;
pub use k_shortest::ShortestSimplePaths;
pub use selector::{bottleneck_load, select_path};

use crate::topology::{Load, NodeId, Path, Topology};

use itertools::Itertools;
use petgraph::algo::dijkstra;
use petgraph::stable_graph::EdgeReference;
use petgraph::visit::{EdgeFiltered, EdgeRef, IntoNeighbors};
use std::collections::{HashMap, HashSet};

/// Iterate over all links along the path, as pairs of consecutive nodes.
pub fn path_links(path: &[NodeId]) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
    path.iter().copied().tuple_windows()
}

/// Returns true if the path traverses the link between `a` and `b`, in either direction.
pub fn contains_link(path: &[NodeId], a: NodeId, b: NodeId) -> bool {
    path_links(path).any(|(x, y)| (x == a && y == b) || (x == b && y == a))
}

/// Returns the shortest path (by hop count) from `source` to `target`, or `None` if the two nodes
/// are not connected, or one of them does not exist.
pub fn shortest_path(topo: &Topology, source: NodeId, target: NodeId) -> Option<Path> {
    shortest_path_avoiding(topo, source, target, &HashSet::new(), &HashSet::new())
}

/// Shortest path from `source` to `target` which does not visit any of the `banned_nodes`, and
/// does not use any of the `banned_links`. Links in `banned_links` must be stored with the smaller
/// id first (see [`link_key`]).
///
/// The hop distance of every node towards `target` is computed with [`dijkstra`] on a filtered
/// view of the topology. The path is then built starting at `source`, by always stepping to the
/// neighbor with the smallest id which is one hop closer to `target`. Among all shortest paths,
/// the one with the lexicographically smallest sequence of node ids is returned.
pub(crate) fn shortest_path_avoiding(
    topo: &Topology,
    source: NodeId,
    target: NodeId,
    banned_nodes: &HashSet<NodeId>,
    banned_links: &HashSet<(NodeId, NodeId)>,
) -> Option<Path> {
    if !topo.has_node(source)
        || !topo.has_node(target)
        || banned_nodes.contains(&source)
        || banned_nodes.contains(&target)
    {
        return None;
    }

    let view = EdgeFiltered::from_fn(topo.graph(), |e: EdgeReference<Load>| {
        !banned_nodes.contains(&e.source())
            && !banned_nodes.contains(&e.target())
            && !banned_links.contains(&link_key(e.source(), e.target()))
    });
    let distance: HashMap<NodeId, usize> = dijkstra(&view, target, None, |_| 1);

    let mut remaining = *distance.get(&source)?;
    let mut path = vec![source];
    let mut current = source;
    while remaining > 0 {
        remaining -= 1;
        current = (&view)
            .neighbors(current)
            .filter(|n| distance.get(n) == Some(&remaining))
            .min()?;
        path.push(current);
    }

    Some(path)
}

/// Key of an undirected link, with the smaller id first.
pub(crate) fn link_key(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    crate::topology::ordered(a, b)
}
