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

//! Enumeration of simple paths in non-decreasing order of their length.

use super::{link_key, shortest_path, shortest_path_avoiding};
use crate::topology::{NodeId, Path, Topology};

use std::collections::HashSet;

/// # Shortest simple paths
///
/// Iterator over all simple paths from a source to a target node, in non-decreasing order of
/// their length (number of hops). Paths are generated lazily using Yen's algorithm:
///
/// 1. The first path is the shortest path, computed with `petgraph::algo::dijkstra`.
/// 2. To find the next path, every node of the previously found path is used once as *spur node*.
///    The part of the previous path before the spur node is the *root path*. We then search the
///    shortest path from the spur node to the target, without visiting any node of the root path,
///    and without using any link that leaves the spur node along an already found path sharing the
///    same root path. The root path together with this spur path is a new candidate.
/// 3. The shortest candidate is the next path. Among equally long candidates, the one found first
///    is chosen.
///
/// The iterator yields nothing if the source or the target does not exist, or if they are not
/// connected.
///
/// ```rust
/// use sdnflow::routing::ShortestSimplePaths;
/// use sdnflow::topology::Topology;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let mut t = Topology::new();
///     let a = t.add_node("A")?;
///     let b = t.add_node("B")?;
///     let c = t.add_node("C")?;
///     t.add_link(a, b)?;
///     t.add_link(b, c)?;
///     t.add_link(a, c)?;
///
///     let paths: Vec<_> = ShortestSimplePaths::new(&t, a, c).collect();
///     assert_eq!(paths, vec![vec![a, c], vec![a, b, c]]);
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct ShortestSimplePaths<'a> {
    topo: &'a Topology,
    source: NodeId,
    target: NodeId,
    found: Vec<Path>,
    candidates: Vec<Path>,
    exhausted: bool,
}

impl<'a> ShortestSimplePaths<'a> {
    /// Prepare the enumeration of all simple paths from `source` to `target`.
    pub fn new(topo: &'a Topology, source: NodeId, target: NodeId) -> Self {
        Self { topo, source, target, found: Vec::new(), candidates: Vec::new(), exhausted: false }
    }

    /// Add all candidates deviating from the most recently found path.
    fn extend_candidates(&mut self) {
        let prev = match self.found.last() {
            Some(p) => p.clone(),
            None => return,
        };

        for i in 0..prev.len().saturating_sub(1) {
            let spur = prev[i];
            let root = &prev[..=i];

            let banned_links: HashSet<(NodeId, NodeId)> = self
                .found
                .iter()
                .filter(|p| p.len() > i + 1 && &p[..=i] == root)
                .map(|p| link_key(p[i], p[i + 1]))
                .collect();
            let banned_nodes: HashSet<NodeId> = prev[..i].iter().copied().collect();

            if let Some(spur_path) =
                shortest_path_avoiding(self.topo, spur, self.target, &banned_nodes, &banned_links)
            {
                let mut candidate: Path = prev[..i].to_vec();
                candidate.extend(spur_path);
                if !self.found.contains(&candidate) && !self.candidates.contains(&candidate) {
                    self.candidates.push(candidate);
                }
            }
        }
    }

    /// Take the shortest candidate. Ties are broken by the order in which they were found.
    fn pop_candidate(&mut self) -> Option<Path> {
        let shortest = self.candidates.iter().map(|p| p.len()).min()?;
        let pos = self.candidates.iter().position(|p| p.len() == shortest)?;
        Some(self.candidates.remove(pos))
    }
}

impl<'a> Iterator for ShortestSimplePaths<'a> {
    type Item = Path;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let next = if self.found.is_empty() {
            shortest_path(self.topo, self.source, self.target)
        } else {
            self.extend_candidates();
            self.pop_candidate()
        };

        match next {
            Some(path) => {
                self.found.push(path.clone());
                Some(path)
            }
            None => {
                self.exhausted = true;
                None
            }
        }
    }
}
