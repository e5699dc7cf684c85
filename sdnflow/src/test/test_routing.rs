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

//! Test the path selection, the enumeration of simple paths, and the backup planner.

use crate::example_networks::{Diamond, ExampleNetwork, FiveNode, Ring};
use crate::routing::*;
use crate::topology::{NodeId, Path, Topology};
use crate::Controller;
use lazy_static::lazy_static;
use maplit::hashset;
use std::collections::HashSet;
use std::num::NonZeroUsize;

lazy_static! {
    static ref A: NodeId = 0.into();
    static ref B: NodeId = 1.into();
    static ref C: NodeId = 2.into();
    static ref D: NodeId = 3.into();
    static ref E: NodeId = 4.into();
    static ref N: Vec<NodeId> = (0..6u32).map(|i| i.into()).collect();
}

/// # Grid
///
/// ```text
/// 0 ---- 1 ---- 2
/// |      |      |
/// 3 ---- 4 ---- 5
/// ```
fn get_grid() -> (Topology, Vec<NodeId>) {
    let mut t = Topology::new();
    let n: Vec<NodeId> = (0..6).map(|i| t.add_node(format!("G{}", i)).unwrap()).collect();
    t.add_link(n[0], n[1]).unwrap();
    t.add_link(n[1], n[2]).unwrap();
    t.add_link(n[0], n[3]).unwrap();
    t.add_link(n[1], n[4]).unwrap();
    t.add_link(n[2], n[5]).unwrap();
    t.add_link(n[3], n[4]).unwrap();
    t.add_link(n[4], n[5]).unwrap();
    (t, n)
}

fn shares_link(a: &[NodeId], b: &[NodeId]) -> bool {
    path_links(a).any(|(x, y)| contains_link(b, x, y))
}

#[test]
fn test_path_links() {
    let links: Vec<_> = path_links(&[*A, *E, *C]).collect();
    assert_eq!(links, vec![(*A, *E), (*E, *C)]);
    assert_eq!(path_links(&[*A]).count(), 0);

    assert!(contains_link(&[*A, *E, *C], *E, *A));
    assert!(contains_link(&[*A, *E, *C], *C, *E));
    assert!(!contains_link(&[*A, *E, *C], *A, *C));
}

#[test]
fn test_shortest_path() {
    let t = FiveNode::topology().unwrap();

    assert_eq!(shortest_path(&t, *B, *C), Some(vec![*B, *E, *C]));
    assert_eq!(shortest_path(&t, *A, *C), Some(vec![*A, *C]));
    assert_eq!(shortest_path(&t, *D, *A), Some(vec![*D, *E, *A]));
    assert_eq!(shortest_path(&t, *D, *D), Some(vec![*D]));
    assert_eq!(shortest_path(&t, *A, 10.into()), None);
}

#[test]
fn test_shortest_path_disconnected() {
    let mut t = FiveNode::topology().unwrap();
    let f = t.add_node("F").unwrap();
    assert_eq!(shortest_path(&t, *A, f), None);
    assert_eq!(ShortestSimplePaths::new(&t, *A, f).count(), 0);
}

#[test]
fn test_shortest_path_avoiding() {
    let (t, n) = get_grid();
    let none = HashSet::new();
    let no_links = HashSet::new();

    // among equally short paths, the smallest sequence of ids wins
    assert_eq!(shortest_path(&t, n[0], n[5]), Some(vec![n[0], n[1], n[2], n[5]]));
    assert_eq!(shortest_path(&t, n[5], n[0]), Some(vec![n[5], n[2], n[1], n[0]]));
    assert_eq!(shortest_path(&t, n[4], n[4]), Some(vec![n[4]]));

    let banned = hashset! {n[2]};
    assert_eq!(
        shortest_path_avoiding(&t, n[0], n[5], &banned, &no_links),
        Some(vec![n[0], n[1], n[4], n[5]])
    );
    let banned_links = hashset! {link_key(n[1], n[0])};
    assert_eq!(
        shortest_path_avoiding(&t, n[0], n[5], &none, &banned_links),
        Some(vec![n[0], n[3], n[4], n[5]])
    );
    let banned = hashset! {n[4]};
    let banned_links = hashset! {link_key(n[2], n[1])};
    assert_eq!(shortest_path_avoiding(&t, n[0], n[5], &banned, &banned_links), None);
    assert_eq!(shortest_path_avoiding(&t, n[0], n[4], &banned, &no_links), None);
    assert_eq!(shortest_path_avoiding(&t, n[4], n[0], &banned, &no_links), None);
}

#[test]
fn test_simple_paths_five_node() {
    let t = FiveNode::topology().unwrap();

    let paths: Vec<Path> = ShortestSimplePaths::new(&t, *A, *B).collect();
    assert_eq!(paths, vec![vec![*A, *E, *B], vec![*A, *C, *E, *B]]);

    let paths: Vec<Path> = ShortestSimplePaths::new(&t, *A, *C).collect();
    assert_eq!(paths, vec![vec![*A, *C], vec![*A, *E, *C]]);

    let paths: Vec<Path> = ShortestSimplePaths::new(&t, *B, *C).collect();
    assert_eq!(paths, vec![vec![*B, *E, *C], vec![*B, *E, *A, *C]]);
}

#[test]
fn test_simple_paths_ring() {
    let t = Ring::topology().unwrap();
    let paths: Vec<Path> = ShortestSimplePaths::new(&t, N[0], N[3]).collect();
    assert_eq!(paths, vec![vec![N[0], N[1], N[2], N[3]], vec![N[0], N[5], N[4], N[3]]]);
}

#[test]
fn test_simple_paths_grid() {
    let (t, n) = get_grid();
    let paths: Vec<Path> = ShortestSimplePaths::new(&t, n[0], n[5]).collect();

    assert_eq!(paths.len(), 4);
    assert_eq!(paths.first(), Some(&vec![n[0], n[1], n[2], n[5]]));
    assert_eq!(paths.last(), Some(&vec![n[0], n[3], n[4], n[1], n[2], n[5]]));

    // non-decreasing length
    assert!(paths.windows(2).all(|w| w[0].len() <= w[1].len()));
    // every path is unique and simple
    let unique: HashSet<&Path> = paths.iter().collect();
    assert_eq!(unique.len(), paths.len());
    for p in paths.iter() {
        let nodes: HashSet<&NodeId> = p.iter().collect();
        assert_eq!(nodes.len(), p.len());
        assert!(t.contains_path(p));
    }
}

#[test]
fn test_simple_paths_deterministic() {
    let (t1, n) = get_grid();
    let (t2, _) = get_grid();
    let p1: Vec<Path> = ShortestSimplePaths::new(&t1, n[3], n[2]).collect();
    let p2: Vec<Path> = ShortestSimplePaths::new(&t2, n[3], n[2]).collect();
    assert_eq!(p1, p2);
}

#[test]
fn test_priority_takes_shortest() {
    let mut c = Controller::new(Ring::topology().unwrap());
    // load the short way around
    c.install_flow(N[0], N[1], true, false).unwrap();
    c.install_flow(N[1], N[2], true, false).unwrap();

    let t = c.topology();
    assert_eq!(select_path(t, N[0], N[2], true, None), Some(vec![N[0], N[1], N[2]]));
    assert_eq!(select_path(t, N[0], N[2], false, None), Some(vec![N[0], N[5], N[4], N[3], N[2]]));
}

#[test]
fn test_load_balance_diamond() {
    let mut c = Controller::new(Diamond::topology().unwrap());
    let s = c.get_node_id("S").unwrap();
    let a = c.get_node_id("A").unwrap();
    let b = c.get_node_id("B").unwrap();
    let d = c.get_node_id("T").unwrap();

    assert_eq!(c.install_flow(s, d, true, false).unwrap().primary(), &[s, a, d]);
    assert_eq!(bottleneck_load(c.topology(), &[d, a, s]), 1);
    assert_eq!(bottleneck_load(c.topology(), &[d, b, s]), 0);

    // the two paths are equally long, but the one over A is loaded
    assert_eq!(c.install_flow(d, s, false, false).unwrap().primary(), &[d, b, s]);
}

#[test]
fn test_bottleneck_tie_takes_first() {
    let mut c = Controller::new(Ring::topology().unwrap());
    c.install_flow(N[1], N[2], true, false).unwrap();
    c.install_flow(N[5], N[4], true, false).unwrap();

    // both paths have a bottleneck load of 1
    let t = c.topology();
    assert_eq!(bottleneck_load(t, &[N[0], N[1], N[2]]), 1);
    assert_eq!(bottleneck_load(t, &[N[0], N[5], N[4], N[3], N[2]]), 1);
    assert_eq!(select_path(t, N[0], N[2], false, None), Some(vec![N[0], N[1], N[2]]));
}

#[test]
fn test_bottleneck_not_total_load() {
    let mut c = Controller::new(Ring::topology().unwrap());
    // the long way has a higher total load, but a lower maximum
    c.install_flow(N[1], N[2], true, false).unwrap();
    c.install_flow(N[2], N[1], true, false).unwrap();
    c.install_flow(N[5], N[4], true, false).unwrap();
    c.install_flow(N[4], N[3], true, false).unwrap();
    c.install_flow(N[3], N[2], true, false).unwrap();

    let t = c.topology();
    assert_eq!(bottleneck_load(t, &[N[0], N[1], N[2]]), 2);
    assert_eq!(bottleneck_load(t, &[N[0], N[5], N[4], N[3], N[2]]), 1);
    assert_eq!(select_path(t, N[0], N[2], false, None), Some(vec![N[0], N[5], N[4], N[3], N[2]]));
}

#[test]
fn test_path_limit() {
    let mut c = Controller::new(Ring::topology().unwrap());
    c.install_flow(N[1], N[2], true, false).unwrap();

    let t = c.topology();
    assert_eq!(select_path(t, N[0], N[2], false, None), Some(vec![N[0], N[5], N[4], N[3], N[2]]));
    let one = NonZeroUsize::new(1);
    assert_eq!(select_path(t, N[0], N[2], false, one), Some(vec![N[0], N[1], N[2]]));
    // the smallest limit still finds a path whenever one exists
    assert_eq!(select_path(t, N[3], N[0], false, one), Some(vec![N[3], N[2], N[1], N[0]]));
    assert_eq!(select_path(t, N[0], N[2], false, NonZeroUsize::new(2)), select_path(t, N[0], N[2], false, None));
}

#[test]
fn test_select_no_path() {
    let mut t = FiveNode::topology().unwrap();
    let f = t.add_node("F").unwrap();
    assert_eq!(select_path(&t, *A, f, true, None), None);
    assert_eq!(select_path(&t, *A, f, false, None), None);
    assert_eq!(select_path(&t, 10.into(), *A, false, None), None);
}

#[test]
fn test_backup_five_node() {
    let t = FiveNode::topology().unwrap();

    assert_eq!(compute_backup(&t, &[*A, *C]), Some(vec![*A, *E, *C]));
    assert_eq!(compute_backup(&t, &[*A, *E, *C]), Some(vec![*A, *C]));
    // B is only connected through E
    assert_eq!(compute_backup(&t, &[*A, *E, *B]), None);
    assert_eq!(compute_backup(&t, &[]), None);

    // the topology is not changed
    assert_eq!(t.num_links(), 5);
}

#[test]
fn test_backup_is_link_disjoint() {
    let t = Ring::topology().unwrap();
    let primary = vec![N[0], N[1], N[2]];
    let backup = compute_backup(&t, &primary).unwrap();
    assert_eq!(backup, vec![N[0], N[5], N[4], N[3], N[2]]);
    assert!(!shares_link(&primary, &backup));

    let (t, n) = get_grid();
    for primary in ShortestSimplePaths::new(&t, n[0], n[5]) {
        if let Some(backup) = compute_backup(&t, &primary) {
            assert!(!shares_link(&primary, &backup));
            assert_eq!(backup.first(), Some(&n[0]));
            assert_eq!(backup.last(), Some(&n[5]));
        }
    }
}

#[test]
fn test_backup_ignores_load() {
    let mut c = Controller::new(Diamond::topology().unwrap());
    let s = c.get_node_id("S").unwrap();
    let a = c.get_node_id("A").unwrap();
    let b = c.get_node_id("B").unwrap();
    let d = c.get_node_id("T").unwrap();
    c.install_flow(b, s, true, false).unwrap();
    c.install_flow(b, d, true, false).unwrap();

    // The backup for S -> A -> T must go over B, regardless of its load
    assert_eq!(compute_backup(c.topology(), &[s, a, d]), Some(vec![s, b, d]));
}
