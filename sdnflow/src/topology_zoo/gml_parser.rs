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

//! Parses GML files from Topology Zoo

use crate::topology::{NodeId, Topology, TopologyError};

use log::*;
use std::collections::HashMap;
use std::fs::read_to_string;
use thiserror::Error;

/// Parses GML files and returns the resulting topology.
/// The names will remain the same, except the same name occurs twice. In this case, we will append
/// a _N to the end, where N is a number starting from 1 (_1 is appended to the second occurence,
/// and _2 is appended to the third occurence, etc...). Spaces in names are replaced by `_`.
pub fn parse_gml_topology(filename: impl AsRef<str>) -> Result<Topology, GmlError> {
    let gml_str = read_to_string(filename.as_ref())?;
    parse_gml_str(&gml_str)
}

/// Parses the content of a GML file and returns the resulting topology. Duplicate links and links
/// from a node to itself are ignored. Every node needs an `id` and a `label`, and every edge needs
/// a `source` and a `target`. All other fields are ignored.
pub fn parse_gml_str(gml_str: &str) -> Result<Topology, GmlError> {
    let mut topo = Topology::new();

    let mut current_state = CurrentState::NotStarted;

    let mut used_labels: HashMap<String, usize> = HashMap::new();
    let mut node_lookup: HashMap<usize, NodeId> = HashMap::new();

    for (i, line) in gml_str.lines().enumerate() {
        let line = line.trim();
        current_state = match current_state {
            CurrentState::NotStarted => {
                if line.is_empty() || line.starts_with('#') {
                    CurrentState::NotStarted
                } else if line == "graph [" {
                    CurrentState::None
                } else {
                    return Err(GmlError::UnexpectedToken { line: i, content: String::from(line) });
                }
            }
            CurrentState::None => {
                if line == "node [" {
                    CurrentState::Node { id: None, name: None }
                } else if line == "edge [" {
                    CurrentState::Edge { source: None, target: None }
                } else {
                    CurrentState::None
                }
            }
            CurrentState::Node { id, name } => {
                if let Some(number) = line.strip_prefix("id ") {
                    let id: Option<usize> = Some(number.trim().parse()?);
                    CurrentState::Node { id, name }
                } else if let Some(label) = line.strip_prefix("label ") {
                    let mut name: String = label.trim().trim_matches('"').replace(' ', "_");
                    // increment the num_used in the hashmap
                    let num_used = *used_labels.get(&name).unwrap_or(&0);
                    used_labels.insert(name.clone(), num_used + 1);
                    if num_used > 0 {
                        name.push_str(&format!("_{}", num_used));
                    }
                    CurrentState::Node { id, name: Some(name) }
                } else if line == "]" {
                    let name = name.ok_or(GmlError::NodeMissingLabel(i))?;
                    let id = id.ok_or(GmlError::NodeMissingId(i))?;
                    if node_lookup.contains_key(&id) {
                        return Err(GmlError::NodeIdNotUnique(i));
                    }
                    let node = topo.add_node(name)?;
                    node_lookup.insert(id, node);
                    CurrentState::None
                } else {
                    CurrentState::Node { id, name }
                }
            }
            CurrentState::Edge { source, target } => {
                if let Some(number) = line.strip_prefix("source ") {
                    let source: Option<usize> = Some(number.trim().parse()?);
                    CurrentState::Edge { source, target }
                } else if let Some(number) = line.strip_prefix("target ") {
                    let target: Option<usize> = Some(number.trim().parse()?);
                    CurrentState::Edge { source, target }
                } else if line == "]" {
                    let source = source.ok_or(GmlError::EdgeMissingSource(i))?;
                    let source_id =
                        *node_lookup.get(&source).ok_or(GmlError::UnknownNodeId(source))?;
                    let target = target.ok_or(GmlError::EdgeMissingTarget(i))?;
                    let target_id =
                        *node_lookup.get(&target).ok_or(GmlError::UnknownNodeId(target))?;
                    match topo.add_link(source_id, target_id) {
                        Ok(()) => {}
                        Err(TopologyError::DuplicateEdge(_, _)) | Err(TopologyError::SelfLoop(_)) => {
                            debug!("Ignoring link {} -- {} on line {}", source, target, i)
                        }
                        Err(e) => return Err(e.into()),
                    }
                    CurrentState::None
                } else {
                    CurrentState::Edge { source, target }
                }
            }
        };
    }

    Ok(topo)
}

enum CurrentState {
    NotStarted,
    None,
    Node { id: Option<usize>, name: Option<String> },
    Edge { source: Option<usize>, target: Option<usize> },
}

/// Error while parsing a GML file
#[derive(Debug, Error)]
pub enum GmlError {
    /// Io Error
    #[error("IO Error: {0}")]
    IoError(#[from] std::io::Error),
    /// Unexpected Token
    #[error("Unexpected Token on line {line}: {content}")]
    UnexpectedToken {
        /// Line number
        line: usize,
        /// Content of the line
        content: String,
    },
    /// ParseIntError
    #[error("Cannot parse an integer! {0}")]
    ParseIntError(#[from] std::num::ParseIntError),
    /// Unknown Node Id
    #[error("Unknown node id: {0}")]
    UnknownNodeId(usize),
    /// Node is missing an ID field
    #[error("Node is missing an ID field before line {0}!")]
    NodeMissingId(usize),
    /// Node is missing an label field
    #[error("Node is missing an label field before line {0}!")]
    NodeMissingLabel(usize),
    /// Duplicate Noe Id
    #[error("Node ID is not unique on line {0}!")]
    NodeIdNotUnique(usize),
    /// Edge is missing the source field
    #[error("Edge is missing the source field before line {0}!")]
    EdgeMissingSource(usize),
    /// Edge is missing the target field
    #[error("Edge is missing the target field before line {0}!")]
    EdgeMissingTarget(usize),
    /// The topology could not be built
    #[error("Topology Error: {0}")]
    TopologyError(#[from] TopologyError),
}
