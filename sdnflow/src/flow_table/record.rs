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

//! Module containing the flow record

use crate::routing::contains_link;
use crate::topology::{NodeId, Path};

use std::fmt;

/// Key of a flow record: the pair `(source, destination)`. Flows are directed, so `(a, b)` and
/// `(b, a)` are two different flows.
pub type FlowKey = (NodeId, NodeId);

/// Selects which of the two paths of a flow currently carries its load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivePath {
    /// The flow is routed along its primary path.
    Primary,
    /// The flow was rerouted to its backup path after a link failure.
    Backup,
}

impl fmt::Display for ActivePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => write!(f, "primary"),
            Self::Backup => write!(f, "backup"),
        }
    }
}

/// # Flow Record
///
/// A single routing intent from `source` to `destination`. The primary path is chosen when the
/// flow is installed and never changes. Critical flows additionally get a backup path, which is
/// link-disjoint from the primary path (if such a path exists).
///
/// The record starts with its primary path being active. After a link failure on the primary path,
/// a critical flow with a backup path is switched to [`ActivePath::Backup`]. This transition
/// happens at most once: failed links are not assumed to heal, so the flow never returns to its
/// primary path, and a further failure evicts it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowRecord {
    source: NodeId,
    destination: NodeId,
    priority: bool,
    critical: bool,
    primary: Path,
    backup: Option<Path>,
    active: ActivePath,
}

impl FlowRecord {
    /// Create a new flow record, with the primary path being active.
    pub(crate) fn new(
        priority: bool,
        critical: bool,
        primary: Path,
        backup: Option<Path>,
    ) -> Option<Self> {
        let source = *primary.first()?;
        let destination = *primary.last()?;
        Some(Self {
            source,
            destination,
            priority,
            critical,
            primary,
            backup,
            active: ActivePath::Primary,
        })
    }

    /// Source node of the flow
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Destination node of the flow
    pub fn destination(&self) -> NodeId {
        self.destination
    }

    /// Key of the flow in the flow table
    pub fn key(&self) -> FlowKey {
        (self.source, self.destination)
    }

    /// Priority flows always use the shortest path.
    pub fn priority(&self) -> bool {
        self.priority
    }

    /// Critical flows have a backup path, and are rerouted instead of dropped on failure.
    pub fn critical(&self) -> bool {
        self.critical
    }

    /// The path chosen at installation.
    pub fn primary(&self) -> &[NodeId] {
        &self.primary
    }

    /// The backup path, if the flow is critical and a link-disjoint path existed.
    pub fn backup(&self) -> Option<&[NodeId]> {
        self.backup.as_deref()
    }

    /// Which path is currently active.
    pub fn active(&self) -> ActivePath {
        self.active
    }

    /// Returns the path which currently carries the load of this flow.
    pub fn active_path(&self) -> &[NodeId] {
        match (self.active, self.backup.as_ref()) {
            (ActivePath::Backup, Some(backup)) => backup,
            _ => &self.primary,
        }
    }

    /// Returns true if the flow was already switched to its backup path.
    pub fn is_rerouted(&self) -> bool {
        self.active == ActivePath::Backup
    }

    /// Returns true if the active path traverses the link between `a` and `b` (in any direction).
    pub fn traverses(&self, a: NodeId, b: NodeId) -> bool {
        contains_link(self.active_path(), a, b)
    }

    /// Switch the flow onto its backup path. This only succeeds once, and only if the flow is
    /// critical and has a backup path. On success, the new active path is returned.
    pub(crate) fn promote(&mut self) -> Option<&[NodeId]> {
        if !self.critical || self.is_rerouted() {
            return None;
        }
        let backup = self.backup.as_deref()?;
        self.active = ActivePath::Backup;
        Some(backup)
    }

    /// Forget the backup path of a flow which is still on its primary path, and return it. A
    /// flow that was already rerouted keeps its backup, since it is the active path.
    pub(crate) fn discard_backup(&mut self) -> Option<Path> {
        if self.is_rerouted() {
            return None;
        }
        self.backup.take()
    }
}
