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

//! # Flow Table
//!
//! The flow table is the authoritative state of all installed flows. It stores at most one
//! [`FlowRecord`] per ordered `(source, destination)` pair, and remembers the order in which flows
//! were installed. Failure handling processes the affected flows in this order.

mod record;

pub use record::{ActivePath, FlowKey, FlowRecord};

use std::collections::HashMap;

/// Table of all installed flows, keyed by `(source, destination)`.
#[derive(Debug, Clone, Default)]
pub struct FlowTable {
    flows: HashMap<FlowKey, FlowRecord>,
    order: Vec<FlowKey>,
}

impl FlowTable {
    /// Create an empty flow table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new flow record at the end of the table order. If a record with the same key is
    /// already installed, the table is not changed and the new record is handed back.
    pub(crate) fn insert(&mut self, record: FlowRecord) -> Result<(), FlowRecord> {
        let key = record.key();
        if self.flows.contains_key(&key) {
            return Err(record);
        }
        self.flows.insert(key, record);
        self.order.push(key);
        Ok(())
    }

    /// Remove the flow record with the given key.
    pub(crate) fn remove(&mut self, key: FlowKey) -> Option<FlowRecord> {
        let record = self.flows.remove(&key)?;
        self.order.retain(|k| *k != key);
        Some(record)
    }

    /// Returns true if a flow with the given key is installed.
    pub fn contains(&self, key: FlowKey) -> bool {
        self.flows.contains_key(&key)
    }

    /// Get the flow record with the given key.
    pub fn get(&self, key: FlowKey) -> Option<&FlowRecord> {
        self.flows.get(&key)
    }

    pub(crate) fn get_mut(&mut self, key: FlowKey) -> Option<&mut FlowRecord> {
        self.flows.get_mut(&key)
    }

    /// Iterate over all flow records, in the order in which they were installed.
    pub fn iter(&self) -> impl Iterator<Item = &FlowRecord> + '_ {
        self.order.iter().filter_map(move |k| self.flows.get(k))
    }

    /// Number of installed flows
    pub fn len(&self) -> usize {
        self.flows.len()
    }

    /// Returns true if no flow is installed.
    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }
}
