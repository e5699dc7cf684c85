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

//! Networks for testing and bootstrapping the controller

use crate::{Controller, Error};
use crate::topology::Topology;

mod five_node;
pub use five_node::FiveNode;

mod diamond;
pub use diamond::Diamond;

mod ring;
pub use ring::Ring;

/// Trait for easier access to example networks.
pub trait ExampleNetwork {
    /// Get the topology, with all links unloaded.
    fn topology() -> Result<Topology, Error>;

    /// Get a controller managing the topology, with the initial flows of the example installed.
    /// By default, no flow is installed.
    fn controller() -> Result<Controller, Error> {
        Ok(Controller::new(Self::topology()?))
    }
}
