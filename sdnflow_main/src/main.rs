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

use sdnflow::example_networks::{Diamond, ExampleNetwork, FiveNode, Ring};
use sdnflow::topology_zoo::parse_gml_topology;
use sdnflow::Controller;

use clap::{Parser, Subcommand, ValueEnum};
use log::*;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader};
use std::num::NonZeroUsize;
use std::path::Path;

mod shell;

fn main() -> Result<(), Box<dyn Error>> {
    // initialize the env logger
    pretty_env_logger::init();
    // run clap
    let args = CommandLineArguments::parse();

    info!("Bootstrapping the controller with {}", args.network.repr());
    let mut controller = match &args.network {
        NetworkSelection::ExampleNetwork { topology } => match topology {
            ExampleTopology::FiveNode => FiveNode::controller()?,
            ExampleTopology::Diamond => Diamond::controller()?,
            ExampleTopology::Ring => Ring::controller()?,
        },
        NetworkSelection::TopologyZoo { gml_file } => {
            Controller::new(parse_gml_topology(gml_file)?)
        }
    };
    controller.set_path_limit(args.max_paths);
    info!(
        "Topology has {} nodes and {} links, {} flows installed",
        controller.topology().num_nodes(),
        controller.topology().num_links(),
        controller.flows().len()
    );

    let dot_file = args.dot.as_deref().map(Path::new);
    match &args.script {
        Some(script) => {
            let input = BufReader::new(File::open(script)?);
            shell::run(&mut controller, input, io::stdout(), dot_file)?;
        }
        None => {
            let stdin = io::stdin();
            shell::run(&mut controller, stdin.lock(), io::stdout(), dot_file)?;
        }
    }

    Ok(())
}

#[derive(Parser, Debug)]
#[clap(author = "Tibor Schneider", version, about)]
struct CommandLineArguments {
    /// Network used to bootstrap the controller
    #[clap(subcommand)]
    network: NetworkSelection,
    /// Read the commands from this file instead of stdin
    #[clap(short = 's', long, global = true)]
    script: Option<String>,
    /// Maximum number of candidate paths considered for load balancing, at least 1 (default: all
    /// simple paths)
    #[clap(short = 'm', long, global = true)]
    max_paths: Option<NonZeroUsize>,
    /// Write the topology in the DOT format to this file, after every command
    #[clap(short = 'd', long, global = true)]
    dot: Option<String>,
}

#[derive(Subcommand, Debug)]
enum NetworkSelection {
    /// Use an example network, provided by sdnflow
    #[clap(name = "example")]
    ExampleNetwork {
        /// Topology to use (from the example topologies)
        #[clap(value_enum)]
        topology: ExampleTopology,
    },
    /// Use the network from Topology Zoo
    #[clap(name = "gml")]
    TopologyZoo {
        /// GML file to use
        gml_file: String,
    },
}

impl NetworkSelection {
    /// Stringify the network
    pub fn repr(&self) -> String {
        match self {
            NetworkSelection::ExampleNetwork { topology } => format!("{:?}", topology),
            NetworkSelection::TopologyZoo { gml_file } => {
                gml_file.rsplit('/').next().unwrap_or(gml_file).to_string()
            }
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum ExampleTopology {
    /// Five nodes A to E, with the flows A -> B, A -> C (critical) and B -> C (priority)
    #[clap(name = "five-node")]
    FiveNode,
    /// Four nodes with two disjoint paths, no flows
    #[clap(name = "diamond")]
    Diamond,
    /// Six nodes connected in a ring, no flows
    #[clap(name = "ring")]
    Ring,
}
