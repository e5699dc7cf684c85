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

//! # Operator shell
//!
//! Line based command interface to the controller. Every line is parsed into a [`Command`],
//! executed on the controller, and the result is written back as text.

use sdnflow::topology::NodeId;
use sdnflow::{printer, Controller, Error};

use log::*;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Prompt written before reading each command
pub const PROMPT: &str = "<SDN>:";

/// Command issued by the operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a new, unconnected node
    InsertNode(String),
    /// Add a new link between two existing nodes
    InsertLink(String, String),
    /// Remove a node, failing all of its links first
    DeleteNode(String),
    /// Install a new flow
    Inject {
        /// Source node
        source: String,
        /// Destination node
        destination: String,
        /// Use the first shortest path
        priority: bool,
        /// Compute a backup path
        critical: bool,
    },
    /// Fail a link (`disable` or `delete_link`)
    FailLink(String, String),
    /// Remove an installed flow
    Remove(String, String),
    /// Print an installed flow
    Query(String, String),
    /// Print all links and all flows
    Show,
    /// Stop the shell
    Quit,
}

/// Errors reported back to the operator
#[derive(Debug, Error)]
pub enum ShellError {
    /// The command got too few or too many arguments
    #[error("Incorrect number of arguments")]
    WrongArity,
    /// A flag was neither `0` nor `1`
    #[error("Priority and critical must be 0 or 1")]
    InvalidFlag,
    /// The command is not known
    #[error("Unknown command issued: {0}")]
    UnknownCommand(String),
    /// No path exists between the two nodes
    #[error("Failed to find a path for {0} {1}")]
    NoPath(String, String),
    /// No flow is installed between the two nodes
    #[error("No flow found from {0} to {1}")]
    NoFlow(String, String),
    /// Any other error of the controller
    #[error("{0}")]
    Controller(#[from] Error),
}

impl FromStr for Command {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let args: Vec<&str> = s.split_whitespace().collect();
        let (cmd, args) = match args.split_first() {
            Some((cmd, args)) => (*cmd, args),
            None => return Err(ShellError::UnknownCommand(String::new())),
        };
        let arity = |n: usize| if args.len() == n { Ok(()) } else { Err(ShellError::WrongArity) };
        match cmd {
            "insert_node" => {
                arity(1)?;
                Ok(Command::InsertNode(args[0].to_string()))
            }
            "insert_link" => {
                arity(2)?;
                Ok(Command::InsertLink(args[0].to_string(), args[1].to_string()))
            }
            "delete_node" => {
                arity(1)?;
                Ok(Command::DeleteNode(args[0].to_string()))
            }
            "inject" => {
                arity(4)?;
                Ok(Command::Inject {
                    source: args[0].to_string(),
                    destination: args[1].to_string(),
                    priority: parse_flag(args[2])?,
                    critical: parse_flag(args[3])?,
                })
            }
            "disable" | "delete_link" => {
                arity(2)?;
                Ok(Command::FailLink(args[0].to_string(), args[1].to_string()))
            }
            "remove" => {
                arity(2)?;
                Ok(Command::Remove(args[0].to_string(), args[1].to_string()))
            }
            "query" => {
                arity(2)?;
                Ok(Command::Query(args[0].to_string(), args[1].to_string()))
            }
            "show" => {
                arity(0)?;
                Ok(Command::Show)
            }
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(ShellError::UnknownCommand(cmd.to_string())),
        }
    }
}

fn parse_flag(s: &str) -> Result<bool, ShellError> {
    match s {
        "0" => Ok(false),
        "1" => Ok(true),
        _ => Err(ShellError::InvalidFlag),
    }
}

impl Command {
    /// Returns true if the command may change the topology or the installed flows.
    pub fn is_mutating(&self) -> bool {
        !matches!(self, Command::Query(_, _) | Command::Show | Command::Quit)
    }
}

/// Resolve the names of the two endpoints. Unknown names are reported as `err(src, dst)`.
fn endpoints<F>(c: &Controller, src: &str, dst: &str, err: F) -> Result<(NodeId, NodeId), ShellError>
where
    F: Fn(String, String) -> ShellError,
{
    match (c.get_node_id(src), c.get_node_id(dst)) {
        (Ok(s), Ok(d)) => Ok((s, d)),
        _ => Err(err(src.to_string(), dst.to_string())),
    }
}

/// Execute a single command on the controller, and return the lines to print.
pub fn execute(c: &mut Controller, cmd: &Command) -> Result<Vec<String>, ShellError> {
    match cmd {
        Command::InsertNode(name) => {
            c.add_node(name.as_str())?;
            Ok(vec![format!("Node {} added", name)])
        }
        Command::InsertLink(a, b) => {
            let (id_a, id_b) = (c.get_node_id(a)?, c.get_node_id(b)?);
            c.add_link(id_a, id_b)?;
            Ok(vec![format!("Added link {} -- {}", a, b)])
        }
        Command::DeleteNode(name) => {
            let id = c.get_node_id(name)?;
            let topo_before = c.topology().clone();
            let mut lines: Vec<String> = c
                .remove_node(id)?
                .iter()
                .map(|o| printer::outcome(&topo_before, o))
                .collect();
            lines.push(format!("Removed node {} from the network", name));
            Ok(lines)
        }
        Command::Inject { source, destination, priority, critical } => {
            let (s, d) = endpoints(c, source, destination, ShellError::NoPath)?;
            match c.install_flow(s, d, *priority, *critical) {
                Ok(_) => {}
                Err(Error::NoPathFound(_, _)) => {
                    return Err(ShellError::NoPath(source.clone(), destination.clone()))
                }
                Err(e) => return Err(e.into()),
            }
            let flow = c.query_flow(s, d)?;
            Ok(vec![format!("Installed {}", printer::flow(c.topology(), &flow))])
        }
        Command::FailLink(a, b) => {
            let (id_a, id_b) = (c.get_node_id(a)?, c.get_node_id(b)?);
            let outcomes = c.fail_link(id_a, id_b)?;
            let mut lines = vec![format!("Failing link: {} -- {}", a, b)];
            lines.extend(outcomes.iter().map(|o| printer::outcome(c.topology(), o)));
            Ok(lines)
        }
        Command::Remove(source, destination) => {
            let (s, d) = endpoints(c, source, destination, ShellError::NoFlow)?;
            match c.remove_flow(s, d) {
                Ok(_) => Ok(vec![format!("Flow from {} to {} removed", source, destination)]),
                Err(Error::FlowNotFound(_, _)) => {
                    Err(ShellError::NoFlow(source.clone(), destination.clone()))
                }
                Err(e) => Err(e.into()),
            }
        }
        Command::Query(source, destination) => {
            let (s, d) = endpoints(c, source, destination, ShellError::NoFlow)?;
            match c.query_flow(s, d) {
                Ok(flow) => Ok(vec![printer::flow(c.topology(), &flow)]),
                Err(Error::FlowNotFound(_, _)) => {
                    Err(ShellError::NoFlow(source.clone(), destination.clone()))
                }
                Err(e) => Err(e.into()),
            }
        }
        Command::Show => {
            let mut lines = printer::links(c.topology());
            lines.extend(c.flows().iter().map(|f| printer::flow(c.topology(), f)));
            Ok(lines)
        }
        Command::Quit => Ok(Vec::new()),
    }
}

/// Run the shell until `quit` is issued, or the input is exhausted. Errors of single commands
/// are written to the output, and do not stop the shell. If `dot_file` is given, the topology is
/// written to it in the DOT format at startup, and after every command that changed the state.
pub fn run<R, W>(
    c: &mut Controller,
    input: R,
    mut output: W,
    dot_file: Option<&Path>,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    if let Some(file) = dot_file {
        std::fs::write(file, printer::dot(c.topology()))?;
    }

    let mut lines = input.lines();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let cmd = match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(cmd) => cmd,
            Err(e) => {
                writeln!(output, "{}", e)?;
                continue;
            }
        };
        debug!("Executing {:?}", cmd);

        match execute(c, &cmd) {
            Ok(result) => {
                for l in result {
                    writeln!(output, "{}", l)?;
                }
                if let (true, Some(file)) = (cmd.is_mutating(), dot_file) {
                    std::fs::write(file, printer::dot(c.topology()))?;
                }
            }
            Err(e) => {
                warn!("Command failed: {}", e);
                writeln!(output, "{}", e)?;
            }
        }
    }
    writeln!(output)?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use sdnflow::example_networks::{ExampleNetwork, FiveNode};
    use std::io::Cursor;

    fn run_script(script: &str) -> (Controller, String) {
        let mut c = FiveNode::controller().unwrap();
        let mut out: Vec<u8> = Vec::new();
        run(&mut c, Cursor::new(script), &mut out, None).unwrap();
        (c, String::from_utf8(out).unwrap())
    }

    #[test]
    fn parse_commands() {
        assert_eq!("insert_node F".parse::<Command>().unwrap(), Command::InsertNode("F".into()));
        assert_eq!(
            "  inject A  D 1 0 ".parse::<Command>().unwrap(),
            Command::Inject {
                source: "A".into(),
                destination: "D".into(),
                priority: true,
                critical: false
            }
        );
        assert_eq!(
            "disable A C".parse::<Command>().unwrap(),
            "delete_link A C".parse::<Command>().unwrap()
        );
        assert_eq!("show".parse::<Command>().unwrap(), Command::Show);
        assert_eq!("quit".parse::<Command>().unwrap(), Command::Quit);
    }

    #[test]
    fn parse_errors() {
        assert!(matches!("insert_link A".parse::<Command>(), Err(ShellError::WrongArity)));
        assert!(matches!("query A B C".parse::<Command>(), Err(ShellError::WrongArity)));
        assert!(matches!("inject A B 2 0".parse::<Command>(), Err(ShellError::InvalidFlag)));
        assert!(matches!("inject A B 1 yes".parse::<Command>(), Err(ShellError::InvalidFlag)));
        match "ping A B".parse::<Command>() {
            Err(ShellError::UnknownCommand(c)) => assert_eq!(c, "ping"),
            r => panic!("unexpected result: {:?}", r),
        }
        assert_eq!(ShellError::WrongArity.to_string(), "Incorrect number of arguments");
    }

    #[test]
    fn execute_inject_and_fail() {
        let mut c = FiveNode::controller().unwrap();

        let cmd = "inject D C 0 1".parse().unwrap();
        assert_eq!(
            execute(&mut c, &cmd).unwrap(),
            vec![
                "Installed Flow D -> C | Priority: false | Critical: true | Active: primary | Primary: D -> E -> C | Backup: None"
            ]
        );

        let cmd = "disable A C".parse().unwrap();
        assert_eq!(
            execute(&mut c, &cmd).unwrap(),
            vec!["Failing link: A -- C", "Rerouted A -> C to backup path: A -> E -> C"]
        );

        let cmd = "query A C".parse().unwrap();
        assert!(execute(&mut c, &cmd).unwrap()[0].contains("Active: backup"));
        assert!(c.is_consistent());
    }

    #[test]
    fn execute_errors() {
        let mut c = FiveNode::controller().unwrap();
        execute(&mut c, &Command::InsertNode("F".into())).unwrap();

        let cmd = "inject A F 0 0".parse().unwrap();
        assert_eq!(execute(&mut c, &cmd).unwrap_err().to_string(), "Failed to find a path for A F");
        let cmd = "inject A X 0 0".parse().unwrap();
        assert_eq!(execute(&mut c, &cmd).unwrap_err().to_string(), "Failed to find a path for A X");
        let cmd = "query C A".parse().unwrap();
        assert_eq!(execute(&mut c, &cmd).unwrap_err().to_string(), "No flow found from C to A");
        let cmd = "remove D E".parse().unwrap();
        assert!(matches!(execute(&mut c, &cmd), Err(ShellError::NoFlow(_, _))));
        let cmd = "disable A B".parse().unwrap();
        assert!(matches!(execute(&mut c, &cmd), Err(ShellError::Controller(_))));
        let cmd = "inject A C 0 0".parse().unwrap();
        assert!(matches!(
            execute(&mut c, &cmd),
            Err(ShellError::Controller(Error::FlowAlreadyExists(_, _)))
        ));
        assert_eq!(c.flows().len(), 3);
    }

    #[test]
    fn execute_topology_changes() {
        let mut c = FiveNode::controller().unwrap();

        execute(&mut c, &"insert_link B C".parse().unwrap()).unwrap();
        let lines = execute(&mut c, &"inject C B 1 0".parse().unwrap()).unwrap();
        assert!(lines[0].contains("Primary: C -> B |"));

        let lines = execute(&mut c, &"delete_node E".parse().unwrap()).unwrap();
        assert_eq!(
            lines,
            vec![
                "Flow A -> B removed (no backup available)",
                "Flow B -> C removed (no backup available)",
                "Removed node E from the network",
            ]
        );
        assert!(c.get_node_id("E").is_err());
        assert!(c.is_consistent());
    }

    #[test]
    fn run_until_quit() {
        let (c, out) = run_script("inject A D 1 0\n\nbogus\nremove A B\nquit\nremove A C\n");
        assert!(out.starts_with(PROMPT));
        assert!(out.contains("Installed Flow A -> D"));
        assert!(out.contains("Unknown command issued: bogus"));
        assert!(out.contains("Flow from A to B removed"));
        assert!(!out.contains("Flow from A to C removed"));
        assert_eq!(c.flows().len(), 3);
        assert!(c.query_flow(c.get_node_id("A").unwrap(), c.get_node_id("C").unwrap()).is_ok());
    }

    #[test]
    fn run_show() {
        let (_, out) = run_script("show\n");
        assert!(out.contains("B -- E: load 2"));
        assert!(out.contains("Flow B -> C | Priority: true"));
    }
}
