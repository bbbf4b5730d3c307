//! Command-line interface.
//!
//! ```text
//! routetrie check   <routes.toml>
//! routetrie resolve <routes.toml> <path>...
//! routetrie dump    <routes.toml> [--json]
//! ```
//!
//! Every command writes to the supplied writer and reports whether it
//! succeeded, so `main` only maps the outcome to an exit code.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use routetrie_core::RouteResult;
use routetrie_trie::{Parameters, Trie};

use crate::route_table::RouteTable;

/// Top-level arguments.
#[derive(Debug, Parser)]
#[command(name = "routetrie")]
#[command(about = "Check, resolve against, and inspect route tables", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Use human-readable debug logging regardless of the route table settings.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate every pattern in a route table
    Check {
        /// Route table file
        routes: PathBuf,
    },
    /// Resolve one or more paths against a route table
    Resolve {
        /// Route table file
        routes: PathBuf,
        /// Request paths to resolve
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Print the serialized node layout of a route table
    Dump {
        /// Route table file
        routes: PathBuf,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

impl Command {
    /// Returns the route table file this command operates on.
    pub const fn routes(&self) -> &PathBuf {
        match self {
            Self::Check { routes } | Self::Resolve { routes, .. } | Self::Dump { routes, .. } => {
                routes
            }
        }
    }
}

/// Runs `command` against an already loaded route table.
///
/// Returns `Ok(false)` when the command ran but found a problem: an invalid
/// route for `check`, or an unmatched path for `resolve`.
///
/// # Errors
///
/// Returns an error if the trie cannot be built or output cannot be written.
pub fn run(command: &Command, table: &RouteTable, out: &mut impl Write) -> RouteResult<bool> {
    match command {
        Command::Check { .. } => check(table, out),
        Command::Resolve { paths, .. } => {
            let trie = table.build_trie()?;
            resolve(&trie, paths, out)
        }
        Command::Dump { json, .. } => {
            let trie = table.build_trie()?;
            dump(&trie, *json, out)?;
            Ok(true)
        }
    }
}

fn check(table: &RouteTable, out: &mut impl Write) -> RouteResult<bool> {
    let errors = table.check();
    for error in &errors {
        writeln!(out, "error: {error}")?;
    }
    if errors.is_empty() {
        writeln!(out, "{} routes OK", table.routes.len())?;
    }
    Ok(errors.is_empty())
}

fn resolve(trie: &Trie<String>, paths: &[String], out: &mut impl Write) -> RouteResult<bool> {
    let mut all_matched = true;
    for path in paths {
        match trie.resolve(path) {
            Some((name, parameters)) => {
                writeln!(out, "{path} -> {name}{}", format_parameters(&parameters))?;
            }
            None => {
                all_matched = false;
                writeln!(out, "{path} -> no match")?;
            }
        }
    }
    Ok(all_matched)
}

fn format_parameters(parameters: &Parameters<'_>) -> String {
    let mut parts: Vec<String> = parameters
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect();
    if let Some(catch_all) = parameters.get_catch_all() {
        parts.push(format!("**={catch_all}"));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

fn dump(trie: &Trie<String>, json: bool, out: &mut impl Write) -> RouteResult<()> {
    let layout = trie.layout();
    if json {
        serde_json::to_writer_pretty(&mut *out, &layout).map_err(std::io::Error::from)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{:>5}  {:<18}  {:<16}  {:>5}  route", "index", "kind", "text", "next")?;
    for node in &layout.nodes {
        let text = match (node.text, node.parameter) {
            (Some(text), Some(name)) => format!("{text} {{{name}}}"),
            (Some(text), None) => text.to_string(),
            (None, Some(name)) => format!("{{{name}}}"),
            (None, None) => String::new(),
        };
        let next = node.next_sibling.map_or_else(|| "-".to_string(), |n| n.to_string());
        let terminal = if node.terminal { "*" } else { "" };
        writeln!(out, "{:>5}  {:<18}  {text:<16}  {next:>5}  {terminal}", node.index, node.kind)?;
    }
    writeln!(
        out,
        "{} nodes, {} constants, {} parameters, {} routes",
        trie.len(),
        layout.constants.len(),
        layout.parameters.len(),
        trie.route_count()
    )?;
    Ok(())
}
