//! Parsing Options.
//! `--kind {kind}` or `-k` picks the computation; the graph comes from
//! `--input FILE` or a built-in `--demo NAME`.

use clap::{Arg, ArgAction, Command};
use std::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunKind {
    /// Kruskal minimum spanning forest.
    Mst,
    /// Bellman-Ford shortest paths with negative-cycle detection.
    Paths,
    /// Breadth-first traversal with riskiest-neighbour lookahead.
    Bfs,
    Jobs,
    Passengers,
}

impl RunKind {
    /// Built-in dataset used when neither `--input` nor `--demo` is given.
    pub fn default_demo(self) -> Option<&'static str> {
        match self {
            RunKind::Mst => Some("fiber-hubs"),
            RunKind::Paths => Some("transactions"),
            RunKind::Bfs => Some("workstations"),
            RunKind::Jobs | RunKind::Passengers => None,
        }
    }
}

fn make_options_parser() -> clap::Command {
    Command::new("spanpath")
        .no_binary_name(true)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Minimum spanning trees, shortest paths and priority queues over small networks")
        .arg(
            Arg::new("kind")
                .short('k')
                .long("kind")
                .help("The computation to run")
                .default_value("mst")
                .value_parser(["mst", "paths", "bfs", "jobs", "passengers"]),
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .help("Graph file (.json, .ron or .toml)")
                .conflicts_with("demo"),
        )
        .arg(
            Arg::new("demo")
                .short('d')
                .long("demo")
                .value_name("NAME")
                .help("Built-in dataset")
                .value_parser(["fiber-hubs", "transactions", "transactions-cycle", "workstations"]),
        )
        .arg(
            Arg::new("source")
                .short('s')
                .long("source")
                .value_name("N")
                .help("Source node for paths, start node for bfs")
                .value_parser(clap::value_parser!(u32))
                .default_value("0"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Run configuration (TOML)")
                .default_value("spanpath.toml"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Write the report here, plus FILE.json"),
        )
        .arg(
            Arg::new("dot")
                .long("dot")
                .value_name("FILE")
                .help("Export the input graph as Graphviz"),
        )
        .arg(
            Arg::new("directed")
                .long("directed")
                .action(ArgAction::SetTrue)
                .help("Draw the Graphviz export with arrows"),
        )
}

#[derive(Debug, Clone)]
pub struct Options {
    pub kind: RunKind,
    pub input: Option<String>,
    pub demo: Option<String>,
    pub source: u32,
    pub config: String,
    pub output: Option<String>,
    pub dot: Option<String>,
    pub directed: bool,
}

impl Options {
    pub fn parse_from_str(s: &str) -> Result<Self, Box<dyn Error>> {
        let flags = shellwords::split(s)?;
        Self::parse_from_args(&flags)
    }

    pub fn parse_from_args(flags: &[String]) -> Result<Self, Box<dyn Error>> {
        let app = make_options_parser();
        let matches = app.try_get_matches_from(flags.iter())?;
        let kind = match matches.get_one::<String>("kind").map(String::as_str) {
            Some("mst") => RunKind::Mst,
            Some("paths") => RunKind::Paths,
            Some("bfs") => RunKind::Bfs,
            Some("jobs") => RunKind::Jobs,
            Some("passengers") => RunKind::Passengers,
            _ => return Err("UnsupportedRunKind".into()),
        };

        let string = |id: &str| matches.get_one::<String>(id).cloned();
        Ok(Options {
            kind,
            input: string("input"),
            demo: string("demo"),
            source: matches.get_one::<u32>("source").copied().unwrap_or(0),
            config: string("config").unwrap_or_else(|| "spanpath.toml".to_string()),
            output: string("output"),
            dot: string("dot"),
            directed: matches.get_flag("directed"),
        })
    }

    /// Dataset to load when no input file is given.
    pub fn demo_name(&self) -> Option<&str> {
        self.demo.as_deref().or_else(|| self.kind.default_demo())
    }
}
