use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use log::info;

use spanpath::algo::{bfs_with_lookahead, BellmanFord, KruskalBuilder};
use spanpath::config::RunConfig;
use spanpath::datasets;
use spanpath::graph::io::read_any;
use spanpath::graph::{AdjacencyMatrix, NamingScheme, NodeId, NodeNaming, WeightedGraph};
use spanpath::options::{Options, RunKind};
use spanpath::queue::MaxPriorityQueue;
use spanpath::report::{MstReport, PathReport, QueueReport, TraversalReport};

/// Graph to run on, and how to name its nodes.
struct Input {
    title: String,
    graph: WeightedGraph,
    naming: NamingScheme,
}

fn load_input(options: &Options, config: &RunConfig) -> Result<Input> {
    if let Some(path) = &options.input {
        let graph: WeightedGraph =
            read_any(path).with_context(|| format!("Failed to load graph from {path}"))?;
        return Ok(Input {
            title: path.clone(),
            graph,
            naming: config.naming.clone(),
        });
    }

    let name = options
        .demo_name()
        .ok_or_else(|| anyhow!("no graph input for this kind"))?;
    let dataset = datasets::by_name(name)?.ok_or_else(|| anyhow!("unknown demo {name}"))?;
    Ok(Input {
        title: dataset.name.to_string(),
        graph: dataset.graph,
        naming: NamingScheme::Labels(dataset.labels),
    })
}

fn emit<R: std::fmt::Display>(
    report: &R,
    output: Option<&str>,
    save: impl FnOnce(&str) -> Result<()>,
) -> Result<()> {
    println!("{report}");
    if let Some(path) = output {
        save(path)?;
        info!("report written to {path} and {path}.json");
    }
    Ok(())
}

fn run_graph(options: &Options, config: &RunConfig) -> Result<()> {
    let input = load_input(options, config)?;
    let naming: &dyn NodeNaming = &input.naming;
    input.graph.log_diagnostics(naming);

    if let Some(dot) = &options.dot {
        input
            .graph
            .write_dot(dot, naming, options.directed)
            .with_context(|| format!("Failed to write {dot}"))?;
    }

    let output = options.output.as_deref();
    let source = NodeId::new(options.source);
    let started = Instant::now();
    match options.kind {
        RunKind::Mst => {
            let forest = KruskalBuilder::new()
                .trace_steps(config.trace_steps)
                .build(&input.graph)?;
            let report = MstReport::new(input.title, &forest, naming, started.elapsed());
            emit(&report, output, |path| Ok(report.save_to_file(path)?))
        }
        RunKind::Paths => {
            let paths = BellmanFord::new()
                .early_exit(config.early_exit)
                .solve(&input.graph, source)?;
            let report = PathReport::new(input.title, &paths, naming, started.elapsed());
            emit(&report, output, |path| Ok(report.save_to_file(path)?))
        }
        RunKind::Bfs => {
            let matrix = AdjacencyMatrix::from_undirected(&input.graph);
            let traversal = bfs_with_lookahead(&matrix, source)?;
            let report = TraversalReport::new(&traversal, naming);
            emit(&report, output, |path| Ok(report.save_to_file(path)?))
        }
        RunKind::Jobs | RunKind::Passengers => {
            Err(anyhow!("{:?} does not take a graph", options.kind))
        }
    }
}

/// Build the job heap, add an urgent job and abort it again from the root.
fn run_jobs(config: &RunConfig) -> Result<QueueReport> {
    let mut report = QueueReport::new("Job scheduling");
    let mut queue =
        MaxPriorityQueue::from_entries(datasets::job_priorities(), config.queue_capacity)?;
    report.snapshot("build max-heap", &queue);

    queue.push("L".to_string(), 100)?;
    report.snapshot("insert urgent job L (100)", &queue);

    let aborted = queue.pop()?;
    report.snapshot(format!("abort job {} ({})", aborted.item, aborted.priority), &queue);
    Ok(report)
}

/// Build the passenger heap, admit a new high-risk passenger, then clear them.
fn run_passengers(config: &RunConfig) -> Result<QueueReport> {
    let mut report = QueueReport::new("Passenger screening");
    let mut queue =
        MaxPriorityQueue::from_entries(datasets::passengers(), config.queue_capacity)?;
    report.snapshot("build max-heap", &queue);
    report.record_processing_order(&queue);

    queue.push("New_Passenger".to_string(), 98)?;
    report.snapshot("insert New_Passenger (98)", &queue);

    queue.remove_by_priority(98)?;
    report.snapshot("clear passenger with risk 98", &queue);
    Ok(report)
}

fn run(options: &Options) -> Result<()> {
    let config = RunConfig::load_from_file(&options.config)?;
    info!("running {:?} with {:?}", options.kind, config);

    match options.kind {
        RunKind::Jobs | RunKind::Passengers => {
            let report = if options.kind == RunKind::Jobs {
                run_jobs(&config)?
            } else {
                run_passengers(&config)?
            };
            emit(&report, options.output.as_deref(), |path| {
                Ok(report.save_to_file(path)?)
            })
        }
        _ => run_graph(options, &config),
    }
}

fn main() -> Result<()> {
    if std::env::var("SPANPATH_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("SPANPATH_LOG")
            .write_style("SPANPATH_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = if args.is_empty() {
        Options::parse_from_str(&std::env::var("SPANPATH_FLAGS").unwrap_or_default())
    } else {
        Options::parse_from_args(&args)
    }
    .map_err(|err| anyhow!("{err}"))?;

    run(&options)
}
