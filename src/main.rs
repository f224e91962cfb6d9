//! tortoise-hare CLI entry point.

use std::fs;
use std::io::{self, Read, Write};
use std::process;
use std::thread;
use std::time::Duration;

use clap::Parser;

use tortoise_hare::config::RenderConfig;
use tortoise_hare::export::Visualization;
use tortoise_hare::list::{ListGraph, build};
use tortoise_hare::parsers;
use tortoise_hare::render::FrameRenderer;
use tortoise_hare::sim::{Playback, simulate};

/// Find the middle of a linked list with the tortoise and hare walk.
#[derive(Parser, Debug)]
#[command(
    name = "tortoise-hare",
    about = "Tortoise and hare middle-of-list finder with step-by-step frames",
    version = env!("TORTOISE_HARE_VERSION")
)]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<String>,

    /// Use plain ASCII instead of Unicode box-drawing characters
    #[arg(short = 'a', long = "ascii")]
    use_ascii: bool,

    /// Head identifier (overrides the source's `head:` directive)
    #[arg(long = "head")]
    head: Option<String>,

    /// Node padding (spaces inside box borders)
    #[arg(short = 'p', long = "padding", default_value = "1")]
    padding: usize,

    /// Emit the node and step sequences as JSON instead of frames
    #[arg(short = 'j', long = "json")]
    json: bool,

    /// Animate the frames on stdout instead of printing them all at once
    #[arg(long = "play")]
    play: bool,

    /// Delay between animated frames, in milliseconds
    #[arg(long = "delay-ms", default_value = "1500")]
    delay_ms: u64,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    // Read input from file or stdin
    let text = if let Some(ref path) = cli.input {
        match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: cannot read '{}': {}", path, e);
                process::exit(1);
            }
        }
    } else {
        let mut buf = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            eprintln!("error: cannot read stdin: {}", e);
            process::exit(1);
        }
        buf
    };

    // Parse and resolve the head
    let spec = match parsers::parse(&text) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };
    let head = match spec.resolve_head(cli.head.as_deref()) {
        Ok(h) => h,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    // Advisory diagnostics on the raw edge set
    let graph = ListGraph::from_edges(&spec.edges);
    if graph.has_cycle() {
        eprintln!("note: the edge set contains a cycle; traversal stops at the first revisit");
    }
    for id in graph.branch_points() {
        eprintln!("note: node '{}' has more than one outgoing edge; the last one wins", id);
    }

    let nodes = build(&head, &spec.edges);
    if nodes.is_empty() {
        println!(
            "List is empty. Add at least one connection starting from '{}'.",
            head
        );
        return;
    }
    let unreachable = graph.unreachable_from(&head);
    if !unreachable.is_empty() {
        eprintln!(
            "note: not reachable from '{}': {}",
            head,
            unreachable.join(", ")
        );
    }

    let steps = simulate(&nodes);
    let renderer = FrameRenderer::new(RenderConfig {
        unicode: !cli.use_ascii,
        padding: cli.padding,
    });

    // Timed playback drives the precomputed steps through Playback;
    // no recomputation happens between frames.
    if cli.play && !cli.json {
        let delay = Duration::from_millis(cli.delay_ms);
        let mut playback = Playback::new(steps);
        playback.play();
        if let Some(step) = playback.current() {
            println!("{}\n", renderer.render_frame(&nodes, step));
        }
        loop {
            thread::sleep(delay);
            match playback.tick() {
                Some(step) => println!("{}\n", renderer.render_frame(&nodes, step)),
                None => break,
            }
        }
        return;
    }

    let rendered = if cli.json {
        match Visualization::new(nodes, steps).to_json() {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: {}", e);
                process::exit(1);
            }
        }
    } else {
        renderer.render_all(&nodes, &steps)
    };

    // Write output to file or stdout
    if let Some(ref path) = cli.output {
        match fs::write(path, rendered) {
            Ok(()) => {}
            Err(e) => {
                eprintln!("error: cannot write '{}': {}", path, e);
                process::exit(1);
            }
        }
    } else {
        println!("{}", rendered);
        if let Err(e) = io::stdout().flush() {
            eprintln!("error: cannot flush stdout: {}", e);
            process::exit(1);
        }
    }
}
