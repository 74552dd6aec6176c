//! Algolens CLI.
//!
//! Drives the visualizer's trace engine from the terminal: generates a
//! trace for one of the supported algorithms, replays it at the chosen
//! speed (or dumps it at once), and optionally exports it as JSONL for
//! later inspection. Uses the same generators and playback controller as
//! the visualizer frontend, ensuring identical step sequences from both
//! entry points.

use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::{Parser, Subcommand};

use algolens::input::{self, DemoSequenceConfig};
use algolens::listings::{self, Language};
use algolens::playback::PlaybackStatus;
use algolens::session::SessionRegistry;
use algolens::trace::{
    generate_majority_trace, generate_sorting_trace, generate_stack_trace, AlgorithmKind,
    StackTraceConfig, Trace, TraceWriter,
};

/// Algorithm visualizer trace engine.
#[derive(Parser)]
#[command(name = "algolens", about = "Algorithm visualizer trace engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Trace the Boyer-Moore majority vote over an array.
    Majority {
        /// Comma-separated input values; omit to generate a demo array.
        #[arg(short, long)]
        values: Option<String>,

        /// Seed for the demo array shuffle.
        #[arg(short, long)]
        seed: Option<u64>,

        #[command(flatten)]
        playback: PlaybackArgs,
    },

    /// Trace a push/pop script against a bounded stack.
    Stack {
        /// Operation script, e.g. "push 10, push 20, pop".
        #[arg(short, long)]
        ops: String,

        /// Maximum stack size.
        #[arg(short, long, default_value_t = 10)]
        capacity: usize,

        #[command(flatten)]
        playback: PlaybackArgs,
    },

    /// Trace a bubble sort over an array.
    Sort {
        /// Comma-separated input values; omit to generate a demo array.
        #[arg(short, long)]
        values: Option<String>,

        /// Seed for the demo array shuffle.
        #[arg(short, long)]
        seed: Option<u64>,

        #[command(flatten)]
        playback: PlaybackArgs,
    },

    /// Print reference listings for an algorithm.
    Listings {
        /// Algorithm name (majority, stack, sort).
        #[arg(short, long)]
        algorithm: String,

        /// Restrict to one language (C++, Java, Python, JavaScript).
        #[arg(short, long)]
        language: Option<String>,
    },
}

#[derive(clap::Args)]
struct PlaybackArgs {
    /// Tick interval in milliseconds.
    #[arg(short, long, default_value_t = 600)]
    interval: u64,

    /// Dump the whole trace immediately instead of replaying it.
    #[arg(long)]
    no_play: bool,

    /// Export the trace as JSONL to this path.
    #[arg(short, long)]
    export: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Majority {
            values,
            seed,
            playback,
        } => {
            trace_input(values, seed)
                .map(|input| generate_majority_trace(&input))
                .map(|trace| (trace, playback))
        }
        Commands::Stack {
            ops,
            capacity,
            playback,
        } => input::parse_stack_script(&ops)
            .map(|ops| generate_stack_trace(&ops, &StackTraceConfig { capacity }))
            .map(|trace| (trace, playback)),
        Commands::Sort {
            values,
            seed,
            playback,
        } => trace_input(values, seed)
            .map(|input| generate_sorting_trace(&input))
            .map(|trace| (trace, playback)),
        Commands::Listings {
            algorithm,
            language,
        } => {
            if let Err(message) = print_listings(&algorithm, language.as_deref()) {
                eprintln!("error: {}", message);
                process::exit(1);
            }
            return;
        }
    };

    let (trace, playback) = match result {
        Ok(pair) => pair,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    if let Some(path) = &playback.export {
        if let Err(e) = TraceWriter::new(path.clone()).write(&trace) {
            eprintln!("error: {}", e);
            process::exit(1);
        }
        println!("Exported {} steps to {}", trace.len(), path.display());
    }

    if playback.no_play {
        dump_trace(&trace);
    } else {
        play_trace(trace, Duration::from_millis(playback.interval)).await;
    }
}

fn print_listings(algorithm: &str, language: Option<&str>) -> Result<(), String> {
    let algorithm = AlgorithmKind::from_string(algorithm)
        .ok_or_else(|| format!("unknown algorithm '{}'", algorithm))?;

    let selected = match language {
        Some(name) => {
            let language = Language::from_string(name)
                .ok_or_else(|| format!("unknown language '{}'", name))?;
            vec![listings::get_listing(algorithm, language)]
        }
        None => listings::list_listings(algorithm),
    };

    for listing in selected {
        println!(
            "// {} - {} ({})",
            algorithm.display_name(),
            listing.language.display_name(),
            listing.file_name()
        );
        println!("{}", listing.source);
    }

    Ok(())
}

fn trace_input(
    values: Option<String>,
    seed: Option<u64>,
) -> Result<Vec<algolens::trace::Value>, input::InputError> {
    match values {
        Some(text) => input::parse_values(&text),
        None => input::generate_demo_sequence(&DemoSequenceConfig {
            seed,
            ..DemoSequenceConfig::default()
        }),
    }
}

fn print_step(index: usize, total: usize, step: &algolens::trace::Step) {
    println!(
        "[{:>3}/{}] phase {} {:?}  {}",
        index + 1,
        total,
        step.phase,
        step.snapshot,
        step.description
    );
}

fn dump_trace(trace: &Trace) {
    println!("{} - {} steps", trace.algorithm.display_name(), trace.len());
    for (index, step) in trace.steps.iter().enumerate() {
        print_step(index, trace.len(), step);
    }
}

/// Replay the trace on the tick driver, printing steps as they become
/// current.
async fn play_trace(trace: Trace, interval: Duration) {
    println!("{} - {} steps", trace.algorithm.display_name(), trace.len());

    let total = trace.len();
    let registry = SessionRegistry::new();
    let id = registry.create(trace, interval);

    let mut printed: Option<usize> = None;
    loop {
        let frame = match registry.current_frame(&id) {
            Some(frame) => frame,
            None => break,
        };

        if let (Some(position), Some(step)) = (frame.position, frame.step.as_ref()) {
            if printed != Some(position) {
                print_step(position, total, step);
                printed = Some(position);
            }
        }

        if frame.status == PlaybackStatus::Completed {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    registry.remove(&id);
}
