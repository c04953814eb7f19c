//! Strata trace replay
//!
//! Replays a recorded trace and prints one JSON line per frame, followed by
//! a summary line.
//!
//! Usage: `strata-replay <trace.json> [--summary-only]`

use std::env;
use std::io::{self, Write};

use strata_replay::{Replay, Trace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "strata_replay=info,strata_lod=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args: Vec<String> = env::args().collect();
    let Some(path) = args.get(1) else {
        eprintln!("usage: strata-replay <trace.json> [--summary-only]");
        std::process::exit(2);
    };
    let summary_only = args.iter().skip(2).any(|a| a == "--summary-only");

    let trace = Trace::load(path)?;
    tracing::info!(
        "Replaying {} frames across {} elements from {}",
        trace.frames.len(),
        trace.elements.len(),
        path
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut replay = Replay::new(trace);
    while let Some(report) = replay.step() {
        if !summary_only {
            serde_json::to_writer(&mut out, &report)?;
            writeln!(out)?;
        }
    }

    let summary = replay.summary();
    serde_json::to_writer(&mut out, &summary)?;
    writeln!(out)?;

    let transitions: u64 = summary.elements.iter().map(|e| e.transitions).sum();
    let rejected: u64 = summary.elements.iter().map(|e| e.rejected_samples).sum();
    tracing::info!(
        "Replay complete: {} frames, {} tier transitions, {} rejected zoom samples",
        summary.frames_played,
        transitions,
        rejected
    );

    Ok(())
}
