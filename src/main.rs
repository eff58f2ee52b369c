//! `cpusched` — compare CPU scheduling disciplines on one workload.
//!
//! Usage: `cpusched [WORKLOAD.json | --interactive]`
//!
//! `--interactive` (or `-i`) prompts for each process on stdin. Without
//! an argument, a random workload is generated. Environment:
//! - `CPUSCHED_PROCESSES`: random workload size (default: 5)
//! - `CPUSCHED_SEED`: RNG seed for reproducible workloads
//! - `CPUSCHED_PARALLEL`: `1`/`true` to run disciplines on separate threads
//! - `RUST_LOG`, `CPUSCHED_TRACE_JSON`: see `monitoring::init_tracing`

use std::error::Error;
use std::io;
use std::str::FromStr;

use tracing::{info, warn};

use u_cpusched::compare::{compare, compare_parallel, MetricKind};
use u_cpusched::monitoring::init_tracing;
use u_cpusched::report;
use u_cpusched::workload::{interactive, loader, WorkloadConfig, WorkloadGenerator};

fn main() -> Result<(), Box<dyn Error>> {
    if let Err(e) = init_tracing() {
        eprintln!("tracing already initialized: {e}");
    }

    let processes = match std::env::args().nth(1).as_deref() {
        Some("-i" | "--interactive") => {
            interactive::read_processes(io::stdin().lock(), io::stdout().lock())?
        }
        Some(path) => loader::load_file(path)?,
        None => {
            let mut config = WorkloadConfig::new(env_or("CPUSCHED_PROCESSES", 5));
            if let Some(seed) = env_opt::<u64>("CPUSCHED_SEED") {
                config = config.with_seed(seed);
            }
            info!(count = config.count, seed = ?config.seed, "generating random workload");
            WorkloadGenerator::new(config).generate()?
        }
    };

    if processes.is_empty() {
        warn!("no processes to schedule");
        return Ok(());
    }

    println!("--- Processes to be Scheduled ---");
    print!("{}", report::render_workload(&processes));

    let parallel = std::env::var("CPUSCHED_PARALLEL")
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);
    let comparison = if parallel {
        compare_parallel(&processes)?
    } else {
        compare(&processes)?
    };

    for outcome in &comparison.outcomes {
        println!();
        print!("{}", report::render_outcome(outcome));
    }

    println!();
    print!("{}", report::render_comparison(&comparison));
    if let Some(best) = comparison.best_by(MetricKind::AverageWaitingTime) {
        println!("Lowest average waiting time: {best}");
    }

    Ok(())
}

fn env_opt<T: FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "ignoring unparsable environment variable");
            None
        }
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env_opt(key).unwrap_or(default)
}
