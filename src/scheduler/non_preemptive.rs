//! Shared run-to-completion dispatch loop.
//!
//! # Algorithm
//!
//! 1. Among unstarted processes that have arrived, pick the best by the
//!    rule engine.
//! 2. If none has arrived, idle until the earliest unstarted arrival.
//! 3. Run the pick for its whole burst and emit one Gantt segment.
//!
//! Terminates after exactly `n` selections.

use tracing::debug;

use super::Simulation;
use crate::dispatching::RuleEngine;
use crate::models::{GanttChart, Process, ProcessRecord, Ticks};

pub(crate) fn run_to_completion(processes: &[Process], engine: &RuleEngine) -> Simulation {
    let mut records = ProcessRecord::from_processes(processes);
    let mut gantt = GanttChart::new();
    let mut time: Ticks = 0;

    while let Some(next_arrival) = records
        .iter()
        .filter(|r| !r.is_started())
        .map(ProcessRecord::arrival_time)
        .min()
    {
        let Some(idx) =
            engine.select_best(&records, |r| !r.is_started() && r.process.has_arrived(time))
        else {
            debug!(from = time, until = next_arrival, "cpu idle");
            time = next_arrival;
            continue;
        };

        let record = &mut records[idx];
        let burst = record.burst_time();
        let end = time + burst;
        record.start(time);
        record.consume(burst);
        record.complete(end);
        gantt.push_segment(record.pid(), time, end);
        debug!(pid = record.pid(), start = time, end, "dispatched");

        time = end;
    }

    Simulation { records, gantt }
}
