//! Plain-text rendering of workloads and outcomes.
//!
//! Pure consumers: nothing here mutates what it is given, and the
//! schedulers never depend on this module. Each table is a borrowing
//! [`fmt::Display`] wrapper; the `render_*` helpers collect one into a
//! `String`.

use std::fmt;

use crate::compare::Comparison;
use crate::models::{GanttSegment, Process, Ticks};
use crate::scheduler::ScheduleOutcome;

const RULE_WIDTH: usize = 75;

/// Input descriptors, sorted by arrival.
#[derive(Debug, Clone, Copy)]
pub struct WorkloadTable<'a>(pub &'a [Process]);

impl fmt::Display for WorkloadTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sorted = self.0.to_vec();
        sorted.sort_by_key(|p| (p.arrival_time, p.pid));

        writeln!(f, "PID | AT | BT | PR")?;
        writeln!(f, "----|----|----|----")?;
        for p in &sorted {
            writeln!(
                f,
                "{:<3} | {:<2} | {:<2} | {:<2}",
                p.pid, p.arrival_time, p.burst_time, p.priority
            )?;
        }
        Ok(())
    }
}

/// One outcome: per-process table, metrics, and timeline.
#[derive(Debug, Clone, Copy)]
pub struct OutcomeReport<'a>(pub &'a ScheduleOutcome);

impl fmt::Display for OutcomeReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = self.0;
        let rule = "-".repeat(RULE_WIDTH);

        writeln!(f, "--- {} Scheduling Results ---", outcome.algorithm)?;
        writeln!(f, "PID Arrival Burst Priority Start Completion Turnaround Waiting")?;
        writeln!(f, "{rule}")?;

        for r in &outcome.records {
            writeln!(
                f,
                "{:<3} {:<7} {:<5} {:<8} {:<5} {:<11} {:<10} {:<7}",
                r.pid(),
                r.arrival_time(),
                r.burst_time(),
                r.priority(),
                cell(r.start_time),
                cell(r.completion_time),
                cell(r.turnaround_time),
                cell(r.waiting_time),
            )?;
        }

        writeln!(f, "{rule}")?;
        let m = &outcome.metrics;
        writeln!(
            f,
            "Avg Waiting Time={:.2} Avg Turnaround Time={:.2} Throughput={:.2} CPU Utilization={:.2}",
            m.average_waiting_time,
            m.average_turnaround_time,
            m.throughput,
            outcome.cpu_utilization(),
        )?;
        writeln!(
            f,
            "Gantt Chart (PID:Start->End): {}",
            render_gantt(outcome.gantt.segments())
        )
    }
}

/// One summary row per discipline.
#[derive(Debug, Clone, Copy)]
pub struct ComparisonTable<'a>(pub &'a Comparison);

impl fmt::Display for ComparisonTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<10} {:>12} {:>15} {:>11}",
            "Algorithm", "Avg Waiting", "Avg Turnaround", "Throughput"
        )?;
        for o in &self.0.outcomes {
            writeln!(
                f,
                "{:<10} {:>12.2} {:>15.2} {:>11.2}",
                o.algorithm.name(),
                o.metrics.average_waiting_time,
                o.metrics.average_turnaround_time,
                o.metrics.throughput,
            )?;
        }
        Ok(())
    }
}

/// Renders the input descriptors, sorted by arrival.
pub fn render_workload(processes: &[Process]) -> String {
    WorkloadTable(processes).to_string()
}

/// Renders a Gantt timeline as `P1:0->5 P2:5->8`.
pub fn render_gantt(segments: &[GanttSegment]) -> String {
    segments
        .iter()
        .map(|s| format!("P{}:{}->{}", s.pid, s.start, s.end))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders one outcome.
pub fn render_outcome(outcome: &ScheduleOutcome) -> String {
    OutcomeReport(outcome).to_string()
}

/// Renders the comparison summary.
pub fn render_comparison(comparison: &Comparison) -> String {
    ComparisonTable(comparison).to_string()
}

fn cell(value: Option<Ticks>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use std::fmt::Write;

    use super::*;
    use crate::compare::compare;
    use crate::scheduler::Algorithm;

    #[test]
    fn test_render_gantt() {
        let segments = vec![GanttSegment::new(1, 0, 5), GanttSegment::new(2, 5, 8)];
        assert_eq!(render_gantt(&segments), "P1:0->5 P2:5->8");
        assert_eq!(render_gantt(&[]), "");
    }

    #[test]
    fn test_render_outcome() {
        let processes = vec![Process::new(1, 5), Process::new(2, 3).with_arrival(1)];
        let outcome = Algorithm::Fcfs.run(&processes).unwrap();

        let text = render_outcome(&outcome);
        assert!(text.starts_with("--- FCFS Scheduling Results ---"));
        assert!(text.contains("Avg Waiting Time=2.00"));
        assert!(text.contains("Throughput=0.25"));
        assert!(text.contains("P1:0->5 P2:5->8"));
    }

    #[test]
    fn test_unset_fields_render_as_dash() {
        assert_eq!(cell(None), "-");
        assert_eq!(cell(Some(4)), "4");
    }

    #[test]
    fn test_render_workload_sorted_by_arrival() {
        let processes = vec![Process::new(1, 2).with_arrival(5), Process::new(2, 3)];
        let text = render_workload(&processes);
        let rows: Vec<&str> = text.lines().skip(2).collect();
        assert!(rows[0].starts_with("2 "));
        assert!(rows[1].starts_with("1 "));
    }

    #[test]
    fn test_render_comparison_has_row_per_algorithm() {
        let comparison = compare(&[Process::new(1, 3)]).unwrap();
        let text = render_comparison(&comparison);
        assert_eq!(text.lines().count(), 5);
        assert!(text.contains("SRTF"));
    }

    /// Accepts `limit` bytes, then fails every write.
    struct Truncating {
        written: String,
        limit: usize,
    }

    impl Write for Truncating {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            if self.written.len() + s.len() > self.limit {
                return Err(fmt::Error);
            }
            self.written.push_str(s);
            Ok(())
        }
    }

    #[test]
    fn test_write_errors_propagate() {
        let outcome = Algorithm::Sjf.run(&[Process::new(1, 3)]).unwrap();
        let comparison = compare(&[Process::new(1, 3)]).unwrap();
        let processes = [Process::new(1, 3)];

        let mut sink = Truncating { written: String::new(), limit: 20 };
        assert!(write!(sink, "{}", OutcomeReport(&outcome)).is_err());
        assert!(sink.written.len() <= 20);

        let mut sink = Truncating { written: String::new(), limit: 20 };
        assert!(write!(sink, "{}", ComparisonTable(&comparison)).is_err());

        let mut sink = Truncating { written: String::new(), limit: 20 };
        assert!(write!(sink, "{}", WorkloadTable(&processes)).is_err());
    }
}
