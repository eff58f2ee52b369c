//! Process record model.
//!
//! A record is the working copy of a descriptor owned by one algorithm
//! run. It starts unstarted, gains a start time on the first tick of
//! CPU it receives, and is frozen once its burst is fully consumed.

use serde::{Deserialize, Serialize};

use super::{Pid, Process, Ticks};

/// Per-process simulation state and timing results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    /// The descriptor this record was created from.
    pub process: Process,
    /// CPU ticks still owed. Only preemptive disciplines read this.
    pub remaining_time: Ticks,
    /// First tick the process held the CPU.
    pub start_time: Option<Ticks>,
    /// Tick at which the burst was fully consumed.
    pub completion_time: Option<Ticks>,
    /// `completion - arrival`.
    pub turnaround_time: Option<Ticks>,
    /// `turnaround - burst`.
    pub waiting_time: Option<Ticks>,
}

impl ProcessRecord {
    /// Creates an unstarted record with the full burst remaining.
    pub fn new(process: Process) -> Self {
        Self {
            process,
            remaining_time: process.burst_time,
            start_time: None,
            completion_time: None,
            turnaround_time: None,
            waiting_time: None,
        }
    }

    /// Creates one fresh record per descriptor, preserving input order.
    pub fn from_processes(processes: &[Process]) -> Vec<Self> {
        processes.iter().copied().map(Self::new).collect()
    }

    #[inline]
    pub fn pid(&self) -> Pid {
        self.process.pid
    }

    #[inline]
    pub fn arrival_time(&self) -> Ticks {
        self.process.arrival_time
    }

    #[inline]
    pub fn burst_time(&self) -> Ticks {
        self.process.burst_time
    }

    #[inline]
    pub fn priority(&self) -> i32 {
        self.process.priority
    }

    /// Whether the process has received the CPU at least once.
    #[inline]
    pub fn is_started(&self) -> bool {
        self.start_time.is_some()
    }

    /// Whether the whole burst has been consumed.
    #[inline]
    pub fn is_completed(&self) -> bool {
        self.completion_time.is_some()
    }

    /// Ready to run at `time`: arrived and still owing CPU.
    #[inline]
    pub fn is_ready(&self, time: Ticks) -> bool {
        self.process.has_arrived(time) && self.remaining_time > 0
    }

    /// Records the first dispatch. Later calls are ignored.
    pub fn start(&mut self, time: Ticks) {
        if self.start_time.is_none() {
            self.start_time = Some(time);
        }
    }

    /// Runs for `ticks` CPU ticks, never below zero remaining.
    pub fn consume(&mut self, ticks: Ticks) {
        self.remaining_time = (self.remaining_time - ticks).max(0);
    }

    /// Stamps completion and the derived turnaround and waiting times.
    pub fn complete(&mut self, time: Ticks) {
        let turnaround = time - self.arrival_time();
        self.remaining_time = 0;
        self.completion_time = Some(time);
        self.turnaround_time = Some(turnaround);
        self.waiting_time = Some(turnaround - self.burst_time());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_unstarted() {
        let r = ProcessRecord::new(Process::new(1, 5).with_arrival(2));
        assert_eq!(r.remaining_time, 5);
        assert!(!r.is_started());
        assert!(!r.is_completed());
        assert!(r.turnaround_time.is_none());
    }

    #[test]
    fn test_start_is_set_once() {
        let mut r = ProcessRecord::new(Process::new(1, 5));
        r.start(3);
        r.start(7);
        assert_eq!(r.start_time, Some(3));
    }

    #[test]
    fn test_complete_stamps_derived_times() {
        let mut r = ProcessRecord::new(Process::new(2, 3).with_arrival(1));
        r.start(5);
        r.complete(8);
        assert_eq!(r.completion_time, Some(8));
        assert_eq!(r.turnaround_time, Some(7));
        assert_eq!(r.waiting_time, Some(4));
        assert_eq!(r.remaining_time, 0);
    }

    #[test]
    fn test_is_ready() {
        let mut r = ProcessRecord::new(Process::new(1, 2).with_arrival(4));
        assert!(!r.is_ready(3));
        assert!(r.is_ready(4));
        r.consume(5);
        assert_eq!(r.remaining_time, 0);
        assert!(!r.is_ready(4));
    }
}
