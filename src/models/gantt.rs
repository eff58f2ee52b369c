//! Gantt timeline model.
//!
//! A Gantt chart is the ordered list of CPU-ownership intervals for one
//! run. Gaps between segments are idle CPU time.
//!
//! # Invariants
//!
//! - Segments are ordered by start and never overlap.
//! - Every segment has `end > start`.
//! - No two adjacent segments share a PID when the first ends where
//!   the second starts; such slices are merged on append.

use serde::{Deserialize, Serialize};

use super::{Pid, Ticks};

/// A half-open interval `[start, end)` during which `pid` owned the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttSegment {
    pub pid: Pid,
    pub start: Ticks,
    pub end: Ticks,
}

impl GanttSegment {
    pub fn new(pid: Pid, start: Ticks, end: Ticks) -> Self {
        Self { pid, start, end }
    }

    /// Length of the interval in ticks.
    #[inline]
    pub fn duration(&self) -> Ticks {
        self.end - self.start
    }
}

/// Gantt recorder.
///
/// Accepts whole segments from non-preemptive disciplines and single
/// ticks from preemptive ones, merging contiguous same-owner slices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttChart {
    segments: Vec<GanttSegment>,
}

impl GanttChart {
    /// Creates an empty chart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `pid` ran during the tick `[time, time + 1)`.
    pub fn record_tick(&mut self, pid: Pid, time: Ticks) {
        self.push_segment(pid, time, time + 1);
    }

    /// Appends `[start, end)` for `pid`.
    ///
    /// Empty intervals are ignored. An interval that continues the last
    /// segment of the same process extends it instead of opening a new one.
    pub fn push_segment(&mut self, pid: Pid, start: Ticks, end: Ticks) {
        if end <= start {
            return;
        }
        debug_assert!(
            self.end_time().map_or(true, |last_end| start >= last_end),
            "segment [{start}, {end}) for P{pid} overlaps the timeline"
        );

        match self.segments.last_mut() {
            Some(last) if last.pid == pid && last.end == start => last.end = end,
            _ => self.segments.push(GanttSegment::new(pid, start, end)),
        }
    }

    pub fn segments(&self) -> &[GanttSegment] {
        &self.segments
    }

    pub fn into_segments(self) -> Vec<GanttSegment> {
        self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// End of the last segment, if any.
    pub fn end_time(&self) -> Option<Ticks> {
        self.segments.last().map(|s| s.end)
    }

    /// Total ticks the CPU was owned by some process.
    pub fn busy_ticks(&self) -> Ticks {
        self.segments.iter().map(GanttSegment::duration).sum()
    }

    /// Total ticks of gaps between consecutive segments.
    pub fn idle_ticks(&self) -> Ticks {
        self.segments
            .windows(2)
            .map(|w| w[1].start - w[0].end)
            .sum()
    }

    /// Segments owned by a given process, in time order.
    pub fn segments_for(&self, pid: Pid) -> Vec<&GanttSegment> {
        self.segments.iter().filter(|s| s.pid == pid).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contiguous_ticks_merge() {
        let mut g = GanttChart::new();
        g.record_tick(1, 0);
        g.record_tick(1, 1);
        g.record_tick(1, 2);
        assert_eq!(g.segments(), &[GanttSegment::new(1, 0, 3)]);
    }

    #[test]
    fn test_owner_change_opens_segment() {
        let mut g = GanttChart::new();
        g.record_tick(1, 0);
        g.record_tick(2, 1);
        g.record_tick(2, 2);
        g.record_tick(1, 3);
        assert_eq!(
            g.segments(),
            &[
                GanttSegment::new(1, 0, 1),
                GanttSegment::new(2, 1, 3),
                GanttSegment::new(1, 3, 4),
            ]
        );
    }

    #[test]
    fn test_gap_prevents_merge() {
        let mut g = GanttChart::new();
        g.push_segment(1, 0, 2);
        g.push_segment(1, 4, 6);
        assert_eq!(g.len(), 2);
        assert_eq!(g.idle_ticks(), 2);
        assert_eq!(g.busy_ticks(), 4);
    }

    #[test]
    fn test_empty_interval_ignored() {
        let mut g = GanttChart::new();
        g.push_segment(1, 3, 3);
        assert!(g.is_empty());
        assert_eq!(g.end_time(), None);
    }

    #[test]
    fn test_segments_for() {
        let mut g = GanttChart::new();
        g.push_segment(1, 0, 1);
        g.push_segment(2, 1, 5);
        g.push_segment(1, 5, 12);
        let p1 = g.segments_for(1);
        assert_eq!(p1.len(), 2);
        assert_eq!(p1[1].duration(), 7);
        assert_eq!(g.end_time(), Some(12));
    }
}
