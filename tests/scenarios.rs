//! End-to-end scheduling scenarios through the public API.

use u_cpusched::compare::compare;
use u_cpusched::models::{GanttSegment, Process};
use u_cpusched::scheduler::{Algorithm, CpuScheduler, Fcfs, PriorityScheduler, Srtf};
use u_cpusched::workload::loader;

#[test]
fn test_fcfs_two_processes() {
    let processes = vec![Process::new(1, 5), Process::new(2, 3).with_arrival(1)];

    let outcome = Fcfs::new().run(&processes).unwrap();
    assert_eq!(
        outcome.gantt.segments(),
        &[GanttSegment::new(1, 0, 5), GanttSegment::new(2, 5, 8)]
    );
    assert_eq!(outcome.record(1).unwrap().waiting_time, Some(0));
    assert_eq!(outcome.record(2).unwrap().waiting_time, Some(4));
}

#[test]
fn test_srtf_preemption_yields_three_segments() {
    let processes = vec![Process::new(1, 8), Process::new(2, 4).with_arrival(1)];

    let outcome = Srtf::new().run(&processes).unwrap();
    assert_eq!(
        outcome.gantt.segments(),
        &[
            GanttSegment::new(1, 0, 1),
            GanttSegment::new(2, 1, 5),
            GanttSegment::new(1, 5, 12),
        ]
    );
}

#[test]
fn test_priority_one_runs_before_priority_two() {
    let processes = vec![
        Process::new(1, 1).with_priority(2),
        Process::new(2, 10).with_priority(1),
    ];

    let outcome = PriorityScheduler::new().run(&processes).unwrap();
    assert_eq!(outcome.gantt.segments()[0].pid, 2);
    assert_eq!(outcome.record(1).unwrap().start_time, Some(10));
}

#[test]
fn test_all_disciplines_from_workload_file() {
    let json = r#"[
        {"PID": 1, "ArrivalTime": 0, "BurstTime": 6, "Priority": 3},
        {"PID": 2, "ArrivalTime": 2, "BurstTime": 2, "Priority": 1},
        {"PID": 3, "ArrivalTime": 4, "BurstTime": 1, "Priority": 2},
        {"PID": 4, "ArrivalTime": 20, "BurstTime": 3, "Priority": 1}
    ]"#;
    let processes = loader::from_json_str(json).unwrap();

    let comparison = compare(&processes).unwrap();
    for outcome in &comparison.outcomes {
        assert_eq!(outcome.records.len(), 4, "{}", outcome.algorithm);
        assert!(outcome.metrics.all_completed());
        // P4 arrives after everything else has finished
        assert_eq!(outcome.record(4).unwrap().start_time, Some(20));
        assert_eq!(outcome.gantt.idle_ticks(), 11);
    }

    let srtf = comparison.outcome(Algorithm::Srtf).unwrap();
    let pids: Vec<_> = srtf.gantt.segments().iter().map(|s| s.pid).collect();
    assert_eq!(pids, vec![1, 2, 3, 1, 4]);
}

#[test]
fn test_validation_error_names_offender() {
    let processes = vec![Process::new(1, 3), Process::new(7, 2).with_arrival(-4)];

    let err = Algorithm::Sjf.run(&processes).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("P7"), "{message}");
    assert!(message.contains("-4"), "{message}");
}
