/*!
 * Scheduler Tests
 * End-to-end round-robin scenarios with exact tick accounting
 */

use pretty_assertions::assert_eq;
use rr_sim::{ProcessDescriptor, ProcessMetrics, Scheduler, SimConfig, StepOutcome};

fn simulate(raw: &[(u32, u32, u32)], quantum: u32, switch: u32) -> Scheduler {
    let mut scheduler = Scheduler::new(
        raw.iter().copied().map(ProcessDescriptor::from),
        SimConfig::new(quantum, switch).unwrap(),
    );
    scheduler.run_to_completion();
    scheduler
}

#[test]
fn test_single_process_runs_back_to_back() {
    let s = simulate(&[(1, 0, 5)], 2, 0);
    let p = s.process(1).unwrap();

    assert_eq!(s.trace().gantt_chart(), "->P1->P1->P1");
    assert_eq!(s.clock(), 5);
    assert_eq!(s.idle_ticks(), 0);
    // Last executed tick
    assert_eq!(p.completion_time(), Some(4));
    assert_eq!(p.turnaround_time(), Some(5));
    assert_eq!(p.waiting_time(), 0);
    assert_eq!(p.response_time(), Some(0));
}

#[test]
fn test_two_processes_alternate_with_overhead() {
    let s = simulate(&[(1, 0, 4), (2, 0, 4)], 2, 1);

    assert_eq!(s.trace().gantt_chart(), "->P1->P2->P1->P2");
    assert_eq!(s.clock(), 10);
    assert_eq!(s.idle_ticks(), 2);
    assert_eq!(s.process(1).unwrap().completion_time(), Some(7));
    assert_eq!(s.process(2).unwrap().completion_time(), Some(9));

    let metrics = s.metrics().unwrap();
    assert_eq!(
        metrics.processes,
        vec![
            ProcessMetrics {
                id: 1,
                turnaround_time: 8,
                waiting_time: 2,
                context_switches: 1,
                response_time: 0,
            },
            ProcessMetrics {
                id: 2,
                turnaround_time: 10,
                waiting_time: 4,
                context_switches: 1,
                response_time: 3,
            },
        ]
    );
    assert_eq!(metrics.average_waiting_time, 3.0);
    assert_eq!(metrics.average_turnaround_time, 9.0);
    assert_eq!(metrics.average_response_time, 1.5);
    assert_eq!(metrics.throughput, 0.2);
    assert!((metrics.utilization - 0.8).abs() < 1e-12);
}

#[test]
fn test_late_arrival_idles_first() {
    let mut s = Scheduler::new(
        vec![ProcessDescriptor::new(1, 3, 2)],
        SimConfig::new(2, 1).unwrap(),
    );

    assert_eq!(s.step(), StepOutcome::Idle { ticks: 3 });
    assert_eq!(s.clock(), 3);
    assert_eq!(s.idle_ticks(), 3);

    s.run_to_completion();
    let p = s.process(1).unwrap();
    assert_eq!(p.response_time(), Some(0));
    assert_eq!(p.waiting_time(), 0);
    assert_eq!(p.turnaround_time(), Some(2));
    assert_eq!(s.clock(), 5);

    let metrics = s.metrics().unwrap();
    assert!((metrics.utilization - 0.4).abs() < 1e-12);
}

#[test]
fn test_idle_gap_between_processes() {
    let s = simulate(&[(1, 0, 2), (2, 6, 1)], 4, 2);

    assert_eq!(s.trace().gantt_chart(), "->P1->P2");
    // Ticks 2..6 idle, P2 runs at 6
    assert_eq!(s.idle_ticks(), 4);
    assert_eq!(s.clock(), 7);
    assert_eq!(s.process(2).unwrap().completion_time(), Some(6));
}

#[test]
fn test_simultaneous_arrivals_keep_input_order() {
    let s = simulate(&[(9, 0, 1), (3, 0, 1), (5, 0, 1)], 1, 0);
    assert_eq!(s.trace().gantt_chart(), "->P9->P3->P5");
}

#[test]
fn test_quantum_larger_than_burst_finishes_early() {
    let s = simulate(&[(1, 0, 2), (2, 0, 3)], 10, 5);

    assert_eq!(s.trace().gantt_chart(), "->P1->P2");
    assert_eq!(s.idle_ticks(), 0);
    assert_eq!(s.clock(), 5);
    assert_eq!(s.process(2).unwrap().waiting_time(), 2);
}

#[test]
fn test_overhead_skipped_only_when_same_process_is_next() {
    // P2 arrives while P1 runs; from then on every requeue switches
    let s = simulate(&[(1, 0, 6), (2, 3, 2)], 2, 1);

    // P1 [0,2) alone -> no overhead; P1 [2,4) then P2 is head -> switch at 4
    // P2 [5,7) completes; P1 [7,9) completes
    assert_eq!(s.trace().gantt_chart(), "->P1->P1->P2->P1");
    assert_eq!(s.idle_ticks(), 1);
    assert_eq!(s.clock(), 9);
    assert_eq!(s.process(1).unwrap().context_switches(), 2);
    assert_eq!(s.process(2).unwrap().waiting_time(), 1);
}

#[test]
fn test_metrics_are_idempotent() {
    let s = simulate(&[(1, 0, 3), (2, 1, 4), (3, 2, 2)], 2, 1);
    let first = s.metrics().unwrap();
    let second = s.metrics().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_metrics_unavailable_mid_run() {
    let mut s = Scheduler::new(
        vec![
            ProcessDescriptor::new(1, 0, 3),
            ProcessDescriptor::new(2, 0, 3),
        ],
        SimConfig::new(1, 0).unwrap(),
    );

    s.step();
    assert!(!s.is_completed());
    assert!(s.metrics().is_none());
}

#[test]
fn test_snapshot_mid_run() {
    let mut s = Scheduler::new(
        vec![
            ProcessDescriptor::new(1, 0, 3),
            ProcessDescriptor::new(2, 1, 1),
        ],
        SimConfig::new(2, 0).unwrap(),
    );

    s.step();
    let snap = s.snapshot();
    assert_eq!(snap.clock, 2);
    assert_eq!(snap.ready_queue, vec![2, 1]);
    assert_eq!(snap.gantt_chart, "->P1");
    assert_eq!(snap.processes[0].remaining_burst, 1);
    assert_eq!(snap.processes[1].waiting_time, 1);
    assert_eq!(snap.completed, 0);
}
