/*!
 * Scheduler Statistics
 * Final performance metrics and mid-run snapshots
 */

use super::Scheduler;
use crate::core::types::{Pid, Tick};
use crate::process::ProcessSnapshot;
use serde::{Deserialize, Serialize};

/// Per-process results of a finished simulation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessMetrics {
    pub id: Pid,
    pub turnaround_time: Tick,
    pub waiting_time: Tick,
    pub context_switches: u32,
    pub response_time: Tick,
}

/// Aggregate results of a finished simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SimulationMetrics {
    pub gantt_chart: String,
    pub elapsed_time: Tick,
    pub idle_ticks: Tick,
    pub average_waiting_time: f64,
    pub average_turnaround_time: f64,
    pub average_response_time: f64,
    /// Completed processes per tick
    pub throughput: f64,
    /// Fraction of ticks spent executing a process
    pub utilization: f64,
    pub processes: Vec<ProcessMetrics>,
}

/// Scheduler state between two steps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SchedulerSnapshot {
    pub clock: Tick,
    pub idle_ticks: Tick,
    pub processes: Vec<ProcessSnapshot>,
    /// Head first
    pub ready_queue: Vec<Pid>,
    pub gantt_chart: String,
    pub completed: usize,
    pub total: usize,
}

#[inline]
fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

impl Scheduler {
    /// Final metrics, or `None` while processes are still unfinished
    ///
    /// Derived from state on every call; repeated calls agree.
    pub fn metrics(&self) -> Option<SimulationMetrics> {
        if !self.is_completed() {
            return None;
        }

        let processes = self
            .processes
            .iter()
            .map(|p| {
                Some(ProcessMetrics {
                    id: p.id(),
                    turnaround_time: p.turnaround_time()?,
                    waiting_time: p.waiting_time(),
                    context_switches: p.context_switches(),
                    response_time: p.response_time()?,
                })
            })
            .collect::<Option<Vec<_>>>()?;

        let count = processes.len() as f64;
        let total_wait: f64 = processes.iter().map(|m| f64::from(m.waiting_time)).sum();
        let total_turnaround: f64 = processes
            .iter()
            .map(|m| f64::from(m.turnaround_time))
            .sum();
        let total_response: f64 = processes.iter().map(|m| f64::from(m.response_time)).sum();
        let clock = f64::from(self.clock);

        Some(SimulationMetrics {
            gantt_chart: self.trace.gantt_chart(),
            elapsed_time: self.clock,
            idle_ticks: self.idle_ticks,
            average_waiting_time: ratio(total_wait, count),
            average_turnaround_time: ratio(total_turnaround, count),
            average_response_time: ratio(total_response, count),
            throughput: ratio(self.completed_count as f64, clock),
            utilization: if self.clock == 0 {
                0.0
            } else {
                1.0 - f64::from(self.idle_ticks) / clock
            },
            processes,
        })
    }

    pub fn snapshot(&self) -> SchedulerSnapshot {
        SchedulerSnapshot {
            clock: self.clock,
            idle_ticks: self.idle_ticks,
            processes: self.processes.iter().map(|p| p.snapshot()).collect(),
            ready_queue: self.ready_queue().collect(),
            gantt_chart: self.trace.gantt_chart(),
            completed: self.completed_count,
            total: self.processes.len(),
        }
    }
}
