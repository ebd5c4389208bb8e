/*!
 * Report Formatting
 * Human-readable rendering of metrics and scheduler snapshots
 */

use crate::process::ProcessSnapshot;
use crate::scheduler::{ProcessMetrics, SchedulerSnapshot, SimulationMetrics};
use std::fmt::{self, Write};

/// Message printed when metrics are requested before the run finished
pub const NOT_COMPLETED: &str = "simulation not completed";

/// Full end-of-run report
pub fn format_metrics(metrics: &SimulationMetrics) -> String {
    metrics.to_string()
}

/// Per-step scheduler state dump
pub fn format_snapshot(snapshot: &SchedulerSnapshot) -> String {
    snapshot.to_string()
}

/// Report for a scheduler that may not have finished
pub fn format_optional_metrics(metrics: Option<&SimulationMetrics>) -> String {
    match metrics {
        Some(metrics) => format_metrics(metrics),
        None => format!("{NOT_COMPLETED}\n"),
    }
}

impl fmt::Display for SimulationMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simulation Completed!")?;
        writeln!(f, "Gantt Chart: {}", self.gantt_chart)?;
        writeln!(f, "Elapsed Time: {}", self.elapsed_time)?;
        writeln!(f, "CPU Idle Time: {}", self.idle_ticks)?;
        writeln!(f, "Average Wait Time: {:.2}", self.average_waiting_time)?;
        writeln!(f, "Average Turnaround Time: {:.2}", self.average_turnaround_time)?;
        writeln!(f, "Average Response Time: {:.2}", self.average_response_time)?;
        writeln!(f, "Throughput: {:.4}", self.throughput)?;
        writeln!(f, "CPU Utilization: {:.4}", self.utilization)?;
        for process in &self.processes {
            writeln!(f, "{process}")?;
        }
        Ok(())
    }
}

impl fmt::Display for ProcessMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Id: {} || Turnaround: {} || Wait Time: {} || Context Switches: {} || Response Time: {}",
            self.id, self.turnaround_time, self.waiting_time, self.context_switches, self.response_time
        )
    }
}

impl fmt::Display for ProcessSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} || Remaining Burst Time: {} || Time Waiting: {} || Context Switches: {} || Responded: {} || Completed: {}",
            self.id,
            self.remaining_burst,
            self.waiting_time,
            self.context_switches,
            self.has_responded(),
            self.is_completed()
        )
    }
}

impl fmt::Display for SchedulerSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "clock: {}", self.clock)?;
        for process in &self.processes {
            writeln!(f, "{process}")?;
        }

        let mut queue = String::new();
        for pid in &self.ready_queue {
            write!(queue, "{pid}|")?;
        }
        writeln!(f, "Ready Queue: {queue}")?;
        writeln!(f, "Gantt Chart: {}", self.gantt_chart)?;
        writeln!(f, "processes completed {}/{}", self.completed, self.total)
    }
}
