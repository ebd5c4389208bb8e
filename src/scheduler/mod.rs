/*!
 * Round-Robin Scheduler
 * Simulation clock, ready queue and process table
 */

use crate::core::types::{Pid, ProcessDescriptor, Tick};
use crate::process::Process;
use std::collections::VecDeque;
use tracing::info;

mod admission;
mod operations;
mod stats;
pub mod types;

pub use stats::{ProcessMetrics, SchedulerSnapshot, SimulationMetrics};
pub use types::{Dispatch, SimConfig, StepOutcome, Trace};

/// Round-robin CPU scheduler over a fixed process table
///
/// Processes are addressed by their index in the table; the ready queue holds
/// indices, never references. Time only moves forward, one tick at a time,
/// inside [`step`](Self::step).
#[derive(Debug, Clone)]
pub struct Scheduler {
    config: SimConfig,

    clock: Tick,
    idle_ticks: Tick,

    // Canonical process state, in input order
    processes: Vec<Process>,

    // Indices into `processes`, FIFO
    ready_queue: VecDeque<usize>,

    completed_count: usize,
    trace: Trace,
}

impl Scheduler {
    /// Build a scheduler and admit everything arriving at tick 0
    pub fn new<I>(descriptors: I, config: SimConfig) -> Self
    where
        I: IntoIterator<Item = ProcessDescriptor>,
    {
        let processes: Vec<Process> = descriptors.into_iter().map(Process::new).collect();

        info!(
            processes = processes.len(),
            quantum = config.time_quantum(),
            context_switch = config.context_switch_time(),
            "Scheduler initialized"
        );

        let mut scheduler = Self {
            config,
            clock: 0,
            idle_ticks: 0,
            ready_queue: VecDeque::with_capacity(processes.len()),
            processes,
            completed_count: 0,
            trace: Trace::new(),
        };
        scheduler.admit_arrivals();
        scheduler
    }

    #[inline(always)]
    pub const fn config(&self) -> SimConfig {
        self.config
    }

    #[inline(always)]
    pub const fn clock(&self) -> Tick {
        self.clock
    }

    /// Ticks the CPU spent not executing a process (idle gaps and switch overhead)
    #[inline(always)]
    pub const fn idle_ticks(&self) -> Tick {
        self.idle_ticks
    }

    #[inline]
    pub fn total_count(&self) -> usize {
        self.processes.len()
    }

    #[inline(always)]
    pub const fn completed_count(&self) -> usize {
        self.completed_count
    }

    /// Every process has finished; terminal
    #[inline]
    pub fn is_completed(&self) -> bool {
        self.completed_count == self.processes.len()
    }

    /// Process table in input order
    #[inline]
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    pub fn process(&self, pid: Pid) -> Option<&Process> {
        self.processes.iter().find(|p| p.id() == pid)
    }

    /// Ids currently in the ready queue, head first
    pub fn ready_queue(&self) -> impl Iterator<Item = Pid> + '_ {
        self.ready_queue.iter().map(|&idx| self.processes[idx].id())
    }

    #[inline]
    pub fn trace(&self) -> &Trace {
        &self.trace
    }
}
