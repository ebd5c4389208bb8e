/*!
 * Scheduler Core Operations
 * Dispatch step, wait accounting and context switching
 */

use super::types::{Dispatch, StepOutcome};
use super::Scheduler;
use tracing::{debug, info};

impl Scheduler {
    /// Advance the simulation by one scheduling decision
    ///
    /// Either idles until a process arrives, or runs the head of the ready
    /// queue for up to one quantum. A no-op once the simulation is complete.
    pub fn step(&mut self) -> StepOutcome {
        if self.is_completed() {
            return StepOutcome::Finished;
        }

        let Some(idx) = self.ready_queue.pop_front() else {
            let ticks = self.idle_until_arrival();
            return StepOutcome::Idle { ticks };
        };

        let start = self.clock;
        let process = &mut self.processes[idx];
        process.set_ready(false);
        if !process.has_responded() {
            process.mark_responded(start);
        }
        let pid = process.id();

        let quantum = self.config.time_quantum();
        let mut ran = 0;
        while ran < quantum && !self.processes[idx].is_completed() {
            self.processes[idx].run(self.clock);
            self.accrue_wait(idx);
            self.clock += 1;
            ran += 1;
            self.admit_arrivals();
        }

        self.trace.push(Dispatch {
            pid,
            start,
            ticks: ran,
        });

        if self.processes[idx].is_completed() {
            self.completed_count += 1;
            info!(
                pid,
                clock = self.clock,
                completed = self.completed_count,
                total = self.processes.len(),
                "Process completed"
            );
            if self.is_completed() {
                info!(
                    clock = self.clock,
                    idle = self.idle_ticks,
                    "Simulation completed"
                );
            }
            return StepOutcome::Dispatched {
                pid,
                ran,
                completed: true,
                switched: false,
            };
        }

        let process = &mut self.processes[idx];
        process.record_context_switch();
        process.set_ready(true);
        self.ready_queue.push_back(idx);

        // Only the new head is compared; a lone process resumes for free
        let switched = self.ready_queue.front() != Some(&idx);
        if switched {
            self.context_switch();
        }

        debug!(pid, start, ran, switched, "Process preempted");

        StepOutcome::Dispatched {
            pid,
            ran,
            completed: false,
            switched,
        }
    }

    /// Step until every process has completed; returns the number of steps
    pub fn run_to_completion(&mut self) -> usize {
        let mut steps = 0;
        while !self.is_completed() {
            self.step();
            steps += 1;
        }
        steps
    }

    /// Every ready process other than `running` waits one tick
    fn accrue_wait(&mut self, running: usize) {
        for (idx, process) in self.processes.iter_mut().enumerate() {
            if idx != running && process.is_ready() {
                process.accumulate_wait();
            }
        }
    }

    /// Charge the configured overhead; arrivals are still admitted meanwhile
    fn context_switch(&mut self) {
        let overhead = self.config.context_switch_time();
        for _ in 0..overhead {
            self.idle_tick();
        }
        if overhead > 0 {
            debug!(clock = self.clock, overhead, "Context switch");
        }
    }
}
