/*!
 * Scheduler Admission
 * Moving arrived processes into the ready queue, and idling until they do
 */

use super::Scheduler;
use crate::core::types::Tick;
use crate::process::ProcessState;
use tracing::{debug, trace};

impl Scheduler {
    /// Enqueue every pending process whose arrival time is the current clock
    ///
    /// Scans in table order, so simultaneous arrivals keep their input order.
    pub(super) fn admit_arrivals(&mut self) {
        let clock = self.clock;
        for (idx, process) in self.processes.iter_mut().enumerate() {
            if process.arrival_time() == clock && process.state() == ProcessState::Pending {
                process.set_ready(true);
                self.ready_queue.push_back(idx);
                trace!(pid = process.id(), clock, "Process admitted");
            }
        }
    }

    /// Advance one tick without executing a process
    pub(super) fn idle_tick(&mut self) {
        self.clock += 1;
        self.idle_ticks += 1;
        self.admit_arrivals();
    }

    /// Idle until at least one process is ready; returns the ticks spent
    ///
    /// Only called with an empty ready queue on an unfinished simulation, so
    /// some process is still pending with a future arrival.
    pub(super) fn idle_until_arrival(&mut self) -> Tick {
        let has_pending = self
            .processes
            .iter()
            .any(|p| p.state() == ProcessState::Pending && p.arrival_time() > self.clock);
        debug_assert!(has_pending, "idle with nothing left to arrive");
        if !has_pending {
            return 0;
        }

        let start = self.clock;
        while self.ready_queue.is_empty() {
            self.idle_tick();
        }

        let ticks = self.clock - start;
        debug!(from = start, to = self.clock, ticks, "CPU idle");
        ticks
    }
}
