/*!
 * Process Lifecycle
 * Runtime bookkeeping for a single simulated process
 */

use super::types::{ProcessSnapshot, ProcessState};
use crate::core::types::{Pid, ProcessDescriptor, Tick};

/// A simulated process: static description plus mutable runtime state
///
/// Owned by the scheduler's process table and only mutated by it. None of
/// the operations can fail; misuse (running a completed process, responding
/// twice) is a caller bug and trips a debug assertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    id: Pid,
    arrival_time: Tick,
    burst_time: Tick,
    remaining_burst: Tick,
    waiting_time: Tick,
    context_switches: u32,
    completion_time: Option<Tick>,
    response_time: Option<Tick>,
    state: ProcessState,
}

impl Process {
    #[must_use]
    pub fn new(descriptor: ProcessDescriptor) -> Self {
        Self {
            id: descriptor.id,
            arrival_time: descriptor.arrival_time,
            burst_time: descriptor.burst_time,
            remaining_burst: descriptor.burst_time,
            waiting_time: 0,
            context_switches: 0,
            completion_time: None,
            response_time: None,
            state: ProcessState::Pending,
        }
    }

    /// Execute one tick at `current_tick`
    ///
    /// When the remaining burst hits zero the process completes, leaves the
    /// ready set and records `current_tick` as its completion time.
    pub fn run(&mut self, current_tick: Tick) {
        debug_assert!(
            self.state != ProcessState::Completed,
            "process {} ran after completion",
            self.id
        );

        self.remaining_burst = self.remaining_burst.saturating_sub(1);
        if self.remaining_burst == 0 {
            self.completion_time = Some(current_tick);
            self.state = ProcessState::Completed;
        }
    }

    /// Record the first dispatch
    pub fn mark_responded(&mut self, current_tick: Tick) {
        debug_assert!(
            self.response_time.is_none(),
            "process {} responded twice",
            self.id
        );
        self.response_time = Some(current_tick.saturating_sub(self.arrival_time));
    }

    /// One tick spent ready but not running
    #[inline]
    pub fn accumulate_wait(&mut self) {
        self.waiting_time += 1;
    }

    /// Returned to the ready queue without finishing
    #[inline]
    pub fn record_context_switch(&mut self) {
        self.context_switches += 1;
    }

    /// Toggle ready-queue membership
    ///
    /// Clearing the flag on a queued process means it has been taken off the
    /// queue for dispatch.
    pub fn set_ready(&mut self, ready: bool) {
        debug_assert!(self.state != ProcessState::Completed);
        self.state = if ready {
            ProcessState::Ready
        } else {
            ProcessState::Running
        };
    }

    #[inline(always)]
    pub const fn id(&self) -> Pid {
        self.id
    }

    #[inline(always)]
    pub const fn arrival_time(&self) -> Tick {
        self.arrival_time
    }

    #[inline(always)]
    pub const fn burst_time(&self) -> Tick {
        self.burst_time
    }

    #[inline(always)]
    pub const fn remaining_burst(&self) -> Tick {
        self.remaining_burst
    }

    #[inline(always)]
    pub const fn waiting_time(&self) -> Tick {
        self.waiting_time
    }

    #[inline(always)]
    pub const fn context_switches(&self) -> u32 {
        self.context_switches
    }

    #[inline(always)]
    pub const fn completion_time(&self) -> Option<Tick> {
        self.completion_time
    }

    #[inline(always)]
    pub const fn response_time(&self) -> Option<Tick> {
        self.response_time
    }

    #[inline(always)]
    pub const fn state(&self) -> ProcessState {
        self.state
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        self.state == ProcessState::Completed
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.state == ProcessState::Ready
    }

    #[inline]
    pub const fn has_responded(&self) -> bool {
        self.response_time.is_some()
    }

    /// Inclusive arrival-to-completion span, once completed
    #[must_use]
    pub fn turnaround_time(&self) -> Option<Tick> {
        self.completion_time
            .map(|done| 1 + done.saturating_sub(self.arrival_time))
    }

    #[must_use]
    pub fn snapshot(&self) -> ProcessSnapshot {
        ProcessSnapshot {
            id: self.id,
            arrival_time: self.arrival_time,
            burst_time: self.burst_time,
            remaining_burst: self.remaining_burst,
            waiting_time: self.waiting_time,
            context_switches: self.context_switches,
            state: self.state,
            response_time: self.response_time,
            completion_time: self.completion_time,
        }
    }
}

impl From<ProcessDescriptor> for Process {
    fn from(descriptor: ProcessDescriptor) -> Self {
        Self::new(descriptor)
    }
}
