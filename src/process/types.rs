/*!
 * Process Types
 * Common types for process state tracking
 */

use crate::core::types::{Pid, Tick};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Process state
///
/// Replaces the `completed` / `in_ready_queue` flag pair: a process is in
/// exactly one of these at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessState {
    /// Not yet arrived (or arrived but not yet admitted)
    Pending,
    /// Waiting in the ready queue
    Ready,
    /// Currently executing on the CPU
    Running,
    /// Remaining burst reached zero
    Completed,
}

impl ProcessState {
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Ready => "ready",
            Self::Running => "running",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for ProcessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Point-in-time copy of a process, for introspection between steps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessSnapshot {
    pub id: Pid,
    pub arrival_time: Tick,
    pub burst_time: Tick,
    pub remaining_burst: Tick,
    pub waiting_time: Tick,
    pub context_switches: u32,
    pub state: ProcessState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time: Option<Tick>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_time: Option<Tick>,
}

impl ProcessSnapshot {
    #[inline]
    #[must_use]
    pub const fn has_responded(&self) -> bool {
        self.response_time.is_some()
    }

    #[inline]
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.state == ProcessState::Completed
    }
}
