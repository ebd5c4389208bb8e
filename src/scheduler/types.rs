/*!
 * Scheduler Types
 * Configuration, step outcomes and the dispatch trace
 */

use crate::core::errors::ConfigError;
use crate::core::types::{Pid, Tick};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Default round-robin quantum, in ticks
pub const DEFAULT_TIME_QUANTUM: Tick = 2;

/// Default context-switch overhead, in ticks
pub const DEFAULT_CONTEXT_SWITCH_TIME: Tick = 0;

/// Fixed simulation configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SimConfig {
    time_quantum: Tick,
    context_switch_time: Tick,
}

impl SimConfig {
    /// Create a validated configuration
    pub fn new(time_quantum: Tick, context_switch_time: Tick) -> Result<Self, ConfigError> {
        if time_quantum == 0 {
            return Err(ConfigError::ZeroQuantum(time_quantum));
        }
        Ok(Self {
            time_quantum,
            context_switch_time,
        })
    }

    #[inline(always)]
    pub const fn time_quantum(&self) -> Tick {
        self.time_quantum
    }

    #[inline(always)]
    pub const fn context_switch_time(&self) -> Tick {
        self.context_switch_time
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            time_quantum: DEFAULT_TIME_QUANTUM,
            context_switch_time: DEFAULT_CONTEXT_SWITCH_TIME,
        }
    }
}

impl<'de> Deserialize<'de> for SimConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Inner {
            #[serde(default = "default_quantum")]
            time_quantum: Tick,
            #[serde(default)]
            context_switch_time: Tick,
        }

        fn default_quantum() -> Tick {
            DEFAULT_TIME_QUANTUM
        }

        let inner = Inner::deserialize(deserializer)?;
        Self::new(inner.time_quantum, inner.context_switch_time).map_err(serde::de::Error::custom)
    }
}

/// What a single call to [`Scheduler::step`](super::Scheduler::step) did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepOutcome {
    /// Ready queue was empty; the CPU idled until something arrived
    Idle { ticks: Tick },
    /// A process ran for `ran` ticks
    Dispatched {
        pid: Pid,
        ran: Tick,
        completed: bool,
        /// Whether context-switch overhead was charged afterwards
        switched: bool,
    },
    /// Simulation was already complete; nothing happened
    Finished,
}

/// One entry of the Gantt chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Dispatch {
    pub pid: Pid,
    /// Clock value when the process was put on the CPU
    pub start: Tick,
    /// Ticks it executed before preemption or completion
    pub ticks: Tick,
}

/// Append-only dispatch log
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace {
    dispatches: Vec<Dispatch>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub(super) fn push(&mut self, dispatch: Dispatch) {
        self.dispatches.push(dispatch);
    }

    #[inline]
    pub fn dispatches(&self) -> &[Dispatch] {
        &self.dispatches
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.dispatches.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dispatches.is_empty()
    }

    /// Render as `->P1->P2->P1`
    pub fn gantt_chart(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for dispatch in &self.dispatches {
            write!(f, "->P{}", dispatch.pid)?;
        }
        Ok(())
    }
}
