/*!
 * Round-Robin Scheduling Simulator
 * Tick-accurate simulation engine exposed as a library
 */

pub mod core;
pub mod loader;
pub mod monitoring;
pub mod process;
pub mod report;
pub mod scheduler;

// Re-exports
pub use crate::core::{
    ConfigError, LoadError, Pid, ProcessDescriptor, SimError, SimResult, Tick,
};
pub use loader::{load_file, parse_str};
pub use monitoring::init_tracing;
pub use process::{Process, ProcessSnapshot, ProcessState};
pub use report::{format_metrics, format_snapshot};
pub use scheduler::{
    Dispatch, ProcessMetrics, Scheduler, SchedulerSnapshot, SimConfig, SimulationMetrics,
    StepOutcome, Trace,
};
