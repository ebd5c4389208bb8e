/*!
 * Process Module
 * Per-process state machine and timing milestones
 */

pub mod lifecycle;
pub mod types;

// Re-export for convenience
pub use lifecycle::Process;
pub use types::{ProcessSnapshot, ProcessState};
