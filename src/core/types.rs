/*!
 * Core Types
 * Common types used across the simulator
 */

use serde::{Deserialize, Serialize};

/// Process ID type (caller-assigned, unique within a workload)
pub type Pid = u32;

/// One indivisible unit of simulated time
pub type Tick = u32;

/// Static description of a process as handed to the scheduler
///
/// Produced by the loader (or built directly by library users) before the
/// scheduler is constructed. The scheduler trusts these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessDescriptor {
    pub id: Pid,
    pub arrival_time: Tick,
    pub burst_time: Tick,
}

impl ProcessDescriptor {
    #[inline]
    #[must_use]
    pub const fn new(id: Pid, arrival_time: Tick, burst_time: Tick) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
        }
    }
}

impl From<(Pid, Tick, Tick)> for ProcessDescriptor {
    fn from((id, arrival_time, burst_time): (Pid, Tick, Tick)) -> Self {
        Self::new(id, arrival_time, burst_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_from_tuple() {
        let d: ProcessDescriptor = (7, 3, 9).into();
        assert_eq!(d, ProcessDescriptor::new(7, 3, 9));
    }

    #[test]
    fn test_descriptor_serde_field_names() {
        let json = serde_json::to_string(&ProcessDescriptor::new(1, 0, 5)).unwrap();
        assert_eq!(json, r#"{"id":1,"arrival_time":0,"burst_time":5}"#);
    }
}
