/*!
 * Monitoring Module
 * Tracing initialization for the simulator binary
 */

pub mod tracer;

pub use tracer::{init_tracing, simulation_span};
