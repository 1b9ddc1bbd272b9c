//! Subex driver library.
//!
//! Command handlers, diagnostic rendering and tracing setup for the `subex`
//! binary. The evaluation itself lives in `subex_eval`.

pub mod commands;
pub mod report;
pub mod tracing_setup;

pub use tracing_setup::init_tracing;
