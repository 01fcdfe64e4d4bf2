//! Debug helper tools module.

pub mod env;

pub use env::{DebugEnvParams, DebugEnvTool};
