//! Calculator tools module.
//!
//! Pure arithmetic tools with no outbound calls:
//! - `add`: Add two numbers
//! - `calculate`: Four-operation calculator

pub mod add;
pub mod calculate;

pub use add::{AddParams, AddTool};
pub use calculate::{CalculateParams, CalculateTool, Operation};
