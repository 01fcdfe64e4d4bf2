//! Brand-data webhook tools module.

pub mod info;

pub use info::{BrandInfoParams, BrandInfoTool};
