//! Data model, fixed datasets and formatting rules for the trend
//! dashboard. Everything here is pure and natively testable; the UI
//! crate only renders these values.

pub mod chart;
pub mod data;
pub mod format;
pub mod map;
pub mod model;
