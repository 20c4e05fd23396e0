//! Supershop sales report library
//!
//! Reads the store database and writes the plain-text sales analytics report.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::reports;
