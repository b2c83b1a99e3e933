//! Command implementations for unitgen CLI

pub mod completions;
pub mod expand;
pub mod generate;
pub mod helpers;
pub mod units;
pub mod version;
