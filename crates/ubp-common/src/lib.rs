//! UBP Common Library
//!
//! Shared infrastructure for the UBP workspace. Currently this is the
//! logging configuration and initialization used by the pipeline binary.

pub mod logging;
