//! TdF Stats library
//!
//! Reads Tour de France result files and computes per-rider best gains,
//! the median speed over a year range and the median of rider medians.
//!
//! This exposes the internal modules for the `tdf` binary and for testing.

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
