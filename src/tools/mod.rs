//! The tools module provides the helper functions around the coding engine of huffcode.
//!
//! The tools are:
//! - cli: Command line interface and run options.
//! - freq_count: Symbol frequency count, the first step of building a code.
//! - report: Phase timing and the compression report printed after a run.
//!
pub mod cli;
pub mod freq_count;
pub mod report;
