//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod build_model;
mod output;

pub use build_model::BuildReport;
pub use output::{Report, TerminalOutput};
