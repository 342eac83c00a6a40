//! # CLI Layer
//!
//! This module is **one possible UI client** for countables. It is the only
//! place that knows about stdout/stderr, exit codes and argument parsing.
//!
//! - `setup`: clap definitions
//! - `commands`: dispatch from parsed arguments to `CountablesApi`
//! - `print`: turning `CmdResult`s into terminal output

mod commands;
mod print;
mod setup;

pub use commands::run;
