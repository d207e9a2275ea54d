//! Command-line layer: argument parsing and the handlers that drive a run.

pub mod commands;
pub mod parser;
