//! Library surface of the `zet` binary, exposing modules for argument
//! parsing, configuration, commands, and output formatting so integration
//! tests can drive them directly.

pub mod cli;
pub mod commands;
pub mod config;
pub mod output;
