//! Testing infrastructure for userdeck tests.
//!
//! - `fixtures`: deterministic user records and saved API responses
//! - `TestWorld`: isolated data dir + response file for CLI runs
//! - `assertions`: checks against the CLI's JSON output

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
