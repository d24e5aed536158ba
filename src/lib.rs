//! Library behind the `tempo` command line client.
//!
//! Shows planned hours from Tempo and logs work measured with a timer.

pub mod api;
pub mod cli_input;
pub mod commands;
pub mod config;
pub mod day;
pub mod errors;
pub mod plans;
pub mod quarter;
pub mod signal;
pub mod spinner;
pub mod timer;
pub mod worklog;
