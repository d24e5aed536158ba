//! Provides handlers for subcommands.
//!
//! Takes care of the actual application logic: talks to the Tempo api, reads
//! from the prompt and prints results. `plans` shows planned hours, `timer`
//! logs a timed session and `config` writes the credentials file.

pub mod config;
pub mod plans;
pub mod timer;
