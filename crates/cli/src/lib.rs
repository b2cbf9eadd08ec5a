//! cadence_cli - command line front end for expanding recurring events.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod run;

pub use config::Config;
pub use error::{CliError, Result};
