//! uicheck - declarative UI validation against a live page.
//!
//! Loads element checks from a YAML file, opens a browser session
//! against a target URL, classifies every check, and reports an
//! aggregate verdict.

pub mod browser;
pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod runner;
pub mod testing;
pub mod types;

pub use error::{CheckError, Result};
