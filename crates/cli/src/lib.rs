//! Quotes CLI Library
//!
//! This crate provides the command-line interface for quotes, an interactive
//! terminal app that keeps quotations in memory for the length of a session.
//! It handles argument parsing, prompting, and rendering of command results.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`console`]: Prompting and line input over any reader/writer pair
//! - [`render`]: Turning dispatch outcomes into terminal output
//! - [`session`]: The read-dispatch-render loop
//!
//! # Examples
//!
//! ```bash
//! # Start a session with the default (or no) config file
//! quotes
//!
//! # Use a translated config without colors
//! quotes --config-path ~/quotes-ko.yml --no-color
//! ```
//!
//! Inside a session:
//!
//! ```text
//! register
//! list
//! delete?id=1
//! quit
//! ```

pub mod cli_args;
pub mod console;
pub mod render;
pub mod session;
