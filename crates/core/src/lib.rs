//! Quotes Core Library
//!
//! This crate provides the core functionality for quotes, an interactive
//! terminal app for registering, listing and deleting quotations during a
//! session.
//!
//! # Key Features
//!
//! - **Command Parsing**: Turn `action?name=value&...` lines into requests
//! - **Quotation Store**: In-memory storage with ids that are never reused
//! - **Dispatching**: Route requests to store operations and report outcomes
//! - **Configuration**: Optional YAML file with action aliases and messages
//! - **Error Handling**: One error type for every fallible operation
//!
//! # Examples
//!
//! Handling a few commands without any console:
//!
//! ```
//! use quotes_core::dispatcher::{Dispatcher, NewQuotation, Outcome};
//! use quotes_core::request::Request;
//!
//! let mut dispatcher = Dispatcher::default();
//! let mut input = || -> quotes_core::error::Result<NewQuotation> {
//!     Ok(NewQuotation::new("Stay hungry", "Jobs"))
//! };
//!
//! dispatcher.dispatch(&Request::parse("register"), &mut input)?;
//! let outcome = dispatcher.dispatch(&Request::parse("delete?id=1"), &mut input)?;
//! assert_eq!(outcome, Outcome::Removed(1));
//! # Ok::<(), quotes_core::error::Error>(())
//! ```

pub mod action;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod messages;
pub mod quotation;
pub mod request;
pub mod store;
