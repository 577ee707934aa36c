//! koans: calendar date values, shop collection queries and small idiom
//! exercises, with a layered CLI on top.
//!
//! Architecture:
//! - `domain`: dates, ranges, intervals, the shop graph and its queries (no I/O)
//! - `application`: fixture loading service and application errors
//! - `infrastructure`: filesystem boundary trait and DI container
//! - `config`: layered settings
//! - `cli`: argument parsing, dispatch and terminal output

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
