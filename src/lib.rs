//! Starlint - starred-block comment style checker for JavaScript and TypeScript
//!
//! Starlint is a CLI tool and library that requires every own-line comment to
//! be a starred block comment. It reports `//` comments and malformed block
//! comments, and can rewrite them in place.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, fix actions, reports)
//! - `config`: Configuration file loading and parsing
//! - `core`: Comment engine, source parsing and file scanning
//! - `issues`: Issue type definitions and reporting
//! - `rules`: The no-line-comments rule and parse error reporting

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod rules;
