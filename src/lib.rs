//! # signature-tool
//!
//! A tool that adds an author attribution comment block to the top of every
//! recognized source file in a directory tree.
//!
//! Files that already carry the author's signature (their email appears in
//! the first 20 lines) are skipped unless `force` is set, in which case the
//! old block is replaced. Interpreter directives (`#!...`) stay on the first
//! line.
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use signature_tool::config::SignatureConfig;
//! use signature_tool::processor::Processor;
//!
//! let config = SignatureConfig::new("Jane Doe", "jane@example.com");
//!
//! // Sign everything under src/, writing changes in place
//! let processor = Processor::new(&config, false, false);
//! let stats = processor.process_path(Path::new("src"));
//!
//! println!("{} signed, {} skipped", stats.processed, stats.skipped);
//! ```
//!
//! ## Modules
//!
//! * [`processor`] - Per-file decisions and directory traversal
//! * [`signature`] - Comment styles and signature rendering
//! * [`config`] - Loading and merging the author configuration
//! * [`report`] - Run statistics and JSON reports
//! * [`logging`] - Logging utilities for verbose output

pub mod cli;
pub mod config;
pub mod logging;
pub mod output;
pub mod processor;
pub mod report;
pub mod signature;
