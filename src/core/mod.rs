//! Core functionality for tubestats.
//!
//! This module provides the building blocks of the status pipeline: line registry,
//! selection parsing, the TfL client, record formatting, configuration and error handling.

pub mod client;
pub mod config;
pub mod dirs;
pub mod error;
pub mod formatter;
pub mod lines;
pub mod output;
pub mod selector;

// === Error handling ===
pub use error::{Result, TubeStatsError};

// === Line registry ===
// Brand colours and display names keyed by line
pub use lines::{colour_for, Line, LineInfo, DEFAULT_LINES, LINES};

// === Selection ===
// Parser for `--lines` input like "central,victoria"
pub use selector::LineSelector;

// === Status retrieval ===
pub use client::{StatusClient, StatusRecord, StatusSource};

// === Formatting ===
pub use formatter::{clean_reason, format_status, ReportBlock};

// === Configuration ===
pub use config::{Credentials, Settings, StoredConfig};

// === Output formatting ===
pub use output::{format_error, print_error, print_success, write_block};
