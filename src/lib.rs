//! Tubestats - live London tube line status in your terminal.
//!
//! This library provides the status pipeline behind the `tubestats` binary: parsing a line
//! selection, fetching statuses from the TfL unified API, and formatting each line into a
//! colour-coded report block.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - Line registry with brand colours
//! - Selection parsing and validation
//! - TfL status client
//! - Report formatting
//! - Error handling and result types

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    clean_reason,
    // Line registry
    colour_for,
    // Formatting
    format_status,
    Credentials,
    Line,
    LineSelector,
    ReportBlock,
    Result,
    // Configuration
    Settings,
    // Status retrieval
    StatusClient,
    StatusRecord,
    StatusSource,
    // Error handling
    TubeStatsError,
};
