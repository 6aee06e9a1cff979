//! Formatting of status records into coloured report blocks.
//!
//! # Block Layout
//! ```text
//!     Victoria
//!     ⦿ Minor Delays
//!     ⦿ Delays between Oxford Circus and Brixton
//! ```
//! - Line name in bold on the line's brand colour. A blank API name falls back to the
//!   registry's canonical name, then to the raw line id
//! - Severity description underlined
//! - Incident reason with its `Category:` prefix removed, only when the API sent one

use crate::core::{
    client::StatusRecord,
    error::{Result, TubeStatsError},
    lines::{colour_for, Line},
};
use colored::*;
use std::fmt;

const INDENT: &str = "    ";
const BULLET: &str = "⦿";

/// Rendered report for a single line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportBlock {
    pub name: String,
    pub colour: Color,
    pub severity: String,
    pub message: Option<String>,
}

impl ReportBlock {
    /// Bullet texts without styling, severity first
    pub fn bullets(&self) -> Vec<&str> {
        std::iter::once(self.severity.as_str())
            .chain(self.message.as_deref())
            .collect()
    }
}

impl fmt::Display for ReportBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{INDENT}{}", self.name.bold().on_color(self.colour))?;
        for (i, bullet) in self.bullets().into_iter().enumerate() {
            // Severity is always first
            let text = if i == 0 { bullet.underline() } else { bullet.normal() };
            write!(f, "\n{INDENT}{BULLET} {text}")?;
        }
        Ok(())
    }
}

/// Strip the `Category:` prefix from an incident reason.
///
/// Splits on the first colon. Reasons without a colon are kept whole. Returns `None` when
/// nothing but whitespace is left.
pub fn clean_reason(reason: &str) -> Option<String> {
    let message = match reason.split_once(':') {
        Some((_, rest)) => rest,
        None => reason,
    }
    .trim();

    (!message.is_empty()).then(|| message.to_string())
}

/// Title for a record: the API's name, else the registry name, else the id
fn display_name(record: &StatusRecord) -> String {
    let name = record.name.trim();
    if !name.is_empty() {
        return name.to_string();
    }

    Line::from_code(&record.id)
        .map(|line| line.display_name().to_string())
        .unwrap_or_else(|| record.id.clone())
}

/// Build the report block for one status record
pub fn format_status(record: &StatusRecord) -> Result<ReportBlock> {
    let severity = record
        .severity_description
        .as_deref()
        .map(str::trim)
        .filter(|severity| !severity.is_empty())
        .ok_or_else(|| {
            TubeStatsError::malformed_record(&record.id, "missing status severity description")
        })?;

    Ok(ReportBlock {
        name: display_name(record),
        colour: colour_for(&record.id),
        severity: severity.to_string(),
        message: record.reason.as_deref().and_then(clean_reason),
    })
}
