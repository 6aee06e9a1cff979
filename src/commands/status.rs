use crate::core::{
    config::Settings,
    client::{StatusClient, StatusSource},
    error::Result,
    formatter::format_status,
    output::write_block,
    selector::LineSelector,
};
use std::io::{self, Write};

/// Report the status of the selected lines on stdout
///
/// Validates the selection before credentials are resolved, and both before any request is made.
pub fn execute_status(lines: Option<&str>, detailed: bool) -> Result<()> {
    let selector = LineSelector::parse(lines)?;

    if detailed {
        log::debug!("--detailed is reserved and has no effect yet");
    }

    let settings = Settings::load()?;
    let client = StatusClient::new(settings);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_report(&selector, &client, &mut out)?;

    Ok(())
}

/// Fetch statuses for `selector` and write one block per record in response order.
///
/// Blocks are flushed as they are written, so a malformed record only stops the report at
/// that record. Returns the number of blocks written.
pub fn render_report<S, W>(selector: &LineSelector, source: &S, out: &mut W) -> Result<usize>
where
    S: StatusSource,
    W: Write,
{
    log::info!("Checking line statuses");
    let records = source.fetch_statuses(selector)?;
    log::info!("Received {} line statuses", records.len());

    for (written, record) in records.iter().enumerate() {
        let block = format_status(record).inspect_err(|e| {
            log::warn!("Stopping after {written} blocks: {e}");
        })?;
        write_block(out, &block)?;
    }

    Ok(records.len())
}
