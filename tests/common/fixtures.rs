//! Mock TfL API payloads and command setup
//!
//! Builds line status JSON in the shape the unified API returns and prepares `tubestats`
//! commands whose config directory and credentials never touch the real user environment.

#![allow(dead_code)]

use assert_cmd::prelude::*;
use serde_json::{json, Value};
use std::path::Path;
use std::process::Command;

pub const TEST_APP_ID: &str = "test-app-id";
pub const TEST_APP_KEY: &str = "test-app-key";

/// One entry of a `/Line/{ids}/Status` response
pub fn line_status(id: &str, name: &str, severity: &str, reason: Option<&str>) -> Value {
    let mut status = json!({
        "$type": "Tfl.Api.Presentation.Entities.LineStatus, Tfl.Api.Presentation.Entities",
        "statusSeverity": 10,
        "statusSeverityDescription": severity,
    });
    if let Some(reason) = reason {
        status["reason"] = json!(reason);
    }

    json!({
        "$type": "Tfl.Api.Presentation.Entities.Line, Tfl.Api.Presentation.Entities",
        "id": id,
        "name": name,
        "modeName": "tube",
        "lineStatuses": [status],
    })
}

/// Central running normally and Victoria delayed by a signal failure
pub fn central_and_victoria() -> Value {
    json!([
        line_status("central", "Central", "Good Service", None),
        line_status(
            "victoria",
            "Victoria",
            "Minor Delays",
            Some("Signal Failure: Delays between Oxford Circus and Brixton"),
        ),
    ])
}

/// `tubestats` command with an empty config directory and no inherited TfL settings
pub fn isolated_command(config_home: &Path) -> anyhow::Result<Command> {
    let mut cmd = Command::cargo_bin("tubestats")?;
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home)
        .env("NO_COLOR", "1")
        .env_remove("TFL_APP_ID")
        .env_remove("TFL_API_KEY")
        .env_remove("TUBESTATS_API_URL");
    Ok(cmd)
}

/// `tubestats` command pointed at a mock API with test credentials
pub fn command_against(api_base: &str, config_home: &Path) -> anyhow::Result<Command> {
    let mut cmd = isolated_command(config_home)?;
    cmd.env("TFL_APP_ID", TEST_APP_ID)
        .env("TFL_API_KEY", TEST_APP_KEY)
        .env("TUBESTATS_API_URL", api_base);
    Ok(cmd)
}
