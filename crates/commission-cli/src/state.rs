//! Persisted calculator state: the configuration and performance snapshots
//! stored between invocations as one JSON document.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use commission_core::commission::CommissionInput;
use tracing::debug;

pub const DEFAULT_STATE_FILE: &str = "commission_state.json";

/// Load saved state. A missing file is `Ok(None)`.
pub fn load(path: &str) -> Result<Option<CommissionInput>, Box<dyn std::error::Error>> {
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(format!("Failed to read state '{}': {}", path, e).into()),
    };
    let state: CommissionInput = serde_json::from_str(&contents)
        .map_err(|e| format!("Corrupt state file '{}': {}", path, e))?;
    debug!(path, advisors = state.configuration.advisor_roster.len(), "state loaded");
    Ok(Some(state))
}

/// Load saved state, falling back to the default configuration and no
/// performance records.
pub fn load_or_default(path: &str) -> Result<CommissionInput, Box<dyn std::error::Error>> {
    Ok(load(path)?.unwrap_or_default())
}

pub fn save(path: &str, state: &CommissionInput) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(state)?;
    fs::write(path, json).map_err(|e| format!("Failed to write state '{}': {}", path, e))?;
    debug!(path, "state saved");
    Ok(())
}

/// Delete saved state. Returns whether a file was removed.
pub fn clear(path: &str) -> Result<bool, Box<dyn std::error::Error>> {
    if !Path::new(path).exists() {
        return Ok(false);
    }
    fs::remove_file(path).map_err(|e| format!("Failed to remove state '{}': {}", path, e))?;
    Ok(true)
}
