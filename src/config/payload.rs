use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Headers and body read from the optional `--body-file` JSON document.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct RequestPayload {
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    #[serde(default)]
    pub body: BTreeMap<String, String>,
}

/// Reads and parses the payload file.
///
/// # Errors
///
/// Returns an error when the file is unreadable or not valid JSON of the
/// expected shape. Both are fatal to the run.
pub fn load_payload(path: &str) -> AppResult<RequestPayload> {
    let content = std::fs::read_to_string(path).map_err(|err| {
        AppError::Message(format!("Failed to read payload file '{}': {}", path, err))
    })?;
    serde_json::from_str(&content).map_err(|source| AppError::PayloadFile {
        path: path.to_owned(),
        source,
    })
}
