//! String parsers for configuration values.
//!
//! Config files carry enum values as strings; these turn them into typed
//! values, reporting which key was wrong.

use super::error::ConfigError;
use crate::gate::FailMode;
use crate::reporter::JsonMode;

/// Parse the `json_mode` value, `None` when unset.
pub fn parse_json_mode(s: Option<&str>) -> Result<Option<JsonMode>, ConfigError> {
    s.map(|v| {
        v.parse().map_err(|source| ConfigError::InvalidValue {
            key: "json_mode",
            source,
        })
    })
    .transpose()
}

/// Parse the `fail_mode` value, `None` when unset.
pub fn parse_fail_mode(s: Option<&str>) -> Result<Option<FailMode>, ConfigError> {
    s.map(|v| {
        v.parse().map_err(|source| ConfigError::InvalidValue {
            key: "fail_mode",
            source,
        })
    })
    .transpose()
}
