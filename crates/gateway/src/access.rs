//! Shared-passphrase access check.

use serde_json::Value;

/// Whether `provided` is exactly the configured access code.
///
/// Non-string values (numbers, `null`, a missing field) never match.
pub fn access_granted(provided: &Value, expected: &str) -> bool {
    provided.as_str() == Some(expected)
}
