//! Request policy configuration types.

use serde::{Deserialize, Serialize};

/// Timeout and retry policy for completion requests.
///
/// The defaults (no timeout, no retries) make one unbounded attempt per
/// request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestConfig {
    /// Per-attempt timeout in seconds; 0 disables it (valid range: 0-3600).
    pub timeout_secs: u32,
    /// Extra attempts after a transient failure (valid range: 0-10).
    pub retries: u32,
}
