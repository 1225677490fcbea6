//! Configuration schema types for Docent.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with defaults that reproduce the stock
//! assistant behavior.

mod conversation;
mod model;
mod request;
mod system;

pub use conversation::*;
pub use model::*;
pub use request::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration for Docent.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocentConfig {
    pub model: ModelConfig,
    pub conversation: ConversationConfig,
    pub request: RequestConfig,
    pub logging: LoggingConfig,
}
