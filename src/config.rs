// Session configuration

use crate::command::stack::DEFAULT_HISTORY_LIMIT;
use serde::{Deserialize, Serialize};

/// Tuning knobs for one editing session
///
/// Hosts persist this alongside their own settings; missing fields fall
/// back to the defaults. Degenerate limits are clamped by the stack when
/// the session is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Maximum number of executed commands retained for undo
    pub history_limit: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}
