use serde::{Deserialize, Serialize};

/// Liveness probe body: `{"ok": true}`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    pub ok: bool,
}

impl Health {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}

/// Error body shared by every failing endpoint: `{"error": "..."}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}
