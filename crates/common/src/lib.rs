//! Shared building blocks for the items workspace: wire types used by more
//! than one crate and the tracing subscriber setup.

pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_serializes_as_ok_flag() {
        let body = serde_json::to_value(types::Health::ok()).unwrap();
        assert_eq!(body, serde_json::json!({"ok": true}));
    }
}
