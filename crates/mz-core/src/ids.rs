//! Task ID prefix and generation.
//!
//! IDs look like `task_3f9a01bc`: a prefix, an underscore, and 8 lowercase hex
//! characters drawn from the OS random source.

use std::fmt::Write;

/// Prefix for task IDs.
pub const PREFIX_TASK: &str = "task";

/// Generate a fresh ID with the given prefix.
///
/// Falls back to the sub-second clock when the OS random source is
/// unavailable. Callers that need uniqueness within a collection must still
/// check for collisions.
#[must_use]
pub fn generate_id(prefix: &str) -> String {
    let mut bytes = [0u8; 4];
    if getrandom::fill(&mut bytes).is_err() {
        bytes = chrono::Utc::now().timestamp_subsec_nanos().to_le_bytes();
    }

    let mut id = String::with_capacity(prefix.len() + 9);
    id.push_str(prefix);
    id.push('_');
    for byte in bytes {
        let _ = write!(id, "{byte:02x}");
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_id_correct_format() {
        let id = generate_id(PREFIX_TASK);
        assert!(id.starts_with("task_"), "ID should start with 'task_': {id}");
        assert_eq!(id.len(), 13, "ID should be 13 chars (4 prefix + 1 underscore + 8 hex): {id}");

        let hex_part = &id[5..];
        assert!(
            hex_part
                .chars()
                .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()),
            "suffix should be lowercase hex: {hex_part}"
        );
    }

    #[test]
    fn generate_id_varies() {
        let ids: std::collections::HashSet<String> =
            (0..32).map(|_| generate_id(PREFIX_TASK)).collect();
        assert!(ids.len() > 1, "32 draws should not all collide");
    }
}
