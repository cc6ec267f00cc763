//! Key/value storage backends.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use violetta_core::{Result, ViolettaError};

/// Bytes a key/value pair counts against a quota.
pub(crate) fn entry_size(key: &str, value: &str) -> usize {
    key.len() + value.len()
}

/// Accepts keys made of ASCII letters, digits, `.`, `_` and `-`, not starting with `.`.
pub(crate) fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
    if valid {
        Ok(())
    } else {
        Err(ViolettaError::storage(format!("Invalid storage key '{}'", key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key() {
        assert!(validate_key("violetta-help-message-template").is_ok());
        assert!(validate_key("a.b_c").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key(".hidden").is_err());
        assert!(validate_key("a b").is_err());
        assert!(validate_key("a/b").is_err());
    }
}
