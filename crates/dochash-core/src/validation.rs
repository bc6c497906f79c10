//! Key validation.
//!
//! Keys are opaque; the only rule is a length bound in bytes. Empty keys are
//! accepted.

use crate::error::{CoreError, Result};

/// Default upper bound, in bytes, for owner keys, document ids and identities.
pub const DEFAULT_MAX_KEY_LEN: usize = 256;

/// Check a single key component against `max_len` bytes.
pub fn validate_field(field: &'static str, value: &str, max_len: usize) -> Result<()> {
    if value.len() > max_len {
        return Err(CoreError::InvalidKey {
            field,
            reason: format!("{} bytes exceeds limit of {max_len}", value.len()),
        });
    }
    Ok(())
}
