//! Partial update of email status flags.

use serde::Deserialize;

/// Update input: only status fields are mutable; subject/body editing is
/// not supported. Absent fields are left unmodified.
#[derive(Debug, Default, Deserialize)]
pub struct EmailPatch {
    pub is_read: Option<bool>,
    pub archived: Option<bool>,
}
