//! Create-request shape for a new email.

use crate::models::attachment::Attachment;
use serde::Deserialize;

/// Input for creating an email.
///
/// Status flags, preview, and created_at are always derived server-side,
/// never taken from the caller.
#[derive(Debug, Deserialize)]
pub struct NewEmail {
    pub sender_name: String,
    pub sender_email: String,
    pub recipient: String,
    pub subject: String,
    pub body: String,
    pub attachments: Option<Vec<Attachment>>,
}
