//! Compact email row for the list endpoint.

use serde::Serialize;
use sqlx::FromRow;

/// List projection: omits body and attachments to keep payloads small.
#[derive(Debug, Serialize, FromRow)]
pub struct EmailListEntry {
    pub id: i64,
    pub sender_name: String,
    pub sender_email: String,
    pub recipient: String,
    pub subject: String,
    pub preview: String,
    pub created_at: String,
    pub is_read: bool,
    pub archived: bool,
}
