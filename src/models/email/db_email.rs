//! Database row for an email.

use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct DbEmail {
    pub id: i64,
    pub sender_name: String,
    pub sender_email: String,
    pub recipient: String,
    pub subject: String,
    pub body: String,
    pub preview: String,
    pub created_at: String,
    pub is_read: bool,
    pub archived: bool,
    pub attachments: Option<String>,
}
