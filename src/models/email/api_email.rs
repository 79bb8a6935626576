//! API representation of a full email.

use super::db_email::DbEmail;
use crate::models::attachment::Attachment;
use serde::Serialize;

/// Full projection returned by the get, create, and update operations.
#[derive(Debug, Serialize)]
pub struct ApiEmail {
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
  pub attachments: Vec<Attachment>,
}

impl TryFrom<DbEmail> for ApiEmail {
  type Error = serde_json::Error;

  /// Fails only on corrupt stored attachment JSON.
  fn try_from(d: DbEmail) -> Result<Self, Self::Error> {
    let attachments: Vec<Attachment> = match d.attachments.as_deref() {
      None | Some("") => Vec::new(),
      Some(raw) => serde_json::from_str(raw)?,
    };
    Ok(ApiEmail {
      id: d.id,
      sender_name: d.sender_name,
      sender_email: d.sender_email,
      recipient: d.recipient,
      subject: d.subject,
      body: d.body,
      preview: d.preview,
      created_at: d.created_at,
      is_read: d.is_read,
      archived: d.archived,
      attachments,
    })
  }
}
