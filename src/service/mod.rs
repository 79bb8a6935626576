//! Email persistence and query layer.
//!
//! All DB access and business logic for emails lives here. Handlers only
//! translate results to HTTP responses; not-found comes back as an Ok
//! value, never as an error.

use thiserror::Error;

pub mod emails;

/// Failure modes of the email store.
#[derive(Debug, Error)]
pub enum StoreError {
  /// Connection or query failure in the persistence layer.
  #[error("database error: {0}")]
  Db(#[from] sqlx::Error),
  /// Stored attachment JSON failed to decode.
  #[error("corrupt attachment data: {0}")]
  Attachments(#[from] serde_json::Error),
}
