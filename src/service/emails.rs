//! The five email operations: list, get, create, update, delete.
//!
//! Each operation opens its own unit of work against the pool;
//! multi-statement operations run inside a single transaction, so an
//! early return on any path rolls back.

use crate::{
  models::email::{
    api_email::ApiEmail, db_email::DbEmail, filter::EmailFilter, list_entry::EmailListEntry,
    new_email::NewEmail, patch::EmailPatch,
  },
  service::StoreError,
  util,
};
use sqlx::{SqliteExecutor, SqlitePool};

async fn fetch_full(
  executor: impl SqliteExecutor<'_>,
  id: i64,
) -> Result<Option<DbEmail>, sqlx::Error> {
  sqlx::query_as::<_, DbEmail>(
    "SELECT id, sender_name, sender_email, recipient, subject, body, preview, created_at, is_read, archived, attachments FROM emails WHERE id = ?",
  )
  .bind(id)
  .fetch_optional(executor)
  .await
}

/// Return emails matching the filter, newest first.
pub async fn list_emails(
  pool: &SqlitePool,
  filter: EmailFilter,
) -> Result<Vec<EmailListEntry>, StoreError> {
  let sql = format!(
    "SELECT id, sender_name, sender_email, recipient, subject, preview, created_at, is_read, archived FROM emails WHERE {} ORDER BY created_at DESC, id DESC",
    filter.where_clause()
  );
  let rows = sqlx::query_as::<_, EmailListEntry>(&sql)
    .fetch_all(pool)
    .await?;
  Ok(rows)
}

/// Return a single email by id, or None if not found.
pub async fn get_email(pool: &SqlitePool, id: i64) -> Result<Option<ApiEmail>, StoreError> {
  let row = fetch_full(pool, id).await?;
  Ok(row.map(ApiEmail::try_from).transpose()?)
}

/// Insert a new email and return the stored record.
///
/// Status flags start off regardless of the input; preview and
/// created_at are derived here.
pub async fn create_email(pool: &SqlitePool, new: NewEmail) -> Result<ApiEmail, StoreError> {
  let preview = util::preview_of(&new.body);
  let created_at = util::now_utc_iso();
  let attachments_json = match new.attachments.as_deref() {
    Some(atts) if !atts.is_empty() => Some(serde_json::to_string(atts)?),
    _ => None,
  };

  let mut tx = pool.begin().await?;
  let result = sqlx::query(
    "INSERT INTO emails (sender_name, sender_email, recipient, subject, body, preview, created_at, is_read, archived, attachments) VALUES (?, ?, ?, ?, ?, ?, ?, 0, 0, ?)",
  )
  .bind(&new.sender_name)
  .bind(&new.sender_email)
  .bind(&new.recipient)
  .bind(&new.subject)
  .bind(&new.body)
  .bind(&preview)
  .bind(&created_at)
  .bind(attachments_json.as_deref())
  .execute(&mut *tx)
  .await?;
  let new_id = result.last_insert_rowid();

  // Re-read so the response reflects exactly what was stored
  let row = fetch_full(&mut *tx, new_id)
    .await?
    .ok_or(sqlx::Error::RowNotFound)?;
  tx.commit().await?;
  Ok(ApiEmail::try_from(row)?)
}

/// Apply provided status fields to an email. Returns None if not found.
///
/// An empty patch performs no write but still re-fetches, so "no fields
/// to change" stays distinguishable from "not found".
pub async fn update_email(
  pool: &SqlitePool,
  id: i64,
  patch: EmailPatch,
) -> Result<Option<ApiEmail>, StoreError> {
  let mut tx = pool.begin().await?;

  let exists = sqlx::query("SELECT id FROM emails WHERE id = ?")
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?
    .is_some();
  if !exists {
    return Ok(None);
  }

  // Two mutable fields only: one statement per present combination
  match (patch.is_read, patch.archived) {
    (Some(is_read), Some(archived)) => {
      sqlx::query("UPDATE emails SET is_read = ?, archived = ? WHERE id = ?")
        .bind(is_read)
        .bind(archived)
        .bind(id)
        .execute(&mut *tx)
        .await?;
    }
    (Some(is_read), None) => {
      sqlx::query("UPDATE emails SET is_read = ? WHERE id = ?")
        .bind(is_read)
        .bind(id)
        .execute(&mut *tx)
        .await?;
    }
    (None, Some(archived)) => {
      sqlx::query("UPDATE emails SET archived = ? WHERE id = ?")
        .bind(archived)
        .bind(id)
        .execute(&mut *tx)
        .await?;
    }
    (None, None) => {}
  }

  let row = fetch_full(&mut *tx, id)
    .await?
    .ok_or(sqlx::Error::RowNotFound)?;
  tx.commit().await?;
  Ok(Some(ApiEmail::try_from(row)?))
}

/// Delete an email by id. True if a row was removed.
pub async fn delete_email(pool: &SqlitePool, id: i64) -> Result<bool, StoreError> {
  let result = sqlx::query("DELETE FROM emails WHERE id = ?")
    .bind(id)
    .execute(pool)
    .await?;
  Ok(result.rows_affected() > 0)
}
