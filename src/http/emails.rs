//! Email JSON APIs.
//!
//! Thin layer: validate input shapes, call the service, map results to
//! status codes. No SQL here.

use crate::{
  app::AppState,
  models::email::{filter::EmailFilter, list_entry::EmailListEntry, new_email::NewEmail, patch::EmailPatch},
  service::emails,
};
use axum::{
  Json,
  extract::{Path as AxumPath, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use tracing::error;

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
  #[serde(default)]
  pub filter: EmailFilter,
}

#[derive(Debug, Serialize)]
pub struct ListResponse {
  pub emails: Vec<EmailListEntry>,
}

pub async fn list_emails(
  State(state): State<AppState>,
  Query(params): Query<ListParams>,
) -> impl IntoResponse {
  match emails::list_emails(&state.db, params.filter).await {
    Ok(emails) => Json(ListResponse { emails }).into_response(),
    Err(e) => {
      error!("list_emails error: {e}");
      (StatusCode::INTERNAL_SERVER_ERROR, "db error").into_response()
    }
  }
}

pub async fn get_email(
  State(state): State<AppState>,
  AxumPath(id): AxumPath<i64>,
) -> impl IntoResponse {
  match emails::get_email(&state.db, id).await {
    Ok(Some(email)) => Json(email).into_response(),
    Ok(None) => (StatusCode::NOT_FOUND, "email not found").into_response(),
    Err(e) => {
      error!("get_email error: {e}");
      (StatusCode::INTERNAL_SERVER_ERROR, "db error").into_response()
    }
  }
}

pub async fn create_email(
  State(state): State<AppState>,
  Json(req): Json<NewEmail>,
) -> impl IntoResponse {
  match emails::create_email(&state.db, req).await {
    Ok(email) => (StatusCode::CREATED, Json(email)).into_response(),
    Err(e) => {
      error!("create_email error: {e}");
      (StatusCode::INTERNAL_SERVER_ERROR, "db error").into_response()
    }
  }
}

pub async fn update_email(
  State(state): State<AppState>,
  AxumPath(id): AxumPath<i64>,
  Json(req): Json<EmailPatch>,
) -> impl IntoResponse {
  match emails::update_email(&state.db, id, req).await {
    Ok(Some(email)) => Json(email).into_response(),
    Ok(None) => (StatusCode::NOT_FOUND, "email not found").into_response(),
    Err(e) => {
      error!("update_email error: {e}");
      (StatusCode::INTERNAL_SERVER_ERROR, "db error").into_response()
    }
  }
}

pub async fn delete_email(
  State(state): State<AppState>,
  AxumPath(id): AxumPath<i64>,
) -> impl IntoResponse {
  match emails::delete_email(&state.db, id).await {
    Ok(true) => StatusCode::NO_CONTENT.into_response(),
    Ok(false) => (StatusCode::NOT_FOUND, "email not found").into_response(),
    Err(e) => {
      error!("delete_email error: {e}");
      (StatusCode::INTERNAL_SERVER_ERROR, "db error").into_response()
    }
  }
}
