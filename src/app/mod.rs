//! Application setup and runtime.

use crate::{db, http};
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use std::net::SocketAddr;
use tracing::info;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
  pub db: SqlitePool,
}

/// Start the HTTP server with configured environment.
pub async fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
  crate::util::init_tracing();

  let db_url =
    std::env::var("POSTBOX_DATABASE").unwrap_or_else(|_| "sqlite://postbox.db".to_string());
  let db_url = db::ensure_sqlite_path(&db_url);
  let pool = SqlitePoolOptions::new()
    .max_connections(5)
    .connect(&db_url)
    .await?;
  db::run_migrations(&pool).await?;

  let seed = std::env::var("POSTBOX_SEED")
    .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
    .unwrap_or(false);
  if seed {
    db::seed::seed_demo(&pool).await?;
    info!("applied demo seed");
  }

  let state = AppState { db: pool };

  let app = http::build_router(state);

  let addr: SocketAddr = std::env::var("POSTBOX_ADDR")
    .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
    .parse()?;

  info!("mailbox list:    GET  http://{}/emails?filter=all", addr);
  info!("create endpoint: POST http://{}/emails", addr);

  let listener = tokio::net::TcpListener::bind(addr).await?;
  axum::serve(listener, app).await?;
  Ok(())
}
