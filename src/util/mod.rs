//! Utility functions: tracing setup, preview derivation, timestamps.

use chrono::{SecondsFormat, Utc};
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize pretty CLI logging.
pub fn init_tracing() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  fmt()
    .with_env_filter(filter)
    .with_target(false)
    .pretty()
    .init();
}

/// First 80 characters of a body, computed once at creation time.
///
/// Truncation is per character, not word-boundary aware.
pub fn preview_of(body: &str) -> String {
  body.chars().take(80).collect()
}

/// Current instant as an ISO-8601 UTC string with a `Z` suffix.
pub fn now_utc_iso() -> String {
  Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn preview_truncates_to_80_chars() {
    let body = "x".repeat(90);
    let p = preview_of(&body);
    assert_eq!(p, "x".repeat(80));
    assert!(body.starts_with(&p));
  }

  #[test]
  fn preview_keeps_short_bodies_whole() {
    assert_eq!(preview_of("hello"), "hello");
  }

  #[test]
  fn preview_cuts_on_char_boundaries() {
    let body = "é".repeat(90);
    assert_eq!(preview_of(&body).chars().count(), 80);
  }

  #[test]
  fn timestamps_carry_z_suffix() {
    assert!(now_utc_iso().ends_with('Z'));
  }
}
