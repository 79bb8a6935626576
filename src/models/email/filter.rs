//! Filter modes for the email list.

use serde::Deserialize;

/// Which slice of the mailbox a list call returns.
///
/// `All` deliberately excludes archived mail; the archive tab is the only
/// view that shows it. The set is closed: anything else fails to
/// deserialize and is rejected at the HTTP boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailFilter {
    #[default]
    All,
    Unread,
    Archive,
}

impl EmailFilter {
    /// WHERE fragment selecting the rows for this mode.
    pub fn where_clause(self) -> &'static str {
        match self {
            EmailFilter::All => "archived = 0",
            EmailFilter::Unread => "archived = 0 AND is_read = 0",
            EmailFilter::Archive => "archived = 1",
        }
    }
}
