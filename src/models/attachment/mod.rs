//! Attachment value type embedded in an email.

use serde::{Deserialize, Serialize};

/// File attachment metadata carried inside an email record.
///
/// Stored as a JSON array on the email row; the encoded form never
/// leaves the persistence boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub name: String,
    #[serde(default)]
    pub size: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_defaults_to_empty_string() {
        let a: Attachment = serde_json::from_str(r##"{"name":"b.png","url":"#"}"##).unwrap();
        assert_eq!(a.size, "");
    }

    #[test]
    fn round_trips_through_json() {
        let a = Attachment {
            name: "a.pdf".into(),
            size: "1MB".into(),
            url: "#".into(),
        };
        let encoded = serde_json::to_string(&a).unwrap();
        let decoded: Attachment = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, a);
    }
}
