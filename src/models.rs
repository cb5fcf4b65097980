//! Frontend Models
//!
//! Payloads exchanged with the officer list views.

use serde::Deserialize;

/// Officer primary key as rendered in element ids
pub type OfficerId = u32;

/// The editable fields of an officer row, in column order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OfficerFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub notes: String,
}

impl OfficerFields {
    /// Build from cell texts in column order. Missing cells read as empty.
    pub fn from_cells<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cells = cells.into_iter().map(Into::into);
        Self {
            first_name: cells.next().unwrap_or_default(),
            last_name: cells.next().unwrap_or_default(),
            email: cells.next().unwrap_or_default(),
            notes: cells.next().unwrap_or_default(),
        }
    }

    pub fn values(&self) -> [&str; 4] {
        [&self.first_name, &self.last_name, &self.email, &self.notes]
    }
}

/// Response of `GET ?sections=1`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Sections {
    #[serde(default)]
    pub chosen: Option<String>,
    #[serde(default)]
    pub available: Option<String>,
    #[serde(default)]
    pub noapplicationform: Option<String>,
}

/// Body returned by the JSON POST views
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerReply {
    #[serde(default)]
    pub status: Option<String>,
}

impl ServerReply {
    /// Replies without a `status` field count as success.
    pub fn is_success(&self) -> bool {
        self.status.as_deref().map_or(true, |s| s == "success")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_from_cells() {
        let fields = OfficerFields::from_cells(["Jane", "Smith", "jane@example.com", "Cook"]);
        assert_eq!(fields.first_name, "Jane");
        assert_eq!(fields.last_name, "Smith");
        assert_eq!(fields.email, "jane@example.com");
        assert_eq!(fields.notes, "Cook");
    }

    #[test]
    fn test_fields_from_short_row() {
        let fields = OfficerFields::from_cells(vec!["Jane".to_string()]);
        assert_eq!(fields.first_name, "Jane");
        assert_eq!(fields.notes, "");
    }

    #[test]
    fn test_sections_partial_payload() {
        let sections: Sections =
            serde_json::from_str(r#"{"chosen": "<table></table>"}"#).unwrap();
        assert_eq!(sections.chosen.as_deref(), Some("<table></table>"));
        assert!(sections.available.is_none());
        assert!(sections.noapplicationform.is_none());
    }

    #[test]
    fn test_server_reply_status() {
        let ok: ServerReply = serde_json::from_str(r#"{"status": "success"}"#).unwrap();
        assert!(ok.is_success());
        let bare: ServerReply = serde_json::from_str("{}").unwrap();
        assert!(bare.is_success());
        let failed: ServerReply = serde_json::from_str(r#"{"status": "failure"}"#).unwrap();
        assert!(!failed.is_success());
    }
}
