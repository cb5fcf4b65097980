//! Row Edit Lifecycle
//!
//! At most one officer row is open for inline editing at a time.
//! `EditState` is the page-wide guard; the chosen list panel drives it and
//! performs the matching DOM changes.

use crate::models::{OfficerFields, OfficerId};

/// An officer row currently open for editing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub officer_id: OfficerId,
    /// Cell values captured on entry, restored on cancel
    pub original: OfficerFields,
    /// The add-officer panel was collapsed to make room and must be reopened
    pub collapsed_panel: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    Viewing,
    Editing(EditSession),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("officer {0} is already being edited")]
    AlreadyEditing(OfficerId),
}

/// What the caller must apply to the row and panel when an edit ends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    pub officer_id: OfficerId,
    /// Values to display in the row
    pub fields: OfficerFields,
    /// Reopen the add-officer panel
    pub restore_panel: bool,
}

impl EditState {
    pub fn is_editing(&self) -> bool {
        matches!(self, EditState::Editing(_))
    }

    /// Viewing -> Editing. Rejected without any change while another row is
    /// open. `panel_expanded` decides whether the add-officer panel gets
    /// collapsed for the duration of the edit.
    pub fn begin(
        &mut self,
        officer_id: OfficerId,
        original: OfficerFields,
        panel_expanded: bool,
    ) -> Result<(), EditError> {
        if let EditState::Editing(active) = self {
            return Err(EditError::AlreadyEditing(active.officer_id));
        }
        *self = EditState::Editing(EditSession {
            officer_id,
            original,
            collapsed_panel: panel_expanded,
        });
        Ok(())
    }

    /// Editing -> Viewing, discarding typed values.
    pub fn cancel(&mut self) -> Option<EditOutcome> {
        self.take_session().map(|session| EditOutcome {
            officer_id: session.officer_id,
            fields: session.original,
            restore_panel: session.collapsed_panel,
        })
    }

    /// Editing -> Viewing, keeping the typed values.
    pub fn save(&mut self, edited: OfficerFields) -> Option<EditOutcome> {
        self.take_session().map(|session| EditOutcome {
            officer_id: session.officer_id,
            fields: edited,
            restore_panel: session.collapsed_panel,
        })
    }

    /// Forced exit after the chosen list has been re-rendered. The old row
    /// no longer exists, so nothing is restored.
    pub fn reset(&mut self) -> Option<EditSession> {
        self.take_session()
    }

    fn take_session(&mut self) -> Option<EditSession> {
        match std::mem::take(self) {
            EditState::Editing(session) => Some(session),
            EditState::Viewing => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(first: &str, email: &str) -> OfficerFields {
        OfficerFields {
            first_name: first.to_string(),
            last_name: "Smith".to_string(),
            email: email.to_string(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_begin_from_viewing() {
        let mut state = EditState::default();
        assert!(!state.is_editing());
        state.begin(5, fields("Jane", "jane@example.com"), true).unwrap();
        let EditState::Editing(session) = &state else {
            panic!("expected an open session");
        };
        assert_eq!(session.officer_id, 5);
        assert_eq!(session.original.first_name, "Jane");
        assert!(session.collapsed_panel);
    }

    #[test]
    fn test_second_begin_rejected_without_change() {
        let mut state = EditState::default();
        state.begin(5, fields("Jane", "jane@example.com"), false).unwrap();
        let before = state.clone();
        let err = state.begin(6, fields("John", "john@example.com"), true).unwrap_err();
        assert_eq!(err, EditError::AlreadyEditing(5));
        assert_eq!(state, before);
    }

    #[test]
    fn test_cancel_restores_original() {
        let mut state = EditState::default();
        let original = fields("Jane", "jane@example.com");
        state.begin(5, original.clone(), true).unwrap();
        let outcome = state.cancel().unwrap();
        assert_eq!(outcome.fields, original);
        assert_eq!(outcome.officer_id, 5);
        assert!(outcome.restore_panel);
        assert!(!state.is_editing());
    }

    #[test]
    fn test_save_keeps_edited_values() {
        let mut state = EditState::default();
        state.begin(5, fields("Jane", "jane@example.com"), false).unwrap();
        let edited = fields("Janet", "janet@example.com");
        let outcome = state.save(edited.clone()).unwrap();
        assert_eq!(outcome.fields, edited);
        assert!(!outcome.restore_panel);
        assert!(!state.is_editing());
    }

    #[test]
    fn test_exit_without_session_is_noop() {
        let mut state = EditState::default();
        assert!(state.cancel().is_none());
        assert!(state.save(OfficerFields::default()).is_none());
        assert!(state.reset().is_none());
    }

    #[test]
    fn test_reset_allows_new_session() {
        let mut state = EditState::default();
        state.begin(5, fields("Jane", "jane@example.com"), true).unwrap();
        assert!(state.reset().is_some());
        assert!(state.begin(6, fields("John", "john@example.com"), false).is_ok());
    }
}
