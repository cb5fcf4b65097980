//! Available Officer Selection

use crate::models::OfficerId;

/// Selected index to restore after the option list was replaced.
///
/// `previous` is the old `selectedIndex` (-1 for no selection). The result
/// never points past the last option; an empty list yields -1.
pub fn clamp_selected_index(previous: i32, option_count: u32) -> i32 {
    let last = option_count as i64 - 1;
    (previous as i64).min(last).max(-1) as i32
}

/// Element id prefix to officer id, e.g. `id_edit_12` with `id_edit_` -> 12
pub fn parse_officer_id(element_id: &str, prefix: &str) -> Option<OfficerId> {
    element_id.strip_prefix(prefix)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_preserved_in_range() {
        assert_eq!(clamp_selected_index(2, 5), 2);
        assert_eq!(clamp_selected_index(0, 1), 0);
    }

    #[test]
    fn test_index_clamped_when_list_shrinks() {
        assert_eq!(clamp_selected_index(4, 3), 2);
        assert_eq!(clamp_selected_index(10, 1), 0);
    }

    #[test]
    fn test_no_selection_and_empty_list() {
        assert_eq!(clamp_selected_index(-1, 4), -1);
        assert_eq!(clamp_selected_index(3, 0), -1);
    }

    #[test]
    fn test_parse_officer_id() {
        assert_eq!(parse_officer_id("id_edit_12", "id_edit_"), Some(12));
        assert_eq!(parse_officer_id("id_remove_7", "id_remove_"), Some(7));
        assert_eq!(parse_officer_id("id_email_x", "id_email_"), None);
        assert_eq!(parse_officer_id("other_12", "id_edit_"), None);
    }
}
