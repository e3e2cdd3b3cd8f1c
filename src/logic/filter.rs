use crate::state::{AppState, Character};

/// What: Case-insensitive substring filter over character names.
///
/// Inputs:
/// - `all`: Full character list (not modified)
/// - `query`: Raw search text
///
/// Output:
/// - Matching characters in their original order; the whole list when the query is blank.
#[must_use]
pub fn filter_by_name(all: &[Character], query: &str) -> Vec<Character> {
    let needle = query.trim();
    if needle.is_empty() {
        return all.to_vec();
    }
    let needle = needle.to_lowercase();
    all.iter()
        .filter(|c| c.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// What: Recompute the directory view from `all` and the current search input.
///
/// Inputs:
/// - `app`: Mutable application state holding the directory view
///
/// Output:
/// - Updates `directory.visible` and keeps the selection on the same character when possible.
///
/// Details:
/// - Selection is restored by id when present; otherwise clamped or cleared if the list is empty.
pub fn apply_directory_filter(app: &mut AppState) {
    let dir = &mut app.directory;
    let prev_id = dir.visible.get(dir.selected).map(|c| c.id);
    dir.visible = filter_by_name(&dir.all, &dir.query);
    if let Some(pos) = prev_id.and_then(|id| dir.visible.iter().position(|c| c.id == id)) {
        dir.selected = pos;
    } else if dir.visible.is_empty() {
        dir.selected = 0;
    } else {
        dir.selected = dir.selected.min(dir.visible.len() - 1);
    }
    dir.list_state
        .select(if dir.visible.is_empty() { None } else { Some(dir.selected) });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CharacterId;

    fn roster() -> Vec<Character> {
        ["Eren Yeager", "Mikasa Ackerman", "Armin Arlert", "Eren Kruger", "Levi Ackerman"]
            .iter()
            .enumerate()
            .map(|(i, n)| Character {
                id: CharacterId(i as u64 + 1),
                name: (*n).to_string(),
                ..Character::default()
            })
            .collect()
    }

    #[test]
    /// What: Blank queries return the input unchanged.
    fn blank_query_returns_all_in_order() {
        let all = roster();
        assert_eq!(filter_by_name(&all, ""), all);
        assert_eq!(filter_by_name(&all, "   "), all);
    }

    #[test]
    /// What: Matching ignores case and leaves the source untouched.
    ///
    /// Inputs:
    /// - "ERE" and "ere" against the roster
    ///
    /// Output:
    /// - Identical results (Eren Yeager, Eren Kruger) in source order.
    fn matching_is_case_insensitive() {
        let all = roster();
        let upper = filter_by_name(&all, "ERE");
        let lower = filter_by_name(&all, "ere");
        assert_eq!(upper, lower);
        let names: Vec<&str> = upper.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Eren Yeager", "Eren Kruger"]);
        assert_eq!(all.len(), 5);
    }

    #[test]
    /// What: Queries without matches yield an empty list.
    fn no_match_is_empty() {
        assert!(filter_by_name(&roster(), "zeke").is_empty());
    }

    #[test]
    /// What: Re-filtering keeps the selection on the same character, else clamps.
    ///
    /// Inputs:
    /// - Directory with all five characters and Levi selected; query "ackerman", then "xyz"
    ///
    /// Output:
    /// - Levi stays selected at index 1; an empty view clears the selection.
    fn apply_directory_filter_preserves_selection() {
        let mut app = AppState::default();
        app.directory.all = roster();
        app.directory.visible = roster();
        app.directory.selected = 4;

        app.directory.query = "ackerman".into();
        apply_directory_filter(&mut app);
        assert_eq!(app.directory.visible.len(), 2);
        assert_eq!(app.directory.selected, 1);
        assert_eq!(app.directory.list_state.selected(), Some(1));

        app.directory.query = "xyz".into();
        apply_directory_filter(&mut app);
        assert!(app.directory.visible.is_empty());
        assert_eq!(app.directory.list_state.selected(), None);
    }
}
