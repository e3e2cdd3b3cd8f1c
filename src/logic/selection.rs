use ratatui::widgets::ListState;

/// What: Move a list selection by `delta`, clamped to the list bounds.
///
/// Inputs:
/// - `selected`: Current index (updated in place)
/// - `list_state`: Ratatui list state mirroring `selected`
/// - `len`: Number of rows in the list
/// - `delta`: Signed step (negative moves up)
///
/// Output:
/// - Updates both `selected` and `list_state`; clears the selection when the list is empty.
pub fn move_selection(selected: &mut usize, list_state: &mut ListState, len: usize, delta: isize) {
    if len == 0 {
        *selected = 0;
        list_state.select(None);
        return;
    }
    let target = selected.saturating_add_signed(delta).min(len - 1);
    *selected = target;
    list_state.select(Some(target));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Selection clamps at both ends and clears on empty lists.
    fn move_selection_clamps() {
        let mut sel = 0usize;
        let mut ls = ListState::default();
        move_selection(&mut sel, &mut ls, 3, -1);
        assert_eq!((sel, ls.selected()), (0, Some(0)));
        move_selection(&mut sel, &mut ls, 3, 10);
        assert_eq!((sel, ls.selected()), (2, Some(2)));
        move_selection(&mut sel, &mut ls, 3, -1);
        assert_eq!(sel, 1);
        move_selection(&mut sel, &mut ls, 0, 1);
        assert_eq!((sel, ls.selected()), (0, None));
    }
}
