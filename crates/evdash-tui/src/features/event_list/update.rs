use crossterm::event::{KeyCode, KeyEvent};

use super::state::EventListState;

/// Handles navigation keys while the list has focus.
///
/// Returns `Some(changed)` when the key was consumed, where `changed` tells
/// whether a different event is now selected.
pub fn handle_list_key(list: &mut EventListState, key: KeyEvent) -> Option<bool> {
    let page = list.page_size.max(1) as isize;
    let changed = match key.code {
        KeyCode::Up | KeyCode::Char('k') => list.move_by(-1),
        KeyCode::Down | KeyCode::Char('j') => list.move_by(1),
        KeyCode::PageUp => list.move_by(-page),
        KeyCode::PageDown => list.move_by(page),
        KeyCode::Home | KeyCode::Char('g') => list.select_first(),
        KeyCode::End | KeyCode::Char('G') => list.select_last(),
        _ => return None,
    };
    Some(changed)
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_keys() {
        let mut list = EventListState::default();
        list.refresh(vec![0, 1, 2, 3]);
        list.sync_viewport(2);

        assert_eq!(handle_list_key(&mut list, key(KeyCode::Char('j'))), Some(true));
        assert_eq!(handle_list_key(&mut list, key(KeyCode::PageDown)), Some(true));
        assert_eq!(list.selected, Some(3));
        assert_eq!(handle_list_key(&mut list, key(KeyCode::End)), Some(false));
        assert_eq!(handle_list_key(&mut list, key(KeyCode::Home)), Some(true));
        assert_eq!(handle_list_key(&mut list, key(KeyCode::Char('x'))), None);
    }
}
