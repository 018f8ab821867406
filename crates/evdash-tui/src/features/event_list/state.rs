/// Sidebar list of events that pass the current filter.
///
/// `visible` holds dataset indices in dataset order; `selected` is a position
/// within `visible`.
#[derive(Debug, Default)]
pub struct EventListState {
    pub visible: Vec<usize>,
    pub selected: Option<usize>,
    /// First visible list row, in items.
    pub offset: usize,
    /// Items that fit in the list area, updated every frame.
    pub page_size: usize,
}

impl EventListState {
    /// Dataset index of the selected event.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected.and_then(|pos| self.visible.get(pos).copied())
    }

    /// Replaces the visible set, keeping the selected event when it survives
    /// the change and falling back to the first event otherwise.
    ///
    /// Returns true when the selected event changed.
    pub fn refresh(&mut self, visible: Vec<usize>) -> bool {
        let previous = self.selected_index();
        self.selected = previous
            .and_then(|index| visible.iter().position(|&i| i == index))
            .or(if visible.is_empty() { None } else { Some(0) });
        self.visible = visible;
        self.offset = self.offset.min(self.visible.len().saturating_sub(1));
        self.selected_index() != previous
    }

    /// Moves the selection by `delta`, clamped to the list. Returns true when
    /// the selected event changed.
    pub fn move_by(&mut self, delta: isize) -> bool {
        if self.visible.is_empty() {
            return false;
        }
        let last = self.visible.len() - 1;
        let target = match self.selected {
            Some(pos) => pos.saturating_add_signed(delta).min(last),
            None => 0,
        };
        self.select(target)
    }

    pub fn select_first(&mut self) -> bool {
        self.select(0)
    }

    pub fn select_last(&mut self) -> bool {
        self.select(self.visible.len().saturating_sub(1))
    }

    /// Selects the item at `pos`. Out-of-range positions are ignored.
    pub fn select(&mut self, pos: usize) -> bool {
        if pos >= self.visible.len() || self.selected == Some(pos) {
            return false;
        }
        self.selected = Some(pos);
        true
    }

    /// Keeps the selection inside a window of `page_size` items.
    pub fn sync_viewport(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        if let Some(pos) = self.selected {
            if pos < self.offset {
                self.offset = pos;
            } else if pos >= self.offset + self.page_size {
                self.offset = pos + 1 - self.page_size;
            }
        }
        let max_offset = self.visible.len().saturating_sub(self.page_size);
        self.offset = self.offset.min(max_offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_selects_first_when_empty_selection() {
        let mut list = EventListState::default();
        assert!(list.refresh(vec![2, 5, 7]));
        assert_eq!(list.selected_index(), Some(2));
    }

    #[test]
    fn test_refresh_keeps_surviving_selection() {
        let mut list = EventListState::default();
        list.refresh(vec![0, 1, 2, 3]);
        list.select(2);

        assert!(!list.refresh(vec![1, 2]));
        assert_eq!(list.selected, Some(1));
        assert_eq!(list.selected_index(), Some(2));
    }

    #[test]
    fn test_refresh_falls_back_when_selection_filtered_out() {
        let mut list = EventListState::default();
        list.refresh(vec![0, 1, 2]);
        list.select(2);

        assert!(list.refresh(vec![0, 1]));
        assert_eq!(list.selected_index(), Some(0));

        assert!(list.refresh(vec![]));
        assert_eq!(list.selected_index(), None);
    }

    #[test]
    fn test_move_by_clamps() {
        let mut list = EventListState::default();
        list.refresh(vec![0, 1, 2]);
        assert!(list.move_by(5));
        assert_eq!(list.selected, Some(2));
        assert!(!list.move_by(1));
        assert!(list.move_by(-10));
        assert_eq!(list.selected, Some(0));
    }

    #[test]
    fn test_sync_viewport_follows_selection() {
        let mut list = EventListState::default();
        list.refresh((0..20).collect());
        list.select(12);
        list.sync_viewport(5);
        assert_eq!(list.offset, 8);

        list.select_first();
        list.sync_viewport(5);
        assert_eq!(list.offset, 0);
    }
}
