use std::collections::BTreeSet;

use evdash_core::config::ViewMode;
use evdash_core::i18n::Label;

use super::doc::DetailContent;

/// Sections of the detail pane, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DetailTab {
    #[default]
    Overview,
    Agenda,
    Participants,
    Speakers,
    Organizations,
    Media,
    Meta,
}

impl DetailTab {
    pub fn all() -> &'static [DetailTab] {
        &[
            DetailTab::Overview,
            DetailTab::Agenda,
            DetailTab::Participants,
            DetailTab::Speakers,
            DetailTab::Organizations,
            DetailTab::Media,
            DetailTab::Meta,
        ]
    }

    pub fn index(self) -> usize {
        Self::all().iter().position(|t| *t == self).unwrap_or(0)
    }

    /// Tab for a 1-based number key.
    pub fn from_number(n: u32) -> Option<Self> {
        let index = usize::try_from(n).ok()?.checked_sub(1)?;
        Self::all().get(index).copied()
    }

    #[must_use]
    pub fn next(self) -> Self {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        let all = Self::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }

    pub fn label(self) -> Label {
        match self {
            DetailTab::Overview => Label::new("Overview", "نظرة عامة"),
            DetailTab::Agenda => Label::new("Agenda", "الأجندة"),
            DetailTab::Participants => Label::new("Participants", "المشاركون"),
            DetailTab::Speakers => Label::new("Speakers", "المتحدثون"),
            DetailTab::Organizations => Label::new("Organizations", "المنظمات"),
            DetailTab::Media => Label::new("Media", "الوسائط"),
            DetailTab::Meta => Label::new("Meta/Admin", "بيانات إدارية"),
        }
    }
}

/// Detail pane state for the selected event.
///
/// `scroll` and `cursor` refer to the laid-out tab content. The frame handler
/// reconciles them with the content height every frame.
#[derive(Debug, Default)]
pub struct DetailState {
    pub tab: DetailTab,
    pub view_mode: ViewMode,
    /// First visible content line.
    pub scroll: usize,
    /// Selected item within the tab (participants, speakers, links...).
    pub cursor: usize,
    /// Expanded items (participants, major topics) by position.
    pub expanded: BTreeSet<usize>,
    pub viewport_height: usize,
    pub content_height: usize,
    follow_cursor: bool,
}

impl DetailState {
    pub fn new(view_mode: ViewMode) -> Self {
        Self {
            view_mode,
            ..Self::default()
        }
    }

    /// Back to the top with nothing selected or expanded.
    pub fn reset_position(&mut self) {
        self.scroll = 0;
        self.cursor = 0;
        self.expanded.clear();
        self.follow_cursor = false;
    }

    pub fn set_tab(&mut self, tab: DetailTab) {
        if self.tab != tab {
            self.tab = tab;
            self.reset_position();
        }
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        if self.view_mode != mode {
            self.view_mode = mode;
            if self.tab == DetailTab::Overview {
                self.reset_position();
            }
        }
    }

    /// Moves the cursor within `item_count` items. Returns false when there is
    /// nothing to select.
    pub fn move_cursor(&mut self, delta: isize, item_count: usize) -> bool {
        if item_count == 0 {
            return false;
        }
        let last = item_count - 1;
        self.cursor = self.cursor.min(last).saturating_add_signed(delta).min(last);
        self.follow_cursor = true;
        true
    }

    pub fn toggle_expanded(&mut self) {
        if !self.expanded.remove(&self.cursor) {
            self.expanded.insert(self.cursor);
        }
        self.follow_cursor = true;
    }

    pub fn is_expanded(&self, item: usize) -> bool {
        self.expanded.contains(&item)
    }

    pub fn max_scroll(&self) -> usize {
        self.content_height.saturating_sub(self.viewport_height)
    }

    pub fn scroll_by(&mut self, delta: isize) {
        self.scroll = self.scroll.saturating_add_signed(delta).min(self.max_scroll());
        self.follow_cursor = false;
    }

    pub fn page(&mut self, down: bool) {
        let step = self.viewport_height.saturating_sub(1).max(1) as isize;
        self.scroll_by(if down { step } else { -step });
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
        self.follow_cursor = false;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = self.max_scroll();
        self.follow_cursor = false;
    }

    /// Reconciles scroll and cursor with freshly laid-out content.
    ///
    /// After a cursor move the selected item is scrolled into view once;
    /// manual scrolling afterwards is left alone.
    pub fn sync_layout(&mut self, content: &DetailContent, viewport_height: usize) {
        self.viewport_height = viewport_height;
        self.content_height = content.lines.len();

        if content.anchors.is_empty() {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(content.anchors.len() - 1);
        }

        if self.follow_cursor
            && let Some(&start) = content.anchors.get(self.cursor)
        {
            let end = content
                .anchors
                .get(self.cursor + 1)
                .copied()
                .unwrap_or(content.lines.len());
            let item_height = end.saturating_sub(start).max(1);
            if start < self.scroll {
                self.scroll = start;
            } else if start + item_height.min(viewport_height) > self.scroll + viewport_height {
                self.scroll = (start + item_height.min(viewport_height)).saturating_sub(viewport_height);
            }
        }
        self.follow_cursor = false;
        self.scroll = self.scroll.min(self.max_scroll());
    }
}
