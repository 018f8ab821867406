//! Region / type filter picker.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use evdash_core::filter::{self, FilterChoice, FilterField};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::OverlayUpdate;
use crate::effects::UiEffect;
use crate::features::event_list::{choice_label, field_labels};
use crate::mutations::{FilterMutation, StateMutation};
use crate::state::TuiState;
use crate::strings;

/// One picker column: "all" followed by the distinct values.
#[derive(Debug, Clone)]
struct Column {
    field: FilterField,
    choices: Vec<FilterChoice>,
    selected: usize,
}

impl Column {
    fn new(tui: &TuiState, field: FilterField) -> Self {
        let mut choices = vec![FilterChoice::All];
        choices.extend(
            filter::options(tui.dataset.events(), field, tui.language)
                .into_iter()
                .map(FilterChoice::Value),
        );
        let current = tui.filter.choice(field);
        let selected = choices.iter().position(|c| c == current).unwrap_or(0);
        Self {
            field,
            choices,
            selected,
        }
    }

    fn choice(&self) -> FilterChoice {
        self.choices.get(self.selected).cloned().unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
pub struct FilterPickerState {
    columns: Vec<Column>,
    active: usize,
}

impl FilterPickerState {
    pub fn open(tui: &TuiState) -> (Self, Vec<UiEffect>) {
        let columns = FilterField::all()
            .iter()
            .map(|&field| Column::new(tui, field))
            .collect();
        (Self { columns, active: 0 }, vec![])
    }

    pub fn active_field(&self) -> FilterField {
        self.columns[self.active].field
    }

    pub fn handle_key(&mut self, _tui: &TuiState, key: KeyEvent) -> OverlayUpdate {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc | KeyCode::Char('c') if key.code == KeyCode::Esc || ctrl => {
                OverlayUpdate::close()
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right
            | KeyCode::Char('h' | 'l') => {
                self.active = (self.active + 1) % self.columns.len();
                OverlayUpdate::stay()
            }
            KeyCode::Up | KeyCode::Char('k') => {
                let column = &mut self.columns[self.active];
                column.selected = column.selected.saturating_sub(1);
                OverlayUpdate::stay()
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let column = &mut self.columns[self.active];
                if column.selected + 1 < column.choices.len() {
                    column.selected += 1;
                }
                OverlayUpdate::stay()
            }
            KeyCode::Char('c') => OverlayUpdate::close()
                .with_mutations(vec![StateMutation::Filter(FilterMutation::Reset)]),
            KeyCode::Enter => {
                let mutations = self
                    .columns
                    .iter()
                    .map(|column| {
                        StateMutation::Filter(FilterMutation::Set {
                            field: column.field,
                            choice: column.choice(),
                        })
                    })
                    .collect();
                OverlayUpdate::close().with_mutations(mutations)
            }
            _ => OverlayUpdate::stay(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, tui: &TuiState) {
        use super::render_utils::{InputHint, OverlayConfig, render_overlay};

        let lang = tui.language;
        let longest = self
            .columns
            .iter()
            .flat_map(|c| c.choices.iter().map(|choice| choice_label(c.field, choice, lang)))
            .map(|label| label.width())
            .max()
            .unwrap_or(0) as u16;
        let rows = self
            .columns
            .iter()
            .map(|c| c.choices.len())
            .max()
            .unwrap_or(1) as u16;

        let hints = [
            InputHint::new("Tab", "column"),
            InputHint::new("↑↓", "choose"),
            InputHint::new("Enter", "apply"),
            InputHint::new("c", "clear"),
            InputHint::new("Esc", "close"),
        ];
        let layout = render_overlay(
            frame,
            area,
            &OverlayConfig {
                title: strings::FILTERS.get(lang),
                border_color: Color::Yellow,
                width: (longest + 6).max(24) * 2 + 3,
                height: rows + 5,
                hints: &hints,
            },
        );

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .spacing(1)
            .split(layout.body);

        for (i, (column, rect)) in self.columns.iter().zip(columns.iter()).enumerate() {
            let active = i == self.active;
            let heading_style = if active {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let heading = field_labels(column.field).0.get(lang);
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(heading, heading_style))),
                Rect { height: 1, ..*rect },
            );

            let current = tui.filter.choice(column.field);
            let items: Vec<ListItem<'static>> = column
                .choices
                .iter()
                .map(|choice| {
                    let mark = if choice == current { "● " } else { "  " };
                    ListItem::new(format!("{mark}{}", choice_label(column.field, choice, lang)))
                })
                .collect();
            let highlight = if active {
                Style::default()
                    .bg(Color::Magenta)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Magenta)
            };
            let list = List::new(items).highlight_style(highlight);
            let mut list_state = ListState::default().with_selected(Some(column.selected));
            frame.render_stateful_widget(
                list,
                Rect {
                    y: rect.y + 1,
                    height: rect.height.saturating_sub(1),
                    ..*rect
                },
                &mut list_state,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use evdash_core::config::Config;
    use evdash_core::dataset::Dataset;
    use evdash_core::i18n::LocalizedText;
    use evdash_core::model::Event;

    use super::*;
    use crate::overlays::OverlayTransition;

    fn tui() -> TuiState {
        let event = |region: &str, kind: &str| Event {
            region: LocalizedText::same(region),
            event_type: LocalizedText::same(kind),
            ..Event::default()
        };
        TuiState::new(
            &Config::default(),
            Dataset::from(vec![
                event("Asia", "Expo"),
                event("Europe", "Forum"),
                event("Asia", "Forum"),
            ]),
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_open_lists_distinct_values_after_all() {
        let tui = tui();
        let (picker, _) = FilterPickerState::open(&tui);
        assert_eq!(picker.columns[0].choices.len(), 3);
        assert_eq!(picker.columns[1].choices.len(), 3);
        assert_eq!(picker.active_field(), FilterField::Region);
    }

    #[test]
    fn test_enter_sets_both_fields() {
        let tui = tui();
        let (mut picker, _) = FilterPickerState::open(&tui);
        picker.handle_key(&tui, key(KeyCode::Down));
        picker.handle_key(&tui, key(KeyCode::Tab));
        picker.handle_key(&tui, key(KeyCode::Down));
        picker.handle_key(&tui, key(KeyCode::Down));

        let update = picker.handle_key(&tui, key(KeyCode::Enter));
        assert!(matches!(update.transition, OverlayTransition::Close));
        let set: Vec<(FilterField, FilterChoice)> = update
            .mutations
            .into_iter()
            .filter_map(|m| match m {
                StateMutation::Filter(FilterMutation::Set { field, choice }) => {
                    Some((field, choice))
                }
                _ => None,
            })
            .collect();
        assert_eq!(
            set,
            vec![
                (FilterField::Region, FilterChoice::Value("Asia".to_string())),
                (FilterField::EventType, FilterChoice::Value("Forum".to_string())),
            ]
        );
    }

    #[test]
    fn test_clear_resets() {
        let tui = tui();
        let (mut picker, _) = FilterPickerState::open(&tui);
        let update = picker.handle_key(&tui, key(KeyCode::Char('c')));
        assert!(matches!(
            update.mutations.as_slice(),
            [StateMutation::Filter(FilterMutation::Reset)]
        ));
    }
}
