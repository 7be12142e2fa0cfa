//! Declarative description of what the menu shows.
//!
//! A [`MenuView`] is built from a [`MenuState`] and carries no screen
//! coordinates. [`layout`](super::layout) turns it into positioned text.

use super::MenuState;
use crate::transform::TransformMode;

/// Key legend shown under the entry list, as (keys, action) pairs.
pub const LEGEND: [(&str, &str); 4] = [
    ("ESC:", "Exit"),
    ("UP/DOWN:", "Navigate images"),
    ("LEFT/RIGHT:", "Set Invertrix choice"),
    ("ENTER", "Start!"),
];

/// Menu title including the crate version.
pub fn title() -> String {
    format!("INVERTRIX! (v{})", crate::VERSION)
}

/// One label in an entry's option list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub label: &'static str,
    pub selected: bool,
}

/// One row of the entry list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryView<'a> {
    pub file_name: &'a str,
    /// Whether the cursor is on this entry.
    pub is_cursor: bool,
    pub options: Vec<OptionView>,
}

/// Everything the menu screen shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuView<'a> {
    pub title: String,
    pub entries: Vec<EntryView<'a>>,
    pub legend: &'static [(&'static str, &'static str)],
    pub status: &'a str,
}

impl<'a> MenuView<'a> {
    pub fn from_state(state: &'a MenuState) -> Self {
        let entries = state
            .entries()
            .iter()
            .enumerate()
            .map(|(i, entry)| EntryView {
                file_name: entry.file_name(),
                is_cursor: i == state.cursor(),
                options: TransformMode::ALL
                    .iter()
                    .map(|mode| OptionView {
                        label: mode.label(),
                        selected: *mode == entry.mode,
                    })
                    .collect(),
            })
            .collect();

        Self {
            title: title(),
            entries,
            legend: &LEGEND,
            status: state.status(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::Key;

    #[test]
    fn test_title_has_version() {
        assert_eq!(title(), format!("INVERTRIX! (v{})", crate::VERSION));
        assert!(title().ends_with(&format!("(v{})", env!("CARGO_PKG_VERSION"))));
    }

    #[test]
    fn test_view_marks_cursor_and_selection() {
        let mut state = MenuState::new(["a.png", "b.png"]);
        state.dispatch(Key::Down);
        state.dispatch(Key::Right);
        state.dispatch(Key::Right);
        state.set_status("ready");

        let view = MenuView::from_state(&state);

        assert_eq!(view.entries.len(), 2);
        assert!(!view.entries[0].is_cursor);
        assert!(view.entries[1].is_cursor);
        assert_eq!(view.entries[1].file_name, "b.png");

        let selected: Vec<_> = view.entries[1]
            .options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.label)
            .collect();
        assert_eq!(selected, vec!["Horizontal"]);
        assert!(view.entries[0].options[0].selected);
        assert_eq!(view.status, "ready");
    }

    #[test]
    fn test_view_lists_all_options_in_cycle_order() {
        let state = MenuState::new(["a.png"]);
        let view = MenuView::from_state(&state);
        let labels: Vec<_> = view.entries[0].options.iter().map(|o| o.label).collect();
        assert_eq!(labels, vec!["None", "Vertical", "Horizontal", "Both"]);
    }

    #[test]
    fn test_empty_view() {
        let state = MenuState::new(Vec::<String>::new());
        let view = MenuView::from_state(&state);
        assert!(view.entries.is_empty());
        assert_eq!(view.legend.len(), 4);
    }
}
