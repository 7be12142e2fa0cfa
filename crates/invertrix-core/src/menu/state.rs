//! Selection menu state machine.

use crate::transform::TransformMode;

/// Keys the menu reacts to. Everything else maps to [`Key::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
    Other,
}

/// What the interactive loop should do after a key has been dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuSignal {
    /// Keep rendering and reading keys.
    Continue,
    /// The user confirmed their selections.
    Finish,
    /// The user asked to quit; the process should exit without output.
    Abort,
}

/// One input image and the transform selected for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    file_name: String,
    /// Currently selected transform.
    pub mode: TransformMode,
}

impl MenuEntry {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            mode: TransformMode::None,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

/// Entries, cursor and status line of a menu session.
///
/// The number of entries is fixed at construction. The cursor is always a
/// valid entry index when there is at least one entry, and 0 otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuState {
    entries: Vec<MenuEntry>,
    cursor: usize,
    status: String,
}

impl MenuState {
    /// Create a menu with every entry set to [`TransformMode::None`].
    pub fn new<I, S>(file_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: file_names.into_iter().map(MenuEntry::new).collect(),
            cursor: 0,
            status: String::new(),
        }
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the highlighted entry.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Replace the status line shown under the legend.
    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = text.into();
    }

    /// Selected mode for every entry, in entry order.
    pub fn selections(&self) -> Vec<TransformMode> {
        self.entries.iter().map(|entry| entry.mode).collect()
    }

    /// Apply one key press.
    ///
    /// | Key    | Effect                                  |
    /// |--------|-----------------------------------------|
    /// | Left   | previous mode for the highlighted entry |
    /// | Right  | next mode for the highlighted entry     |
    /// | Up     | cursor up, wrapping to the last entry   |
    /// | Down   | cursor down, wrapping to the first      |
    /// | Enter  | [`MenuSignal::Finish`]                  |
    /// | Escape | [`MenuSignal::Abort`]                   |
    ///
    /// Any other key leaves the state unchanged. With no entries, only
    /// Enter and Escape have an effect.
    pub fn dispatch(&mut self, key: Key) -> MenuSignal {
        let count = self.entries.len();

        match key {
            Key::Left => {
                if let Some(entry) = self.entries.get_mut(self.cursor) {
                    entry.mode = entry.mode.prev();
                }
            }
            Key::Right => {
                if let Some(entry) = self.entries.get_mut(self.cursor) {
                    entry.mode = entry.mode.next();
                }
            }
            Key::Up if count > 0 => {
                self.cursor = (self.cursor + count - 1) % count;
            }
            Key::Down if count > 0 => {
                self.cursor = (self.cursor + 1) % count;
            }
            Key::Enter => return MenuSignal::Finish,
            Key::Escape => return MenuSignal::Abort,
            _ => {}
        }

        MenuSignal::Continue
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
