//! Screen layout for the menu.
//!
//! Positions are (row, column) cells counted from the top-left corner.
//!
//! ```text
//! row 1                       INVERTRIX! (v1.0.0)
//! row 2                       ===================
//! row 4   >>  a.png            [None, Vertical, Horizontal, Both]
//! row 5       b.png            [None, Vertical, Horizontal, Both]
//! row n+5 ESC:        Exit
//!  ...
//! row n+10 <status>
//! ```

use super::view::MenuView;

const TITLE_ROW: usize = 1;
const TITLE_COL: usize = 20;
const FIRST_ENTRY_ROW: usize = 4;
const CURSOR_MARKER: &str = ">>";
const NAME_COL: usize = 4;
const OPTIONS_COL: usize = 20;
const LEGEND_GAP: usize = 1;
const LEGEND_ACTION_COL: usize = 12;
const STATUS_GAP: usize = 1;

/// A piece of text at a fixed screen position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub row: u16,
    pub col: u16,
    pub text: String,
    /// Drawn highlighted (reverse video).
    pub emphasis: bool,
}

impl TextRun {
    fn new(row: usize, col: usize, text: impl Into<String>, emphasis: bool) -> Self {
        Self {
            row: to_cell(row),
            col: to_cell(col),
            text: text.into(),
            emphasis,
        }
    }
}

#[inline]
fn to_cell(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

/// Column where the option list starts, pushed right so long file names
/// never run into it.
///
/// Widths are counted in `char`s, which is one cell per character for
/// Latin text. Double-width characters (CJK, emoji) take two cells, so
/// names containing them still push the option list out of alignment.
fn options_col(view: &MenuView<'_>) -> usize {
    let longest = view
        .entries
        .iter()
        .map(|entry| entry.file_name.chars().count())
        .max()
        .unwrap_or(0);
    OPTIONS_COL.max(NAME_COL + longest)
}

/// Lay out a view into positioned text runs, in drawing order.
pub fn layout(view: &MenuView<'_>) -> Vec<TextRun> {
    let mut runs = Vec::new();

    runs.push(TextRun::new(TITLE_ROW, TITLE_COL, view.title.clone(), false));
    runs.push(TextRun::new(
        TITLE_ROW + 1,
        TITLE_COL,
        "=".repeat(view.title.chars().count()),
        false,
    ));

    let bracket_col = options_col(view);
    for (i, entry) in view.entries.iter().enumerate() {
        let row = FIRST_ENTRY_ROW + i;

        if entry.is_cursor {
            runs.push(TextRun::new(row, 0, CURSOR_MARKER, false));
        }
        runs.push(TextRun::new(row, NAME_COL, entry.file_name, false));

        runs.push(TextRun::new(row, bracket_col, " [", false));
        let mut col = bracket_col + 2;
        for (j, option) in entry.options.iter().enumerate() {
            if j > 0 {
                runs.push(TextRun::new(row, col, ", ", false));
                col += 2;
            }
            runs.push(TextRun::new(row, col, option.label, option.selected));
            col += option.label.chars().count();
        }
        runs.push(TextRun::new(row, col, "]", false));
    }

    let legend_row = FIRST_ENTRY_ROW + view.entries.len() + LEGEND_GAP;
    for (i, (keys, action)) in view.legend.iter().enumerate() {
        runs.push(TextRun::new(legend_row + i, 0, *keys, false));
        runs.push(TextRun::new(legend_row + i, LEGEND_ACTION_COL, *action, false));
    }

    if !view.status.is_empty() {
        let status_row = legend_row + view.legend.len() + STATUS_GAP;
        runs.push(TextRun::new(status_row, 0, view.status, false));
    }

    runs
}
