//! Interactive selection menu.
//!
//! The menu lists every input image next to its four transform options and
//! lets the user pick one per image with the arrow keys.
//!
//! # Architecture
//!
//! Data flows one way:
//! 1. [`MenuState`] holds entries, cursor and status line
//! 2. [`MenuView`] describes what to show for a state
//! 3. [`layout`] positions the view as [`TextRun`]s
//! 4. A [`Terminal`] draws the runs and supplies the next [`Key`]
//! 5. [`MenuState::dispatch`] applies the key
//!
//! Nothing here knows about a concrete terminal library; the CLI crate
//! supplies the [`Terminal`] implementation.

mod layout;
mod run;
mod state;
mod terminal;
mod view;

pub use layout::{layout, TextRun};
pub use run::{render, run_interactive_loop, MenuOutcome};
pub use state::{Key, MenuEntry, MenuSignal, MenuState};
pub use terminal::Terminal;
pub use view::{title, EntryView, MenuView, OptionView, LEGEND};
