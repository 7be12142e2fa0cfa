//! The terminal seam the menu draws through.

use std::io;

use super::Key;

/// Minimal terminal surface needed by the menu.
///
/// Implementations buffer drawing until [`refresh`](Terminal::refresh);
/// `read_key` blocks until one key is pressed.
pub trait Terminal {
    /// Blank the whole screen.
    fn clear(&mut self) -> io::Result<()>;

    /// Draw `text` starting at (`row`, `col`), highlighted when `emphasis` is set.
    fn put_text(&mut self, row: u16, col: u16, text: &str, emphasis: bool) -> io::Result<()>;

    /// Flush everything drawn since the last refresh.
    fn refresh(&mut self) -> io::Result<()>;

    /// Block for the next key press.
    fn read_key(&mut self) -> io::Result<Key>;
}

