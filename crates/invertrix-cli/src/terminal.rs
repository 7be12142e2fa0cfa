//! Crossterm implementation of the menu's terminal seam.

use std::io::{self, Stdout, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use invertrix_core::menu::{Key, Terminal};

/// Full-screen terminal session on stdout.
///
/// Entering switches to raw mode and the alternate screen; dropping the
/// value restores the original terminal.
pub struct CrosstermTerminal {
    out: Stdout,
}

impl CrosstermTerminal {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut out = io::stdout();
        if let Err(e) = execute!(out, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        Ok(Self { out })
    }
}

impl Drop for CrosstermTerminal {
    fn drop(&mut self) {
        let _ = execute!(self.out, SetAttribute(Attribute::Reset), Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

impl Terminal for CrosstermTerminal {
    fn clear(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All))
    }

    fn put_text(&mut self, row: u16, col: u16, text: &str, emphasis: bool) -> io::Result<()> {
        queue!(self.out, MoveTo(col, row))?;
        if emphasis {
            queue!(
                self.out,
                SetAttribute(Attribute::Reverse),
                Print(text),
                SetAttribute(Attribute::NoReverse)
            )
        } else {
            queue!(self.out, Print(text))
        }
    }

    fn refresh(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    fn read_key(&mut self) -> io::Result<Key> {
        loop {
            if let Event::Key(key_event) = event::read()? {
                // Release/repeat events are reported on some platforms
                if key_event.kind == KeyEventKind::Press {
                    return Ok(map_key(key_event));
                }
            }
        }
    }
}

/// Translate a crossterm key event into a menu key.
///
/// Raw mode swallows SIGINT, so Ctrl+C is treated like Escape.
pub fn map_key(event: KeyEvent) -> Key {
    match event.code {
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => Key::Escape,
        _ => Key::Other,
    }
}
