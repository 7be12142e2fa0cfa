//! Rendering and the blocking input loop.

use std::io;

use super::layout::layout;
use super::terminal::Terminal;
use super::view::MenuView;
use super::{MenuSignal, MenuState};
use crate::transform::TransformMode;

/// How a menu session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuOutcome {
    /// Enter was pressed; one mode per entry, in entry order.
    Selected(Vec<TransformMode>),
    /// Escape was pressed.
    Aborted,
}

/// Redraw the full menu. Does not touch the state.
pub fn render<T: Terminal + ?Sized>(state: &MenuState, terminal: &mut T) -> io::Result<()> {
    let view = MenuView::from_state(state);

    terminal.clear()?;
    for run in layout(&view) {
        terminal.put_text(run.row, run.col, &run.text, run.emphasis)?;
    }
    terminal.refresh()
}

/// Render, read one key, dispatch it; repeat until Enter or Escape.
pub fn run_interactive_loop<T: Terminal + ?Sized>(
    state: &mut MenuState,
    terminal: &mut T,
) -> io::Result<MenuOutcome> {
    loop {
        render(state, terminal)?;
        let key = terminal.read_key()?;

        match state.dispatch(key) {
            MenuSignal::Continue => {}
            MenuSignal::Finish => {
                log::debug!("Menu finished with {} entries", state.len());
                return Ok(MenuOutcome::Selected(state.selections()));
            }
            MenuSignal::Abort => {
                log::debug!("Menu aborted");
                return Ok(MenuOutcome::Aborted);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::Key;
    use std::collections::VecDeque;

    /// Terminal that replays a fixed key script and records every frame.
    #[derive(Default)]
    struct ScriptedTerminal {
        keys: VecDeque<Key>,
        pending: Vec<(u16, u16, String, bool)>,
        frames: Vec<Vec<(u16, u16, String, bool)>>,
        clears: usize,
    }

    impl ScriptedTerminal {
        fn with_keys(keys: &[Key]) -> Self {
            Self {
                keys: keys.iter().copied().collect(),
                ..Default::default()
            }
        }
    }

    impl Terminal for ScriptedTerminal {
        fn clear(&mut self) -> io::Result<()> {
            self.clears += 1;
            self.pending.clear();
            Ok(())
        }

        fn put_text(&mut self, row: u16, col: u16, text: &str, emphasis: bool) -> io::Result<()> {
            self.pending.push((row, col, text.to_string(), emphasis));
            Ok(())
        }

        fn refresh(&mut self) -> io::Result<()> {
            self.frames.push(std::mem::take(&mut self.pending));
            Ok(())
        }

        fn read_key(&mut self) -> io::Result<Key> {
            self.keys
                .pop_front()
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "key script exhausted"))
        }
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut state = MenuState::new(["a.png", "b.png"]);
        state.dispatch(Key::Right);
        let before = state.clone();
        let mut terminal = ScriptedTerminal::default();

        render(&state, &mut terminal).unwrap();
        render(&state, &mut terminal).unwrap();

        assert_eq!(terminal.frames.len(), 2);
        assert_eq!(terminal.frames[0], terminal.frames[1]);
        assert_eq!(terminal.clears, 2);
        assert_eq!(state, before);
    }

    #[test]
    fn test_loop_returns_selections_on_enter() {
        let mut state = MenuState::new(["a.png", "b.png"]);
        let mut terminal = ScriptedTerminal::with_keys(&[
            Key::Right,
            Key::Down,
            Key::Left,
            Key::Other,
            Key::Enter,
        ]);

        let outcome = run_interactive_loop(&mut state, &mut terminal).unwrap();

        assert_eq!(
            outcome,
            MenuOutcome::Selected(vec![TransformMode::Vertical, TransformMode::Both])
        );
        // One frame per key read
        assert_eq!(terminal.frames.len(), 5);
    }

    #[test]
    fn test_loop_aborts_on_escape() {
        let mut state = MenuState::new(["a.png"]);
        let mut terminal = ScriptedTerminal::with_keys(&[Key::Right, Key::Escape, Key::Enter]);

        let outcome = run_interactive_loop(&mut state, &mut terminal).unwrap();

        assert_eq!(outcome, MenuOutcome::Aborted);
        // Enter was never read
        assert_eq!(terminal.keys.len(), 1);
    }

    #[test]
    fn test_empty_menu_renders_once_and_finishes() {
        let mut state = MenuState::new(Vec::<String>::new());
        let mut terminal = ScriptedTerminal::with_keys(&[Key::Enter]);

        let outcome = run_interactive_loop(&mut state, &mut terminal).unwrap();

        assert_eq!(outcome, MenuOutcome::Selected(vec![]));
        assert_eq!(terminal.frames.len(), 1);
        assert!(terminal.frames[0].iter().any(|(_, _, text, _)| text == "ENTER"));
    }

    #[test]
    fn test_read_error_propagates() {
        let mut state = MenuState::new(["a.png"]);
        let mut terminal = ScriptedTerminal::default();

        let err = run_interactive_loop(&mut state, &mut terminal).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
