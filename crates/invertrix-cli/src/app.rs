//! Top-level flow: menu, batch, completion screen.

use std::time::Instant;

use anyhow::{Context, Result};
use invertrix_core::batch::{run_batch, BatchReport};
use invertrix_core::menu::{render, run_interactive_loop, MenuOutcome, MenuState, Terminal};
use invertrix_core::RunConfig;

/// Status shown while the batch runs.
pub const STARTING_STATUS: &str = "Starting inversion process...";

/// How a run ended.
#[derive(Debug)]
pub enum RunOutcome {
    /// The batch ran; the user has acknowledged the completion screen.
    Completed(BatchReport),
    /// The user pressed Escape in the menu.
    Aborted,
}

/// Drive one interactive session over `files`.
pub fn run<T: Terminal + ?Sized>(
    config: &RunConfig,
    files: &[String],
    terminal: &mut T,
) -> Result<RunOutcome> {
    let mut state = MenuState::new(files.iter().cloned());
    state.set_status(config.override_summary());

    let modes = match run_interactive_loop(&mut state, terminal).context("Menu failed")? {
        MenuOutcome::Selected(modes) => modes,
        MenuOutcome::Aborted => return Ok(RunOutcome::Aborted),
    };

    let start = Instant::now();
    state.set_status(STARTING_STATUS);
    render(&state, terminal)?;

    let report = run_batch(config, files, &modes)?;
    let elapsed = start.elapsed().as_secs_f64();

    state.set_status(completion_status(elapsed, &report));
    render(&state, terminal)?;
    terminal.read_key()?;

    Ok(RunOutcome::Completed(report))
}

/// Final status line, mentioning failures when there were any.
pub fn completion_status(elapsed_secs: f64, report: &BatchReport) -> String {
    if report.is_success() {
        format!("Completed in {elapsed_secs:.3}s. Press ANY KEY to exit.")
    } else {
        format!(
            "Completed in {elapsed_secs:.3}s with {} failed file(s). Press ANY KEY to exit.",
            report.failures.len()
        )
    }
}

/// Turn a finished batch into the process result: any failed file makes
/// the run fail so the exit code is non-zero.
pub fn finish(report: &BatchReport) -> Result<()> {
    if !report.is_success() {
        anyhow::bail!("{} file(s) failed to process", report.failures.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use invertrix_core::batch::{BatchError, FileFailure};
    use invertrix_core::decode::DecodeError;
    use invertrix_core::encode::encode_png;
    use invertrix_core::menu::Key;
    use invertrix_core::TransformMode;
    use std::collections::VecDeque;
    use std::io;
    use tempfile::tempdir;

    /// Records the status row of every frame and replays scripted keys.
    #[derive(Default)]
    struct RecordingTerminal {
        keys: VecDeque<Key>,
        texts: Vec<String>,
        frames: Vec<Vec<String>>,
    }

    impl Terminal for RecordingTerminal {
        fn clear(&mut self) -> io::Result<()> {
            self.texts.clear();
            Ok(())
        }

        fn put_text(&mut self, _row: u16, _col: u16, text: &str, _emphasis: bool) -> io::Result<()> {
            self.texts.push(text.to_string());
            Ok(())
        }

        fn refresh(&mut self) -> io::Result<()> {
            self.frames.push(std::mem::take(&mut self.texts));
            Ok(())
        }

        fn read_key(&mut self) -> io::Result<Key> {
            self.keys
                .pop_front()
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more keys"))
        }
    }

    fn frame_contains(frame: &[String], needle: &str) -> bool {
        frame.iter().any(|text| text.contains(needle))
    }

    #[test]
    fn test_completion_status_success() {
        let report = BatchReport::default();
        assert_eq!(
            completion_status(1.23456, &report),
            "Completed in 1.235s. Press ANY KEY to exit."
        );
    }

    fn failed_decode(file_name: &str) -> FileFailure {
        FileFailure {
            file_name: file_name.to_string(),
            mode: TransformMode::Both,
            error: BatchError::Decode {
                file: file_name.to_string(),
                source: DecodeError::InvalidFormat,
            },
        }
    }

    #[test]
    fn test_completion_status_with_failures() {
        let mut report = BatchReport::default();
        report.failures.push(failed_decode("a.png"));
        assert_eq!(
            completion_status(0.5, &report),
            "Completed in 0.500s with 1 failed file(s). Press ANY KEY to exit."
        );
    }

    #[test]
    fn test_finish_clean_batch_succeeds() {
        let mut report = BatchReport::default();
        report.written.push("a.png".into());
        assert!(finish(&report).is_ok());
        assert!(finish(&BatchReport::default()).is_ok());
    }

    #[test]
    fn test_finish_fails_when_any_file_failed() {
        let mut report = BatchReport::default();
        report.failures.push(failed_decode("bad.png"));
        let err = finish(&report).unwrap_err();
        assert_eq!(err.to_string(), "1 file(s) failed to process");

        report.failures.push(failed_decode("worse.png"));
        let err = finish(&report).unwrap_err();
        assert_eq!(err.to_string(), "2 file(s) failed to process");
    }

    #[test]
    fn test_run_full_session() {
        let input = tempdir().unwrap();
        let output = tempdir().unwrap();
        let png = encode_png(&[1, 2, 3, 4, 5, 6], 1, 2).unwrap();
        std::fs::write(input.path().join("a.png"), png).unwrap();

        let config = RunConfig::new(
            Some(input.path().to_path_buf()),
            Some(output.path().to_path_buf()),
        );
        let mut terminal = RecordingTerminal {
            keys: [Key::Right, Key::Enter, Key::Other].into_iter().collect(),
            ..Default::default()
        };

        let outcome = run(&config, &["a.png".to_string()], &mut terminal).unwrap();

        let RunOutcome::Completed(report) = outcome else {
            panic!("expected a completed run");
        };
        assert_eq!(report.written, vec![output.path().join("vertical_a.png")]);

        // First frame announces the overridden folders
        assert!(frame_contains(&terminal.frames[0], "Input folder set to"));
        let n = terminal.frames.len();
        assert!(frame_contains(&terminal.frames[n - 2], STARTING_STATUS));
        assert!(frame_contains(&terminal.frames[n - 1], "Press ANY KEY to exit."));
        // The acknowledgement key was consumed
        assert!(terminal.keys.is_empty());
    }

    #[test]
    fn test_run_aborted() {
        let config = RunConfig::default();
        let mut terminal = RecordingTerminal {
            keys: [Key::Escape].into_iter().collect(),
            ..Default::default()
        };

        let outcome = run(&config, &["a.png".to_string()], &mut terminal).unwrap();

        assert!(matches!(outcome, RunOutcome::Aborted));
        assert_eq!(terminal.frames.len(), 1);
    }
}
