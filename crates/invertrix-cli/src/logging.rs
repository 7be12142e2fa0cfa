//! Log output that can be held back while the full-screen menu is up.
//!
//! Records written while held are buffered and flushed to stderr once the
//! terminal has been restored, so they neither scribble over the menu nor
//! get wiped by the next redraw.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Default)]
struct Inner {
    held: bool,
    buffer: Vec<u8>,
}

/// Shared log sink handed to env_logger as a pipe target.
#[derive(Clone, Default)]
pub struct DeferredStderr {
    inner: Arc<Mutex<Inner>>,
}

impl DeferredStderr {
    /// Install env_logger writing through this sink.
    ///
    /// The default filter is `warn`; `RUST_LOG` overrides it.
    pub fn init_logger(&self) {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
            .target(env_logger::Target::Pipe(Box::new(self.clone())))
            .write_style(env_logger::WriteStyle::Never)
            .init();
    }

    /// Buffer records until the returned guard is dropped.
    pub fn hold(&self) -> HeldLog<'_> {
        self.lock().held = true;
        HeldLog { sink: self }
    }

    /// Stop holding and hand back everything buffered so far.
    fn release(&self) -> Vec<u8> {
        let mut inner = self.lock();
        inner.held = false;
        std::mem::take(&mut inner.buffer)
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A panic mid-write leaves at worst a partial record
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Write for DeferredStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut inner = self.lock();
        if inner.held {
            inner.buffer.extend_from_slice(buf);
            Ok(buf.len())
        } else {
            drop(inner);
            io::stderr().write(buf)
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.lock().held {
            Ok(())
        } else {
            io::stderr().flush()
        }
    }
}

/// Holds log output for as long as it lives; dropping it flushes the
/// buffered records to stderr.
pub struct HeldLog<'a> {
    sink: &'a DeferredStderr,
}

impl Drop for HeldLog<'_> {
    fn drop(&mut self) {
        let held = self.sink.release();
        if !held.is_empty() {
            let mut stderr = io::stderr();
            let _ = stderr.write_all(&held);
            let _ = stderr.flush();
        }
    }
}
