//! Shim context: the console device, the millisecond clock, and the
//! guest-visible timing slots.
//!
//! Per-run state is threaded through [`ShimCtx`] explicitly; there are no
//! process-wide statics here. One context is created per benchmark run and
//! moves into the backend's store alongside the instance it serves.

use crate::wasi::Errno;
use std::fmt;
use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Instant;

/// Monotonic millisecond counter: a single origin latched at creation,
/// read as wrapping 32-bit milliseconds.
#[derive(Clone, Copy, Debug)]
pub struct Clock {
    origin: Instant,
}

impl Clock {
    pub fn new() -> Clock {
        Clock {
            origin: Instant::now(),
        }
    }

    pub fn millis(&self) -> u32 {
        self.origin.elapsed().as_millis() as u32
    }
}

impl Default for Clock {
    fn default() -> Clock {
        Clock::new()
    }
}

/// The process-wide character-output device.
///
/// Both console descriptors and the harness's own report lines funnel into
/// one sink; cloning a `Console` clones the handle, not the device.
#[derive(Clone)]
pub struct Console {
    sink: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl Console {
    pub fn new(sink: impl Write + Send + 'static) -> Console {
        Console {
            sink: Arc::new(Mutex::new(Box::new(sink))),
        }
    }

    pub fn stdout() -> Console {
        Console::new(std::io::stdout())
    }

    /// Flush one buffer segment synchronously; returns the bytes written.
    pub fn write_all(&self, bytes: &[u8]) -> Result<usize, Errno> {
        let mut sink = self.sink.lock().expect("console sink is not poisoned");
        sink.write_all(bytes)
            .and_then(|()| sink.flush())
            .map_err(|_| Errno::Io)?;
        Ok(bytes.len())
    }

    /// Host-side report line. Console output is best-effort by the time the
    /// harness is printing diagnostics, so failures only log.
    pub fn line(&self, args: fmt::Arguments<'_>) {
        let mut sink = self.sink.lock().expect("console sink is not poisoned");
        let res = sink
            .write_fmt(args)
            .and_then(|()| sink.write_all(b"\n"))
            .and_then(|()| sink.flush());
        if let Err(e) = res {
            tracing::warn!(error = %e, "console write failed");
        }
    }
}

/// Per-run shim state handed to the hostcalls.
pub struct ShimCtx {
    console: Console,
    pub(crate) clock: Clock,
    pub(crate) start_ms: u32,
    pub(crate) stop_ms: u32,
}

impl ShimCtx {
    pub fn new(console: Console) -> ShimCtx {
        ShimCtx {
            console,
            clock: Clock::new(),
            start_ms: 0,
            stop_ms: 0,
        }
    }

    pub fn console(&self) -> &Console {
        &self.console
    }
}
