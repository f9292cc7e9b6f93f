//! Heap-allocation tracing over the binary trace channel.
//!
//! When enabled, every allocator call performs the real operation first,
//! then emits one fixed-layout record to the installed [`TraceChannel`],
//! then returns the real result to the caller; tracing observes allocation
//! outcomes, never alters them. The channel also carries a literal
//! readiness marker at boot and a completion marker at shutdown so the
//! external consumer can frame a run.

use byteorder::{ByteOrder, LittleEndian};
use lazy_static::lazy_static;
use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;
use std::io::Write;
use std::sync::{Arc, Mutex, RwLock};

/// Literal readiness marker emitted when the channel comes up.
pub const TRACE_READY: &[u8] = b"trace ready!\n";

/// Literal completion marker emitted at shutdown.
pub const TRACE_DONE: &[u8] = b"TRACE_DONE\n";

/// Fixed length of one encoded record: a tag byte plus three little-endian
/// u64 fields, unused fields zero.
pub const TRACE_RECORD_LEN: usize = 25;

const TAG_ALLOCATE: u8 = 0;
const TAG_REALLOCATE: u8 = 1;
const TAG_FREE: u8 = 2;

/// One allocator event. Emitted synchronously at the call site and not
/// retained in memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraceEvent {
    Allocate { addr: u64, size: u64 },
    Reallocate { old_addr: u64, new_addr: u64, size: u64 },
    Free { addr: u64 },
}

impl TraceEvent {
    pub fn encode(&self) -> [u8; TRACE_RECORD_LEN] {
        let mut buf = [0u8; TRACE_RECORD_LEN];
        match *self {
            TraceEvent::Allocate { addr, size } => {
                buf[0] = TAG_ALLOCATE;
                LittleEndian::write_u64(&mut buf[1..9], addr);
                LittleEndian::write_u64(&mut buf[9..17], size);
            }
            TraceEvent::Reallocate {
                old_addr,
                new_addr,
                size,
            } => {
                buf[0] = TAG_REALLOCATE;
                LittleEndian::write_u64(&mut buf[1..9], old_addr);
                LittleEndian::write_u64(&mut buf[9..17], new_addr);
                LittleEndian::write_u64(&mut buf[17..25], size);
            }
            TraceEvent::Free { addr } => {
                buf[0] = TAG_FREE;
                LittleEndian::write_u64(&mut buf[1..9], addr);
            }
        }
        buf
    }

    /// Decode one record; `None` on an unknown tag. The harness only ever
    /// emits; decoding exists for host-side consumers and tests.
    pub fn decode(buf: &[u8; TRACE_RECORD_LEN]) -> Option<TraceEvent> {
        let a = LittleEndian::read_u64(&buf[1..9]);
        let b = LittleEndian::read_u64(&buf[9..17]);
        let c = LittleEndian::read_u64(&buf[17..25]);
        match buf[0] {
            TAG_ALLOCATE => Some(TraceEvent::Allocate { addr: a, size: b }),
            TAG_REALLOCATE => Some(TraceEvent::Reallocate {
                old_addr: a,
                new_addr: b,
                size: c,
            }),
            TAG_FREE => Some(TraceEvent::Free { addr: a }),
            _ => None,
        }
    }
}

/// The process-wide byte-oriented trace sink.
///
/// Writes are best-effort and must never panic: records can be emitted
/// from inside the global allocator.
pub struct TraceChannel {
    sink: Mutex<Box<dyn Write + Send>>,
}

impl TraceChannel {
    pub fn new(sink: impl Write + Send + 'static) -> TraceChannel {
        TraceChannel {
            sink: Mutex::new(Box::new(sink)),
        }
    }

    pub fn stderr() -> TraceChannel {
        TraceChannel::new(std::io::stderr())
    }

    fn write(&self, bytes: &[u8]) {
        let Ok(mut sink) = self.sink.lock() else {
            return;
        };
        let _ = sink.write_all(bytes).and_then(|()| sink.flush());
    }

    pub fn ready(&self) {
        self.write(TRACE_READY);
    }

    pub fn done(&self) {
        self.write(TRACE_DONE);
    }

    pub fn emit(&self, event: &TraceEvent) {
        self.write(&event.encode());
    }
}

lazy_static! {
    static ref INSTALLED: RwLock<Option<Arc<TraceChannel>>> = RwLock::new(None);
}

/// Install the channel allocator events are reported to. There is one
/// logical thread of execution per run, so last-install wins.
pub fn install(channel: Arc<TraceChannel>) {
    if let Ok(mut slot) = INSTALLED.write() {
        *slot = Some(channel);
    }
}

pub fn installed() -> Option<Arc<TraceChannel>> {
    INSTALLED.read().ok()?.clone()
}

thread_local! {
    static IN_TRACE: Cell<bool> = const { Cell::new(false) };
}

/// Emit an event on the installed channel, if any. The reentrancy guard
/// keeps the sink's own allocations from recursing into the tracer.
pub fn record(event: TraceEvent) {
    let _ = IN_TRACE.try_with(|flag| {
        if flag.get() {
            return;
        }
        flag.set(true);
        if let Some(channel) = installed() {
            channel.emit(&event);
        }
        flag.set(false);
    });
}

/// A [`GlobalAlloc`] wrapper reporting every allocate/reallocate/free to
/// the trace channel.
pub struct TracingAlloc<A = System>(pub A);

unsafe impl<A: GlobalAlloc> GlobalAlloc for TracingAlloc<A> {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = self.0.alloc(layout);
        record(TraceEvent::Allocate {
            addr: ptr as u64,
            size: layout.size() as u64,
        });
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        self.0.dealloc(ptr, layout);
        record(TraceEvent::Free { addr: ptr as u64 });
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = self.0.realloc(ptr, layout, new_size);
        record(TraceEvent::Reallocate {
            old_addr: ptr as u64,
            new_addr: new_ptr as u64,
            size: new_size as u64,
        });
        new_ptr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_round_trip() {
        let events = [
            TraceEvent::Allocate {
                addr: 0x2000_0100,
                size: 64,
            },
            TraceEvent::Reallocate {
                old_addr: 0x2000_0100,
                new_addr: 0x2000_0400,
                size: 128,
            },
            TraceEvent::Free { addr: 0x2000_0400 },
        ];
        for event in events {
            assert_eq!(TraceEvent::decode(&event.encode()), Some(event));
        }
    }

    #[test]
    fn unknown_tag_decodes_to_none() {
        let mut buf = [0u8; TRACE_RECORD_LEN];
        buf[0] = 9;
        assert_eq!(TraceEvent::decode(&buf), None);
    }

    #[test]
    fn free_record_zeroes_unused_fields() {
        let buf = TraceEvent::Free { addr: 0xAB }.encode();
        assert!(buf[9..].iter().all(|&b| b == 0));
    }

    #[test]
    fn channel_frames_a_run() {
        use std::sync::{Arc, Mutex};

        #[derive(Clone, Default)]
        struct SharedBuf(Arc<Mutex<Vec<u8>>>);

        impl Write for SharedBuf {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let buf = SharedBuf::default();
        let channel = TraceChannel::new(buf.clone());
        channel.ready();
        channel.emit(&TraceEvent::Allocate { addr: 16, size: 8 });
        channel.done();

        let bytes = buf.0.lock().unwrap().clone();
        let body_start = TRACE_READY.len();
        let body_end = bytes.len() - TRACE_DONE.len();
        assert_eq!(&bytes[..body_start], TRACE_READY);
        assert_eq!(&bytes[body_end..], TRACE_DONE);
        assert_eq!(body_end - body_start, TRACE_RECORD_LEN);
    }

    #[test]
    fn record_reaches_installed_channel() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_path_buf();
        install(Arc::new(TraceChannel::new(
            std::fs::File::create(&path).unwrap(),
        )));
        record(TraceEvent::Free { addr: 1 });
        let written = std::fs::read(&path).unwrap();
        assert_eq!(written.len(), TRACE_RECORD_LEN);
        assert_eq!(
            TraceEvent::decode(&written.try_into().unwrap()),
            Some(TraceEvent::Free { addr: 1 })
        );
    }
}
