//! Hostcalls servicing the guest's `wasi_snapshot_preview1` imports, plus
//! the `env` timing primitives.
//!
//! Each call takes the guest memory view and the shim context explicitly
//! and returns the errno the guest sees. Address validation happens before
//! the descriptor check, and the descriptor check before any output, so a
//! malformed call never touches memory or the console.

use crate::ctx::ShimCtx;
use crate::memory::GuestMem;
use crate::wasi::{Ciovec, Errno, Fdstat, Whence, CIOVEC_SIZE, STDERR_FD, STDOUT_FD};
use tracing::warn;

fn is_console_fd(fd: u32) -> bool {
    fd == STDOUT_FD || fd == STDERR_FD
}

/// `fd_write(fd, *iovs, iovs_len, *nwritten) -> errno`
///
/// Gathers each ciovec segment to the console device in order. The whole
/// iovec array, every segment, and the out-pointer are validated up front;
/// only then is the descriptor consulted and output produced.
pub fn fd_write(
    mem: &mut GuestMem<'_>,
    ctx: &mut ShimCtx,
    fd: u32,
    iovs_ptr: u32,
    iovs_len: u32,
    nwritten_ptr: u32,
) -> Errno {
    fd_write_impl(mem, ctx, fd, iovs_ptr, iovs_len, nwritten_ptr).into()
}

fn fd_write_impl(
    mem: &mut GuestMem<'_>,
    ctx: &mut ShimCtx,
    fd: u32,
    iovs_ptr: u32,
    iovs_len: u32,
    nwritten_ptr: u32,
) -> Result<(), Errno> {
    mem.validate(nwritten_ptr, 4)?;
    let array_len = iovs_len.checked_mul(CIOVEC_SIZE).ok_or(Errno::Fault)?;
    mem.validate(iovs_ptr, array_len)?;

    let mut iovs = Vec::with_capacity(iovs_len as usize);
    for i in 0..iovs_len {
        let iov = mem.read_ciovec(iovs_ptr + i * CIOVEC_SIZE)?;
        mem.validate(iov.buf, iov.len)?;
        iovs.push(iov);
    }

    if !is_console_fd(fd) {
        return Err(Errno::Badf);
    }

    let mut nwritten: u32 = 0;
    for Ciovec { buf, len } in iovs {
        let segment = mem.slice(buf, len)?;
        nwritten += ctx.console().write_all(segment)? as u32;
    }
    mem.write_u32(nwritten_ptr, nwritten)?;
    Ok(())
}

/// `fd_seek(fd, offset, whence, *newoffset) -> errno`
///
/// The console descriptors are character devices, so any well-formed seek
/// on them fails with `Spipe`.
pub fn fd_seek(
    mem: &mut GuestMem<'_>,
    _ctx: &mut ShimCtx,
    fd: u32,
    _offset: i64,
    whence: u32,
    newoffset_ptr: u32,
) -> Errno {
    fd_seek_impl(mem, fd, whence, newoffset_ptr).into()
}

fn fd_seek_impl(
    mem: &mut GuestMem<'_>,
    fd: u32,
    whence: u32,
    newoffset_ptr: u32,
) -> Result<(), Errno> {
    mem.validate(newoffset_ptr, 8)?;
    Whence::from_raw(whence).ok_or(Errno::Inval)?;
    if !is_console_fd(fd) {
        return Err(Errno::Badf);
    }
    Err(Errno::Spipe)
}

/// `fd_fdstat_get(fd, *fdstat) -> errno`
pub fn fd_fdstat_get(mem: &mut GuestMem<'_>, _ctx: &mut ShimCtx, fd: u32, fdstat_ptr: u32) -> Errno {
    fd_fdstat_get_impl(mem, fd, fdstat_ptr).into()
}

fn fd_fdstat_get_impl(mem: &mut GuestMem<'_>, fd: u32, fdstat_ptr: u32) -> Result<(), Errno> {
    mem.validate(fdstat_ptr, crate::wasi::FDSTAT_SIZE)?;
    if !is_console_fd(fd) {
        return Err(Errno::Badf);
    }
    mem.write_fdstat(fdstat_ptr, &Fdstat::character_device())
}

/// `fd_close(fd) -> errno` — always unsupported.
pub fn fd_close(_ctx: &mut ShimCtx, fd: u32) -> Errno {
    warn!(fd, "guest called fd_close, which the shim does not support");
    Errno::Notsup
}

/// `start_time()` — latch the current counter into the start slot.
pub fn start_time(ctx: &mut ShimCtx) {
    ctx.start_ms = ctx.clock.millis();
}

/// `stop_time()` — latch the current counter into the stop slot.
pub fn stop_time(ctx: &mut ShimCtx) {
    ctx.stop_ms = ctx.clock.millis();
}

/// `get_time() -> i32` — stop minus start, in milliseconds.
pub fn get_time(ctx: &ShimCtx) -> i32 {
    ctx.stop_ms.wrapping_sub(ctx.start_ms) as i32
}

/// `get_milsecs() -> u32` — the current absolute counter value.
pub fn get_milsecs(ctx: &ShimCtx) -> u32 {
    ctx.clock.millis()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ctx::Console;
    use crate::wasi::Filetype;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn contents(&self) -> Vec<u8> {
            self.0.lock().unwrap().clone()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn shim() -> (ShimCtx, SharedBuf) {
        let buf = SharedBuf::default();
        (ShimCtx::new(Console::new(buf.clone())), buf)
    }

    fn write_ciovec(mem: &mut GuestMem<'_>, at: u32, buf: u32, len: u32) {
        mem.write_u32(at, buf).unwrap();
        mem.write_u32(at + 4, len).unwrap();
    }

    #[test]
    fn write_echoes_segments_in_order() {
        let (mut ctx, out) = shim();
        let mut backing = vec![0u8; 1024];
        let mut mem = GuestMem::new(&mut backing);
        mem.slice_mut(100, 7).unwrap().copy_from_slice(b"hello, ");
        mem.slice_mut(200, 6).unwrap().copy_from_slice(b"world\n");
        write_ciovec(&mut mem, 0, 100, 7);
        write_ciovec(&mut mem, 8, 200, 6);

        assert_eq!(fd_write(&mut mem, &mut ctx, 1, 0, 2, 300), Errno::Success);
        assert_eq!(out.contents(), b"hello, world\n");
        assert_eq!(mem.read_u32(300), Ok(13));
    }

    #[test]
    fn write_rejects_non_console_fd_without_output() {
        let (mut ctx, out) = shim();
        let mut backing = vec![0u8; 1024];
        let mut mem = GuestMem::new(&mut backing);
        write_ciovec(&mut mem, 0, 100, 4);

        assert_eq!(fd_write(&mut mem, &mut ctx, 4, 0, 1, 300), Errno::Badf);
        assert!(out.contents().is_empty());
    }

    #[test]
    fn write_rejects_out_of_bounds_segment_without_output() {
        let (mut ctx, out) = shim();
        let mut backing = vec![0u8; 1024];
        let mut mem = GuestMem::new(&mut backing);
        // second segment runs past the end of memory
        write_ciovec(&mut mem, 0, 100, 4);
        write_ciovec(&mut mem, 8, 1020, 8);

        assert_eq!(fd_write(&mut mem, &mut ctx, 1, 0, 2, 300), Errno::Fault);
        assert!(out.contents().is_empty());
        assert_eq!(mem.read_u32(300), Ok(0));
    }

    #[test]
    fn write_rejects_unmapped_iovec_array() {
        let (mut ctx, out) = shim();
        let mut backing = vec![0u8; 64];
        let mut mem = GuestMem::new(&mut backing);
        assert_eq!(fd_write(&mut mem, &mut ctx, 1, 60, 2, 0), Errno::Fault);
        assert_eq!(
            fd_write(&mut mem, &mut ctx, 1, 0, u32::MAX, 0),
            Errno::Fault
        );
        assert!(out.contents().is_empty());
    }

    #[test]
    fn fdstat_reports_character_device() {
        let (mut ctx, _) = shim();
        let mut backing = vec![0u8; 64];
        let mut mem = GuestMem::new(&mut backing);

        assert_eq!(fd_fdstat_get(&mut mem, &mut ctx, 2, 8), Errno::Success);
        assert_eq!(backing[8], Filetype::CharacterDevice as u8);
    }

    #[test]
    fn fdstat_rejects_unknown_fd_and_bad_pointer() {
        let (mut ctx, _) = shim();
        let mut backing = vec![0u8; 64];
        let mut mem = GuestMem::new(&mut backing);

        assert_eq!(fd_fdstat_get(&mut mem, &mut ctx, 0, 8), Errno::Badf);
        assert_eq!(fd_fdstat_get(&mut mem, &mut ctx, 1, 48), Errno::Fault);
    }

    #[test]
    fn seek_on_console_is_spipe() {
        let (mut ctx, _) = shim();
        let mut backing = vec![0u8; 64];
        let mut mem = GuestMem::new(&mut backing);

        assert_eq!(fd_seek(&mut mem, &mut ctx, 1, 0, 1, 0), Errno::Spipe);
        assert_eq!(fd_seek(&mut mem, &mut ctx, 1, 0, 9, 0), Errno::Inval);
        assert_eq!(fd_seek(&mut mem, &mut ctx, 3, 0, 0, 0), Errno::Badf);
        assert_eq!(fd_seek(&mut mem, &mut ctx, 1, 0, 0, 60), Errno::Fault);
    }

    #[test]
    fn close_is_unsupported() {
        let (mut ctx, _) = shim();
        assert_eq!(fd_close(&mut ctx, 1), Errno::Notsup);
        assert_eq!(fd_close(&mut ctx, 17), Errno::Notsup);
    }

    #[test]
    fn timing_slots_latch() {
        let (mut ctx, _) = shim();
        start_time(&mut ctx);
        std::thread::sleep(std::time::Duration::from_millis(5));
        stop_time(&mut ctx);
        assert!(get_time(&ctx) >= 0);
        assert!(get_milsecs(&ctx) >= ctx.stop_ms);
    }
}
