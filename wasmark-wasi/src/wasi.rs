//! WASI types in their `wasi_snapshot_preview1` wire representation.
//!
//! Only the subset the shim actually services is defined here. Values and
//! layouts follow the snapshot-preview1 witx definitions; the shim speaks
//! little-endian wasm32 on the guest side regardless of host endianness.

use bitflags::bitflags;

/// Import namespace for the syscall surface.
pub const SYSCALL_MODULE: &str = "wasi_snapshot_preview1";

/// Import namespace for the additive timing primitives.
pub const TIMING_MODULE: &str = "env";

/// The two descriptors the shim knows about.
pub const STDOUT_FD: u32 = 1;
pub const STDERR_FD: u32 = 2;

/// Errno values returned to guests.
///
/// `Fault` doubles as the shim's address-validation failure: any
/// guest-supplied pointer/length pair that falls outside linear memory is
/// reported this way instead of being dereferenced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u16)]
pub enum Errno {
    Success = 0,
    Badf = 8,
    Fault = 21,
    Inval = 28,
    Io = 29,
    Nomem = 48,
    Nosys = 52,
    Notsup = 58,
    Spipe = 70,
}

impl Errno {
    pub fn raw(self) -> u16 {
        self as u16
    }
}

impl From<Result<(), Errno>> for Errno {
    fn from(res: Result<(), Errno>) -> Errno {
        match res {
            Ok(()) => Errno::Success,
            Err(e) => e,
        }
    }
}

/// File type reported by `fd_fdstat_get`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Filetype {
    Unknown = 0,
    BlockDevice = 1,
    CharacterDevice = 2,
    Directory = 3,
    RegularFile = 4,
    SocketDgram = 5,
    SocketStream = 6,
    SymbolicLink = 7,
}

/// Seek origin for `fd_seek`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Whence {
    Set = 0,
    Cur = 1,
    End = 2,
}

impl Whence {
    pub fn from_raw(raw: u32) -> Option<Whence> {
        match raw {
            0 => Some(Whence::Set),
            1 => Some(Whence::Cur),
            2 => Some(Whence::End),
            _ => None,
        }
    }
}

bitflags! {
    /// Per-descriptor rights mask.
    pub struct Rights: u64 {
        const FD_DATASYNC = 1 << 0;
        const FD_READ = 1 << 1;
        const FD_SEEK = 1 << 2;
        const FD_FDSTAT_SET_FLAGS = 1 << 3;
        const FD_SYNC = 1 << 4;
        const FD_TELL = 1 << 5;
        const FD_WRITE = 1 << 6;
        const FD_FILESTAT_GET = 1 << 21;
        const POLL_FD_READWRITE = 1 << 27;
    }
}

impl Rights {
    /// Rights advertised for the console descriptors.
    pub fn tty_base() -> Rights {
        Rights::FD_READ
            | Rights::FD_FDSTAT_SET_FLAGS
            | Rights::FD_WRITE
            | Rights::FD_FILESTAT_GET
            | Rights::POLL_FD_READWRITE
    }

    /// Console descriptors confer nothing on descriptors opened through them.
    pub fn tty_inheriting() -> Rights {
        Rights::empty()
    }
}

/// Host-side value of a guest `__wasi_fdstat_t`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fdstat {
    pub filetype: Filetype,
    pub flags: u16,
    pub rights_base: Rights,
    pub rights_inheriting: Rights,
}

impl Fdstat {
    /// The fdstat reported for both console descriptors.
    pub fn character_device() -> Fdstat {
        Fdstat {
            filetype: Filetype::CharacterDevice,
            flags: 0,
            rights_base: Rights::tty_base(),
            rights_inheriting: Rights::tty_inheriting(),
        }
    }
}

/// Guest layout of `__wasi_fdstat_t`: filetype u8, pad, flags u16, pad to 8,
/// rights_base u64, rights_inheriting u64.
pub const FDSTAT_SIZE: u32 = 24;

/// A decoded guest `__wasi_ciovec_t`: guest pointer + byte length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ciovec {
    pub buf: u32,
    pub len: u32,
}

/// Guest layout of `__wasi_ciovec_t`: two little-endian u32 fields.
pub const CIOVEC_SIZE: u32 = 8;
