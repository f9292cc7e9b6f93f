//! A minimal POSIX-like host-call surface for benchmark guests.
//!
//! Benchmark modules compiled against wasi-libc import a handful of
//! `wasi_snapshot_preview1` functions for console output, plus a small
//! `env` timing namespace that lets guest code bracket its own hot loops.
//! This crate implements both surfaces as plain functions over a
//! bounds-checked view of guest linear memory ([`GuestMem`]) and a shim
//! context ([`ShimCtx`]); execution backends adapt them into whatever
//! host-function registration mechanism their engine provides.
//!
//! The shim is deliberately not a general-purpose WASI implementation:
//! only descriptors 1 and 2 exist, both are character devices backed by a
//! single [`Console`], and everything else returns an error to the guest.

pub mod ctx;
pub mod hostcalls;
pub mod memory;
pub mod wasi;

pub use ctx::{Clock, Console, ShimCtx};
pub use memory::GuestMem;
pub use wasi::{Errno, Fdstat, Filetype, Rights, Whence};
