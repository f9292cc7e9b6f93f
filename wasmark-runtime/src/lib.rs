//! Runtime-agnostic execution and instrumentation harness for WebAssembly
//! benchmarks.
//!
//! The harness loads a precompiled module, executes its `_run` export twice
//! (cold and warm) under a pluggable execution [`Backend`], and reports
//! timing, return values, and resource-usage diagnostics: a native-stack
//! high-water-mark measured by canary fill, and (when enabled) a binary
//! trace of heap allocation events.
//!
//! The pieces compose as follows: a [`BenchDescriptor`] names the module
//! bytes, typed arguments, budgets, and optional data-staging hook;
//! [`Harness::run`] drives one full lifecycle against a backend —
//! parse, instantiate with the syscall shim registered, hook, call, call
//! again, tear down — and [`run_on_dedicated_stack`] wraps that run in a
//! painted, measured thread.

pub mod backend;
pub mod bench;
pub mod error;
pub mod harness;
pub mod stack;
pub mod trace;
pub mod val;

pub use backend::{Backend, ENTRY_SYMBOL, INIT_SYMBOL};
#[cfg(feature = "wasmi-backend")]
pub use backend::{DefaultBackend, WasmiBackend};
pub use bench::{BenchDescriptor, ExecutionResult, GuestAlloc, Hook, Limits, RunReport};
pub use error::Error;
pub use harness::{run_on_dedicated_stack, Harness, HarnessConfig};
pub use val::Val;

/// Size of one WebAssembly page.
pub const WASM_PAGE_SIZE: usize = 0x1_0000;
