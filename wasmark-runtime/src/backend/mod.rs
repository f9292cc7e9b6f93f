//! Execution backend abstraction.
//!
//! All engine-specific code lives behind the [`Backend`] trait, keeping the
//! controller runtime-agnostic. A backend supplies module parsing,
//! instantiation under a heap budget with the syscall shim registered,
//! guest-memory staging for hooks, export lookup, and calls; teardown is
//! expressed through `Drop` on the associated types, so an instance cannot
//! outlive the run that created it.

use crate::bench::Limits;
use crate::error::Error;
use crate::val::Val;
use wasmark_wasi::ShimCtx;

/// Name of the exported entry point every benchmark module provides.
pub const ENTRY_SYMBOL: &str = "_run";

/// Optional initializer export, invoked before the entry point when the
/// controller is configured to do so.
pub const INIT_SYMBOL: &str = "_initialize";

pub trait Backend {
    /// A parsed module, prior to instantiation.
    type Module;
    /// A live instance: environment, linear memory, and call state for one
    /// benchmark run.
    type Instance;

    fn name(&self) -> &'static str;

    /// Parse a module from a byte buffer.
    fn load_module(&self, wasm: &[u8]) -> Result<Self::Module, Error>;

    /// Instantiate `module` within `limits`, registering the syscall shim's
    /// host functions under the import namespaces the guest expects. The
    /// shim context moves into the instance and serves it alone.
    fn instantiate(
        &self,
        module: &Self::Module,
        limits: &Limits,
        shim: ShimCtx,
    ) -> Result<Self::Instance, Error>;

    /// Copy host data into newly allocated guest linear memory and return
    /// the guest address of the copy. Allocation beyond the instance's heap
    /// budget fails.
    fn dup_data(&self, instance: &mut Self::Instance, data: &[u8]) -> Result<u32, Error>;

    fn has_export(&self, instance: &Self::Instance, symbol: &str) -> bool;

    /// Invoke an exported function. Argument count and kinds are checked
    /// against the export's declared signature before the call; a trap or
    /// guest exit surfaces as [`Error::Call`] carrying the backend's trap
    /// message.
    fn call(
        &self,
        instance: &mut Self::Instance,
        symbol: &str,
        args: &[Val],
        result_arity: usize,
    ) -> Result<Vec<Val>, Error>;
}

#[cfg(feature = "wasmi-backend")]
mod wasmi_backend;
#[cfg(feature = "wasmi-backend")]
pub use wasmi_backend::WasmiBackend;

/// The compiled-in default backend.
#[cfg(feature = "wasmi-backend")]
pub type DefaultBackend = WasmiBackend;
