//! The execution controller: one benchmark run, from module bytes to a
//! timed, instrumented report.

use crate::backend::{Backend, ENTRY_SYMBOL, INIT_SYMBOL};
use crate::bench::{BenchDescriptor, ExecutionResult, GuestAlloc, RunReport};
use crate::error::Error;
use crate::stack;
use std::sync::atomic::{fence, Ordering};
use std::thread;
use std::time::Instant;
use tracing::{debug, info};
use wasmark_wasi::{Console, ShimCtx};

/// Controller configuration.
///
/// Both knobs are explicit choices rather than inferred build behavior:
/// `warm_call` defaults off only when the crate is built for allocation
/// tracing (a single representative pass is enough to observe allocator
/// patterns), and `call_initialize` is on by default so modules that ship
/// an `_initialize` export get their setup run before the entry point.
#[derive(Clone, Copy, Debug)]
pub struct HarnessConfig {
    /// Invoke the entry point a second time with identical arguments.
    pub warm_call: bool,
    /// Invoke the module's optional `_initialize` export, inside the cold
    /// window, before the first entry point call.
    pub call_initialize: bool,
}

impl Default for HarnessConfig {
    fn default() -> HarnessConfig {
        HarnessConfig {
            warm_call: !cfg!(feature = "heap-trace"),
            call_initialize: true,
        }
    }
}

pub struct Harness<B> {
    backend: B,
    config: HarnessConfig,
    console: Console,
}

/// Adapter giving hooks the narrow staging surface of whichever backend is
/// running the instance.
struct HookStaging<'a, B: Backend> {
    backend: &'a B,
    instance: &'a mut B::Instance,
}

impl<B: Backend> GuestAlloc for HookStaging<'_, B> {
    fn dup_data(&mut self, data: &[u8]) -> Result<u32, Error> {
        self.backend.dup_data(self.instance, data)
    }
}

impl<B: Backend> Harness<B> {
    pub fn new(backend: B, config: HarnessConfig, console: Console) -> Harness<B> {
        Harness {
            backend,
            config,
            console,
        }
    }

    /// Run one benchmark to completion.
    ///
    /// The cold window spans backend environment setup, module parse,
    /// instantiation, hook and initializer invocation, and the first entry
    /// point call, bounded by full memory barriers. The warm call repeats
    /// the entry point with the same argument values — including any
    /// pointers a hook injected, so guest state mutated by the cold call is
    /// deliberately visible to it.
    ///
    /// All backend resources for the run are owned by this call's locals
    /// and dropped before it returns, on success and on every error path.
    pub fn run(&mut self, bench: &BenchDescriptor) -> Result<ExecutionResult, Error> {
        bench.limits.validate()?;
        info!(name = %bench.name, backend = self.backend.name(), "running benchmark");

        let cold_start = Instant::now();
        fence(Ordering::SeqCst);

        let module = self.backend.load_module(&bench.wasm)?;
        let shim = ShimCtx::new(self.console.clone());
        let mut instance = self.backend.instantiate(&module, &bench.limits, shim)?;

        let mut args = bench.args.clone();
        if let Some(hook) = bench.hook {
            debug!("staging hook data into guest memory");
            let mut staging = HookStaging {
                backend: &self.backend,
                instance: &mut instance,
            };
            hook(&mut staging, &mut args).map_err(|e| match e {
                e @ Error::Hook(_) => e,
                other => Error::Hook(other.to_string()),
            })?;
        }

        if self.config.call_initialize && self.backend.has_export(&instance, INIT_SYMBOL) {
            debug!("running guest initializer");
            self.backend.call(&mut instance, INIT_SYMBOL, &[], 0)?;
        }

        let mut values =
            self.backend
                .call(&mut instance, ENTRY_SYMBOL, &args, bench.result_arity)?;
        fence(Ordering::SeqCst);
        let cold_ms = cold_start.elapsed().as_millis() as u64;
        self.console
            .line(format_args!("First runtime delay: {}ms", cold_ms));

        let mut warm_ms = None;
        if self.config.warm_call {
            let warm_start = Instant::now();
            fence(Ordering::SeqCst);
            values = self
                .backend
                .call(&mut instance, ENTRY_SYMBOL, &args, bench.result_arity)?;
            fence(Ordering::SeqCst);
            let elapsed = warm_start.elapsed().as_millis() as u64;
            self.console
                .line(format_args!("Second runtime delay: {}ms", elapsed));
            warm_ms = Some(elapsed);
        }

        Ok(ExecutionResult {
            cold_ms,
            warm_ms,
            values,
        })
    }
}

/// Native stack reserved for the harness itself above the painted region.
const RUNNER_STACK_SLACK: usize = 512 * 1024;

/// Run a benchmark on a dedicated thread whose stack covers the
/// descriptor's native-stack budget, painting the budget with canaries
/// before the run and measuring the high-water-mark after it.
pub fn run_on_dedicated_stack<B, F>(
    make_backend: F,
    bench: &BenchDescriptor,
    config: HarnessConfig,
    console: &Console,
) -> Result<RunReport, Error>
where
    B: Backend,
    F: FnOnce() -> B + Send,
{
    bench.limits.validate()?;
    thread::scope(|scope| {
        let handle = thread::Builder::new()
            .name(format!("bench-{}", bench.name))
            .stack_size(bench.limits.stack_size + RUNNER_STACK_SLACK)
            .spawn_scoped(scope, {
                let console = console.clone();
                move || {
                    // This thread's stack was sized to cover the painted
                    // extent plus the harness's own frames.
                    let region = unsafe { stack::paint(bench.limits.stack_size) };
                    let mut harness = Harness::new(make_backend(), config, console);
                    let result = harness.run(bench)?;
                    Ok(RunReport {
                        max_stack: region.watermark(),
                        result,
                    })
                }
            })
            .map_err(|e| Error::Internal(e.into()))?;
        handle
            .join()
            .map_err(|_| Error::Internal(anyhow::anyhow!("benchmark thread panicked")))?
    })
}
