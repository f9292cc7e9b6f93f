//! The wasmi interpreter backend.

use crate::backend::Backend;
use crate::bench::Limits;
use crate::error::Error;
use crate::val::Val;
use crate::WASM_PAGE_SIZE;
use tracing::debug;
use wasmark_wasi::wasi::{SYSCALL_MODULE, TIMING_MODULE};
use wasmark_wasi::{hostcalls, Errno, GuestMem, ShimCtx};
use wasmi::core::ValType;
use wasmi::{
    Caller, Engine, Extern, FuncType, Linker, Memory, Module, Store, StoreLimits,
    StoreLimitsBuilder, Val as WasmiVal,
};

/// Export name of the guest's linear memory.
const MEMORY_SYMBOL: &str = "memory";

pub struct WasmiBackend {
    engine: Engine,
}

/// Store state: the per-run shim context plus the heap-budget limiter.
pub struct HostState {
    shim: ShimCtx,
    limits: StoreLimits,
}

/// One live instance and the store that owns it. Dropping this releases
/// the store, the linear memory, and everything linked into it.
pub struct WasmiInstance {
    store: Store<HostState>,
    instance: wasmi::Instance,
}

impl WasmiBackend {
    pub fn new() -> WasmiBackend {
        WasmiBackend {
            engine: Engine::default(),
        }
    }
}

impl Default for WasmiBackend {
    fn default() -> WasmiBackend {
        WasmiBackend::new()
    }
}

impl Backend for WasmiBackend {
    type Module = Module;
    type Instance = WasmiInstance;

    fn name(&self) -> &'static str {
        "wasmi"
    }

    fn load_module(&self, wasm: &[u8]) -> Result<Module, Error> {
        Module::new(&self.engine, wasm).map_err(|e| Error::Parse(e.to_string()))
    }

    fn instantiate(
        &self,
        module: &Module,
        limits: &Limits,
        shim: ShimCtx,
    ) -> Result<WasmiInstance, Error> {
        limits.validate()?;
        let store_limits = StoreLimitsBuilder::new().memory_size(limits.heap_size).build();
        let mut store = Store::new(
            &self.engine,
            HostState {
                shim,
                limits: store_limits,
            },
        );
        store.limiter(|state| &mut state.limits);

        let mut linker = Linker::new(&self.engine);
        register_shim(&mut linker).map_err(|e| Error::Instantiation(e.to_string()))?;

        let instance = linker
            .instantiate(&mut store, module)
            .and_then(|pre| pre.start(&mut store))
            .map_err(|e| Error::Instantiation(e.to_string()))?;

        Ok(WasmiInstance { store, instance })
    }

    fn dup_data(&self, instance: &mut WasmiInstance, data: &[u8]) -> Result<u32, Error> {
        let memory = guest_memory(instance)?;
        let offset = memory.data_size(&instance.store);
        let pages = (data.len() + WASM_PAGE_SIZE - 1) / WASM_PAGE_SIZE;
        memory
            .grow(&mut instance.store, pages as u32)
            .map_err(|e| Error::NoLinearMemory(e.to_string()))?;
        memory.data_mut(&mut instance.store)[offset..offset + data.len()].copy_from_slice(data);
        u32::try_from(offset)
            .map_err(|_| Error::NoLinearMemory("staged data beyond wasm32 range".to_string()))
    }

    fn has_export(&self, instance: &WasmiInstance, symbol: &str) -> bool {
        instance.instance.get_func(&instance.store, symbol).is_some()
    }

    fn call(
        &self,
        instance: &mut WasmiInstance,
        symbol: &str,
        args: &[Val],
        result_arity: usize,
    ) -> Result<Vec<Val>, Error> {
        let func = instance
            .instance
            .get_func(&instance.store, symbol)
            .ok_or_else(|| Error::SymbolNotFound(symbol.to_string()))?;
        let ty = func.ty(&instance.store);
        if ty.results().len() != result_arity {
            return Err(Error::InvalidArgument("entry point result arity mismatch"));
        }
        let params = marshal_args(&ty, args)?;
        let mut results: Vec<WasmiVal> = ty
            .results()
            .iter()
            .map(zero_val)
            .collect::<Result<_, _>>()?;

        debug!(symbol, backend = self.name(), "calling guest export");
        func.call(&mut instance.store, &params, &mut results)
            .map_err(|e| Error::Call(e.to_string()))?;

        results.iter().map(unmarshal_val).collect()
    }
}

fn guest_memory(instance: &WasmiInstance) -> Result<Memory, Error> {
    instance
        .instance
        .get_memory(&instance.store, MEMORY_SYMBOL)
        .ok_or_else(|| Error::NoLinearMemory("module does not export a linear memory".to_string()))
}

/// Convert the descriptor's typed arguments into wasmi's calling
/// convention, checking them against the declared parameter list.
fn marshal_args(ty: &FuncType, args: &[Val]) -> Result<Vec<WasmiVal>, Error> {
    let params = ty.params();
    if params.len() != args.len() {
        return Err(Error::InvalidArgument("entry point argument arity mismatch"));
    }
    params
        .iter()
        .zip(args)
        .map(|(ty, arg)| marshal_val(*ty, *arg))
        .collect()
}

fn marshal_val(ty: ValType, arg: Val) -> Result<WasmiVal, Error> {
    match (ty, arg) {
        (ValType::I32, Val::I32(x)) => Ok(WasmiVal::I32(x)),
        (ValType::I32, Val::GuestPtr(p)) => Ok(WasmiVal::I32(p as i32)),
        (ValType::I64, Val::I64(x)) => Ok(WasmiVal::I64(x)),
        (ValType::F32, Val::F32(x)) => Ok(WasmiVal::F32(x.into())),
        (ValType::F64, Val::F64(x)) => Ok(WasmiVal::F64(x.into())),
        _ => Err(Error::InvalidArgument(
            "argument kind does not match entry point signature",
        )),
    }
}

fn zero_val(ty: &ValType) -> Result<WasmiVal, Error> {
    match ty {
        ValType::I32 => Ok(WasmiVal::I32(0)),
        ValType::I64 => Ok(WasmiVal::I64(0)),
        ValType::F32 => Ok(WasmiVal::F32(0f32.into())),
        ValType::F64 => Ok(WasmiVal::F64(0f64.into())),
        other => Err(Error::Unsupported(format!(
            "entry point result type {other:?}"
        ))),
    }
}

fn unmarshal_val(val: &WasmiVal) -> Result<Val, Error> {
    match val {
        WasmiVal::I32(x) => Ok(Val::I32(*x)),
        WasmiVal::I64(x) => Ok(Val::I64(*x)),
        WasmiVal::F32(x) => Ok(Val::F32((*x).into())),
        WasmiVal::F64(x) => Ok(Val::F64((*x).into())),
        other => Err(Error::Unsupported(format!("guest result {other:?}"))),
    }
}

/// Register the syscall shim and the timing primitives under the fixed
/// import namespaces benchmark guests link against.
fn register_shim(linker: &mut Linker<HostState>) -> Result<(), wasmi::Error> {
    linker.func_wrap(
        SYSCALL_MODULE,
        "fd_write",
        |mut caller: Caller<'_, HostState>, fd: u32, iovs: u32, iovs_len: u32, nwritten: u32| -> u32 {
            with_guest_mem(&mut caller, |mem, shim| {
                hostcalls::fd_write(mem, shim, fd, iovs, iovs_len, nwritten)
            })
        },
    )?;
    linker.func_wrap(
        SYSCALL_MODULE,
        "fd_seek",
        |mut caller: Caller<'_, HostState>, fd: u32, offset: i64, whence: u32, newoffset: u32| -> u32 {
            with_guest_mem(&mut caller, |mem, shim| {
                hostcalls::fd_seek(mem, shim, fd, offset, whence, newoffset)
            })
        },
    )?;
    linker.func_wrap(
        SYSCALL_MODULE,
        "fd_fdstat_get",
        |mut caller: Caller<'_, HostState>, fd: u32, fdstat: u32| -> u32 {
            with_guest_mem(&mut caller, |mem, shim| {
                hostcalls::fd_fdstat_get(mem, shim, fd, fdstat)
            })
        },
    )?;
    linker.func_wrap(
        SYSCALL_MODULE,
        "fd_close",
        |mut caller: Caller<'_, HostState>, fd: u32| -> u32 {
            u32::from(hostcalls::fd_close(&mut caller.data_mut().shim, fd).raw())
        },
    )?;
    linker.func_wrap(
        SYSCALL_MODULE,
        "proc_exit",
        |_caller: Caller<'_, HostState>, code: u32| -> Result<(), wasmi::Error> {
            // A guest-visible fault: aborts the current call and reaches the
            // controller as a trap message.
            Err(wasmi::Error::new(format!("guest exit({code})")))
        },
    )?;

    linker.func_wrap(
        TIMING_MODULE,
        "start_time",
        |mut caller: Caller<'_, HostState>| {
            hostcalls::start_time(&mut caller.data_mut().shim);
        },
    )?;
    linker.func_wrap(
        TIMING_MODULE,
        "stop_time",
        |mut caller: Caller<'_, HostState>| {
            hostcalls::stop_time(&mut caller.data_mut().shim);
        },
    )?;
    linker.func_wrap(
        TIMING_MODULE,
        "get_time",
        |caller: Caller<'_, HostState>| -> i32 { hostcalls::get_time(&caller.data().shim) },
    )?;
    linker.func_wrap(
        TIMING_MODULE,
        "get_milsecs",
        |caller: Caller<'_, HostState>| -> u32 { hostcalls::get_milsecs(&caller.data().shim) },
    )?;
    Ok(())
}

/// Resolve the caller's exported memory and hand the hostcall a
/// bounds-checked view of it. A guest without linear memory cannot pass
/// pointers, so its syscalls fail with `Inval`.
fn with_guest_mem(
    caller: &mut Caller<'_, HostState>,
    f: impl FnOnce(&mut GuestMem<'_>, &mut ShimCtx) -> Errno,
) -> u32 {
    let Some(memory) = caller.get_export(MEMORY_SYMBOL).and_then(Extern::into_memory) else {
        return u32::from(Errno::Inval.raw());
    };
    let (data, state) = memory.data_and_store_mut(&mut *caller);
    let mut mem = GuestMem::new(data);
    u32::from(f(&mut mem, &mut state.shim).raw())
}
