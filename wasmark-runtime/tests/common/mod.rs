#![allow(dead_code)]

use std::io::Write;
use std::sync::{Arc, Mutex};
use wasmark_runtime::{
    BenchDescriptor, Error, ExecutionResult, Harness, HarnessConfig, Limits, Val, WasmiBackend,
};
use wasmark_wasi::Console;

/// Console sink that keeps everything written for later assertions.
#[derive(Clone, Default)]
pub struct SharedBuf(pub Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).expect("console output is utf-8")
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

pub fn capture_console() -> (Console, SharedBuf) {
    let buf = SharedBuf::default();
    (Console::new(buf.clone()), buf)
}

pub fn descriptor(name: &str, wat_src: &str, args: Vec<Val>) -> BenchDescriptor {
    BenchDescriptor {
        name: name.to_owned(),
        wasm: wat::parse_str(wat_src).expect("valid wat"),
        args,
        result_arity: 1,
        limits: Limits {
            heap_size: 0x20000,
            stack_size: 0x20000,
        },
        hook: None,
    }
}

/// Run a descriptor against a fresh wasmi backend, returning the outcome
/// and everything the run printed.
pub fn run_captured(
    bench: &BenchDescriptor,
    config: HarnessConfig,
) -> (Result<ExecutionResult, Error>, String) {
    let (console, buf) = capture_console();
    let mut harness = Harness::new(WasmiBackend::new(), config, console);
    let result = harness.run(bench);
    (result, buf.contents())
}
