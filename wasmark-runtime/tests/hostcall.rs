#![cfg(feature = "wasmi-backend")]

mod common;

use common::{descriptor, run_captured};
use wasmark_runtime::{Error, HarnessConfig, Val};

fn single_call() -> HarnessConfig {
    HarnessConfig {
        warm_call: false,
        ..HarnessConfig::default()
    }
}

#[test]
fn guest_fd_write_reaches_the_console() {
    // iovec { buf = 16, len = 3 } at offset 0; "hi\n" at offset 16;
    // nwritten written to offset 8 and returned.
    let wat = r#"
    (module
      (import "wasi_snapshot_preview1" "fd_write"
        (func $fd_write (param i32 i32 i32 i32) (result i32)))
      (memory (export "memory") 1)
      (data (i32.const 0) "\10\00\00\00\03\00\00\00")
      (data (i32.const 16) "hi\n")
      (func (export "_run") (result i32)
        (drop (call $fd_write (i32.const 1) (i32.const 0) (i32.const 1) (i32.const 8)))
        (i32.load (i32.const 8))))
    "#;
    let bench = descriptor("greeter", wat, vec![]);
    let (result, output) = run_captured(&bench, single_call());

    assert_eq!(result.unwrap().values, vec![Val::I32(3)]);
    assert_eq!(output.matches("hi\n").count(), 1);
}

#[test]
fn guest_fd_write_on_unknown_descriptor_is_rejected() {
    let wat = r#"
    (module
      (import "wasi_snapshot_preview1" "fd_write"
        (func $fd_write (param i32 i32 i32 i32) (result i32)))
      (memory (export "memory") 1)
      (data (i32.const 0) "\10\00\00\00\03\00\00\00")
      (data (i32.const 16) "hi\n")
      (func (export "_run") (result i32)
        (call $fd_write (i32.const 9) (i32.const 0) (i32.const 1) (i32.const 8))))
    "#;
    let bench = descriptor("bad-fd", wat, vec![]);
    let (result, output) = run_captured(&bench, single_call());

    // EBADF, and nothing was echoed
    assert_eq!(result.unwrap().values, vec![Val::I32(8)]);
    assert!(!output.contains("hi"));
}

#[test]
fn guest_fd_write_out_of_bounds_buffer_faults() {
    // iovec points one page past the end of the single-page memory
    let wat = r#"
    (module
      (import "wasi_snapshot_preview1" "fd_write"
        (func $fd_write (param i32 i32 i32 i32) (result i32)))
      (memory (export "memory") 1)
      (data (i32.const 0) "\00\00\02\00\04\00\00\00")
      (func (export "_run") (result i32)
        (call $fd_write (i32.const 1) (i32.const 0) (i32.const 1) (i32.const 8))))
    "#;
    let bench = descriptor("oob", wat, vec![]);
    let (result, _) = run_captured(&bench, single_call());

    // EFAULT
    assert_eq!(result.unwrap().values, vec![Val::I32(21)]);
}

#[test]
fn guest_timing_namespace_is_linked() {
    let wat = r#"
    (module
      (import "env" "start_time" (func $start))
      (import "env" "stop_time" (func $stop))
      (import "env" "get_time" (func $get (result i32)))
      (memory (export "memory") 1)
      (func (export "_run") (result i32)
        (call $start)
        (call $stop)
        (call $get)))
    "#;
    let bench = descriptor("timer", wat, vec![]);
    let (result, _) = run_captured(&bench, single_call());
    let values = result.unwrap().values;
    match values[0] {
        Val::I32(ms) => assert!(ms >= 0),
        ref other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn proc_exit_aborts_the_call() {
    let wat = r#"
    (module
      (import "wasi_snapshot_preview1" "proc_exit" (func $exit (param i32)))
      (memory (export "memory") 1)
      (func (export "_run") (result i32)
        (call $exit (i32.const 7))
        (i32.const 0)))
    "#;
    let bench = descriptor("exiter", wat, vec![]);
    let (result, _) = run_captured(&bench, single_call());
    match result {
        Err(Error::Call(msg)) => assert!(msg.contains("guest exit(7)"), "message: {msg}"),
        other => panic!("expected a call error, got {other:?}"),
    }
}
