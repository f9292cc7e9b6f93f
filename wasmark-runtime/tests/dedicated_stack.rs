#![cfg(feature = "wasmi-backend")]

mod common;

use common::{capture_console, descriptor};
use wasmark_runtime::{run_on_dedicated_stack, Error, HarnessConfig, Val, WasmiBackend};

const ADD_WAT: &str = r#"
(module
  (memory (export "memory") 1)
  (func (export "_run") (param i32 i32) (result i32)
    (i32.add (local.get 0) (local.get 1))))
"#;

#[test]
fn dedicated_stack_run_reports_watermark_within_budget() {
    let mut bench = descriptor("add", ADD_WAT, vec![Val::I32(20), Val::I32(22)]);
    bench.limits.stack_size = 512 * 1024;

    let (console, buf) = capture_console();
    let report = run_on_dedicated_stack(
        WasmiBackend::new,
        &bench,
        HarnessConfig::default(),
        &console,
    )
    .expect("benchmark runs");

    assert_eq!(report.result.values, vec![Val::I32(42)]);
    // the backend's parse and call machinery must have left a mark, but
    // nowhere near the full budget
    assert!(report.max_stack > 0);
    assert!(report.max_stack < bench.limits.stack_size);
    let output = buf.contents();
    assert!(output.contains("First runtime delay: "));
    assert!(output.contains("Second runtime delay: "));
}

#[test]
fn failed_parse_unwinds_the_runner_cleanly() {
    let mut bench = descriptor("broken", ADD_WAT, vec![]);
    bench.wasm.truncate(4);

    let (console, _) = capture_console();
    let result = run_on_dedicated_stack(
        WasmiBackend::new,
        &bench,
        HarnessConfig::default(),
        &console,
    );
    assert!(matches!(result, Err(Error::Parse(_))));
}
