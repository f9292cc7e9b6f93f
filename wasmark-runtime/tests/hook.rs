#![cfg(feature = "wasmi-backend")]

mod common;

use common::{descriptor, run_captured};
use wasmark_runtime::{Error, GuestAlloc, HarnessConfig, Val};

/// Sums `len` bytes starting at `ptr`.
const SUM_WAT: &str = r#"
(module
  (memory (export "memory") 1)
  (func (export "_run") (param $ptr i32) (param $len i32) (result i32)
    (local $i i32) (local $sum i32)
    (block $done
      (loop $loop
        (br_if $done (i32.ge_u (local.get $i) (local.get $len)))
        (local.set $sum
          (i32.add (local.get $sum)
            (i32.load8_u (i32.add (local.get $ptr) (local.get $i)))))
        (local.set $i (i32.add (local.get $i) (i32.const 1)))
        (br $loop)))
    (local.get $sum)))
"#;

const PAYLOAD: &[u8] = &[1, 2, 3, 4, 10];

fn stage_payload(staging: &mut dyn GuestAlloc, args: &mut [Val]) -> Result<(), Error> {
    let ptr = staging.dup_data(PAYLOAD)?;
    args[0] = Val::GuestPtr(ptr);
    args[1] = Val::I32(PAYLOAD.len() as i32);
    Ok(())
}

static OVERSIZED: [u8; 200_000] = [0u8; 200_000];

fn stage_oversized(staging: &mut dyn GuestAlloc, args: &mut [Val]) -> Result<(), Error> {
    let ptr = staging.dup_data(&OVERSIZED)?;
    args[0] = Val::GuestPtr(ptr);
    args[1] = Val::I32(OVERSIZED.len() as i32);
    Ok(())
}

#[test]
fn hook_stages_data_and_fills_argument_slots() {
    let mut bench = descriptor("summer", SUM_WAT, vec![Val::I32(0), Val::I32(0)]);
    bench.hook = Some(stage_payload);

    let (result, output) = run_captured(&bench, HarnessConfig::default());
    let result = result.expect("benchmark runs");

    // cold and warm call both see the staged bytes through the same pointer
    assert_eq!(result.values, vec![Val::I32(20)]);
    assert!(result.warm_ms.is_some());
    assert!(output.contains("First runtime delay: "));
    assert!(output.contains("Second runtime delay: "));
}

#[test]
fn hook_allocation_beyond_heap_budget_aborts_the_run() {
    let mut bench = descriptor("summer", SUM_WAT, vec![Val::I32(0), Val::I32(0)]);
    bench.hook = Some(stage_oversized);
    // one page of initial memory + 200k of staged data cannot fit
    bench.limits.heap_size = 0x20000;

    let (result, output) = run_captured(&bench, HarnessConfig::default());
    assert!(matches!(result, Err(Error::Hook(_))));
    // the run aborted before any timed guest code
    assert!(!output.contains("First runtime delay: "));
}
