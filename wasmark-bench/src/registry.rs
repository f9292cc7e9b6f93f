//! The benchmark registry: every benchmark the harness knows how to drive,
//! as data.
//!
//! Each entry owns its argument values, memory budgets, hook, and result
//! interpretation; the module bytecode itself is an opaque blob supplied at
//! run time. Exactly one entry is selected per process — dispatch is a
//! startup-time lookup, and nothing else in the harness knows benchmark
//! names.

use crate::input::FASTA_INPUT;
use wasmark_runtime::{
    BenchDescriptor, Error, GuestAlloc, Hook, Limits, Val, WASM_PAGE_SIZE,
};

pub struct BenchSpec {
    /// Registry key, as given on the command line.
    pub name: &'static str,
    /// Name printed in the result line. Aliases share a label.
    pub label: &'static str,
    pub args: &'static [Val],
    /// Guest linear memory budget, in bytes. Page-granular: the backend
    /// caps linear memory, and a wasm memory only comes in 64 KiB pages.
    pub heap_size: usize,
    /// Native stack painted and measured for the run, in bytes.
    pub stack_size: usize,
    pub hook: Option<Hook>,
    /// The entry point reports status: a nonzero result is a failure.
    pub expects_zero: bool,
}

impl BenchSpec {
    pub fn descriptor(&self, wasm: Vec<u8>) -> BenchDescriptor {
        BenchDescriptor {
            name: self.name.to_owned(),
            wasm,
            args: self.args.to_vec(),
            result_arity: 1,
            limits: Limits {
                heap_size: self.heap_size,
                stack_size: self.stack_size,
            },
            hook: self.hook,
        }
    }
}

const DEFAULT_STACK: usize = 0x2_0000;

/// Duplicate the FASTA input into guest memory; address and length go into
/// the first two argument slots.
fn genomic_input_ptr_len(staging: &mut dyn GuestAlloc, args: &mut [Val]) -> Result<(), Error> {
    let ptr = staging.dup_data(FASTA_INPUT)?;
    args[0] = Val::GuestPtr(ptr);
    args[1] = Val::I32(FASTA_INPUT.len() as i32);
    Ok(())
}

/// Same staging, for guests that take only the address.
fn genomic_input_ptr(staging: &mut dyn GuestAlloc, args: &mut [Val]) -> Result<(), Error> {
    let ptr = staging.dup_data(FASTA_INPUT)?;
    args[0] = Val::GuestPtr(ptr);
    Ok(())
}

pub const BENCHES: &[BenchSpec] = &[
    BenchSpec {
        name: "fannkuch-redux",
        label: "fannkuch-redux",
        args: &[Val::I32(8)],
        heap_size: 2 * WASM_PAGE_SIZE,
        stack_size: DEFAULT_STACK,
        hook: None,
        expects_zero: false,
    },
    BenchSpec {
        name: "coremark",
        label: "coremark",
        args: &[],
        heap_size: 2 * WASM_PAGE_SIZE,
        stack_size: DEFAULT_STACK,
        hook: None,
        expects_zero: false,
    },
    BenchSpec {
        name: "coremark-standalone",
        label: "coremark",
        args: &[],
        heap_size: 2 * WASM_PAGE_SIZE,
        stack_size: DEFAULT_STACK,
        hook: None,
        expects_zero: false,
    },
    BenchSpec {
        name: "coremark-semihosted",
        label: "coremark",
        args: &[],
        heap_size: 2 * WASM_PAGE_SIZE,
        stack_size: DEFAULT_STACK,
        hook: None,
        expects_zero: false,
    },
    BenchSpec {
        name: "binary-trees",
        label: "binary-trees",
        args: &[Val::I32(9)],
        heap_size: 4 * WASM_PAGE_SIZE,
        stack_size: DEFAULT_STACK,
        hook: None,
        expects_zero: true,
    },
    BenchSpec {
        name: "dhrystone",
        label: "dhrystone",
        args: &[Val::I32(100_000)],
        heap_size: 4 * WASM_PAGE_SIZE,
        stack_size: DEFAULT_STACK,
        hook: None,
        expects_zero: false,
    },
    BenchSpec {
        name: "dhrystone-semihosted",
        label: "dhrystone",
        args: &[Val::I32(100_000)],
        heap_size: 4 * WASM_PAGE_SIZE,
        stack_size: DEFAULT_STACK,
        hook: None,
        expects_zero: false,
    },
    BenchSpec {
        name: "dhrystone-standalone",
        label: "dhrystone",
        args: &[Val::I32(100_000)],
        heap_size: 4 * WASM_PAGE_SIZE,
        stack_size: DEFAULT_STACK,
        hook: None,
        expects_zero: false,
    },
    BenchSpec {
        name: "nbody",
        label: "nbody",
        args: &[Val::I32(5000)],
        heap_size: 2 * WASM_PAGE_SIZE,
        stack_size: DEFAULT_STACK,
        hook: None,
        expects_zero: false,
    },
    BenchSpec {
        name: "spectral-norm",
        label: "spectral_norm",
        args: &[Val::I32(100)],
        heap_size: 2 * WASM_PAGE_SIZE,
        stack_size: DEFAULT_STACK,
        hook: None,
        expects_zero: false,
    },
    BenchSpec {
        name: "fasta",
        label: "fasta",
        args: &[Val::I32(10_000)],
        heap_size: 2 * WASM_PAGE_SIZE,
        stack_size: DEFAULT_STACK,
        hook: None,
        expects_zero: false,
    },
    BenchSpec {
        name: "knucleotide",
        label: "knucleotide",
        args: &[Val::I32(0), Val::I32(0)],
        heap_size: 4 * WASM_PAGE_SIZE,
        stack_size: DEFAULT_STACK,
        hook: Some(genomic_input_ptr_len),
        expects_zero: true,
    },
    BenchSpec {
        name: "reverse-complement",
        label: "reverse_complement",
        args: &[Val::I32(0)],
        heap_size: 4 * WASM_PAGE_SIZE,
        stack_size: DEFAULT_STACK,
        hook: Some(genomic_input_ptr),
        expects_zero: true,
    },
];

pub fn find(name: &str) -> Option<&'static BenchSpec> {
    BENCHES.iter().find(|spec| spec.name == name)
}

pub fn names() -> impl Iterator<Item = &'static str> {
    BENCHES.iter().map(|spec| spec.name)
}
