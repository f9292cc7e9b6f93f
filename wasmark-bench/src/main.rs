//! wasmark: run one registered benchmark against the compiled-in backend
//! and report timing, result, and resource-usage diagnostics.
//!
//! Console protocol per run: two timing lines (one under heap tracing),
//! a `<name> result: <value>` line, `Max stack use: <bytes>`, and
//! `END OF TEST` — always, even after a failed run. The trace channel
//! brackets everything with its readiness and completion markers.

mod input;
mod registry;

use anyhow::{anyhow, Context};
use clap::Parser;
use registry::BenchSpec;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::error;
use tracing_subscriber::EnvFilter;
use wasmark_runtime::trace::{self, TraceChannel};
use wasmark_runtime::{run_on_dedicated_stack, DefaultBackend, HarnessConfig, RunReport};
use wasmark_wasi::Console;

#[cfg(feature = "heap-trace")]
#[global_allocator]
static ALLOC: trace::TracingAlloc = trace::TracingAlloc(std::alloc::System);

/// Run one registered benchmark against the compiled-in backend.
#[derive(Parser)]
#[command(name = "wasmark", version, about)]
struct Args {
    /// Registered benchmark name (see --list).
    benchmark: Option<String>,

    /// Path to the compiled module; defaults to benches/<name>.wasm.
    #[arg(long)]
    module: Option<PathBuf>,

    /// Override the benchmark's guest-heap budget, in bytes.
    #[arg(long)]
    heap_size: Option<usize>,

    /// Override the benchmark's native-stack budget, in bytes.
    #[arg(long)]
    stack_size: Option<usize>,

    /// Skip the warm (second) call.
    #[arg(long)]
    no_warm: bool,

    /// Do not invoke the module's optional _initialize export.
    #[arg(long)]
    skip_initialize: bool,

    /// Write the binary trace stream to this file instead of stderr.
    #[arg(long)]
    trace_file: Option<PathBuf>,

    /// List registered benchmarks and exit.
    #[arg(long)]
    list: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    if args.list {
        for name in registry::names() {
            println!("{name}");
        }
        return ExitCode::SUCCESS;
    }
    let Some(name) = args.benchmark.clone() else {
        eprintln!("error: a benchmark name is required (try --list)");
        return ExitCode::FAILURE;
    };

    let channel = match open_trace_channel(&args) {
        Ok(channel) => channel,
        Err(e) => {
            error!(error = %e, "could not open trace channel");
            return ExitCode::FAILURE;
        }
    };
    trace::install(channel.clone());
    channel.ready();

    let console = Console::stdout();
    let status = run(&args, &name, &console);
    if let Err(e) = &status {
        console.line(format_args!("error: {e:#}"));
    }
    console.line(format_args!("END OF TEST"));
    channel.done();

    if status.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn open_trace_channel(args: &Args) -> anyhow::Result<Arc<TraceChannel>> {
    let channel = match &args.trace_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("creating trace file {}", path.display()))?;
            TraceChannel::new(file)
        }
        None => TraceChannel::stderr(),
    };
    Ok(Arc::new(channel))
}

fn run(args: &Args, name: &str, console: &Console) -> anyhow::Result<()> {
    let spec = registry::find(name).ok_or_else(|| anyhow!("unknown benchmark: {name}"))?;
    let module_path = args
        .module
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("benches/{name}.wasm")));
    let wasm = std::fs::read(&module_path)
        .with_context(|| format!("reading module {}", module_path.display()))?;

    let mut bench = spec.descriptor(wasm);
    if let Some(heap_size) = args.heap_size {
        bench.limits.heap_size = heap_size;
    }
    if let Some(stack_size) = args.stack_size {
        bench.limits.stack_size = stack_size;
    }

    let mut config = HarnessConfig::default();
    if args.no_warm {
        config.warm_call = false;
    }
    if args.skip_initialize {
        config.call_initialize = false;
    }

    let report = run_on_dedicated_stack(DefaultBackend::new, &bench, config, console)?;
    report_results(spec, &report, console)
}

fn report_results(spec: &BenchSpec, report: &RunReport, console: &Console) -> anyhow::Result<()> {
    let value = report
        .result
        .values
        .first()
        .and_then(|v| v.as_i32())
        .ok_or_else(|| anyhow!("benchmark did not produce an i32 result"))?;
    if spec.expects_zero && value != 0 {
        return Err(anyhow!("{} reported failure: {value}", spec.label));
    }
    console.line(format_args!("{} result: {}", spec.label, value));
    console.line(format_args!("Max stack use: {}", report.max_stack));
    Ok(())
}
