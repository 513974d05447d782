use std::process;

use clap::Parser;
use reduction_harness::verify::{exact_accumulation, verify_run, DumpFile};
use reduction_harness::{run, HarnessError, RunConfig, State};
use reduction_kernel::real::MANTISSA_BITS;

fn main() {
    env_logger::init();

    let config = RunConfig::parse();
    if let Err(err) = bench_main(config) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

fn bench_main(config: RunConfig) -> Result<(), HarnessError> {
    let dump_file = config.verify_file.as_deref().map(DumpFile::create).transpose()?;
    let verify = config.verify_enabled();

    let mut state = State::new(config);
    let n = state.problem_size();
    log::info!(
        "reduction: problemsize={} repeats={} warmup={} verify={}",
        n,
        state.config().repeats,
        state.config().warmup,
        verify
    );
    if !exact_accumulation(n) {
        log::warn!(
            "partial sums exceed {} mantissa bits, result is rounded",
            MANTISSA_BITS
        );
    }

    run(&mut state, n)?;

    if let Some(stats) = state.stats() {
        println!("reduction n={}: {}", n, stats);
    }
    for array in state.verified_arrays() {
        println!("{} = {:?}", array.name(), &array[..]);
    }

    if verify {
        let checked = verify_run(&state, n, dump_file)?;
        println!("verification passed ({} array(s))", checked);
    }
    Ok(())
}
