#[cfg(feature = "perf-tracing")]
mod perf;

use std::io::{stderr, stdout};
use std::process::ExitCode;

use clap::Parser;
use color_eyre::Result;
use procsnap::Collector;
use procsnap::report;

#[derive(Parser)]
#[command(
    name = "procsnap",
    version,
    about = "Print process, user and machine attributes as one line of JSON"
)]
struct Cli {}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    let _cli = Cli::parse();

    #[cfg(feature = "perf-tracing")]
    perf::init_tracing_json()?;

    let collector = Collector::new();
    let outcome = report::run(&collector, &mut stdout().lock(), &mut stderr().lock());
    Ok(outcome.into())
}
