use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::PathBuf,
};

use anyhow::{bail, Context};
use clap::Parser;
use log::info;
use tourist_guide::{
    scenario::{
        reader::read_scenarios,
        apply_failure_policy,
        report::{write_json_report, write_text_report, ScenarioReport},
        solve_scenarios,
    },
    FailurePolicy, ReportFormat,
};

/// Computes for every scenario of a batch the minimum number of trips a
/// tourist guide needs, always driving the route with the widest bottleneck.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scenario batch, read from stdin if omitted
    scenarios: Option<PathBuf>,

    /// Where to write the report, stdout if omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    #[arg(long, value_enum, default_value_t = FailurePolicy::Abort)]
    on_failure: FailurePolicy,

    /// Solve scenarios on all cores
    #[arg(short, long)]
    parallel: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    info!("{:?}", &args);

    let reader: Box<dyn BufRead> = match &args.scenarios {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("cannot open {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };
    let scenarios = read_scenarios(reader).context("invalid scenario batch")?;
    info!("read {} scenarios", scenarios.len());

    let reports = solve_scenarios(&scenarios, args.parallel);
    let (reports, failure) = apply_failure_policy(reports, args.on_failure);

    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("cannot create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    match args.format {
        ReportFormat::Text => write_text_report(writer, &reports)?,
        ReportFormat::Json => write_json_report(writer, &reports)?,
    }

    if let Some(ScenarioReport {
        scenario,
        trips: Err(error),
        ..
    }) = failure
    {
        bail!("scenario #{}: {}", scenario, error);
    }

    Ok(())
}
