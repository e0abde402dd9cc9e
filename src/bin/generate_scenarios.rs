use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use anyhow::{bail, Context};
use clap::Parser;
use indicatif::ProgressIterator;
use log::info;
use rand::{rngs::StdRng, SeedableRng};
use tourist_guide::{
    scenario::writer::write_scenarios,
    utility::{random_scenario, ScenarioShape},
};

/// Generates a batch of random scenarios, e.g. for benchmarking
/// `tourist_guide --parallel`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short = 'n', long, default_value_t = 100)]
    number_of_scenarios: u32,

    #[arg(short = 'v', long, default_value_t = 100)]
    number_of_vertices: u32,

    #[arg(short = 'e', long, default_value_t = 300)]
    number_of_edges: u32,

    #[arg(short = 'c', long, default_value_t = 100)]
    max_capacity: u32,

    #[arg(short = 't', long, default_value_t = 1000)]
    max_tourists: u32,

    /// Seed for reproducible batches
    #[arg(short, long)]
    seed: Option<u64>,

    /// Where to write the batch, stdout if omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    info!("{:?}", &args);

    let shape = ScenarioShape {
        number_of_vertices: args.number_of_vertices,
        number_of_edges: args.number_of_edges,
        max_capacity: args.max_capacity,
        max_tourists: args.max_tourists,
    };
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let scenarios = (0..args.number_of_scenarios)
        .progress()
        .map(|_| random_scenario(&mut rng, &shape))
        .collect::<Option<Vec<_>>>();
    let Some(scenarios) = scenarios else {
        bail!("need at least two cities, a capacity of at least 2 and at least one tourist");
    };

    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("cannot create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    write_scenarios(writer, &scenarios)?;
    info!("wrote {} scenarios", scenarios.len());

    Ok(())
}
