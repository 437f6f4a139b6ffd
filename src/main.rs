use std::{io::Write as _, process::ExitCode};

use anyhow::Context as _;
use clap::Parser as _;
use rand::SeedableRng as _;

mod algorithms;
mod cli;
mod data;
mod driver;


/// Program entry point
fn main() -> ExitCode {
    let args = match cli::Args::try_parse() {
        Ok(args) => args,
        Err(error) if !error.use_stderr() => error.exit(),
        // Logging is not set up yet, so only the generic message is printed
        Err(_) => {
            eprintln!("Error");
            return ExitCode::FAILURE;
        }
    };

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::debug!("{error:#}");
            eprintln!("Error");
            ExitCode::FAILURE
        }
    }
}

/// Dispatch on the selected mode
fn run(args: cli::Args) -> anyhow::Result<()> {
    match args.mode {
        Some(cli::Mode::Bench(bench)) => run_bench(bench),
        None => run_sort(&args.values, args.order),
    }
}

/// Sort the given tokens with both strategies and print the report
fn run_sort(tokens: &[String], order: algorithms::Order) -> anyhow::Result<()> {
    anyhow::ensure!(!tokens.is_empty(), "no values given");

    let input = cli::parse_values(tokens)
        .map_err(|(index, error)| anyhow::anyhow!("argument {}: {error}", index + 1))?;
    log::info!("sorting {} values, insertion order: {order}", input.len());

    let report = match order {
        algorithms::Order::Sequential => driver::sort_and_report(input),
        order => driver::sort_and_report_with(input, order),
    };
    println!("{report}");

    Ok(())
}

/// Run the benchmark described by `bench`
fn run_bench(bench: cli::Bench) -> anyhow::Result<()> {
    let cli::Bench {
        runs,
        size,
        data,
        order,
        seed,
        output,
    } = bench;
    anyhow::ensure!(runs > 0, "at least one run is required");

    println!("Running measurements for merge-insertion ({order} insertion order)");
    println!("Runs: {runs}, Sequence size: {size}, Data type: {data}");

    let mut rng = match seed {
        Some(seed) => rand::rngs::StdRng::seed_from_u64(seed),
        None => {
            println!("No seed provided, generating one using system rng");
            rand::rngs::StdRng::from_os_rng()
        }
    };

    let samples = match data {
        cli::DataType::Uniform => {
            perform_experiment::<data::UniformData>(runs, size, order, &mut rng)
        }
        cli::DataType::Permutation => {
            perform_experiment::<data::PermutationData>(runs, size, order, &mut rng)
        }
        cli::DataType::Zipf => perform_experiment::<data::ZipfData>(runs, size, order, &mut rng),
        cli::DataType::Reversed => {
            perform_experiment::<data::ReversedData>(runs, size, order, &mut rng)
        }
    }?;

    for (strategy, stats) in algorithms::Strategy::ALL.iter().zip(&samples.stats) {
        println!(
            "{strategy:<8}: mean {:.5} us, std dev {:.5} us, min {:.5} us, max {:.5} us",
            stats.mean, stats.std_dev, stats.min, stats.max
        );
    }

    #[cfg(feature = "counters")]
    println!(
        "Comparisons per run: {:.1}",
        algorithms::COMPARISON_COUNTER.take() as f64 / (2 * runs) as f64
    );

    if let Some(path) = output {
        write_samples(&path, &samples.micros)
            .with_context(|| format!("writing samples to {}", path.display()))?;
        log::info!("wrote {} samples to {}", samples.micros.len(), path.display());
    }

    Ok(())
}

/// The measurements of [`perform_experiment`]
struct Samples {
    /// The elapsed microseconds of each run, one entry per [`algorithms::Strategy`]
    micros: Vec<[f64; 2]>,
    /// The streaming statistics, one per [`algorithms::Strategy`]
    stats: [rolling_stats::Stats<f64>; 2],
}

/// Perform a time sampling experiment with both container strategies
///
/// - runs: The number of samples to measure
/// - size: The size of the sequences to sort
/// - rng: The rng used for sampling the data
fn perform_experiment<D: data::Data>(
    runs: usize,
    size: usize,
    order: algorithms::Order,
    rng: &mut rand::rngs::StdRng,
) -> anyhow::Result<Samples> {
    let mut samples = Samples {
        micros: Vec::with_capacity(runs),
        stats: [rolling_stats::Stats::new(), rolling_stats::Stats::new()],
    };

    let bar = indicatif::ProgressBar::new(runs as u64);

    for run in 0..=runs {
        let input = D::initialize(size, rng)?;

        let mut micros = [0.0; 2];
        let results = algorithms::Strategy::ALL.map(|strategy| {
            let (sorted, timing) = driver::timed_sort(&input, strategy, order);
            micros[timing.strategy as usize] = timing.micros();
            sorted
        });

        debug_assert!(
            results[0].is_sorted(),
            "{:?} is not sorted after run {run}",
            results[0]
        );
        debug_assert!(results[0] == results[1], "strategies disagree in run {run}");

        // NOTE: Skip the first sample, it warms up the allocator and caches
        if run == 0 {
            #[cfg(feature = "counters")]
            algorithms::COMPARISON_COUNTER.take();
        } else {
            for (stats, sample) in samples.stats.iter_mut().zip(micros) {
                stats.update(sample);
            }
            samples.micros.push(micros);

            bar.inc(1);
        }
    }

    bar.finish_and_clear();

    Ok(samples)
}

/// Write `samples` as `run,vec_us,deque_us` lines to `path`
fn write_samples(path: &std::path::Path, samples: &[[f64; 2]]) -> anyhow::Result<()> {
    let mut file = std::io::BufWriter::new(std::fs::File::create(path)?);

    writeln!(file, "run,vec_us,deque_us")?;
    for (run, [vector, deque]) in samples.iter().enumerate() {
        writeln!(file, "{run},{vector:.5},{deque:.5}")?;
    }
    file.flush()?;

    Ok(())
}
