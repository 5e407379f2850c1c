use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
    process::exit,
};

use clap::Parser;
use log::{error, info};
use rand::Rng;
use running_average::{
    config::{Config, Fill},
    samples::parse_samples,
    Error, Result, RunningAverage,
};

#[derive(Parser, Debug)]
struct Args {
    /// Number of most recent samples the statistics cover
    #[arg(short, long)]
    capacity: Option<usize>,

    /// TOML config file, command line flags take precedence over it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Value to pre-fill the window with
    #[arg(long, requires = "fill_count")]
    fill_value: Option<f64>,

    /// How many times the fill value is added
    #[arg(long, requires = "fill_value")]
    fill_count: Option<usize>,

    /// Print the statistics after every N samples, 0 prints them once at the end
    #[arg(short = 'e', long)]
    report_every: Option<usize>,

    /// File of whitespace separated samples, read from stdin when omitted
    #[arg(short, long, conflicts_with = "random")]
    input: Option<PathBuf>,

    /// Feed N uniformly distributed random samples instead of reading input
    #[arg(short, long)]
    random: Option<usize>,

    /// Lower bound of random samples
    #[arg(long, default_value = "0.0")]
    low: f64,

    /// Upper bound (exclusive) of random samples
    #[arg(long, default_value = "1.0")]
    high: f64,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        error!("{e}");
        exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let config = settings(args)?;
    let samples = read_samples(args)?;
    info!(
        "Averaging {} samples over a window of {}",
        samples.len(),
        config.capacity
    );

    let mut avg = RunningAverage::try_new(config.capacity)?;
    if let Some(Fill { value, count }) = config.fill {
        avg.fill(value, count);
    }

    for (i, &sample) in samples.iter().enumerate() {
        avg.add(sample);
        if config.report_every != 0 && (i + 1) % config.report_every == 0 {
            println!("{}", report(&avg));
        }
    }

    let n = samples.len();
    if n == 0 || config.report_every == 0 || n % config.report_every != 0 {
        println!("{}", report(&avg));
    }

    Ok(())
}

fn settings(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(capacity) = args.capacity {
        config.capacity = capacity;
    }
    if let Some(report_every) = args.report_every {
        config.report_every = report_every;
    }
    if let (Some(value), Some(count)) = (args.fill_value, args.fill_count) {
        config.fill = Some(Fill { value, count });
    }
    Ok(config)
}

fn read_samples(args: &Args) -> Result<Vec<f64>> {
    if let Some(n) = args.random {
        return random_samples(n, args.low, args.high);
    }

    let text = match &args.input {
        Some(path) => fs::read_to_string(path).map_err(|source| io_error(path, source))?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|source| io_error(Path::new("<stdin>"), source))?;
            text
        }
    };
    parse_samples(&text)
}

fn random_samples(n: usize, low: f64, high: f64) -> Result<Vec<f64>> {
    // the span check also rejects NaN and infinite bounds, which would panic
    // in `gen_range`
    if !(low < high && (high - low).is_finite()) {
        return Err(Error::EmptyRange { low, high });
    }
    let mut rng = rand::thread_rng();
    Ok((0..n).map(|_| rng.gen_range(low..high)).collect())
}

fn io_error(path: &Path, source: io::Error) -> Error {
    Error::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn report(avg: &RunningAverage<f64>) -> String {
    let stat = |value: Option<f64>| value.map_or_else(|| "-".to_owned(), |v| v.to_string());
    format!(
        "n={} avg={} min={} max={}",
        avg.len(),
        stat(avg.average()),
        stat(avg.min()),
        stat(avg.max()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_samples_in_range() {
        let samples = random_samples(500, -2.0, 3.0).unwrap();
        assert_eq!(samples.len(), 500);
        assert!(samples.iter().all(|&s| (-2.0..3.0).contains(&s)));
    }

    #[test]
    fn test_random_samples_reject_bad_range() {
        for (low, high) in [
            (1.0, 1.0),
            (2.0, 1.0),
            (f64::NAN, 1.0),
            (0.0, f64::INFINITY),
            (f64::NEG_INFINITY, 0.0),
            (-1e308, 1e308),
        ] {
            assert!(
                matches!(random_samples(10, low, high), Err(Error::EmptyRange { .. })),
                "{low}..{high}"
            );
        }
    }
}
