use crate::output::Output;
use clap::Parser;
use std::error::Error;
use std::io::{stdout, Write};
use std::process::ExitCode;
use std::time::Instant;
use tracing::level_filters::LevelFilter;
use tracing::{debug, error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

mod output;

/// Sample used when no values are given on the command line.
pub(crate) const DEMO_SAMPLE: [f64; 7] = [1.0, 2.0, 3.0, 2.0, 4.0, 5.0, 2.0];

/// Faststats computes elementary statistics (sum, mean, standard deviation, mode, count) over a
/// list of numbers.
///
/// Use the `RUST_LOG` environment variable to configure logging.
#[derive(Parser, Debug)]
#[command(version, author)]
struct CliArgs {
    /// Values to compute statistics over. Omit them to use a small demonstration sample.
    #[arg(allow_negative_numbers = true)]
    values: Vec<f64>,

    /// Don't fall back to the demonstration sample when no values are given.
    #[arg(long)]
    no_demo: bool,

    /// Choose the CLI stdout format. Omit the option for the default.
    /// Status messages will be printed to stderr in all cases.
    #[arg(long, value_enum)]
    output: Option<Output>,
}

impl CliArgs {
    fn values(&self) -> &[f64] {
        if self.values.is_empty() && !self.no_demo {
            &DEMO_SAMPLE
        } else {
            &self.values
        }
    }

    fn output(&self) -> Output {
        self.output.unwrap_or_default()
    }
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let mut env_filter = EnvFilter::builder();
    env_filter = if cfg!(debug_assertions) {
        env_filter.with_default_directive(LevelFilter::DEBUG.into())
    } else {
        env_filter.with_default_directive(LevelFilter::INFO.into())
    };
    let env_filter = env_filter.from_env_lossy();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .without_time()
                .with_writer(std::io::stderr)
                .with_filter(env_filter),
        )
        .init();

    if let Err(e) = run(&args, stdout().lock()) {
        error!("Could not compute statistics : {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(args: &CliArgs, w: impl Write) -> Result<(), Box<dyn Error>> {
    let values = args.values();
    if args.values.is_empty() && !args.no_demo {
        debug!("No values given, using the demonstration sample");
    }
    info!(count = values.len(), output = ?args.output(), "Computing statistics");

    let start = Instant::now();
    args.output().write_results(w, values)?;
    debug!("Done in {:?}", start.elapsed());
    Ok(())
}
