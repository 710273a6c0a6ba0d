//! accufold CLI
//!
//! Fold a sequence of integers from the command line.
//!
//! Usage:
//!     accufold run 1 2 -3 4 --init 0 --sum 5 --threshold 100
//!     accufold run 1 2 3 --params ~/.accufold/params.json --trace
//!     accufold sample --init 0 --sum 0 --threshold 0

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use accufold::adapters::JsonParamFile;
use accufold::core::{fold_with, trace, FoldParams, StepRecord};
use accufold::ports::{ParamError, ParamResult, ParamSource};

/// Sequence folded by `accufold sample`
const SAMPLE: [i32; 5] = [1, 2, 3, 4, 5];

/// accufold - order-dependent integer accumulation
#[derive(Parser, Debug)]
#[command(name = "accufold")]
#[command(version)]
#[command(about = "Fold a sequence of integers into one accumulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fold the given elements
    Run {
        /// Elements of the sequence, in order
        #[arg(allow_negative_numbers = true)]
        elements: Vec<i32>,

        /// Number of elements to fold (defaults to all of them)
        #[arg(long)]
        size: Option<usize>,

        /// Print the accumulator after every stage
        #[arg(long)]
        trace: bool,

        #[command(flatten)]
        params: ParamArgs,
    },

    /// Fold the built-in sample sequence [1, 2, 3, 4, 5]
    Sample {
        #[command(flatten)]
        params: ParamArgs,
    },
}

/// Fold parameters, given inline or through a JSON file
#[derive(Args, Debug)]
struct ParamArgs {
    /// Starting accumulator value
    #[arg(
        long = "init",
        allow_negative_numbers = true,
        required_unless_present = "params",
        conflicts_with = "params"
    )]
    init_value: Option<i32>,

    /// Added to an odd accumulator at or above the threshold
    #[arg(
        long = "sum",
        allow_negative_numbers = true,
        required_unless_present = "params",
        conflicts_with = "params"
    )]
    sum_value: Option<i32>,

    /// Comparison bound for the rescale stage
    #[arg(
        long,
        allow_negative_numbers = true,
        required_unless_present = "params",
        conflicts_with = "params"
    )]
    threshold: Option<i32>,

    /// JSON file with init_value, sum_value and threshold
    #[arg(long)]
    params: Option<String>,
}

impl ParamArgs {
    fn resolve(&self) -> ParamResult<FoldParams> {
        let source: Box<dyn ParamSource> =
            match (&self.params, self.init_value, self.sum_value, self.threshold) {
                (Some(path), ..) => Box::new(JsonParamFile::new(path)),
                (None, Some(init), Some(sum), Some(threshold)) => {
                    Box::new(FoldParams::new(init, sum, threshold))
                }
                _ => {
                    return Err(ParamError::Parse(
                        "--init, --sum and --threshold are all required".into(),
                    ))
                }
            };

        log::debug!("Using {} parameter source", source.name());
        source.load()
    }
}

fn print_trace(records: &[StepRecord]) {
    for r in records {
        println!(
            "[{:>3}] element {:>11} ({:?}) -> {:>11} -> {:>11} ({:?}, {}) -> {:>11} ({:?})",
            r.index,
            r.element,
            r.element_parity,
            r.after_adjust,
            r.after_rescale,
            r.acc_parity,
            if r.below_threshold { "below" } else { "at/above" },
            r.after_position,
            r.position,
        );
    }
}

fn cmd_run(elements: &[i32], size: Option<usize>, show_trace: bool, params: &ParamArgs) -> Result<()> {
    let params = params.resolve()?;
    let size = size.unwrap_or(elements.len());
    log::debug!("Folding {} of {} elements with {:?}", size, elements.len(), params);

    if show_trace {
        print_trace(&trace(elements, size, &params)?);
    }

    let result = fold_with(elements, size, &params)?;
    println!("Result: {}", result);
    Ok(())
}

fn cmd_sample(params: &ParamArgs) -> Result<()> {
    let params = params.resolve()?;
    let result = fold_with(&SAMPLE, SAMPLE.len(), &params)?;
    println!("Result: {}", result);
    Ok(())
}

fn main() {
    env_logger::init_from_env(env_logger::Env::new().filter_or("ACCUFOLD_LOG", "warn"));

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Run {
            elements,
            size,
            trace,
            params,
        } => cmd_run(&elements, size, trace, &params),
        Commands::Sample { params } => cmd_sample(&params),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
