pub(crate) mod config;
pub(crate) mod ops;

use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;
use structopt::StructOpt;
use vecmath::FormatSpec;

use config::Config;
use ops::Op;

// Cli arguments
#[derive(StructOpt, Debug)]
#[structopt(name = "vecmath")]
struct CliArgs {
    /// Operation to run: add, sub, dot, dot-sum, eq or show
    op: Op,
    /// Left hand side vector, e.g. "1,2,3" or "(1, 2, 3, 4)"
    #[structopt(allow_hyphen_values = true)]
    lhs: String,
    /// Right hand side vector, or a scalar for add and sub
    #[structopt(allow_hyphen_values = true)]
    rhs: Option<String>,
    /// Format spec for every component, e.g. ".2" or ">8.3f"
    #[structopt(short = "f", long = "format")]
    format: Option<String>,
    /// Config file, defaults to `vecmath.toml` in the working directory
    #[structopt(short = "c", long = "config", parse(from_os_str))]
    config: Option<PathBuf>,
    /// Output debug info
    #[structopt(long = "verbose")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = CliArgs::from_args();

    if !args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    } else {
        env_logger::Builder::new()
            .filter(None, log::LevelFilter::Debug)
            .init();
    }

    run(args)
}

fn run(args: CliArgs) -> Result<()> {
    let config = Config::load(args.config.as_deref())?;

    let format = args.format.or(config.format).unwrap_or_default();
    let spec: FormatSpec = format
        .parse()
        .with_context(|| format!("Invalid format spec: `{}`", format))?;
    debug!("Using format spec `{}`", spec);

    let outcome = ops::evaluate(args.op, &args.lhs, args.rhs.as_deref())?;
    info!("{} {} -> {:?}", args.op, args.lhs, outcome);

    println!("{}", outcome.render(&spec));
    Ok(())
}
