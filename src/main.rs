//! cron-expand - prints the values every field of a cron expression matches.

use anyhow::anyhow;
use clap::{Parser, ValueEnum};
use cron_expand::parser::{ScheduleParser, StepOrigin};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Expand a cron expression into the minutes, hours, days, months and weekdays it runs at
#[derive(Parser)]
#[command(name = "cron-expand")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Five schedule fields followed by the command, e.g. "*/15 0 1,15 * 1-5 /usr/bin/find"
    #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
    expression: Vec<String>,

    /// Where `*/N` steps start counting
    #[arg(long, value_enum, default_value_t = OriginArg::Zero)]
    step_origin: OriginArg,

    /// Maximum width of the printed table
    #[arg(long, default_value_t = cron_expand::render::DEFAULT_MAX_WIDTH)]
    width: usize,

    /// Log more (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OriginArg {
    /// Start at 0 on every field
    Zero,
    /// Start at the first value of the field
    FieldStart,
}

impl From<OriginArg> for StepOrigin {
    fn from(origin: OriginArg) -> Self {
        match origin {
            OriginArg::Zero => StepOrigin::Zero,
            OriginArg::FieldStart => StepOrigin::FieldStart,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let expression = cli.expression.join(" ");
    let parser = ScheduleParser::builder()
        .step_origin(cli.step_origin.into())
        .build();

    // Invalid expressions are reported on stdout and are not a failure of the program
    match parser.parse(&expression) {
        Ok(schedule) => print!("{}", schedule.to_table().max_width(cli.width)),
        Err(err) => {
            debug!(error = ?err, %expression, "rejected expression");
            println!("{err}");
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) -> anyhow::Result<()> {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
}
