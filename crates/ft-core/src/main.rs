//! Forecast tally
//!
//! Fetches the forecast feed once, prints the forecast, market and overall
//! comparison tables, and the countdown to the target instant.

use clap::Parser;
use ft_common::{format_error_human, Result};
use ft_core::logging::{generate_run_id, init_logging, LogConfig};
use ft_core::{App, ExitCode, HttpSource, Settings, SystemClock};
use ft_report::TableConfig;
use std::io::{IsTerminal, Write};
use tracing::{error, info_span};

/// Compare election forecasts and prediction markets in the terminal
#[derive(Parser)]
#[command(name = "forecast-tally")]
#[command(author, version, about, long_about = None)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();
    init_logging(&LogConfig::from_env());

    let run_id = generate_run_id();
    let span = info_span!("run", run_id = %run_id);
    let _guard = span.enter();

    let exit_code = match run() {
        Ok(()) => ExitCode::Clean,
        Err(err) => {
            let code = ExitCode::from(&err);
            error!(
                code = err.code(),
                category = %err.category(),
                exit = code.code_name(),
                "{}",
                err
            );
            eprintln!(
                "{}",
                format_error_human(&err, std::io::stderr().is_terminal())
            );
            code
        }
    };

    std::process::exit(exit_code.as_i32());
}

fn run() -> Result<()> {
    let settings = Settings::default();
    let app = App::new(
        HttpSource::new(settings.feed_url),
        SystemClock::new(settings.target),
        TableConfig::default(),
    );
    let report = app.run()?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(report.text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
