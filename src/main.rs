use money_engine::run::run;

use std::{fs::File, io, process};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: money_engine <rates.csv> <holdings.csv> <target-currency>";

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (rates_path, holdings_path, to) = match args.as_slice() {
        [rates_path, holdings_path, to] if !to.trim().is_empty() => {
            (rates_path, holdings_path, to.trim())
        }
        _ => {
            eprintln!("{}", USAGE);
            process::exit(2);
        }
    };

    let rates = open(rates_path);
    let holdings = open(holdings_path);

    match run(rates, holdings, to, io::stdout().lock()) {
        Ok(total) => tracing::info!(%total, "reduced all holdings"),
        Err(err) => {
            tracing::error!(error = %err, "failed to reduce holdings");
            process::exit(1);
        }
    }
}

fn open(path: &str) -> File {
    match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            tracing::error!(path, error = %err, "failed to open input file");
            process::exit(1);
        }
    }
}

// Logs go to stderr, so they never get mixed with the CSV on stdout.
// The level is read from RUST_LOG, and defaults to info.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
