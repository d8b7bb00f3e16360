use std::{env, process::ExitCode};

use cost_spline::table::CostTable;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let Some(path) = env::args().nth(1) else {
        eprintln!("usage: cost-spline <cost-table.json>");
        return ExitCode::from(2);
    };

    match CostTable::load(&path).and_then(|table| table.render()) {
        Ok(report) => {
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("cost-spline: {}", err);
            ExitCode::FAILURE
        }
    }
}
