use std::env;
use std::process::ExitCode;
use synonym_solver::Pipeline;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

// expects a single argument, the path to a json config. For example:
// {"corpus_files": ["war_and_peace.txt", "swanns_way.txt"], "questions_file": "test.txt", "plot": true}

fn main() -> ExitCode {

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(false).with_writer(std::io::stderr).init();

    info!("entering program...");
    let args: Vec<String> = env::args().collect();

    match Pipeline::run(&args) {
        Ok(reports) => {
            for report in reports {
                println!("{}", report);
            }
            ExitCode::SUCCESS
        },
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
