
use std::{env, process::ExitCode};
use synonym_solver::{solver, Config, Metric, Pipeline, Result, Similarity, SynonymError};
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};


// answers a single synonym question with the corpus of a json config.
// arguments to this executable should be:
// path to the json config (only corpus_files and num_threads are used)
// a metric name: "cosine", "euclidean" or "norm_euclidean"
// the word, followed by one or more choices
// example: ... args.json cosine vexed annoyed amused bewildered

fn main() -> ExitCode {

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let args: Vec<String> = env::args().collect();
    if let Err(e) = run(&args) {
        error!("{}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(args: &[String]) -> Result<()> {

    if args.len() < 5 {
        return Err(SynonymError::Config(
            "expected: <config.json> <metric> <word> <choice> [<choice> ...]".to_string()
        ));
    }

    let params = Config::new(&args[..2])?.get_params();
    let metric: Metric = args[2].parse()?;
    let word = args[3].to_lowercase();
    let choices: Vec<String> = args[4..].iter().map(|c| c.to_lowercase()).collect();

    let descriptors = Pipeline::load_descriptors(&params.corpus_files, params.num_threads)?;

    for choice in &choices {
        match solver::score_of(&word, choice, &descriptors, &metric)? {
            solver::Score::Measured(score) => println!("{} ? {} = {}", word, choice, score),
            solver::Score::Unmeasurable => println!("{} ? {} = unmeasurable", word, choice),
        }
    }

    match solver::most_similar_word(&word, &choices, &descriptors, &metric)? {
        Some(answer) => println!("{} answer for '{}': {}", metric.name(), word, answer),
        None => println!("{} cannot answer for '{}', no choice is measurable", metric.name(), word),
    }
    Ok(())
}
