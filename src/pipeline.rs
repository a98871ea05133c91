
// imports
use crate::config::files_handling::{self, Document};
use crate::config::{Config, JsonTypes};
use crate::descriptors::{DescriptorBuilder, DescriptorMap};
use crate::error::Result;
use crate::report::{self, AccuracyReport};
use crate::similarity::Similarity;
use crate::solver::{self, Question};
use crate::tokenizer::PunctuationTokenizer;

use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

pub struct Pipeline {}

impl Pipeline {

    // runs the main procedure of 3 steps -
    // -> configuration of arguments
    // -> semantic descriptors of the corpus
    // -> evaluation of every similarity metric on the question set

    pub fn run(args: &[String]) -> Result<Vec<AccuracyReport>> {

        info!("building parameters...");
        let params = Config::new(args)?.get_params();
        info!("{}", params);
        Pipeline::run_with(&params)
    }

    pub fn run_with(params: &JsonTypes) -> Result<Vec<AccuracyReport>> {

        let descriptors = Pipeline::load_descriptors(&params.corpus_files, params.num_threads)?;

        let questions: Vec<Question> = files_handling::read_input(&params.questions_file)?;
        info!("loaded {} questions from {}", questions.len(), params.questions_file);

        let metrics: Vec<&dyn Similarity> = params.metrics.iter().map(|m| m as &dyn Similarity).collect();
        let reports = Pipeline::evaluate(&questions, &descriptors, &metrics)?;

        // save the results
        files_handling::save_output(&params.output_dir, "results", &reports)?;
        if params.plot {
            let chart = Path::new(&params.output_dir).join("results.png");
            report::draw_bar_chart(&reports, &chart)?;
            info!("saved chart to {}", chart.display());
        }

        if let Some(best) = report::best(&reports) {
            info!("best metric is {}", best);
        }
        Ok(reports)
    }

    pub fn load_descriptors(corpus_files: &[String], num_threads: usize) -> Result<DescriptorMap> {

        let timer = Instant::now();
        info!("reading {} corpus files...", corpus_files.len());

        let documents = corpus_files
            .iter()
            .map(|file| files_handling::read_input::<Document>(file))
            .collect::<Result<Vec<Document>>>()?;

        let builder = DescriptorBuilder::new(PunctuationTokenizer::new(), num_threads);
        let descriptors = builder.build(&documents)?;
        if descriptors.is_empty() {
            warn!("corpus holds no words, every question will go unanswered");
        }

        info!("finished descriptors, took {} seconds ...", timer.elapsed().as_secs());
        Ok(descriptors)
    }

    pub fn evaluate(questions: &[Question], descriptors: &DescriptorMap, metrics: &[&dyn Similarity]) -> Result<Vec<AccuracyReport>> {

        let mut reports = Vec::new();
        for metric in metrics {
            let timer = Instant::now();
            let accuracy = solver::evaluate_accuracy(questions, descriptors, *metric)?;
            info!("{} scored {:.2}%, took {} seconds ...", metric.name(), accuracy, timer.elapsed().as_secs());
            reports.push(AccuracyReport::new(metric.name(), accuracy));
        }
        Ok(reports)
    }
}
