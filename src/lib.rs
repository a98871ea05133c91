pub mod error;
pub mod vectors;
pub mod tokenizer;
pub mod descriptors;
pub mod similarity;
pub mod solver;
pub mod config;
pub mod report;
pub mod pipeline;

pub use error::{Result, SynonymError};
pub use vectors::SparseVector;
pub use tokenizer::{PunctuationTokenizer, Tokenizer};
pub use descriptors::{
    build_all_descriptors,
    build_corpus_descriptors,
    build_descriptor,
    merge_descriptor_maps,
    DescriptorBuilder,
    DescriptorMap,
};
pub use similarity::{
    cosine_similarity,
    negative_euclidean_similarity,
    normalized_negative_euclidean_similarity,
    Metric,
    Similarity,
};
pub use solver::{evaluate_accuracy, most_similar_word, Question, Score};
pub use config::{files_handling, Config, JsonTypes};
pub use report::AccuracyReport;
pub use pipeline::Pipeline;
