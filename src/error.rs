
use thiserror::Error;

/// Errors raised while building descriptors, scoring words or running the pipeline.
#[derive(Debug, Error)]
pub enum SynonymError {

    /// Cosine similarity against a vector of norm 0 has no direction.
    #[error("similarity is undefined for a zero vector")]
    UndefinedSimilarity,

    #[error("no semantic descriptor for word '{0}'")]
    MissingDescriptor(String),

    #[error("cannot compute accuracy over an empty question set")]
    EmptyQuestionSet,

    /// A question line needs a target, the expected answer and at least one choice.
    #[error("malformed question on line {line}: '{content}'")]
    MalformedQuestion { line: usize, content: String },

    #[error("unrecognized similarity metric '{0}'")]
    UnknownMetric(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("could not draw chart: {0}")]
    Plot(String),
}

impl SynonymError {

    /// Failures that `most_similar_word` turns into an unmeasurable score.
    pub fn is_unmeasurable(&self) -> bool {
        matches!(self, Self::UndefinedSimilarity | Self::MissingDescriptor(_))
    }
}

pub type Result<T> = std::result::Result<T, SynonymError>;
