
use crate::descriptors::DescriptorMap;
use crate::error::{Result, SynonymError};
use crate::similarity::Similarity;

use tracing::debug;


/// The outcome of comparing a word with one candidate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Score {
    Measured(f64),
    Unmeasurable,
}

impl Score {

    /// True when `self` should replace `best` as the current answer.
    fn beats(&self, best: &Score) -> bool {
        match (self, best) {
            (Score::Measured(s), Score::Measured(b)) => s > b,
            (Score::Measured(_), Score::Unmeasurable) => true,
            (Score::Unmeasurable, _) => false,
        }
    }
}

/// Scores `word` against `candidate`, propagating lookup and similarity failures.
pub fn similarity_of(word: &str, candidate: &str, descriptors: &DescriptorMap, similarity: &dyn Similarity) -> Result<f64> {

    let lookup = |w: &str| descriptors.get(w).ok_or_else(|| SynonymError::MissingDescriptor(w.to_string()));
    similarity.score(lookup(word)?, lookup(candidate)?)
}

pub fn score_of(word: &str, candidate: &str, descriptors: &DescriptorMap, similarity: &dyn Similarity) -> Result<Score> {

    match similarity_of(word, candidate, descriptors, similarity) {
        Ok(score) => Ok(Score::Measured(score)),
        Err(e) if e.is_unmeasurable() => {
            debug!("{} ? {} is unmeasurable: {}", word, candidate, e);
            Ok(Score::Unmeasurable)
        },
        Err(e) => Err(e)
    }
}

/// Returns the choice most similar to `word`, the earliest one on ties.
///
/// Missing descriptors and undefined similarities make a choice unmeasurable;
/// `None` is returned when no choice can be measured at all.
pub fn most_similar_word<'a, S: AsRef<str>>(
    word: &str,
    choices: &'a [S],
    descriptors: &DescriptorMap,
    similarity: &dyn Similarity) -> Result<Option<&'a str>> {

    let mut best: Option<&'a str> = None;
    let mut best_score = Score::Unmeasurable;

    for choice in choices {
        let choice = choice.as_ref();
        let score = score_of(word, choice, descriptors, similarity)?;
        if score.beats(&best_score) {
            best = Some(choice);
            best_score = score;
        }
    }

    Ok(best)
}


/// One synonym question: which of `choices` means the same as `target`.
#[derive(Clone, Debug, PartialEq)]
pub struct Question {
    pub target: String,
    pub answer: String,
    pub choices: Vec<String>,
}

impl Question {

    /// Parses `<word> <correct_answer> <candidate>...`; `line` is only used in errors.
    pub fn parse(content: &str, line: usize) -> Result<Question> {

        let fields: Vec<&str> = content.split_whitespace().collect();
        if fields.len() < 3 {
            return Err(SynonymError::MalformedQuestion { line, content: content.to_string() });
        }

        Ok(Question {
            target: fields[0].to_string(),
            answer: fields[1].to_string(),
            choices: fields[2..].iter().map(|x| x.to_string()).collect(),
        })
    }

    pub fn answered_by(&self, descriptors: &DescriptorMap, similarity: &dyn Similarity) -> Result<bool> {
        let guess = most_similar_word(&self.target, &self.choices, descriptors, similarity)?;
        Ok(guess == Some(self.answer.as_str()))
    }
}

/// Percentage (0 to 100) of `questions` answered correctly.
pub fn evaluate_accuracy(questions: &[Question], descriptors: &DescriptorMap, similarity: &dyn Similarity) -> Result<f64> {

    if questions.is_empty() {
        return Err(SynonymError::EmptyQuestionSet);
    }

    let mut correct = 0usize;
    for question in questions {
        if question.answered_by(descriptors, similarity)? {
            correct += 1;
        }
    }

    let accuracy = 100.0 * correct as f64 / questions.len() as f64;
    debug!("{}: {} of {} questions correct", similarity.name(), correct, questions.len());
    Ok(accuracy)
}
