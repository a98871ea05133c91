
// imports
use crate::error::Result;
use crate::tokenizer::Tokenizer;
use crate::vectors::SparseVector;

use std::collections::HashMap;
use std::time::Instant;
use rayon::{prelude::*, ThreadPoolBuilder};
use tracing::{debug, info};


/// Maps every word of a corpus to its semantic descriptor.
///
/// A word's descriptor never holds an entry for the word itself.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DescriptorMap {
    descriptors: HashMap<String, SparseVector>,
}

impl DescriptorMap {

    pub fn new() -> Self {
        Self { descriptors: HashMap::new() }
    }

    pub fn get(&self, word: &str) -> Option<&SparseVector> {
        self.descriptors.get(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.descriptors.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.descriptors.keys().map(|w| w.as_str())
    }

    /// Adds `descriptor` into the entry of `word`, creating the entry if needed.
    pub fn accumulate(&mut self, word: &str, descriptor: &SparseVector) {
        match self.descriptors.get_mut(word) {
            Some(current) => current.add(descriptor),
            None => {
                self.descriptors.insert(word.to_owned(), descriptor.clone());
            }
        }
    }

    /// Merges `other` into `self` additively. No word is ever removed.
    pub fn merge(&mut self, other: &DescriptorMap) {
        for (word, descriptor) in &other.descriptors {
            self.accumulate(word, descriptor);
        }
    }
}

impl FromIterator<(String, SparseVector)> for DescriptorMap {
    fn from_iter<I: IntoIterator<Item = (String, SparseVector)>>(iter: I) -> Self {
        Self { descriptors: iter.into_iter().collect() }
    }
}


/// Counts every token of `sentence` other than `word`, once per occurrence.
///
/// Returns an empty vector when `word` is not part of the sentence.
pub fn build_descriptor(word: &str, sentence: &[String]) -> SparseVector {

    let mut descriptor = SparseVector::new();
    if !sentence.iter().any(|token| token == word) {
        return descriptor;
    }

    for token in sentence.iter().filter(|token| *token != word) {
        descriptor.increment(token, 1.0);
    }
    descriptor
}

/// Builds the descriptor of every token in `sentences`.
///
/// Each occurrence of a word contributes its sentence descriptor, so a word
/// repeated in a sentence counts every other token once per repetition.
pub fn build_all_descriptors(sentences: &[Vec<String>]) -> DescriptorMap {

    let mut descriptors = DescriptorMap::new();
    for sentence in sentences {
        for word in sentence {
            let descriptor = build_descriptor(word, sentence);
            descriptors.accumulate(word, &descriptor);
        }
    }
    descriptors
}

pub fn merge_descriptor_maps(target: &mut DescriptorMap, other: &DescriptorMap) {
    target.merge(other)
}

/// Tokenizes each document and merges its descriptors into one corpus-wide map.
pub fn build_corpus_descriptors<T, D>(documents: &[D], tokenizer: &T) -> DescriptorMap
where
    T: Tokenizer,
    D: AsRef<str>,
{
    let mut corpus = DescriptorMap::new();
    for (i, document) in documents.iter().enumerate() {
        let sentences = tokenizer.tokenize(document.as_ref());
        debug!("document {} holds {} sentences", i, sentences.len());
        corpus.merge(&build_all_descriptors(&sentences));
    }
    corpus
}


pub struct DescriptorBuilder<T: Tokenizer> {
    tokenizer: T,
    num_threads: usize,
}

impl<T: Tokenizer + Sync> DescriptorBuilder<T> {

    pub fn new(tokenizer: T, num_threads: usize) -> Self {
        Self { tokenizer, num_threads: num_threads.max(1) }
    }

    /// Builds the corpus descriptors, one document per task when more than
    /// one thread is configured. Merging always happens on the calling thread
    /// in document order, so both paths give the same map.
    pub fn build<D: AsRef<str> + Sync>(&self, documents: &[D]) -> Result<DescriptorMap> {

        let timer = Instant::now();
        let corpus = if self.num_threads == 1 || documents.len() < 2 {
            build_corpus_descriptors(documents, &self.tokenizer)
        } else {
            self.build_parallel(documents)?
        };

        info!(
            "built descriptors for {} words from {} documents, took {} seconds ...",
            corpus.len(), documents.len(), timer.elapsed().as_secs()
        );
        Ok(corpus)
    }

    fn build_parallel<D: AsRef<str> + Sync>(&self, documents: &[D]) -> Result<DescriptorMap> {

        // a local pool, the global one may already be initialized by the caller
        let pool = ThreadPoolBuilder::new().num_threads(self.num_threads).build()?;
        debug!("building descriptors of {} documents on {} threads", documents.len(), self.num_threads);

        let per_document: Vec<DescriptorMap> = pool.install(|| {
            documents.par_iter().map(|document| {
                let sentences = self.tokenizer.tokenize(document.as_ref());
                build_all_descriptors(&sentences)
            }).collect()
        });

        let mut corpus = DescriptorMap::new();
        for descriptors in &per_document {
            corpus.merge(descriptors);
        }
        Ok(corpus)
    }
}
