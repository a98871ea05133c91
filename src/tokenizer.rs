
// defines the behavior needed for splitting raw text into sentences of words
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Vec<Vec<String>>;
}

const SENTENCE_ENDS: [char; 3] = ['.', '!', '?'];
const WORD_SEPARATORS: [char; 6] = [',', '-', ':', ';', '"', '\''];

/// Splits sentences on `.`, `!` and `?`, and words on whitespace and the
/// punctuation in `WORD_SEPARATORS`. All text is lowercased.
#[derive(Clone, Copy, Debug, Default)]
pub struct PunctuationTokenizer;

impl PunctuationTokenizer {

    pub fn new() -> Self {
        Self
    }

    pub fn sentences(text: &str) -> Vec<&str> {

        // trailing text without an ending mark still forms a sentence
        text.split(|c: char| SENTENCE_ENDS.contains(&c))
            .map(str::trim)
            .filter(|sentence| !sentence.is_empty())
            .collect()
    }

    pub fn words(sentence: &str) -> Vec<String> {
        sentence
            .split(|c: char| c.is_whitespace() || WORD_SEPARATORS.contains(&c))
            .filter(|word| !word.is_empty())
            .map(|word| word.to_owned())
            .collect()
    }
}

impl Tokenizer for PunctuationTokenizer {

    fn tokenize(&self, text: &str) -> Vec<Vec<String>> {

        let text = text.to_lowercase();
        PunctuationTokenizer::sentences(&text)
            .into_iter()
            .map(PunctuationTokenizer::words)
            .filter(|words| !words.is_empty())
            .collect()
    }
}
