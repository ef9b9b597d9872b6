use std::fmt;

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Words the fallback generator samples from. Repeats are intentional and
/// weight those words more heavily.
pub const VOCABULARY: [&str; 69] = [
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit",
    "sed", "do", "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore",
    "magna", "aliqua", "ut", "enim", "ad", "minim", "veniam", "quis", "nostrud",
    "exercitation", "ullamco", "laboris", "nisi", "ut", "aliquip", "ex", "ea",
    "commodo", "consequat", "duis", "aute", "irure", "dolor", "in", "reprehenderit",
    "in", "voluptate", "velit", "esse", "cillum", "dolore", "eu", "fugiat", "nulla",
    "pariatur", "excepteur", "sint", "occaecat", "cupidatat", "non", "proident",
    "sunt", "in", "culpa", "qui", "officia", "deserunt", "mollit", "anim", "id",
    "est", "laborum",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Lipsum,
    Fallback,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Lipsum => write!(f, "lipsum"),
            Backend::Fallback => write!(f, "fallback vocabulary"),
        }
    }
}

/// Source of placeholder words.
pub trait TextGenerator {
    fn backend(&self) -> Backend;

    /// `count` lowercase words joined by single spaces.
    fn words(&mut self, count: usize) -> String;

    /// `count` words as a sentence: first letter capitalized, trailing period.
    fn paragraph(&mut self, count: usize) -> String {
        let mut text = capitalize(&self.words(count));
        text.push('.');
        text
    }
}

pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Markov-chain lorem ipsum from the `lipsum` crate, stripped down to bare
/// lowercase words.
#[cfg(feature = "lipsum")]
#[derive(Debug)]
pub struct LipsumBackend {
    non_letters: regex::Regex,
}

#[cfg(feature = "lipsum")]
impl LipsumBackend {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            non_letters: regex::Regex::new(r"[^\p{L}]+")?,
        })
    }

    fn normalize(&self, token: &str) -> String {
        self.non_letters
            .replace_all(&token.to_lowercase(), "")
            .into_owned()
    }
}

#[cfg(feature = "lipsum")]
impl TextGenerator for LipsumBackend {
    fn backend(&self) -> Backend {
        Backend::Lipsum
    }

    fn words(&mut self, count: usize) -> String {
        let mut words: Vec<String> = Vec::with_capacity(count);

        // tokens that are pure punctuation vanish on normalize, so top up
        // until the count is reached
        while words.len() < count {
            let raw = lipsum::lipsum_words(count - words.len());
            words.extend(
                raw.split_whitespace()
                    .map(|token| self.normalize(token))
                    .filter(|word| !word.is_empty()),
            );
        }
        words.truncate(count);
        words.join(" ")
    }
}

/// Uniform sampling, with replacement, from [`VOCABULARY`].
#[derive(Debug)]
pub struct FallbackVocabulary<R> {
    rng: R,
}

impl<R: Rng> FallbackVocabulary<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> TextGenerator for FallbackVocabulary<R> {
    fn backend(&self) -> Backend {
        Backend::Fallback
    }

    fn words(&mut self, count: usize) -> String {
        (0..count)
            .filter_map(|_| VOCABULARY.choose(&mut self.rng).copied())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Pick the text backend once at startup.
///
/// Prefers `lipsum` when it was compiled in and falls back to the fixed
/// vocabulary otherwise, telling the user about it once.
pub fn probe() -> Box<dyn TextGenerator> {
    #[cfg(feature = "lipsum")]
    {
        match LipsumBackend::new() {
            Ok(backend) => {
                debug!("using {} backend", Backend::Lipsum);
                return Box::new(backend);
            }
            Err(e) => log::warn!("lipsum backend unavailable: {}", e),
        }
    }

    println!("The lipsum text backend is not available.");
    println!("Build with the `lipsum` feature enabled to use it.");
    println!("Using a basic Lorem Ipsum generator as a fallback.");
    debug!("using {} backend", Backend::Fallback);

    Box::new(FallbackVocabulary::new(StdRng::from_entropy()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_first_letter_only() {
        assert_eq!(capitalize("lorem ipsum"), "Lorem ipsum");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("é"), "É");
    }

    #[test]
    fn vocabulary_is_lowercase() {
        assert!(VOCABULARY
            .iter()
            .all(|w| !w.is_empty() && w.chars().all(|c| c.is_ascii_lowercase())));
    }
}
