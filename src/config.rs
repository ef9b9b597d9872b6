use std::io;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::time::Duration;

use rand::Rng;
use shellexpand::tilde;

pub const TARGET_FILE: &str = "lorem_output_random.txt";
/// How long the session is meant to last. Shown in the banner, never enforced.
pub const DURATION_SECONDS: u64 = 72000;
pub const TOTAL_WORDS: usize = 500_000;

pub const MIN_DELAY_SECONDS: u64 = 10;
pub const MAX_DELAY_SECONDS: u64 = 30;

pub const WORDS_PER_PARAGRAPH_AVG: usize = 50;
/// Paragraphs land between 30 and 70 words with the defaults.
pub const PARAGRAPH_VARIANCE: usize = 20;

/// Settings for one typing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub target: PathBuf,
    pub duration_hint: Duration,
    pub total_words: usize,
    pub min_delay: Duration,
    pub max_delay: Duration,
    pub words_per_paragraph: usize,
    pub paragraph_variance: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target: PathBuf::from(TARGET_FILE),
            duration_hint: Duration::from_secs(DURATION_SECONDS),
            total_words: TOTAL_WORDS,
            min_delay: Duration::from_secs(MIN_DELAY_SECONDS),
            max_delay: Duration::from_secs(MAX_DELAY_SECONDS),
            words_per_paragraph: WORDS_PER_PARAGRAPH_AVG,
            paragraph_variance: PARAGRAPH_VARIANCE,
        }
    }
}

impl Config {
    /// Inclusive range a paragraph's word count is drawn from.
    ///
    /// The lower bound never drops below one word, and the upper bound never
    /// drops below the lower one.
    pub fn paragraph_range(&self) -> RangeInclusive<usize> {
        let lo = self
            .words_per_paragraph
            .saturating_sub(self.paragraph_variance)
            .max(1);
        let hi = self
            .words_per_paragraph
            .saturating_add(self.paragraph_variance)
            .max(lo);
        lo..=hi
    }

    /// Delay bounds, ordered.
    pub fn delay_range(&self) -> RangeInclusive<Duration> {
        if self.min_delay <= self.max_delay {
            self.min_delay..=self.max_delay
        } else {
            self.max_delay..=self.min_delay
        }
    }

    /// Draw the pause taken between two paragraphs.
    pub fn sample_delay<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        rng.gen_range(self.delay_range())
    }

    pub fn duration_minutes(&self) -> u64 {
        self.duration_hint.as_secs() / 60
    }

    // expand `~` and turn a relative target into an absolute path.
    // non UTF-8 targets are used as given
    pub fn resolve_target(&self) -> io::Result<PathBuf> {
        let expanded = match self.target.to_str() {
            Some(target) => PathBuf::from(tilde(target).into_owned()),
            None => self.target.clone(),
        };

        if expanded.is_absolute() {
            Ok(expanded)
        } else {
            Ok(std::env::current_dir()?.join(expanded))
        }
    }
}
