use std::ops::RangeInclusive;

use log::debug;
use rand::Rng;

use crate::config::Config;
use crate::generator::TextGenerator;

/// Written after every paragraph.
pub const PARAGRAPH_BREAK: &str = "\n\n";

/// Split `budget` words into paragraph sizes drawn from `range`.
///
/// The sizes always add up to `budget` exactly. Only the last one may fall
/// below `range`, when it is clamped to whatever budget was left. A reversed
/// range is reordered, and the lower bound is raised to one word.
pub fn plan_word_counts<R: Rng + ?Sized>(
    rng: &mut R,
    budget: usize,
    range: RangeInclusive<usize>,
) -> Vec<usize> {
    let (lo, hi) = if range.start() <= range.end() {
        (*range.start(), *range.end())
    } else {
        (*range.end(), *range.start())
    };
    let range = lo.max(1)..=hi.max(1);

    let mut counts = Vec::new();
    let mut allocated = 0;

    while allocated < budget {
        let remaining = budget - allocated;
        let size = rng.gen_range(range.clone()).min(remaining);
        if size == 0 {
            break;
        }
        counts.push(size);
        allocated += size;
    }

    counts
}

/// Every paragraph of a session, generated before the first write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChunkPlan {
    chunks: Vec<String>,
}

impl ChunkPlan {
    pub fn new(chunks: Vec<String>) -> Self {
        Self { chunks }
    }

    pub fn generate<R: Rng + ?Sized>(
        config: &Config,
        generator: &mut dyn TextGenerator,
        rng: &mut R,
    ) -> Self {
        let counts = plan_word_counts(rng, config.total_words, config.paragraph_range());
        debug!(
            "planned {} paragraphs for {} words with the {} backend",
            counts.len(),
            config.total_words,
            generator.backend()
        );

        let chunks = counts
            .into_iter()
            .map(|count| generator.paragraph(count))
            .collect();
        Self { chunks }
    }

    pub fn chunks(&self) -> &[String] {
        &self.chunks
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Characters the finished session adds to the file, paragraph breaks
    /// included.
    pub fn total_chars(&self) -> usize {
        self.chars_through(self.chunks.len())
    }

    /// Characters written once the first `written` chunks are on disk.
    pub fn chars_through(&self, written: usize) -> usize {
        let break_len = PARAGRAPH_BREAK.chars().count();
        self.chunks
            .iter()
            .take(written)
            .map(|chunk| chunk.chars().count() + break_len)
            .sum()
    }
}
