//! Types lorem ipsum into a file one paragraph at a time, pausing for a
//! random interval between paragraphs, like someone typing.

pub mod config;
pub mod error;
pub mod generator;
pub mod planner;
pub mod writer;

pub use config::Config;
pub use error::WriteError;
pub use generator::{probe, Backend, FallbackVocabulary, TextGenerator};
#[cfg(feature = "lipsum")]
pub use generator::LipsumBackend;
pub use planner::{plan_word_counts, ChunkPlan};
pub use writer::{
    open_target, run, run_with, run_with_sink, write_chunks, Progress, RunOutcome, WriteReport,
};
