use std::fmt;
use std::future::Future;
use std::io;
use std::time::{Duration, Instant};

use async_std::fs::{File, OpenOptions};
use async_std::io::{Write, WriteExt};
use async_std::task;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::Config;
use crate::error::WriteError;
use crate::generator::{probe, TextGenerator};
use crate::planner::{ChunkPlan, PARAGRAPH_BREAK};

/// What a write loop got done.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteReport {
    pub chunks_written: usize,
    pub chars_written: usize,
    /// Pauses taken between chunks, in order.
    pub delays: Vec<Duration>,
}

/// One progress line, printed after each chunk lands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub chars_written: usize,
    pub total_chars: usize,
    /// 1-based.
    pub chunk: usize,
    pub chunk_count: usize,
    pub elapsed: Duration,
}

impl Progress {
    pub fn percent(&self) -> f64 {
        if self.total_chars == 0 {
            return 100.0;
        }
        self.chars_written as f64 / self.total_chars as f64 * 100.0
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Progress: {:.2}% | Chunks: {}/{} | Elapsed: {:.1}s",
            self.percent(),
            self.chunk,
            self.chunk_count,
            self.elapsed.as_secs_f64()
        )
    }
}

#[derive(Debug)]
pub enum RunOutcome {
    /// The plan came out empty and the target was left alone.
    NothingToWrite,
    Finished {
        report: WriteReport,
        elapsed: Duration,
    },
    Failed {
        error: WriteError,
        elapsed: Duration,
    },
}

async fn write_chunk<W: Write + Unpin>(sink: &mut W, chunk: &str) -> io::Result<()> {
    sink.write_all(chunk.as_bytes()).await?;
    sink.write_all(PARAGRAPH_BREAK.as_bytes()).await?;
    sink.flush().await
}

/// Write every chunk of `plan` to `sink`, pausing between chunks.
///
/// Each chunk is followed by a paragraph break and a flush, so an
/// interruption between chunks never leaves half a paragraph behind. A
/// random delay from the configured range is slept between two chunks,
/// never after the last one. `started` is the clock progress lines report
/// against.
///
/// Stops at the first I/O error; the error carries what was written before.
pub async fn write_chunks<W, R>(
    sink: &mut W,
    plan: &ChunkPlan,
    config: &Config,
    rng: &mut R,
    started: Instant,
) -> Result<WriteReport, WriteError>
where
    W: Write + Unpin,
    R: Rng + ?Sized,
{
    let chunk_count = plan.len();
    let total_chars = plan.total_chars();
    let break_len = PARAGRAPH_BREAK.chars().count();
    let mut report = WriteReport::default();

    for (i, chunk) in plan.chunks().iter().enumerate() {
        if let Err(source) = write_chunk(sink, chunk).await {
            return Err(WriteError::Write {
                index: i + 1,
                count: chunk_count,
                source,
                written: report,
            });
        }
        report.chunks_written += 1;
        report.chars_written += chunk.chars().count() + break_len;

        let progress = Progress {
            chars_written: report.chars_written,
            total_chars,
            chunk: i + 1,
            chunk_count,
            elapsed: started.elapsed(),
        };
        println!("{}", progress);

        if i + 1 < chunk_count {
            let delay = config.sample_delay(rng);
            println!("Waiting for {:.2} seconds...", delay.as_secs_f64());
            report.delays.push(delay);
            task::sleep(delay).await;
        } else {
            println!("Last chunk written, no final delay.");
        }
    }

    Ok(report)
}

/// Open the session's target for appending, creating it if needed.
pub async fn open_target(config: &Config) -> Result<File, WriteError> {
    let path = config.resolve_target().map_err(WriteError::Resolve)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .await
        .map_err(|source| WriteError::Open {
            path: path.clone(),
            source,
        })?;
    info!("appending to {}", path.display());

    Ok(file)
}

fn print_banner(config: &Config) {
    println!(
        "Starting Lorem Ipsum 'autotyper' for {} minutes.",
        config.duration_minutes()
    );
    println!("Target file: {}", config.target.display());
    println!("Total words: {}", config.total_words);
    let delays = config.delay_range();
    println!(
        "Random delay between chunks: {}-{} seconds.",
        delays.start().as_secs_f64(),
        delays.end().as_secs_f64()
    );
}

/// Run a whole session with the given text backend and randomness,
/// appending to the configured target.
pub async fn run_with<R: Rng + ?Sized>(
    config: &Config,
    generator: &mut dyn TextGenerator,
    rng: &mut R,
) -> RunOutcome {
    run_with_sink(config, generator, rng, || open_target(config)).await
}

/// Run a whole session, writing to whatever `open` yields.
///
/// The plan is generated in full before `open` is called. An empty plan
/// returns early without calling it. The sink is dropped before the final
/// timing line, which is printed whether the write loop finished or failed.
pub async fn run_with_sink<R, F, Fut, W>(
    config: &Config,
    generator: &mut dyn TextGenerator,
    rng: &mut R,
    open: F,
) -> RunOutcome
where
    R: Rng + ?Sized,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<W, WriteError>>,
    W: Write + Unpin,
{
    print_banner(config);

    debug!("generating chunks");
    let plan = ChunkPlan::generate(config, generator, rng);
    if plan.is_empty() {
        println!("No text to type. Exiting.");
        return RunOutcome::NothingToWrite;
    }

    println!(
        "Generated {} text chunks (approx. {} chars).",
        plan.len(),
        plan.total_chars()
    );
    println!(
        "Writing to file. This is meant to take about {} minutes...",
        config.duration_minutes()
    );

    let started = Instant::now();
    let result = match open().await {
        Ok(mut sink) => write_chunks(&mut sink, &plan, config, rng, started).await,
        Err(e) => Err(e),
    };
    let elapsed = started.elapsed();

    let outcome = match result {
        Ok(report) => {
            println!("\n'Autotyper' finished!");
            RunOutcome::Finished { report, elapsed }
        }
        Err(error) => {
            println!("\nAn error occurred: {}", error);
            RunOutcome::Failed { error, elapsed }
        }
    };
    println!("Script finished in: {:.2} seconds.", elapsed.as_secs_f64());

    outcome
}

/// Run a session with the best available backend.
pub async fn run(config: &Config) -> RunOutcome {
    let mut generator = probe();
    let mut rng = StdRng::from_entropy();
    run_with(config, generator.as_mut(), &mut rng).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_line() {
        let progress = Progress {
            chars_written: 250,
            total_chars: 1000,
            chunk: 1,
            chunk_count: 4,
            elapsed: Duration::from_millis(1300),
        };
        assert_eq!(
            progress.to_string(),
            "Progress: 25.00% | Chunks: 1/4 | Elapsed: 1.3s"
        );
    }

    #[test]
    fn progress_of_empty_total_is_complete() {
        let progress = Progress {
            chars_written: 0,
            total_chars: 0,
            chunk: 0,
            chunk_count: 0,
            elapsed: Duration::ZERO,
        };
        assert_eq!(progress.percent(), 100.0);
    }
}
