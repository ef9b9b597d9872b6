use std::path::PathBuf;
use thiserror::Error;

use crate::writer::WriteReport;

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("could not resolve target path: {0}")]
    Resolve(#[source] std::io::Error),
    #[error("could not open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("writing chunk {index}/{count} failed: {source}")]
    Write {
        index: usize,
        count: usize,
        #[source]
        source: std::io::Error,
        /// What made it to the sink before the failure.
        written: WriteReport,
    },
}

impl WriteError {
    /// Progress made before the error. Empty when the file never opened.
    pub fn written(&self) -> WriteReport {
        match self {
            WriteError::Write { written, .. } => written.clone(),
            _ => WriteReport::default(),
        }
    }
}
