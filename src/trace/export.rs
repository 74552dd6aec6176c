// Trace export
// JSONL trace files for offline inspection of a generated run

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::trace::types::{AlgorithmKind, Step, Trace};

/// Errors that can occur during trace export operations
#[derive(Debug, Error)]
pub enum TraceExportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Malformed trace file: {0}")]
    Malformed(String),
}

/// First line of every trace file
/// Lets a reader validate the payload before deserializing steps
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TraceFileHeader {
    algorithm: AlgorithmKind,
    step_count: usize,
}

/// Trace file writer
/// One JSON header line followed by one JSON line per step
pub struct TraceWriter {
    file_path: PathBuf,
}

impl TraceWriter {
    /// Create a new trace writer for a specific file
    pub fn new(file_path: PathBuf) -> Self {
        TraceWriter { file_path }
    }

    /// Write a complete trace, replacing any previous file contents
    pub fn write(&self, trace: &Trace) -> Result<(), TraceExportError> {
        let file = File::create(&self.file_path)?;
        let mut out = BufWriter::new(file);

        let header = TraceFileHeader {
            algorithm: trace.algorithm,
            step_count: trace.len(),
        };
        serde_json::to_writer(&mut out, &header)?;
        out.write_all(b"\n")?;

        for step in &trace.steps {
            serde_json::to_writer(&mut out, step)?;
            out.write_all(b"\n")?;
        }

        out.flush()?;
        Ok(())
    }

    /// Get the trace file path
    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

/// Read a trace back from a JSONL file written by `TraceWriter`
pub fn read_trace_file(path: &Path) -> Result<Trace, TraceExportError> {
    let contents = std::fs::read_to_string(path)?;
    let mut lines = contents.lines().filter(|l| !l.trim().is_empty());

    let header_line = lines
        .next()
        .ok_or_else(|| TraceExportError::Malformed("empty trace file".to_string()))?;
    let header: TraceFileHeader = serde_json::from_str(header_line)?;

    let mut steps = Vec::with_capacity(header.step_count);
    for line in lines {
        let step: Step = serde_json::from_str(line)?;
        steps.push(step);
    }

    if steps.len() != header.step_count {
        return Err(TraceExportError::Malformed(format!(
            "header promises {} steps, file contains {}",
            header.step_count,
            steps.len()
        )));
    }

    Ok(Trace {
        algorithm: header.algorithm,
        steps,
    })
}
