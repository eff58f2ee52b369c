//! JSON workload files.
//!
//! A workload file is a JSON array of descriptor objects:
//!
//! ```json
//! [
//!   {"PID": 1, "ArrivalTime": 0, "BurstTime": 5, "Priority": 2},
//!   {"PID": 2, "ArrivalTime": 1, "BurstTime": 3, "Priority": 1}
//! ]
//! ```
//!
//! Loading only parses; validation happens when a discipline runs.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::models::Process;

/// Parses a workload from a JSON string.
pub fn from_json_str(json: &str) -> Result<Vec<Process>> {
    Ok(serde_json::from_str(json)?)
}

/// Serializes a workload as pretty-printed JSON.
pub fn to_json_string(processes: &[Process]) -> Result<String> {
    Ok(serde_json::to_string_pretty(processes)?)
}

/// Reads a workload file.
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<Process>> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let processes: Vec<Process> = serde_json::from_reader(reader)?;
    info!(path = %path.display(), count = processes.len(), "loaded workload");
    Ok(processes)
}

/// Writes a workload file, replacing any existing one.
pub fn save_file(path: impl AsRef<Path>, processes: &[Process]) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, processes)?;
    writer.flush()?;
    info!(path = %path.display(), count = processes.len(), "saved workload");
    Ok(())
}
