//! Flat-File Log Storage
//!
//! Writes and reads the simulated process log as a flat CSV with a header
//! row. Column order on load is derived from the header, not assumed.
//! Fields in this lab never contain commas or quotes, so rows are written
//! bare; a row with the wrong field count is skipped with a warning.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use super::event::ProcessEvent;

/// Column names, in write order
const COLUMNS: [&str; 5] = [
    "timestamp",
    "hostname",
    "parent_process",
    "child_process",
    "is_suspicious",
];

/// Save events to `path`, creating the parent directory if needed.
/// Returns the number of records written.
pub fn save_events(events: &[ProcessEvent], path: &Path) -> io::Result<usize> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let mut file = File::create(path)?;
    writeln!(file, "{}", COLUMNS.join(","))?;

    for event in events {
        writeln!(
            file,
            "{},{},{},{},{}",
            event.timestamp,
            event.hostname,
            event.parent_process,
            event.child_process,
            event.is_suspicious
        )?;
    }

    file.flush()?;
    Ok(events.len())
}

/// Load events from `path`. A missing or unreadable file is a fatal error;
/// individual malformed rows are skipped with a warning.
pub fn load_events(path: &Path) -> io::Result<Vec<ProcessEvent>> {
    let file = File::open(path)?;
    let mut lines = BufReader::new(file).lines();

    let header = match lines.next() {
        Some(line) => line?,
        None => {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("{}: empty log file, no header row", path.display()),
            ))
        }
    };

    let indices = column_indices(&header).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("{}: header is missing required columns", path.display()),
        )
    })?;

    let mut events = Vec::new();
    for (line_no, line) in lines.enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        match parse_row(&line, &indices) {
            Some(event) => events.push(event),
            None => {
                // Row numbers are 1-based and the header is row 1
                log::warn!("Skipping malformed log row {}: {}", line_no + 2, line);
            }
        }
    }

    Ok(events)
}

/// Map each required column name to its position in the header
fn column_indices(header: &str) -> Option<[usize; 5]> {
    let names: Vec<&str> = header.split(',').map(str::trim).collect();
    let mut indices = [0usize; 5];
    for (slot, column) in COLUMNS.iter().enumerate() {
        indices[slot] = names.iter().position(|n| n == column)?;
    }
    Some(indices)
}

fn parse_row(line: &str, indices: &[usize; 5]) -> Option<ProcessEvent> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != COLUMNS.len() {
        return None;
    }

    let field = |slot: usize| fields.get(indices[slot]).copied();
    let is_suspicious = match field(4)? {
        "true" | "True" => true,
        "false" | "False" => false,
        _ => return None,
    };

    Some(ProcessEvent {
        timestamp: field(0)?.to_string(),
        hostname: field(1)?.to_string(),
        parent_process: field(2)?.to_string(),
        child_process: field(3)?.to_string(),
        is_suspicious,
    })
}
