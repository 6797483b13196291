use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::Path;

use super::application::{Application, SnapshotError};
use super::domain::ApplicationSnapshot;

/// File-level persistence failure. One malformed record anywhere aborts the
/// whole load; partial rosters are never returned.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("unable to load file: {source}")]
    Load { source: io::Error },
    #[error("unable to save file: {source}")]
    Save { source: io::Error },
    #[error("unable to load file: line {line}: {reason}")]
    Malformed { line: usize, reason: String },
    #[error("unable to load file: {0}")]
    Snapshot(#[from] SnapshotError),
}

const HEADER_FIELDS: usize = 7;

/// Read a roster from a file. See [`read_from`] for the format.
pub fn load_file(path: &Path) -> Result<Vec<Application>, CodecError> {
    let file = File::open(path).map_err(|source| CodecError::Load { source })?;
    read_from(BufReader::new(file))
}

/// Parse a roster from any reader.
///
/// A record is a `*`-prefixed header line carrying exactly seven
/// comma-separated fields (id, phase, classification, summary, reviewer,
/// paperwork flag, resolution) followed by one or more `-`-prefixed note
/// lines. Each record is rehydrated through the full snapshot validation.
pub fn read_from(reader: impl Read) -> Result<Vec<Application>, CodecError> {
    let mut applications = Vec::new();
    let mut current: Option<ApplicationSnapshot> = None;

    for (index, line) in BufReader::new(reader).lines().enumerate() {
        let line = line.map_err(|source| CodecError::Load { source })?;
        let number = index + 1;

        if let Some(header) = line.strip_prefix('*') {
            if let Some(snapshot) = current.take() {
                applications.push(Application::from_snapshot(snapshot)?);
            }
            current = Some(parse_header(header, number)?);
        } else if let Some(note) = line.strip_prefix('-') {
            let Some(snapshot) = current.as_mut() else {
                return Err(CodecError::Malformed {
                    line: number,
                    reason: "note line before any record header".to_owned(),
                });
            };
            snapshot.notes.push(note.to_owned());
        } else if line.is_empty() {
            continue;
        } else {
            return Err(CodecError::Malformed {
                line: number,
                reason: "expected a '*' header or a '-' note line".to_owned(),
            });
        }
    }

    if let Some(snapshot) = current.take() {
        applications.push(Application::from_snapshot(snapshot)?);
    }
    Ok(applications)
}

fn parse_header(header: &str, line: usize) -> Result<ApplicationSnapshot, CodecError> {
    let fields: Vec<&str> = header.split(',').collect();
    if fields.len() != HEADER_FIELDS {
        return Err(CodecError::Malformed {
            line,
            reason: format!(
                "expected {HEADER_FIELDS} header fields, found {}",
                fields.len()
            ),
        });
    }

    let id = fields[0].parse::<u32>().map_err(|_| CodecError::Malformed {
        line,
        reason: format!("invalid application id: {}", fields[0]),
    })?;
    let paperwork_processed = match fields[5] {
        "true" => true,
        "false" => false,
        other => {
            return Err(CodecError::Malformed {
                line,
                reason: format!("invalid paperwork flag: {other}"),
            })
        }
    };

    Ok(ApplicationSnapshot {
        id,
        phase: fields[1].to_owned(),
        classification: fields[2].to_owned(),
        summary: fields[3].to_owned(),
        reviewer: fields[4].to_owned(),
        paperwork_processed,
        resolution: fields[6].to_owned(),
        notes: Vec::new(),
    })
}

/// Write a roster to a file in ascending id order.
pub fn save_file(path: &Path, applications: &[Application]) -> Result<(), CodecError> {
    let file = File::create(path).map_err(|source| CodecError::Save { source })?;
    write_to(file, applications)
}

/// Serialize every application to the writer, one record per application,
/// ascending by id.
pub fn write_to(mut writer: impl Write, applications: &[Application]) -> Result<(), CodecError> {
    let mut ordered: Vec<&Application> = applications.iter().collect();
    ordered.sort_by_key(|application| application.id());

    for application in ordered {
        writer
            .write_all(application.serialize().as_bytes())
            .and_then(|()| writer.write_all(b"\n"))
            .map_err(|source| CodecError::Save { source })?;
    }
    writer.flush().map_err(|source| CodecError::Save { source })
}
