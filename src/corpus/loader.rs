// ABOUTME: One-shot corpus loading from a directory of race-log files
// ABOUTME: Per-file failures are skipped with diagnostics; ordering is explicit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Poolside Analytics

//! Corpus loading.
//!
//! The loader scans a single directory (non-recursive) for `.txt` race
//! logs, decodes each into a [`RaceRecord`](crate::models::RaceRecord), and
//! publishes the result as an immutable [`Corpus`]. A file that fails to
//! decode is skipped with a warning; one malformed file never erases the
//! dataset.
//!
//! Record ordering is explicit: the corpus is sorted by file modification
//! time with the file name as tiebreaker, so the race sequence the trend
//! regression sees is stable across platforms instead of inheriting
//! directory-enumeration order.

use crate::corpus::decoder::decode_record;
use crate::corpus::Corpus;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use std::time::UNIX_EPOCH;
use tracing::{info, warn};

/// File extension recognized as a race log
const RACE_LOG_EXTENSION: &str = "txt";

/// Load every race log in `dir` into an in-memory corpus.
///
/// Runs once at startup, synchronously. Files without the `.txt` extension
/// are ignored; files that fail decoding are skipped with a diagnostic.
///
/// # Errors
///
/// Returns a `CONFIG_ERROR` when the directory itself cannot be read.
pub fn load_corpus(dir: &Path) -> AppResult<Corpus> {
    let entries = fs::read_dir(dir).map_err(|e| {
        AppError::config(format!(
            "cannot read race-log directory '{}': {e}",
            dir.display()
        ))
        .with_source(e)
    })?;

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "skipping unreadable directory entry");
                skipped += 1;
                continue;
            }
        };

        let path = entry.path();
        if !path.is_file() || path.extension().and_then(OsStr::to_str) != Some(RACE_LOG_EXTENSION)
        {
            continue;
        }
        let Some(file_name) = path.file_name().and_then(OsStr::to_str) else {
            warn!(path = %path.display(), "skipping race log with non-UTF-8 name");
            skipped += 1;
            continue;
        };

        let body = match fs::read_to_string(&path) {
            Ok(body) => body,
            Err(e) => {
                warn!(file = %file_name, error = %e, "skipping unreadable race log");
                skipped += 1;
                continue;
            }
        };

        match decode_record(file_name, &body, modified_at(&path)) {
            Ok(record) => records.push(record),
            Err(e) => {
                warn!(file = %file_name, error = %e, "skipping malformed race log");
                skipped += 1;
            }
        }
    }

    // Explicit race-sequence ordering: modification time, then file name.
    records.sort_by(|a, b| {
        a.recorded_at
            .cmp(&b.recorded_at)
            .then_with(|| a.source.cmp(&b.source))
    });

    info!(
        loaded = records.len(),
        skipped, "race-log corpus loaded from {}", dir.display()
    );

    Ok(Corpus::new(records))
}

/// Modification time of a race log; epoch when the filesystem withholds it,
/// so the name tiebreaker decides the order.
fn modified_at(path: &Path) -> DateTime<Utc> {
    path.metadata()
        .and_then(|meta| meta.modified())
        .map_or_else(|_| DateTime::<Utc>::from(UNIX_EPOCH), DateTime::<Utc>::from)
}
