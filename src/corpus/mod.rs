// ABOUTME: In-memory race-record corpus and its loading pipeline
// ABOUTME: Immutable snapshot built once at startup, queried per request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Poolside Analytics

//! # Race-log corpus
//!
//! The corpus is the full in-memory set of decoded race records for all
//! swimmers, built once at startup and shared read-only behind an `Arc`
//! for the lifetime of the process. Any future reload must publish a new
//! snapshot wholesale rather than mutate records in place.

/// Filename decoding and record construction
pub mod decoder;
/// Directory scanning and corpus assembly
pub mod loader;
/// Best-effort lap-time parsing
pub mod time;

pub use decoder::{decode_record, RaceLogName};
pub use loader::load_corpus;
pub use time::parse_lap_time;

use crate::models::RaceRecord;
use std::collections::BTreeSet;

/// The full in-memory set of decoded race records, in explicit race order
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    records: Vec<RaceRecord>,
}

impl Corpus {
    /// Wrap an already-ordered record sequence
    #[must_use]
    pub fn new(records: Vec<RaceRecord>) -> Self {
        Self { records }
    }

    /// All records, in race-sequence order
    #[must_use]
    pub fn records(&self) -> &[RaceRecord] {
        &self.records
    }

    /// Records belonging to one swimmer, preserving corpus order.
    ///
    /// Matching is exact on the swimmer token: any two files with the same
    /// token belong to the same swimmer.
    #[must_use]
    pub fn records_for(&self, swimmer: &str) -> Vec<&RaceRecord> {
        self.records
            .iter()
            .filter(|record| record.swimmer == swimmer)
            .collect()
    }

    /// Distinct swimmer names, sorted
    #[must_use]
    pub fn swimmers(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|record| record.swimmer.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Number of records in the corpus
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the corpus holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(swimmer: &str, source: &str) -> RaceRecord {
        RaceRecord::new(
            swimmer,
            16,
            50,
            "Freestyle",
            vec![30.0, 31.0],
            Utc::now(),
            source,
        )
    }

    #[test]
    fn test_records_for_preserves_order_and_filters() {
        let corpus = Corpus::new(vec![
            record("Alice", "a1.txt"),
            record("Bob", "b1.txt"),
            record("Alice", "a2.txt"),
        ]);

        let alice = corpus.records_for("Alice");
        assert_eq!(alice.len(), 2);
        assert_eq!(alice[0].source, "a1.txt");
        assert_eq!(alice[1].source, "a2.txt");
        assert!(corpus.records_for("Carol").is_empty());
    }

    #[test]
    fn test_swimmers_distinct_sorted() {
        let corpus = Corpus::new(vec![
            record("Bob", "b1.txt"),
            record("Alice", "a1.txt"),
            record("Bob", "b2.txt"),
        ]);
        assert_eq!(corpus.swimmers(), vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_swimmer_match_is_exact() {
        let corpus = Corpus::new(vec![record("Alice", "a1.txt")]);
        assert!(corpus.records_for("alice").is_empty());
    }
}
