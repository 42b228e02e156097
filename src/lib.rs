// ABOUTME: Main library entry point for the Poolside Analytics platform
// ABOUTME: Swim race-log ingestion, metric derivation, and coaching recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Poolside Analytics

#![deny(unsafe_code)]

//! # Poolside Analytics Server
//!
//! An analysis API for swim coaches. The server ingests a directory of
//! per-swimmer race-log files at startup, derives performance metrics
//! (pace, velocity, estimated target heart rate, predicted next-race time),
//! and serves them with a progress chart and textual coaching
//! recommendations over a small HTTP surface.
//!
//! ## Architecture
//!
//! - **Corpus**: filename-schema decoding, lap-time parsing, and one-shot
//!   directory loading into an immutable in-memory record set
//! - **Intelligence**: descriptive statistics, race-sequence trend
//!   regression, physiological heart-rate estimation, and threshold-based
//!   recommendations
//! - **Routes**: the thin axum wrapper exposing analyses, the roster, a
//!   health check, and a landing page
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use poolside_server::config::ServerConfig;
//! use poolside_server::corpus;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let corpus = corpus::load_corpus(&config.data_dir)?;
//!     println!("loaded {} race records", corpus.len());
//!     Ok(())
//! }
//! ```

/// Progress chart rendering for analysis responses
pub mod chart;

/// Environment-based configuration management
pub mod config;

/// Race-log corpus: decoding, loading, and queries
pub mod corpus;

/// Unified error handling
pub mod errors;

/// Health check payloads
pub mod health;

/// Metric derivation, statistics, and recommendations
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Race record data model
pub mod models;

/// Shared server state
pub mod resources;

/// HTTP routes
pub mod routes;
