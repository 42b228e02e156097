// ABOUTME: Shared server state constructed once at startup
// ABOUTME: Holds the immutable corpus snapshot and effective configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Poolside Analytics

use crate::config::ServerConfig;
use crate::corpus::Corpus;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// State shared across all request handlers.
///
/// The corpus is an immutable snapshot: readers never contend and no
/// locking is needed. A future reload feature must replace the `Arc`
/// wholesale rather than mutate records in place.
#[derive(Debug)]
pub struct ServerResources {
    /// Effective server configuration
    pub config: Arc<ServerConfig>,
    /// Race-record corpus loaded at startup
    pub corpus: Arc<Corpus>,
    /// Startup instant, for uptime reporting
    started_at: Instant,
}

impl ServerResources {
    /// Bundle configuration and the loaded corpus into shared state
    #[must_use]
    pub fn new(config: ServerConfig, corpus: Corpus) -> Self {
        Self {
            config: Arc::new(config),
            corpus: Arc::new(corpus),
            started_at: Instant::now(),
        }
    }

    /// Time elapsed since startup
    #[must_use]
    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}
