// ABOUTME: Server health monitoring payloads for operational visibility
// ABOUTME: Reports service status, uptime, and corpus size
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Poolside Analytics

//! Health check payloads

use crate::resources::ServerResources;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Overall health status
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Service up and serving data
    Healthy,
    /// Service up but the corpus is empty
    Degraded,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: HealthStatus,
    /// Service information
    pub service: ServiceInfo,
    /// Number of race records in the loaded corpus
    pub corpus_records: usize,
    /// Response timestamp (seconds since the Unix epoch)
    pub timestamp: u64,
}

/// Service information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    /// Service name
    pub name: String,
    /// Service version
    pub version: String,
    /// Environment (development, production, testing)
    pub environment: String,
    /// Service uptime in seconds
    pub uptime_seconds: u64,
}

impl HealthResponse {
    /// Snapshot the service's current health
    #[must_use]
    pub fn from_resources(resources: &ServerResources) -> Self {
        let status = if resources.corpus.is_empty() {
            HealthStatus::Degraded
        } else {
            HealthStatus::Healthy
        };

        Self {
            status,
            service: ServiceInfo {
                name: "poolside-server".to_owned(),
                version: env!("CARGO_PKG_VERSION").to_owned(),
                environment: resources.config.environment.to_string(),
                uptime_seconds: resources.uptime().as_secs(),
            },
            corpus_records: resources.corpus.len(),
            timestamp: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map_or(0, |elapsed| elapsed.as_secs()),
        }
    }
}
