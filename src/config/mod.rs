// ABOUTME: Configuration module for deployment-specific settings
// ABOUTME: Re-exports the environment-first server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Poolside Analytics

//! Configuration management

/// Environment-based server configuration
pub mod environment;

pub use environment::{Environment, LogLevel, ServerConfig};
