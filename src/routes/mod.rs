// ABOUTME: HTTP route modules
// ABOUTME: Re-exports the analysis route builder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Poolside Analytics

//! HTTP routes

/// Swimmer analysis and roster endpoints plus the landing page
pub mod analysis;

pub use analysis::AnalysisRoutes;
