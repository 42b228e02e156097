// ABOUTME: Swimmer analysis routes: roster listing, per-swimmer analysis, landing page
// ABOUTME: Thin HTTP wrapper over the corpus, metrics engine, and recommendation engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Poolside Analytics

//! Swimmer Analysis Routes
//!
//! ## Endpoints
//!
//! - `GET /` - Landing page for coaches
//! - `GET /health` - Service health
//! - `GET /api/swimmers` - List swimmers known to the corpus
//! - `GET /api/swimmers/{name}/analysis` - Metrics, remarks, and chart for one swimmer

use crate::chart::render_progress_chart;
use crate::errors::{AppError, AppResult};
use crate::health::HealthResponse;
use crate::intelligence::{MetricsEngine, MetricsSnapshot, RecommendationEngine};
use crate::resources::ServerResources;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Routes for swimmer analysis
pub struct AnalysisRoutes;

/// Response listing the swimmers present in the corpus
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwimmerListResponse {
    /// Distinct swimmer names, sorted
    pub swimmers: Vec<String>,
}

/// Full analysis payload for one swimmer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwimmerAnalysisResponse {
    /// Derived performance metrics, rounded for presentation
    pub metrics: MetricsSnapshot,
    /// Pacing-consistency remark
    pub general_remark: String,
    /// Threshold-triggered coaching suggestions, in evaluation order
    pub specific_remarks: Vec<String>,
    /// Swimmer age in years
    pub age: u32,
    /// Progress chart as an embeddable data URI
    pub chart: String,
}

impl AnalysisRoutes {
    /// Create all analysis routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/", get(Self::handle_index))
            .route("/health", get(Self::handle_health))
            .route("/api/swimmers", get(Self::handle_list_swimmers))
            .route(
                "/api/swimmers/{name}/analysis",
                get(Self::handle_swimmer_analysis),
            )
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .with_state(resources)
    }

    /// Run the full analysis pipeline for one swimmer against the corpus.
    ///
    /// This is the query interface the HTTP layer wraps: filter the corpus,
    /// derive metrics, generate recommendations, render the chart.
    ///
    /// # Errors
    ///
    /// Returns a `SWIMMER_NOT_FOUND` error when the swimmer has no records,
    /// and a `RENDER_ERROR` when chart rendering fails.
    pub fn analyze_swimmer(
        resources: &ServerResources,
        name: &str,
    ) -> AppResult<SwimmerAnalysisResponse> {
        let records = resources.corpus.records_for(name);
        let metrics = MetricsEngine::compute(name, &records)?;
        let recommendations = RecommendationEngine::recommend(&metrics.snapshot, &metrics.raw);
        let chart = render_progress_chart(name, &records)?;

        Ok(SwimmerAnalysisResponse {
            metrics: metrics.snapshot,
            general_remark: recommendations.general_remark,
            specific_remarks: recommendations.specific_remarks,
            age: metrics.age,
            chart,
        })
    }

    /// Handle the landing page
    async fn handle_index() -> Html<&'static str> {
        Html(INDEX_PAGE)
    }

    /// Handle the health check
    async fn handle_health(State(resources): State<Arc<ServerResources>>) -> Response {
        Json(HealthResponse::from_resources(&resources)).into_response()
    }

    /// Handle listing the known swimmers
    async fn handle_list_swimmers(State(resources): State<Arc<ServerResources>>) -> Response {
        let response = SwimmerListResponse {
            swimmers: resources.corpus.swimmers(),
        };
        (StatusCode::OK, Json(response)).into_response()
    }

    /// Handle the per-swimmer analysis request
    async fn handle_swimmer_analysis(
        State(resources): State<Arc<ServerResources>>,
        Path(name): Path<String>,
    ) -> Result<Response, AppError> {
        let analysis = Self::analyze_swimmer(&resources, &name)?;

        tracing::info!(
            swimmer = %name,
            remarks = analysis.specific_remarks.len(),
            "served swimmer analysis"
        );

        Ok((StatusCode::OK, Json(analysis)).into_response())
    }
}

/// Landing page for coaches: pick a swimmer, fetch the analysis, show the chart
const INDEX_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Poolside Analytics</title>
  <style>
    body { font-family: sans-serif; margin: 2rem auto; max-width: 70rem; color: #123; }
    select, button { font-size: 1rem; padding: 0.3rem 0.6rem; }
    img { max-width: 100%; margin-top: 1rem; }
    table { border-collapse: collapse; margin-top: 1rem; }
    td, th { border: 1px solid #9ab; padding: 0.3rem 0.8rem; text-align: left; }
    ul { margin-top: 1rem; }
  </style>
</head>
<body>
  <h1>Poolside Analytics</h1>
  <p>
    <select id="swimmer"></select>
    <button onclick="analyze()">Analyze</button>
  </p>
  <div id="result"></div>
  <script>
    async function loadSwimmers() {
      const res = await fetch('/api/swimmers');
      const data = await res.json();
      const select = document.getElementById('swimmer');
      for (const name of data.swimmers) {
        const option = document.createElement('option');
        option.value = name;
        option.textContent = name;
        select.appendChild(option);
      }
    }
    async function analyze() {
      const name = document.getElementById('swimmer').value;
      const target = document.getElementById('result');
      const res = await fetch('/api/swimmers/' + encodeURIComponent(name) + '/analysis');
      if (!res.ok) {
        const failure = await res.json();
        target.textContent = failure.error.message;
        return;
      }
      const data = await res.json();
      const rows = Object.entries(data.metrics)
        .map(([k, v]) => '<tr><th>' + k + '</th><td>' + v + '</td></tr>')
        .join('');
      const remarks = data.specificRemarks.map(r => '<li>' + r + '</li>').join('');
      target.innerHTML =
        '<table>' + rows + '<tr><th>age</th><td>' + data.age + '</td></tr></table>' +
        '<p>' + data.generalRemark + '</p>' +
        '<ul>' + remarks + '</ul>' +
        '<img src="' + data.chart + '" alt="progress chart">';
    }
    loadSwimmers();
  </script>
</body>
</html>
"#;
