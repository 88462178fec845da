//! Request handlers for the review console.

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Json};
use serde::Deserialize;
use tracing::warn;
use url::Url;

use super::templates;
use super::AppState;
use crate::documents::resolve_attachments;
use crate::models::{Complaint, StatusSummary};

/// Stylesheet served at /static/style.css.
const STYLESHEET: &str = include_str!("style.css");

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    /// Runtime override of the configured API base.
    pub api_base: Option<String>,
}

/// Accept an API base override only if it parses as an http(s) URL.
fn validated_base(state: &AppState, requested: Option<&str>) -> String {
    match requested {
        Some(raw) if !raw.trim().is_empty() => match Url::parse(raw.trim()) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {
                raw.trim().to_string()
            }
            _ => {
                warn!("Ignoring invalid api_base override: {}", raw);
                state.client.api_base().to_string()
            }
        },
        _ => state.client.api_base().to_string(),
    }
}

/// Dashboard page: fetch the complaint list, compute the status summary,
/// and render the expandable table.
///
/// On fetch failure the previously loaded list stays on screen under an
/// error banner; it is only replaced by a successful refresh.
pub async fn dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Html<String> {
    let api_base = validated_base(&state, query.api_base.as_deref());
    let client = state.client.with_api_base(&api_base);

    let (complaints, error) = match client.fetch_complaints().await {
        Ok(complaints) => {
            *state.snapshot.write().await = complaints.clone();
            (complaints, None)
        }
        Err(err) => {
            warn!("Complaint fetch failed: {}", err);
            (state.snapshot.read().await.clone(), Some(err.to_string()))
        }
    };

    let summary = StatusSummary::summarize(&complaints);
    let rows: Vec<_> = complaints
        .into_iter()
        .map(|complaint: Complaint| {
            let attachments = resolve_attachments(&complaint.documents, &api_base);
            (complaint, attachments)
        })
        .collect();

    let mut content = String::new();
    if let Some(message) = error {
        content.push_str(&templates::error_banner(&message));
    }
    content.push_str(&templates::stats_cards(&summary));
    content.push_str(&templates::complaints_table(&rows));

    Html(templates::base_template("Complaints", &api_base, &content))
}

/// Aggregate counts as JSON, for scripted consumers.
pub async fn stats_json(State(state): State<AppState>) -> impl IntoResponse {
    match state.client.fetch_complaints().await {
        Ok(complaints) => {
            *state.snapshot.write().await = complaints.clone();
            Json(StatusSummary::summarize(&complaints)).into_response()
        }
        Err(err) => {
            warn!("Complaint fetch failed: {}", err);
            (StatusCode::BAD_GATEWAY, err.to_string()).into_response()
        }
    }
}

/// Serve the embedded stylesheet.
pub async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET)
}
