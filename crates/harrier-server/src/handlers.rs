//! Request handlers for the dashboard.

use crate::AppState;
use crate::error::ApiError;
use crate::ui;
use axum::Json;
use axum::extract::State;
use axum::response::Html;
use chrono::{DateTime, Utc};
use harrier_slurm::{sacct, sinfo, squeue};
use harrier_tabular::Table;
use serde::Serialize;

/// A parsed table plus the time it was fetched.
#[derive(Debug, Serialize)]
pub struct TableResponse {
    pub fetched_at: DateTime<Utc>,
    #[serde(flatten)]
    pub table: Table,
}

impl TableResponse {
    fn now(table: Table) -> Self {
        Self {
            fetched_at: Utc::now(),
            table,
        }
    }
}

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(ui::render_index(&state.root_path))
}

pub async fn healthz() -> &'static str {
    "ok"
}

/// The current user's queued and running jobs.
pub async fn running_jobs(
    State(state): State<AppState>,
) -> Result<Json<TableResponse>, ApiError> {
    let table = squeue::query_squeue(&state.client).await?;
    Ok(Json(TableResponse::now(table)))
}

/// Accounting history for the current user's past jobs.
pub async fn history_jobs(
    State(state): State<AppState>,
) -> Result<Json<TableResponse>, ApiError> {
    let table = sacct::query_sacct(&state.client).await?;
    Ok(Json(TableResponse::now(table)))
}

/// Node and partition inventory for the whole cluster.
pub async fn cluster(State(state): State<AppState>) -> Result<Json<TableResponse>, ApiError> {
    let table = sinfo::query_sinfo(&state.client).await?;
    Ok(Json(TableResponse::now(table)))
}
