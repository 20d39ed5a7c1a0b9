// src/api/handlers.rs

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::api::{types::*, ApiState};
use crate::core::workflow::ThemeWorkflow;

type ApiError = (StatusCode, Json<ErrorResponse>);

fn error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

/// POST /api/agent/run — Start a workflow in the background.
///
/// Returns as soon as the run is spawned; poll `/api/agent/runs/{id}` for
/// the result.
pub async fn start_run(
    State(state): State<ApiState>,
    Json(body): Json<RunRequest>,
) -> Result<Json<RunStartedResponse>, ApiError> {
    let goal = match body.goal.as_deref().map(str::trim) {
        Some(goal) if !goal.is_empty() => goal.to_string(),
        _ => return Err(error(StatusCode::BAD_REQUEST, "Goal is required")),
    };
    // Missing or zero falls back to the server default
    let iterations = body
        .iterations
        .filter(|n| *n > 0)
        .unwrap_or(state.default_iterations);

    let workflow = ThemeWorkflow::new(state.generator.clone(), state.store.clone()).map_err(|e| {
        tracing::error!("Failed to start agent: {}", e);
        error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to start agent")
    })?;

    let run_id = uuid::Uuid::new_v4().to_string();
    if let Ok(mut runs) = state.runs.lock() {
        runs.insert(RunStatus::running(&run_id, &goal, iterations));
    } else {
        return Err(error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal error: failed to record run",
        ));
    }

    tracing::info!(run_id = %run_id, iterations, "Agent started for goal: {}", goal);

    let runs = state.runs.clone();
    let id = run_id.clone();
    tokio::spawn(async move {
        let result = workflow.run(&goal, iterations).await;
        let Ok(mut runs) = runs.lock() else { return };
        let Some(status) = runs.get_mut(&id) else { return };
        match result {
            Ok(report) => {
                tracing::info!(
                    run_id = %id,
                    saved = report.saved(),
                    failed = report.failed(),
                    "Agent run finished"
                );
                status.finish(&report);
            }
            Err(e) => {
                tracing::error!(run_id = %id, "Agent run failed: {}", e);
                status.fail(e.to_string());
            }
        }
    });

    Ok(Json(RunStartedResponse {
        success: true,
        message: "Agent started".into(),
        run_id,
    }))
}

/// GET /api/agent/runs/{id} — Status of a triggered run.
pub async fn get_run(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<RunStatus>, ApiError> {
    let runs = state
        .runs
        .lock()
        .map_err(|_| error(StatusCode::INTERNAL_SERVER_ERROR, "Internal error"))?;
    let status = runs.get(&id).cloned();
    status
        .map(Json)
        .ok_or_else(|| error(StatusCode::NOT_FOUND, format!("Run '{id}' not found")))
}

/// GET /api/agent/health — Simple health check.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
