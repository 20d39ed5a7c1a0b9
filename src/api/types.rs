// src/api/types.rs

use serde::{Deserialize, Serialize};

use crate::core::types::RunReport;

/// Request body for `POST /api/agent/run`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunRequest {
    #[serde(default)]
    pub goal: Option<String>,
    #[serde(default)]
    pub iterations: Option<u32>,
}

/// Response for an accepted run.
#[derive(Debug, Serialize, Deserialize)]
pub struct RunStartedResponse {
    pub success: bool,
    pub message: String,
    pub run_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunState {
    Running,
    Finished,
    Failed,
}

/// Status of a triggered run, as returned by `GET /api/agent/runs/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunStatus {
    pub run_id: String,
    pub goal: String,
    pub iterations: u32,
    pub state: RunState,
    pub saved: usize,
    pub failed: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RunStatus {
    pub fn running(run_id: &str, goal: &str, iterations: u32) -> Self {
        Self {
            run_id: run_id.to_string(),
            goal: goal.to_string(),
            iterations,
            state: RunState::Running,
            saved: 0,
            failed: 0,
            error: None,
        }
    }

    pub fn finish(&mut self, report: &RunReport) {
        self.state = RunState::Finished;
        self.saved = report.saved();
        self.failed = report.failed();
    }

    pub fn fail(&mut self, error: String) {
        self.state = RunState::Failed;
        self.error = Some(error);
    }
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
