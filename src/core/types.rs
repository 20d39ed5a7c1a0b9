// src/core/types.rs — Workflow domain types

use std::fmt;

use crate::store::SaveOutcome;

/// What happened in one generate-then-save cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IterationOutcome {
    /// The API accepted the theme.
    Saved { name: Option<String> },
    /// The generator errored (non-zero exit, spawn failure, ...).
    GenerationFailed { reason: String },
    /// The generator succeeded but printed nothing.
    EmptyOutput,
    /// No `{` ... `}` span in the output.
    NoJson,
    /// The span did not parse.
    InvalidJson { reason: String },
    /// A theme was parsed but the API did not accept it.
    SaveFailed { outcome: SaveOutcome },
}

impl IterationOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, IterationOutcome::Saved { .. })
    }

    /// Whether the persistence collaborator was called for this iteration.
    pub fn save_attempted(&self) -> bool {
        matches!(
            self,
            IterationOutcome::Saved { .. } | IterationOutcome::SaveFailed { .. }
        )
    }
}

impl fmt::Display for IterationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IterationOutcome::Saved { name } => {
                write!(f, "saved '{}'", name.as_deref().unwrap_or("<unnamed>"))
            }
            IterationOutcome::GenerationFailed { reason } => {
                write!(f, "generation failed: {reason}")
            }
            IterationOutcome::EmptyOutput => write!(f, "empty output"),
            IterationOutcome::NoJson => write!(f, "no JSON in response"),
            IterationOutcome::InvalidJson { reason } => write!(f, "invalid JSON: {reason}"),
            IterationOutcome::SaveFailed { outcome } => match outcome {
                SaveOutcome::Rejected { status, .. } => write!(f, "save rejected ({status})"),
                SaveOutcome::Unreachable { message } => write!(f, "API unreachable: {message}"),
                SaveOutcome::Saved => write!(f, "saved"),
            },
        }
    }
}

/// Summary of a whole run, one outcome per attempted iteration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub goal: String,
    pub outcomes: Vec<IterationOutcome>,
}

impl RunReport {
    pub fn new(goal: impl Into<String>) -> Self {
        Self {
            goal: goal.into(),
            outcomes: Vec::new(),
        }
    }

    pub fn record(&mut self, outcome: IterationOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn attempted(&self) -> usize {
        self.outcomes.len()
    }

    pub fn saved(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_saved()).count()
    }

    pub fn failed(&self) -> usize {
        self.attempted() - self.saved()
    }

    pub fn save_attempts(&self) -> usize {
        self.outcomes.iter().filter(|o| o.save_attempted()).count()
    }
}

/// Progress events emitted by the workflow.
#[derive(Debug, Clone)]
pub enum WorkflowEvent {
    IterationStart {
        variation: u32,
        total: u32,
    },
    IterationEnd {
        variation: u32,
        total: u32,
        outcome: IterationOutcome,
    },
    Complete {
        attempted: usize,
        saved: usize,
        failed: usize,
    },
}
