// src/core/workflow.rs — Sequential generate → extract → save driver

use std::sync::Arc;

use super::prompt::PromptBuilder;
use super::types::{IterationOutcome, RunReport, WorkflowEvent};
use crate::generator::ThemeGenerator;
use crate::infra::errors::TweakAgentError;
use crate::store::{SaveOutcome, ThemeStore};
use crate::theme::{parse_theme, ThemeError};
use crate::util::truncate_str;

// A skipped iteration is a warning unless a progress callback already shows it.
macro_rules! skipped {
    ($workflow:expr, $($arg:tt)+) => {
        if $workflow.warns_on_skip() {
            tracing::warn!($($arg)+)
        } else {
            tracing::debug!($($arg)+)
        }
    };
}

/// Drives a fixed number of theme generation cycles.
///
/// Each cycle builds a prompt, asks the generator for text, pulls a JSON
/// object out of it and hands that to the store. Any collaborator failure
/// is logged and the loop moves on; cycles never overlap.
pub struct ThemeWorkflow {
    generator: Arc<dyn ThemeGenerator>,
    store: Arc<dyn ThemeStore>,
    prompts: PromptBuilder,
    on_progress: Option<Box<dyn Fn(WorkflowEvent) + Send + Sync>>,
}

impl ThemeWorkflow {
    pub fn new(
        generator: Arc<dyn ThemeGenerator>,
        store: Arc<dyn ThemeStore>,
    ) -> Result<Self, TweakAgentError> {
        Ok(Self {
            generator,
            store,
            prompts: PromptBuilder::new()?,
            on_progress: None,
        })
    }

    /// Set a callback for per-iteration progress events.
    pub fn with_progress(mut self, cb: impl Fn(WorkflowEvent) + Send + Sync + 'static) -> Self {
        self.on_progress = Some(Box::new(cb));
        self
    }

    fn warns_on_skip(&self) -> bool {
        self.on_progress.is_none()
    }

    fn emit(&self, event: WorkflowEvent) {
        if let Some(ref cb) = self.on_progress {
            cb(event);
        }
    }

    /// Run `iterations` cycles for `goal`.
    ///
    /// Only a prompt template failure aborts the run; every collaborator
    /// failure becomes an [`IterationOutcome`].
    pub async fn run(&self, goal: &str, iterations: u32) -> Result<RunReport, TweakAgentError> {
        tracing::info!(
            generator = %self.generator.id(),
            "Starting theme workflow for goal: {}",
            goal
        );

        let mut report = RunReport::new(goal);

        for index in 0..iterations {
            let variation = index + 1;
            self.emit(WorkflowEvent::IterationStart {
                variation,
                total: iterations,
            });

            let outcome = self.run_iteration(goal, variation).await?;

            self.emit(WorkflowEvent::IterationEnd {
                variation,
                total: iterations,
                outcome: outcome.clone(),
            });
            report.record(outcome);
        }

        self.emit(WorkflowEvent::Complete {
            attempted: report.attempted(),
            saved: report.saved(),
            failed: report.failed(),
        });

        Ok(report)
    }

    async fn run_iteration(
        &self,
        goal: &str,
        variation: u32,
    ) -> Result<IterationOutcome, TweakAgentError> {
        let prompt = self.prompts.build(goal, variation)?;

        // 1. Generate
        let text = match self.generator.generate(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                skipped!(self, iteration = variation, "Generation failed: {}", e);
                return Ok(IterationOutcome::GenerationFailed {
                    reason: e.to_string(),
                });
            }
        };
        if text.trim().is_empty() {
            skipped!(self, iteration = variation, "Generator returned empty output");
            return Ok(IterationOutcome::EmptyOutput);
        }

        // 2. Extract & parse
        let theme = match parse_theme(&text) {
            Ok(theme) => theme,
            Err(ThemeError::NoJson) => {
                skipped!(self, iteration = variation, "Could not find JSON in response");
                return Ok(IterationOutcome::NoJson);
            }
            Err(e) => {
                skipped!(
                    self,
                    iteration = variation,
                    "Failed to decode JSON from response: {}",
                    e
                );
                return Ok(IterationOutcome::InvalidJson {
                    reason: e.to_string(),
                });
            }
        };

        // 3. Save
        let name = theme.name().map(str::to_string);
        let outcome = self.store.save(&theme).await;
        if outcome.is_success() {
            tracing::info!(iteration = variation, "Saved theme '{}'", theme.display_name());
            return Ok(IterationOutcome::Saved { name });
        }
        match &outcome {
            SaveOutcome::Rejected { status, body } => {
                skipped!(
                    self,
                    iteration = variation,
                    status = *status,
                    "Failed to save theme: {}",
                    truncate_str(body, 200)
                );
            }
            SaveOutcome::Unreachable { message } => {
                skipped!(self, iteration = variation, "API connection error: {}", message);
            }
            SaveOutcome::Saved => {}
        }
        Ok(IterationOutcome::SaveFailed { outcome })
    }
}
