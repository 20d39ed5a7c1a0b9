// src/cli/run.rs — Default command: generate and save themes for a goal

use std::sync::Arc;

use crate::core::types::RunReport;
use crate::core::workflow::ThemeWorkflow;
use crate::generator::build_generator;
use crate::infra::config::Config;
use crate::store::{HttpThemeStore, ThemeStore};
use crate::util::truncate_str;

/// Run the workflow once against the configured generator and API.
pub async fn run_generate(
    goal: &str,
    iterations: u32,
    config: &Config,
    quiet: bool,
) -> anyhow::Result<RunReport> {
    let generator = build_generator(&config.generator);
    let store: Arc<dyn ThemeStore> = Arc::new(HttpThemeStore::new(config.api.base_url.clone()));

    if !quiet {
        eprintln!(
            "[goal] {} | generator: {} | api: {}",
            truncate_str(goal, 60),
            generator.id(),
            config.api.base_url,
        );
    }

    let mut workflow = ThemeWorkflow::new(generator, store)?;
    if !quiet {
        workflow = workflow.with_progress(super::progress::terminal_progress());
    }

    let report = workflow.run(goal, iterations).await?;
    tracing::debug!(
        saved = report.saved(),
        failed = report.failed(),
        "Workflow finished"
    );
    Ok(report)
}
