// src/cli/progress.rs — Terminal progress renderer for workflow runs

use crate::core::types::WorkflowEvent;

/// Build a progress callback that writes formatted lines to stderr.
///
/// Returns a closure suitable for `ThemeWorkflow::with_progress()`.
pub fn terminal_progress() -> impl Fn(WorkflowEvent) + Send + Sync + 'static {
    move |event| eprintln!("{}", format_event(&event))
}

pub fn format_event(event: &WorkflowEvent) -> String {
    match event {
        WorkflowEvent::IterationStart { variation, total } => {
            format!("[iter {}/{}] generating...", variation, total)
        }
        WorkflowEvent::IterationEnd {
            variation,
            total,
            outcome,
        } => {
            let mark = if outcome.is_saved() { "ok" } else { "skip" };
            format!("[iter {}/{}] {:<4} {}", variation, total, mark, outcome)
        }
        WorkflowEvent::Complete {
            attempted,
            saved,
            failed,
        } => format!(
            "[done] saved={} failed={} attempted={}",
            saved, failed, attempted
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::IterationOutcome;
    use crate::store::SaveOutcome;

    #[test]
    fn test_iteration_start_format() {
        let line = format_event(&WorkflowEvent::IterationStart {
            variation: 1,
            total: 3,
        });
        assert_eq!(line, "[iter 1/3] generating...");
    }

    #[test]
    fn test_iteration_end_saved() {
        let line = format_event(&WorkflowEvent::IterationEnd {
            variation: 2,
            total: 3,
            outcome: IterationOutcome::Saved {
                name: Some("Ocean Dusk".into()),
            },
        });
        assert_eq!(line, "[iter 2/3] ok   saved 'Ocean Dusk'");
    }

    #[test]
    fn test_iteration_end_skipped() {
        let line = format_event(&WorkflowEvent::IterationEnd {
            variation: 3,
            total: 3,
            outcome: IterationOutcome::SaveFailed {
                outcome: SaveOutcome::Unreachable {
                    message: "connection refused".into(),
                },
            },
        });
        assert_eq!(line, "[iter 3/3] skip API unreachable: connection refused");
    }

    #[test]
    fn test_complete_format() {
        let line = format_event(&WorkflowEvent::Complete {
            attempted: 3,
            saved: 2,
            failed: 1,
        });
        assert_eq!(line, "[done] saved=2 failed=1 attempted=3");
    }
}
