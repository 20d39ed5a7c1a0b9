// src/generator/cli.rs — External model CLI (e.g. `claude -p <prompt>`)

use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

use super::ThemeGenerator;
use crate::infra::config::GeneratorConfig;
use crate::infra::errors::TweakAgentError;
use crate::util::preview;

/// Runs `<command> <args...> <prompt>` and returns its stdout.
pub struct CliGenerator {
    command: String,
    args: Vec<String>,
}

impl CliGenerator {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(config.command.clone(), config.args.clone())
    }

    /// Whether the command resolves on PATH (or as a direct path).
    pub fn is_available(&self) -> bool {
        which::which(&self.command).is_ok()
    }

    fn unavailable(&self) -> TweakAgentError {
        TweakAgentError::GeneratorUnavailable {
            command: self.command.clone(),
        }
    }
}

#[async_trait]
impl ThemeGenerator for CliGenerator {
    fn id(&self) -> &str {
        &self.command
    }

    async fn generate(&self, prompt: &str) -> Result<String, TweakAgentError> {
        if !self.is_available() {
            return Err(self.unavailable());
        }

        tracing::info!("Calling {} with prompt: {}", self.command, preview(prompt, 50));

        let output = Command::new(&self.command)
            .args(&self.args)
            .arg(prompt)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => self.unavailable(),
                _ => TweakAgentError::Io(e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(TweakAgentError::GeneratorFailed {
                command: self.command.clone(),
                status: output.status.to_string(),
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str) -> CliGenerator {
        // `sh -c SCRIPT PROMPT` binds the prompt to $0.
        CliGenerator::new("sh", vec!["-c".into(), script.into()])
    }

    #[tokio::test]
    async fn test_prompt_passed_as_last_argument() {
        let generator = sh(r#"printf '%s' "$0""#);
        let out = generator.generate("make it teal").await.unwrap();
        assert_eq!(out, "make it teal");
    }

    #[tokio::test]
    async fn test_stdout_returned() {
        let generator = sh(r#"echo '{"name": "Teal"}'"#);
        let out = generator.generate("ignored").await.unwrap();
        assert_eq!(out.trim(), r#"{"name": "Teal"}"#);
    }

    #[tokio::test]
    async fn test_nonzero_exit_is_failure() {
        let generator = sh("echo 'not logged in' >&2; exit 3");
        let err = generator.generate("x").await.unwrap_err();
        match err {
            TweakAgentError::GeneratorFailed { stderr, status, .. } => {
                assert_eq!(stderr, "not logged in");
                assert!(status.contains('3'));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_missing_command_is_unavailable() {
        let generator = CliGenerator::new("tweak-agent-no-such-generator-xyz", vec![]);
        assert!(!generator.is_available());
        let err = generator.generate("x").await.unwrap_err();
        assert!(matches!(err, TweakAgentError::GeneratorUnavailable { .. }));
    }
}
