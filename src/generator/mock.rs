// src/generator/mock.rs — Offline generator producing a fixed-schema theme

use async_trait::async_trait;

use super::ThemeGenerator;
use crate::infra::errors::TweakAgentError;
use crate::theme::mock::{mock_theme, random_theme_number};
use crate::theme::ThemeError;

/// Ignores the prompt and returns a valid theme as pretty-printed JSON.
#[derive(Debug, Default)]
pub struct MockGenerator;

impl MockGenerator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ThemeGenerator for MockGenerator {
    fn id(&self) -> &str {
        "mock"
    }

    async fn generate(&self, _prompt: &str) -> Result<String, TweakAgentError> {
        let theme = mock_theme(random_theme_number());
        let text = serde_json::to_string_pretty(&theme).map_err(ThemeError::from)?;
        Ok(text)
    }
}
