// src/generator/fallback.rs — Fall back to another generator when the primary is missing

use async_trait::async_trait;
use std::sync::Arc;

use super::ThemeGenerator;
use crate::infra::errors::TweakAgentError;

pub struct FallbackGenerator {
    primary: Arc<dyn ThemeGenerator>,
    fallback: Arc<dyn ThemeGenerator>,
}

impl FallbackGenerator {
    pub fn new(primary: Arc<dyn ThemeGenerator>, fallback: Arc<dyn ThemeGenerator>) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl ThemeGenerator for FallbackGenerator {
    fn id(&self) -> &str {
        self.primary.id()
    }

    /// Only `GeneratorUnavailable` triggers the fallback. A tool that runs and
    /// fails is reported as-is.
    async fn generate(&self, prompt: &str) -> Result<String, TweakAgentError> {
        match self.primary.generate(prompt).await {
            Err(TweakAgentError::GeneratorUnavailable { command }) => {
                tracing::warn!(
                    generator = %command,
                    fallback = %self.fallback.id(),
                    "Generator not found, using fallback response"
                );
                self.fallback.generate(prompt).await
            }
            other => other,
        }
    }
}
