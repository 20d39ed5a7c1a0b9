// src/generator/mod.rs — Text generation collaborators

pub mod cli;
pub mod fallback;
pub mod mock;

use async_trait::async_trait;
use std::sync::Arc;

use crate::infra::config::GeneratorConfig;
use crate::infra::errors::TweakAgentError;

pub use cli::CliGenerator;
pub use fallback::FallbackGenerator;
pub use mock::MockGenerator;

/// Turns a prompt into free-form text that should contain a theme object.
#[async_trait]
pub trait ThemeGenerator: Send + Sync {
    fn id(&self) -> &str;

    async fn generate(&self, prompt: &str) -> Result<String, TweakAgentError>;
}

/// Build the generator chain described by `[generator]`.
///
/// `mock = true` skips the external tool. Otherwise the configured command
/// is tried first and the mock stands in whenever it cannot be found.
pub fn build_generator(config: &GeneratorConfig) -> Arc<dyn ThemeGenerator> {
    if config.mock {
        tracing::debug!("Using built-in mock generator");
        return Arc::new(MockGenerator::new());
    }
    let primary = Arc::new(CliGenerator::from_config(config));
    Arc::new(FallbackGenerator::new(primary, Arc::new(MockGenerator::new())))
}
