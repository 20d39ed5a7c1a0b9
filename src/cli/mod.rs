// src/cli/mod.rs — CLI definition (clap derive)

pub mod list;
pub mod progress;
pub mod run;
pub mod serve;

use clap::{CommandFactory, Parser};

use crate::infra::config::Config;

#[derive(Parser, Debug)]
#[command(
    name = "tweak-agent",
    about = "Generate UI color themes with a language-model CLI and save them to the theme API",
    version
)]
pub struct Cli {
    /// What the themes should look like (e.g. "ocean at dusk")
    pub goal: Option<String>,

    /// Number of variations to generate
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub iterations: Option<u32>,

    /// Theme API base URL (themes are POSTed to <url>/themes)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Generator command; the prompt is passed as its last argument
    #[arg(long)]
    pub generator: Option<String>,

    /// Use the built-in mock theme instead of calling a generator
    #[arg(long)]
    pub mock: bool,

    /// Only log warnings and errors; no per-iteration progress
    #[arg(short, long)]
    pub quiet: bool,

    /// Config file path
    #[arg(long)]
    pub config: Option<String>,

    /// List recently saved themes and exit
    #[arg(long, conflicts_with = "serve")]
    pub list: bool,

    /// Serve the HTTP trigger API instead of running once
    #[arg(long)]
    pub serve: bool,

    /// Port for --serve
    #[arg(long, requires = "serve")]
    pub port: Option<u16>,
}

impl Cli {
    /// Usage text printed when the goal is missing.
    pub fn usage() -> String {
        Cli::command().render_usage().to_string()
    }

    /// Layer command-line flags over the loaded config.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(ref url) = self.api_url {
            config.api.base_url = url.clone();
        }
        if let Some(ref command) = self.generator {
            config.generator.command = command.clone();
        }
        if self.mock {
            config.generator.mock = true;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }

    /// Iterations to run: positional argument, else the configured default.
    pub fn iterations_or(&self, config: &Config) -> u32 {
        self.iterations
            .unwrap_or(config.workflow.default_iterations)
            .max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_and_iterations() {
        let cli = Cli::try_parse_from(["tweak-agent", "ocean", "2"]).unwrap();
        assert_eq!(cli.goal.as_deref(), Some("ocean"));
        assert_eq!(cli.iterations, Some(2));
    }

    #[test]
    fn test_iterations_optional() {
        let cli = Cli::try_parse_from(["tweak-agent", "ocean"]).unwrap();
        assert_eq!(cli.iterations, None);
    }

    #[test]
    fn test_goal_optional_at_parse_time() {
        let cli = Cli::try_parse_from(["tweak-agent"]).unwrap();
        assert!(cli.goal.is_none());
    }

    #[test]
    fn test_zero_iterations_rejected() {
        assert!(Cli::try_parse_from(["tweak-agent", "ocean", "0"]).is_err());
    }

    #[test]
    fn test_non_numeric_iterations_rejected() {
        assert!(Cli::try_parse_from(["tweak-agent", "ocean", "many"]).is_err());
    }

    #[test]
    fn test_port_requires_serve() {
        assert!(Cli::try_parse_from(["tweak-agent", "--port", "9000"]).is_err());
        let cli = Cli::try_parse_from(["tweak-agent", "--serve", "--port", "9000"]).unwrap();
        assert_eq!(cli.port, Some(9000));
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "tweak-agent",
            "forest",
            "--mock",
            "--generator",
            "llm",
            "--api-url",
            "http://127.0.0.1:4000/api/agent",
        ])
        .unwrap();
        assert!(cli.mock);
        assert_eq!(cli.generator.as_deref(), Some("llm"));
        assert_eq!(
            cli.api_url.as_deref(),
            Some("http://127.0.0.1:4000/api/agent")
        );
    }

    #[test]
    fn test_apply_to_overrides_config() {
        let cli = Cli::try_parse_from([
            "tweak-agent",
            "ocean",
            "--mock",
            "--api-url",
            "http://127.0.0.1:4000/api/agent",
        ])
        .unwrap();
        let mut config = Config::default();
        cli.apply_to(&mut config);
        assert!(config.generator.mock);
        assert_eq!(config.api.base_url, "http://127.0.0.1:4000/api/agent");
        assert_eq!(config.generator.command, "claude");
    }

    #[test]
    fn test_iterations_default_from_config() {
        let cli = Cli::try_parse_from(["tweak-agent", "ocean"]).unwrap();
        let mut config = Config::default();
        assert_eq!(cli.iterations_or(&config), 1);
        config.workflow.default_iterations = 4;
        assert_eq!(cli.iterations_or(&config), 4);

        let cli = Cli::try_parse_from(["tweak-agent", "ocean", "2"]).unwrap();
        assert_eq!(cli.iterations_or(&config), 2);
    }

    #[test]
    fn test_usage_mentions_goal() {
        let usage = Cli::usage();
        assert!(usage.contains("tweak-agent"));
        assert!(usage.to_lowercase().contains("goal"));
    }
}
