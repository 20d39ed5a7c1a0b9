// src/main.rs — tweak-agent entry point

use clap::Parser;

use tweak_agent::cli::Cli;
use tweak_agent::infra::config::Config;
use tweak_agent::infra::logger;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Respects RUST_LOG when set
    logger::init_logging(if cli.quiet { "warn" } else { "info" });

    if let Err(e) = run(cli).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Load config (falls back to defaults if no config.toml)
    let mut config = if let Some(ref path) = cli.config {
        Config::load_from(std::path::Path::new(path))?.with_env_overrides()
    } else {
        Config::load()?
    };
    cli.apply_to(&mut config);

    if cli.serve {
        return tweak_agent::cli::serve::run_serve(&config).await;
    }
    if cli.list {
        return tweak_agent::cli::list::run_list(&config).await;
    }

    let Some(goal) = cli.goal.as_deref().map(str::trim).filter(|g| !g.is_empty()) else {
        eprintln!("{}", Cli::usage());
        std::process::exit(1);
    };

    let iterations = cli.iterations_or(&config);
    tweak_agent::cli::run::run_generate(goal, iterations, &config, cli.quiet).await?;
    Ok(())
}
