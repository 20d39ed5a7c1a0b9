// src/cli/serve.rs — `--serve`: run the HTTP trigger API

use crate::api::{self, ApiState};
use crate::infra::config::Config;

pub async fn run_serve(config: &Config) -> anyhow::Result<()> {
    let state = ApiState::new(config.clone());
    api::start_server(&config.server, state).await
}
