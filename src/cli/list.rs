// src/cli/list.rs — `--list`: print recently saved theme names

use crate::infra::config::Config;
use crate::store::{HttpThemeStore, ThemeStore};

pub async fn run_list(config: &Config) -> anyhow::Result<()> {
    let store = HttpThemeStore::new(config.api.base_url.clone());
    let themes = store.list_recent().await?;

    if themes.is_empty() {
        eprintln!("No themes saved yet.");
        return Ok(());
    }

    for theme in &themes {
        println!("{}", theme.name);
    }
    Ok(())
}
