// src/store/http.rs — REST client for `<base-url>/themes`

use async_trait::async_trait;
use reqwest::StatusCode;

use super::{SaveOutcome, StoredTheme, ThemeList, ThemeStore};
use crate::infra::errors::TweakAgentError;
use crate::theme::Theme;

pub struct HttpThemeStore {
    base_url: String,
    client: reqwest::Client,
}

impl HttpThemeStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn themes_url(&self) -> String {
        format!("{}/themes", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ThemeStore for HttpThemeStore {
    async fn save(&self, theme: &Theme) -> SaveOutcome {
        let url = self.themes_url();
        tracing::debug!("POST {}", url);

        let resp = match self.client.post(&url).json(theme).send().await {
            Ok(resp) => resp,
            Err(e) => {
                return SaveOutcome::Unreachable {
                    message: e.to_string(),
                }
            }
        };

        let status = resp.status();
        if status == StatusCode::OK {
            return SaveOutcome::Saved;
        }

        let body = resp.text().await.unwrap_or_default();
        SaveOutcome::Rejected {
            status: status.as_u16(),
            body,
        }
    }

    async fn list_recent(&self) -> Result<Vec<StoredTheme>, TweakAgentError> {
        let resp = self.client.get(self.themes_url()).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(TweakAgentError::ApiStatus {
                status: status.as_u16(),
                body,
            });
        }

        let list: ThemeList = resp.json().await?;
        Ok(list.themes)
    }
}
