// src/store/mod.rs — Persistence collaborator (remote theme API)

pub mod http;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::infra::errors::TweakAgentError;
use crate::theme::Theme;

pub use http::HttpThemeStore;

/// Result of one save attempt. Failures are values, not errors: the
/// workflow records them and moves on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// The API answered with something other than 200.
    Rejected { status: u16, body: String },
    /// The request never got a response.
    Unreachable { message: String },
}

impl SaveOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SaveOutcome::Saved)
    }
}

/// A theme as listed by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredTheme {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ThemeList {
    #[serde(default)]
    pub themes: Vec<StoredTheme>,
}

#[async_trait]
pub trait ThemeStore: Send + Sync {
    async fn save(&self, theme: &Theme) -> SaveOutcome;

    /// Most recently updated themes, newest first.
    async fn list_recent(&self) -> Result<Vec<StoredTheme>, TweakAgentError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_saved_is_success() {
        assert!(SaveOutcome::Saved.is_success());
        assert!(!SaveOutcome::Rejected {
            status: 201,
            body: String::new()
        }
        .is_success());
        assert!(!SaveOutcome::Unreachable {
            message: "refused".into()
        }
        .is_success());
    }

    #[test]
    fn test_theme_list_ignores_extra_fields() {
        let list: ThemeList = serde_json::from_str(
            r#"{"themes": [{"id": "t1", "name": "Ocean", "styles": {}, "userId": "u"}]}"#,
        )
        .unwrap();
        assert_eq!(list.themes.len(), 1);
        assert_eq!(list.themes[0].name, "Ocean");
        assert_eq!(list.themes[0].id.as_deref(), Some("t1"));
    }

    #[test]
    fn test_theme_list_missing_key() {
        let list: ThemeList = serde_json::from_str("{}").unwrap();
        assert!(list.themes.is_empty());
    }
}
