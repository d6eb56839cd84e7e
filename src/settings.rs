/// Connection settings for the Laterfeed service, kept in synced storage

use crate::status::StatusMessage;
use crate::storage::{KeyValueStore, StorageError};
use url::Url;

pub const BASE_URL_KEY: &str = "baseUrl";
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// How long the options page shows a status before clearing it
pub const STATUS_DISPLAY_MS: u32 = 3000;

pub const SAVED_MESSAGE: &str = "Settings saved.";

/// Validated settings, ready to use for requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    pub auth_token: String,
}

/// Raw fields as read from storage. Absent fields stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredSettings {
    pub base_url: Option<String>,
    pub auth_token: Option<String>,
}

impl StoredSettings {
    /// Settings usable for a submission, if both fields are present
    pub fn complete(&self) -> Option<Settings> {
        match (self.base_url.as_deref(), self.auth_token.as_deref()) {
            (Some(base_url), Some(auth_token)) if !base_url.is_empty() && !auth_token.is_empty() => {
                Some(Settings {
                    base_url: base_url.to_string(),
                    auth_token: auth_token.to_string(),
                })
            }
            _ => None,
        }
    }
}

/// Values typed into the options form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsDraft {
    pub base_url: String,
    pub auth_token: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Base URL is required.")]
    MissingBaseUrl,

    #[error("Please enter a valid URL.")]
    InvalidUrl,

    #[error("Auth Token is required.")]
    MissingToken,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SaveError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl SaveError {
    pub fn to_status(&self) -> StatusMessage {
        StatusMessage::error(self.to_string())
    }
}

/// Trim whitespace and drop every trailing '/'
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

impl SettingsDraft {
    /// Normalize and validate the draft
    pub fn validate(&self) -> Result<Settings, ValidationError> {
        let base_url = normalize_base_url(&self.base_url);
        if base_url.is_empty() {
            return Err(ValidationError::MissingBaseUrl);
        }
        Url::parse(&base_url).map_err(|_| ValidationError::InvalidUrl)?;

        let auth_token = self.auth_token.trim();
        if auth_token.is_empty() {
            return Err(ValidationError::MissingToken);
        }

        Ok(Settings {
            base_url,
            auth_token: auth_token.to_string(),
        })
    }
}

impl From<&StoredSettings> for SettingsDraft {
    fn from(stored: &StoredSettings) -> Self {
        SettingsDraft {
            base_url: stored.base_url.clone().unwrap_or_default(),
            auth_token: stored.auth_token.clone().unwrap_or_default(),
        }
    }
}

/// Reads and writes [`Settings`] through a key-value backend
pub struct SettingsStore<S> {
    backend: S,
}

impl<S: KeyValueStore> SettingsStore<S> {
    pub fn new(backend: S) -> Self {
        SettingsStore { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub async fn load(&self) -> Result<StoredSettings, StorageError> {
        let mut values = self.backend.get(&[BASE_URL_KEY, AUTH_TOKEN_KEY]).await?;

        Ok(StoredSettings {
            base_url: values.remove(BASE_URL_KEY),
            auth_token: values.remove(AUTH_TOKEN_KEY),
        })
    }

    /// Validate `draft` and persist both fields in one write
    pub async fn save(&self, draft: &SettingsDraft) -> Result<Settings, SaveError> {
        let settings = draft.validate()?;

        self.backend
            .set(&[
                (BASE_URL_KEY, settings.base_url.as_str()),
                (AUTH_TOKEN_KEY, settings.auth_token.as_str()),
            ])
            .await?;

        log::info!("Saved settings for {}", settings.base_url);
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use futures::executor::block_on;

    fn draft(base_url: &str, auth_token: &str) -> SettingsDraft {
        SettingsDraft {
            base_url: base_url.to_string(),
            auth_token: auth_token.to_string(),
        }
    }

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(normalize_base_url("  https://feed.example.com///  "), "https://feed.example.com");
        assert_eq!(normalize_base_url("https://feed.example.com/api/"), "https://feed.example.com/api");
        assert_eq!(normalize_base_url("///"), "");
    }

    #[test]
    fn test_save_rejects_empty_base_url() {
        let store = SettingsStore::new(MemoryStore::new());

        for base_url in ["", "   ", "/", " // "] {
            let result = block_on(store.save(&draft(base_url, "token")));
            assert_eq!(result, Err(SaveError::Invalid(ValidationError::MissingBaseUrl)));
        }

        assert!(store.backend().is_empty());
    }

    #[test]
    fn test_save_rejects_invalid_url() {
        let store = SettingsStore::new(MemoryStore::new());

        for base_url in ["feed.example.com", "not a url", "https://", "/entries", "http://exa mple.com"] {
            let result = block_on(store.save(&draft(base_url, "token")));
            assert_eq!(result, Err(SaveError::Invalid(ValidationError::InvalidUrl)), "{}", base_url);
        }

        assert!(store.backend().is_empty());
    }

    #[test]
    fn test_save_rejects_missing_token() {
        let store = SettingsStore::new(MemoryStore::new());

        let result = block_on(store.save(&draft("https://feed.example.com", "  ")));

        assert_eq!(result, Err(SaveError::Invalid(ValidationError::MissingToken)));
        assert!(store.backend().is_empty());
    }

    #[test]
    fn test_url_checked_before_token() {
        let store = SettingsStore::new(MemoryStore::new());

        let result = block_on(store.save(&draft("nope", "")));

        assert_eq!(result, Err(SaveError::Invalid(ValidationError::InvalidUrl)));
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let store = SettingsStore::new(MemoryStore::new());

        let pairs = [
            ("https://feed.example.com/", "secret", "https://feed.example.com"),
            ("http://localhost:3000//", "abc def", "http://localhost:3000"),
            ("  https://example.com/laterfeed  ", " t0ken ", "https://example.com/laterfeed"),
        ];

        for (base_url, token, expected) in pairs {
            let saved = block_on(store.save(&draft(base_url, token))).unwrap();
            assert_eq!(saved.base_url, expected);
            assert!(!saved.base_url.ends_with('/'));

            let loaded = block_on(store.load()).unwrap();
            assert_eq!(loaded.base_url.as_deref(), Some(saved.base_url.as_str()));
            assert_eq!(loaded.auth_token.as_deref(), Some(saved.auth_token.as_str()));
            assert_eq!(loaded.complete(), Some(saved));
        }
    }

    #[test]
    fn test_load_reports_absent_fields() {
        let store = SettingsStore::new(MemoryStore::new());

        let loaded = block_on(store.load()).unwrap();
        assert_eq!(loaded, StoredSettings::default());
        assert_eq!(loaded.complete(), None);

        block_on(store.backend().set(&[(BASE_URL_KEY, "https://feed.example.com")])).unwrap();

        let loaded = block_on(store.load()).unwrap();
        assert_eq!(loaded.base_url.as_deref(), Some("https://feed.example.com"));
        assert_eq!(loaded.auth_token, None);
        assert_eq!(loaded.complete(), None);
    }

    #[test]
    fn test_complete_requires_non_empty_fields() {
        let stored = StoredSettings {
            base_url: Some("https://feed.example.com".to_string()),
            auth_token: Some(String::new()),
        };

        assert_eq!(stored.complete(), None);
    }

    #[test]
    fn test_draft_from_stored() {
        let stored = StoredSettings {
            base_url: Some("https://feed.example.com".to_string()),
            auth_token: None,
        };

        let draft = SettingsDraft::from(&stored);

        assert_eq!(draft.base_url, "https://feed.example.com");
        assert_eq!(draft.auth_token, "");
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(ValidationError::MissingBaseUrl.to_string(), "Base URL is required.");
        assert_eq!(ValidationError::InvalidUrl.to_string(), "Please enter a valid URL.");
        assert_eq!(ValidationError::MissingToken.to_string(), "Auth Token is required.");
        assert!(SaveError::from(ValidationError::MissingToken).to_status().is_error());
    }
}
