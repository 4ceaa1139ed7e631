use crate::db::{self, Store};
use crate::error::{require_non_empty, BoxError, Result};
use url::Url;

pub const DEFAULT_BASE_URI: &str = "https://api.box.com/2.0";
pub const DEFAULT_BASE_UPLOAD_URI: &str = "https://upload.box.com/api/2.0";
pub const DEFAULT_USER_AGENT: &str = concat!("box_content_sdk/", env!("CARGO_PKG_VERSION"));

const BASE_URI_KEY: &str = "base_uri";
const BASE_UPLOAD_URI_KEY: &str = "base_upload_uri";
const USER_AGENT_KEY: &str = "user_agent";

/// Endpoint roots and client identity shared by every session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoxConfig {
    pub base_uri: String,
    pub base_upload_uri: String,
    pub user_agent: String,
}

impl Default for BoxConfig {
    fn default() -> Self {
        BoxConfig {
            base_uri: DEFAULT_BASE_URI.to_string(),
            base_upload_uri: DEFAULT_BASE_UPLOAD_URI.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl BoxConfig {
    /// Builds a config for custom hosts; both URIs are validated and normalised.
    pub fn new(base_uri: &str, base_upload_uri: &str) -> Result<Self> {
        Ok(BoxConfig {
            base_uri: normalize_base_uri(base_uri, "base uri")?,
            base_upload_uri: normalize_base_uri(base_upload_uri, "base upload uri")?,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        })
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Reads the config from the settings table; missing keys fall back to defaults.
    pub fn load(store: &Store) -> Result<Self> {
        let defaults = BoxConfig::default();
        let base_uri = db::get_setting(store, BASE_URI_KEY)?.unwrap_or(defaults.base_uri);
        let base_upload_uri =
            db::get_setting(store, BASE_UPLOAD_URI_KEY)?.unwrap_or(defaults.base_upload_uri);
        let user_agent = db::get_setting(store, USER_AGENT_KEY)?.unwrap_or(defaults.user_agent);
        Ok(BoxConfig::new(&base_uri, &base_upload_uri)?.with_user_agent(user_agent))
    }

    /// Validates and writes every field to the settings table.
    pub fn save(&self, store: &Store) -> Result<()> {
        let base_uri = normalize_base_uri(&self.base_uri, "base uri")?;
        let base_upload_uri = normalize_base_uri(&self.base_upload_uri, "base upload uri")?;
        require_non_empty(&self.user_agent, "user agent")?;
        db::set_setting(store, BASE_URI_KEY, &base_uri)?;
        db::set_setting(store, BASE_UPLOAD_URI_KEY, &base_upload_uri)?;
        db::set_setting(store, USER_AGENT_KEY, &self.user_agent)?;
        Ok(())
    }
}

/// Trims whitespace and trailing `/` so URL helpers can append `/{resource}`.
pub(crate) fn normalize_base_uri(raw: &str, what: &str) -> Result<String> {
    require_non_empty(raw, what)?;
    let normalized = raw.trim().trim_end_matches('/');
    let parsed = Url::parse(normalized)?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(BoxError::InvalidArgument(format!(
            "{what} must use http or https, got {}",
            parsed.scheme()
        )));
    }
    Ok(normalized.to_string())
}
