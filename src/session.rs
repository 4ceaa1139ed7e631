//! Authenticated session shared by every endpoint façade.

use crate::api::{FileApi, FolderApi, UserApi};
use crate::config::{normalize_base_uri, BoxConfig};
use crate::error::{require_non_empty, Result};
use reqwest::blocking::RequestBuilder;
use reqwest::header::USER_AGENT;
use std::fmt;

/// Holds the access token and the two base URIs.
///
/// A session is read-only once built; façades and requests only borrow it.
/// Refreshing the token is left to the caller, who builds a new session.
#[derive(Clone, PartialEq, Eq)]
pub struct BoxSession {
    base_uri: String,
    base_upload_uri: String,
    access_token: String,
    user_agent: String,
}

impl BoxSession {
    /// Session against the default Box hosts.
    pub fn new(access_token: impl Into<String>) -> Result<Self> {
        Self::with_config(&BoxConfig::default(), access_token)
    }

    pub fn with_config(config: &BoxConfig, access_token: impl Into<String>) -> Result<Self> {
        let access_token = access_token.into();
        require_non_empty(&access_token, "access token")?;
        require_non_empty(&config.user_agent, "user agent")?;
        Ok(BoxSession {
            base_uri: normalize_base_uri(&config.base_uri, "base uri")?,
            base_upload_uri: normalize_base_uri(&config.base_upload_uri, "base upload uri")?,
            access_token,
            user_agent: config.user_agent.clone(),
        })
    }

    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    pub fn base_upload_uri(&self) -> &str {
        &self.base_upload_uri
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn file_api(&self) -> FileApi<'_> {
        FileApi::new(self)
    }

    pub fn folder_api(&self) -> FolderApi<'_> {
        FolderApi::new(self)
    }

    pub fn user_api(&self) -> UserApi<'_> {
        UserApi::new(self)
    }

    /// Attaches bearer auth and the user agent to an outgoing request.
    pub(crate) fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .bearer_auth(&self.access_token)
            .header(USER_AGENT, &self.user_agent)
    }
}

impl fmt::Debug for BoxSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxSession")
            .field("base_uri", &self.base_uri)
            .field("base_upload_uri", &self.base_upload_uri)
            .field("access_token", &"<redacted>")
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoxError;

    #[test]
    fn default_hosts() {
        let session = BoxSession::new("token").unwrap();
        assert_eq!(session.base_uri(), "https://api.box.com/2.0");
        assert_eq!(session.base_upload_uri(), "https://upload.box.com/api/2.0");
        assert_eq!(session.access_token(), "token");
    }

    #[test]
    fn blank_token_is_rejected() {
        assert!(matches!(
            BoxSession::new("  "),
            Err(BoxError::InvalidArgument(_))
        ));
    }

    #[test]
    fn config_uris_are_normalised_again() {
        let config = BoxConfig {
            base_uri: "https://api.example.com/2.0/".to_string(),
            ..BoxConfig::default()
        };
        let session = BoxSession::with_config(&config, "token").unwrap();
        assert_eq!(session.base_uri(), "https://api.example.com/2.0");
    }

    #[test]
    fn debug_hides_token() {
        let session = BoxSession::new("secret-token").unwrap();
        let rendered = format!("{session:?}");
        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains("<redacted>"));
    }
}
