//! Request objects returned by the endpoint façades.
//!
//! A request only captures verb, URL, session and payload. Nothing touches the
//! network until [`BoxRequest::send`] or [`BoxRequest::execute`] is called.

mod file;
mod folder;
mod user;

pub use file::{DownloadFile, GetFileInfo, UploadFile, UploadNewVersion};
pub use folder::{CreateFolder, GetFolderInfo, GetFolderItems};
pub use user::GetUserInfo;

use crate::error::{BoxError, Result};
use once_cell::sync::OnceCell;
use reqwest::{
    blocking::{Client, RequestBuilder, Response},
    redirect::Policy,
    Method,
};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

pub(crate) const METADATA_TIMEOUT: Duration = Duration::from_secs(30);
pub(crate) const UPLOAD_TIMEOUT: Duration = Duration::from_secs(120);
pub(crate) const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(600);

static SHARED_CLIENT: OnceCell<Client> = OnceCell::new();

/// One API call, executed later against a blocking HTTP client.
pub trait BoxRequest: Sized {
    type Output;

    fn method(&self) -> Method;

    fn url(&self) -> &str;

    /// Sends the request through `client` and decodes the response.
    fn send(self, client: &Client) -> Result<Self::Output>;

    /// Same as [`send`](Self::send), using the crate's shared client.
    fn execute(self) -> Result<Self::Output> {
        let client = shared_client()?;
        self.send(client)
    }
}

/// Blocking client with the redirect policy every request relies on.
/// Timeouts are set per request.
pub fn build_blocking_client() -> Result<Client> {
    Client::builder()
        .redirect(Policy::limited(10))
        .build()
        .map_err(BoxError::from)
}

/// Lazily built client reused by [`BoxRequest::execute`].
pub fn shared_client() -> Result<&'static Client> {
    SHARED_CLIENT.get_or_try_init(build_blocking_client)
}

/// `{"id": ..}` reference used in create and upload bodies.
#[derive(Debug, Serialize)]
pub(crate) struct ParentRef<'a> {
    pub(crate) id: &'a str,
}

pub(crate) fn with_fields(builder: RequestBuilder, fields: &[String]) -> RequestBuilder {
    if fields.is_empty() {
        builder
    } else {
        builder.query(&[("fields", fields.join(","))])
    }
}

pub(crate) fn collect_fields<I, S>(fields: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    fields
        .into_iter()
        .map(Into::into)
        .filter(|field: &String| !field.trim().is_empty())
        .collect()
}

/// Turns any non-2xx status into `BoxError::Http`, keeping the body intact.
pub(crate) fn check_status(response: Response, action: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    warn!(status = status.as_u16(), "box api returned HTTP {status} while {action}");
    Err(BoxError::Http {
        status: status.as_u16(),
        body,
    })
}

pub(crate) fn send_json<T: DeserializeOwned>(builder: RequestBuilder, action: &str) -> Result<T> {
    debug!("{action}");
    let response = check_status(builder.send()?, action)?;
    let bytes = response.bytes()?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_are_dropped() {
        let fields = collect_fields(["name", " ", "size"]);
        assert_eq!(fields, vec!["name".to_string(), "size".to_string()]);
    }

    #[test]
    fn fields_become_one_query_param() {
        let client = Client::new();
        let request = with_fields(
            client.get("https://api.example.com/2.0/files/1"),
            &["name".to_string(), "size".to_string()],
        )
        .build()
        .unwrap();
        let pairs: Vec<(String, String)> = request.url().query_pairs().into_owned().collect();
        assert_eq!(pairs, vec![("fields".to_string(), "name,size".to_string())]);
    }

    #[test]
    fn no_fields_no_query() {
        let client = Client::new();
        let request = with_fields(client.get("https://api.example.com/2.0/files/1"), &[])
            .build()
            .unwrap();
        assert_eq!(request.url().query(), None);
    }

    #[test]
    fn shared_client_is_reused() {
        let first = shared_client().unwrap() as *const Client;
        let second = shared_client().unwrap() as *const Client;
        assert_eq!(first, second);
    }
}
