use super::{collect_fields, send_json, with_fields, BoxRequest, ParentRef, METADATA_TIMEOUT};
use crate::error::Result;
use crate::models::{BoxCollection, BoxFolder, BoxItem};
use crate::session::BoxSession;
use reqwest::{
    blocking::{Client, RequestBuilder},
    Method,
};
use serde::Serialize;

#[derive(Debug)]
pub struct GetFolderInfo<'a> {
    id: String,
    url: String,
    session: &'a BoxSession,
    fields: Vec<String>,
}

impl<'a> GetFolderInfo<'a> {
    pub(crate) fn new(id: String, url: String, session: &'a BoxSession) -> Self {
        GetFolderInfo {
            id,
            url,
            session,
            fields: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = collect_fields(fields);
        self
    }

    pub fn builder(&self, client: &Client) -> RequestBuilder {
        let builder = self
            .session
            .authorize(client.get(&self.url))
            .timeout(METADATA_TIMEOUT);
        with_fields(builder, &self.fields)
    }
}

impl BoxRequest for GetFolderInfo<'_> {
    type Output = BoxFolder;

    fn method(&self) -> Method {
        Method::GET
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn send(self, client: &Client) -> Result<BoxFolder> {
        send_json(self.builder(client), "fetching folder info")
    }
}

/// Lists one page of a folder's children. The server picks the page size
/// unless `limit` is set.
#[derive(Debug)]
pub struct GetFolderItems<'a> {
    id: String,
    url: String,
    session: &'a BoxSession,
    limit: Option<u32>,
    offset: Option<u64>,
    fields: Vec<String>,
}

impl<'a> GetFolderItems<'a> {
    pub(crate) fn new(id: String, url: String, session: &'a BoxSession) -> Self {
        GetFolderItems {
            id,
            url,
            session,
            limit: None,
            offset: None,
            fields: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = collect_fields(fields);
        self
    }

    pub fn builder(&self, client: &Client) -> RequestBuilder {
        let mut builder = self
            .session
            .authorize(client.get(&self.url))
            .timeout(METADATA_TIMEOUT);
        if let Some(limit) = self.limit {
            builder = builder.query(&[("limit", limit)]);
        }
        if let Some(offset) = self.offset {
            builder = builder.query(&[("offset", offset)]);
        }
        with_fields(builder, &self.fields)
    }
}

impl BoxRequest for GetFolderItems<'_> {
    type Output = BoxCollection<BoxItem>;

    fn method(&self) -> Method {
        Method::GET
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn send(self, client: &Client) -> Result<BoxCollection<BoxItem>> {
        send_json(self.builder(client), "listing folder items")
    }
}

#[derive(Debug, Serialize)]
struct CreateFolderBody<'a> {
    name: &'a str,
    parent: ParentRef<'a>,
}

/// Creates a folder named `name` inside `parent_id`.
#[derive(Debug)]
pub struct CreateFolder<'a> {
    parent_id: String,
    name: String,
    url: String,
    session: &'a BoxSession,
}

impl<'a> CreateFolder<'a> {
    pub(crate) fn new(parent_id: String, name: String, url: String, session: &'a BoxSession) -> Self {
        CreateFolder {
            parent_id,
            name,
            url,
            session,
        }
    }

    pub fn parent_id(&self) -> &str {
        &self.parent_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn builder(&self, client: &Client) -> RequestBuilder {
        let body = CreateFolderBody {
            name: &self.name,
            parent: ParentRef {
                id: &self.parent_id,
            },
        };
        self.session
            .authorize(client.post(&self.url))
            .timeout(METADATA_TIMEOUT)
            .json(&body)
    }
}

impl BoxRequest for CreateFolder<'_> {
    type Output = BoxFolder;

    fn method(&self) -> Method {
        Method::POST
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn send(self, client: &Client) -> Result<BoxFolder> {
        send_json(self.builder(client), "creating folder")
    }
}
