use super::{collect_fields, send_json, with_fields, BoxRequest, METADATA_TIMEOUT};
use crate::error::Result;
use crate::models::BoxUser;
use crate::session::BoxSession;
use reqwest::{
    blocking::{Client, RequestBuilder},
    Method,
};

#[derive(Debug)]
pub struct GetUserInfo<'a> {
    url: String,
    session: &'a BoxSession,
    fields: Vec<String>,
}

impl<'a> GetUserInfo<'a> {
    pub(crate) fn new(url: String, session: &'a BoxSession) -> Self {
        GetUserInfo {
            url,
            session,
            fields: Vec::new(),
        }
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

impl BoxRequest for GetUserInfo<'_> {
    type Output = BoxUser;

    fn method(&self) -> Method {
        Method::GET
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn send(self, client: &Client) -> Result<BoxUser> {
        send_json(self.builder(client), "fetching user info")
    }
}
