use super::{
    check_status, collect_fields, send_json, with_fields, BoxRequest, ParentRef,
    DOWNLOAD_TIMEOUT, METADATA_TIMEOUT, UPLOAD_TIMEOUT,
};
use crate::error::Result;
use crate::models::{BoxCollection, BoxFile};
use crate::progress::{ProgressListener, ProgressReader, ProgressWriter};
use crate::session::BoxSession;
use reqwest::{
    blocking::{
        multipart::{Form, Part},
        Client, RequestBuilder,
    },
    header::IF_MATCH,
    Method,
};
use serde::Serialize;
use std::io::{self, Read, Write};
use tracing::debug;

/// Fetches the metadata of a single file.
#[derive(Debug)]
pub struct GetFileInfo<'a> {
    id: String,
    url: String,
    session: &'a BoxSession,
    fields: Vec<String>,
}

impl<'a> GetFileInfo<'a> {
    pub(crate) fn new(id: String, url: String, session: &'a BoxSession) -> Self {
        GetFileInfo {
            id,
            url,
            session,
            fields: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Restricts the response to the given fields (`?fields=a,b`).
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

impl BoxRequest for GetFileInfo<'_> {
    type Output = BoxFile;

    fn method(&self) -> Method {
        Method::GET
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn send(self, client: &Client) -> Result<BoxFile> {
        send_json(self.builder(client), "fetching file info")
    }
}

#[derive(Serialize)]
struct UploadAttributes<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent: Option<ParentRef<'a>>,
}

/// Creates a new file from a stream.
///
/// The stream is moved into the request body and dropped once it has been sent.
pub struct UploadFile<'a, R> {
    stream: R,
    file_name: String,
    destination_folder_id: String,
    url: String,
    session: &'a BoxSession,
    content_length: Option<u64>,
    progress: Option<ProgressListener>,
}

impl<'a, R> UploadFile<'a, R>
where
    R: Read + Send + 'static,
{
    pub(crate) fn new(
        stream: R,
        file_name: String,
        destination_folder_id: String,
        url: String,
        session: &'a BoxSession,
    ) -> Self {
        UploadFile {
            stream,
            file_name,
            destination_folder_id,
            url,
            session,
            content_length: None,
            progress: None,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn destination_folder_id(&self) -> &str {
        &self.destination_folder_id
    }

    /// Declares the stream length so the part is sent with a fixed size.
    pub fn content_length(mut self, len: u64) -> Self {
        self.content_length = Some(len);
        self
    }

    pub fn progress<F>(mut self, listener: F) -> Self
    where
        F: FnMut(u64, Option<u64>) + Send + 'static,
    {
        self.progress = Some(Box::new(listener));
        self
    }

    /// Builds the multipart POST; the `attributes` part precedes the `file` part.
    pub fn into_builder(self, client: &Client) -> Result<RequestBuilder> {
        let attributes = serde_json::to_string(&UploadAttributes {
            name: Some(self.file_name.as_str()),
            parent: Some(ParentRef {
                id: &self.destination_folder_id,
            }),
        })?;
        let part = file_part(
            self.stream,
            self.file_name.clone(),
            self.content_length,
            self.progress,
        )?;
        let form = Form::new().text("attributes", attributes).part("file", part);
        Ok(self
            .session
            .authorize(client.post(&self.url))
            .timeout(UPLOAD_TIMEOUT)
            .multipart(form))
    }
}

impl<R> BoxRequest for UploadFile<'_, R>
where
    R: Read + Send + 'static,
{
    type Output = BoxFile;

    fn method(&self) -> Method {
        Method::POST
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn send(self, client: &Client) -> Result<BoxFile> {
        debug!(
            file_name = %self.file_name,
            folder_id = %self.destination_folder_id,
            "uploading new file"
        );
        let collection: BoxCollection<BoxFile> =
            send_json(self.into_builder(client)?, "uploading file")?;
        first_entry(collection)
    }
}

/// Uploads a new version of an existing file.
pub struct UploadNewVersion<'a, R> {
    stream: R,
    file_id: String,
    url: String,
    session: &'a BoxSession,
    name: Option<String>,
    if_match: Option<String>,
    content_length: Option<u64>,
    progress: Option<ProgressListener>,
}

impl<'a, R> UploadNewVersion<'a, R>
where
    R: Read + Send + 'static,
{
    pub(crate) fn new(stream: R, file_id: String, url: String, session: &'a BoxSession) -> Self {
        UploadNewVersion {
            stream,
            file_id,
            url,
            session,
            name: None,
            if_match: None,
            content_length: None,
            progress: None,
        }
    }

    pub fn file_id(&self) -> &str {
        &self.file_id
    }

    /// Renames the file along with the new version.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into()).filter(|n: &String| !n.trim().is_empty());
        self
    }

    /// Only accept the upload if the current version still has this etag.
    pub fn if_match(mut self, etag: impl Into<String>) -> Self {
        self.if_match = Some(etag.into()).filter(|t: &String| !t.trim().is_empty());
        self
    }

    pub fn content_length(mut self, len: u64) -> Self {
        self.content_length = Some(len);
        self
    }

    pub fn progress<F>(mut self, listener: F) -> Self
    where
        F: FnMut(u64, Option<u64>) + Send + 'static,
    {
        self.progress = Some(Box::new(listener));
        self
    }

    pub fn into_builder(self, client: &Client) -> Result<RequestBuilder> {
        let mut form = Form::new();
        if let Some(name) = self.name.as_deref() {
            let attributes = serde_json::to_string(&UploadAttributes {
                name: Some(name),
                parent: None,
            })?;
            form = form.text("attributes", attributes);
        }
        let part_name = self.name.clone().unwrap_or_else(|| "file".to_string());
        let part = file_part(self.stream, part_name, self.content_length, self.progress)?;
        form = form.part("file", part);

        let mut builder = self
            .session
            .authorize(client.post(&self.url))
            .timeout(UPLOAD_TIMEOUT)
            .multipart(form);
        if let Some(tag) = self.if_match {
            builder = builder.header(IF_MATCH, tag);
        }
        Ok(builder)
    }
}

impl<R> BoxRequest for UploadNewVersion<'_, R>
where
    R: Read + Send + 'static,
{
    type Output = BoxFile;

    fn method(&self) -> Method {
        Method::POST
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn send(self, client: &Client) -> Result<BoxFile> {
        debug!(file_id = %self.file_id, "uploading new file version");
        let collection: BoxCollection<BoxFile> =
            send_json(self.into_builder(client)?, "uploading file version")?;
        first_entry(collection)
    }
}

/// Streams a file's content into a caller-owned writer.
///
/// The writer is only borrowed; flushing happens here, closing is up to the caller.
pub struct DownloadFile<'a, W> {
    output: &'a mut W,
    file_id: String,
    url: String,
    session: &'a BoxSession,
    version: Option<String>,
    progress: Option<ProgressListener>,
}

impl<'a, W: Write> DownloadFile<'a, W> {
    pub(crate) fn new(
        output: &'a mut W,
        file_id: String,
        url: String,
        session: &'a BoxSession,
    ) -> Self {
        DownloadFile {
            output,
            file_id,
            url,
            session,
            version: None,
            progress: None,
        }
    }

    pub fn file_id(&self) -> &str {
        &self.file_id
    }

    /// Downloads a specific file version instead of the current one.
    pub fn version(mut self, version_id: impl Into<String>) -> Self {
        self.version = Some(version_id.into()).filter(|v: &String| !v.trim().is_empty());
        self
    }

    pub fn progress<F>(mut self, listener: F) -> Self
    where
        F: FnMut(u64, Option<u64>) + Send + 'static,
    {
        self.progress = Some(Box::new(listener));
        self
    }

    pub fn builder(&self, client: &Client) -> RequestBuilder {
        let mut builder = self
            .session
            .authorize(client.get(&self.url))
            .timeout(DOWNLOAD_TIMEOUT);
        if let Some(version) = self.version.as_deref() {
            builder = builder.query(&[("version", version)]);
        }
        builder
    }
}

impl<W: Write> BoxRequest for DownloadFile<'_, W> {
    /// Number of bytes written to the output.
    type Output = u64;

    fn method(&self) -> Method {
        Method::GET
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn send(self, client: &Client) -> Result<u64> {
        debug!(file_id = %self.file_id, "downloading file");
        let mut response = check_status(self.builder(client).send()?, "downloading file")?;
        let expected = response.content_length();

        let mut writer = ProgressWriter::new(&mut *self.output, expected, self.progress);
        let bytes = io::copy(&mut response, &mut writer)?;
        writer.flush()?;
        debug!(file_id = %self.file_id, bytes, "download finished");
        Ok(bytes)
    }
}

fn file_part<R>(
    stream: R,
    file_name: String,
    content_length: Option<u64>,
    progress: Option<ProgressListener>,
) -> Result<Part>
where
    R: Read + Send + 'static,
{
    let reader = ProgressReader::new(stream, content_length, progress);
    let part = match content_length {
        Some(len) => Part::reader_with_length(reader, len),
        None => Part::reader(reader),
    };
    Ok(part.file_name(file_name).mime_str("application/octet-stream")?)
}

/// Upload endpoints answer with a one-entry collection.
fn first_entry(collection: BoxCollection<BoxFile>) -> Result<BoxFile> {
    collection.entries.into_iter().next().ok_or_else(|| {
        <serde_json::Error as serde::de::Error>::custom("upload response contained no file entry")
            .into()
    })
}
