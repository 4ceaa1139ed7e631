use crate::error::{require_non_empty, Result};
use crate::requests::{DownloadFile, GetFileInfo, UploadFile, UploadNewVersion};
use crate::session::BoxSession;
use std::io::{Read, Write};
use tracing::debug;

/// Requests against the `/files` endpoints.
#[derive(Clone, Copy, Debug)]
pub struct FileApi<'a> {
    session: &'a BoxSession,
}

impl<'a> FileApi<'a> {
    pub fn new(session: &'a BoxSession) -> Self {
        FileApi { session }
    }

    pub fn files_url(&self) -> String {
        format!("{}/files", self.session.base_uri())
    }

    pub fn file_info_url(&self, id: &str) -> String {
        format!("{}/{id}", self.files_url())
    }

    pub fn file_upload_url(&self) -> String {
        format!("{}/files/content", self.session.base_upload_uri())
    }

    pub fn file_upload_new_version_url(&self, id: &str) -> String {
        format!("{}/files/{id}/content", self.session.base_upload_uri())
    }

    pub fn file_download_url(&self, id: &str) -> String {
        self.file_info_url(id) + "/content"
    }

    pub fn info_request(&self, id: &str) -> Result<GetFileInfo<'a>> {
        require_non_empty(id, "file id")?;
        Ok(GetFileInfo::new(
            id.to_string(),
            self.file_info_url(id),
            self.session,
        ))
    }

    /// Uploads `stream` as a new file named `file_name` into `destination_folder_id`.
    pub fn upload_request<R>(
        &self,
        stream: R,
        file_name: &str,
        destination_folder_id: &str,
    ) -> Result<UploadFile<'a, R>>
    where
        R: Read + Send + 'static,
    {
        require_non_empty(file_name, "file name")?;
        require_non_empty(destination_folder_id, "destination folder id")?;
        debug!(file_name, destination_folder_id, "building upload request");
        Ok(UploadFile::new(
            stream,
            file_name.to_string(),
            destination_folder_id.to_string(),
            self.file_upload_url(),
            self.session,
        ))
    }

    pub fn upload_new_version_request<R>(
        &self,
        stream: R,
        destination_file_id: &str,
    ) -> Result<UploadNewVersion<'a, R>>
    where
        R: Read + Send + 'static,
    {
        require_non_empty(destination_file_id, "destination file id")?;
        Ok(UploadNewVersion::new(
            stream,
            destination_file_id.to_string(),
            self.file_upload_new_version_url(destination_file_id),
            self.session,
        ))
    }

    /// Downloads file content into `output`. The caller keeps ownership of the writer.
    pub fn download_request<'w, W>(
        &self,
        output: &'w mut W,
        file_id: &str,
    ) -> Result<DownloadFile<'w, W>>
    where
        W: Write,
        'a: 'w,
    {
        require_non_empty(file_id, "file id")?;
        Ok(DownloadFile::new(
            output,
            file_id.to_string(),
            self.file_download_url(file_id),
            self.session,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoxConfig;
    use crate::error::BoxError;
    use crate::requests::BoxRequest;
    use reqwest::blocking::Client;
    use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, IF_MATCH};
    use reqwest::Method;
    use std::io::Cursor;

    fn session() -> BoxSession {
        let config =
            BoxConfig::new("https://api.example.com/2.0", "https://upload.example.com/2.0")
                .unwrap();
        BoxSession::with_config(&config, "token").unwrap()
    }

    #[test]
    fn url_derivation() {
        let session = session();
        let api = FileApi::new(&session);
        assert_eq!(api.files_url(), "https://api.example.com/2.0/files");
        assert_eq!(
            api.file_info_url("42"),
            format!("{}/42", api.files_url())
        );
        assert_eq!(
            api.file_download_url("42"),
            format!("{}/content", api.file_info_url("42"))
        );
        assert_eq!(
            api.file_upload_url(),
            "https://upload.example.com/2.0/files/content"
        );
        assert_eq!(
            api.file_upload_new_version_url("42"),
            "https://upload.example.com/2.0/files/42/content"
        );
    }

    #[test]
    fn info_request_is_authorized_get() {
        let session = session();
        let request = FileApi::new(&session).info_request("42").unwrap();
        assert_eq!(request.method(), Method::GET);
        assert_eq!(request.url(), "https://api.example.com/2.0/files/42");

        let built = request.builder(&Client::new()).build().unwrap();
        assert_eq!(built.method(), Method::GET);
        assert_eq!(built.url().as_str(), "https://api.example.com/2.0/files/42");
        assert_eq!(
            built.headers()[AUTHORIZATION].to_str().unwrap(),
            "Bearer token"
        );
    }

    #[test]
    fn info_request_with_fields() {
        let session = session();
        let request = FileApi::new(&session)
            .info_request("42")
            .unwrap()
            .fields(["name", "sha1"]);
        let built = request.builder(&Client::new()).build().unwrap();
        let pairs: Vec<(String, String)> = built.url().query_pairs().into_owned().collect();
        assert_eq!(pairs, vec![("fields".to_string(), "name,sha1".to_string())]);
    }

    #[test]
    fn blank_ids_fail_fast() {
        let session = session();
        let api = FileApi::new(&session);
        assert!(matches!(
            api.info_request(""),
            Err(BoxError::InvalidArgument(_))
        ));
        assert!(matches!(
            api.upload_request(Cursor::new(Vec::<u8>::new()), " ", "0"),
            Err(BoxError::InvalidArgument(_))
        ));
        assert!(matches!(
            api.upload_request(Cursor::new(Vec::<u8>::new()), "a.txt", ""),
            Err(BoxError::InvalidArgument(_))
        ));
        assert!(matches!(
            api.upload_new_version_request(Cursor::new(Vec::<u8>::new()), ""),
            Err(BoxError::InvalidArgument(_))
        ));
        let mut sink: Vec<u8> = Vec::new();
        assert!(matches!(
            api.download_request(&mut sink, "\t"),
            Err(BoxError::InvalidArgument(_))
        ));
    }

    #[test]
    fn upload_is_multipart_post() {
        let session = session();
        let request = FileApi::new(&session)
            .upload_request(Cursor::new(b"quarterly".to_vec()), "q3.txt", "0")
            .unwrap()
            .content_length(9);
        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.file_name(), "q3.txt");
        assert_eq!(request.destination_folder_id(), "0");

        let built = request.into_builder(&Client::new()).unwrap().build().unwrap();
        assert_eq!(
            built.url().as_str(),
            "https://upload.example.com/2.0/files/content"
        );
        let content_type = built.headers()[CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("multipart/form-data"));
    }

    #[test]
    fn new_version_carries_if_match() {
        let session = session();
        let request = FileApi::new(&session)
            .upload_new_version_request(Cursor::new(b"v2".to_vec()), "42")
            .unwrap()
            .if_match("etag-1")
            .name("q3-final.txt");
        assert_eq!(request.file_id(), "42");
        assert_eq!(
            request.url(),
            "https://upload.example.com/2.0/files/42/content"
        );

        let built = request.into_builder(&Client::new()).unwrap().build().unwrap();
        assert_eq!(built.method(), Method::POST);
        assert_eq!(built.headers()[IF_MATCH].to_str().unwrap(), "etag-1");
    }

    #[test]
    fn download_targets_content() {
        let session = session();
        let mut sink: Vec<u8> = Vec::new();
        let request = FileApi::new(&session)
            .download_request(&mut sink, "42")
            .unwrap()
            .version("7");
        assert_eq!(request.method(), Method::GET);
        assert_eq!(request.file_id(), "42");

        let built = request.builder(&Client::new()).build().unwrap();
        assert_eq!(built.url().path(), "/2.0/files/42/content");
        assert_eq!(built.url().query(), Some("version=7"));
    }
}
