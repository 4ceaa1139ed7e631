use crate::error::{require_non_empty, Result};
use crate::requests::{CreateFolder, GetFolderInfo, GetFolderItems};
use crate::session::BoxSession;

/// Requests against the `/folders` endpoints.
#[derive(Clone, Copy, Debug)]
pub struct FolderApi<'a> {
    session: &'a BoxSession,
}

impl<'a> FolderApi<'a> {
    pub fn new(session: &'a BoxSession) -> Self {
        FolderApi { session }
    }

    pub fn folders_url(&self) -> String {
        format!("{}/folders", self.session.base_uri())
    }

    pub fn folder_info_url(&self, id: &str) -> String {
        format!("{}/{id}", self.folders_url())
    }

    pub fn folder_items_url(&self, id: &str) -> String {
        self.folder_info_url(id) + "/items"
    }

    pub fn info_request(&self, id: &str) -> Result<GetFolderInfo<'a>> {
        require_non_empty(id, "folder id")?;
        Ok(GetFolderInfo::new(
            id.to_string(),
            self.folder_info_url(id),
            self.session,
        ))
    }

    pub fn items_request(&self, id: &str) -> Result<GetFolderItems<'a>> {
        require_non_empty(id, "folder id")?;
        Ok(GetFolderItems::new(
            id.to_string(),
            self.folder_items_url(id),
            self.session,
        ))
    }

    /// Creates folder `name` under `parent_id`; the request goes to the collection URL.
    pub fn create_request(&self, parent_id: &str, name: &str) -> Result<CreateFolder<'a>> {
        require_non_empty(parent_id, "parent folder id")?;
        require_non_empty(name, "folder name")?;
        Ok(CreateFolder::new(
            parent_id.to_string(),
            name.to_string(),
            self.folders_url(),
            self.session,
        ))
    }
}
