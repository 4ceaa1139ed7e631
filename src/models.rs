//! Response bodies of the file, folder and user endpoints.
//! Field names follow the Box JSON so no extra mapping is needed.

use serde::Deserialize;

/// Mini reference embedded in other objects (parent folder, owner, ...).
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct BoxEntity {
    pub id: String,
    pub name: Option<String>,
    pub etag: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct BoxFile {
    pub id: String,
    pub etag: Option<String>,
    pub sequence_id: Option<String>,
    pub name: Option<String>,
    pub size: Option<u64>,
    pub sha1: Option<String>,
    pub description: Option<String>,
    pub created_at: Option<String>,
    pub modified_at: Option<String>,
    pub parent: Option<BoxEntity>,
    pub owned_by: Option<BoxEntity>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct BoxFolder {
    pub id: String,
    pub etag: Option<String>,
    pub sequence_id: Option<String>,
    pub name: Option<String>,
    pub size: Option<u64>,
    pub description: Option<String>,
    pub created_at: Option<String>,
    pub modified_at: Option<String>,
    pub parent: Option<BoxEntity>,
    pub owned_by: Option<BoxEntity>,
    pub item_collection: Option<BoxCollection<BoxItem>>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct BoxWebLink {
    pub id: String,
    pub name: Option<String>,
    pub url: Option<String>,
}

/// Folder child, discriminated by the `type` field.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BoxItem {
    File(BoxFile),
    Folder(BoxFolder),
    WebLink(BoxWebLink),
}

impl BoxItem {
    pub fn id(&self) -> &str {
        match self {
            BoxItem::File(file) => &file.id,
            BoxItem::Folder(folder) => &folder.id,
            BoxItem::WebLink(link) => &link.id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            BoxItem::File(file) => file.name.as_deref(),
            BoxItem::Folder(folder) => folder.name.as_deref(),
            BoxItem::WebLink(link) => link.name.as_deref(),
        }
    }
}

/// Paged list of entries; `offset`/`limit` are absent on upload responses.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct BoxCollection<T> {
    pub total_count: Option<u64>,
    #[serde(default = "Vec::new")]
    pub entries: Vec<T>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct BoxUser {
    pub id: String,
    pub name: Option<String>,
    pub login: Option<String>,
    pub created_at: Option<String>,
    pub modified_at: Option<String>,
    pub language: Option<String>,
    pub timezone: Option<String>,
    pub space_amount: Option<i64>,
    pub space_used: Option<i64>,
    pub max_upload_size: Option<i64>,
    pub status: Option<String>,
    pub avatar_url: Option<String>,
}
