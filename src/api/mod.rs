//! Endpoint façades. Each one borrows a [`BoxSession`](crate::BoxSession),
//! derives endpoint URLs from its base URIs and hands back request objects.

mod file;
mod folder;
mod user;

pub use file::FileApi;
pub use folder::FolderApi;
pub use user::UserApi;
