//! # box_content_sdk
//!
//! Blocking Rust binding to the Box content API (files, folders, users).
//!
//! Endpoint façades borrow a [`BoxSession`], derive URLs from its base URIs and
//! return request objects. A request does no network I/O until it is sent.
//!
//! ```no_run
//! use box_content_sdk::{BoxRequest, BoxSession};
//!
//! # fn example() -> box_content_sdk::Result<()> {
//! let session = BoxSession::new("access-token")?;
//!
//! let folder = session.folder_api().create_request("0", "Reports")?.execute()?;
//! let page = session.folder_api().items_request(&folder.id)?.limit(100).execute()?;
//! for item in page.entries {
//!     println!("{} {:?}", item.id(), item.name());
//! }
//!
//! let mut out = std::fs::File::create("q3.pdf")?;
//! session.file_api().download_request(&mut out, "42")?.execute()?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod progress;
pub mod requests;
pub mod session;

pub use api::{FileApi, FolderApi, UserApi};
pub use config::BoxConfig;
pub use error::{BoxError, Result};
pub use models::{BoxCollection, BoxEntity, BoxFile, BoxFolder, BoxItem, BoxUser, BoxWebLink};
pub use requests::BoxRequest;
pub use session::BoxSession;
