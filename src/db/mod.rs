//! Local SQLite store for settings and the persisted session.

mod session;
mod settings;

pub use session::{clear_session, load_session, save_session};
pub use settings::{get_setting, set_setting};

use crate::error::Result;
use directories::ProjectDirs;
use rusqlite::Connection;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

const QUALIFIER: &str = "com";
const ORGANIZATION: &str = "Box";
const APPLICATION: &str = "box_content_sdk";
const DB_FILE_NAME: &str = "box.db";

/// Location of the SQLite database; every call opens a short-lived connection.
#[derive(Clone, Debug)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Store under the platform data directory.
    pub fn open_default() -> Result<Self> {
        Ok(Store::at(default_database_path()?))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Store { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the database file and schema if they do not exist yet.
    pub fn init(&self) -> Result<()> {
        self.with_connection(|_| Ok(()))
    }

    pub(crate) fn with_connection<T, F>(&self, operation: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self.open_connection()?;
        operation(&conn)
    }

    fn open_connection(&self) -> Result<Connection> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let conn = Connection::open(&self.path)?;
        apply_migrations(&conn)?;
        Ok(conn)
    }
}

fn apply_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(settings::SETTINGS_TABLE_SCHEMA)?;
    conn.execute_batch(session::SESSION_TABLE_SCHEMA)?;
    Ok(())
}

fn default_database_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "failed to resolve application data directory",
        )
    })?;
    Ok(dirs.data_dir().join(DB_FILE_NAME))
}

pub(crate) fn current_timestamp_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_millis() as i64)
        .unwrap_or(0)
}
