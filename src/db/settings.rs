use rusqlite::{params, OptionalExtension};

use super::{current_timestamp_millis, Store};
use crate::error::Result;

pub(crate) const SETTINGS_TABLE_SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS settings (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at_millis INTEGER NOT NULL
);";

pub fn get_setting(store: &Store, key: &str) -> Result<Option<String>> {
    store.with_connection(|conn| {
        let value = conn
            .query_row(
                "SELECT value FROM settings WHERE key = ?",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    })
}

pub fn set_setting(store: &Store, key: &str, value: &str) -> Result<()> {
    let updated_at = current_timestamp_millis();
    store.with_connection(|conn| {
        conn.execute(
            "INSERT INTO settings (key, value, updated_at_millis) VALUES (?, ?, ?)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at_millis = excluded.updated_at_millis",
            params![key, value, updated_at],
        )?;
        Ok(())
    })
}
