use rusqlite::{params, OptionalExtension};

use super::{current_timestamp_millis, Store};
use crate::config::BoxConfig;
use crate::error::Result;
use crate::session::BoxSession;

/// Persisted session: a single row, so a restart can rebuild the last session.
/// Nothing here refreshes or validates the token against the API.
pub(crate) const SESSION_TABLE_SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS box_session (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    access_token TEXT NOT NULL,
    base_uri TEXT NOT NULL,
    base_upload_uri TEXT NOT NULL,
    user_agent TEXT NOT NULL,
    updated_at_millis INTEGER NOT NULL
);";

pub fn save_session(store: &Store, session: &BoxSession) -> Result<()> {
    let updated_at = current_timestamp_millis();
    store.with_connection(|conn| {
        conn.execute(
            "INSERT INTO box_session (
                id,
                access_token,
                base_uri,
                base_upload_uri,
                user_agent,
                updated_at_millis
            )
            VALUES (1, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                access_token = excluded.access_token,
                base_uri = excluded.base_uri,
                base_upload_uri = excluded.base_upload_uri,
                user_agent = excluded.user_agent,
                updated_at_millis = excluded.updated_at_millis",
            params![
                session.access_token(),
                session.base_uri(),
                session.base_upload_uri(),
                session.user_agent(),
                updated_at,
            ],
        )?;
        Ok(())
    })
}

pub fn load_session(store: &Store) -> Result<Option<BoxSession>> {
    let row = store.with_connection(|conn| {
        let row = conn
            .query_row(
                "SELECT access_token, base_uri, base_upload_uri, user_agent
                FROM box_session
                WHERE id = 1",
                [],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        BoxConfig {
                            base_uri: row.get(1)?,
                            base_upload_uri: row.get(2)?,
                            user_agent: row.get(3)?,
                        },
                    ))
                },
            )
            .optional()?;
        Ok(row)
    })?;

    row.map(|(token, config)| BoxSession::with_config(&config, token))
        .transpose()
}

pub fn clear_session(store: &Store) -> Result<()> {
    store.with_connection(|conn| {
        conn.execute("DELETE FROM box_session WHERE id = 1", [])?;
        Ok(())
    })
}
