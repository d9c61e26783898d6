use crate::core::error;
use crate::core::schemas;
use rusqlite::types::{Type, ValueRef};
use rusqlite::{Connection, OpenFlags, Row};
use std::path::{Path, PathBuf};
use std::time::Duration;

const BUSY_TIMEOUT_SECS: u64 = 5;

/// An enabled row of the host-owned `plugins` table.
///
/// `config` is the raw JSON text of the column; it is parsed when the row is
/// turned into a descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginRow {
    pub path: String,
    pub config: Option<String>,
}

pub fn database_path(root: &Path) -> PathBuf {
    root.join(schemas::DATABASE_NAME)
}

/// Open the plugin database read-only.
///
/// A missing file is reported as `NotFound`; SQLite is never allowed to
/// create the database.
pub fn db_connect(db_path: &Path) -> Result<Connection, error::PluginbotError> {
    if !db_path.is_file() {
        return Err(error::PluginbotError::NotFound(format!(
            "plugin database {}",
            db_path.display()
        )));
    }
    let conn = Connection::open_with_flags(
        db_path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;
    conn.busy_timeout(Duration::from_secs(BUSY_TIMEOUT_SECS))
        .map_err(error::PluginbotError::RusqliteError)?;
    Ok(conn)
}

pub fn table_exists(conn: &Connection, table: &str) -> Result<bool, error::PluginbotError> {
    let exists = conn.query_row(schemas::TABLE_EXISTS_QUERY, [table], |row| row.get(0))?;
    Ok(exists)
}

/// Enabled rows of the `plugins` table, in row order.
pub fn enabled_plugin_rows(conn: &Connection) -> Result<Vec<PluginRow>, error::PluginbotError> {
    let mut stmt = conn.prepare(schemas::SELECT_ENABLED_PLUGINS)?;
    let rows = stmt.query_map([], |row| {
        Ok(PluginRow {
            path: row.get(0)?,
            config: config_text(row, 1)?,
        })
    })?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Read the `config` column as text. BLOBs are decoded as UTF-8 and numbers
/// keep their SQL text form, so JSON validation can name the row.
fn config_text(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<String>> {
    match row.get_ref(idx)? {
        ValueRef::Null => Ok(None),
        ValueRef::Integer(i) => Ok(Some(i.to_string())),
        ValueRef::Real(f) => Ok(Some(f.to_string())),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => String::from_utf8(bytes.to_vec())
            .map(Some)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Blob, Box::new(e))),
    }
}
