use crate::db::migrations::init_with_migrations;
use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

pub const DB_FILE_NAME: &str = "shiftclock.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the configured database, or `shiftclock.db` in the data directory.
    pub fn new() -> Result<Db> {
        match Config::read()?.database {
            Some(path) => Self::open(&path),
            None => Self::open(&DataStorage::new().get_path(DB_FILE_NAME)?),
        }
    }

    /// Opens (or creates) the database at `path` and brings its schema up to date.
    pub fn open(path: &Path) -> Result<Db> {
        let mut conn = Connection::open(path)?;
        init_with_migrations(&mut conn)?;
        Ok(Db { conn })
    }

    /// A private in-memory database with the current schema.
    pub fn in_memory() -> Result<Db> {
        let mut conn = Connection::open_in_memory()?;
        init_with_migrations(&mut conn)?;
        Ok(Db { conn })
    }
}
