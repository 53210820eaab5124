use crate::db::db::Db;
use crate::libs::error::StoreError;
use crate::libs::shift::{EmployeeId, ShiftKey, ShiftRecord, Slot};
use crate::libs::store::ShiftStore;
use crate::libs::time::Stamp;
use chrono::NaiveDate;
use parking_lot::Mutex;
use rusqlite::types::Type;
use rusqlite::{params, Connection, ErrorCode, OptionalExtension, Row};

const SELECT_COLUMNS: &str = "SELECT employee_id, date, first_start, first_end, second_start, second_end, version FROM shifts";
const SELECT_VERSION: &str = "SELECT version FROM shifts WHERE employee_id = ?1 AND date = ?2";
const INSERT_SHIFT: &str = "INSERT INTO shifts (employee_id, date, first_start, first_end, second_start, second_end, version)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, 1)";
const UPDATE_SHIFT: &str = "UPDATE shifts
    SET first_start = ?3, first_end = ?4, second_start = ?5, second_end = ?6, version = version + 1
    WHERE employee_id = ?1 AND date = ?2 AND version = ?7";

/// SQLite-backed [`ShiftStore`].
///
/// Punch values are stored as text; the empty string is the "no punch"
/// sentinel and legacy epoch placeholders are read back as unset.
pub struct Shifts {
    conn: Mutex<Connection>,
}

impl Shifts {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self::from_db(Db::new()?))
    }

    pub fn from_db(db: Db) -> Self {
        Shifts { conn: Mutex::new(db.conn) }
    }

    /// All records of `employee_id` in the month of `month`, sorted by date.
    pub fn fetch_month(&self, employee_id: &EmployeeId, month: NaiveDate) -> Result<Vec<ShiftRecord>, StoreError> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(&format!(
            "{} WHERE employee_id = ?1 AND strftime('%Y-%m', date) = strftime('%Y-%m', ?2) ORDER BY date",
            SELECT_COLUMNS
        ))?;
        let records = stmt
            .query_map(params![employee_id.as_str(), date_param(month)], record_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }

    /// Writes a raw row as-is. For importing historical data.
    pub fn import_raw(&self, employee_id: &EmployeeId, date: NaiveDate, raw: [&str; 4]) -> Result<(), StoreError> {
        self.conn.lock().execute(
            INSERT_SHIFT,
            params![employee_id.as_str(), date_param(date), raw[0], raw[1], raw[2], raw[3]],
        )?;
        Ok(())
    }

    fn stored_version(conn: &Connection, key: &ShiftKey) -> Result<Option<u64>, StoreError> {
        let version = conn
            .query_row(SELECT_VERSION, params![key.employee_id.as_str(), date_param(key.date)], |row| row.get::<_, i64>(0))
            .optional()?;
        Ok(version.map(|v| v as u64))
    }
}

impl ShiftStore for Shifts {
    fn load(&self, employee_id: &EmployeeId, date: NaiveDate) -> Result<Option<ShiftRecord>, StoreError> {
        let conn = self.conn.lock();
        let record = conn
            .query_row(
                &format!("{} WHERE employee_id = ?1 AND date = ?2", SELECT_COLUMNS),
                params![employee_id.as_str(), date_param(date)],
                record_from_row,
            )
            .optional()?;
        Ok(record)
    }

    fn save(&self, record: &ShiftRecord) -> Result<ShiftRecord, StoreError> {
        let conn = self.conn.lock();
        let key = record.key();
        let raw = [
            record.first_slot.start.to_raw(),
            record.first_slot.end.to_raw(),
            record.second_slot.start.to_raw(),
            record.second_slot.end.to_raw(),
        ];

        let written = if record.version == 0 {
            match conn.execute(
                INSERT_SHIFT,
                params![key.employee_id.as_str(), date_param(key.date), raw[0], raw[1], raw[2], raw[3]],
            ) {
                Ok(rows) => rows,
                Err(rusqlite::Error::SqliteFailure(e, _)) if e.code == ErrorCode::ConstraintViolation => 0,
                Err(e) => return Err(e.into()),
            }
        } else {
            conn.execute(
                UPDATE_SHIFT,
                params![
                    key.employee_id.as_str(),
                    date_param(key.date),
                    raw[0],
                    raw[1],
                    raw[2],
                    raw[3],
                    record.version as i64
                ],
            )?
        };

        if written == 0 {
            let found = Self::stored_version(&conn, &key)?;
            return Err(StoreError::VersionConflict {
                key,
                expected: record.version,
                found,
            });
        }

        Ok(ShiftRecord {
            version: record.version + 1,
            ..record.clone()
        })
    }
}

fn date_param(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn record_from_row(row: &Row) -> rusqlite::Result<ShiftRecord> {
    let date_str: String = row.get(1)?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e)))?;
    let stamp = |idx: usize| -> rusqlite::Result<Stamp> {
        Ok(row.get::<_, Option<String>>(idx)?.map_or(Stamp::Unset, |raw| Stamp::parse(&raw)))
    };

    Ok(ShiftRecord {
        employee_id: EmployeeId::new(row.get::<_, String>(0)?),
        date,
        first_slot: Slot {
            start: stamp(2)?,
            end: stamp(3)?,
        },
        second_slot: Slot {
            start: stamp(4)?,
            end: stamp(5)?,
        },
        version: row.get::<_, i64>(6)? as u64,
    })
}
