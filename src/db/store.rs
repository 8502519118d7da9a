//! Namespaced key-value store for seat data and sketches.
//!
//! Every value lives in the `storage` table under a key from
//! [`crate::core::keys`]. A seat is written as one JSON record plus its
//! per-field keys inside a single transaction, so a save is all or nothing.

use crate::config::Config;
use crate::core::keys::{Namespace, SketchTarget};
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::position::Position;
use crate::models::seat::{SeatField, SeatRecord};
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

pub struct SeatStore {
    pool: DbPool,
    namespace: Namespace,
    quota_bytes: u64,
}

impl SeatStore {
    /// Open the store described by `cfg`, creating the schema if needed.
    pub fn open(cfg: &Config) -> AppResult<Self> {
        let pool = DbPool::new(&cfg.database)?;
        let namespace = Namespace::new(&cfg.namespace)?;
        Self::new(pool, namespace, cfg.storage_quota_bytes)
    }

    pub fn new(pool: DbPool, namespace: Namespace, quota_bytes: u64) -> AppResult<Self> {
        init_db(&pool.conn)?;
        Ok(Self {
            pool,
            namespace,
            quota_bytes,
        })
    }

    pub fn in_memory(namespace: &str) -> AppResult<Self> {
        Self::new(
            DbPool::in_memory()?,
            Namespace::new(namespace)?,
            crate::config::DEFAULT_QUOTA_BYTES,
        )
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }

    pub fn set_quota(&mut self, quota_bytes: u64) {
        self.quota_bytes = quota_bytes;
    }

    // ---------------------------
    // Raw key access
    // ---------------------------

    pub fn get_raw(&self, key: &str) -> AppResult<Option<String>> {
        let value = self
            .pool
            .conn
            .query_row("SELECT value FROM storage WHERE key = ?1", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    pub fn set_raw(&mut self, key: &str, value: &str) -> AppResult<()> {
        let quota = self.quota_bytes;
        let tx = self.pool.conn.transaction()?;
        put(&tx, quota, key, value)?;
        tx.commit()?;
        Ok(())
    }

    pub fn remove_raw(&mut self, key: &str) -> AppResult<bool> {
        let n = self
            .pool
            .conn
            .execute("DELETE FROM storage WHERE key = ?1", [key])?;
        Ok(n > 0)
    }

    /// Keys starting with `prefix`, sorted. The prefix is compared
    /// literally, so `_` and `%` carry no wildcard meaning.
    pub fn keys_with_prefix(&self, prefix: &str) -> AppResult<Vec<String>> {
        let mut stmt = self.pool.conn.prepare(
            "SELECT key FROM storage
             WHERE substr(key, 1, length(?1)) = ?1
             ORDER BY key ASC",
        )?;
        let rows = stmt.query_map([prefix], |row| row.get::<_, String>(0))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    /// Total bytes held by keys and values across all namespaces.
    pub fn used_bytes(&self) -> AppResult<u64> {
        used_bytes_excluding(&self.pool.conn, None)
    }

    // ---------------------------
    // Seat fields
    // ---------------------------

    /// Load every scalar field of a seat. Absent or malformed values map
    /// to the field defaults; only database failures are errors.
    pub fn load_seat(&self, pos: Position) -> AppResult<SeatRecord> {
        if let Some(raw) = self.get_raw(&self.namespace.record_key(pos))?
            && let Some(record) = SeatRecord::from_json(&raw)
        {
            return Ok(record);
        }

        // No record: assemble from the per-field keys.
        let mut record = SeatRecord::default();
        for field in SeatField::ALL {
            if let Some(value) = self.get_raw(&self.namespace.field_key(pos, field))? {
                record.set_field(field, &value);
            }
        }
        Ok(record)
    }

    pub fn get(&self, pos: Position, field: SeatField) -> AppResult<String> {
        Ok(self.load_seat(pos)?.field(field))
    }

    pub fn set(&mut self, pos: Position, field: SeatField, value: &str) -> AppResult<()> {
        let mut record = self.load_seat(pos)?;
        record.set_field(field, value);
        self.save_seat(pos, &record)
    }

    pub fn save_seat(&mut self, pos: Position, record: &SeatRecord) -> AppResult<()> {
        self.save_seats(&[(pos, record.clone())])
    }

    /// Write several seats in one transaction.
    pub fn save_seats(&mut self, seats: &[(Position, SeatRecord)]) -> AppResult<()> {
        let quota = self.quota_bytes;
        let ns = self.namespace.clone();
        let tx = self.pool.conn.transaction()?;

        for (pos, record) in seats {
            write_seat(&tx, quota, &ns, *pos, record)?;
        }

        tx.commit()?;
        Ok(())
    }

    /// Seat editor save: the fields and the seat's sketch commit together.
    /// `None` removes the seat's sketch.
    pub fn save_seat_with_sketch(
        &mut self,
        pos: Position,
        record: &SeatRecord,
        sketch_uri: Option<&str>,
    ) -> AppResult<()> {
        let quota = self.quota_bytes;
        let ns = self.namespace.clone();
        let tx = self.pool.conn.transaction()?;

        let sketch_key = SketchTarget::Seat(pos).key(&ns);
        match sketch_uri {
            Some(uri) => put(&tx, quota, &sketch_key, uri)?,
            None => {
                tx.execute("DELETE FROM storage WHERE key = ?1", [&sketch_key])?;
            }
        }
        write_seat(&tx, quota, &ns, pos, record)?;

        tx.commit()?;
        Ok(())
    }

    // ---------------------------
    // Sketches
    // ---------------------------

    pub fn load_sketch(&self, target: SketchTarget) -> AppResult<Option<String>> {
        self.get_raw(&target.key(&self.namespace))
    }

    pub fn save_sketch(&mut self, target: SketchTarget, data_uri: &str) -> AppResult<()> {
        let key = target.key(&self.namespace);
        self.set_raw(&key, data_uri)
    }

    pub fn remove_sketch(&mut self, target: SketchTarget) -> AppResult<bool> {
        let key = target.key(&self.namespace);
        self.remove_raw(&key)
    }

    // ---------------------------
    // Bulk removal
    // ---------------------------

    /// Delete every key of `ns`. Returns the number of keys removed.
    pub fn delete_all_under(&mut self, ns: &Namespace) -> AppResult<usize> {
        let n = self.pool.conn.execute(
            "DELETE FROM storage WHERE substr(key, 1, length(?1)) = ?1",
            [ns.prefix()],
        )?;
        Ok(n)
    }

    pub fn reset_namespace(&mut self) -> AppResult<usize> {
        let ns = self.namespace.clone();
        self.delete_all_under(&ns)
    }
}

fn used_bytes_excluding(conn: &Connection, key: Option<&str>) -> AppResult<u64> {
    let used: i64 = conn.query_row(
        "SELECT IFNULL(SUM(length(CAST(key AS BLOB)) + length(CAST(value AS BLOB))), 0)
         FROM storage
         WHERE ?1 IS NULL OR key <> ?1",
        params![key],
        |row| row.get(0),
    )?;
    Ok(used.max(0) as u64)
}

fn write_seat(
    conn: &Connection,
    quota: u64,
    ns: &Namespace,
    pos: Position,
    record: &SeatRecord,
) -> AppResult<()> {
    put(conn, quota, &ns.record_key(pos), &record.to_json()?)?;
    for field in SeatField::ALL {
        put(conn, quota, &ns.field_key(pos, field), &record.field(field))?;
    }
    Ok(())
}

/// Upsert one key, refusing writes that would push the store over quota.
fn put(conn: &Connection, quota: u64, key: &str, value: &str) -> AppResult<()> {
    let needed = (key.len() + value.len()) as u64;
    let used = used_bytes_excluding(conn, Some(key))?;
    if used + needed > quota {
        return Err(AppError::QuotaExceeded { needed, quota });
    }

    conn.execute(
        "INSERT INTO storage (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        params![key, value, Local::now().to_rfc3339()],
    )?;
    Ok(())
}
