use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use log::debug;
use std::sync::Arc;

use xrates_core::rates::QuoteSet;
use xrates_core::snapshots::{RangeRow, SnapshotStore, WriteOutcome};
use xrates_core::{Result, Symbol};

use super::model::RateRowDB;
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::rates;

/// `rates` table access. Reads use the pool, writes go through the writer actor.
#[derive(Clone)]
pub struct SnapshotRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl SnapshotRepository {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }

    /// Number of stored rows.
    pub fn count(&self) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        Ok(rates::table
            .count()
            .get_result(&mut conn)
            .map_err(StorageError::from)?)
    }
}

#[async_trait]
impl SnapshotStore for SnapshotRepository {
    fn read_latest(&self) -> Result<Option<QuoteSet>> {
        let mut conn = get_connection(&self.pool)?;

        let row = rates::table
            .order(rates::id.desc())
            .select(RateRowDB::as_select())
            .first(&mut conn)
            .optional()
            .map_err(StorageError::from)?;

        row.map(|r| r.to_quote_set()).transpose()
    }

    fn read_range(
        &self,
        base: Symbol,
        target: Symbol,
        start: i64,
        end: i64,
    ) -> Result<Vec<RangeRow>> {
        if start > end {
            return Ok(Vec::new());
        }
        let mut conn = get_connection(&self.pool)?;

        let rows = rates::table
            .filter(rates::id.ge(start))
            .filter(rates::id.le(end))
            .order(rates::id.asc())
            .select(RateRowDB::as_select())
            .load(&mut conn)
            .map_err(StorageError::from)?;

        Ok(rows
            .into_iter()
            .map(|row| RangeRow {
                timestamp: row.id,
                base: row.value(base),
                target: row.value(target),
            })
            .collect())
    }

    async fn write_tick(&self, timestamp: i64, quotes: &QuoteSet) -> Result<WriteOutcome> {
        let row = RateRowDB::from_quotes(timestamp, quotes)?;

        self.writer
            .exec(move |conn| {
                let inserted = diesel::insert_or_ignore_into(rates::table)
                    .values(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                if inserted == 0 {
                    debug!("Row {} already exists", row.id);
                    Ok(WriteOutcome::Coalesced)
                } else {
                    Ok(WriteOutcome::Inserted)
                }
            })
            .await
    }

    async fn prune_before(&self, cutoff: i64) -> Result<usize> {
        self.writer
            .exec(move |conn| {
                Ok(diesel::delete(rates::table.filter(rates::id.lt(cutoff)))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
