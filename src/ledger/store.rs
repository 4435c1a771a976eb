use std::path::Path;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use fjall::{Config, Keyspace, PartitionCreateOptions, PartitionHandle, PersistMode};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::engine::Operation;

use super::error::{LedgerError, Result};

/// One logged invocation. Immutable once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationRecord {
    pub id: u64,
    pub operation: Operation,
    pub input: String,
    pub result: String,
    pub timestamp: DateTime<Utc>,
}

/// Append-only, durably persisted operation log.
///
/// Records live in a single `records` partition keyed by the big-endian
/// encoding of their id, so iteration order is id order. Id assignment and
/// the write-commit happen under one mutex (single-writer discipline):
/// concurrent appenders get strictly increasing, contiguous ids and
/// non-decreasing timestamps.
#[derive(Clone)]
pub struct OpLogStore {
    keyspace: Keyspace,
    writer: Arc<Mutex<Option<Writer>>>,
}

struct Writer {
    records: PartitionHandle,
    next_id: u64,
}

fn encode_record_key(id: u64) -> [u8; 8] {
    id.to_be_bytes()
}

fn decode_record_key(key: &[u8]) -> Option<u64> {
    key.try_into().ok().map(u64::from_be_bytes)
}

impl OpLogStore {
    /// Open or create the underlying keyspace at the given path.
    ///
    /// The returned handle is not yet usable for appends; call
    /// [`initialize`](Self::initialize) first.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let keyspace = Config::new(path).open()?;
        info!(path = %path.display(), "Opened operation log keyspace");

        Ok(Self {
            keyspace,
            writer: Arc::new(Mutex::new(None)),
        })
    }

    /// Create the `records` partition if absent and recover the next record
    /// id from the highest existing key.
    ///
    /// Idempotent: repeated calls (including concurrent first-time calls
    /// from several threads) succeed without touching existing records.
    pub fn initialize(&self) -> Result<()> {
        let mut guard = self.lock_writer();
        if guard.is_some() {
            debug!("Operation log already initialized");
            return Ok(());
        }

        let records = self
            .keyspace
            .open_partition("records", PartitionCreateOptions::default())?;

        // Highest existing key determines the next id; ids start at 1.
        let next_id = match records.iter().next_back().transpose()? {
            Some((key, _)) => decode_record_key(&key).ok_or(LedgerError::InvalidKey)? + 1,
            None => 1,
        };

        info!(next_id, "Operation log initialized");
        *guard = Some(Writer { records, next_id });
        Ok(())
    }

    /// Append a record for a completed computation, assigning the next id
    /// and the current UTC timestamp. Returns the assigned id.
    ///
    /// The write is fsynced before this returns; a crash immediately after
    /// a successful append cannot lose the record. On failure no id is
    /// consumed, so ids stay contiguous.
    pub fn append(&self, operation: Operation, input: String, result: String) -> Result<u64> {
        let mut guard = self.lock_writer();
        let writer = guard.as_mut().ok_or(LedgerError::NotInitialized)?;

        let id = writer.next_id;
        let record = OperationRecord {
            id,
            operation,
            input,
            result,
            timestamp: Utc::now(),
        };

        let value = serde_json::to_vec(&record)?;
        writer.records.insert(encode_record_key(id), value)?;
        self.keyspace.persist(PersistMode::SyncAll)?;
        writer.next_id = id + 1;

        debug!(id, operation = %record.operation, "Appended operation record");
        Ok(id)
    }

    /// Fetch a single record by id.
    pub fn get(&self, id: u64) -> Result<Option<OperationRecord>> {
        let records = self.records_handle()?;
        match records.get(encode_record_key(id))? {
            Some(value) => Ok(Some(serde_json::from_slice(&value)?)),
            None => Ok(None),
        }
    }

    /// All records in id order.
    pub fn scan(&self) -> Result<Vec<OperationRecord>> {
        let records = self.records_handle()?;
        let mut out = Vec::new();
        for item in records.iter() {
            let (_, value) = item?;
            out.push(serde_json::from_slice(&value)?);
        }
        Ok(out)
    }

    /// Number of records in the log.
    pub fn len(&self) -> Result<usize> {
        let records = self.records_handle()?;
        let mut count = 0;
        for item in records.iter() {
            item?;
            count += 1;
        }
        Ok(count)
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    fn records_handle(&self) -> Result<PartitionHandle> {
        let guard = self.lock_writer();
        guard
            .as_ref()
            .map(|w| w.records.clone())
            .ok_or(LedgerError::NotInitialized)
    }

    fn lock_writer(&self) -> std::sync::MutexGuard<'_, Option<Writer>> {
        // A poisoned lock only means another appender panicked; the log
        // itself is still consistent (ids advance only after a durable
        // write), so recover the guard.
        self.writer.lock().unwrap_or_else(|e| e.into_inner())
    }
}
