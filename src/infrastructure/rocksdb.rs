use super::codec;
use crate::domain::ports::StateStore;
use crate::domain::state::BankFormState;
use crate::error::{LinkError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamilyDescriptor, DB, Options};
use std::path::Path;
use std::sync::Arc;

/// Column Family for storing session snapshots.
pub const CF_SESSIONS: &str = "sessions";

/// A persistent store implementation using RocksDB.
///
/// Each session is stored as a versioned snapshot (see [`codec`]) under its
/// big-endian session id, so iteration yields sessions in id order.
///
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>`).
#[derive(Clone)]
pub struct RocksDBStore {
    db: Arc<DB>,
}

impl RocksDBStore {
    /// Opens or creates a RocksDB instance at the specified path.
    ///
    /// Ensures that the "sessions" column family exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_sessions = ColumnFamilyDescriptor::new(CF_SESSIONS, Options::default());
        let db = DB::open_cf_descriptors(&opts, path, vec![cf_sessions])?;

        Ok(Self { db: Arc::new(db) })
    }

    fn sessions_cf(&self) -> Result<&rocksdb::ColumnFamily> {
        self.db.cf_handle(CF_SESSIONS).ok_or_else(|| {
            LinkError::InternalError(Box::new(std::io::Error::other(
                "Sessions column family not found",
            )))
        })
    }
}

#[async_trait]
impl StateStore for RocksDBStore {
    async fn save(&self, session: u32, state: BankFormState) -> Result<()> {
        let cf = self.sessions_cf()?;
        let value = codec::encode(&state)?;
        self.db.put_cf(cf, session.to_be_bytes(), value)?;
        Ok(())
    }

    async fn load(&self, session: u32) -> Result<Option<BankFormState>> {
        let cf = self.sessions_cf()?;
        match self.db.get_pinned_cf(cf, session.to_be_bytes())? {
            Some(bytes) => Ok(Some(codec::decode(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn all(&self) -> Result<Vec<(u32, BankFormState)>> {
        let cf = self.sessions_cf()?;
        let mut sessions = Vec::new();

        for item in self.db.iterator_cf(cf, rocksdb::IteratorMode::Start) {
            let (key, value) = item?;
            let key: [u8; 4] = key.as_ref().try_into().map_err(|_| {
                LinkError::InternalError(Box::new(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    format!("Malformed session key of {} bytes", key.len()),
                )))
            })?;
            sessions.push((u32::from_be_bytes(key), codec::decode(&value)?));
        }

        Ok(sessions)
    }
}
