use crate::domain::ports::ContextStore;
use crate::domain::transaction::TransactionContext;
use crate::error::{CommitError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamily, ColumnFamilyDescriptor, DB, Options};
use std::path::Path;
use std::sync::Arc;
use uuid::Uuid;

/// Column Family for cached transaction contexts.
pub const CF_CONTEXTS: &str = "contexts";
/// Column Family for minted transfer ids.
pub const CF_TRANSFER_IDS: &str = "transfer_ids";

/// A persistent context store implementation using RocksDB.
///
/// Contexts and transfer ids live in separate Column Families; context values
/// are JSON-encoded. This struct is thread-safe (`Clone` shares the
/// underlying `Arc<DB>`).
///
/// `get_or_create_transfer_id` is a read-then-write. It is correct only under
/// the pipeline guarantee of at most one active commit attempt per
/// transaction id: unsynchronized concurrent writers for the same key could
/// mint two different ids.
#[derive(Clone)]
pub struct RocksDbContextStore {
    db: Arc<DB>,
}

impl RocksDbContextStore {
    /// Opens or creates a RocksDB instance at the specified path, ensuring
    /// both column families exist.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_contexts = ColumnFamilyDescriptor::new(CF_CONTEXTS, Options::default());
        let cf_transfer_ids = ColumnFamilyDescriptor::new(CF_TRANSFER_IDS, Options::default());

        let db = DB::open_cf_descriptors(&opts, path, vec![cf_contexts, cf_transfer_ids])
            .map_err(|e| CommitError::Store(format!("failed to open RocksDB: {}", e)))?;

        Ok(Self { db: Arc::new(db) })
    }

    fn cf(&self, name: &str) -> Result<&ColumnFamily> {
        self.db
            .cf_handle(name)
            .ok_or_else(|| CommitError::Store(format!("column family {} not found", name)))
    }
}

#[async_trait]
impl ContextStore for RocksDbContextStore {
    async fn get_context(&self, transaction_id: &str) -> Result<Option<TransactionContext>> {
        let cf = self.cf(CF_CONTEXTS)?;
        let result = self
            .db
            .get_cf(cf, transaction_id.as_bytes())
            .map_err(|e| CommitError::Store(e.to_string()))?;

        if let Some(bytes) = result {
            let context = serde_json::from_slice(&bytes)
                .map_err(|e| CommitError::Store(format!("failed to deserialize context: {}", e)))?;
            Ok(Some(context))
        } else {
            Ok(None)
        }
    }

    async fn put_context(&self, context: TransactionContext) -> Result<()> {
        let cf = self.cf(CF_CONTEXTS)?;
        let value = serde_json::to_vec(&context)
            .map_err(|e| CommitError::Store(format!("failed to serialize context: {}", e)))?;

        self.db
            .put_cf(cf, context.transaction_id.as_bytes(), value)
            .map_err(|e| CommitError::Store(e.to_string()))?;

        Ok(())
    }

    async fn get_or_create_transfer_id(&self, transaction_id: &str) -> Result<String> {
        let cf = self.cf(CF_TRANSFER_IDS)?;
        let existing = self
            .db
            .get_cf(cf, transaction_id.as_bytes())
            .map_err(|e| CommitError::Store(e.to_string()))?;

        if let Some(bytes) = existing {
            return String::from_utf8(bytes)
                .map_err(|e| CommitError::Store(format!("corrupt transfer id: {}", e)));
        }

        let id = Uuid::new_v4().to_string();
        self.db
            .put_cf(cf, transaction_id.as_bytes(), id.as_bytes())
            .map_err(|e| CommitError::Store(e.to_string()))?;

        Ok(id)
    }
}
