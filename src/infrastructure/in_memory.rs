use crate::domain::ports::ContextStore;
use crate::domain::transaction::TransactionContext;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// A thread-safe in-memory context store.
///
/// Uses `Arc<RwLock<HashMap>>` to allow shared concurrent access across
/// commit attempts. Ideal for testing or single-process deployments where
/// persistence across restarts is not required.
#[derive(Default, Clone)]
pub struct InMemoryContextStore {
    contexts: Arc<RwLock<HashMap<String, TransactionContext>>>,
    transfer_ids: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryContextStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContextStore for InMemoryContextStore {
    async fn get_context(&self, transaction_id: &str) -> Result<Option<TransactionContext>> {
        let contexts = self.contexts.read().await;
        Ok(contexts.get(transaction_id).cloned())
    }

    async fn put_context(&self, context: TransactionContext) -> Result<()> {
        let mut contexts = self.contexts.write().await;
        contexts.insert(context.transaction_id.clone(), context);
        Ok(())
    }

    async fn get_or_create_transfer_id(&self, transaction_id: &str) -> Result<String> {
        // The write lock is held across lookup and insert, so get-or-create
        // is atomic per key even under concurrent commit attempts.
        let mut ids = self.transfer_ids.write().await;
        let id = ids
            .entry(transaction_id.to_string())
            .or_insert_with(|| Uuid::new_v4().to_string());
        Ok(id.clone())
    }
}
