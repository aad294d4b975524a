use crate::domain::event::{CommitEvent, FspId};
use crate::domain::request::CommitRequest;
use crate::domain::transaction::TransactionContext;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Cache of negotiation state shared between the prepare and commit phases.
///
/// Must support concurrent access keyed by transaction id. The surrounding
/// pipeline guarantees at most one active commit attempt per transaction id;
/// `get_or_create_transfer_id` is NOT required to survive unsynchronized
/// concurrent writers for the same key.
#[async_trait]
pub trait ContextStore: Send + Sync {
    async fn get_context(&self, transaction_id: &str) -> Result<Option<TransactionContext>>;

    async fn put_context(&self, context: TransactionContext) -> Result<()>;

    /// Idempotent: the transfer id is minted on the first call for a
    /// transaction and returned unchanged on every later call.
    async fn get_or_create_transfer_id(&self, transaction_id: &str) -> Result<String>;
}

/// Network hop to the interoperability switch.
///
/// The router issues at most one call per commit attempt and never retries;
/// retry and backoff policy, if any, belongs to the implementation.
#[async_trait]
pub trait SwitchTransport: Send + Sync {
    async fn post_transfer_commit(
        &self,
        request: &CommitRequest,
        source: &FspId,
        destination: &FspId,
    ) -> Result<()>;
}

/// In-process delivery for a counterpart hosted on the same instance.
#[async_trait]
pub trait DirectProcessor: Send + Sync {
    async fn commit(&self, event: &CommitEvent) -> Result<()>;
}

pub type ContextStoreRef = Arc<dyn ContextStore>;
pub type SwitchTransportBox = Box<dyn SwitchTransport>;
pub type DirectProcessorBox = Box<dyn DirectProcessor>;
