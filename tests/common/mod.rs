#![allow(dead_code)]

use async_trait::async_trait;
use commit_router::domain::event::{CommitEvent, FspId, TransactionRole};
use commit_router::domain::ports::{DirectProcessor, SwitchTransport};
use commit_router::domain::request::CommitRequest;
use commit_router::domain::transaction::{Amount, Currency, Ilp, RoleContext, TransactionContext};
use commit_router::error::{CommitError, Result};
use rust_decimal_macros::dec;
use std::sync::{Arc, Mutex};

pub type SwitchCall = (CommitRequest, FspId, FspId);

/// Switch transport double that records every call and always acks.
#[derive(Default, Clone)]
pub struct RecordingSwitch {
    pub calls: Arc<Mutex<Vec<SwitchCall>>>,
}

#[async_trait]
impl SwitchTransport for RecordingSwitch {
    async fn post_transfer_commit(
        &self,
        request: &CommitRequest,
        source: &FspId,
        destination: &FspId,
    ) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push((request.clone(), source.clone(), destination.clone()));
        Ok(())
    }
}

pub struct FailingSwitch;

#[async_trait]
impl SwitchTransport for FailingSwitch {
    async fn post_transfer_commit(
        &self,
        _request: &CommitRequest,
        _source: &FspId,
        _destination: &FspId,
    ) -> Result<()> {
        Err(CommitError::Transport("connection refused".to_string()))
    }
}

/// Direct processor double that records every delegated event.
#[derive(Default, Clone)]
pub struct RecordingDirect {
    pub events: Arc<Mutex<Vec<CommitEvent>>>,
}

#[async_trait]
impl DirectProcessor for RecordingDirect {
    async fn commit(&self, event: &CommitEvent) -> Result<()> {
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }
}

pub struct FailingDirect;

#[async_trait]
impl DirectProcessor for FailingDirect {
    async fn commit(&self, _event: &CommitEvent) -> Result<()> {
        Err(CommitError::Delegation(
            "local ledger rejected the commit".to_string(),
        ))
    }
}

/// Fully negotiated context: 100.00 USD, payer fsp-A and payee fsp-B, both
/// on instance i1.
pub fn complete_context(transaction_id: &str) -> TransactionContext {
    let mut context = TransactionContext {
        transaction_id: transaction_id.to_string(),
        transfer_amount: Amount::new(dec!(100.00)).unwrap(),
        currency: Currency::new("USD").unwrap(),
        role_contexts: Default::default(),
        ilp: Ilp {
            packet: "AYIBgQAAAAAAAA".to_string(),
            condition: "f5sqb7tBTWPd5Y8BDFdM".to_string(),
        },
        expiration: "2026-08-06T12:00:00.000Z".to_string(),
        extension_list: None,
    };
    context.set_role_context(
        TransactionRole::Payer,
        RoleContext::new(FspId::new("fsp-A", "i1")),
    );
    context.set_role_context(
        TransactionRole::Payee,
        RoleContext::new(FspId::new("fsp-B", "i1")),
    );
    context
}

/// Commit event as seen by the payer side, counterpart resolved on the same
/// instance.
pub fn colocated_event(transaction_id: &str) -> CommitEvent {
    CommitEvent {
        transaction_id: transaction_id.to_string(),
        current_role: TransactionRole::Payer,
        transfer_role: TransactionRole::Payee,
        current_fsp: FspId::new("fsp-A", "i1"),
        counterpart_fsp: Some(FspId::new("fsp-B", "i1")),
    }
}
