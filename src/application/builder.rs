use crate::domain::event::TransactionRole;
use crate::domain::ports::ContextStoreRef;
use crate::domain::request::CommitRequest;
use crate::domain::transaction::TransactionContext;
use crate::error::Result;

/// Assembles the outbound commit request from one immutable context snapshot.
///
/// The only side effect is the transfer-id get-or-create in the store; every
/// other field is copied verbatim. ILP packet and condition are opaque here.
pub struct CommitRequestBuilder {
    store: ContextStoreRef,
}

impl CommitRequestBuilder {
    pub fn new(store: ContextStoreRef) -> Self {
        Self { store }
    }

    pub async fn build(&self, context: &TransactionContext) -> Result<CommitRequest> {
        let transfer_id = self
            .store
            .get_or_create_transfer_id(&context.transaction_id)
            .await?;

        let payer_fsp = context.fsp_id(TransactionRole::Payer)?.id.clone();
        let payee_fsp = context.fsp_id(TransactionRole::Payee)?.id.clone();

        Ok(CommitRequest {
            transfer_id,
            payer_fsp,
            payee_fsp,
            amount: context.money(),
            ilp_packet: context.ilp.packet.clone(),
            ilp_condition: context.ilp.condition.clone(),
            expiration: context.expiration.clone(),
            extension_list: context.extension_list.clone(),
        })
    }
}
