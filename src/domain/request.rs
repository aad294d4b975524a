use crate::domain::transaction::{ExtensionList, Money};
use serde::Serialize;

/// Outbound commit request body.
///
/// Built fresh per commit attempt, handed to the transport, then discarded;
/// never persisted. Field names follow the switch's transfer fulfilment
/// contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitRequest {
    pub transfer_id: String,
    pub payer_fsp: String,
    pub payee_fsp: String,
    pub amount: Money,
    pub ilp_packet: String,
    pub ilp_condition: String,
    pub expiration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension_list: Option<ExtensionList>,
}
