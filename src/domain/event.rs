use serde::{Deserialize, Serialize};
use std::fmt;

/// Role a participant plays within one transfer attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionRole {
    Payer,
    Payee,
}

impl TransactionRole {
    /// The role on the other side of the transfer.
    pub fn counterpart(self) -> Self {
        match self {
            Self::Payer => Self::Payee,
            Self::Payee => Self::Payer,
        }
    }
}

impl fmt::Display for TransactionRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Payer => write!(f, "PAYER"),
            Self::Payee => write!(f, "PAYEE"),
        }
    }
}

/// Participant identifier qualified by the deployment instance hosting it.
///
/// The instance tag decides whether two participants can reach each other
/// without going through the switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FspId {
    pub id: String,
    pub instance: String,
}

impl FspId {
    pub fn new(id: impl Into<String>, instance: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            instance: instance.into(),
        }
    }

    pub fn same_instance(&self, other: &FspId) -> bool {
        self.instance == other.instance
    }
}

/// Inbound commit event handed over by the surrounding pipeline.
///
/// Required fields are validated once at the boundary; the routing logic
/// never looks anything up by header name. `counterpart_fsp` is `None` when
/// the upstream lookup could not resolve the other side, which makes direct
/// delivery impossible.
#[derive(Debug, Clone, PartialEq)]
pub struct CommitEvent {
    pub transaction_id: String,
    pub current_role: TransactionRole,
    pub transfer_role: TransactionRole,
    pub current_fsp: FspId,
    pub counterpart_fsp: Option<FspId>,
}
