use crate::domain::event::{FspId, TransactionRole};
use crate::error::{CommitError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Represents a positive settlement amount.
///
/// This is a wrapper around `rust_decimal::Decimal` to enforce that transfer
/// amounts are always strictly positive, at construction and at
/// deserialization.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(CommitError::Validation(
                "amount must be positive".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = CommitError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

/// Three-letter uppercase currency code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct Currency(String);

impl Currency {
    pub fn new(code: impl Into<String>) -> Result<Self> {
        let code = code.into();
        if code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase()) {
            Ok(Self(code))
        } else {
            Err(CommitError::Validation(format!(
                "invalid currency code: {}",
                code
            )))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Currency {
    type Error = CommitError;

    fn try_from(code: String) -> Result<Self> {
        Self::new(code)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Settlement value as it travels on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Money {
    pub value: Amount,
    pub currency: Currency,
}

/// Opaque interledger payload proving the transfer conditions.
///
/// Both fields are forwarded byte-for-byte and never inspected or re-encoded
/// by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ilp {
    pub packet: String,
    pub condition: String,
}

/// One protocol extension entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extension {
    pub key: String,
    pub value: String,
}

/// Ordered extension entries, forwarded verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionList {
    pub extension: Vec<Extension>,
}

/// Per-participant view within a transaction.
///
/// Owned by its parent `TransactionContext`; it has no lifecycle of its own.
/// `fsp_id` stays `None` until the negotiation phase resolved the participant.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RoleContext {
    pub fsp_id: Option<FspId>,
}

impl RoleContext {
    pub fn new(fsp_id: FspId) -> Self {
        Self {
            fsp_id: Some(fsp_id),
        }
    }
}

/// Negotiated state of one transfer attempt, cached between the prepare and
/// commit phases and keyed by `transaction_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionContext {
    pub transaction_id: String,
    pub transfer_amount: Amount,
    pub currency: Currency,
    #[serde(default)]
    pub role_contexts: HashMap<TransactionRole, RoleContext>,
    pub ilp: Ilp,
    /// Forwarded as-is; expiry enforcement belongs to the switch.
    pub expiration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension_list: Option<ExtensionList>,
}

impl TransactionContext {
    pub fn role_context(&self, role: TransactionRole) -> Option<&RoleContext> {
        self.role_contexts.get(&role)
    }

    pub fn set_role_context(&mut self, role: TransactionRole, context: RoleContext) {
        self.role_contexts.insert(role, context);
    }

    /// Resolves the participant identifier for a role, failing when the
    /// negotiation never filled it in.
    pub fn fsp_id(&self, role: TransactionRole) -> Result<&FspId> {
        self.role_contexts
            .get(&role)
            .and_then(|context| context.fsp_id.as_ref())
            .ok_or_else(|| {
                CommitError::IncompleteTransaction(format!(
                    "missing {} FSP id for transaction {}",
                    role, self.transaction_id
                ))
            })
    }

    pub fn money(&self) -> Money {
        Money {
            value: self.transfer_amount,
            currency: self.currency.clone(),
        }
    }
}
