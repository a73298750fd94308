use crate::Money;

use serde::Serialize;

/// Body of the deposit and withdrawal endpoints
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionRequest {
    #[serde(rename = "valor")]
    pub amount: Money,
}
