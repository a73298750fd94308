use crate::ids::AccountNumber;
use crate::Money;

use serde::Serialize;

/// Body of `POST /contas/{origem}/transferencia`
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferRequest {
    #[serde(rename = "valor")]
    pub amount: Money,

    #[serde(rename = "numeroDestino")]
    pub destination: AccountNumber,
}
