use super::Holder;

use crate::ids::AccountNumber;
use crate::Money;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Read-only snapshot of an account as served by the remote API
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Account {
    #[serde(rename = "numero")]
    pub number: AccountNumber,

    #[serde(rename = "agencia")]
    pub branch: Branch,

    #[serde(rename = "titular")]
    pub holder: Holder,

    #[serde(rename = "saldo")]
    pub balance: Money,
}

/// Branch code, display-only. The API may send it as a number or a string.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Branch {
    Code(i64),
    Name(String),
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return match self {
            Branch::Code(code) => write!(f, "{code}"),
            Branch::Name(name) => write!(f, "{name}"),
        };
    }
}
