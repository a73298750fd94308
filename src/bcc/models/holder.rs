use serde::{Deserialize, Serialize};

/// The customer who owns an account
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Holder {
    #[serde(rename = "nome")]
    pub name: String,

    #[serde(rename = "cpf")]
    pub tax_id: String,
}

impl Holder {
    pub fn new(name: impl Into<String>, tax_id: impl Into<String>) -> Self {
        return Self {
            name: name.into(),
            tax_id: tax_id.into(),
        };
    }
}
