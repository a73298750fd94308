use serde::Serialize;

/// Body of `POST /contas`
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CreateAccountRequest {
    #[serde(rename = "nome")]
    pub name: String,

    #[serde(rename = "cpf")]
    pub tax_id: String,
}

impl CreateAccountRequest {
    pub fn new(name: &str, tax_id: &str) -> Self {
        return Self {
            name: name.to_string(),
            tax_id: tax_id.to_string(),
        };
    }
}
