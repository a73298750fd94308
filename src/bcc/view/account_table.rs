use crate::messages;
use crate::models::Account;

use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AccountRow {
    pub number: String,
    pub holder: String,
    pub balance: String,
}

impl AccountRow {
    pub fn render(account: &Account) -> Self {
        return Self {
            number: account.number.to_string(),
            holder: account.holder.name.clone(),
            balance: account.balance.to_string(),
        };
    }
}

/// View-model of the account list. An empty collection renders as a single informational row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountTable {
    Rows(Vec<AccountRow>),
    Empty(String),
}

impl AccountTable {
    pub fn render(accounts: &[Account]) -> Self {
        if accounts.is_empty() {
            return AccountTable::Empty(messages::EMPTY_TABLE.to_string());
        }

        return AccountTable::Rows(accounts.iter().map(AccountRow::render).collect());
    }

    /// Number of rows the table displays, including the informational row
    pub fn row_count(&self) -> usize {
        return match self {
            AccountTable::Rows(rows) => rows.len(),
            AccountTable::Empty(_) => 1,
        };
    }
}
