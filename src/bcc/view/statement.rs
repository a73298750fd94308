use crate::models::Account;

use std::fmt;

/// Point-in-time snapshot of one account, formatted for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub number: String,
    pub branch: String,
    pub holder: String,
    pub tax_id: String,
    pub balance: String,
}

impl Statement {
    pub fn render(account: &Account, currency: &str) -> Self {
        let balance = if currency.is_empty() {
            account.balance.to_string()
        } else {
            format!("{currency} {}", account.balance)
        };

        return Self {
            number: account.number.to_string(),
            branch: account.branch.to_string(),
            holder: account.holder.name.clone(),
            tax_id: account.holder.tax_id.clone(),
            balance,
        };
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "--- Account Statement ---")?;
        writeln!(f, "Number: {}", self.number)?;
        writeln!(f, "Branch: {}", self.branch)?;
        writeln!(f, "Holder: {}", self.holder)?;
        writeln!(f, "Tax ID: {}", self.tax_id)?;
        return write!(f, "Balance: {}", self.balance);
    }
}
