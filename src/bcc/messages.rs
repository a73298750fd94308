//! User-facing notice texts

pub const EMPTY_TABLE: &str = "No accounts registered yet.";
pub const LOAD_FAILED: &str = "Could not load accounts.";
pub const COMMUNICATION_ERROR: &str = "An error occurred while communicating with the server.";

pub const CREATE_PROMPT: &str = "Please fill in name and tax ID.";
pub const CREATE_SUCCEEDED: &str = "Account created successfully!";
pub const CREATE_FAILED: &str = "Failed to create account.";

pub const TRANSACTION_PROMPT: &str = "Fill in the account number and amount.";
pub const TRANSFER_PROMPT: &str = "Fill in all fields for the transfer.";

pub const STATEMENT_PROMPT: &str = "Please enter the account number.";
pub const ACCOUNT_NOT_FOUND: &str = "Account not found.";
pub const STATEMENT_FAILED: &str = "An error occurred while fetching the statement.";

/// Shown when a mutating endpoint succeeds without a body
pub const EMPTY_SUCCESS: &str = "Request completed successfully.";

/// Shown when a mutating endpoint fails without a body
pub fn empty_response(status: u16) -> String {
    return format!("Request failed with status {status}.");
}
