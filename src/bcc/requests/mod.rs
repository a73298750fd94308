mod create_account_request;
mod transaction_request;
mod transfer_request;

pub use create_account_request::CreateAccountRequest;
pub use transaction_request::TransactionRequest;
pub use transfer_request::TransferRequest;
