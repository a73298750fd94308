use crate::ids::AccountNumber;
use crate::input::{self, InputError};
use crate::messages;
use crate::models::Account;
use crate::requests::{CreateAccountRequest, TransactionRequest, TransferRequest};
use crate::transport::{ApiRequest, ApiResponse, HttpTransport, Transport};
use crate::view::{AccountTable, Notice, Statement};
use crate::{ClientConfig, Outcome, Result};

use serde::Serialize;

use thiserror::Error;

use tokio::sync::Mutex;

const ACCOUNTS_PATH: &str = "/contas";

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Unexpected HTTP {1} from {0}")]
    UnexpectedStatus(String, u16),
}

#[derive(Debug, Clone, Copy)]
enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl TransactionKind {
    fn path(self, account: AccountNumber) -> String {
        return match self {
            TransactionKind::Deposit => format!("{ACCOUNTS_PATH}/{account}/deposito"),
            TransactionKind::Withdrawal => format!("{ACCOUNTS_PATH}/{account}/saque"),
        };
    }

    fn action(self) -> &'static str {
        return match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdrawal => "withdraw",
        };
    }
}

/// Page controller for the account console: loads the account list and runs the
/// user actions against the banking API.
///
/// Every action resolves to an [`Outcome`]; failures never escape as errors. Mutating
/// actions run one at a time, and each successful one reloads the account list
/// exactly once before the next may start.
pub struct AccountConsoleClient<T: Transport> {
    transport: T,
    config: ClientConfig,
    mutation_guard: Mutex<()>,
}

impl AccountConsoleClient<HttpTransport> {
    pub fn connect(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;

        log::debug!("Connected HTTP transport to {}", config.base_url);

        return Ok(Self::new(transport, config));
    }
}

impl<T: Transport> AccountConsoleClient<T> {
    pub fn new(transport: T, config: ClientConfig) -> Self {
        return Self {
            transport,
            config,
            mutation_guard: Mutex::new(()),
        };
    }

    pub fn config(&self) -> &ClientConfig {
        return &self.config;
    }

    pub async fn load_accounts(&self) -> Outcome {
        return match self.fetch_accounts().await {
            Ok(accounts) => {
                log::debug!("Loaded {} accounts", accounts.len());
                Outcome::table(AccountTable::render(&accounts))
            }
            Err(e) => {
                log::error!("Error loading accounts: {e:#}");
                Outcome::notice(Notice::error(messages::LOAD_FAILED))
            }
        };
    }

    pub async fn create_account(&self, name: &str, tax_id: &str) -> Outcome {
        if input::any_missing(&[name, tax_id]) {
            return Outcome::notice(Notice::warning(messages::CREATE_PROMPT));
        }

        let request = CreateAccountRequest::new(name, tax_id);

        let _guard = self.mutation_guard.lock().await;

        let response = match self.post(ACCOUNTS_PATH, &request).await {
            Ok(response) => response,
            Err(e) => return communication_error("create account", e),
        };

        if !response.is_success() {
            log::warn!("Account creation rejected with HTTP {}", response.status);
            return Outcome::notice(Notice::error(messages::CREATE_FAILED));
        }

        if let Ok(account) = response.json::<Account>() {
            log::debug!("Created account {}", account.number);
        }

        return self
            .reload_after(Notice::info(messages::CREATE_SUCCEEDED))
            .await;
    }

    pub async fn deposit(&self, account: &str, amount: &str) -> Outcome {
        return self
            .post_transaction(TransactionKind::Deposit, account, amount)
            .await;
    }

    pub async fn withdraw(&self, account: &str, amount: &str) -> Outcome {
        return self
            .post_transaction(TransactionKind::Withdrawal, account, amount)
            .await;
    }

    pub async fn transfer(&self, source: &str, destination: &str, amount: &str) -> Outcome {
        if input::any_missing(&[source, destination, amount]) {
            return Outcome::notice(Notice::warning(messages::TRANSFER_PROMPT));
        }

        let parsed = input::parse_account_number(source).and_then(|source| {
            let request = TransferRequest {
                amount: input::parse_amount(amount)?,
                destination: input::parse_account_number(destination)?,
            };
            Ok((source, request))
        });

        let (source, request) = match parsed {
            Ok(parsed) => parsed,
            Err(e) => return invalid_input(e),
        };

        let path = format!("{ACCOUNTS_PATH}/{source}/transferencia");

        return self.post_with_message("transfer", &path, &request).await;
    }

    pub async fn show_statement(&self, account: &str) -> Outcome {
        if input::any_missing(&[account]) {
            return Outcome::notice(Notice::warning(messages::STATEMENT_PROMPT));
        }

        let number = match input::parse_account_number(account) {
            Ok(number) => number,
            Err(e) => return invalid_input(e),
        };

        return match self.fetch_account(number).await {
            Ok(Some(account)) => Outcome::statement(Statement::render(&account, &self.config.currency)),
            Ok(None) => Outcome::notice(Notice::error(messages::ACCOUNT_NOT_FOUND)),
            Err(e) => {
                log::error!("Error fetching statement for account {number}: {e:#}");
                Outcome::notice(Notice::error(messages::STATEMENT_FAILED))
            }
        };
    }

    async fn post_transaction(&self, kind: TransactionKind, account: &str, amount: &str) -> Outcome {
        if input::any_missing(&[account, amount]) {
            return Outcome::notice(Notice::warning(messages::TRANSACTION_PROMPT));
        }

        let parsed = input::parse_account_number(account).and_then(|account| {
            let request = TransactionRequest {
                amount: input::parse_amount(amount)?,
            };
            Ok((account, request))
        });

        let (account, request) = match parsed {
            Ok(parsed) => parsed,
            Err(e) => return invalid_input(e),
        };

        return self
            .post_with_message(kind.action(), &kind.path(account), &request)
            .await;
    }

    /// Posts to an endpoint that answers with a plain-text message, shown whatever the status
    async fn post_with_message<B: Serialize + Sync>(&self, action: &str, path: &str, body: &B) -> Outcome {
        let _guard = self.mutation_guard.lock().await;

        let response = match self.post(path, body).await {
            Ok(response) => response,
            Err(e) => return communication_error(action, e),
        };

        let notice = message_notice(&response);

        if !response.is_success() {
            log::warn!("Failed to {action}: HTTP {} {:?}", response.status, response.body);
            return Outcome::notice(notice);
        }

        return self.reload_after(notice).await;
    }

    async fn reload_after(&self, notice: Notice) -> Outcome {
        return Outcome::notice(notice).merge(self.load_accounts().await);
    }

    async fn post<B: Serialize + Sync>(&self, path: &str, body: &B) -> Result<ApiResponse> {
        let request = ApiRequest::post(path, body)?;

        log::debug!("Sending {request} {:?}", request.body);

        return self.transport.send(request).await;
    }

    async fn fetch_accounts(&self) -> Result<Vec<Account>> {
        let response = self.transport.send(ApiRequest::get(ACCOUNTS_PATH)).await?;

        if !response.is_success() {
            Err(ClientError::UnexpectedStatus(ACCOUNTS_PATH.to_string(), response.status))?
        }

        return response.json();
    }

    /// `Ok(None)` when the API does not return the account
    async fn fetch_account(&self, number: AccountNumber) -> Result<Option<Account>> {
        let path = format!("{ACCOUNTS_PATH}/{number}");
        let response = self.transport.send(ApiRequest::get(path)).await?;

        if !response.is_success() {
            if !response.is_not_found() {
                log::warn!("Account {number} lookup answered HTTP {}", response.status);
            }
            return Ok(None);
        }

        return Ok(Some(response.json()?));
    }
}

fn message_notice(response: &ApiResponse) -> Notice {
    let blank = response.body.trim().is_empty();

    if response.is_success() {
        if blank {
            return Notice::info(messages::EMPTY_SUCCESS);
        }
        return Notice::info(response.body.clone());
    }

    if blank {
        return Notice::error(messages::empty_response(response.status));
    }

    return Notice::error(response.body.clone());
}

fn communication_error(action: &str, error: anyhow::Error) -> Outcome {
    log::error!("Error trying to {action}: {error:#}");

    return Outcome::notice(Notice::error(messages::COMMUNICATION_ERROR));
}

fn invalid_input(error: InputError) -> Outcome {
    log::debug!("Rejected form input: {error}");

    return Outcome::notice(Notice::warning(error.to_string()));
}
