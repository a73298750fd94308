use bcc::messages;
use bcc::transport::{ApiRequest, ApiResponse, HttpMethod, Transport};
use bcc::view::{AccountTable, NoticeLevel};
use bcc::{AccountConsoleClient, ClientConfig, Result};

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use anyhow::anyhow;

use async_trait::async_trait;

use serde_json::json;

/// Answers requests from a queue of canned replies and records every request it sees
#[derive(Clone, Default)]
struct ScriptedTransport {
    replies: Arc<Mutex<VecDeque<Option<ApiResponse>>>>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl ScriptedTransport {
    fn reply(self, status: u16, body: impl Into<String>) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Some(ApiResponse::new(status, body)));
        return self;
    }

    fn reply_json(self, status: u16, body: serde_json::Value) -> Self {
        return self.reply(status, body.to_string());
    }

    /// Next request fails at the network level
    fn disconnect(self) -> Self {
        self.replies.lock().unwrap().push_back(None);
        return self;
    }

    fn requests(&self) -> Vec<ApiRequest> {
        return self.requests.lock().unwrap().clone();
    }

    fn list_fetches(&self) -> usize {
        return self
            .requests()
            .iter()
            .filter(|request| request.method == HttpMethod::Get && request.path == "/contas")
            .count();
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        self.requests.lock().unwrap().push(request.clone());

        let reply = self.replies.lock().unwrap().pop_front();

        return match reply {
            Some(Some(response)) => Ok(response),
            Some(None) => Err(anyhow!("connection refused")),
            None => panic!("No scripted reply for {request}"),
        };
    }
}

fn build_client(transport: &ScriptedTransport) -> AccountConsoleClient<ScriptedTransport> {
    return AccountConsoleClient::new(transport.clone(), ClientConfig::default());
}

fn accounts_json() -> serde_json::Value {
    return json!([
        { "numero": 1, "agencia": 1, "titular": { "nome": "Ana", "cpf": "111" }, "saldo": 10 },
        { "numero": 2, "agencia": 1, "titular": { "nome": "Bruno", "cpf": "222" }, "saldo": 40.5 },
    ]);
}

#[tokio::test]
async fn load_empty_collection_renders_single_row() {
    let transport = ScriptedTransport::default().reply_json(200, json!([]));
    let client = build_client(&transport);

    let outcome = client.load_accounts().await;

    assert!(outcome.notices.is_empty());
    assert_eq!(
        outcome.table,
        Some(AccountTable::Empty(messages::EMPTY_TABLE.to_string()))
    );
}

#[tokio::test]
async fn load_accounts_renders_one_row_per_account() {
    let transport = ScriptedTransport::default().reply_json(200, accounts_json());
    let client = build_client(&transport);

    let outcome = client.load_accounts().await;

    let rows = match outcome.table {
        Some(AccountTable::Rows(rows)) => rows,
        other => panic!("Expected rows, got {other:?}"),
    };

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].number, "1");
    assert_eq!(rows[0].holder, "Ana");
    assert_eq!(rows[0].balance, "10.00");
    assert_eq!(rows[1].balance, "40.50");
}

#[tokio::test]
async fn load_failures_report_generic_notice_without_table() {
    let transport = ScriptedTransport::default()
        .reply(500, "boom")
        .reply(200, "not json")
        .disconnect();
    let client = build_client(&transport);

    for _ in 0..3 {
        let outcome = client.load_accounts().await;

        assert_eq!(outcome.table, None);
        assert_eq!(outcome.message(), Some(messages::LOAD_FAILED));
        assert!(outcome.is_failure());
    }
}

#[tokio::test]
async fn create_account_requires_name_and_tax_id() {
    let transport = ScriptedTransport::default();
    let client = build_client(&transport);

    for (name, tax_id) in [("", "123"), ("Ana", ""), ("  ", "123")] {
        let outcome = client.create_account(name, tax_id).await;

        assert_eq!(outcome.message(), Some(messages::CREATE_PROMPT));
    }

    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn create_account_posts_holder_and_reloads_once() {
    let transport = ScriptedTransport::default()
        .reply_json(200, json!({ "numero": 3, "agencia": 1, "titular": { "nome": "Carla", "cpf": "333" }, "saldo": 0 }))
        .reply_json(200, accounts_json());
    let client = build_client(&transport);

    let outcome = client.create_account("Carla", "333").await;

    let requests = transport.requests();
    assert_eq!(requests[0].method, HttpMethod::Post);
    assert_eq!(requests[0].path, "/contas");
    assert_eq!(requests[0].body, Some(json!({ "nome": "Carla", "cpf": "333" })));

    assert_eq!(transport.list_fetches(), 1);
    assert_eq!(outcome.message(), Some(messages::CREATE_SUCCEEDED));
    assert_eq!(outcome.table.as_ref().map(|table| table.row_count()), Some(2));
    assert!(!outcome.is_failure());
}

#[tokio::test]
async fn create_account_rejected_does_not_reload() {
    let transport = ScriptedTransport::default().reply(400, "bad");
    let client = build_client(&transport);

    let outcome = client.create_account("Carla", "333").await;

    assert_eq!(outcome.message(), Some(messages::CREATE_FAILED));
    assert_eq!(transport.list_fetches(), 0);
}

#[tokio::test]
async fn create_account_network_error_reports_communication_error() {
    let transport = ScriptedTransport::default().disconnect();
    let client = build_client(&transport);

    let outcome = client.create_account("Carla", "333").await;

    assert_eq!(outcome.message(), Some(messages::COMMUNICATION_ERROR));
    assert_eq!(outcome.notices[0].level, NoticeLevel::Error);
    assert_eq!(transport.list_fetches(), 0);
}

#[tokio::test]
async fn transactions_with_missing_fields_issue_no_request() {
    let transport = ScriptedTransport::default();
    let client = build_client(&transport);

    assert_eq!(
        client.deposit("", "10").await.message(),
        Some(messages::TRANSACTION_PROMPT)
    );
    assert_eq!(
        client.deposit("1", "").await.message(),
        Some(messages::TRANSACTION_PROMPT)
    );
    assert_eq!(
        client.withdraw("", "").await.message(),
        Some(messages::TRANSACTION_PROMPT)
    );
    assert_eq!(
        client.transfer("1", "", "10").await.message(),
        Some(messages::TRANSFER_PROMPT)
    );
    assert_eq!(
        client.transfer("", "2", "10").await.message(),
        Some(messages::TRANSFER_PROMPT)
    );
    assert_eq!(
        client.transfer("1", "2", "").await.message(),
        Some(messages::TRANSFER_PROMPT)
    );

    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn unparseable_fields_issue_no_request() {
    let transport = ScriptedTransport::default();
    let client = build_client(&transport);

    assert_eq!(
        client.deposit("1", "ten").await.message(),
        Some("Invalid amount: \"ten\"")
    );
    assert_eq!(
        client.transfer("1", "two", "10").await.message(),
        Some("Invalid account number: \"two\"")
    );
    assert_eq!(
        client.show_statement("x").await.message(),
        Some("Invalid account number: \"x\"")
    );

    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn deposit_shows_server_text_and_reloads_once() {
    let message = "Depósito de R$ 25,00 realizado com sucesso na conta 1.";
    let transport = ScriptedTransport::default()
        .reply(200, message)
        .reply_json(200, accounts_json());
    let client = build_client(&transport);

    let outcome = client.deposit("1", "25").await;

    let requests = transport.requests();
    assert_eq!(requests[0].path, "/contas/1/deposito");
    assert_eq!(requests[0].body, Some(json!({ "valor": 25 })));

    assert_eq!(outcome.message(), Some(message));
    assert_eq!(outcome.notices[0].level, NoticeLevel::Info);
    assert_eq!(transport.list_fetches(), 1);
    assert!(outcome.table.is_some());
}

#[tokio::test]
async fn rejected_withdrawal_shows_server_text_without_reload() {
    let message = "Saldo insuficiente. Saldo atual: R$ 10,00, Tentativa de saque: R$ 99,90";
    let transport = ScriptedTransport::default().reply(400, message);
    let client = build_client(&transport);

    let outcome = client.withdraw("1", "99.9").await;

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/contas/1/saque");
    assert_eq!(requests[0].body, Some(json!({ "valor": 99.9 })));

    assert_eq!(outcome.message(), Some(message));
    assert_eq!(outcome.notices[0].level, NoticeLevel::Error);
    assert_eq!(outcome.table, None);
    assert_eq!(transport.list_fetches(), 0);
}

#[tokio::test]
async fn empty_failure_body_falls_back_to_status() {
    let transport = ScriptedTransport::default().reply(404, "");
    let client = build_client(&transport);

    let outcome = client.deposit("9", "1").await;

    assert_eq!(outcome.message(), Some("Request failed with status 404."));
    assert_eq!(transport.list_fetches(), 0);
}

#[tokio::test]
async fn empty_success_body_is_not_reported_as_failure() {
    let transport = ScriptedTransport::default()
        .reply(200, "")
        .reply_json(200, json!([]));
    let client = build_client(&transport);

    let outcome = client.deposit("1", "5").await;

    assert_eq!(outcome.message(), Some(messages::EMPTY_SUCCESS));
    assert_eq!(outcome.notices[0].level, NoticeLevel::Info);
    assert!(!outcome.is_failure());
    assert_eq!(transport.list_fetches(), 1);
}

#[tokio::test]
async fn load_accounts_keeps_very_large_balances() {
    let transport = ScriptedTransport::default().reply_json(
        200,
        json!([
            { "numero": 1, "agencia": 1, "titular": { "nome": "Ana", "cpf": "111" }, "saldo": 1e15 },
            { "numero": 2, "agencia": 1, "titular": { "nome": "Bruno", "cpf": "222" }, "saldo": 3.5 },
        ]),
    );
    let client = build_client(&transport);

    let outcome = client.load_accounts().await;

    let rows = match outcome.table {
        Some(AccountTable::Rows(rows)) => rows,
        other => panic!("Expected rows, got {other:?}"),
    };

    assert!(outcome.notices.is_empty());
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].balance, "1000000000000000.00");
    assert_eq!(rows[1].balance, "3.50");
}

#[tokio::test]
async fn amounts_beyond_four_decimals_issue_no_request() {
    let transport = ScriptedTransport::default();
    let client = build_client(&transport);

    assert_eq!(
        client.deposit("1", "0.00001").await.message(),
        Some("Invalid amount: \"0.00001\"")
    );
    assert_eq!(
        client.transfer("1", "2", "10.123456").await.message(),
        Some("Invalid amount: \"10.123456\"")
    );

    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn transfer_posts_amount_and_destination() {
    let transport = ScriptedTransport::default()
        .reply(200, "Transferência realizada com sucesso.")
        .reply_json(200, accounts_json());
    let client = build_client(&transport);

    let outcome = client.transfer("1", "2", "50").await;

    let requests = transport.requests();
    assert_eq!(requests[0].method, HttpMethod::Post);
    assert_eq!(requests[0].path, "/contas/1/transferencia");
    assert_eq!(
        serde_json::to_string(requests[0].body.as_ref().unwrap()).unwrap(),
        r#"{"valor":50,"numeroDestino":2}"#
    );

    assert_eq!(outcome.message(), Some("Transferência realizada com sucesso."));
    assert_eq!(transport.list_fetches(), 1);
}

#[tokio::test]
async fn rejected_transfer_does_not_reload() {
    let transport = ScriptedTransport::default().reply(404, "Conta de destino não encontrada.");
    let client = build_client(&transport);

    let outcome = client.transfer("1", "7", "5").await;

    assert_eq!(outcome.message(), Some("Conta de destino não encontrada."));
    assert_eq!(transport.list_fetches(), 0);
}

#[tokio::test]
async fn failed_reload_after_success_appends_load_notice() {
    let transport = ScriptedTransport::default()
        .reply(200, "ok")
        .disconnect();
    let client = build_client(&transport);

    let outcome = client.deposit("1", "5").await;

    assert_eq!(outcome.notices.len(), 2);
    assert_eq!(outcome.notices[0].message, "ok");
    assert_eq!(outcome.notices[1].message, messages::LOAD_FAILED);
    assert_eq!(outcome.table, None);
}

#[tokio::test]
async fn show_statement_formats_account() {
    let transport = ScriptedTransport::default().reply_json(
        200,
        json!({ "numero": 2, "agencia": 1, "titular": { "nome": "Bruno", "cpf": "222" }, "saldo": 40.5 }),
    );
    let client = build_client(&transport);

    let outcome = client.show_statement("2").await;

    assert_eq!(transport.requests()[0].path, "/contas/2");

    let statement = outcome.statement.clone().unwrap();
    assert_eq!(statement.holder, "Bruno");
    assert_eq!(statement.tax_id, "222");
    assert_eq!(statement.balance, "R$ 40.50");
    assert_eq!(outcome.message(), Some(statement.to_string().as_str()));
    assert_eq!(transport.list_fetches(), 0);
}

#[tokio::test]
async fn show_statement_not_found() {
    let transport = ScriptedTransport::default().reply(404, "");
    let client = build_client(&transport);

    let outcome = client.show_statement("99").await;

    assert_eq!(outcome.message(), Some(messages::ACCOUNT_NOT_FOUND));
    assert_eq!(outcome.statement, None);
}

#[tokio::test]
async fn show_statement_requires_account_and_survives_network_error() {
    let transport = ScriptedTransport::default().disconnect();
    let client = build_client(&transport);

    assert_eq!(
        client.show_statement("").await.message(),
        Some(messages::STATEMENT_PROMPT)
    );
    assert!(transport.requests().is_empty());

    assert_eq!(
        client.show_statement("1").await.message(),
        Some(messages::STATEMENT_FAILED)
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_mutations_each_reload_after_their_own_request() {
    let transport = ScriptedTransport::default()
        .reply(200, "first")
        .reply_json(200, json!([]))
        .reply(200, "second")
        .reply_json(200, accounts_json());
    let client = Arc::new(build_client(&transport));

    let first = {
        let client = client.clone();
        tokio::spawn(async move { client.deposit("1", "1").await })
    };
    let second = {
        let client = client.clone();
        tokio::spawn(async move { client.deposit("1", "2").await })
    };

    let first = first.await.unwrap();
    let second = second.await.unwrap();

    let paths: Vec<String> = transport
        .requests()
        .into_iter()
        .map(|request| request.path)
        .collect();

    assert_eq!(
        paths,
        vec!["/contas/1/deposito", "/contas", "/contas/1/deposito", "/contas"]
    );

    // Whichever ran first got the empty list, the other the two accounts
    let mut rows: Vec<usize> = [first, second]
        .iter()
        .map(|outcome| outcome.table.as_ref().unwrap().row_count())
        .collect();
    rows.sort();
    assert_eq!(rows, vec![1, 2]);
}
