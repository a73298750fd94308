use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_CURRENCY: &str = "R$";

/// Connection and presentation settings injected into the client at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Endpoint base, e.g. `http://localhost:8080/api`
    pub base_url: String,

    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,

    /// Prefix shown before balances on statements
    pub currency: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        return Self {
            base_url: base_url.into(),
            ..Self::default()
        };
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        return self;
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        return self;
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        return Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            currency: DEFAULT_CURRENCY.to_string(),
        };
    }
}
