use clap::{Parser, Subcommand};

/// Console client for the digital bank accounts API
#[derive(Parser, Debug)]
#[command(name = "bank-console", version)]
pub struct Args {
    /// Base URL of the banking API
    #[arg(long, env = "BANK_CONSOLE_API_URL", default_value = bcc::DEFAULT_BASE_URL)]
    pub api_url: String,

    /// Give up on a request after this many seconds (waits indefinitely by default)
    #[arg(long, env = "BANK_CONSOLE_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Prefix shown before statement balances
    #[arg(long, default_value = bcc::DEFAULT_CURRENCY)]
    pub currency: String,

    /// Print the account table as CSV
    #[arg(long)]
    pub csv: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List all accounts
    List,

    /// Open an account for a new holder
    Create { name: String, tax_id: String },

    /// Deposit into an account
    Deposit {
        account: String,
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Withdraw from an account
    Withdraw {
        account: String,
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Move money between two accounts
    Transfer {
        source: String,
        destination: String,
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Show the statement of one account
    Statement { account: String },

    /// Load the account list, then read commands from stdin until `exit`
    Shell,
}

/// One line typed into the interactive shell
#[derive(Parser, Debug)]
#[command(name = "bank-console", no_binary_name = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: Command,
}

pub fn parse_args() -> Args {
    return Args::parse();
}
