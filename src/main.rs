mod args;
mod config;
mod shell;
mod writer;

use args::Command;
use writer::OutputFormat;

use bcc::transport::Transport;
use bcc::view::Notice;
use bcc::{AccountConsoleClient, Outcome, Result};

use std::io;

use tokio::runtime::Runtime;

fn main() -> Result {
    config::configure_app()?;

    let args = args::parse_args();
    log::debug!("Application configured with args: {args:?}");

    let client = AccountConsoleClient::connect(config::client_config(&args))?;

    let format = if args.csv {
        OutputFormat::Csv
    } else {
        OutputFormat::Text
    };

    let rt = Runtime::new()?;
    let succeeded = rt.block_on(run(&client, args.command, format))?;

    log::debug!("Application finished, succeeded: {succeeded}");

    if !succeeded {
        std::process::exit(1);
    }

    Ok(())
}

/// Runs a single command, or the interactive shell. Returns false when the outcome carried a failure.
async fn run<T: Transport>(
    client: &AccountConsoleClient<T>,
    command: Command,
    format: OutputFormat,
) -> Result<bool> {
    if command == Command::Shell {
        shell::run(client, format).await?;
        return Ok(true);
    }

    let outcome = dispatch(client, command).await;
    writer::write_outcome(&mut io::stdout(), &outcome, format)?;

    return Ok(!outcome.is_failure());
}

/// Maps a user command onto the matching client action
pub async fn dispatch<T: Transport>(client: &AccountConsoleClient<T>, command: Command) -> Outcome {
    log::debug!("Dispatching command: {command:?}");

    return match command {
        Command::List => client.load_accounts().await,
        Command::Create { name, tax_id } => client.create_account(&name, &tax_id).await,
        Command::Deposit { account, amount } => client.deposit(&account, &amount).await,
        Command::Withdraw { account, amount } => client.withdraw(&account, &amount).await,
        Command::Transfer {
            source,
            destination,
            amount,
        } => client.transfer(&source, &destination, &amount).await,
        Command::Statement { account } => client.show_statement(&account).await,
        Command::Shell => Outcome::notice(Notice::warning("Already in the interactive shell.")),
    };
}
