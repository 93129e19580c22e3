mod input;

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{Context, Result};
use bank_account::{AccountState, Action};
use clap::Parser;
use tokio::fs::File;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::info;

use self::input::{parse_line, Input};
use crate::store::AccountStore;
use crate::terminal::{Color, Terminal, Verbosity};

/// Operate a single bank account from the terminal
#[derive(Parser, Debug)]
#[command(name = "bank-account", version, about, long_about = None)]
pub struct Cli {
    /// Script of commands to run, one per line; reads stdin when omitted
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
    /// Print each resulting state as a JSON line
    #[arg(long, env = "BANK_ACCOUNT_JSON")]
    json: bool,
    /// Coloring: auto, always, never
    #[arg(long, env = "BANK_ACCOUNT_COLOR", value_enum, default_value_t = Color::Auto)]
    pub color: Color,
    /// Print details of every dispatched action
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,
    /// Only print the account and errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else if self.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}

/// Text commands offered by `help`, with a representative action each.
const COMMANDS: [(&str, Action); 6] = [
    ("open", Action::OpenAccount),
    ("deposit <amount>", Action::ConfirmDeposit),
    ("withdraw <amount>", Action::ConfirmWithdrawal),
    ("loan <amount>", Action::RequestLoan),
    ("pay", Action::PayLoan),
    ("close", Action::CloseAccount),
];

pub async fn run(cli: Cli) -> Result<()> {
    let interactive = cli.file.is_none() && std::io::stdin().is_terminal();
    let reader: Box<dyn AsyncBufRead + Unpin> = match &cli.file {
        Some(path) => {
            let file = File::open(path)
                .await
                .with_context(|| format!("failed to open script {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(io::stdin())),
    };

    let session = Session {
        store: AccountStore::spawn(AccountState::initial()),
        terminal: Terminal::new(cli.verbosity(), cli.color),
        json: cli.json,
    };

    info!(interactive, "session started");
    if interactive {
        session
            .terminal
            .status("Ready", "type `help` for the available commands")?;
    }
    session.render(&session.store.snapshot().await?)?;
    session.run_lines(reader, interactive).await?;
    info!("session ended");

    Ok(())
}

struct Session {
    store: AccountStore,
    terminal: Terminal,
    json: bool,
}

impl Session {
    /// Handles input lines until the reader is exhausted or `quit` is read.
    ///
    /// Outside interactive mode an unknown or undecodable action aborts the
    /// session.
    async fn run_lines<R>(&self, reader: R, interactive: bool) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = reader.lines();
        let mut line_number = 0;
        while let Some(line) = lines.next_line().await.context("failed to read input")? {
            line_number += 1;

            let input = match parse_line(&line) {
                Ok(input) => input,
                Err(err) if err.is_action_error() && !interactive => {
                    return Err(err)
                        .with_context(|| format!("invalid action on line {line_number}"));
                }
                Err(err) if err.is_action_error() => {
                    self.terminal.error(err)?;
                    continue;
                }
                Err(err) => {
                    self.terminal.warn(err)?;
                    continue;
                }
            };

            match input {
                Input::Empty => {}
                Input::Quit => break,
                Input::Help => self.help().await?,
                Input::Command { name, actions } => self.command(&name, actions).await?,
                Input::Raw(action) => self.dispatch_all(&[action]).await?,
            }
        }

        Ok(())
    }

    /// Runs a text command, unless it is unavailable for the current state.
    async fn command(&self, name: &str, actions: Vec<Action>) -> Result<()> {
        let state = self.store.snapshot().await?;
        if let Some(action) = actions.first() {
            if !action.is_enabled(&state) {
                let reason = if state.is_active {
                    "the account is already open"
                } else {
                    "the account is not open"
                };
                return self.terminal.warn(format!("`{name}` is unavailable, {reason}"));
            }
        }

        self.dispatch_all(&actions).await
    }

    /// Dispatches actions in order, stopping at the first rejection.
    async fn dispatch_all(&self, actions: &[Action]) -> Result<()> {
        let mut state = self.store.snapshot().await?;
        for &action in actions {
            let step = self.store.dispatch(action).await?;
            state = step.state;
            match step.outcome {
                Ok(event) => self
                    .terminal
                    .note(format!("{action} produced {}", event.event_type()))?,
                Err(rejection) => {
                    self.terminal
                        .warn(format!("{action} rejected: {rejection}"))?;
                    break;
                }
            }
        }

        self.render(&state)
    }

    async fn help(&self) -> Result<()> {
        let state = self.store.snapshot().await?;
        let available: Vec<_> = COMMANDS
            .iter()
            .filter(|(_, action)| action.is_enabled(&state))
            .map(|(usage, _)| *usage)
            .collect();

        self.terminal.status("Commands", available.join(", "))?;
        self.terminal
            .status("Also", "help, quit, or any action as JSON")
    }

    fn render(&self, state: &AccountState) -> Result<()> {
        if self.json {
            let line = serde_json::to_string(state).context("failed to serialize account")?;
            self.terminal.write_stdout(line)
        } else {
            self.terminal.write_stdout(format_state(state))
        }
    }
}

fn format_state(state: &AccountState) -> String {
    format!(
        "Balance: {}  Loan: {}  Active: {}",
        state.balance,
        state.loan,
        if state.is_active { "yes" } else { "no" }
    )
}
