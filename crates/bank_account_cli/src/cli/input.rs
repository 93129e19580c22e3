use bank_account::{Action, ErrorKind};
use thiserror::Error;

/// A parsed input line.
#[derive(Clone, Debug, PartialEq)]
pub enum Input {
    /// A text command, expanded into the actions it stands for.
    Command { name: String, actions: Vec<Action> },
    /// An action given as JSON, dispatched as is.
    Raw(Action),
    Help,
    Quit,
    Empty,
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error(transparent)]
    Action(#[from] bank_account::Error),
    #[error("'{0}' expects an amount")]
    MissingAmount(String),
    #[error("invalid amount '{0}', expected a non-negative number")]
    InvalidAmount(String),
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
}

impl InputError {
    /// Whether the line named an action that does not exist or could not be
    /// decoded, as opposed to a bad amount typed by the user.
    pub fn is_action_error(&self) -> bool {
        matches!(self, InputError::Action(_))
    }
}

/// Parses one line of input.
///
/// `deposit`, `withdraw` and `loan` stage the amount and then confirm it.
/// Other words are decoded as action names, so `payLoan` works as well as
/// `pay`.
pub fn parse_line(line: &str) -> Result<Input, InputError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(Input::Empty);
    }

    if line.starts_with('{') {
        let action = Action::from_json(line)?;
        if let Some(amount) = action.payload() {
            check_amount(amount, &amount.to_string())?;
        }
        return Ok(Input::Raw(action));
    }

    let mut words = line.split_whitespace();
    let name = words.next().unwrap_or_default();
    let argument = words.next();
    if let Some(extra) = words.next() {
        return Err(InputError::UnexpectedArgument(extra.to_string()));
    }

    let no_argument = || match argument {
        Some(arg) => Err(InputError::UnexpectedArgument(arg.to_string())),
        None => Ok(()),
    };
    let actions = match name {
        "help" | "?" => return no_argument().map(|_| Input::Help),
        "quit" | "exit" => return no_argument().map(|_| Input::Quit),
        "open" => no_argument().map(|_| vec![Action::OpenAccount])?,
        "deposit" => {
            let amount = parse_amount(name, argument)?;
            vec![Action::SetPendingDeposit(amount), Action::ConfirmDeposit]
        }
        "withdraw" => {
            let amount = parse_amount(name, argument)?;
            vec![Action::SetPendingWithdrawal(amount), Action::ConfirmWithdrawal]
        }
        "loan" => {
            let amount = parse_amount(name, argument)?;
            vec![Action::SetPendingLoanRequest(amount), Action::RequestLoan]
        }
        "pay" => no_argument().map(|_| vec![Action::PayLoan])?,
        "close" => no_argument().map(|_| vec![Action::CloseAccount])?,
        _ => {
            let payload = argument
                .map(|arg| parse_amount(name, Some(arg)))
                .transpose()?;
            let action = Action::from_parts(name, payload).map_err(|err| match err.kind() {
                ErrorKind::MissingPayload(_) => InputError::MissingAmount(name.to_string()),
                _ => InputError::Action(err),
            })?;
            vec![action]
        }
    };

    Ok(Input::Command {
        name: name.to_string(),
        actions,
    })
}

/// Parses a user supplied amount, which must be finite and non-negative.
pub fn parse_amount(name: &str, argument: Option<&str>) -> Result<f64, InputError> {
    let arg = argument.ok_or_else(|| InputError::MissingAmount(name.to_string()))?;
    let amount = arg
        .parse::<f64>()
        .map_err(|_| InputError::InvalidAmount(arg.to_string()))?;
    check_amount(amount, arg)
}

fn check_amount(amount: f64, input: &str) -> Result<f64, InputError> {
    if amount.is_finite() && amount >= 0.0 {
        Ok(amount)
    } else {
        Err(InputError::InvalidAmount(input.to_string()))
    }
}
