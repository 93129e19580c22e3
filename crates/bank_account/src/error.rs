use std::fmt;

use thiserror::Error;

/// Error decoding an action that arrived by name.
///
/// Rejected transitions are never reported through this type, see
/// [`Rejection`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("unknown action '{0}'")]
    UnknownAction(String),
    #[error("action '{0}' requires a numeric payload")]
    MissingPayload(String),
    #[error("failed to deserialize action: {0}")]
    DeserializeAction(String),
}

impl Error {
    /// Creates an error for an action name outside the known set.
    pub fn unknown_action(name: impl Into<String>) -> Self {
        Error {
            kind: ErrorKind::UnknownAction(name.into()),
        }
    }

    /// Creates an error for an amount-carrying action sent without an amount.
    pub fn missing_payload(name: impl Into<String>) -> Self {
        Error {
            kind: ErrorKind::MissingPayload(name.into()),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn is_unknown_action(&self) -> bool {
        matches!(self.kind, ErrorKind::UnknownAction(_))
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error { kind }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        ErrorKind::DeserializeAction(err.to_string()).into()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl std::error::Error for Error {}

/// Reason an action left the account unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("account is not active")]
    AccountInactive,
    #[error("withdrawal exceeds the balance")]
    InsufficientBalance,
    #[error("a loan is already outstanding")]
    LoanOutstanding,
    #[error("balance does not cover the outstanding loan")]
    InsufficientBalanceForRepayment,
    #[error("account still holds a balance or a loan")]
    AccountNotSettled,
}
