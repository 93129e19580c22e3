use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{AccountState, Error};

/// A command applied to an [`AccountState`].
///
/// Amount-carrying actions only stage a value. The matching confirm action
/// reads the staged value from the state, so a deposit is always
/// `SetPendingDeposit(amount)` followed by `ConfirmDeposit`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "payload",
    rename_all = "camelCase",
    try_from = "RawAction"
)]
pub enum Action {
    /// Activates the account with the opening balance.
    OpenAccount,
    SetPendingDeposit(f64),
    ConfirmDeposit,
    SetPendingWithdrawal(f64),
    ConfirmWithdrawal,
    SetPendingLoanRequest(f64),
    /// Grants the staged loan amount, if no loan is outstanding.
    RequestLoan,
    /// Repays the outstanding loan in full.
    PayLoan,
    /// Resets a settled account back to the initial state.
    CloseAccount,
}

/// An action as it arrives from outside the process: a name and an optional
/// numeric payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawAction {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<f64>,
}

impl Action {
    /// Decodes an action from its name.
    ///
    /// Besides the canonical camelCase names, the short names `deposit`,
    /// `setDeposit`, `withdraw`, `setWithdraw` and `loan` are accepted.
    pub fn from_parts(name: &str, payload: Option<f64>) -> Result<Self, Error> {
        use Action::*;

        let amount = || payload.ok_or_else(|| Error::missing_payload(name));
        let action = match name {
            "openAccount" => OpenAccount,
            "setPendingDeposit" | "deposit" => SetPendingDeposit(amount()?),
            "confirmDeposit" | "setDeposit" => ConfirmDeposit,
            "setPendingWithdrawal" | "withdraw" => SetPendingWithdrawal(amount()?),
            "confirmWithdrawal" | "setWithdraw" => ConfirmWithdrawal,
            "setPendingLoanRequest" | "loan" => SetPendingLoanRequest(amount()?),
            "requestLoan" => RequestLoan,
            "payLoan" => PayLoan,
            "closeAccount" => CloseAccount,
            _ => return Err(Error::unknown_action(name)),
        };

        Ok(action)
    }

    /// Decodes an action from a JSON object such as
    /// `{"type": "setPendingDeposit", "payload": 200}`.
    pub fn from_json(s: &str) -> Result<Self, Error> {
        let raw: RawAction = serde_json::from_str(s)?;
        raw.try_into()
    }

    pub fn name(&self) -> &'static str {
        use Action::*;

        match self {
            OpenAccount => "openAccount",
            SetPendingDeposit(_) => "setPendingDeposit",
            ConfirmDeposit => "confirmDeposit",
            SetPendingWithdrawal(_) => "setPendingWithdrawal",
            ConfirmWithdrawal => "confirmWithdrawal",
            SetPendingLoanRequest(_) => "setPendingLoanRequest",
            RequestLoan => "requestLoan",
            PayLoan => "payLoan",
            CloseAccount => "closeAccount",
        }
    }

    pub fn payload(&self) -> Option<f64> {
        match self {
            Action::SetPendingDeposit(amount)
            | Action::SetPendingWithdrawal(amount)
            | Action::SetPendingLoanRequest(amount) => Some(*amount),
            _ => None,
        }
    }

    /// Whether the action should be offered for the given state.
    ///
    /// Opening is only offered while the account is inactive, everything else
    /// only while it is active. The reducer itself still accepts
    /// [`Action::OpenAccount`] on an active account.
    pub fn is_enabled(&self, state: &AccountState) -> bool {
        match self {
            Action::OpenAccount => !state.is_active,
            _ => state.is_active,
        }
    }
}

impl TryFrom<RawAction> for Action {
    type Error = Error;

    fn try_from(raw: RawAction) -> Result<Self, Self::Error> {
        Action::from_parts(&raw.kind, raw.payload)
    }
}

impl From<Action> for RawAction {
    fn from(action: Action) -> Self {
        RawAction {
            kind: action.name().to_string(),
            payload: action.payload(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.payload() {
            Some(amount) => write!(f, "{}({amount})", self.name()),
            None => write!(f, "{}", self.name()),
        }
    }
}
