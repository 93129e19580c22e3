use serde::{Deserialize, Serialize};

/// A fact produced by an accepted action.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum AccountEvent {
    AccountOpened { initial_balance: f64 },
    PendingDepositSet { amount: f64 },
    FundsDeposited { amount: f64 },
    PendingWithdrawalSet { amount: f64 },
    FundsWithdrawn { amount: f64 },
    PendingLoanRequestSet { amount: f64 },
    LoanGranted { amount: f64 },
    LoanRepaid { amount: f64 },
    AccountClosed,
}

impl AccountEvent {
    pub fn event_type(&self) -> &'static str {
        use AccountEvent::*;

        match self {
            AccountOpened { .. } => "AccountOpened",
            PendingDepositSet { .. } => "PendingDepositSet",
            FundsDeposited { .. } => "FundsDeposited",
            PendingWithdrawalSet { .. } => "PendingWithdrawalSet",
            FundsWithdrawn { .. } => "FundsWithdrawn",
            PendingLoanRequestSet { .. } => "PendingLoanRequestSet",
            LoanGranted { .. } => "LoanGranted",
            LoanRepaid { .. } => "LoanRepaid",
            AccountClosed => "AccountClosed",
        }
    }
}
