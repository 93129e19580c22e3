use serde::{Deserialize, Serialize};

use crate::{AccountEvent, Action, Rejection};

/// Minimum deposit required to open an account, credited as its balance.
pub const OPENING_BALANCE: f64 = 500.0;

/// Snapshot of a single bank account.
///
/// An inactive account always holds a zero balance and no loan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountState {
    pub balance: f64,
    /// Outstanding loan principal.
    pub loan: f64,
    pub pending_deposit: f64,
    pub pending_withdrawal: f64,
    pub pending_loan_request: f64,
    pub is_active: bool,
}

impl AccountState {
    /// The state of an account that was never opened, or has been closed.
    pub const fn initial() -> Self {
        AccountState {
            balance: 0.0,
            loan: 0.0,
            pending_deposit: 0.0,
            pending_withdrawal: 0.0,
            pending_loan_request: 0.0,
            is_active: false,
        }
    }

    pub fn is_initial(&self) -> bool {
        *self == Self::initial()
    }

    /// Decides whether `action` applies to this state.
    ///
    /// Nothing is modified here, the returned event still has to be
    /// [applied](Self::apply).
    pub fn handle(&self, action: Action) -> Result<AccountEvent, Rejection> {
        use AccountEvent::*;

        if !self.is_active && action != Action::OpenAccount {
            return Err(Rejection::AccountInactive);
        }

        match action {
            Action::OpenAccount => Ok(AccountOpened {
                initial_balance: OPENING_BALANCE,
            }),
            Action::SetPendingDeposit(amount) => Ok(PendingDepositSet { amount }),
            Action::ConfirmDeposit => Ok(FundsDeposited {
                amount: self.pending_deposit,
            }),
            Action::SetPendingWithdrawal(amount) => Ok(PendingWithdrawalSet { amount }),
            Action::ConfirmWithdrawal => {
                if self.pending_withdrawal <= self.balance {
                    Ok(FundsWithdrawn {
                        amount: self.pending_withdrawal,
                    })
                } else {
                    Err(Rejection::InsufficientBalance)
                }
            }
            Action::SetPendingLoanRequest(amount) => Ok(PendingLoanRequestSet { amount }),
            Action::RequestLoan => {
                if self.loan == 0.0 {
                    Ok(LoanGranted {
                        amount: self.pending_loan_request,
                    })
                } else {
                    Err(Rejection::LoanOutstanding)
                }
            }
            Action::PayLoan => {
                if self.balance >= self.loan {
                    Ok(LoanRepaid { amount: self.loan })
                } else {
                    Err(Rejection::InsufficientBalanceForRepayment)
                }
            }
            Action::CloseAccount => {
                if self.loan == 0.0 && self.balance == 0.0 {
                    Ok(AccountClosed)
                } else {
                    Err(Rejection::AccountNotSettled)
                }
            }
        }
    }

    pub fn apply(&mut self, event: AccountEvent) {
        use AccountEvent::*;

        match event {
            AccountOpened { initial_balance } => {
                self.is_active = true;
                self.balance = initial_balance;
            }
            PendingDepositSet { amount } => self.pending_deposit = amount,
            FundsDeposited { amount } => self.balance += amount,
            PendingWithdrawalSet { amount } => self.pending_withdrawal = amount,
            FundsWithdrawn { amount } => self.balance -= amount,
            PendingLoanRequestSet { amount } => self.pending_loan_request = amount,
            LoanGranted { amount } => {
                self.loan += amount;
                self.balance += amount;
            }
            LoanRepaid { amount } => {
                self.balance -= amount;
                self.loan = 0.0;
            }
            AccountClosed => *self = Self::initial(),
        }
    }
}
