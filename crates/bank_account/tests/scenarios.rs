use bank_account::{
    dispatch, transition, AccountEvent, AccountState, Action, RawAction, Rejection,
    OPENING_BALANCE,
};
use bank_account_testing::*;

fn opened() -> AccountEvent {
    AccountEvent::AccountOpened {
        initial_balance: OPENING_BALANCE,
    }
}

#[test]
fn open_account() {
    AccountState::given_no_events()
        .when(|state| state.handle(Action::OpenAccount))
        .then_ok(opened())
        .apply()
        .should_eq(AccountState {
            balance: 500.0,
            is_active: true,
            ..AccountState::initial()
        });
}

#[test]
fn deposit_funds() {
    AccountState::given_no_events()
        // Deposit before opening
        .when(|state| state.handle(Action::SetPendingDeposit(100.0)))
        .then_err(Rejection::AccountInactive)
        .when(|state| state.handle(Action::ConfirmDeposit))
        .then_err(Rejection::AccountInactive)
        // Open account
        .when(|state| state.handle(Action::OpenAccount))
        .then_ok(opened())
        .apply()
        // Stage and confirm
        .when(|state| state.handle(Action::SetPendingDeposit(500.0)))
        .then_ok(AccountEvent::PendingDepositSet { amount: 500.0 })
        .apply()
        .when(|state| state.handle(Action::ConfirmDeposit))
        .then_ok(AccountEvent::FundsDeposited { amount: 500.0 })
        .apply()
        // Confirming again deposits the same staged amount
        .when(|state| state.handle(Action::ConfirmDeposit))
        .then_ok(AccountEvent::FundsDeposited { amount: 500.0 })
        .apply()
        .should_eq(AccountState {
            balance: 1500.0,
            pending_deposit: 500.0,
            is_active: true,
            ..AccountState::initial()
        });
}

#[test]
fn withdraw_funds() {
    AccountState::given(opened())
        .when(|state| state.handle(Action::SetPendingWithdrawal(600.0)))
        .then_ok(AccountEvent::PendingWithdrawalSet { amount: 600.0 })
        .apply()
        // More than the balance
        .when(|state| state.handle(Action::ConfirmWithdrawal))
        .then_err(Rejection::InsufficientBalance)
        .should_be_unchanged_by(Action::ConfirmWithdrawal)
        // Exactly the balance
        .dispatch(Action::SetPendingWithdrawal(500.0))
        .when(|state| state.handle(Action::ConfirmWithdrawal))
        .then_ok(AccountEvent::FundsWithdrawn { amount: 500.0 })
        .apply()
        .should_eq(AccountState {
            pending_withdrawal: 500.0,
            is_active: true,
            ..AccountState::initial()
        });
}

#[test]
fn request_loan() {
    AccountState::given(opened())
        .dispatch(Action::SetPendingLoanRequest(300.0))
        .when(|state| state.handle(Action::RequestLoan))
        .then_ok(AccountEvent::LoanGranted { amount: 300.0 })
        .apply()
        .should_eq(AccountState {
            balance: 800.0,
            loan: 300.0,
            pending_loan_request: 300.0,
            is_active: true,
            ..AccountState::initial()
        })
        // A second loan, whatever the staged amount
        .dispatch(Action::SetPendingLoanRequest(50.0))
        .when(|state| state.handle(Action::RequestLoan))
        .then_err(Rejection::LoanOutstanding)
        .should_be_unchanged_by(Action::RequestLoan);
}

#[test]
fn pay_loan() {
    AccountState::given_events([
        opened(),
        AccountEvent::PendingLoanRequestSet { amount: 300.0 },
        AccountEvent::LoanGranted { amount: 300.0 },
        AccountEvent::PendingWithdrawalSet { amount: 600.0 },
        AccountEvent::FundsWithdrawn { amount: 600.0 },
    ])
    // Balance 200 < loan 300
    .when(|state| state.handle(Action::PayLoan))
    .then_err(Rejection::InsufficientBalanceForRepayment)
    .should_be_unchanged_by(Action::PayLoan)
    .dispatch(Action::SetPendingDeposit(100.0))
    .dispatch(Action::ConfirmDeposit)
    // Balance 300 == loan 300
    .when(|state| state.handle(Action::PayLoan))
    .then_ok(AccountEvent::LoanRepaid { amount: 300.0 })
    .apply()
    .should_eq(AccountState {
        balance: 0.0,
        loan: 0.0,
        pending_deposit: 100.0,
        pending_withdrawal: 600.0,
        pending_loan_request: 300.0,
        is_active: true,
    });
}

#[test]
fn pay_loan_ignores_staged_request() {
    // The staged amount changed after the loan was granted.
    AccountState::given_actions([
        Action::OpenAccount,
        Action::SetPendingLoanRequest(100.0),
        Action::RequestLoan,
        Action::SetPendingLoanRequest(5_000.0),
    ])
    .when(|state| state.handle(Action::PayLoan))
    .then_ok(AccountEvent::LoanRepaid { amount: 100.0 })
    .apply()
    .when(|state| (state.balance, state.loan))
    .then((500.0, 0.0));
}

#[test]
fn close_account() {
    // Loan outstanding, regardless of balance
    AccountState::given_state(AccountState {
        loan: 300.0,
        is_active: true,
        ..AccountState::initial()
    })
    .when(|state| state.handle(Action::CloseAccount))
    .then_err(Rejection::AccountNotSettled)
    .should_be_unchanged_by(Action::CloseAccount);

    // Balance left over
    AccountState::given(opened())
        .when(|state| state.handle(Action::CloseAccount))
        .then_err(Rejection::AccountNotSettled);

    AccountState::given_state(AccountState {
        pending_deposit: 10.0,
        pending_loan_request: 20.0,
        is_active: true,
        ..AccountState::initial()
    })
    .when(|state| state.handle(Action::CloseAccount))
    .then_ok(AccountEvent::AccountClosed)
    .apply()
    .should_be_initial();
}

#[test]
fn open_deposit_withdraw_close_round_trip() {
    AccountState::given_no_events()
        .dispatch(Action::OpenAccount)
        .dispatch(Action::SetPendingDeposit(500.0))
        .dispatch(Action::ConfirmDeposit)
        .when(|state| state.balance)
        .then(1000.0)
        .into_state();

    AccountState::given_actions([
        Action::OpenAccount,
        Action::SetPendingDeposit(500.0),
        Action::ConfirmDeposit,
        Action::SetPendingWithdrawal(1000.0),
        Action::ConfirmWithdrawal,
    ])
    .when(|state| state.balance)
    .then(0.0)
    .into_state();

    AccountState::given_actions([
        Action::OpenAccount,
        Action::SetPendingDeposit(500.0),
        Action::ConfirmDeposit,
        Action::SetPendingWithdrawal(1000.0),
        Action::ConfirmWithdrawal,
        Action::CloseAccount,
    ])
    .should_be_initial();
}

#[test]
fn reopen_after_close() {
    AccountState::given_actions([
        Action::OpenAccount,
        Action::SetPendingWithdrawal(500.0),
        Action::ConfirmWithdrawal,
        Action::CloseAccount,
        Action::OpenAccount,
    ])
    .should_eq(AccountState {
        balance: 500.0,
        is_active: true,
        ..AccountState::initial()
    });
}

#[test]
fn open_on_active_account_resets_balance() {
    AccountState::given_actions([
        Action::OpenAccount,
        Action::SetPendingDeposit(250.0),
        Action::ConfirmDeposit,
        Action::OpenAccount,
    ])
    .should_eq(AccountState {
        balance: 500.0,
        pending_deposit: 250.0,
        is_active: true,
        ..AccountState::initial()
    });
}

#[test]
fn closed_account_ignores_actions() {
    let closed = AccountState::given_actions([
        Action::OpenAccount,
        Action::SetPendingWithdrawal(500.0),
        Action::ConfirmWithdrawal,
        Action::CloseAccount,
    ])
    .should_be_initial()
    .into_state();

    for action in [
        Action::SetPendingDeposit(1.0),
        Action::ConfirmDeposit,
        Action::SetPendingWithdrawal(1.0),
        Action::ConfirmWithdrawal,
        Action::SetPendingLoanRequest(1.0),
        Action::RequestLoan,
        Action::PayLoan,
        Action::CloseAccount,
    ] {
        assert_eq!(transition(closed, action), closed, "{action}");
    }
}

#[test]
fn unknown_action_is_an_error() {
    let err = dispatch(
        AccountState::initial(),
        RawAction {
            kind: "applyInterest".to_string(),
            payload: Some(0.05),
        },
    )
    .unwrap_err();
    assert!(err.is_unknown_action());
    assert_eq!(err.to_string(), "unknown action 'applyInterest'");
}
