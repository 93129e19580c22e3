//! Testing utilities for the [bank_account](bank_account) state machine.
//!
//! # Examples
//!
//! Test how an action is handled.
//!
//! ```
//! use bank_account::{AccountEvent, AccountState, Action, Rejection};
//! use bank_account_testing::*;
//!
//! AccountState::given_no_events()
//!     .when(|state| state.handle(Action::ConfirmDeposit))
//!     .then_err(Rejection::AccountInactive)
//!     .when(|state| state.handle(Action::OpenAccount))
//!     .then_ok(AccountEvent::AccountOpened {
//!         initial_balance: 500.0,
//!     })
//!     .apply()
//!     .should_eq(AccountState {
//!         balance: 500.0,
//!         is_active: true,
//!         ..AccountState::initial()
//!     });
//! ```
//!
//! Test the reducer directly.
//!
//! ```
//! use bank_account::{AccountState, Action};
//! use bank_account_testing::*;
//!
//! AccountState::given_actions([Action::OpenAccount])
//!     .should_be_unchanged_by(Action::PayLoan)
//!     .dispatch(Action::SetPendingWithdrawal(500.0))
//!     .dispatch(Action::ConfirmWithdrawal)
//!     .dispatch(Action::CloseAccount)
//!     .should_be_initial();
//! ```

#![deny(missing_docs)]

use std::fmt;

use bank_account::{transition, AccountEvent, AccountState, Action};

/// An account given previous events or actions.
pub struct GivenTest(AccountState);

/// An account when an action is performed.
pub struct WhenTest<R> {
    state: AccountState,
    result: R,
}

/// Given events or actions for an account.
pub trait Given: Sized {
    /// Given a single event.
    fn given(event: AccountEvent) -> GivenTest {
        Self::given_events([event])
    }

    /// Given events, applied in order to the initial state.
    fn given_events(events: impl IntoIterator<Item = AccountEvent>) -> GivenTest {
        let mut state = AccountState::initial();
        for event in events {
            state.apply(event);
        }
        GivenTest(state)
    }

    /// Given actions, reduced in order from the initial state.
    fn given_actions(actions: impl IntoIterator<Item = Action>) -> GivenTest {
        let state = actions
            .into_iter()
            .fold(AccountState::initial(), transition);
        GivenTest(state)
    }

    /// Given an explicit state, such as one no sequence of actions reaches.
    fn given_state(state: AccountState) -> GivenTest {
        GivenTest(state)
    }

    /// Given the initial state.
    fn given_no_events() -> GivenTest {
        GivenTest(AccountState::initial())
    }
}

impl Given for AccountState {}

impl GivenTest {
    /// When an action is handled.
    pub fn when<F, R>(self, f: F) -> WhenTest<R>
    where
        F: FnOnce(&AccountState) -> R,
    {
        let result = f(&self.0);
        WhenTest {
            state: self.0,
            result,
        }
    }

    /// Reduces the state with an action.
    pub fn dispatch(self, action: Action) -> Self {
        GivenTest(transition(self.0, action))
    }

    /// The state should equal the given state.
    pub fn should_eq(self, state: AccountState) -> Self {
        assert_eq!(self.0, state);
        self
    }

    /// The state should be back to the initial state.
    pub fn should_be_initial(self) -> Self {
        assert_eq!(self.0, AccountState::initial());
        self
    }

    /// Dispatching the action, once or twice, should leave the state unchanged.
    pub fn should_be_unchanged_by(self, action: Action) -> Self {
        let once = transition(self.0, action);
        assert_eq!(once, self.0, "{action} changed the state");
        assert_eq!(transition(once, action), self.0, "{action} changed the state");
        self
    }

    /// Get the inner state.
    pub fn into_state(self) -> AccountState {
        self.0
    }
}

impl<R> WhenTest<R> {
    /// Get the inner result from the previous when() action.
    pub fn into_result(self) -> R {
        self.result
    }

    /// Get the inner state.
    pub fn into_state(self) -> AccountState {
        self.state
    }

    /// Then the result of the previous when() action should equal the given parameter.
    pub fn then<T>(self, result: T) -> WhenTest<R>
    where
        R: fmt::Debug + PartialEq<T>,
        T: fmt::Debug,
    {
        assert_eq!(self.result, result);
        self
    }
}

impl<E> WhenTest<Result<AccountEvent, E>>
where
    E: fmt::Debug + PartialEq,
{
    /// Then the previous when() action should produce the given event.
    pub fn then_ok(self, event: AccountEvent) -> WhenTest<AccountEvent> {
        assert_eq!(self.result, Ok(event));
        WhenTest {
            state: self.state,
            result: event,
        }
    }

    /// Then the previous when() action should be rejected with the given reason.
    pub fn then_err(self, err: E) -> GivenTest {
        assert_eq!(self.result, Err(err));
        GivenTest(self.state)
    }
}

impl WhenTest<AccountEvent> {
    /// Apply the event produced by the previous when() action.
    pub fn apply(mut self) -> GivenTest {
        self.state.apply(self.result);
        GivenTest(self.state)
    }
}
