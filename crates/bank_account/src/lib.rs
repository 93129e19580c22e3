//! State machine for a single bank account.
//!
//! The account is a plain value. Every [`Action`] is first handled against the
//! current [`AccountState`], producing either an [`AccountEvent`] or a
//! [`Rejection`], and accepted events are applied to a copy of the state.
//! [`transition`] wraps both steps into a pure reducer:
//!
//! ```
//! use bank_account::{transition, AccountState, Action};
//!
//! let state = AccountState::initial();
//! let state = transition(state, Action::OpenAccount);
//! let state = transition(state, Action::SetPendingDeposit(250.0));
//! let state = transition(state, Action::ConfirmDeposit);
//!
//! assert!(state.is_active);
//! assert_eq!(state.balance, 750.0);
//! ```
//!
//! Rejected actions are not errors, the state is simply returned unchanged.
//! Actions that arrive by name go through [`RawAction`], where an unknown
//! name is reported as [`ErrorKind::UnknownAction`].

mod action;
mod error;
mod event;
mod state;
mod transition;

pub use action::{Action, RawAction};
pub use error::{Error, ErrorKind, Rejection};
pub use event::AccountEvent;
pub use state::{AccountState, OPENING_BALANCE};
pub use transition::{dispatch, step, transition, Step};
