use tracing::trace;

use crate::{AccountEvent, AccountState, Action, Error, RawAction, Rejection};

/// The result of applying one action.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    /// The next state, equal to the previous one if the action was rejected.
    pub state: AccountState,
    pub outcome: Result<AccountEvent, Rejection>,
}

impl Step {
    pub fn is_rejected(&self) -> bool {
        self.outcome.is_err()
    }

    pub fn rejection(&self) -> Option<Rejection> {
        self.outcome.err()
    }
}

/// Applies `action` to `state`, reporting which event was produced or why
/// the action was rejected.
pub fn step(state: AccountState, action: Action) -> Step {
    match state.handle(action) {
        Ok(event) => {
            let mut next = state;
            next.apply(event);
            Step {
                state: next,
                outcome: Ok(event),
            }
        }
        Err(rejection) => {
            trace!(%action, %rejection, "action rejected");
            Step {
                state,
                outcome: Err(rejection),
            }
        }
    }
}

/// Pure reducer: returns the state after `action`, or `state` itself if the
/// action does not apply.
pub fn transition(state: AccountState, action: Action) -> AccountState {
    step(state, action).state
}

/// Decodes `raw` and transitions `state` with it.
///
/// An unknown action name fails instead of leaving the state unchanged.
pub fn dispatch(state: AccountState, raw: RawAction) -> Result<AccountState, Error> {
    let action = Action::try_from(raw)?;
    Ok(transition(state, action))
}
