use anyhow::{anyhow, Context, Result};
use bank_account::{AccountState, Action, Step};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, trace};

/// Handle to the task owning the account state.
///
/// Every dispatch is queued and applied in order, so reading the state,
/// transitioning it and storing the result never interleave.
#[derive(Clone)]
pub struct AccountStore {
    sender: mpsc::Sender<StoreMessage>,
}

enum StoreMessage {
    Dispatch {
        action: Action,
        reply: oneshot::Sender<Step>,
    },
    Snapshot {
        reply: oneshot::Sender<AccountState>,
    },
}

impl AccountStore {
    pub fn spawn(initial: AccountState) -> Self {
        let (sender, receiver) = mpsc::channel(16);
        tokio::spawn(run_account_store(receiver, initial));

        AccountStore { sender }
    }

    pub async fn dispatch(&self, action: Action) -> Result<Step> {
        let (reply, recv) = oneshot::channel();
        self.sender
            .send(StoreMessage::Dispatch { action, reply })
            .await
            .map_err(|_| anyhow!("account store stopped"))?;
        recv.await.context("no response from account store")
    }

    pub async fn snapshot(&self) -> Result<AccountState> {
        let (reply, recv) = oneshot::channel();
        self.sender
            .send(StoreMessage::Snapshot { reply })
            .await
            .map_err(|_| anyhow!("account store stopped"))?;
        recv.await.context("no response from account store")
    }
}

async fn run_account_store(mut receiver: mpsc::Receiver<StoreMessage>, mut state: AccountState) {
    while let Some(msg) = receiver.recv().await {
        match msg {
            StoreMessage::Dispatch { action, reply } => {
                let step = bank_account::step(state, action);
                match &step.outcome {
                    Ok(event) => debug!(%action, event = event.event_type(), "action applied"),
                    Err(rejection) => debug!(%action, %rejection, "action rejected"),
                }

                state = step.state;
                let _ = reply.send(step);
            }
            StoreMessage::Snapshot { reply } => {
                let _ = reply.send(state);
            }
        }
    }

    trace!("account store stopped");
}
