//! # Popup Dismiss Timer
//!
//! Runs the auto-dismiss delay as a spawned tokio task that reports back
//! through the event loop's action channel, the same way background work
//! re-enters the loop.
//!
//! At most one timer is live. Scheduling a new one aborts the previous task,
//! so the abort handle doubles as the cancellation token. Under
//! `DismissPolicy::Legacy` earlier timers are left running instead.

use log::{debug, warn};
use std::sync::mpsc;
use std::time::Duration;
use tokio::task::AbortHandle;

use crate::DismissPolicy;
use crate::core::action::Action;
use crate::core::state::PopupTicket;

pub struct DismissTimer {
    policy: DismissPolicy,
    active: Vec<(PopupTicket, AbortHandle)>,
}

impl DismissTimer {
    pub fn new(policy: DismissPolicy) -> Self {
        Self {
            policy,
            active: Vec::new(),
        }
    }

    /// Start a timer that sends `Action::PopupExpired(ticket)` after `after`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self, ticket: PopupTicket, after: Duration, tx: mpsc::Sender<Action>) {
        self.active.retain(|(_, handle)| !handle.is_finished());
        if self.policy == DismissPolicy::Supersede {
            self.cancel();
        }
        debug!("Scheduling dismiss of {:?} in {:?}", ticket, after);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(after).await;
            if tx.send(Action::PopupExpired(ticket)).is_err() {
                warn!("Failed to send PopupExpired({:?}): receiver dropped", ticket);
            }
        });
        self.active.push((ticket, handle.abort_handle()));
    }

    /// Abort every pending timer.
    pub fn cancel(&mut self) {
        for (ticket, handle) in self.active.drain(..) {
            if !handle.is_finished() {
                debug!("Aborting dismiss timer for {:?}", ticket);
                handle.abort();
            }
        }
    }

    /// Number of timers that have not yet fired.
    #[cfg(test)]
    fn pending(&self) -> usize {
        self.active.iter().filter(|(_, h)| !h.is_finished()).count()
    }
}

impl Drop for DismissTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
