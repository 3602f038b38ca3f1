// SPDX-License-Identifier: MPL-2.0
//! Cross-thread access to a [`Controller`](super::Controller).
//!
//! Background tasks usually finish off the UI thread. Instead of touching the
//! controller directly they send a command through a [`PillHandle`]; the
//! controller applies queued commands at the start of its next `tick`.

use super::{Completion, PillId};
use crossbeam_channel::{Sender, TrySendError};

/// Capacity of the command channel.
pub(super) const COMMAND_CHANNEL_CAPACITY: usize = 64;

/// Deferred controller call.
#[derive(Debug)]
pub(super) enum Command {
    UpdateTask { id: PillId, message: String },
    CompletedTask { id: PillId, completion: Completion },
    Cancel { id: PillId },
}

/// Handle for driving pills from other threads.
///
/// This handle is cheap to clone and can be shared across threads.
/// Commands are sent via a bounded channel so a stalled UI thread never
/// blocks the caller.
#[derive(Clone, Debug)]
pub struct PillHandle {
    command_tx: Sender<Command>,
}

impl PillHandle {
    pub(super) fn new(command_tx: Sender<Command>) -> Self {
        Self { command_tx }
    }

    /// Queues an [`update_task`](super::Controller::update_task) call.
    ///
    /// Returns false if the command was dropped.
    pub fn update_task(&self, id: PillId, message: impl Into<String>) -> bool {
        self.send(Command::UpdateTask {
            id,
            message: message.into(),
        })
    }

    /// Queues a [`completed_task`](super::Controller::completed_task) call.
    ///
    /// Returns false if the command was dropped.
    pub fn completed_task(&self, id: PillId, completion: Completion) -> bool {
        self.send(Command::CompletedTask { id, completion })
    }

    /// Queues a [`cancel`](super::Controller::cancel) call.
    ///
    /// Returns false if the command was dropped.
    pub fn cancel(&self, id: PillId) -> bool {
        self.send(Command::Cancel { id })
    }

    fn send(&self, command: Command) -> bool {
        match self.command_tx.try_send(command) {
            Ok(()) => true,
            Err(TrySendError::Full(command)) => {
                tracing::warn!(?command, "pill command channel full, dropping command");
                false
            }
            Err(TrySendError::Disconnected(_)) => {
                tracing::debug!("pill controller dropped, ignoring command");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;

    #[test]
    fn commands_arrive_in_order() {
        let (tx, rx) = bounded(COMMAND_CHANNEL_CAPACITY);
        let handle = PillHandle::new(tx);
        let id = PillId::new();

        assert!(handle.update_task(id, "Uploading 2 of 3"));
        assert!(handle.completed_task(id, Completion::success()));

        assert!(matches!(rx.try_recv(), Ok(Command::UpdateTask { message, .. }) if message == "Uploading 2 of 3"));
        assert!(matches!(rx.try_recv(), Ok(Command::CompletedTask { .. })));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn full_channel_drops_commands() {
        let (tx, _rx) = bounded(1);
        let handle = PillHandle::new(tx);
        let id = PillId::new();

        assert!(handle.cancel(id));
        assert!(!handle.cancel(id));
    }

    #[test]
    fn disconnected_channel_drops_commands() {
        let (tx, rx) = bounded(1);
        drop(rx);
        let handle = PillHandle::new(tx);
        assert!(!handle.update_task(PillId::new(), "late"));
    }

    #[test]
    fn handle_is_usable_from_other_threads() {
        let (tx, rx) = bounded(COMMAND_CHANNEL_CAPACITY);
        let handle = PillHandle::new(tx);
        let id = PillId::new();

        std::thread::spawn(move || {
            handle.completed_task(id, Completion::failure().on_done(|| {}));
        })
        .join()
        .unwrap();

        assert!(matches!(rx.try_recv(), Ok(Command::CompletedTask { id: got, .. }) if got == id));
    }
}
