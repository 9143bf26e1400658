// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Channel-backed notifier.

use tokio::sync::mpsc;

use crate::error::NotifyError;

use super::Notifier;

/// Notifier that queues alerts on an unbounded tokio channel.
///
/// Sending never blocks, so it can be called from synchronous code. The
/// receiving half is typically drained by an async task that forwards alerts
/// to e-mail, push or chat.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    sender: mpsc::UnboundedSender<String>,
}

impl ChannelNotifier {
    /// Creates a notifier and the receiver its alerts arrive on.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl Notifier for ChannelNotifier {
    fn send_alert(&self, message: &str) -> Result<(), NotifyError> {
        self.sender
            .send(message.to_string())
            .map_err(|_| NotifyError::Closed)
    }
}
