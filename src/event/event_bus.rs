// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Event bus for broadcasting monitor events.

use tokio::sync::broadcast;

use super::MonitorEvent;

/// Default channel capacity for the event bus.
const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// Event bus for broadcasting monitor events to multiple subscribers.
///
/// Publishing is synchronous and never blocks, so the services can publish
/// without an async runtime. Subscribers may read with `recv().await` inside
/// a runtime or with `try_recv()` outside one.
///
/// # Capacity
///
/// The bus has a fixed capacity (default 64). A subscriber that falls behind
/// loses the oldest events and receives a `Lagged` error.
///
/// # Examples
///
/// ```
/// use wattkeep_lib::event::{EventBus, MonitorEvent};
/// use wattkeep_lib::model::DeviceId;
/// use wattkeep_lib::types::PowerState;
///
/// let bus = EventBus::new();
/// let mut rx = bus.subscribe();
///
/// bus.publish(MonitorEvent::device_toggled(DeviceId::new(1), PowerState::On));
///
/// let event = rx.try_recv().unwrap();
/// assert_eq!(event.device_id(), Some(DeviceId::new(1)));
/// ```
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<MonitorEvent>,
}

impl EventBus {
    /// Creates a new event bus with default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Creates a new event bus with the specified capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribes to events published after this call.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<MonitorEvent> {
        self.sender.subscribe()
    }

    /// Returns the number of active subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Publishes an event to all subscribers.
    ///
    /// Events are discarded when nobody is subscribed.
    pub fn publish(&self, event: MonitorEvent) {
        // Ignore errors (no subscribers)
        let _ = self.sender.send(event);
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
