// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Alert delivery.
//!
//! The energy monitor hands alert text to a [`Notifier`]. How the text
//! reaches a person is up to the implementation:
//!
//! - [`LogNotifier`] - writes the alert as a `tracing` warning
//! - [`CallbackNotifier`] - calls a user-supplied closure
//! - [`ChannelNotifier`] - queues the alert on a tokio channel
//!
//! # Examples
//!
//! ```
//! use wattkeep_lib::notify::{ChannelNotifier, Notifier};
//!
//! let (notifier, mut alerts) = ChannelNotifier::new();
//! notifier.send_alert("Overload detected").unwrap();
//!
//! assert_eq!(alerts.try_recv().unwrap(), "Overload detected");
//! ```

mod callback;
mod channel;

pub use callback::CallbackNotifier;
pub use channel::ChannelNotifier;

use crate::error::NotifyError;

/// Delivers text alerts.
pub trait Notifier: Send + Sync {
    /// Delivers one alert.
    ///
    /// # Errors
    ///
    /// Returns `NotifyError` if the alert could not be delivered.
    fn send_alert(&self, message: &str) -> Result<(), NotifyError>;
}

/// Notifier that records alerts as `tracing` warnings.
///
/// Useful when alerts only need to show up in the application log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl LogNotifier {
    /// Creates a log notifier.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for LogNotifier {
    fn send_alert(&self, message: &str) -> Result<(), NotifyError> {
        tracing::warn!(alert = %message, "Energy alert");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_notifier_never_fails() {
        assert!(LogNotifier::new().send_alert("Overload detected").is_ok());
    }
}
