// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Closure-backed notifier.

use std::sync::Arc;

use crate::error::NotifyError;

use super::Notifier;

/// Type alias for alert callbacks.
type AlertCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Notifier that forwards each alert to a closure.
///
/// Cloning shares the same closure.
///
/// # Examples
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use wattkeep_lib::notify::{CallbackNotifier, Notifier};
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
/// let notifier = CallbackNotifier::new(move |msg| sink.lock().unwrap().push(msg.to_string()));
///
/// notifier.send_alert("Overload detected").unwrap();
/// assert_eq!(seen.lock().unwrap().len(), 1);
/// ```
#[derive(Clone)]
pub struct CallbackNotifier {
    callback: AlertCallback,
}

impl CallbackNotifier {
    /// Creates a notifier that calls `callback` for every alert.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        Self {
            callback: Arc::new(callback),
        }
    }
}

impl Notifier for CallbackNotifier {
    fn send_alert(&self, message: &str) -> Result<(), NotifyError> {
        (self.callback)(message);
        Ok(())
    }
}

impl std::fmt::Debug for CallbackNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackNotifier").finish_non_exhaustive()
    }
}
