// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Monitor event types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{DeviceId, PlanId};
use crate::types::{KilowattHours, PowerState};

/// Events emitted by the control and monitor services.
///
/// Events are published after the corresponding store or notifier call has
/// succeeded, so a subscriber never sees an event for a failed operation.
///
/// # Examples
///
/// ```
/// use wattkeep_lib::event::MonitorEvent;
/// use wattkeep_lib::model::DeviceId;
/// use wattkeep_lib::types::PowerState;
///
/// let event = MonitorEvent::device_toggled(DeviceId::new(1), PowerState::On);
/// assert_eq!(event.device_id(), Some(DeviceId::new(1)));
/// assert!(!event.is_overload());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MonitorEvent {
    /// A device was switched and the new state persisted.
    DeviceToggled {
        /// The ID of the device.
        device_id: DeviceId,
        /// The state that was written.
        state: PowerState,
    },

    /// Usage exceeded the plan limit and an alert was sent.
    OverloadDetected {
        /// Usage at the time of the check.
        usage: KilowattHours,
        /// The limit that was exceeded.
        limit: KilowattHours,
        /// When the overload was detected.
        at: DateTime<Utc>,
    },

    /// The plan's daily limit was replaced.
    PlanUpdated {
        /// The plan that was updated.
        plan_id: PlanId,
        /// Limit before the update.
        previous: KilowattHours,
        /// Limit after the update.
        current: KilowattHours,
    },
}

impl MonitorEvent {
    /// Returns the device ID for device events.
    #[must_use]
    pub fn device_id(&self) -> Option<DeviceId> {
        match self {
            Self::DeviceToggled { device_id, .. } => Some(*device_id),
            Self::OverloadDetected { .. } | Self::PlanUpdated { .. } => None,
        }
    }

    /// Returns `true` if this is an overload event.
    #[must_use]
    pub fn is_overload(&self) -> bool {
        matches!(self, Self::OverloadDetected { .. })
    }

    /// Creates a device toggled event.
    #[must_use]
    pub fn device_toggled(device_id: DeviceId, state: PowerState) -> Self {
        Self::DeviceToggled { device_id, state }
    }

    /// Creates an overload event stamped with the current time.
    #[must_use]
    pub fn overload_detected(usage: KilowattHours, limit: KilowattHours) -> Self {
        Self::OverloadDetected {
            usage,
            limit,
            at: Utc::now(),
        }
    }

    /// Creates a plan updated event.
    #[must_use]
    pub fn plan_updated(plan_id: PlanId, previous: KilowattHours, current: KilowattHours) -> Self {
        Self::PlanUpdated {
            plan_id,
            previous,
            current,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kwh(value: f64) -> KilowattHours {
        KilowattHours::new(value).unwrap()
    }

    #[test]
    fn device_id_only_for_device_events() {
        let toggled = MonitorEvent::device_toggled(DeviceId::new(4), PowerState::Off);
        assert_eq!(toggled.device_id(), Some(DeviceId::new(4)));

        let overload = MonitorEvent::overload_detected(kwh(1.5), kwh(1.0));
        assert_eq!(overload.device_id(), None);

        let plan = MonitorEvent::plan_updated(PlanId::new(), kwh(5.0), kwh(10.5));
        assert_eq!(plan.device_id(), None);
    }

    #[test]
    fn overload_event_is_timestamped() {
        let before = Utc::now();
        let event = MonitorEvent::overload_detected(kwh(1.5), kwh(1.0));

        let MonitorEvent::OverloadDetected { at, .. } = event else {
            panic!("expected overload event");
        };
        assert!(at >= before);
    }

    #[test]
    fn is_overload() {
        assert!(MonitorEvent::overload_detected(kwh(2.0), kwh(1.0)).is_overload());
        assert!(!MonitorEvent::device_toggled(DeviceId::new(1), PowerState::On).is_overload());
    }

    #[test]
    fn serializes_to_json() {
        let event = MonitorEvent::device_toggled(DeviceId::new(2), PowerState::On);
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "DeviceToggled": { "device_id": 2, "state": "ON" } })
        );
    }
}
