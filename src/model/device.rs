// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Controllable appliance record.

use serde::{Deserialize, Serialize};

use crate::types::{PowerState, Watts};

use super::DeviceId;

/// One controllable appliance.
///
/// Stores hand out owned copies; changing a `Device` has no effect until it
/// is passed back to [`DeviceStore::update`](crate::store::DeviceStore::update).
///
/// # Examples
///
/// ```
/// use wattkeep_lib::model::Device;
/// use wattkeep_lib::types::Watts;
///
/// let heater = Device::new(1, "Heater", Watts::new(1000.0).unwrap()).with_power(true);
///
/// assert!(heater.is_on);
/// assert_eq!(heater.effective_draw(), Watts::new(1000.0).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Device {
    /// Stable identifier.
    pub id: DeviceId,
    /// Human-readable label.
    #[serde(default)]
    pub name: String,
    /// Whether the device is switched on.
    #[serde(default)]
    pub is_on: bool,
    /// Rated draw, counted only while the device is on. Required.
    #[serde(rename = "power_usage_watts")]
    pub power_usage: Watts,
}

impl Device {
    /// Creates a switched-off device.
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>, power_usage: Watts) -> Self {
        Self {
            id: DeviceId::new(id),
            name: name.into(),
            is_on: false,
            power_usage,
        }
    }

    /// Sets the initial operating state.
    #[must_use]
    pub fn with_power(mut self, is_on: bool) -> Self {
        self.is_on = is_on;
        self
    }

    /// Returns the operating state.
    #[must_use]
    pub fn power_state(&self) -> PowerState {
        PowerState::from(self.is_on)
    }

    /// Returns the draw this device currently contributes to usage.
    ///
    /// Off devices contribute nothing regardless of their rating.
    #[must_use]
    pub fn effective_draw(&self) -> Watts {
        if self.is_on {
            self.power_usage
        } else {
            Watts::zero()
        }
    }
}
