// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Household configuration files.
//!
//! A household is described by a JSON document listing its devices and the
//! current energy plan:
//!
//! ```json
//! {
//!   "devices": [
//!     { "id": 1, "name": "Heater", "is_on": true, "power_usage_watts": 1000 },
//!     { "id": 2, "name": "TV", "power_usage_watts": 500 }
//!   ],
//!   "plan": { "name": "winter", "daily_limit_kwh": 12.0 }
//! }
//! ```
//!
//! The document seeds the in-memory stores. When `plan` is omitted the
//! default plan (10 kWh) is used.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::model::{Device, EnergyPlan};
use crate::store::{MemoryDeviceStore, MemoryPlanStore};

/// Devices and plan of one household.
///
/// # Examples
///
/// ```
/// use wattkeep_lib::config::HouseholdConfig;
/// use wattkeep_lib::store::PlanStore;
///
/// let config = HouseholdConfig::from_json(r#"{
///     "devices": [{ "id": 1, "name": "Heater", "power_usage_watts": 1000 }],
///     "plan": { "daily_limit_kwh": 5.0 }
/// }"#).unwrap();
///
/// let (devices, plans) = config.into_stores();
/// assert_eq!(devices.len(), 1);
/// assert_eq!(plans.current_plan().unwrap().daily_limit.value(), 5.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HouseholdConfig {
    /// Devices in store order.
    #[serde(default)]
    pub devices: Vec<Device>,
    /// The current energy plan.
    #[serde(default)]
    pub plan: EnergyPlan,
}

impl HouseholdConfig {
    /// Parses and validates a configuration document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Json` if the document is malformed, holds
    /// invalid values (for example a negative wattage), misses a device's
    /// wattage or carries an unknown key, and
    /// `ConfigError::DuplicateDevice` if two devices share an id.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read, otherwise the
    /// errors of [`from_json`](Self::from_json).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config = Self::from_json(&contents)?;

        tracing::info!(
            path = %path.display(),
            devices = config.devices.len(),
            "Loaded household configuration"
        );
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    ///
    /// Parent directories are created when missing. Nothing is written
    /// unless the configuration validates.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DuplicateDevice` if two devices share an id, and
    /// `ConfigError::Io` if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;

        tracing::info!(path = %path.display(), "Saved household configuration");
        Ok(())
    }

    /// Checks that device ids are unique.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DuplicateDevice` naming the first repeated id.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for device in &self.devices {
            if !seen.insert(device.id) {
                return Err(ConfigError::DuplicateDevice(device.id));
            }
        }
        Ok(())
    }

    /// Builds in-memory stores holding this configuration.
    #[must_use]
    pub fn into_stores(self) -> (MemoryDeviceStore, MemoryPlanStore) {
        (
            MemoryDeviceStore::with_devices(self.devices),
            MemoryPlanStore::new(self.plan),
        )
    }
}
