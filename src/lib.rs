// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `WattKeep` Lib - household device control and daily energy plan monitoring.
//!
//! This library holds the rules for switching devices on and off, adding up
//! what the switched-on devices draw, and comparing that against a daily
//! energy plan. Storage and alert delivery stay with the application, which
//! plugs them in through small traits.
//!
//! # Supported Features
//!
//! - **Device control**: Switch devices on/off, list active devices
//! - **Usage accounting**: Combined draw of active devices in kWh
//! - **Overload alerts**: Notify when usage exceeds the plan's daily limit
//! - **Plan updates**: Replace the daily limit, keeping the rest of the plan
//! - **Events**: Optional broadcast of toggles, overloads and plan changes
//!
//! # Collaborators
//!
//! - [`store::DeviceStore`] / [`store::PlanStore`]: where devices and the plan
//!   live (in-memory implementations included)
//! - [`notify::Notifier`]: how alerts reach people (log, callback and channel
//!   implementations included)
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use wattkeep_lib::config::HouseholdConfig;
//! use wattkeep_lib::model::DeviceId;
//! use wattkeep_lib::notify::LogNotifier;
//! use wattkeep_lib::service::{DeviceControlService, EnergyMonitorService};
//! use wattkeep_lib::types::KilowattHours;
//!
//! fn main() -> wattkeep_lib::Result<()> {
//!     let config = HouseholdConfig::from_json(r#"{
//!         "devices": [
//!             { "id": 1, "name": "Heater", "power_usage_watts": 1000 },
//!             { "id": 2, "name": "TV", "power_usage_watts": 500 }
//!         ],
//!         "plan": { "daily_limit_kwh": 1.0 }
//!     }"#)?;
//!     let (devices, plans) = config.into_stores();
//!     let devices = Arc::new(devices);
//!
//!     let control = DeviceControlService::new(devices.clone());
//!     let monitor = EnergyMonitorService::new(devices, Arc::new(plans), Arc::new(LogNotifier));
//!
//!     control.toggle_device(DeviceId::new(1), true)?;
//!     control.toggle_device(DeviceId::new(2), true)?;
//!
//!     // 1.5 kWh against a 1 kWh plan: logs an overload alert
//!     monitor.check_for_overload()?;
//!
//!     monitor.update_energy_limit(KilowattHours::new(2.0)?)?;
//!     assert!(!monitor.usage_report()?.is_overload());
//!     Ok(())
//! }
//! ```
//!
//! ## Events
//!
//! ```
//! use std::sync::Arc;
//! use wattkeep_lib::event::{EventBus, MonitorEvent};
//! use wattkeep_lib::model::{Device, DeviceId};
//! use wattkeep_lib::service::DeviceControlService;
//! use wattkeep_lib::store::MemoryDeviceStore;
//! use wattkeep_lib::types::Watts;
//!
//! # fn main() -> wattkeep_lib::Result<()> {
//! let bus = EventBus::new();
//! let mut events = bus.subscribe();
//!
//! let store = MemoryDeviceStore::with_devices([Device::new(1, "Lamp", Watts::new(60.0)?)]);
//! let control = DeviceControlService::new(Arc::new(store)).with_event_bus(bus);
//!
//! control.toggle_device(DeviceId::new(1), true)?;
//! assert!(matches!(events.try_recv(), Ok(MonitorEvent::DeviceToggled { .. })));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod event;
pub mod model;
pub mod notify;
pub mod service;
pub mod store;
pub mod types;

pub use config::HouseholdConfig;
pub use error::{ConfigError, Error, NotifyError, Result, StoreError, ValueError};
pub use event::{EventBus, MonitorEvent};
pub use model::{Device, DeviceId, EnergyPlan, PlanId};
pub use notify::{CallbackNotifier, ChannelNotifier, LogNotifier, Notifier};
pub use service::{DeviceControlService, EnergyMonitorService, OVERLOAD_ALERT_PREFIX, UsageReport};
pub use store::{DeviceStore, MemoryDeviceStore, MemoryPlanStore, PlanStore};
pub use types::{KilowattHours, PowerState, Watts};
