// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Event system for device toggles, overloads and plan changes.
//!
//! The services can be given an [`EventBus`]; when they are, every
//! successful state-changing operation publishes a [`MonitorEvent`].
//!
//! # Examples
//!
//! ```
//! use wattkeep_lib::event::{EventBus, MonitorEvent};
//! use wattkeep_lib::model::PlanId;
//! use wattkeep_lib::types::KilowattHours;
//!
//! let bus = EventBus::new();
//! let mut rx = bus.subscribe();
//!
//! let previous = KilowattHours::new(5.0).unwrap();
//! let current = KilowattHours::new(10.5).unwrap();
//! bus.publish(MonitorEvent::plan_updated(PlanId::new(), previous, current));
//!
//! assert!(matches!(rx.try_recv(), Ok(MonitorEvent::PlanUpdated { .. })));
//! ```

mod event_bus;
mod monitor_event;

pub use event_bus::EventBus;
pub use monitor_event::MonitorEvent;
