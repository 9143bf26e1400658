// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device control and energy monitoring services.
//!
//! Both services are thin rule layers over injected collaborators:
//!
//! - [`DeviceControlService`] - switches single devices and lists active ones
//! - [`EnergyMonitorService`] - aggregates usage, detects overload, updates
//!   the plan limit
//!
//! Every operation is synchronous: a few store reads, a pure computation and
//! at most one write to a store or the notifier. Nothing is cached between
//! calls.

mod device_control;
mod energy_monitor;
mod usage;

pub use device_control::DeviceControlService;
pub use energy_monitor::EnergyMonitorService;
pub use usage::{OVERLOAD_ALERT_PREFIX, UsageReport};
