// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Records exchanged with the collaborator stores.
//!
//! - [`Device`] - a controllable appliance and its rated draw
//! - [`EnergyPlan`] - the single active daily budget
//!
//! Aggregate usage is never stored; it is derived from the devices each time
//! it is needed.

mod device;
mod id;
mod plan;

pub use device::Device;
pub use id::{DeviceId, PlanId};
pub use plan::{DEFAULT_PLAN_NAME, EnergyPlan};
