// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Storage interfaces for devices and the energy plan.
//!
//! The services never own storage. They talk to a [`DeviceStore`] and a
//! [`PlanStore`] supplied by the integrating application, and re-read them
//! on every call.
//!
//! In-memory implementations are provided for tests and small setups:
//!
//! - [`MemoryDeviceStore`] - insertion-ordered device collection
//! - [`MemoryPlanStore`] - holder for the single current plan
//!
//! # Consistency
//!
//! Toggling a device is a read-modify-write over `get` and `update`. Stores
//! are not expected to guard that pair; callers that mutate the same record
//! from several threads must serialize those calls themselves.

mod memory;

pub use memory::{MemoryDeviceStore, MemoryPlanStore};

use crate::error::StoreError;
use crate::model::{Device, DeviceId, EnergyPlan};

/// Access to persisted device records.
pub trait DeviceStore: Send + Sync {
    /// Returns an owned copy of the device, or `None` if the id is unknown.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing storage fails.
    fn get(&self, id: DeviceId) -> Result<Option<Device>, StoreError>;

    /// Returns all devices in the store's iteration order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing storage fails.
    fn get_all(&self) -> Result<Vec<Device>, StoreError>;

    /// Persists the given device, replacing the record with the same id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the record cannot be written.
    fn update(&self, device: Device) -> Result<(), StoreError>;
}

/// Access to the single current energy plan.
pub trait PlanStore: Send + Sync {
    /// Returns the current plan.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::PlanMissing` if no plan exists, or another
    /// `StoreError` if the backing storage fails.
    fn current_plan(&self) -> Result<EnergyPlan, StoreError>;

    /// Replaces the current plan.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the plan cannot be written.
    fn update_plan(&self, plan: EnergyPlan) -> Result<(), StoreError>;
}
