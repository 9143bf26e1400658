// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory store implementations.

use parking_lot::RwLock;

use crate::error::StoreError;
use crate::model::{Device, DeviceId, EnergyPlan};

use super::{DeviceStore, PlanStore};

/// Device store backed by a vector, preserving insertion order.
///
/// # Examples
///
/// ```
/// use wattkeep_lib::model::{Device, DeviceId};
/// use wattkeep_lib::store::{DeviceStore, MemoryDeviceStore};
/// use wattkeep_lib::types::Watts;
///
/// let store = MemoryDeviceStore::new();
/// store.insert(Device::new(1, "Lamp", Watts::new(60.0).unwrap()));
///
/// let lamp = store.get(DeviceId::new(1)).unwrap().unwrap();
/// assert_eq!(lamp.name, "Lamp");
/// ```
#[derive(Debug, Default)]
pub struct MemoryDeviceStore {
    devices: RwLock<Vec<Device>>,
}

impl MemoryDeviceStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the given devices in order.
    ///
    /// Later devices replace earlier ones with the same id.
    #[must_use]
    pub fn with_devices(devices: impl IntoIterator<Item = Device>) -> Self {
        let store = Self::new();
        for device in devices {
            store.insert(device);
        }
        store
    }

    /// Adds a device, or replaces the one with the same id in place.
    ///
    /// Returns the replaced device, if any.
    pub fn insert(&self, device: Device) -> Option<Device> {
        let mut devices = self.devices.write();
        if let Some(slot) = devices.iter_mut().find(|d| d.id == device.id) {
            return Some(std::mem::replace(slot, device));
        }
        devices.push(device);
        None
    }

    /// Removes a device and returns it.
    pub fn remove(&self, id: DeviceId) -> Option<Device> {
        let mut devices = self.devices.write();
        let index = devices.iter().position(|d| d.id == id)?;
        Some(devices.remove(index))
    }

    /// Returns the number of stored devices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.read().len()
    }

    /// Returns `true` if no device is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.read().is_empty()
    }
}

impl DeviceStore for MemoryDeviceStore {
    fn get(&self, id: DeviceId) -> Result<Option<Device>, StoreError> {
        Ok(self.devices.read().iter().find(|d| d.id == id).cloned())
    }

    fn get_all(&self) -> Result<Vec<Device>, StoreError> {
        Ok(self.devices.read().clone())
    }

    fn update(&self, device: Device) -> Result<(), StoreError> {
        let mut devices = self.devices.write();
        let slot = devices
            .iter_mut()
            .find(|d| d.id == device.id)
            .ok_or(StoreError::NotFound(device.id))?;
        *slot = device;
        Ok(())
    }
}

/// Plan store holding a single plan.
#[derive(Debug, Default)]
pub struct MemoryPlanStore {
    plan: RwLock<Option<EnergyPlan>>,
}

impl MemoryPlanStore {
    /// Creates a store whose current plan is `plan`.
    #[must_use]
    pub fn new(plan: EnergyPlan) -> Self {
        Self {
            plan: RwLock::new(Some(plan)),
        }
    }

    /// Creates a store without a plan.
    ///
    /// [`current_plan`](PlanStore::current_plan) fails until a plan is stored.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }
}

impl PlanStore for MemoryPlanStore {
    fn current_plan(&self) -> Result<EnergyPlan, StoreError> {
        self.plan.read().clone().ok_or(StoreError::PlanMissing)
    }

    fn update_plan(&self, plan: EnergyPlan) -> Result<(), StoreError> {
        *self.plan.write() = Some(plan);
        Ok(())
    }
}
