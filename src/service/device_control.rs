// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! On/off control for individual devices.

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::event::{EventBus, MonitorEvent};
use crate::model::{Device, DeviceId};
use crate::store::DeviceStore;

/// Validates and applies on/off transitions for single devices.
///
/// The service holds no state of its own; every call reads the store.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use wattkeep_lib::model::{Device, DeviceId};
/// use wattkeep_lib::service::DeviceControlService;
/// use wattkeep_lib::store::MemoryDeviceStore;
/// use wattkeep_lib::types::Watts;
///
/// # fn main() -> wattkeep_lib::Result<()> {
/// let store = Arc::new(MemoryDeviceStore::with_devices([
///     Device::new(1, "Lamp", Watts::new(60.0)?),
/// ]));
/// let control = DeviceControlService::new(store);
///
/// assert!(control.toggle_device(DeviceId::new(1), true)?);
/// assert_eq!(control.active_devices()?.len(), 1);
/// # Ok(())
/// # }
/// ```
pub struct DeviceControlService {
    devices: Arc<dyn DeviceStore>,
    events: Option<EventBus>,
}

impl DeviceControlService {
    /// Creates a service over the given device store.
    #[must_use]
    pub fn new(devices: Arc<dyn DeviceStore>) -> Self {
        Self {
            devices,
            events: None,
        }
    }

    /// Publishes a [`MonitorEvent::DeviceToggled`] on `bus` after each toggle.
    #[must_use]
    pub fn with_event_bus(mut self, bus: EventBus) -> Self {
        self.events = Some(bus);
        self
    }

    /// Switches a device on or off and returns the persisted state.
    ///
    /// The store is updated exactly once per successful call, even if the
    /// device was already in the requested state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if no device has `device_id`; the
    /// store is not updated in that case. Store failures are returned as
    /// [`Error::Store`].
    pub fn toggle_device(&self, device_id: DeviceId, desired_on: bool) -> Result<bool> {
        let Some(mut device) = self.devices.get(device_id)? else {
            tracing::warn!(%device_id, "Toggle requested for unknown device");
            return Err(Error::InvalidArgument(device_id));
        };

        device.is_on = desired_on;
        let state = device.power_state();
        self.devices.update(device)?;

        tracing::debug!(%device_id, %state, "Device toggled");
        if let Some(bus) = &self.events {
            bus.publish(MonitorEvent::device_toggled(device_id, state));
        }

        Ok(desired_on)
    }

    /// Returns the devices that are switched on, in store order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Store`] if the store cannot be read.
    pub fn active_devices(&self) -> Result<Vec<Device>> {
        let mut devices = self.devices.get_all()?;
        devices.retain(|d| d.is_on);
        Ok(devices)
    }
}

impl std::fmt::Debug for DeviceControlService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceControlService")
            .field("events", &self.events.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::store::MemoryDeviceStore;
    use crate::types::{PowerState, Watts};

    fn device(id: u64, name: &str, is_on: bool) -> Device {
        Device::new(id, name, Watts::new(100.0).unwrap()).with_power(is_on)
    }

    fn service(devices: Vec<Device>) -> (Arc<MemoryDeviceStore>, DeviceControlService) {
        let store = Arc::new(MemoryDeviceStore::with_devices(devices));
        let service = DeviceControlService::new(store.clone());
        (store, service)
    }

    struct FailingStore;

    impl DeviceStore for FailingStore {
        fn get(&self, _id: DeviceId) -> std::result::Result<Option<Device>, StoreError> {
            Err(StoreError::Unavailable("offline".to_string()))
        }

        fn get_all(&self) -> std::result::Result<Vec<Device>, StoreError> {
            Err(StoreError::Unavailable("offline".to_string()))
        }

        fn update(&self, _device: Device) -> std::result::Result<(), StoreError> {
            Err(StoreError::Unavailable("offline".to_string()))
        }
    }

    #[test]
    fn toggle_on_persists_state() {
        let (store, control) = service(vec![device(1, "Lamp", false)]);

        assert!(control.toggle_device(DeviceId::new(1), true).unwrap());
        assert!(store.get(DeviceId::new(1)).unwrap().unwrap().is_on);
    }

    #[test]
    fn toggle_off_persists_state() {
        let (store, control) = service(vec![device(2, "TV", true)]);

        assert!(!control.toggle_device(DeviceId::new(2), false).unwrap());
        assert!(!store.get(DeviceId::new(2)).unwrap().unwrap().is_on);
    }

    #[test]
    fn toggle_unknown_device_is_invalid_argument() {
        let (store, control) = service(vec![device(1, "Lamp", false)]);

        let err = control.toggle_device(DeviceId::new(99), true).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(id) if id == DeviceId::new(99)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn store_failure_propagates() {
        let control = DeviceControlService::new(Arc::new(FailingStore));

        let err = control.toggle_device(DeviceId::new(1), true).unwrap_err();
        assert!(matches!(err, Error::Store(StoreError::Unavailable(_))));

        let err = control.active_devices().unwrap_err();
        assert!(matches!(err, Error::Store(StoreError::Unavailable(_))));
    }

    #[test]
    fn active_devices_filters_and_keeps_order() {
        let (_, control) = service(vec![
            device(3, "PC", true),
            device(1, "Heater", false),
            device(2, "TV", true),
        ]);

        let names: Vec<String> = control
            .active_devices()
            .unwrap()
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, vec!["PC", "TV"]);
    }

    #[test]
    fn active_devices_empty_when_all_off() {
        let (_, control) = service(vec![device(1, "Lamp", false), device(2, "TV", false)]);
        assert!(control.active_devices().unwrap().is_empty());
    }

    #[test]
    fn toggle_publishes_event() {
        let bus = EventBus::new();
        let mut rx = bus.subscribe();
        let store = Arc::new(MemoryDeviceStore::with_devices([device(1, "Lamp", false)]));
        let control = DeviceControlService::new(store).with_event_bus(bus);

        control.toggle_device(DeviceId::new(1), true).unwrap();

        assert_eq!(
            rx.try_recv().unwrap(),
            MonitorEvent::device_toggled(DeviceId::new(1), PowerState::On)
        );
    }

    #[test]
    fn failed_toggle_publishes_nothing() {
        let bus = EventBus::new();
        let mut rx = bus.subscribe();
        let store = Arc::new(MemoryDeviceStore::new());
        let control = DeviceControlService::new(store).with_event_bus(bus);

        assert!(control.toggle_device(DeviceId::new(1), true).is_err());
        assert!(rx.try_recv().is_err());
    }
}
