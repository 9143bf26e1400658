// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for household configuration files driving the services.

use std::path::PathBuf;
use std::sync::Arc;

use wattkeep_lib::{
    ChannelNotifier, ConfigError, DeviceControlService, DeviceId, DeviceStore,
    EnergyMonitorService, EventBus, HouseholdConfig, KilowattHours, MonitorEvent, PlanStore,
};

/// Returns a unique path under the system temp directory.
fn scratch_path(file: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("wattkeep-{}", uuid::Uuid::new_v4()))
        .join(file)
}

const HOUSEHOLD: &str = r#"{
    "devices": [
        { "id": 1, "name": "Heater", "power_usage_watts": 1000 },
        { "id": 2, "name": "TV", "power_usage_watts": 500 },
        { "id": 3, "name": "PC", "is_on": true, "power_usage_watts": 800 }
    ],
    "plan": { "name": "winter", "daily_limit_kwh": 2.0 }
}"#;

#[test]
fn save_then_load_preserves_household() {
    let config = HouseholdConfig::from_json(HOUSEHOLD).unwrap();
    let path = scratch_path("household.json");

    config.save(&path).unwrap();
    let loaded = HouseholdConfig::load(&path).unwrap();

    assert_eq!(loaded, config);

    if let Some(dir) = path.parent() {
        let _ = std::fs::remove_dir_all(dir);
    }
}

#[test]
fn load_rejects_invalid_document() {
    let path = scratch_path("broken.json");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(
        &path,
        r#"{ "devices": [
            { "id": 1, "power_usage_watts": 60 },
            { "id": 1, "power_usage_watts": 500 }
        ] }"#,
    )
    .unwrap();

    let result = HouseholdConfig::load(&path);
    assert!(matches!(result, Err(ConfigError::DuplicateDevice(id)) if id == DeviceId::new(1)));

    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn configured_household_runs_end_to_end() {
    let (devices, plans) = HouseholdConfig::from_json(HOUSEHOLD).unwrap().into_stores();
    let devices = Arc::new(devices);
    let plans = Arc::new(plans);
    let (notifier, mut alerts) = ChannelNotifier::new();
    let bus = EventBus::new();
    let mut events = bus.subscribe();

    let control = DeviceControlService::new(devices.clone()).with_event_bus(bus.clone());
    let monitor = EnergyMonitorService::new(devices.clone(), plans.clone(), Arc::new(notifier))
        .with_event_bus(bus);

    // Only the PC is on: 0.8 kWh against 2.0 kWh
    monitor.check_for_overload().unwrap();
    assert!(alerts.try_recv().is_err());

    // Heater and PC: 1.8 kWh, still within plan
    control.toggle_device(DeviceId::new(1), true).unwrap();
    monitor.check_for_overload().unwrap();
    assert!(alerts.try_recv().is_err());

    // Heater, TV and PC: 2.3 kWh, over plan
    control.toggle_device(DeviceId::new(2), true).unwrap();
    monitor.check_for_overload().unwrap();
    assert!(alerts.try_recv().unwrap().contains("Overload detected"));

    // Raising the limit clears the overload
    monitor.update_energy_limit(KilowattHours::new(3.0).unwrap()).unwrap();
    monitor.check_for_overload().unwrap();
    assert!(alerts.try_recv().is_err());

    assert_eq!(plans.current_plan().unwrap().name, "winter");
    assert_eq!(control.active_devices().unwrap().len(), 3);
    assert!(devices.get(DeviceId::new(2)).unwrap().unwrap().is_on);

    let kinds: Vec<&str> = std::iter::from_fn(|| events.try_recv().ok())
        .map(|event| match event {
            MonitorEvent::DeviceToggled { .. } => "toggled",
            MonitorEvent::OverloadDetected { .. } => "overload",
            MonitorEvent::PlanUpdated { .. } => "plan",
        })
        .collect();
    assert_eq!(kinds, vec!["toggled", "toggled", "overload", "plan"]);
}
