// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Usage aggregation, overload detection and plan limit updates.

use std::sync::Arc;

use crate::error::Result;
use crate::event::{EventBus, MonitorEvent};
use crate::notify::Notifier;
use crate::store::{DeviceStore, PlanStore};
use crate::types::{KilowattHours, Watts};

use super::UsageReport;

/// Computes household usage and checks it against the current plan.
///
/// The service holds no state of its own; every call reads the stores.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use wattkeep_lib::model::{Device, EnergyPlan};
/// use wattkeep_lib::notify::ChannelNotifier;
/// use wattkeep_lib::service::EnergyMonitorService;
/// use wattkeep_lib::store::{MemoryDeviceStore, MemoryPlanStore};
/// use wattkeep_lib::types::{KilowattHours, Watts};
///
/// # fn main() -> wattkeep_lib::Result<()> {
/// let devices = Arc::new(MemoryDeviceStore::with_devices([
///     Device::new(1, "Heater", Watts::new(1000.0)?).with_power(true),
///     Device::new(2, "TV", Watts::new(500.0)?).with_power(true),
/// ]));
/// let plans = Arc::new(MemoryPlanStore::new(EnergyPlan::new(KilowattHours::new(1.0)?)));
/// let (notifier, mut alerts) = ChannelNotifier::new();
///
/// let monitor = EnergyMonitorService::new(devices, plans, Arc::new(notifier));
///
/// assert_eq!(monitor.current_usage_kwh()?.value(), 1.5);
/// monitor.check_for_overload()?;
/// assert!(alerts.try_recv().unwrap().contains("Overload detected"));
/// # Ok(())
/// # }
/// ```
pub struct EnergyMonitorService {
    devices: Arc<dyn DeviceStore>,
    plans: Arc<dyn PlanStore>,
    notifier: Arc<dyn Notifier>,
    events: Option<EventBus>,
}

impl EnergyMonitorService {
    /// Creates a service over the given collaborators.
    #[must_use]
    pub fn new(
        devices: Arc<dyn DeviceStore>,
        plans: Arc<dyn PlanStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            devices,
            plans,
            notifier,
            events: None,
        }
    }

    /// Publishes overload and plan events on `bus`.
    #[must_use]
    pub fn with_event_bus(mut self, bus: EventBus) -> Self {
        self.events = Some(bus);
        self
    }

    /// Returns the combined usage of all devices that are on.
    ///
    /// Each device's wattage counts as one hour of energy, so the result is
    /// the summed watts divided by 1000. Off devices contribute nothing and
    /// an empty store yields zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Store`](crate::Error::Store) if the devices cannot
    /// be read.
    pub fn current_usage_kwh(&self) -> Result<KilowattHours> {
        let draw: Watts = self
            .devices
            .get_all()?
            .iter()
            .map(crate::model::Device::effective_draw)
            .sum();
        Ok(draw.to_kwh())
    }

    /// Returns current usage alongside the plan's daily limit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Store`](crate::Error::Store) if the devices or the
    /// plan cannot be read.
    pub fn usage_report(&self) -> Result<UsageReport> {
        let usage = self.current_usage_kwh()?;
        let plan = self.plans.current_plan()?;
        Ok(UsageReport::new(usage, plan.daily_limit))
    }

    /// Sends one alert if usage is strictly above the plan's daily limit.
    ///
    /// The alert text always contains `"Overload detected"`. Usage equal to
    /// the limit does not alert.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Store`](crate::Error::Store) if a store cannot be
    /// read and [`Error::Notify`](crate::Error::Notify) if the alert cannot
    /// be delivered.
    pub fn check_for_overload(&self) -> Result<()> {
        let report = self.usage_report()?;

        if !report.is_overload() {
            tracing::debug!(usage = %report.usage, limit = %report.limit, "Usage within plan");
            return Ok(());
        }

        tracing::warn!(usage = %report.usage, limit = %report.limit, "Overload detected");
        self.notifier.send_alert(&report.alert_message())?;

        if let Some(bus) = &self.events {
            bus.publish(MonitorEvent::overload_detected(report.usage, report.limit));
        }

        Ok(())
    }

    /// Replaces the current plan's daily limit.
    ///
    /// The new plan keeps every other field of the current one. The limit is
    /// stored exactly as given; zero and negative limits are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Store`](crate::Error::Store) if the plan cannot be
    /// read or written.
    pub fn update_energy_limit(&self, new_limit: KilowattHours) -> Result<()> {
        let plan = self.plans.current_plan()?;
        let plan_id = plan.id;
        let previous = plan.daily_limit;

        self.plans.update_plan(plan.with_daily_limit(new_limit))?;

        tracing::debug!(%plan_id, %previous, current = %new_limit, "Energy limit updated");
        if let Some(bus) = &self.events {
            bus.publish(MonitorEvent::plan_updated(plan_id, previous, new_limit));
        }

        Ok(())
    }
}

impl std::fmt::Debug for EnergyMonitorService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnergyMonitorService")
            .field("events", &self.events.is_some())
            .finish_non_exhaustive()
    }
}
