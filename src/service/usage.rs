// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Usage compared against the plan limit.

use crate::types::KilowattHours;

/// Text every overload alert starts with.
pub const OVERLOAD_ALERT_PREFIX: &str = "Overload detected";

/// Current usage next to the plan's daily limit.
///
/// # Examples
///
/// ```
/// use wattkeep_lib::service::UsageReport;
/// use wattkeep_lib::types::KilowattHours;
///
/// let report = UsageReport::new(
///     KilowattHours::new(1.5).unwrap(),
///     KilowattHours::new(1.0).unwrap(),
/// );
///
/// assert!(report.is_overload());
/// assert_eq!(
///     report.alert_message(),
///     "Overload detected: usage 1.50 kWh exceeds limit 1.00 kWh"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UsageReport {
    /// Usage of all devices that are on.
    pub usage: KilowattHours,
    /// Daily limit of the current plan.
    pub limit: KilowattHours,
}

impl UsageReport {
    /// Creates a report.
    #[must_use]
    pub const fn new(usage: KilowattHours, limit: KilowattHours) -> Self {
        Self { usage, limit }
    }

    /// Returns `true` if usage is strictly above the limit.
    ///
    /// Usage equal to the limit is within the plan.
    #[must_use]
    pub fn is_overload(&self) -> bool {
        self.usage > self.limit
    }

    /// Returns the energy left before the limit, negative when over it.
    #[must_use]
    pub fn headroom(&self) -> KilowattHours {
        self.limit - self.usage
    }

    /// Returns the alert text sent on overload.
    #[must_use]
    pub fn alert_message(&self) -> String {
        format!(
            "{OVERLOAD_ALERT_PREFIX}: usage {} exceeds limit {}",
            self.usage, self.limit
        )
    }
}
