// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Daily energy budget.

use serde::{Deserialize, Serialize};

use crate::types::KilowattHours;

use super::PlanId;

/// Name given to plans created without one.
pub const DEFAULT_PLAN_NAME: &str = "default";

/// The active consumption budget.
///
/// A plan is replaced wholesale: changing the limit produces a new value that
/// keeps every other field.
///
/// # Examples
///
/// ```
/// use wattkeep_lib::model::EnergyPlan;
/// use wattkeep_lib::types::KilowattHours;
///
/// let plan = EnergyPlan::new(KilowattHours::new(5.0).unwrap()).with_name("winter");
/// let raised = plan.clone().with_daily_limit(KilowattHours::new(10.5).unwrap());
///
/// assert_eq!(raised.id, plan.id);
/// assert_eq!(raised.name, "winter");
/// assert_eq!(raised.daily_limit.value(), 10.5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnergyPlan {
    /// Plan identifier, kept across limit updates.
    #[serde(default)]
    pub id: PlanId,
    /// Human-readable plan name.
    #[serde(default = "default_name")]
    pub name: String,
    /// Energy ceiling before an overload alert fires.
    #[serde(rename = "daily_limit_kwh")]
    pub daily_limit: KilowattHours,
}

fn default_name() -> String {
    DEFAULT_PLAN_NAME.to_string()
}

impl EnergyPlan {
    /// Creates a plan with a fresh id and the default name.
    #[must_use]
    pub fn new(daily_limit: KilowattHours) -> Self {
        Self {
            id: PlanId::new(),
            name: default_name(),
            daily_limit,
        }
    }

    /// Sets the plan name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Returns the same plan with a different daily limit.
    #[must_use]
    pub fn with_daily_limit(mut self, daily_limit: KilowattHours) -> Self {
        self.daily_limit = daily_limit;
        self
    }
}

impl Default for EnergyPlan {
    fn default() -> Self {
        Self::new(KilowattHours::DEFAULT_DAILY_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kwh(value: f64) -> KilowattHours {
        KilowattHours::new(value).unwrap()
    }

    #[test]
    fn default_plan_uses_default_limit() {
        let plan = EnergyPlan::default();
        assert_eq!(plan.name, DEFAULT_PLAN_NAME);
        assert_eq!(plan.daily_limit, KilowattHours::DEFAULT_DAILY_LIMIT);
    }

    #[test]
    fn with_daily_limit_keeps_other_fields() {
        let plan = EnergyPlan::new(kwh(5.0)).with_name("night");
        let updated = plan.clone().with_daily_limit(kwh(-1.0));

        assert_eq!(updated.id, plan.id);
        assert_eq!(updated.name, plan.name);
        assert_eq!(updated.daily_limit, kwh(-1.0));
    }

    #[test]
    fn deserializes_minimal_document() {
        let plan: EnergyPlan = serde_json::from_str(r#"{ "daily_limit_kwh": 1.0 }"#).unwrap();
        assert_eq!(plan.name, DEFAULT_PLAN_NAME);
        assert_eq!(plan.daily_limit, kwh(1.0));
    }

    #[test]
    fn rejects_misspelled_limit() {
        let err = serde_json::from_str::<EnergyPlan>(r#"{ "daily_limit_kw": 1.0 }"#).unwrap_err();
        assert!(err.to_string().contains("unknown field `daily_limit_kw`"));
    }

    #[test]
    fn serializes_limit_in_kwh() {
        let plan = EnergyPlan::new(kwh(2.5));
        let value = serde_json::to_value(&plan).unwrap();
        assert_eq!(value["daily_limit_kwh"], serde_json::json!(2.5));
    }
}
