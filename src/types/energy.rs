// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power and energy quantities.
//!
//! Device draw is expressed in [`Watts`] and plan budgets in
//! [`KilowattHours`]. An instantaneous wattage figure is treated as one hour
//! of energy, so converting between the two is a plain division by 1000.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Watts per kilowatt.
const WATTS_PER_KILOWATT: f64 = 1000.0;

/// Instantaneous power draw of a device in Watts.
///
/// Always finite and non-negative.
///
/// # Examples
///
/// ```
/// use wattkeep_lib::types::Watts;
///
/// let heater = Watts::new(1000.0).unwrap();
/// let tv = Watts::new(500.0).unwrap();
///
/// let total: Watts = [heater, tv].into_iter().sum();
/// assert!((total.to_kwh().value() - 1.5).abs() < f64::EPSILON);
///
/// // Negative draw is rejected
/// assert!(Watts::new(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Watts(f64);

impl Watts {
    /// Creates a new power value.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::NonFinite` for NaN or infinite input and
    /// `ValueError::NegativePower` for values below zero.
    pub fn new(watts: f64) -> Result<Self, ValueError> {
        if !watts.is_finite() {
            return Err(ValueError::NonFinite {
                field: "power usage",
                value: watts,
            });
        }
        if watts < 0.0 {
            return Err(ValueError::NegativePower(watts));
        }
        Ok(Self(watts))
    }

    /// Zero draw.
    #[must_use]
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Returns the raw value in Watts.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Converts the draw to its hourly energy equivalent.
    #[must_use]
    pub fn to_kwh(self) -> KilowattHours {
        KilowattHours(self.0 / WATTS_PER_KILOWATT)
    }
}

impl Add for Watts {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        // Saturate so the sum stays finite.
        Self((self.0 + rhs.0).min(f64::MAX))
    }
}

impl Sum for Watts {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl TryFrom<f64> for Watts {
    type Error = ValueError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Watts> for f64 {
    fn from(watts: Watts) -> Self {
        watts.0
    }
}

impl fmt::Display for Watts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} W", self.0)
    }
}

/// An amount of energy in kilowatt-hours.
///
/// Always finite. The sign is not constrained: a plan may carry a zero or
/// negative daily limit.
///
/// # Examples
///
/// ```
/// use wattkeep_lib::types::KilowattHours;
///
/// let limit = KilowattHours::new(10.5).unwrap();
/// assert_eq!(limit.to_string(), "10.50 kWh");
///
/// assert!(KilowattHours::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct KilowattHours(f64);

impl KilowattHours {
    /// Daily limit used when no plan has been configured.
    pub const DEFAULT_DAILY_LIMIT: Self = Self(10.0);

    /// Creates a new energy value.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::NonFinite` for NaN or infinite input.
    pub fn new(kwh: f64) -> Result<Self, ValueError> {
        if !kwh.is_finite() {
            return Err(ValueError::NonFinite {
                field: "energy",
                value: kwh,
            });
        }
        Ok(Self(kwh))
    }

    /// Zero energy.
    #[must_use]
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Returns the raw value in kWh.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for KilowattHours {
    type Error = ValueError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<KilowattHours> for f64 {
    fn from(kwh: KilowattHours) -> Self {
        kwh.0
    }
}

impl Sub for KilowattHours {
    type Output = Self;

    /// Saturates at the `f64` range so the result stays finite.
    fn sub(self, rhs: Self) -> Self {
        Self((self.0 - rhs.0).clamp(f64::MIN, f64::MAX))
    }
}

impl fmt::Display for KilowattHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} kWh", self.0)
    }
}
