// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `WattKeep` library.
//!
//! This module provides the error hierarchy for the library: value
//! validation, collaborator stores, alert delivery, household configuration,
//! and the single rules-level failure (an unknown device reference).

use thiserror::Error;

use crate::model::DeviceId;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// The caller referenced a device that does not exist in the store.
    ///
    /// This signals a bad caller-supplied reference, not a transient fault.
    #[error("invalid argument: no device with id {0}")]
    InvalidArgument(DeviceId),

    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// A collaborator store failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// The notifier could not deliver an alert.
    #[error("notify error: {0}")]
    Notify(#[from] NotifyError),

    /// Household configuration could not be loaded or saved.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    /// A power draw was negative.
    #[error("power usage {0} W is negative")]
    NegativePower(f64),

    /// A numeric value was NaN or infinite.
    #[error("{field} must be finite, got {value}")]
    NonFinite {
        /// The quantity being constructed.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// An invalid power state string was provided.
    #[error("invalid power state: {0}")]
    InvalidPowerState(String),
}

/// Errors reported by device and plan stores.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An update referenced a device the store does not hold.
    #[error("device {0} is not stored")]
    NotFound(DeviceId),

    /// The store holds no current energy plan.
    #[error("no current energy plan")]
    PlanMissing,

    /// The backing storage could not be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Errors reported by notifiers.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The receiving side of the notifier is gone.
    #[error("alert channel closed")]
    Closed,

    /// The transport rejected the alert.
    #[error("alert delivery failed: {0}")]
    Delivery(String),
}

/// Errors related to household configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading or writing the configuration file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration document is not valid JSON or has invalid values.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two devices in the configuration share an id.
    #[error("duplicate device id {0}")]
    DuplicateDevice(DeviceId),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
