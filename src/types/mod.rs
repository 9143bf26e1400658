// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for device control and energy accounting.
//!
//! Each type ensures values are within their valid ranges at construction
//! time, including when deserialized.
//!
//! # Types
//!
//! - [`PowerState`] - On/Off operating state
//! - [`Watts`] - Non-negative instantaneous power draw
//! - [`KilowattHours`] - Energy amount used for usage and plan limits

mod energy;
mod power;

pub use energy::{KilowattHours, Watts};
pub use power::PowerState;
