// SPDX-License-Identifier: MPL-2.0
//! Control value objects shared by the overlay widgets.

pub mod cycler;
pub mod mode;

pub use cycler::{format_label, is_neutral, Cycler, SCALE, SENSITIVITY};
pub use mode::{ControlMode, LockMode};
