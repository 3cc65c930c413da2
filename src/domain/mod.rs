// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core control logic with ZERO external dependencies.
//!
//! This module contains pure value types and stepping rules used by the
//! overlay widgets. It has no dependencies on external crates (except `std`)
//! so every rule can be tested without a window or a player.
//!
//! # Modules
//!
//! - [`controls`]: Numeric cyclers ([`Cycler`](controls::Cycler)), label formatting,
//!   virtual-control [`ControlMode`](controls::ControlMode) and mouse
//!   [`LockMode`](controls::LockMode)

pub mod controls;
