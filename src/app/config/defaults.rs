// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Controls**: Seed values for sensitivity and virtual-control scale
//! - **Layout**: Initial visibility of the overlay parts
//! - **Session**: In-memory owner behavior
//! - **Logging**: Default log level

use crate::domain::controls::cycler::{scale_bounds, sensitivity_bounds};

// ==========================================================================
// Controls Defaults
// ==========================================================================

/// Default mouse sensitivity (neutral).
pub const DEFAULT_SENSITIVITY: f64 = 1.0;

/// Default virtual-control scale (neutral).
pub const DEFAULT_SCALE_CONTROLS: f64 = 1.0;

/// Whether the pointer is captured automatically by default.
pub const DEFAULT_AUTOLOCK: bool = false;

/// Whether a mouse-sync command interface is attached by default.
pub const DEFAULT_MOUSE_SYNC: bool = true;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Popovers expand inline by default.
pub const DEFAULT_PORTAL: bool = true;

/// The action bar is shown by default.
pub const DEFAULT_ACTION_BAR: bool = true;

/// The side bar starts closed.
pub const DEFAULT_SIDE_BAR: bool = false;

// ==========================================================================
// Session Defaults
// ==========================================================================

/// Artificial latency applied by the in-memory owner (milliseconds).
pub const DEFAULT_LATENCY_MS: u64 = 0;

/// Maximum accepted artificial latency (milliseconds).
pub const MAX_LATENCY_MS: u64 = 5_000;

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Log level used when the config does not specify one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_SENSITIVITY >= sensitivity_bounds::MIN);
    assert!(DEFAULT_SENSITIVITY <= sensitivity_bounds::MAX);
    assert!(DEFAULT_SCALE_CONTROLS >= scale_bounds::MIN);
    assert!(DEFAULT_SCALE_CONTROLS <= scale_bounds::MAX);
    assert!(DEFAULT_LATENCY_MS <= MAX_LATENCY_MS);
};
