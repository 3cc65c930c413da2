// SPDX-License-Identifier: MPL-2.0
//! Virtual-control mode and mouse lock mode.

/// How on-screen virtual controls are displayed.
///
/// The owner stores this as two independent flags. Both flags may be set at
/// the same time while two updates are in flight; [`ControlMode::from_flags`]
/// resolves that overlap in favor of [`ControlMode::Mirrored`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlMode {
    /// No virtual controls.
    #[default]
    Hidden,
    /// Regular mobile layout.
    Mobile,
    /// Mobile layout mirrored horizontally.
    Mirrored,
}

impl ControlMode {
    /// Derives the mode from the owner's two flags (mirrored wins).
    #[must_use]
    pub fn from_flags(mobile_controls: bool, mirrored_controls: bool) -> Self {
        if mirrored_controls {
            ControlMode::Mirrored
        } else if mobile_controls {
            ControlMode::Mobile
        } else {
            ControlMode::Hidden
        }
    }

    /// All modes in popover order.
    pub const ALL: [ControlMode; 3] = [
        ControlMode::Hidden,
        ControlMode::Mobile,
        ControlMode::Mirrored,
    ];
}

/// Pointer capture behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LockMode {
    /// Pointer is captured only after an explicit click.
    #[default]
    ClickToLock,
    /// Pointer is captured automatically.
    Auto,
}

impl LockMode {
    /// Maps the owner's `autolock` flag.
    #[must_use]
    pub fn from_autolock(autolock: bool) -> Self {
        if autolock {
            LockMode::Auto
        } else {
            LockMode::ClickToLock
        }
    }

    /// Value of the `autolock` flag for this mode.
    #[must_use]
    pub fn autolock(self) -> bool {
        matches!(self, LockMode::Auto)
    }
}
