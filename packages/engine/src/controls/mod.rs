//! Control panel state and description
//!
//! The JS view renders the panel from [`ControlsManifest`] and forwards
//! every edit back as a `(field, value)` pair, which lands in
//! [`BodyControls::apply`].

mod body_controls;
mod manifest;

pub use body_controls::{BodyControls, ControlField, ControlValue, TOGGLE_LOOP, TOGGLE_STATIC};
pub use manifest::{ControlsManifest, ControlsVariant};
