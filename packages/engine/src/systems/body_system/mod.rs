//! BodySystem - placed bodies and the per-frame step loop
//!
//! Per frame:
//! - Integrate dynamic bodies (gravity, air friction, speed clamp).
//! - Wrap bodies that fully left their wrap region.
//! - Resolve pairwise contacts with an impulse using the bouncier restitution.
//! - Turn contacts into sound events for armed voices.
//!
//! Sensors (clouds) never push back; they sound once per entering body.

mod collision;
mod system;
mod wrap;

pub use collision::Contact;
pub use system::{BodySystem, StepCounts, StepParams};
pub use wrap::wrap_position;
