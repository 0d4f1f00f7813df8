//! Body - one placed shape with its material response and voice
//!
//! Geometry is kept analytically (circle, rectangle, regular polygon).
//! Collisions work on the circle itself or on the axis-aligned bounds.

mod vec2;
mod body;

pub use vec2::Vec2;
pub use body::{Aabb, Body, WrapRegion};
