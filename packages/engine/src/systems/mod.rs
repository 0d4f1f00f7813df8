//! Systems: building bodies and stepping them.

pub mod body_factory;
pub mod body_system;
pub mod rigid_body;
