//! Domain definitions: what a body can be made of and how it sounds.

pub mod content;
pub mod materials;
pub mod shapes;
pub mod voice;
