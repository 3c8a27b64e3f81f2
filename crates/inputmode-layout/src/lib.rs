//! Hardware and layout constants shared by the input-mode OSD crates.

pub mod screen_map;
pub mod specs;
