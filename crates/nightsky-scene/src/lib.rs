//! Night sky scene for nightsky.
//!
//! Holds the star and meteor populations, advances them one tick at a time,
//! paints them onto an off-screen [`Surface`] and composites that surface into
//! a terminal buffer as half-block cells.

pub mod color;
mod paint;
mod scene;
mod surface;

pub use paint::paint;
pub use scene::{Scene, random_velocity, spawn_meteor};
pub use surface::Surface;
