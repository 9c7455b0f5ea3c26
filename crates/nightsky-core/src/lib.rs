//! Core types for the nightsky animation.
//!
//! Plain value types shared by the scene, the configuration layer and the
//! application: particle positions and velocities, and the screen and scene
//! parameters captured once at startup.

mod particle;
mod screen;

pub use particle::{Meteor, Point};
pub use screen::{SceneParams, ScreenSize};
