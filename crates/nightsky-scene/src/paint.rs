//! Render step: draws a scene onto a surface.

use nightsky_core::Meteor;

use crate::color::{FAR_STAR, METEOR_HEAD, METEOR_TRAIL, NEAR_STAR, SKY};
use crate::scene::Scene;
use crate::surface::Surface;

/// Side length of the square meteor head in pixels.
const METEOR_HEAD_SIZE: i32 = 2;

/// Paint the scene onto `surface`, replacing its previous contents.
///
/// Stars are single pixels. Each meteor is a trail line with its head block
/// drawn on top.
pub fn paint(scene: &Scene, surface: &mut Surface) {
    surface.fill(SKY);

    for (near, far) in scene.near_stars().iter().zip(scene.far_stars()) {
        surface.set_pixel(near.x, near.y, NEAR_STAR);
        surface.set_pixel(far.x, far.y, FAR_STAR);
    }

    for meteor in scene.meteors() {
        paint_meteor(meteor, surface);
    }
}

fn paint_meteor(meteor: &Meteor, surface: &mut Surface) {
    surface.draw_line(meteor.position, meteor.tail(), METEOR_TRAIL);
    surface.fill_rect(
        meteor.position.x,
        meteor.position.y,
        METEOR_HEAD_SIZE,
        METEOR_HEAD_SIZE,
        METEOR_HEAD,
    );
}
