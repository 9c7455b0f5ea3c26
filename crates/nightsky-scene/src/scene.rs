//! Scene state and the per-tick update step.

use log::trace;
use nightsky_core::{Meteor, Point, SceneParams, ScreenSize};
use rand::Rng;

/// Horizontal distance every star drifts per tick.
const STAR_DRIFT: i32 = 1;

/// X coordinate at which meteors enter the sky.
const METEOR_ENTRY_X: i32 = 3;

/// Number of distinct x positions just off the left edge where stars re-enter.
const RESPAWN_SPREAD: i32 = 3;

/// The night sky: two star tiers and the meteors currently in flight.
#[derive(Debug, Clone)]
pub struct Scene {
    /// Bright stars in the foreground tier.
    near_stars: Vec<Point>,
    /// Dim stars in the background tier.
    far_stars: Vec<Point>,
    /// Meteors currently crossing the sky.
    meteors: Vec<Meteor>,
    /// Pixel dimensions captured at startup.
    screen: ScreenSize,
    /// Star count and meteor chance.
    params: SceneParams,
}

impl Scene {
    /// Create a scene with both star tiers scattered over the whole screen.
    pub fn new<R: Rng>(screen: ScreenSize, params: SceneParams, rng: &mut R) -> Self {
        let near_stars = (0..params.num_stars)
            .map(|_| scattered_star(screen, rng))
            .collect();
        let far_stars = (0..params.num_stars)
            .map(|_| scattered_star(screen, rng))
            .collect();

        Self {
            near_stars,
            far_stars,
            meteors: Vec::new(),
            screen,
            params,
        }
    }

    /// Advance the scene by one tick.
    ///
    /// Stars drift right, meteors move by their velocity, a meteor may spawn,
    /// everything that has left the screen is dropped and both star tiers are
    /// topped back up from just past the left edge.
    pub fn advance<R: Rng>(&mut self, rng: &mut R) {
        for star in self.near_stars.iter_mut().chain(self.far_stars.iter_mut()) {
            star.translate(STAR_DRIFT, 0);
        }
        for meteor in &mut self.meteors {
            meteor.step();
        }

        if rng.r#gen::<f64>() < self.params.meteor_chance {
            let meteor = spawn_meteor(self.screen, rng);
            trace!(
                "meteor spawned at ({}, {}) with velocity ({}, {})",
                meteor.position.x, meteor.position.y, meteor.vx, meteor.vy
            );
            self.meteors.push(meteor);
        }

        self.cull();
        self.respawn(rng);
    }

    /// Drop stars and meteors that have left the screen.
    fn cull(&mut self) {
        let screen = self.screen;
        self.near_stars.retain(|star| star_in_bounds(*star, screen));
        self.far_stars.retain(|star| star_in_bounds(*star, screen));
        self.meteors.retain(|meteor| meteor_in_bounds(meteor, screen));
    }

    /// Top up both star tiers to the target count.
    fn respawn<R: Rng>(&mut self, rng: &mut R) {
        let target = self.params.num_stars;
        while self.near_stars.len() < target {
            self.near_stars.push(entering_star(self.screen, rng));
        }
        while self.far_stars.len() < target {
            self.far_stars.push(entering_star(self.screen, rng));
        }
    }

    /// Stars in the bright foreground tier.
    pub fn near_stars(&self) -> &[Point] {
        &self.near_stars
    }

    /// Stars in the dim background tier.
    pub fn far_stars(&self) -> &[Point] {
        &self.far_stars
    }

    /// Meteors currently in flight.
    pub fn meteors(&self) -> &[Meteor] {
        &self.meteors
    }
}

/// Sample a meteor velocity.
///
/// `vx` lands in `6..=10` and `vy` in `-2..=2`; the float-to-int casts
/// truncate toward zero, so `vy == 0` is twice as likely as any other value.
pub fn random_velocity<R: Rng>(rng: &mut R) -> (i32, i32) {
    let vx = (rng.r#gen::<f64>() * 5.0 + 3.0) as i32 + 3;
    let vy = (rng.r#gen::<f64>() * 5.0 - 2.5) as i32;
    (vx, vy)
}

/// Create a meteor on the left edge at a random height.
pub fn spawn_meteor<R: Rng>(screen: ScreenSize, rng: &mut R) -> Meteor {
    let y = (rng.r#gen::<f64>() * f64::from(screen.height)) as i32;
    let (vx, vy) = random_velocity(rng);
    Meteor::new(Point::new(METEOR_ENTRY_X, y), vx, vy)
}

fn scattered_star<R: Rng>(screen: ScreenSize, rng: &mut R) -> Point {
    Point::new(
        rng.gen_range(0..screen.width.max(1)),
        rng.gen_range(0..screen.height.max(1)),
    )
}

fn entering_star<R: Rng>(screen: ScreenSize, rng: &mut R) -> Point {
    Point::new(
        rng.gen_range(0..RESPAWN_SPREAD) - RESPAWN_SPREAD,
        rng.gen_range(0..screen.height.max(1)),
    )
}

// y never changes for stars, the check only matters if that ever does.
fn star_in_bounds(star: Point, screen: ScreenSize) -> bool {
    star.x <= screen.width && star.y <= screen.height
}

// Margins scale with velocity so the trail clears the screen before removal.
fn meteor_in_bounds(meteor: &Meteor, screen: ScreenSize) -> bool {
    let trail_x = meteor.vx * Meteor::TRAIL_FACTOR;
    let trail_y = meteor.vy * Meteor::TRAIL_FACTOR;
    let Point { x, y } = meteor.position;
    !(x > screen.width + trail_x || y > screen.height + trail_y || y < trail_y)
}
