//! Particle model: star positions and meteors.

/// Integer pixel position of a star or meteor head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a point at the given pixel coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move the point by the given offset.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }
}

/// A meteor streaking across the sky at constant velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Meteor {
    /// Position of the meteor head.
    pub position: Point,
    /// Horizontal velocity in pixels per tick.
    pub vx: i32,
    /// Vertical velocity in pixels per tick.
    pub vy: i32,
}

impl Meteor {
    /// Length multiplier of the trail relative to velocity.
    pub const TRAIL_FACTOR: i32 = 2;

    /// Create a meteor at `position` moving by `(vx, vy)` each tick.
    pub const fn new(position: Point, vx: i32, vy: i32) -> Self {
        Self { position, vx, vy }
    }

    /// Advance the head by one tick of velocity.
    pub fn step(&mut self) {
        self.position.translate(self.vx, self.vy);
    }

    /// End point of the rendered trail, behind the head.
    pub fn tail(&self) -> Point {
        Point::new(
            self.position.x - self.vx * Self::TRAIL_FACTOR,
            self.position.y - self.vy * Self::TRAIL_FACTOR,
        )
    }
}
