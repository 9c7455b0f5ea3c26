//! Screen dimensions and scene tunables.

/// Pixel dimensions of the drawing surface, captured once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    pub width: i32,
    pub height: i32,
}

impl ScreenSize {
    /// Create a screen size from pixel dimensions.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Screen size for a terminal of `columns × rows` cells.
    ///
    /// Each cell shows two stacked pixels, so the pixel height is twice the
    /// row count.
    pub fn from_cells(columns: u16, rows: u16) -> Self {
        Self::new(i32::from(columns), i32::from(rows) * 2)
    }

    /// Total pixel area.
    pub fn area(&self) -> u64 {
        self.width.max(0) as u64 * self.height.max(0) as u64
    }
}

/// Tunable parameters of the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneParams {
    /// Target size of each star tier.
    pub num_stars: usize,
    /// Probability of spawning a meteor on each tick.
    pub meteor_chance: f64,
}

impl SceneParams {
    /// Screen area covered by one star of each tier.
    pub const DEFAULT_STAR_DENSITY: u32 = 3000;
    /// Meteor spawn probability per tick.
    pub const DEFAULT_METEOR_CHANCE: f64 = 0.01;

    /// Derive parameters from a screen size and star density.
    ///
    /// A density of zero is treated as one star per pixel.
    pub fn for_screen(screen: ScreenSize, star_density: u32, meteor_chance: f64) -> Self {
        let num_stars = screen.area() / u64::from(star_density.max(1));
        Self {
            num_stars: usize::try_from(num_stars).unwrap_or(usize::MAX),
            meteor_chance: meteor_chance.clamp(0.0, 1.0),
        }
    }
}
