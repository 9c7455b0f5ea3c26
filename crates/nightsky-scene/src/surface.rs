//! Off-screen pixel surface and its terminal compositing.

use nightsky_core::{Point, ScreenSize};
use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

use crate::color::SKY;

/// Upper half block: foreground paints the top pixel, background the bottom.
const HALF_BLOCK: &str = "▀";

/// RGB framebuffer the scene is painted into before it reaches the terminal.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Surface {
    /// Create a surface of `width × height` pixels filled with the sky color.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![SKY; width * height],
        }
    }

    /// Create a surface matching the screen dimensions.
    pub fn for_screen(screen: ScreenSize) -> Self {
        Self::new(
            usize::try_from(screen.width).unwrap_or(0),
            usize::try_from(screen.height).unwrap_or(0),
        )
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Color at `(x, y)`, or `None` off the surface.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Set a single pixel. Off-surface coordinates are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Fill the whole surface.
    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Fill a `width × height` rectangle whose top-left corner is `(x, y)`.
    pub fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        for py in y..y + height {
            for px in x..x + width {
                self.set_pixel(px, py, color);
            }
        }
    }

    /// Draw a straight line between two points, both ends included.
    pub fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        let dx = (to.x - from.x).abs();
        let dy = -(to.y - from.y).abs();
        let step_x = if from.x < to.x { 1 } else { -1 };
        let step_y = if from.y < to.y { 1 } else { -1 };
        let mut err = dx + dy;
        let Point { mut x, mut y } = from;

        loop {
            self.set_pixel(x, y, color);
            if x == to.x && y == to.y {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += step_x;
            }
            if e2 <= dx {
                err += dx;
                y += step_y;
            }
        }
    }
}

impl Widget for &Surface {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for row in 0..area.height {
            for col in 0..area.width {
                let x = i32::from(col);
                let top_y = i32::from(row) * 2;
                let Some(top) = self.pixel(x, top_y) else {
                    continue;
                };
                let bottom = self.pixel(x, top_y + 1).unwrap_or(SKY);

                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_symbol(HALF_BLOCK).set_fg(top).set_bg(bottom);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_sky() {
        let surface = Surface::new(4, 3);
        assert_eq!(surface.pixel(0, 0), Some(SKY));
        assert_eq!(surface.pixel(3, 2), Some(SKY));
        assert_eq!(surface.pixel(4, 0), None);
        assert_eq!(surface.pixel(-1, 0), None);
    }

    #[test]
    fn test_set_pixel_out_of_bounds_is_ignored() {
        let mut surface = Surface::new(4, 4);
        surface.set_pixel(-3, 2, Color::White);
        surface.set_pixel(2, 10, Color::White);
        assert!(surface.pixels.iter().all(|&c| c == SKY));
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut surface = Surface::new(4, 4);
        surface.fill_rect(3, 3, 2, 2, Color::Red);
        assert_eq!(surface.pixel(3, 3), Some(Color::Red));
        assert_eq!(surface.pixel(2, 3), Some(SKY));
        assert_eq!(surface.pixels.iter().filter(|&&c| c == Color::Red).count(), 1);
    }

    #[test]
    fn test_draw_line_includes_endpoints() {
        let mut surface = Surface::new(20, 20);
        surface.draw_line(Point::new(2, 3), Point::new(12, 7), Color::Gray);
        assert_eq!(surface.pixel(2, 3), Some(Color::Gray));
        assert_eq!(surface.pixel(12, 7), Some(Color::Gray));
        // One pixel per column on a shallow line.
        assert_eq!(surface.pixels.iter().filter(|&&c| c == Color::Gray).count(), 11);
    }

    #[test]
    fn test_draw_line_single_point() {
        let mut surface = Surface::new(5, 5);
        surface.draw_line(Point::new(1, 1), Point::new(1, 1), Color::Gray);
        assert_eq!(surface.pixel(1, 1), Some(Color::Gray));
        assert_eq!(surface.pixels.iter().filter(|&&c| c == Color::Gray).count(), 1);
    }

    #[test]
    fn test_draw_line_leaving_surface() {
        let mut surface = Surface::new(10, 10);
        surface.draw_line(Point::new(15, -4), Point::new(-6, 12), Color::Gray);
        assert!(surface.pixels.iter().any(|&c| c == Color::Gray));
    }

    #[test]
    fn test_widget_stacks_two_pixels_per_cell() {
        let mut surface = Surface::new(3, 4);
        surface.set_pixel(1, 0, Color::White);
        surface.set_pixel(1, 1, Color::Red);
        surface.set_pixel(2, 3, Color::Blue);

        let area = Rect::new(0, 0, 3, 2);
        let mut buf = Buffer::empty(area);
        surface.render(area, &mut buf);

        let cell = &buf[(1, 0)];
        assert_eq!(cell.symbol(), HALF_BLOCK);
        assert_eq!(cell.fg, Color::White);
        assert_eq!(cell.bg, Color::Red);

        let cell = &buf[(2, 1)];
        assert_eq!(cell.fg, SKY);
        assert_eq!(cell.bg, Color::Blue);
    }

    #[test]
    fn test_widget_larger_area_than_surface() {
        let surface = Surface::new(2, 2);
        let area = Rect::new(0, 0, 4, 3);
        let mut buf = Buffer::empty(area);
        surface.render(area, &mut buf);

        assert_eq!(buf[(1, 0)].symbol(), HALF_BLOCK);
        assert_eq!(buf[(3, 0)].symbol(), " ");
        assert_eq!(buf[(0, 2)].symbol(), " ");
    }
}
