//! Knobs for the generator, with the defaults the UI starts with.

use color::Color;
use planes::Point;

/// How a class of points is drawn.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointStyle {
    /// Side of the square (below 4 units) or radius of the circle.
    pub size: f64,
    /// Fill colour.
    pub color: Color,
}

impl Default for PointStyle {
    /// Tiny black squares: 0.4 units across, which the raster turns
    /// into a light shading of a single pixel.
    fn default() -> PointStyle {
        PointStyle { size: 0.4, color: Color::BLACK }
    }
}

/// Everything about a game that isn't chosen per reset.
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    /// Style of the points the game plots.  The size can be changed
    /// later with `ChaosGame::set_point_size`.
    pub point: PointStyle,
    /// Style of the vertex markers drawn on reset.
    pub marker: PointStyle,
    /// Fill laid down over the whole surface on reset.
    pub background: Color,
    /// Font the surface is given on reset.
    pub font: String,
    /// Where the current point starts after a reset.
    pub origin: Point,
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig {
            point: PointStyle::default(),
            marker: PointStyle { size: 6.0, color: Color::MARKER },
            background: Color::WHITE,
            font: String::from("1.0em Arial"),
            origin: Point::new(0.0, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = GameConfig::default();
        assert_eq!(c.point.size, 0.4);
        assert_eq!(c.point.color, Color::BLACK);
        assert_eq!(c.marker.size, 6.0);
        assert_eq!(c.marker.color, Color::MARKER);
        assert_eq!(c.background, Color::WHITE);
        assert_eq!(c.origin, Point::new(0.0, 0.0));
        assert_eq!(c.font, "1.0em Arial");
    }
}
