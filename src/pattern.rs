// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The four vertex layouts the game can start from.
//!
//! Every layout is expressed as fractions of the surface width and
//! height.  The two "random" layouts start from a smaller regular
//! shape and then nudge each vertex by up to a tenth of the surface
//! in each direction, so that the result is a slightly distorted
//! shape rather than a completely random set of vertices.

use rand::Rng;
use std::fmt;
use std::str::FromStr;

use errors::ChaosError;
use planes::Point;

/// A vertex layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Pattern {
    /// An isoceles triangle filling the surface; produces the
    /// Sierpinski triangle.
    Triangle,
    /// A smaller triangle with jittered corners.
    RandomTriangle,
    /// The four corners of the surface, inset by 5%.
    Rectangle,
    /// A smaller rectangle with jittered corners.
    Quad,
}

/// Every pattern, in the order the UI offers them.
pub const PATTERNS: [Pattern; 4] = [
    Pattern::Triangle,
    Pattern::RandomTriangle,
    Pattern::Rectangle,
    Pattern::Quad,
];

/// Fraction of a dimension that one side of the jitter range spans.
pub const JITTER: f64 = 0.1;

const TRIANGLE: [(f64, f64); 3] = [(0.5, 0.05), (0.05, 0.95), (0.95, 0.95)];
const RANDOM_TRIANGLE: [(f64, f64); 3] = [(0.5, 0.2), (0.2, 0.8), (0.8, 0.8)];
const RECTANGLE: [(f64, f64); 4] = [(0.05, 0.05), (0.95, 0.05), (0.05, 0.95), (0.95, 0.95)];
const QUAD: [(f64, f64); 4] = [(0.2, 0.2), (0.2, 0.8), (0.8, 0.2), (0.8, 0.8)];

impl Pattern {
    /// The tag the UI uses for this pattern.
    pub fn tag(self) -> &'static str {
        match self {
            Pattern::Triangle => "triangle",
            Pattern::RandomTriangle => "random triangle",
            Pattern::Rectangle => "rectangle",
            Pattern::Quad => "quad",
        }
    }

    /// Does this pattern move its vertices at random?
    pub fn is_jittered(self) -> bool {
        match self {
            Pattern::RandomTriangle | Pattern::Quad => true,
            Pattern::Triangle | Pattern::Rectangle => false,
        }
    }

    /// The unjittered vertex positions, as fractions of the surface.
    pub fn anchors(self) -> &'static [(f64, f64)] {
        match self {
            Pattern::Triangle => &TRIANGLE,
            Pattern::RandomTriangle => &RANDOM_TRIANGLE,
            Pattern::Rectangle => &RECTANGLE,
            Pattern::Quad => &QUAD,
        }
    }

    /// Lay the pattern out on a surface of the given size.  The
    /// random source is only consulted by the jittered patterns.
    pub fn vertices<R: Rng>(self, width: f64, height: f64, rng: &mut R) -> Vec<Point> {
        let jittered = self.is_jittered();
        self.anchors()
            .iter()
            .map(|&(fx, fy)| {
                let anchor = Point::new(width * fx, height * fy);
                if jittered {
                    Point::new(
                        anchor.x + jitter(width, rng),
                        anchor.y + jitter(height, rng),
                    )
                } else {
                    anchor
                }
            })
            .collect()
    }
}

/// A whole number of units somewhere in `[0, 20%)` of `extent`,
/// shifted down by 10% so that it's centred on zero.
fn jitter<R: Rng>(extent: f64, rng: &mut R) -> f64 {
    let span = (extent * 2.0 * JITTER).ceil();
    let k = if span >= 1.0 {
        rng.gen_range(0, span as u64) as f64
    } else {
        0.0
    };
    k - extent * JITTER
}

impl FromStr for Pattern {
    type Err = ChaosError;

    /// Case doesn't matter, and `-` or `_` may stand in for the space
    /// in "random triangle".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
            .filter(|w| !w.is_empty())
            .collect::<Vec<&str>>()
            .join(" ");
        PATTERNS
            .iter()
            .find(|p| p.tag() == normalized)
            .cloned()
            .ok_or_else(|| ChaosError::UnknownPattern(s.to_string()))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.tag())
    }
}
