#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Chaos Game renderer
//!
//! The Chaos Game builds a fractal out of nothing more than a few
//! fixed points and a coin toss.  Pick three vertices of a triangle
//! and any starting point.  Choose one of the vertices at random, move
//! halfway from where you are toward it, and make a mark.  Repeat.
//! After a few thousand marks the Sierpinski triangle appears, since
//! every halfway move is one of the three contractions that map the
//! triangle onto its own corners.
//!
//! The crate draws the game incrementally.  A `ChaosGame` owns a
//! drawing surface (anything implementing `Surface`; `Canvas` is a
//! raster one that can be saved as a PNG), a random source and a
//! clock.  `reset` lays out one of four vertex patterns and clears
//! the surface; `advance` plots the next batch of points and reports
//! how long that took.

#[macro_use]
extern crate failure;
extern crate image;
#[macro_use]
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;
extern crate rand;

#[cfg(test)]
extern crate tempfile;

pub mod color;
pub mod commands;
pub mod config;
pub mod errors;
pub mod game;
pub mod pattern;
pub mod planes;
pub mod stats;
pub mod surface;

pub use color::Color;
pub use commands::{run_script, Command};
pub use config::{GameConfig, PointStyle};
pub use errors::{ChaosError, Result};
pub use game::{ChaosGame, Session};
pub use pattern::Pattern;
pub use planes::Point;
pub use stats::{Clock, Stats, Status, SystemClock};
pub use surface::{draw_point, Canvas, Surface};
