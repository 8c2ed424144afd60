// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The Chaos Game itself.
//!
//! Start with a handful of fixed vertices and a point somewhere on the
//! plane.  Over and over: pick one of the vertices at random, move the
//! point halfway toward it, and plot where the point lands.  For three
//! vertices the plotted points settle onto the Sierpinski triangle;
//! four vertices produce a denser, less structured picture.
//!
//! `ChaosGame` owns the surface it draws on, the random source that
//! picks vertices (and jitters them, for the patterns that do that),
//! and the clock that times each batch.  Inject a seeded random source
//! to get the same picture twice.

use rand::Rng;

use config::GameConfig;
use errors::{ChaosError, Result};
use pattern::Pattern;
use planes::Point;
use stats::{Clock, Stats, Status, SystemClock};
use surface::{draw_point, Surface};

/// Everything that a reset creates and the next reset throws away.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pattern: Pattern,
    vertices: Vec<Point>,
    current: Point,
    stats: Stats,
}

impl Session {
    /// The pattern the session was started with.
    pub fn pattern(&self) -> Pattern {
        self.pattern
    }

    /// The fixed anchors of this session; three or four of them.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Where the iterated point currently is.
    pub fn current(&self) -> Point {
        self.current
    }

    /// Counters since the reset.
    pub fn stats(&self) -> Stats {
        self.stats
    }
}

/// The point generator and renderer.  Nothing can be drawn until the
/// first `reset`; after that, `advance` may be called any number of
/// times, and every further `reset` starts over.
pub struct ChaosGame<S: Surface, R: Rng, C: Clock = SystemClock> {
    surface: S,
    rng: R,
    clock: C,
    config: GameConfig,
    point_size: f64,
    session: Option<Session>,
}

impl<S: Surface, R: Rng> ChaosGame<S, R, SystemClock> {
    /// A game with the default configuration, timed by the system
    /// clock.
    pub fn new(surface: S, rng: R) -> Self {
        ChaosGame::with_config(surface, rng, SystemClock::new(), GameConfig::default())
    }
}

impl<S: Surface, R: Rng, C: Clock> ChaosGame<S, R, C> {
    /// A game with every collaborator spelled out.
    pub fn with_config(surface: S, rng: R, clock: C, config: GameConfig) -> Self {
        let point_size = config.point.size;
        ChaosGame {
            surface,
            rng,
            clock,
            config,
            point_size,
            session: None,
        }
    }

    /// Clear the surface, resized to `width` by `height`, lay out the
    /// vertices of `pattern`, mark them, and start counting from zero
    /// with the current point back at the origin.
    pub fn reset(&mut self, pattern: Pattern, width: u32, height: u32) -> Result<Status> {
        if width == 0 || height == 0 {
            return Err(ChaosError::InvalidDimensions(width, height));
        }
        let (w, h) = (f64::from(width), f64::from(height));

        self.surface.resize(width, height);
        self.surface.clear_rect(0.0, 0.0, w, h);
        self.surface.set_fill_style(self.config.background);
        self.surface.fill_rect(0.0, 0.0, w, h);
        self.surface.set_font(&self.config.font);

        let vertices = pattern.vertices(w, h, &mut self.rng);
        let marker = self.config.marker;
        for vertex in &vertices {
            draw_point(&mut self.surface, *vertex, marker.size, marker.color);
        }
        debug!("reset: {} on {}x{}, vertices {:?}", pattern, width, height, vertices);

        self.session = Some(Session {
            pattern,
            vertices,
            current: self.config.origin,
            stats: Stats::default(),
        });
        Ok(self.status())
    }

    /// Plot the next `n` points, then record how long that took.
    /// Fails if no reset has happened yet.
    pub fn advance(&mut self, n: u64) -> Result<Status> {
        let start = self.clock.now_millis();
        {
            let session = self.session.as_mut().ok_or(ChaosError::NoSession)?;
            let color = self.config.point.color;
            for _ in 0..n {
                let chosen = self.rng.gen_range(0, session.vertices.len());
                session.current = session.current.halfway(session.vertices[chosen]);
                draw_point(&mut self.surface, session.current, self.point_size, color);
            }
            let elapsed = self.clock.now_millis().saturating_sub(start);
            session.stats.record_batch(n, elapsed);
            trace!(
                "advance: {} points in {} ms, now at {:?}",
                n,
                elapsed,
                session.current
            );
        }
        Ok(self.status())
    }

    /// Change the size of points drawn from now on.  Points already
    /// on the surface are left alone, and the size outlives resets.
    pub fn set_point_size(&mut self, size: f64) -> Status {
        self.point_size = size;
        self.status()
    }

    /// The surface's container changed size.  The surface follows;
    /// the vertices and the current point don't, so the picture in
    /// progress carries on where it was.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(ChaosError::InvalidDimensions(width, height));
        }
        debug!("resize: {}x{}", width, height);
        self.surface.resize(width, height);
        Ok(())
    }

    /// The numbers the UI shows.
    pub fn status(&self) -> Status {
        Status {
            point_size: self.point_size,
            stats: self.session.as_ref().map(Session::stats).unwrap_or_default(),
        }
    }

    /// The session in progress, if there has been a reset.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// The surface being drawn on.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Give up the game and keep the picture.
    pub fn into_surface(self) -> S {
        self.surface
    }
}
