//! Bookkeeping for the status line: how many points have been drawn,
//! how long the last batch took, and how fast that was.

use std::fmt;
use std::time::Instant;

/// Batches that finish in this many milliseconds or fewer are too
/// quick to time meaningfully, so no rate is reported for them.
pub const NOISE_FLOOR_MS: u64 = 25;

/// A source of elapsed wall-clock milliseconds.
pub trait Clock {
    /// Milliseconds since some fixed, arbitrary instant.
    fn now_millis(&self) -> u64;
}

/// The real clock.
#[derive(Debug)]
pub struct SystemClock(Instant);

impl SystemClock {
    /// A clock counting from now.
    pub fn new() -> SystemClock {
        SystemClock(Instant::now())
    }
}

impl Default for SystemClock {
    fn default() -> SystemClock {
        SystemClock::new()
    }
}

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        let elapsed = self.0.elapsed();
        elapsed.as_secs() * 1000 + u64::from(elapsed.subsec_millis())
    }
}

/// The per-session counters.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Stats {
    /// Points drawn since the last reset.
    pub points: u64,
    /// Duration of the last batch, if there has been one.
    pub elapsed_ms: Option<u64>,
    /// Points per second of the last batch, if it was measurable.
    pub rate: Option<u64>,
}

impl Stats {
    /// Account for a finished batch of `n` points.
    pub fn record_batch(&mut self, n: u64, elapsed_ms: u64) {
        self.points += n;
        self.elapsed_ms = Some(elapsed_ms);
        self.rate = if n > 0 && elapsed_ms > NOISE_FLOOR_MS {
            Some(n * 1000 / elapsed_ms)
        } else {
            None
        };
    }
}

/// The text the UI shows after every reset and every batch.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Status {
    /// The size subsequent points will be drawn at.
    pub point_size: f64,
    /// Counters of the current session.
    pub stats: Stats,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Point size: {} pixels; Points drawn: {}",
            self.point_size, self.stats.points
        )?;
        match self.stats.elapsed_ms {
            Some(0) => write!(f, "Elapsed time: < 1 ms; ")?,
            Some(ms) => write!(f, "Elapsed time: {} ms; ", ms)?,
            None => write!(f, "Elapsed time: - ms; ")?,
        }
        match self.stats.rate {
            Some(rate) if rate > 0 => write!(f, "Drawing rate: {} points/sec.", rate),
            _ => write!(f, "Drawing rate: - points/sec."),
        }
    }
}
