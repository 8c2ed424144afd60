// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can go wrong while driving the generator.

use std::io;

/// The single error type of the crate.
#[derive(Debug, Fail)]
pub enum ChaosError {
    /// A pattern tag that isn't one of the four known shapes.
    #[fail(display = "Unknown pattern: '{}'", _0)]
    UnknownPattern(String),

    /// A surface needs at least one unit in each direction.
    #[fail(display = "Invalid surface dimensions: {}x{}", _0, _1)]
    InvalidDimensions(u32, u32),

    /// `advance` was called before the first `reset`.
    #[fail(display = "No session in progress; reset before advancing")]
    NoSession,

    /// A fill style that isn't a recognizable colour.
    #[fail(display = "Could not parse colour: '{}'", _0)]
    BadColor(String),

    /// A line of a command script that couldn't be understood.
    #[fail(display = "Could not parse command: '{}'", _0)]
    BadCommand(String),

    /// Reading a script or writing the image failed.
    #[fail(display = "I/O failure: {}", _0)]
    Io(#[cause] io::Error),
}

impl From<io::Error> for ChaosError {
    fn from(err: io::Error) -> Self {
        ChaosError::Io(err)
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = ::std::result::Result<T, ChaosError>;
