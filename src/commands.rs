//! A line-oriented stand-in for the buttons of an interactive UI.
//!
//! ```text
//! # comments and blank lines are skipped
//! reset random triangle 640x480
//! size 1
//! advance 10000
//! resize 800x600
//! status
//! ```
//!
//! Every command answers with the status text, just as the buttons
//! refresh the panel under the canvas.

use rand::Rng;
use std::io::{BufRead, Write};
use std::str::FromStr;

use errors::{ChaosError, Result};
use game::ChaosGame;
use pattern::Pattern;
use stats::{Clock, Status};
use surface::Surface;

/// Given a string and a separator, returns the two values
/// separated by the separator.
pub fn parse_pair<T: FromStr>(s: &str, separator: char) -> Option<(T, T)> {
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

/// One thing the user can ask for.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Command {
    /// Start over with a pattern, optionally on a surface of a new
    /// size.
    Reset(Pattern, Option<(u32, u32)>),
    /// Draw this many more points.
    Advance(u64),
    /// Draw subsequent points at this size.
    PointSize(f64),
    /// The surface's container changed size.
    Resize(u32, u32),
    /// Just report.
    Status,
}

impl FromStr for Command {
    type Err = ChaosError;

    fn from_str(line: &str) -> Result<Command> {
        let bad = || ChaosError::BadCommand(line.trim().to_string());
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or_else(bad)?;
        let rest: Vec<&str> = words.collect();

        match (verb.to_lowercase().as_str(), rest.as_slice()) {
            ("reset", []) => Err(bad()),
            ("reset", args) => {
                let last = args[args.len() - 1];
                match parse_pair::<u32>(last, 'x') {
                    Some(dims) if args.len() > 1 => {
                        let pattern = args[..args.len() - 1].join(" ").parse()?;
                        Ok(Command::Reset(pattern, Some(dims)))
                    }
                    _ => Ok(Command::Reset(args.join(" ").parse()?, None)),
                }
            }
            ("advance", [n]) => n.parse().map(Command::Advance).map_err(|_| bad()),
            ("size", [s]) => match s.parse::<f64>() {
                Ok(size) if size > 0.0 && size.is_finite() => Ok(Command::PointSize(size)),
                _ => Err(bad()),
            },
            ("resize", [dims]) => parse_pair(dims, 'x')
                .map(|(w, h)| Command::Resize(w, h))
                .ok_or_else(bad),
            ("status", []) => Ok(Command::Status),
            _ => Err(bad()),
        }
    }
}

impl Command {
    /// Carry the command out against a game.  A reset without
    /// dimensions keeps the surface's current size.
    pub fn apply<S, R, C>(self, game: &mut ChaosGame<S, R, C>) -> Result<Status>
    where
        S: Surface,
        R: Rng,
        C: Clock,
    {
        match self {
            Command::Reset(pattern, dims) => {
                let (w, h) = dims.unwrap_or_else(|| (game.surface().width(), game.surface().height()));
                game.reset(pattern, w, h)
            }
            Command::Advance(n) => game.advance(n),
            Command::PointSize(size) => Ok(game.set_point_size(size)),
            Command::Resize(w, h) => {
                game.resize(w, h)?;
                Ok(game.status())
            }
            Command::Status => Ok(game.status()),
        }
    }
}

/// Run every command in `input` against `game`, writing the status
/// after each one to `output`.  Stops at the first command that fails;
/// the error names the offending line.
pub fn run_script<S, R, C, I, O>(game: &mut ChaosGame<S, R, C>, input: I, mut output: O) -> Result<usize>
where
    S: Surface,
    R: Rng,
    C: Clock,
    I: BufRead,
    O: Write,
{
    let mut executed = 0;
    for (number, line) in input.lines().enumerate() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        let command: Command = text.parse().map_err(|err| match err {
            ChaosError::BadCommand(_) | ChaosError::UnknownPattern(_) => {
                ChaosError::BadCommand(format!("line {}: {} ({})", number + 1, text, err))
            }
            other => other,
        })?;
        debug!("line {}: {:?}", number + 1, command);
        let status = command.apply(game)?;
        writeln!(output, "{}", status)?;
        executed += 1;
    }
    Ok(executed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::GameConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use stats::testing::SteppingClock;
    use surface::recording::Recorder;

    #[test]
    fn parse_pair_parses_dimensions() {
        assert_eq!(parse_pair::<u32>("800x600", 'x'), Some((800, 600)));
        assert_eq!(parse_pair::<f64>("-1.5,2", ','), Some((-1.5, 2.0)));
        assert_eq!(parse_pair::<u32>("800", 'x'), None);
        assert_eq!(parse_pair::<u32>("800x", 'x'), None);
        assert_eq!(parse_pair::<u32>("ax600", 'x'), None);
    }

    #[test]
    fn parses_commands() {
        assert_eq!(
            "reset triangle".parse::<Command>().unwrap(),
            Command::Reset(Pattern::Triangle, None)
        );
        assert_eq!(
            "reset random triangle 640x480".parse::<Command>().unwrap(),
            Command::Reset(Pattern::RandomTriangle, Some((640, 480)))
        );
        assert_eq!(
            "  RESET   quad ".parse::<Command>().unwrap(),
            Command::Reset(Pattern::Quad, None)
        );
        assert_eq!("advance 1000".parse::<Command>().unwrap(), Command::Advance(1000));
        assert_eq!("size 0.4".parse::<Command>().unwrap(), Command::PointSize(0.4));
        assert_eq!("resize 320x200".parse::<Command>().unwrap(), Command::Resize(320, 200));
        assert_eq!("status".parse::<Command>().unwrap(), Command::Status);
    }

    #[test]
    fn rejects_bad_commands() {
        for line in &[
            "",
            "reset",
            "advance",
            "advance -3",
            "advance lots",
            "size 0",
            "size -1",
            "resize 320",
            "status now",
            "jump 10",
        ] {
            assert!(line.parse::<Command>().is_err(), "accepted '{}'", line);
        }
        match "reset hexagon".parse::<Command>() {
            Err(ChaosError::UnknownPattern(tag)) => assert_eq!(tag, "hexagon"),
            other => panic!("expected UnknownPattern, got {:?}", other),
        }
    }

    fn game() -> ChaosGame<Recorder, StdRng, SteppingClock> {
        ChaosGame::with_config(
            Recorder::new(200, 100),
            StdRng::seed_from_u64(8),
            SteppingClock::new(40),
            GameConfig::default(),
        )
    }

    #[test]
    fn reset_without_dimensions_keeps_the_surface_size() {
        let mut g = game();
        Command::Reset(Pattern::Rectangle, None).apply(&mut g).unwrap();
        assert_eq!(g.surface().width, 200);
        assert_eq!(g.session().unwrap().vertices()[3].x, 190.0);
    }

    #[test]
    fn script_reports_after_every_command() {
        let mut g = game();
        let script = b"# a short session\n\nreset rectangle 100x100\nsize 2\nadvance 2000\nstatus\n";
        let mut out: Vec<u8> = vec![];
        let executed = run_script(&mut g, &script[..], &mut out).unwrap();
        assert_eq!(executed, 4);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "Point size: 0.4 pixels; Points drawn: 0");
        assert_eq!(lines[1], "Elapsed time: - ms; Drawing rate: - points/sec.");
        assert_eq!(lines[2], "Point size: 2 pixels; Points drawn: 0");
        assert_eq!(lines[4], "Point size: 2 pixels; Points drawn: 2000");
        assert_eq!(lines[5], "Elapsed time: 40 ms; Drawing rate: 50000 points/sec.");
        assert_eq!(lines[6], lines[4]);
    }

    #[test]
    fn script_errors_name_the_line() {
        let mut g = game();
        let script = b"reset triangle\nadvance ten\n";
        let mut out: Vec<u8> = vec![];
        match run_script(&mut g, &script[..], &mut out) {
            Err(ChaosError::BadCommand(msg)) => assert!(msg.starts_with("line 2: advance ten")),
            other => panic!("expected BadCommand, got {:?}", other),
        }
    }

    #[test]
    fn advancing_without_reset_stops_the_script() {
        let mut g = game();
        let mut out: Vec<u8> = vec![];
        match run_script(&mut g, &b"advance 5\n"[..], &mut out) {
            Err(ChaosError::NoSession) => {}
            other => panic!("expected NoSession, got {:?}", other),
        }
        assert!(out.is_empty());
    }
}
