extern crate chaosgame;
extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate rand;

use chaosgame::commands::{parse_pair, run_script};
use chaosgame::pattern::PATTERNS;
use chaosgame::{Canvas, ChaosGame, Color, GameConfig, Pattern, Surface, SystemClock};
use clap::{App, Arg, ArgMatches};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::{self, BufReader};
use std::str::FromStr;

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_color(s: &str) -> Result<(), String> {
    Color::from_str(s).map(|_| ()).map_err(|e| e.to_string())
}

fn validate_range<T: FromStr + PartialOrd>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const PATTERN: &str = "pattern";
const POINTS: &str = "points";
const BATCHES: &str = "batches";
const POINT_SIZE: &str = "point-size";
const SEED: &str = "seed";
const SCRIPT: &str = "script";
const POINT_COLOR: &str = "point-color";
const MARKER_COLOR: &str = "marker-color";
const BACKGROUND: &str = "background";

fn args<'a>() -> ArgMatches<'a> {
    let tags: Vec<&'static str> = PATTERNS.iter().map(|p| p.tag()).collect();

    App::new("chaos")
        .version("0.1.0")
        .about("Chaos Game fractal renderer")
        .arg(
            Arg::with_name(OUTPUT)
                .required(true)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output PNG file"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("800x600")
                .validator(|s| validate_pair::<u32>(&s, 'x', "Could not parse output image size"))
                .help("Size of the drawing surface"),
        )
        .arg(
            Arg::with_name(PATTERN)
                .required(false)
                .long(PATTERN)
                .short("p")
                .takes_value(true)
                .default_value("triangle")
                .validator(move |s| match Pattern::from_str(&s) {
                    Ok(_) => Ok(()),
                    Err(_) => Err(format!("Pattern must be one of: {}", tags.join(", "))),
                })
                .help("Vertex pattern"),
        )
        .arg(
            Arg::with_name(POINTS)
                .required(false)
                .long(POINTS)
                .short("n")
                .takes_value(true)
                .default_value("10000")
                .validator(|s| {
                    validate_range(
                        &s,
                        0u64,
                        100_000_000,
                        "Could not parse point count",
                        "Point count must be between 0 and 100000000",
                    )
                })
                .help("Number of points to draw in each batch"),
        )
        .arg(
            Arg::with_name(BATCHES)
                .required(false)
                .long(BATCHES)
                .short("b")
                .takes_value(true)
                .default_value("1")
                .validator(|s| {
                    validate_range(
                        &s,
                        1u32,
                        10_000,
                        "Could not parse batch count",
                        "Batch count must be between 1 and 10000",
                    )
                })
                .help("Number of batches to draw"),
        )
        .arg(
            Arg::with_name(POINT_SIZE)
                .required(false)
                .long(POINT_SIZE)
                .short("z")
                .takes_value(true)
                .default_value("0.4")
                .validator(|s| {
                    validate_range(
                        &s,
                        0.01f64,
                        100.0,
                        "Could not parse point size",
                        "Point size must be between 0.01 and 100",
                    )
                })
                .help("Size of each point, in pixels"),
        )
        .arg(
            Arg::with_name(POINT_COLOR)
                .required(false)
                .long(POINT_COLOR)
                .takes_value(true)
                .default_value("black")
                .validator(|s| validate_color(&s))
                .help("Colour of the points: #rgb, #rrggbb, #rrggbbaa, black or white"),
        )
        .arg(
            Arg::with_name(MARKER_COLOR)
                .required(false)
                .long(MARKER_COLOR)
                .takes_value(true)
                .default_value("#3300ff")
                .validator(|s| validate_color(&s))
                .help("Colour of the vertex markers"),
        )
        .arg(
            Arg::with_name(BACKGROUND)
                .required(false)
                .long(BACKGROUND)
                .takes_value(true)
                .default_value("white")
                .validator(|s| validate_color(&s))
                .help("Colour the surface is filled with on reset"),
        )
        .arg(
            Arg::with_name(SEED)
                .required(false)
                .long(SEED)
                .takes_value(true)
                .validator(|s| match u64::from_str(&s) {
                    Ok(_) => Ok(()),
                    Err(_) => Err("Could not parse seed".to_string()),
                })
                .help("Seed for the random source, for repeatable pictures"),
        )
        .arg(
            Arg::with_name(SCRIPT)
                .required(false)
                .long(SCRIPT)
                .short("c")
                .takes_value(true)
                .help("Command script to run instead of --pattern/--points/--batches; '-' reads stdin"),
        )
        .get_matches()
}

fn run(matches: &ArgMatches) -> chaosgame::Result<()> {
    let (width, height) = parse_pair::<u32>(matches.value_of(SIZE).unwrap(), 'x')
        .expect("Error parsing image dimensions");
    let point_size = f64::from_str(matches.value_of(POINT_SIZE).unwrap())
        .expect("Error parsing point size");
    let rng = match matches.value_of(SEED) {
        Some(seed) => StdRng::seed_from_u64(u64::from_str(seed).expect("Error parsing seed")),
        None => StdRng::from_entropy(),
    };

    let mut config = GameConfig::default();
    config.point.size = point_size;
    config.point.color = Color::from_str(matches.value_of(POINT_COLOR).unwrap())?;
    config.marker.color = Color::from_str(matches.value_of(MARKER_COLOR).unwrap())?;
    config.background = Color::from_str(matches.value_of(BACKGROUND).unwrap())?;
    debug!(
        "points {}, markers {}, background {}",
        config.point.color, config.marker.color, config.background
    );

    let mut game = ChaosGame::with_config(Canvas::new(width, height), rng, SystemClock::new(), config);

    match matches.value_of(SCRIPT) {
        Some("-") => {
            let stdin = io::stdin();
            run_script(&mut game, stdin.lock(), io::stdout())?;
        }
        Some(path) => {
            let script = BufReader::new(File::open(path)?);
            run_script(&mut game, script, io::stdout())?;
        }
        None => {
            let pattern = Pattern::from_str(matches.value_of(PATTERN).unwrap())?;
            let points = u64::from_str(matches.value_of(POINTS).unwrap())
                .expect("Error parsing point count");
            let batches = u32::from_str(matches.value_of(BATCHES).unwrap())
                .expect("Error parsing batch count");

            println!("{}", game.reset(pattern, width, height)?);
            for _ in 0..batches {
                println!("{}", game.advance(points)?);
            }
        }
    }

    let output = matches.value_of(OUTPUT).unwrap();
    let canvas = game.into_surface();
    canvas.write_png(output)?;
    info!(
        "wrote {}x{} image to {}",
        canvas.width(),
        canvas.height(),
        output
    );
    Ok(())
}

fn main() {
    env_logger::init();
    let matches = args();
    if let Err(e) = run(&matches) {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
