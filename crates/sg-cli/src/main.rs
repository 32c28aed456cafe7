//! shaftgen: generate a platformer level and print it
//!
//! Either runs the level generator (optionally seeded, sized and tuned from an
//! options file) or loads a static ASCII layout, then prints the grid as
//! ASCII art or JSON.

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use log::{LevelFilter, debug, error};
use strum::IntoEnumIterator;

use sg_core::{GameRng, GeneratorOptions, LevelGenerator, TerrainMap, TerrainType, load_layout_file};

/// Procedural platformer level generator
#[derive(Parser, Debug)]
#[command(name = "shaftgen")]
#[command(author, version, about = "Generate maze-based platformer levels", long_about = None)]
struct Args {
    /// Seed for the random source (random if omitted)
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Level number, starting at 1
    #[arg(short = 'l', long = "level", default_value_t = 1)]
    level: u32,

    /// Grid width (odd); defaults to the level's size
    #[arg(long = "width", requires = "height")]
    width: Option<usize>,

    /// Grid height (odd); defaults to the level's size
    #[arg(long = "height", requires = "width")]
    height: Option<usize>,

    /// Load a static ASCII layout instead of generating
    #[arg(long = "layout", conflicts_with_all = ["seed", "width", "options"])]
    layout: Option<PathBuf>,

    /// Generator options file (OPTIONS= lines)
    #[arg(short = 'o', long = "options")]
    options: Option<PathBuf>,

    /// Print the map as JSON
    #[arg(long = "json")]
    json: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    use simplelog::LevelFilter::Off;

    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // init only fails when a logger is already installed
    let _ = simplelog::TermLogger::init(
        level,
        simplelog::ConfigBuilder::new()
            .set_target_level(Off)
            .set_location_level(Off)
            .build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
}

fn generate(args: &Args) -> Result<(TerrainMap, u64), Box<dyn Error>> {
    let options = match &args.options {
        Some(path) => GeneratorOptions::load_from_file(path)?,
        None => GeneratorOptions::default(),
    };
    let seed = args.seed.unwrap_or_else(|| GameRng::from_entropy().seed());
    debug!("seed {}, options {:?}", seed, options);

    let mut generator = LevelGenerator::new(options, GameRng::new(seed));
    let map = match (args.width, args.height) {
        (Some(w), Some(h)) => generator.generate_sized((w, h), args.level)?,
        _ => generator.generate(args.level)?,
    };
    Ok((map, seed))
}

fn print_summary(map: &TerrainMap) {
    for terrain in TerrainType::iter().filter(|&t| t != TerrainType::Empty) {
        let count = map.count_of(terrain);
        if count > 0 {
            println!("{:>18}: {}", terrain, count);
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let (map, seed) = match &args.layout {
        Some(path) => (load_layout_file(path)?, None),
        None => {
            let (map, seed) = generate(args)?;
            (map, Some(seed))
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&map)?);
        return Ok(());
    }

    print!("{}", map);
    println!();
    match seed {
        Some(seed) => println!("level {} seed {}", args.level, seed),
        None => println!("start block {:?}", map.start_block()),
    }
    print_summary(&map);
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            eprintln!("shaftgen: {}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let args = Args::try_parse_from([
            "shaftgen", "--seed", "42", "--level", "5", "--width", "21", "--height", "17", "-vv",
            "--json",
        ])
        .unwrap();
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.level, 5);
        assert_eq!((args.width, args.height), (Some(21), Some(17)));
        assert_eq!(args.verbose, 2);
        assert!(args.json);
    }

    #[test]
    fn test_width_needs_height() {
        assert!(Args::try_parse_from(["shaftgen", "--width", "21"]).is_err());
    }

    #[test]
    fn test_layout_conflicts_with_seed() {
        assert!(Args::try_parse_from(["shaftgen", "--layout", "a.txt", "--seed", "1"]).is_err());
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let args = Args::try_parse_from(["shaftgen", "--seed", "9", "--level", "3"]).unwrap();
        let (first, seed) = generate(&args).unwrap();
        let (second, _) = generate(&args).unwrap();
        assert_eq!(seed, 9);
        assert_eq!(first, second);
    }
}
