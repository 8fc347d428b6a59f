use std::{
    fs::File,
    io::{self, Write},
};

use anyhow::Context;
use clap::{App, Arg, ArgMatches};
use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, LevelPadding, SharedLogger,
    TermLogger, TerminalMode, WriteLogger,
};

use battlefield::{
    board::{Grid, SquareDimensions},
    placement::{Placer, RngSampler, DEFAULT_ATTEMPTS},
};

use crate::{
    command::HELP,
    input::InputReader,
    session::{Exit, Options, Session},
};

mod command;
mod input;
mod session;

fn main() -> anyhow::Result<()> {
    let default_attempts = DEFAULT_ATTEMPTS.to_string();
    let matches = App::new("Battleship Field Designer")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Populates a battlefield with randomly placed, non-touching ships.")
        .arg(
            Arg::with_name("size")
                .short("s")
                .long("size")
                .value_name("N")
                .help("use an N x N field instead of a random size")
                .takes_value(true)
                .validator(positive),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("seed the random source to reproduce a field")
                .takes_value(true)
                .validator(|v| v.parse::<u64>().map(|_| ()).map_err(|e| e.to_string())),
        )
        .arg(
            Arg::with_name("attempts")
                .short("a")
                .long("attempts")
                .value_name("N")
                .help("how many random locations to try for each ship")
                .takes_value(true)
                .default_value(&default_attempts)
                .validator(positive),
        )
        .arg(
            Arg::with_name("keep_going")
                .short("k")
                .long("keep-going")
                .help("keep running when a ship cannot be placed"),
        )
        .arg(
            Arg::with_name("no_clear")
                .long("no-clear")
                .help("do not clear the terminal between commands"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("increase logging verbosity, may be repeated"),
        )
        .arg(
            Arg::with_name("log_file")
                .long("log-file")
                .value_name("PATH")
                .help("also write a full trace log to PATH")
                .takes_value(true),
        )
        .get_matches();

    init_log(&matches)?;

    let seed = match matches.value_of("seed") {
        Some(seed) => seed.parse().context("invalid seed")?,
        None => rand::thread_rng().gen(),
    };
    let mut rng = StdRng::seed_from_u64(seed);

    let dim = match matches.value_of("size") {
        Some(size) => SquareDimensions::try_new(size.parse().context("invalid size")?)?,
        None => SquareDimensions::random(&mut rng),
    };
    let attempts = matches
        .value_of("attempts")
        .unwrap_or(&default_attempts)
        .parse()
        .context("invalid attempts")?;
    let options = Options {
        keep_going: matches.is_present("keep_going"),
        clear: !matches.is_present("no_clear"),
    };
    info!(
        "{}x{} field, seed {}, {} attempts per ship",
        dim.size(),
        dim.size(),
        seed,
        attempts
    );

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "Welcome to Battleship field designer!")?;
    writeln!(out, "Please, populate a battlefield with battle-ships.")?;
    writeln!(
        out,
        "Note, a size of the field is random, it can change every time you run this program."
    )?;
    writeln!(
        out,
        "Note, each vessel will be placed at a random location, vertically, horizontally or even diagonally."
    )?;
    writeln!(out, "{}", HELP)?;

    let mut session = Session::new(
        Grid::with_dimensions(dim),
        Placer::new(attempts),
        RngSampler::new(rng),
        options,
    );
    session.draw(&mut out)?;

    match session.run(&mut input, &mut out)? {
        Exit::Quit | Exit::EndOfInput => info!("done, {}", session.fleet()),
        Exit::GaveUp(err) => info!(
            "gave up on a {} after {} attempts, {}",
            err.kind(),
            err.attempts(),
            session.fleet()
        ),
    }
    Ok(())
}

/// Validator for arguments that must be a number greater than zero.
fn positive(value: String) -> Result<(), String> {
    match value.parse::<usize>() {
        Ok(0) => Err("must be greater than zero".to_owned()),
        Ok(_) => Ok(()),
        Err(err) => Err(err.to_string()),
    }
}

/// Log to the terminal at the level picked by `-v`, and to a file at trace level if
/// one was requested.
fn init_log(matches: &ArgMatches) -> anyhow::Result<()> {
    let level = match matches.occurrences_of("verbose") {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_level_padding(LevelPadding::Right)
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        config.clone(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];
    if let Some(path) = matches.value_of("log_file") {
        let file =
            File::create(path).with_context(|| format!("failed to create log file {}", path))?;
        loggers.push(WriteLogger::new(LevelFilter::Trace, config, file));
    }
    CombinedLogger::init(loggers).context("failed to initialize logging")?;
    Ok(())
}
