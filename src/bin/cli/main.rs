mod generate;
mod play;

use clap::{App, AppSettings, Arg, SubCommand};
use maze_game::generation::GeneratorConfig;
use maze_game::MazeResult;
use std::io;
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(error) = run() {
        eprintln!("error: {}", error);
        process::exit(1);
    }
}

fn run() -> MazeResult<()> {
    let matches = App::new("Maze Game")
        .subcommand(
            SubCommand::with_name("play")
                .about("Play a maze from a file, reading moves from stdin")
                .arg(
                    Arg::with_name("file")
                        .help("The maze file to play")
                        .short("f")
                        .long("file")
                        .default_value("maze.txt")
                        .takes_value(true),
                ),
        )
        .subcommand(
            SubCommand::with_name("generate")
                .about("Generate a random solvable maze file")
                .arg(
                    Arg::with_name("out")
                        .help("The file to write the maze to")
                        .short("o")
                        .long("out")
                        .default_value("maze.txt")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("seed")
                        .help("Seed for a reproducible maze")
                        .long("seed")
                        .takes_value(true)
                        .validator(|seed| {
                            seed.parse::<u64>()
                                .map(|_| ())
                                .map_err(|error| error.to_string())
                        }),
                )
                .arg(
                    Arg::with_name("solution")
                        .help("Also write the winning moves to this file")
                        .long("solution")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("goal-off-start-axes")
                        .help("Keep the goal off the start's row and column")
                        .long("goal-off-start-axes"),
                ),
        )
        .setting(AppSettings::ArgRequiredElseHelp)
        .get_matches();

    match matches.subcommand() {
        ("play", Some(matches)) => {
            let file = matches.value_of("file").unwrap_or("maze.txt");

            play::run(Path::new(file))
        }
        ("generate", Some(matches)) => {
            let out = matches.value_of("out").unwrap_or("maze.txt");
            let seed = matches
                .value_of("seed")
                .and_then(|seed| seed.parse().ok());
            let config = GeneratorConfig {
                goal_off_start_axes: matches.is_present("goal-off-start-axes"),
                ..GeneratorConfig::default()
            };

            generate::run(
                Path::new(out),
                seed,
                matches.value_of("solution").map(Path::new),
                config,
            )
        }
        _ => Ok(()),
    }
}
