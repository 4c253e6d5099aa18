use std::cmp::max;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};

use plum_rules::game_api::{attempt_move, new_game, query_game_end, GameEndStatus};
use plum_rules::game_state::game_state::GameState;
use plum_rules::move_generation::legal_move_checks::is_in_check;
use plum_rules::move_generation::legal_move_filter::generate_legal_moves;
use plum_rules::utils::algebraic::parse_square;
use plum_rules::utils::long_algebraic::parse_move_command;
use plum_rules::utils::pgn::write_pgn;
use plum_rules::utils::render_game_state::{render_to_string, RenderStyle};

/// Two-player console chess: type moves like "e2 e4".
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Start from this FEN position instead of the standard opening.
    #[arg(long)]
    fen: Option<String>,

    /// Draw pieces with Unicode chess glyphs.
    #[arg(long, default_value_t = false)]
    unicode: bool,

    /// Write the game as PGN to this file when it ends or on `quit`.
    #[arg(long)]
    pgn_out: Option<PathBuf>,

    /// Enable debug logging with timestamps.
    #[arg(long, default_value_t = false)]
    debug: bool,

    /// Minimum log level.
    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,

    /// Disable colored log output.
    #[arg(long, default_value_t = false)]
    no_colors: bool,
}

fn init_logging(cli: &Cli) -> Result<(), log::SetLoggerError> {
    let log_level = if cli.debug {
        max(LevelFilter::Debug, cli.log_level)
    } else {
        cli.log_level
    };

    let mut config_builder = simplelog::ConfigBuilder::new();
    if cli.debug {
        config_builder.set_time_level(LevelFilter::Error);
        config_builder.set_target_level(LevelFilter::Error);
    } else {
        config_builder.set_time_level(LevelFilter::Off);
        config_builder.set_target_level(LevelFilter::Off);
    }
    config_builder.set_thread_level(LevelFilter::Off);
    config_builder.set_location_level(LevelFilter::Off);

    let color_choice = if cli.no_colors {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };

    TermLogger::init(
        log_level,
        config_builder.build(),
        TerminalMode::Stderr,
        color_choice,
    )
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_logging(&cli) {
        eprintln!("could not start logging: {err}");
        return ExitCode::FAILURE;
    }
    log::debug!("Parsed arguments: {cli:?}");

    let initial = match &cli.fen {
        Some(fen) => match GameState::from_fen(fen) {
            Ok(state) => state,
            Err(err) => {
                log::error!("bad --fen: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => new_game(),
    };

    let style = if cli.unicode {
        RenderStyle::Unicode
    } else {
        RenderStyle::Ascii
    };

    let (final_state, status) = play(&initial, style);

    if let Some(path) = &cli.pgn_out {
        match write_pgn(&initial, final_state.move_log(), status) {
            Ok(pgn) => {
                if let Err(err) = fs::write(path, pgn) {
                    log::error!("could not write {}: {err}", path.display());
                    return ExitCode::FAILURE;
                }
                log::info!("wrote PGN to {}", path.display());
            }
            Err(err) => {
                log::error!("could not export PGN: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

/// Read-eval loop until the game ends, `quit` is typed, or stdin closes.
fn play(initial: &GameState, style: RenderStyle) -> (GameState, GameEndStatus) {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut state = initial.clone();

    let mut status = query_game_end(&state);
    loop {
        println!("{}", render_to_string(&state, style));
        if status.is_over() {
            println!("{status}");
            return (state, status);
        }

        let side = state.side_to_move();
        if is_in_check(side, &state) {
            println!("{side} is in check.");
        }
        print!("{side} to move (e.g. 'e2 e4', 'moves e2', 'fen', 'history', 'quit'): ");
        io::stdout().flush().ok();

        let Some(Ok(line)) = lines.next() else {
            return (state, status);
        };
        let line = line.trim();

        match line.split_whitespace().collect::<Vec<_>>().as_slice() {
            ["quit"] | ["exit"] => return (state, status),
            ["fen"] => {
                println!("{}", state.get_fen());
                continue;
            }
            ["history"] => {
                let history: Vec<String> = state.move_log().iter().map(|m| m.to_string()).collect();
                println!("{}", history.join(" "));
                continue;
            }
            ["moves", square] => {
                match parse_square(square) {
                    Ok(square) => {
                        let targets: Vec<String> = generate_legal_moves(square, &state)
                            .iter()
                            .map(|t| t.to_string())
                            .collect();
                        println!("{square}: {}", targets.join(" "));
                    }
                    Err(err) => println!("{err}"),
                }
                continue;
            }
            _ => {}
        }

        let (from, to) = match parse_move_command(line) {
            Ok(parts) => parts,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        match attempt_move(&state, &from, &to) {
            Ok(next) => {
                state = next;
                status = query_game_end(&state);
            }
            Err(err) => println!("Invalid move, try again: {err}"),
        }
    }
}
