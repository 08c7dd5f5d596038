//! Rollerball command-line front-end.
//!
//! `play` runs a human-vs-engine game in the terminal; `selfplay`, `bestmove`
//! and `perft` are diagnostics.

use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use rollerball::engines::engine_minimax::MinimaxEngine;
use rollerball::engines::engine_random::RandomEngine;
use rollerball::engines::engine_trait::Engine;
use rollerball::errors::CommandError;
use rollerball::game_state::board::Board;
use rollerball::game_state::chess_rules::{DEFAULT_SEARCH_DEPTH, STARTING_LAYOUT};
use rollerball::game_state::chess_types::{Color, Square};
use rollerball::move_generation::perft::{perft, perft_divide};
use rollerball::search::minimax::Searcher;
use rollerball::session::game_session::{GameSession, SessionEvent, SessionUpdate};
use rollerball::utils::engine_match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};
use rollerball::utils::layout::{generate_layout, parse_layout};
use rollerball::utils::render_board::{render_board, render_board_with_marks};

#[derive(Parser, Debug)]
#[command(name = "rollerball", version, about = "Rollerball chess on a 7x7 cylinder")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play against the engine in the terminal.
    Play {
        #[arg(long, default_value_t = DEFAULT_SEARCH_DEPTH)]
        depth: u8,
        #[arg(long, value_enum, default_value_t = Side::White)]
        human: Side,
        #[arg(long)]
        layout: Option<String>,
    },
    /// Engine-vs-engine series.
    Selfplay {
        #[arg(long, default_value_t = 4)]
        games: u16,
        #[arg(long, default_value_t = 1234)]
        seed: u64,
        #[arg(long, default_value_t = 2)]
        depth: u8,
        #[arg(long, default_value_t = 200)]
        max_plies: u16,
        #[arg(long, value_enum, default_value_t = Opponent::Random)]
        opponent: Opponent,
        #[arg(long, short)]
        verbose: bool,
    },
    /// Print the engine's choice for a position.
    Bestmove {
        #[arg(long, default_value = STARTING_LAYOUT)]
        layout: String,
        #[arg(long, default_value_t = DEFAULT_SEARCH_DEPTH)]
        depth: u8,
    },
    /// Count legal-move-tree nodes.
    Perft {
        #[arg(long, default_value = STARTING_LAYOUT)]
        layout: String,
        #[arg(long, default_value_t = 3)]
        depth: u8,
        /// Print per-move subtotals.
        #[arg(long)]
        divide: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Side {
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Opponent {
    Minimax,
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TerminalCommand {
    Click(Square),
    Restart,
    Help,
    Quit,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match Cli::parse().command {
        Command::Play {
            depth,
            human,
            layout,
        } => {
            let board = match layout {
                Some(text) => {
                    let mut board = parse_layout(&text)?;
                    board.refresh_terminal_state();
                    board
                }
                None => Board::new(),
            };
            let session =
                GameSession::from_board(board, human.into(), Box::new(MinimaxEngine::new(depth)));
            run_terminal_game(session)?;
        }
        Command::Selfplay {
            games,
            seed,
            depth,
            max_plies,
            opponent,
            verbose,
        } => {
            let player1 = move || Box::new(MinimaxEngine::new(depth)) as Box<dyn Engine>;
            let player2 = move || match opponent {
                Opponent::Minimax => Box::new(MinimaxEngine::new(depth)) as Box<dyn Engine>,
                Opponent::Random => Box::new(RandomEngine::new()) as Box<dyn Engine>,
            };
            let stats = play_engine_match_series(
                player1,
                player2,
                MatchSeriesConfig {
                    games,
                    base_seed: seed,
                    per_game: MatchConfig {
                        max_plies,
                        ..MatchConfig::default()
                    },
                    verbose,
                },
            )?;
            println!("{}", stats.report());
            println!("outcomes: {:?}", stats.outcomes);
        }
        Command::Bestmove { layout, depth } => {
            let board = parse_layout(&layout)?;
            let result = Searcher::new(depth).search(&board);
            print!("{}", render_board(&board));
            println!("layout {}", generate_layout(&board));
            match result.best_move {
                Some(mv) => println!(
                    "bestmove {mv} score {:.1} nodes {}",
                    result.best_score, result.nodes
                ),
                None => println!("bestmove none"),
            }
        }
        Command::Perft {
            layout,
            depth,
            divide,
        } => {
            let board = parse_layout(&layout)?;
            if divide {
                for (mv, nodes) in perft_divide(&board, depth) {
                    println!("{mv}: {nodes}");
                }
            }
            let counts = perft(&board, depth);
            println!(
                "depth {depth} nodes {} captures {} promotions {} checks {} checkmates {}",
                counts.nodes, counts.captures, counts.promotions, counts.checks, counts.checkmates
            );
        }
    }

    Ok(())
}

fn run_terminal_game(mut session: GameSession) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();

    println!(
        "You play {} against {}. Type 'help' for commands.",
        session.human_color(),
        session.engine_name()
    );

    loop {
        print!("{}", render_board_with_marks(session.board(), session.targets()));

        if session.board().is_game_over() {
            match session.board().winner() {
                Some(winner) => println!("Game over: {winner}"),
                None => println!("Game over"),
            }
            println!("Type 'restart' to play again or 'quit' to leave.");
        } else if session.is_engine_turn() {
            println!("Engine is thinking...");
            let update = session.handle_event(SessionEvent::EngineTurn)?;
            report(&update);
            continue;
        } else {
            println!("{} to move", session.board().side_to_move());
        }

        print!("> ");
        stdout.flush()?;
        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        let event = match command {
            TerminalCommand::Quit => return Ok(()),
            TerminalCommand::Help => {
                print_help();
                continue;
            }
            TerminalCommand::Restart => SessionEvent::Restart,
            TerminalCommand::Click(square) => SessionEvent::SquareClicked(square),
        };
        let update = session.handle_event(event)?;
        report(&update);
    }
}

fn report(update: &SessionUpdate) {
    match update {
        SessionUpdate::Selected { square, targets } => {
            let list: Vec<String> = targets.iter().map(ToString::to_string).collect();
            println!("Selected {square}; targets: {}", list.join(" "));
        }
        SessionUpdate::SelectionCleared => println!("Selection cleared"),
        SessionUpdate::Moved { mv, .. } => println!("You moved {mv}"),
        SessionUpdate::IllegalMove(mv) => println!("Illegal move {mv}. Please try again."),
        SessionUpdate::EngineMoved { mv, .. } => println!("Engine moved {mv}"),
        SessionUpdate::EngineHasNoMove { .. } => println!("Engine has no legal moves"),
        SessionUpdate::NotHumanTurn | SessionUpdate::NotEngineTurn => {}
        SessionUpdate::GameAlreadyOver(_) => println!("The game is over"),
        SessionUpdate::Restarted => println!("New game"),
    }
}

fn print_help() {
    println!("  <row> <col>   select a piece, then its destination (e.g. '5 3' then '4 3')");
    println!("  restart       start over");
    println!("  quit          leave");
}

fn parse_command(line: &str) -> Result<TerminalCommand, CommandError> {
    let trimmed = line.trim();
    let mut parts = trimmed.split_whitespace();
    let first = parts.next().ok_or(CommandError::Empty)?;

    match first {
        "quit" | "q" | "exit" => return Ok(TerminalCommand::Quit),
        "restart" => return Ok(TerminalCommand::Restart),
        "help" | "h" | "?" => return Ok(TerminalCommand::Help),
        _ => {}
    }

    if !first.starts_with(|c: char| c.is_ascii_digit() || c == '-') {
        return Err(CommandError::Unknown(first.to_owned()));
    }

    let invalid = || CommandError::InvalidSquare(trimmed.to_owned());
    let row: i32 = first.parse().map_err(|_| invalid())?;
    let col: i32 = parts
        .next()
        .ok_or_else(invalid)?
        .parse()
        .map_err(|_| invalid())?;
    if parts.next().is_some() || !(0..7).contains(&row) {
        return Err(invalid());
    }
    Ok(TerminalCommand::Click(Square::new(row, col)))
}
