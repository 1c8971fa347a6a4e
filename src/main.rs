//! Two-player terminal driver over the rules engine.
//!
//! Presentation only: square selection, board drawing, and status text live
//! here, never in the engine. Commands, one per line:
//!
//! - `e2e4`      make a move
//! - `moves e2`  list legal destinations from a square
//! - `reset`     start a fresh game
//! - `quit`      exit

use std::io::{self, BufRead, Write};

use parlor_chess::game_state::chess_types::Position;
use parlor_chess::game_state::game_engine::GameEngine;
use parlor_chess::game_state::game_state::GameState;
use parlor_chess::utils::algebraic::{algebraic_to_position, position_to_algebraic};
use parlor_chess::utils::render_game_state::render_board;

fn main() {
    env_logger::init();

    let mut engine = GameEngine::new();
    print_board(&engine);

    let stdin = io::stdin();
    let mut input = String::new();

    loop {
        print!("> ");
        io::stdout().flush().ok();

        input.clear();
        let Ok(n) = stdin.lock().read_line(&mut input) else {
            break;
        };
        if n == 0 {
            break;
        }

        let line = input.trim();
        if line.is_empty() {
            continue;
        }

        match line {
            "quit" | "exit" => break,
            "reset" => {
                engine.reset();
                print_board(&engine);
            }
            _ => match line.strip_prefix("moves ") {
                Some(square) => show_moves(&engine, square.trim()),
                None => try_move(&mut engine, line),
            },
        }
    }
}

fn try_move(engine: &mut GameEngine, line: &str) {
    let (from, to) = match parse_move_line(line) {
        Ok(squares) => squares,
        Err(message) => {
            println!("{message}");
            return;
        }
    };

    match engine.make_move(from, to) {
        Ok(()) => print_board(engine),
        Err(err) => println!("{err}"),
    }
}

/// Parse a move line like `e2e4` into its two squares.
///
/// The length check alone is not enough to split the line: a 4-byte line may
/// hold multibyte characters, and splitting inside one would panic. Any
/// non-ASCII line is malformed anyway, so it is rejected up front and every
/// bad input comes back as a printable message.
fn parse_move_line(line: &str) -> Result<(Position, Position), String> {
    if line.len() != 4 || !line.is_ascii() {
        return Err("expected a move like e2e4, or: moves <square>, reset, quit".to_string());
    }

    let (from, to) = line.split_at(2);
    Ok((algebraic_to_position(from)?, algebraic_to_position(to)?))
}

fn show_moves(engine: &GameEngine, square: &str) {
    match algebraic_to_position(square) {
        Ok(position) => {
            let moves = engine.valid_moves(position);
            if moves.is_empty() {
                println!("no legal moves from {square}");
            } else {
                let names: Vec<String> = moves.into_iter().map(position_to_algebraic).collect();
                println!("{}", names.join(" "));
            }
        }
        Err(message) => println!("{message}"),
    }
}

fn print_board(engine: &GameEngine) {
    println!("{}", render_board(engine.board()));
    println!("{}", status_line(&engine.game_state()));
}

fn status_line(state: &GameState) -> String {
    if state.is_checkmate {
        format!(
            "checkmate, {} wins",
            state.current_player.opposite()
        )
    } else if state.is_stalemate {
        "stalemate, draw".to_string()
    } else if state.is_in_check {
        format!("{} to move, in check", state.current_player)
    } else {
        format!("{} to move", state.current_player)
    }
}
