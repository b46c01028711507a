//! Apply coordinate moves from the starting position and report the result.
//!
//! usage: game_status [-v] <move1> <move2> ...

use std::env;
use std::process::ExitCode;

use chess_movegen::board::Board;
use chess_movegen::logging;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let args = logging::init_from_env(&args);
    if args.is_empty() {
        eprintln!("usage: game_status [-v] <move1> <move2> ...");
        return ExitCode::FAILURE;
    }

    let mut board = Board::new();
    for notation in &args {
        match board.parse_move(board.side_to_move(), notation) {
            Ok(mv) => board.apply_move(mv),
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    let side = board.side_to_move();
    let (legal_moves, in_check) = match (board.legal_moves(side), board.is_in_check(side)) {
        (Ok(moves), Ok(check)) => (moves, check),
        (Err(err), _) | (_, Err(err)) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("side_to_move: {}", side.to_string().to_lowercase());
    println!("legal_moves: {}", legal_moves.len());
    println!("check: {in_check}");
    println!("state: {}", board.game_state());
    for mv in legal_moves.iter() {
        println!("{mv}");
    }
    ExitCode::SUCCESS
}
