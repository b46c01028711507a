//! Play uniformly random legal moves from the starting position.
//!
//! usage: random_game [-v] [--seed N] [--max-plies N]

use std::env;
use std::process::ExitCode;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use chess_movegen::board::{Board, BoardError, GameState};
use chess_movegen::logging;

const DEFAULT_MAX_PLIES: usize = 400;

fn flag_value(args: &[String], name: &str) -> Result<Option<u64>, String> {
    match args.iter().position(|a| a == name) {
        None => Ok(None),
        Some(idx) => args
            .get(idx + 1)
            .ok_or_else(|| format!("{name} needs a value"))?
            .parse()
            .map(Some)
            .map_err(|_| format!("{name} expects a number")),
    }
}

/// Play up to `max_plies` random legal moves, printing each one. The final
/// position is always classified, so a mate on the last ply is reported.
fn play(board: &mut Board, rng: &mut impl Rng, max_plies: usize) -> Result<GameState, BoardError> {
    for ply in 0..max_plies {
        let moves = board.generate_moves()?;
        if moves.is_empty() || board.game_state().is_terminal() {
            return Ok(board.game_state());
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        println!("{:>3}. {} {mv}", ply / 2 + 1, mv.color);
        board.apply_move(mv);
    }
    board.generate_moves()?;
    Ok(board.game_state())
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let args = logging::init_from_env(&args);

    let (seed, max_plies) = match (flag_value(&args, "--seed"), flag_value(&args, "--max-plies")) {
        (Ok(seed), Ok(plies)) => (seed, plies.map_or(DEFAULT_MAX_PLIES, |p| p as usize)),
        (Err(err), _) | (_, Err(err)) => {
            eprintln!("usage: random_game [-v] [--seed N] [--max-plies N]: {err}");
            return ExitCode::FAILURE;
        }
    };
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut board = Board::new();
    let state = match play(&mut board, &mut rng, max_plies) {
        Ok(state) => state,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("{board}");
    println!("{}", board.to_fen());
    println!("result: {state}");
    ExitCode::SUCCESS
}
