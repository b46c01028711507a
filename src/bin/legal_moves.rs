//! Print the legal moves of one piece from a piece-list position.
//!
//! usage: legal_moves [-v] "WHITE: Rf1, Kg1 BLACK: Kb8 PIECE TO MOVE: Rf1"
//!
//! With no positional argument, every non-empty stdin line is a position.

use std::env;
use std::io::{self, BufRead};
use std::process::ExitCode;

use chess_movegen::board::parse_piece_list;
use chess_movegen::logging;

fn report(line: &str) -> bool {
    let mut setup = match parse_piece_list(line) {
        Ok(setup) => setup,
        Err(err) => {
            eprintln!("error: {err}");
            return false;
        }
    };
    match setup.legal_moves_line() {
        Ok(text) => {
            println!("{text}");
            true
        }
        Err(err) => {
            eprintln!("error: {err}");
            false
        }
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let args = logging::init_from_env(&args);

    let mut ok = true;
    if args.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    eprintln!("error: {err}");
                    return ExitCode::FAILURE;
                }
            };
            if !line.trim().is_empty() {
                ok &= report(&line);
            }
        }
    } else {
        ok = report(&args.join(" "));
    }

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
