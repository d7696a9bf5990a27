use std::io::{self, BufRead, Write};

use clap::Parser;
use rand::Rng;
use serde::Serialize;

use oxo::{best_move, make_move, rng_for_game, GameState, Player, Status};

#[derive(Debug, Parser)]
#[command(name = "play", about = "Play tic-tac-toe against the exhaustive minimax engine")]
struct Args {
    /// Run N non-interactive games (seeded random human vs. engine) and print
    /// one JSON summary line per game instead of playing interactively
    #[arg(long)]
    demo: Option<u64>,

    /// Seed for the demo mode's random human player (deterministic)
    #[arg(long, default_value_t = 0x00C0_FFEE_u64)]
    seed: u64,
}

#[derive(Debug, Serialize)]
struct DemoSummary {
    game: u64,
    plies: u8,
    outcome: Status,
}

fn print_board(state: &GameState) {
    println!("    0   1   2");
    for r in 0..3u8 {
        print!("{r} ");
        for c in 0..3u8 {
            let mark = match state.board.get(r * 3 + c) {
                Some(p) => p.as_char(),
                None => ' ',
            };
            print!("| {mark} ");
        }
        println!("|");
    }
}

/// Prompt until the line parses as `row col`; returns None on EOF or quit.
fn read_move(input: &mut impl BufRead) -> io::Result<Option<(i8, i8)>> {
    let mut line = String::new();
    loop {
        print!("Your move (row col, or q to quit): ");
        io::stdout().flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
            return Ok(None);
        }
        let mut parts = trimmed.split_whitespace();
        let parsed = match (parts.next(), parts.next(), parts.next()) {
            (Some(r), Some(c), None) => r.parse::<i8>().ok().zip(c.parse::<i8>().ok()),
            _ => None,
        };
        match parsed {
            Some(mv) => return Ok(Some(mv)),
            None => println!("Expected two numbers in 0..=2, e.g. '1 1'."),
        }
    }
}

fn announce(state: &GameState) {
    match state.status() {
        Status::Won(p) if p == state.human => println!("You win!"),
        Status::Won(_) => println!("Computer wins."),
        Status::Drawn => println!("Draw."),
        Status::InProgress => {}
    }
}

fn play_interactive() -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut state = GameState::new();

    println!("You are X and move first.");
    loop {
        print_board(&state);
        if state.game_over {
            announce(&state);
            print!("Play again? (y/n): ");
            io::stdout().flush()?;
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 || !line.trim().eq_ignore_ascii_case("y") {
                return Ok(());
            }
            state.reset();
            continue;
        }

        if state.current_player == state.human {
            let Some((row, col)) = read_move(&mut input)? else {
                return Ok(());
            };
            if !make_move(&mut state, row, col) {
                println!("That cell is not available.");
            }
        } else {
            // Board is not full while the game is in progress, so a move exists.
            if let Some(mv) = best_move(&state) {
                make_move(&mut state, mv.row as i8, mv.col as i8);
                println!("Computer plays ({}, {}).", mv.row, mv.col);
            }
        }
    }
}

fn run_demo(games: u64, seed: u64) -> Result<(), Box<dyn std::error::Error>> {
    let mut computer_losses = 0u64;
    let mut draws = 0u64;

    for game_id in 0..games {
        let mut rng = rng_for_game(seed, game_id);
        let mut state = GameState::new();
        let mut plies = 0u8;

        while !state.game_over {
            if state.current_player == state.human {
                let moves = state.available_moves();
                let mv = moves[rng.gen_range(0..moves.len())];
                make_move(&mut state, mv.row as i8, mv.col as i8);
            } else if let Some(mv) = best_move(&state) {
                make_move(&mut state, mv.row as i8, mv.col as i8);
            }
            plies += 1;
        }

        let outcome = state.status();
        match outcome {
            Status::Won(p) if p == Player::X => computer_losses += 1,
            Status::Drawn => draws += 1,
            _ => {}
        }
        println!(
            "{}",
            serde_json::to_string(&DemoSummary {
                game: game_id,
                plies,
                outcome,
            })?
        );
    }

    println!(
        "[demo] {} games: {} computer wins, {} draws, {} computer losses.",
        games,
        games - draws - computer_losses,
        draws,
        computer_losses
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    match args.demo {
        Some(games) => run_demo(games, args.seed),
        None => Ok(play_interactive()?),
    }
}
