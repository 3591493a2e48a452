//! Terminal frontend for two-player Othello.
//!
//! All game state lives in [`cassio_othello::Game`]; this binary only
//! renders the board, collects moves, and reports the result.

use cassio_othello::{Game, Location, MoveError, Outcome};
use itertools::Itertools;
use std::io::{self, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    print_banner();
    println!("\nEnter the player names to begin.\n");

    let black = prompt_name("Player 1 (X): ")?;
    let white = prompt_name("Player 2 (O): ")?;
    debug!(%black, %white, "starting game");

    let mut game = Game::new(&black, &white);
    play(&mut game)
}

fn print_banner() {
    let star_line = "*".repeat(65);
    println!("{}", star_line);
    println!("***{:^59}***", "WELCOME TO THE FABULOUS GAME OF OTHELLO!");
    println!("{}", star_line);
}

/// Drive the move-input loop until the game ends, then announce the result.
fn play(game: &mut Game) -> io::Result<()> {
    while !game.is_finished() {
        println!("\n{}", game.board());

        let player = game.current_player();
        let prompt = format!(
            "{} ({}) moves to: ",
            game.player_name(player),
            player.symbol()
        );

        let loc: Location = match prompt_line(&prompt)?.parse() {
            Ok(loc) => loc,
            Err(_) => {
                println!("Cannot parse move. Positions look like c4.");
                continue;
            }
        };

        match game.submit_move(loc) {
            Ok(outcome) => {
                if !game.is_finished() {
                    for skipped in &outcome.passed {
                        println!(
                            "No valid moves for {} ({}), skipping",
                            game.player_name(*skipped),
                            skipped.symbol()
                        );
                    }
                }
            }
            Err(MoveError::IllegalMove) => {
                println!(
                    "Invalid move. Legal moves: {}",
                    game.legal_moves().iter().join(", ")
                );
            }
            Err(MoveError::GameOver) => break,
        }
    }

    println!("\n{}", game.board());
    announce_result(game);
    Ok(())
}

fn announce_result(game: &Game) {
    let counts = game.score();
    match game.outcome() {
        Some(Outcome::Draw) => println!("Draw. Friendship wins!"),
        Some(Outcome::Win(winner)) => {
            let margin = (counts.black as i16 - counts.white as i16).abs();
            println!(
                "{} ({}) wins with a score of {}",
                game.player_name(winner),
                winner.symbol(),
                margin
            );
        }
        None => {}
    }
}

/// Print `prompt` and read one trimmed line from stdin.
fn prompt_line(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
    }
    Ok(line.trim().to_string())
}

/// Keep prompting until a non-empty name comes back.
fn prompt_name(prompt: &str) -> io::Result<String> {
    loop {
        let name = prompt_line(prompt)?;
        if !name.is_empty() {
            return Ok(name);
        }
    }
}
