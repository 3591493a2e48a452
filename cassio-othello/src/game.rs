//! The game session: turn order, pass handling, and termination.

use crate::rules;
use crate::{Board, CellState, DiscCounts, Location};
use derive_more::{Display, Error};
use std::cmp::Ordering;
use std::fmt;
use tracing::debug;

/// One of the two players in a game. Black moves first and plays `X`;
/// White plays `O`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Player {
    Black,
    White,
}

impl Default for Player {
    /// Gets the starting player (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl Player {
    /// The cell state written by this player's discs.
    #[inline]
    pub fn cell(self) -> CellState {
        match self {
            Player::Black => CellState::Black,
            Player::White => CellState::White,
        }
    }

    /// The board symbol for this player's discs.
    #[inline]
    pub fn symbol(self) -> char {
        self.cell().symbol()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Player::Black => "Black",
            Player::White => "White",
        })
    }
}

/// Why a submitted move was rejected.
#[derive(Debug, PartialEq, Error, Display)]
pub enum MoveError {
    /// The move violates the capture rule for the player to move.
    #[display(fmt = "move is not legal for the player to move")]
    IllegalMove,
    /// The game already reached a terminal state.
    #[display(fmt = "the game is already over")]
    GameOver,
}

impl From<rules::IllegalMoveError> for MoveError {
    fn from(_: rules::IllegalMoveError) -> Self {
        MoveError::IllegalMove
    }
}

/// The result of a finished game.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    Win(Player),
    Draw,
}

/// What happened while processing one submitted move: how many discs were
/// flipped, and which players had to be skipped before the next prompt.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MoveOutcome {
    pub flipped: usize,
    pub passed: Vec<Player>,
}

/// A complete two-player game: the board, the player to move, and the pass
/// bookkeeping that decides termination.
///
/// The board is owned exclusively by the session. Every mutation goes
/// through [`Game::submit_move`]; frontends read state and render it.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    to_move: Player,
    consecutive_passes: u8,
    names: [String; 2],
}

impl Default for Game {
    fn default() -> Self {
        Self::new("Black", "White")
    }
}

impl Game {
    /// Start a fresh game on the standard opening position. Black moves
    /// first.
    pub fn new(black_name: &str, white_name: &str) -> Self {
        let mut game = Self::from_position(Board::new(), Player::Black);
        game.names = [black_name.to_string(), white_name.to_string()];
        game
    }

    /// Start from an arbitrary position, e.g. for tests or analysis.
    pub fn from_position(board: Board, to_move: Player) -> Self {
        Self {
            board,
            to_move,
            consecutive_passes: 0,
            names: [String::from("Black"), String::from("White")],
        }
    }

    /// Read access to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.to_move
    }

    /// The display name of `player`.
    pub fn player_name(&self, player: Player) -> &str {
        match player {
            Player::Black => &self.names[0],
            Player::White => &self.names[1],
        }
    }

    /// The current disc counts.
    pub fn score(&self) -> DiscCounts {
        self.board.count_discs()
    }

    /// The legal moves for the player to move, in row-major order.
    pub fn legal_moves(&self) -> Vec<Location> {
        rules::legal_moves(&self.board, self.to_move)
    }

    /// Returns whether the game reached a terminal state: a full board, or
    /// both players passing in a row.
    pub fn is_finished(&self) -> bool {
        self.consecutive_passes >= 2 || self.board.is_full()
    }

    /// Apply a move for the player to move.
    ///
    /// On success the turn passes to the opponent; a player left without a
    /// legal move is skipped without prompting, and two consecutive skips
    /// end the game. The returned [`MoveOutcome`] reports the flip count
    /// and any skipped players so a frontend can announce them.
    pub fn submit_move(&mut self, loc: Location) -> Result<MoveOutcome, MoveError> {
        if self.is_finished() {
            return Err(MoveError::GameOver);
        }

        let mover = self.to_move;
        let flipped = rules::apply_move(&mut self.board, mover, loc)?;
        debug!(player = %mover, location = %loc, flipped, "applied move");

        self.consecutive_passes = 0;
        self.to_move = !mover;

        let mut passed = Vec::new();
        while !self.board.is_full() && self.legal_moves().is_empty() {
            self.consecutive_passes += 1;
            passed.push(self.to_move);
            debug!(player = %self.to_move, "no legal moves, auto-passing");
            if self.consecutive_passes >= 2 {
                break;
            }
            self.to_move = !self.to_move;
        }

        if self.is_finished() {
            debug!(counts = ?self.score(), "game over");
        }

        Ok(MoveOutcome { flipped, passed })
    }

    /// The final result, or `None` while the game is still in progress.
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.is_finished() {
            return None;
        }

        let counts = self.score();
        match counts.black.cmp(&counts.white) {
            Ordering::Greater => Some(Outcome::Win(Player::Black)),
            Ordering::Less => Some(Outcome::Win(Player::White)),
            Ordering::Equal => Some(Outcome::Draw),
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(
            f,
            "{} ({}) to move",
            self.player_name(self.to_move),
            self.to_move.symbol()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(row: usize, col: usize) -> Location {
        Location::new(row, col).unwrap()
    }

    #[test]
    fn fresh_game() {
        let game = Game::new("Ada", "Bea");
        assert_eq!(game.current_player(), Player::Black);
        assert_eq!(game.player_name(Player::Black), "Ada");
        assert_eq!(game.player_name(Player::White), "Bea");
        assert!(!game.is_finished());
        assert_eq!(game.outcome(), None);
        assert_eq!(
            game.legal_moves(),
            [loc(2, 3), loc(3, 2), loc(4, 5), loc(5, 4)]
        );
    }

    #[test]
    fn turn_passes_to_the_opponent() {
        let mut game = Game::default();
        let outcome = game.submit_move(loc(2, 3)).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome {
                flipped: 1,
                passed: vec![]
            }
        );
        assert_eq!(game.current_player(), Player::White);
    }

    #[test]
    fn illegal_and_occupied_moves_are_rejected() {
        let mut game = Game::default();
        let before = *game.board();
        assert_eq!(game.submit_move(loc(0, 0)), Err(MoveError::IllegalMove));
        assert_eq!(game.submit_move(loc(3, 3)), Err(MoveError::IllegalMove));
        assert_eq!(game.board(), &before);
        assert_eq!(game.current_player(), Player::Black);
    }

    #[test]
    fn one_player_is_skipped_while_the_other_can_move() {
        // Top row: X O _ X X, with a second white disc at b2. After Black
        // plays c1, White has no reply but Black still does.
        let mut board = Board::empty();
        board.set_cell(loc(0, 0), CellState::Black);
        board.set_cell(loc(0, 1), CellState::White);
        board.set_cell(loc(0, 3), CellState::Black);
        board.set_cell(loc(0, 4), CellState::Black);
        board.set_cell(loc(1, 1), CellState::White);

        let mut game = Game::from_position(board, Player::Black);
        let outcome = game.submit_move(loc(0, 2)).unwrap();

        assert_eq!(outcome.passed, [Player::White]);
        assert!(!game.is_finished());
        assert_eq!(game.current_player(), Player::Black);
        assert!(!game.legal_moves().is_empty());
    }

    #[test]
    fn wipeout_ends_the_game_by_double_pass() {
        let mut board = Board::empty();
        board.set_cell(loc(0, 0), CellState::Black);
        board.set_cell(loc(0, 1), CellState::White);

        let mut game = Game::from_position(board, Player::Black);
        let outcome = game.submit_move(loc(0, 2)).unwrap();

        assert_eq!(outcome.passed, [Player::White, Player::Black]);
        assert!(game.is_finished());
        assert_eq!(game.outcome(), Some(Outcome::Win(Player::Black)));
        assert_eq!(game.score().white, 0);
    }

    #[test]
    fn moves_after_the_end_are_rejected() {
        let mut board = Board::empty();
        board.set_cell(loc(0, 0), CellState::Black);
        board.set_cell(loc(0, 1), CellState::White);

        let mut game = Game::from_position(board, Player::Black);
        game.submit_move(loc(0, 2)).unwrap();
        assert_eq!(game.submit_move(loc(5, 5)), Err(MoveError::GameOver));
    }

    #[test]
    fn filling_the_board_ends_the_game() {
        // Everything black except an empty a1 and a white b1.
        let mut board = Board::empty();
        for location in Location::all() {
            board.set_cell(location, CellState::Black);
        }
        board.set_cell(loc(0, 0), CellState::Empty);
        board.set_cell(loc(0, 1), CellState::White);

        let mut game = Game::from_position(board, Player::Black);
        let outcome = game.submit_move(loc(0, 0)).unwrap();

        assert_eq!(outcome.flipped, 1);
        assert!(outcome.passed.is_empty());
        assert!(game.is_finished());
        assert_eq!(game.outcome(), Some(Outcome::Win(Player::Black)));
        assert_eq!(game.score().black, 64);
    }

    #[test]
    fn equal_counts_draw() {
        // Top half black, bottom half white: full board, 32 discs each.
        let mut board = Board::empty();
        for location in Location::all() {
            let state = if location.row() < 4 {
                CellState::Black
            } else {
                CellState::White
            };
            board.set_cell(location, state);
        }

        let game = Game::from_position(board, Player::Black);
        assert!(game.is_finished());
        assert_eq!(game.outcome(), Some(Outcome::Draw));
    }
}
