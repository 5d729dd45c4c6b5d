//! Two-player Tic-Tac-Toe on a 3x3 board.
//!
//! Cells are indexed 0..9 row-major. X moves first.

use serde::{Deserialize, Serialize};

use crate::core::error::{GameError, Result};
use crate::core::player::PlayerId;
use crate::rules::{GameResult, RulesEngine};

pub const CELLS: usize = 9;

/// Every winning line: rows, columns, diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    #[must_use]
    pub fn other(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Seat playing this mark.
    #[must_use]
    pub fn player(self) -> PlayerId {
        match self {
            Mark::X => PlayerId::FIRST,
            Mark::O => PlayerId::SECOND,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Mark::X => "X",
            Mark::O => "O",
        })
    }
}

pub type Board = [Option<Mark>; CELLS];

/// Find a completed line. Returns the mark and the line's cells.
#[must_use]
pub fn winning_line(board: &Board) -> Option<(Mark, [usize; 3])> {
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        match board[a] {
            Some(mark) if board[b] == Some(mark) && board[c] == Some(mark) => Some((mark, line)),
            _ => None,
        }
    })
}

/// What happened after a mark was placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Game continues; this mark moves next.
    Next(Mark),
    Win { mark: Mark, line: [usize; 3] },
    Draw,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToe {
    board: Board,
    current: Mark,
    moves: u8,
    result: Option<GameResult>,
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self {
            board: [None; CELLS],
            current: Mark::X,
            moves: 0,
            result: None,
        }
    }
}

impl TicTacToe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place the current player's mark on `index`.
    pub fn place(&mut self, index: usize) -> Result<MoveOutcome> {
        if self.result.is_some() {
            return Err(GameError::GameOver);
        }
        if index >= CELLS {
            return Err(GameError::OutOfBounds { index, cells: CELLS });
        }
        if self.board[index].is_some() {
            return Err(GameError::CellOccupied(index));
        }

        let mark = self.current;
        self.board[index] = Some(mark);
        self.moves += 1;
        tracing::debug!(%mark, index, "mark placed");

        if let Some((winner, line)) = winning_line(&self.board) {
            self.result = Some(GameResult::Winner(winner.player()));
            return Ok(MoveOutcome::Win { mark: winner, line });
        }
        if self.board.iter().all(Option::is_some) {
            self.result = Some(GameResult::Draw);
            return Ok(MoveOutcome::Draw);
        }

        self.current = mark.other();
        Ok(MoveOutcome::Next(self.current))
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark to move (meaningless once the game is over).
    #[must_use]
    pub fn current(&self) -> Mark {
        self.current
    }

    #[must_use]
    pub fn moves(&self) -> u8 {
        self.moves
    }
}

impl RulesEngine for TicTacToe {
    type Move = usize;
    type Feedback = MoveOutcome;

    fn apply(&mut self, mv: usize) -> Result<MoveOutcome> {
        self.place(mv)
    }

    fn result(&self) -> Option<GameResult> {
        self.result
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(cells: &[usize]) -> (TicTacToe, MoveOutcome) {
        let mut game = TicTacToe::new();
        let mut last = MoveOutcome::Next(Mark::X);
        for &cell in cells {
            last = game.place(cell).unwrap();
        }
        (game, last)
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = TicTacToe::new();
        assert_eq!(game.place(4).unwrap(), MoveOutcome::Next(Mark::O));
        assert_eq!(game.place(0).unwrap(), MoveOutcome::Next(Mark::X));
        assert_eq!(game.board()[4], Some(Mark::X));
        assert_eq!(game.board()[0], Some(Mark::O));
        assert_eq!(game.moves(), 2);
    }

    #[test]
    fn test_row_win() {
        // X: 0 1 2, O: 3 4
        let (game, last) = play(&[0, 3, 1, 4, 2]);
        assert_eq!(last, MoveOutcome::Win { mark: Mark::X, line: [0, 1, 2] });
        assert_eq!(game.result(), Some(GameResult::Winner(PlayerId::FIRST)));
    }

    #[test]
    fn test_diagonal_win_for_o() {
        // X: 0 1 5, O: 2 4 6
        let (game, last) = play(&[0, 2, 1, 4, 5, 6]);
        assert_eq!(last, MoveOutcome::Win { mark: Mark::O, line: [2, 4, 6] });
        assert!(game.result().unwrap().is_winner(PlayerId::SECOND));
    }

    #[test]
    fn test_draw() {
        // X O X / X O O / O X X
        let (game, last) = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(last, MoveOutcome::Draw);
        assert_eq!(game.result(), Some(GameResult::Draw));
    }

    #[test]
    fn test_win_on_last_cell_is_not_draw() {
        // X O X / O X O / O X X  (X completes the 0-4-8 diagonal on the ninth move)
        let (_, last) = play(&[0, 1, 2, 3, 4, 5, 7, 6, 8]);
        assert_eq!(last, MoveOutcome::Win { mark: Mark::X, line: [0, 4, 8] });
    }

    #[test]
    fn test_rejected_moves() {
        let mut game = TicTacToe::new();
        game.place(0).unwrap();
        assert_eq!(game.place(0).unwrap_err(), GameError::CellOccupied(0));
        assert_eq!(game.place(9).unwrap_err(), GameError::OutOfBounds { index: 9, cells: 9 });
        assert_eq!(game.current(), Mark::O);

        let (mut done, _) = play(&[0, 3, 1, 4, 2]);
        assert_eq!(done.place(8).unwrap_err(), GameError::GameOver);
    }

    #[test]
    fn test_reset() {
        let (mut game, _) = play(&[0, 3, 1, 4, 2]);
        game.reset();
        assert_eq!(game, TicTacToe::new());
    }

    #[test]
    fn test_winning_line_empty_board() {
        assert_eq!(winning_line(&[None; CELLS]), None);
    }
}
