//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Player, Square};
use tracing::instrument;

/// The eight winning triples, in evaluation order.
///
/// Rows first, then columns, then the two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first complete line on the board together with its owner.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<([Position; 3], Player)> {
    LINES.into_iter().find_map(|line @ [a, b, c]| {
        let sq = board.get(a);
        match sq {
            Square::Occupied(player) if sq == board.get(b) && sq == board.get(c) => {
                Some((line, player))
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(_, player)| player)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(line: [Position; 3], player: Player) -> Board {
        line.into_iter()
            .fold(Board::new(), |b, pos| b.with(pos, Square::Occupied(player)))
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            for player in [Player::X, Player::O] {
                let board = filled(line, player);
                assert_eq!(check_winner(&board), Some(player), "line {:?}", line);
                assert_eq!(winning_line(&board), Some((line, player)));
            }
        }
    }

    #[test]
    fn test_line_with_other_marks_elsewhere() {
        let board = filled(LINES[4], Player::O)
            .with(Position::TopLeft, Square::Occupied(Player::X))
            .with(Position::BottomRight, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = Board::new()
            .with(Position::TopLeft, Square::Occupied(Player::X))
            .with(Position::TopCenter, Square::Occupied(Player::O))
            .with(Position::TopRight, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = Board::new()
            .with(Position::TopLeft, Square::Occupied(Player::X))
            .with(Position::TopCenter, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_full_board_without_line() {
        // X O X / X O O / O X X
        let x = Square::Occupied(Player::X);
        let o = Square::Occupied(Player::O);
        let board = Board::from_squares([x, o, x, x, o, o, o, x, x]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_order_wins() {
        // Top row and left column both complete for X: the row comes first.
        let board = filled(LINES[0], Player::X)
            .with(Position::MiddleLeft, Square::Occupied(Player::X))
            .with(Position::BottomLeft, Square::Occupied(Player::X));
        assert_eq!(winning_line(&board), Some((LINES[0], Player::X)));
    }

    #[test]
    fn test_matches_direct_line_check_on_every_board() {
        const TRIPLES: [[usize; 3]; 8] = [
            [0, 1, 2],
            [3, 4, 5],
            [6, 7, 8],
            [0, 3, 6],
            [1, 4, 7],
            [2, 5, 8],
            [0, 4, 8],
            [2, 4, 6],
        ];

        for n in 0..3usize.pow(9) {
            let mut squares = [Square::Empty; 9];
            let mut rest = n;
            for square in squares.iter_mut() {
                *square = match rest % 3 {
                    0 => Square::Empty,
                    1 => Square::Occupied(Player::X),
                    _ => Square::Occupied(Player::O),
                };
                rest /= 3;
            }

            let expected = TRIPLES.iter().find_map(|&[a, b, c]| match squares[a] {
                Square::Occupied(player) if squares[b] == squares[a] && squares[c] == squares[a] => {
                    Some(player)
                }
                _ => None,
            });

            assert_eq!(
                check_winner(&Board::from_squares(squares)),
                expected,
                "board {:?}",
                squares
            );
        }
    }
}
