use super::board::Board;
use super::types::{BoardState, Mark};

// 3 rows, 3 columns, 2 diagonals.
pub const WIN_PATTERNS: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [6, 4, 2],
];

/// Classifies the board: a win for either player, a tie on a full board,
/// or still open. The first satisfied pattern decides the winner; alternating
/// turns guarantee no two patterns can disagree on a legal board.
pub fn evaluate_board(board: &Board) -> BoardState {
    for [a, b, c] in WIN_PATTERNS {
        let mark = board.mark_at(a);
        if mark != Mark::Empty && mark == board.mark_at(b) && mark == board.mark_at(c) {
            return if mark == Mark::X {
                BoardState::XWins
            } else {
                BoardState::OWins
            };
        }
    }

    if board.is_full() {
        BoardState::Tie
    } else {
        BoardState::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::types::{CELL_COUNT, Player};

    #[test]
    fn test_empty_board_is_open() {
        assert_eq!(evaluate_board(&Board::new()), BoardState::Open);
    }

    #[test]
    fn test_every_win_pattern_detected_for_both_players() {
        for pattern in WIN_PATTERNS {
            for (mark, expected) in [(Mark::X, BoardState::XWins), (Mark::O, BoardState::OWins)] {
                let mut cells = [Mark::Empty; CELL_COUNT];
                for position in pattern {
                    cells[position] = mark;
                }
                let board = Board::from_cells(cells);
                assert_eq!(evaluate_board(&board), expected, "pattern {:?}", pattern);
            }
        }
    }

    #[test]
    fn test_full_board_without_winner_is_tie() {
        let board = Board::from_cells([
            Mark::X, Mark::O, Mark::X,
            Mark::X, Mark::O, Mark::O,
            Mark::O, Mark::X, Mark::X,
        ]);
        assert_eq!(evaluate_board(&board), BoardState::Tie);
    }

    #[test]
    fn test_never_tie_while_a_cell_is_empty() {
        let board = Board::from_cells([
            Mark::X, Mark::O, Mark::X,
            Mark::X, Mark::O, Mark::O,
            Mark::O, Mark::X, Mark::Empty,
        ]);
        assert_eq!(evaluate_board(&board), BoardState::Open);
    }

    #[test]
    fn test_evaluation_is_pure_and_repeatable() {
        let mut board = Board::new();
        board.place(0, Player::X).unwrap();
        board.place(4, Player::O).unwrap();

        let before = board;
        let first = evaluate_board(&board);
        let second = evaluate_board(&board);

        assert_eq!(first, second);
        assert_eq!(board, before);
    }

    #[test]
    fn test_win_beats_full_board_tie_check() {
        let board = Board::from_cells([
            Mark::X, Mark::X, Mark::X,
            Mark::O, Mark::O, Mark::X,
            Mark::O, Mark::X, Mark::O,
        ]);
        assert_eq!(evaluate_board(&board), BoardState::XWins);
    }
}
