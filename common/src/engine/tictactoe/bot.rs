use super::board::Board;
use super::minimax::minimax;
use super::types::{Mark, Player};

/// Picks the computer's (O's) move, or `None` when the board is full.
///
/// Every candidate move is scored by searching to the true end of the game,
/// so pruning only saves work and never changes the chosen position. Ties
/// between equally good moves go to the lowest index.
pub fn calculate_computer_move(board: &mut Board) -> Option<usize> {
    let available_positions = board.available_positions();
    if available_positions.is_empty() {
        return None;
    }

    let mut best_position = None;
    let mut best_score = i32::MIN;

    for &position in &available_positions {
        board.put(position, Mark::O);

        // O has just moved, so the simulated turn is X's and it is minimized;
        // in this framing a higher score is better for O.
        let result = minimax(board, available_positions.len(), false, Player::X, true);

        board.put(position, Mark::Empty);

        if result.score > best_score {
            best_score = result.score;
            best_position = Some(position);
        }
    }

    best_position
}
