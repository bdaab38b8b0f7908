use super::board::Board;
use super::bot::calculate_computer_move;
use super::evaluator::evaluate_board;
use super::types::{BoardState, Player};

/// Plays one full turn: the human's X move followed, while the game stays
/// open, by the computer's O reply. Returns the computer's position (if it
/// moved) and the resulting board state.
pub fn apply_player_move(
    board: &mut Board,
    position: usize,
) -> Result<(Option<usize>, BoardState), String> {
    board.place(position, Player::X)?;

    let state = evaluate_board(board);
    if state.is_terminal() {
        return Ok((None, state));
    }

    // An open board always has a free cell, so a missing computer move
    // indicates a broken selector.
    let computer_position = calculate_computer_move(board)
        .ok_or_else(|| "No computer move found on an open board".to_string())?;
    board.place(computer_position, Player::O)?;

    Ok((Some(computer_position), evaluate_board(board)))
}
