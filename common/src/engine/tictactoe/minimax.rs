use super::board::Board;
use super::evaluator::evaluate_board;
use super::types::{Mark, Player, SearchResult};

const BIAS_SCORE: i32 = 10;

/// Full alpha-beta window entry point. `player` is the player to move at this
/// ply; `is_maximizing` says whether a win for `player` counts as favorable.
/// The recursion flips both together on every ply, so the scored perspective
/// is the same throughout the tree even as turns alternate.
pub fn minimax(
    board: &mut Board,
    depth: usize,
    is_maximizing: bool,
    player: Player,
    use_pruning: bool,
) -> SearchResult {
    minimax_aux(board, depth, is_maximizing, player, i32::MIN, i32::MAX, use_pruning)
}

fn minimax_aux(
    board: &mut Board,
    depth: usize,
    is_maximizing: bool,
    player: Player,
    mut alpha: i32,
    mut beta: i32,
    use_pruning: bool,
) -> SearchResult {
    let state = evaluate_board(board);

    if depth == 0 || state.is_terminal() {
        let Some(winner) = state.winner() else {
            // Tie, or depth ran out on a still-open board.
            return SearchResult {
                score: 0,
                nodes_visited: 1,
            };
        };

        let is_positive_outcome = (winner == player) == is_maximizing;
        let multiplier = if is_positive_outcome { 1 } else { -1 };
        // Prefer wins that need fewer moves and losses that need more.
        let depth_score = if is_maximizing {
            -(depth as i32)
        } else {
            depth as i32
        };

        return SearchResult {
            score: multiplier * BIAS_SCORE + depth_score,
            nodes_visited: 1,
        };
    }

    let mut best_score = if is_maximizing { i32::MIN } else { i32::MAX };
    let mut nodes_visited: u64 = 0;

    for position in board.available_positions() {
        board.put(position, player.mark());

        let child = minimax_aux(
            board,
            depth - 1,
            // The next ply is the other player's turn.
            !is_maximizing,
            player.opponent(),
            alpha,
            beta,
            use_pruning,
        );

        board.put(position, Mark::Empty);

        best_score = if is_maximizing {
            best_score.max(child.score)
        } else {
            best_score.min(child.score)
        };
        nodes_visited += child.nodes_visited;

        if is_maximizing {
            alpha = alpha.max(best_score);
        } else {
            beta = beta.min(best_score);
        }

        if use_pruning && alpha >= beta {
            break;
        }
    }

    SearchResult {
        score: best_score,
        nodes_visited: nodes_visited + 1,
    }
}
