mod board;
mod bot;
mod evaluator;
mod game;
mod minimax;
mod types;

pub use board::Board;
pub use bot::calculate_computer_move;
pub use evaluator::{WIN_PATTERNS, evaluate_board};
pub use game::apply_player_move;
pub use minimax::minimax;
pub use types::{BoardState, CELL_COUNT, Mark, Player, SearchResult};
