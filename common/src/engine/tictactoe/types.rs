pub const CELL_COUNT: usize = 9;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mark {
    Empty,
    X,
    O,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn mark(self) -> Mark {
        match self {
            Player::X => Mark::X,
            Player::O => Mark::O,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardState {
    Open,
    Tie,
    XWins,
    OWins,
}

impl BoardState {
    pub fn as_str(self) -> &'static str {
        match self {
            BoardState::Open => "Open",
            BoardState::Tie => "Tie",
            BoardState::XWins => "X wins",
            BoardState::OWins => "O wins",
        }
    }

    pub fn is_terminal(self) -> bool {
        self != BoardState::Open
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            BoardState::XWins => Some(Player::X),
            BoardState::OWins => Some(Player::O),
            BoardState::Open | BoardState::Tie => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    pub nodes_visited: u64,
}
