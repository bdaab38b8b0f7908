use super::types::{CELL_COUNT, Mark, Player};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn mark_at(&self, position: usize) -> Mark {
        self.cells[position]
    }

    pub fn place(&mut self, position: usize, player: Player) -> Result<(), String> {
        if position >= CELL_COUNT {
            return Err(format!("Position {} is out of bounds", position));
        }
        if self.cells[position] != Mark::Empty {
            return Err(format!("Position {} is already taken", position));
        }
        self.cells[position] = player.mark();
        Ok(())
    }

    // Unchecked scratch mutation for the search; every put must be paired
    // with a restoring put before control leaves the search.
    pub(crate) fn put(&mut self, position: usize, mark: Mark) {
        self.cells[position] = mark;
    }

    pub fn available_positions(&self) -> Vec<usize> {
        let mut positions = Vec::new();
        for (position, &cell) in self.cells.iter().enumerate() {
            if cell == Mark::Empty {
                positions.push(position);
            }
        }
        positions
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
