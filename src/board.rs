use crate::types::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    // Cells 0..=8 laid out row-major (r*3 + c)
    cells: [Option<Player>; 9],
}

impl Default for Board {
    fn default() -> Self {
        Self { cells: [None; 9] }
    }
}

impl Board {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, idx: u8) -> Option<Player> {
        self.cells[idx as usize]
    }

    #[inline]
    pub fn set(&mut self, idx: u8, mark: Option<Player>) {
        self.cells[idx as usize] = mark;
    }

    #[inline]
    pub fn is_empty(&self, idx: u8) -> bool {
        self.cells[idx as usize].is_none()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.cells = [None; 9];
    }

    #[inline]
    pub fn filled_count(&self) -> u8 {
        self.cells.iter().filter(|c| c.is_some()).count() as u8
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.filled_count() == 9
    }
}
