use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("board dimensions must be nonzero, got {width}x{height}")]
    ZeroDimension { width: usize, height: usize },
    #[error("mismatched boards: stepping {from_width}x{from_height} into {to_width}x{to_height}")]
    DimensionMismatch {
        from_width: usize,
        from_height: usize,
        to_width: usize,
        to_height: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled,
}

impl Cell {
    #[inline]
    pub fn is_alive(self) -> bool {
        self == Cell::Filled
    }
}

/// A fixed-size grid of cells with toroidal wraparound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::ZeroDimension { width, height });
        }
        Ok(Board {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major index of a wrapped coordinate. Every cell access goes
    /// through here, so any signed coordinate lands inside the grid.
    #[inline]
    pub fn index(&self, x: i32, y: i32) -> usize {
        let sx = x.rem_euclid(self.width as i32) as usize;
        let sy = y.rem_euclid(self.height as i32) as usize;
        sx + sy * self.width
    }

    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Cell {
        self.cells[self.index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: i32, y: i32, val: Cell) {
        let i = self.index(x, y);
        self.cells[i] = val;
    }

    /// Count of `Filled` cells among the 8 wrapped neighbors of (x, y).
    /// Edge and corner cells wrap to the opposite side, so every cell
    /// has a full set of 8 neighbors.
    pub fn alive_neighbors(&self, x: i32, y: i32) -> u8 {
        let mut count = 0;
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                if self.get(x + dx, y + dy).is_alive() {
                    count += 1;
                }
            }
        }
        count
    }

    /// One generation of the standard rule, read from `self` and written
    /// into `to`. `self` is never mutated, so the result does not depend
    /// on visitation order. On mismatched dimensions `to` is left
    /// untouched.
    pub fn step_into(&self, to: &mut Board) -> Result<(), BoardError> {
        if self.width != to.width || self.height != to.height {
            return Err(BoardError::DimensionMismatch {
                from_width: self.width,
                from_height: self.height,
                to_width: to.width,
                to_height: to.height,
            });
        }

        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let count = self.alive_neighbors(x, y);
                let next = match (self.get(x, y), count) {
                    (Cell::Filled, 2) | (Cell::Filled, 3) => Cell::Filled, // survival
                    (Cell::Empty, 3) => Cell::Filled,                      // birth
                    _ => Cell::Empty,
                };
                to.set(x, y, next);
            }
        }
        Ok(())
    }
}
