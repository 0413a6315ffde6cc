//! Falling sand cellular automaton
//!
//! Occupied cells fall straight down when they can, otherwise slide to a
//! free lower diagonal. Rows are swept bottom-up so a grain moves at most
//! one row per tick.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Occupancy grid with its own RNG for diagonal tie-breaks
#[derive(Debug, Clone)]
pub struct SandGrid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
    rng: Pcg32,
}

impl SandGrid {
    /// Empty grid
    pub fn new(width: usize, height: usize, seed: u64) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Grid with the two-cell starter column at x = 5
    pub fn with_starter(width: usize, height: usize, seed: u64) -> Self {
        let mut grid = Self::new(width, height, seed);
        grid.set(5, 0, true);
        grid.set(5, 1, true);
        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Occupancy of a cell; out-of-range cells read as empty
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.index(x, y).is_some_and(|i| self.cells[i])
    }

    pub fn set(&mut self, x: usize, y: usize, filled: bool) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = filled;
        }
    }

    /// Flip a cell, returning false if it lies outside the grid
    pub fn toggle(&mut self, x: usize, y: usize) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = !self.cells[i];
                true
            }
            None => false,
        }
    }

    /// Number of occupied cells
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Advance every grain by one step
    pub fn step(&mut self) {
        if self.height < 2 {
            return;
        }

        for y in (0..self.height - 1).rev() {
            for x in 0..self.width {
                if !self.get(x, y) {
                    continue;
                }
                if !self.get(x, y + 1) {
                    self.set(x, y, false);
                    self.set(x, y + 1, true);
                } else {
                    self.slide(x, y);
                }
            }
        }
    }

    fn slide(&mut self, x: usize, y: usize) {
        let below = y + 1;
        let left = x > 0 && !self.get(x - 1, below);
        let right = x + 1 < self.width && !self.get(x + 1, below);

        let target = match (left, right) {
            (true, true) => {
                if self.rng.random_bool(0.5) {
                    x - 1
                } else {
                    x + 1
                }
            }
            (true, false) => x - 1,
            (false, true) => x + 1,
            (false, false) => return,
        };

        self.set(x, y, false);
        self.set(target, below, true);
    }
}
