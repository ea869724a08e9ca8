use rand::Rng;
use thiserror::Error;

/// Grid dimensions, fixed for the lifetime of a simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridConfig {
    pub width: u32,
    pub height: u32,
}

impl GridConfig {
    #[inline]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

/// One generation of cells on a toroidal grid.
///
/// Cells are stored as a flat `Vec<bool>` of length `width * height`,
/// indexed as `x + y * width`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl Grid {
    /// Create an all-dead grid.
    ///
    /// Fails if either dimension is zero; dimensions are never clamped.
    pub fn new(config: GridConfig) -> Result<Self, GridError> {
        let GridConfig { width, height } = config;
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }

        Ok(Self {
            width,
            height,
            cells: vec![false; width as usize * height as usize],
        })
    }

    /// An all-dead grid with the same dimensions as `self`.
    #[inline]
    pub fn empty_like(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            cells: vec![false; self.cells.len()],
        }
    }

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Read the cell at the wrapped coordinate.
    ///
    /// Wrapping is single-step, not modulo: a coordinate one below zero
    /// reads the far edge, one past the far edge reads zero. Only valid
    /// for offsets of ±1 from an in-range coordinate.
    #[inline]
    pub fn read(&self, x: i32, y: i32) -> bool {
        self.cells[self.wrapped_index(x, y)]
    }

    /// Write the cell at the wrapped coordinate. Same wrap rule as [`Grid::read`].
    #[inline]
    pub fn write(&mut self, x: i32, y: i32, value: bool) {
        let idx = self.wrapped_index(x, y);
        self.cells[idx] = value;
    }

    /// Set every cell independently alive with probability 1/2.
    pub fn randomize(&mut self, rng: &mut impl Rng) {
        for cell in &mut self.cells {
            *cell = rng.random();
        }
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|alive| **alive).count()
    }

    #[inline]
    fn wrapped_index(&self, x: i32, y: i32) -> usize {
        let x = Self::wrap(x, self.width);
        let y = Self::wrap(y, self.height);
        x as usize + y as usize * self.width as usize
    }

    #[inline]
    fn wrap(v: i32, len: u32) -> u32 {
        if v < 0 {
            len - 1
        } else if v as u32 > len - 1 {
            0
        } else {
            v as u32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn new_grid_is_all_dead() {
        let grid = Grid::new(GridConfig::new(7, 5)).unwrap();
        assert_eq!(grid.dimensions(), (7, 5));
        for y in 0..5 {
            for x in 0..7 {
                assert!(!grid.read(x, y));
            }
        }
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            Grid::new(GridConfig::new(0, 5)),
            Err(GridError::InvalidDimensions { width: 0, height: 5 })
        );
        assert_eq!(
            Grid::new(GridConfig::new(5, 0)),
            Err(GridError::InvalidDimensions { width: 5, height: 0 })
        );
        assert_eq!(
            Grid::new(GridConfig::new(0, 0)),
            Err(GridError::InvalidDimensions { width: 0, height: 0 })
        );
    }

    #[test]
    fn write_then_read_round_trips_through_wrap() {
        let mut grid = Grid::new(GridConfig::new(4, 3)).unwrap();

        grid.write(-1, 0, true);
        assert!(grid.read(3, 0));

        grid.write(4, 1, true);
        assert!(grid.read(0, 1));

        grid.write(2, -1, true);
        assert!(grid.read(2, 2));

        grid.write(2, 3, true);
        assert!(grid.read(2, 0));
    }

    #[test]
    fn empty_like_matches_dimensions_and_clears() {
        let mut grid = Grid::new(GridConfig::new(3, 3)).unwrap();
        grid.write(1, 1, true);

        let blank = grid.empty_like();
        assert_eq!(blank.dimensions(), grid.dimensions());
        assert_eq!(blank.population(), 0);
    }

    #[test]
    fn randomize_is_roughly_half_alive() {
        let mut grid = Grid::new(GridConfig::new(200, 200)).unwrap();
        let mut rng = StdRng::seed_from_u64(0x5eed);
        grid.randomize(&mut rng);

        let proportion = grid.population() as f64 / (200.0 * 200.0);
        assert!(
            (proportion - 0.5).abs() < 0.02,
            "alive proportion {proportion} too far from 0.5"
        );
    }

    proptest! {
        #[test]
        fn wrap_mirrors_both_edges(
            width in 1u32..32,
            height in 1u32..32,
            seed in any::<u64>(),
        ) {
            let mut grid = Grid::new(GridConfig::new(width, height)).unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            grid.randomize(&mut rng);

            let w = width as i32;
            let h = height as i32;
            for y in 0..h {
                prop_assert_eq!(grid.read(-1, y), grid.read(w - 1, y));
                prop_assert_eq!(grid.read(w, y), grid.read(0, y));
            }
            for x in 0..w {
                prop_assert_eq!(grid.read(x, -1), grid.read(x, h - 1));
                prop_assert_eq!(grid.read(x, h), grid.read(x, 0));
            }
        }
    }
}
