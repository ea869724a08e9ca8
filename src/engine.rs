use crate::{Grid, GridConfig, GridError};
use rand::Rng;

const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Count the alive cells at Chebyshev distance 1 from `(x, y)`, under wrap.
#[inline]
pub fn count_live_neighbors(grid: &Grid, x: i32, y: i32) -> u8 {
    NEIGHBOR_OFFSETS
        .iter()
        .filter(|(dx, dy)| grid.read(x + dx, y + dy))
        .count() as u8
}

/// Compute the next generation into a fresh grid.
///
/// Pure: `current` is untouched and the result depends on nothing else.
pub fn advance(current: &Grid) -> Grid {
    let mut next = current.empty_like();
    advance_into(current, &mut next);
    next
}

/// Compute the next generation into an existing buffer of matching
/// dimensions. Every cell of `next` is overwritten, so a stale buffer is
/// fine.
pub fn advance_into(current: &Grid, next: &mut Grid) {
    debug_assert_eq!(current.dimensions(), next.dimensions());

    let (width, height) = current.dimensions();
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            let n = count_live_neighbors(current, x, y);
            let alive = current.read(x, y);
            // Survival on 2 or 3 neighbors, birth on exactly 3.
            next.write(x, y, n == 3 || (alive && n == 2));
        }
    }
}

/// Double-buffered tick driver.
///
/// Owns the current generation and a scratch buffer; [`Simulation::step`]
/// fills the scratch and swaps ownership instead of copying.
#[derive(Debug, Clone)]
pub struct Simulation {
    current: Grid,
    scratch: Grid,
}

impl Simulation {
    pub fn new(config: GridConfig) -> Result<Self, GridError> {
        let current = Grid::new(config)?;
        let scratch = current.empty_like();
        Ok(Self { current, scratch })
    }

    /// Advance one generation.
    pub fn step(&mut self) {
        advance_into(&self.current, &mut self.scratch);
        std::mem::swap(&mut self.current, &mut self.scratch);
    }

    /// Overwrite the current generation with random cells.
    pub fn reseed(&mut self, rng: &mut impl Rng) {
        self.current.randomize(rng);
    }

    #[inline]
    pub fn current(&self) -> &Grid {
        &self.current
    }

    /// The generation replaced by the most recent [`Simulation::step`].
    ///
    /// All-dead until the first step.
    #[inline]
    pub fn previous(&self) -> &Grid {
        &self.scratch
    }
}
