use crate::{
    Frame, GridConfig, GridError, Simulation, World,
    util::is_pressed,
    winit::{KeyCode, KeyEvent},
};

/// How a cell is drawn, distinguishing survivors from fresh births.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shade {
    Dead,
    Survivor,
    Birth,
}

impl Shade {
    fn of(alive: bool, was_alive: bool) -> Self {
        match (alive, was_alive) {
            (false, _) => Self::Dead,
            (true, true) => Self::Survivor,
            (true, false) => Self::Birth,
        }
    }

    fn color(&self) -> [u8; 4] {
        match self {
            Self::Dead => [0, 0, 0, 255],
            Self::Survivor => [0, 158, 47, 255],
            Self::Birth => [200, 122, 255, 255],
        }
    }
}

/// Game of Life on a torus, drawn one pixel per cell.
///
/// Holds the tick driver and latches reseed key presses so the reseed
/// lands at the next tick boundary rather than mid-frame.
pub struct LifeWorld {
    sim: Simulation,
    key_reseed: KeyCode,
    reseed_requested: bool,
    generation: u64,
}

impl LifeWorld {
    pub fn new(config: GridConfig) -> Result<Self, GridError> {
        let mut sim = Simulation::new(config)?;
        sim.reseed(&mut rand::rng());

        Ok(Self {
            sim,
            key_reseed: KeyCode::Space,
            reseed_requested: false,
            generation: 0,
        })
    }

    #[inline]
    pub fn key_reseed(self, key_reseed: KeyCode) -> Self {
        Self { key_reseed, ..self }
    }

    fn paint(&self, frame: &mut Frame) {
        let current = self.sim.current();
        let previous = self.sim.previous();
        let (width, height) = current.dimensions();
        debug_assert_eq!((frame.width(), frame.height()), (width, height));

        for y in 0..height {
            for x in 0..width {
                let shade = Shade::of(
                    current.read(x as i32, y as i32),
                    previous.read(x as i32, y as i32),
                );
                frame
                    .get_mut(x, y)
                    .unwrap()
                    .copy_from_slice(&shade.color());
            }
        }
    }
}

impl World for LifeWorld {
    fn init_frame(&mut self) -> Frame {
        let (width, height) = self.sim.current().dimensions();
        let mut frame = Frame::new(width, height);
        self.paint(&mut frame);
        frame
    }

    fn update(&mut self, frame: &mut Frame) {
        if std::mem::take(&mut self.reseed_requested) {
            self.sim.reseed(&mut rand::rng());
            tracing::info!(generation = self.generation, "grid reseeded");
        }

        self.sim.step();
        self.generation += 1;
        tracing::trace!(
            generation = self.generation,
            population = self.sim.current().population(),
        );

        self.paint(frame);
    }

    fn keyboard_input(&mut self, event: KeyEvent, _frame: &mut Frame) {
        if is_pressed(&event, self.key_reseed) {
            self.reseed_requested = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shade_distinguishes_birth_from_survival() {
        assert_eq!(Shade::of(true, true), Shade::Survivor);
        assert_eq!(Shade::of(true, false), Shade::Birth);
        assert_eq!(Shade::of(false, true), Shade::Dead);
        assert_eq!(Shade::of(false, false), Shade::Dead);
    }

    #[test]
    fn init_frame_matches_grid_dimensions() {
        let mut world = LifeWorld::new(GridConfig::new(12, 7)).unwrap();
        let frame = world.init_frame();
        assert_eq!((frame.width(), frame.height()), (12, 7));
    }

    #[test]
    fn update_advances_one_generation() {
        let mut world = LifeWorld::new(GridConfig::new(8, 8)).unwrap();
        let mut frame = world.init_frame();

        let expected = crate::engine::advance(world.sim.current());
        world.update(&mut frame);
        assert_eq!(world.sim.current(), &expected);
    }
}
