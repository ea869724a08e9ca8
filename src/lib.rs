pub mod winit {
    pub use winit::{
        dpi::LogicalSize, event::KeyEvent, keyboard::KeyCode, window::WindowAttributes,
    };
}

pub mod frame;
pub use frame::Frame;

pub mod configs;
pub use configs::AppConfigs;

pub mod grid;
pub use grid::{Grid, GridConfig, GridError};

pub mod engine;
pub use engine::Simulation;

pub mod world;
pub use world::World;

pub mod life;
pub use life::LifeWorld;

pub mod app;
pub use app::App;

mod util;

pub mod prelude {
    pub use crate::{
        App, AppConfigs, Frame, Grid, GridConfig, GridError, LifeWorld, Simulation,
        World as WorldTrait, winit::*,
    };
}
