use toroidal_life::prelude::*;

const GRID_WIDTH: u32 = 80;
const GRID_HEIGHT: u32 = 80;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let world = LifeWorld::new(GridConfig::new(GRID_WIDTH, GRID_HEIGHT))?;

    let configs = AppConfigs::new().window_attributes(
        WindowAttributes::default()
            .with_title("Game of Life (Space: reseed)")
            .with_inner_size(LogicalSize::new(800.0, 800.0)),
    );

    App::new(configs, world).run()
}
