use rand::SeedableRng;
use rand::rngs::StdRng;
use toroidal_life::engine::{advance, count_live_neighbors};
use toroidal_life::{Grid, GridConfig, Simulation};

fn grid_with_cells(width: u32, height: u32, cells: &[(i32, i32)]) -> Grid {
    let mut grid = Grid::new(GridConfig::new(width, height)).unwrap();
    for (x, y) in cells {
        grid.write(*x, *y, true);
    }
    grid
}

#[test]
fn corner_neighbors_wrap_around_both_axes() {
    let grid = grid_with_cells(5, 4, &[(4, 3)]);

    // (0, 0) sees the far corner through the seam.
    assert_eq!(count_live_neighbors(&grid, 0, 0), 1);
    assert_eq!(count_live_neighbors(&grid, 2, 2), 0);
}

#[test]
fn blinker_oscillates_across_the_vertical_seam() {
    // Horizontal blinker centered on column 0, crossing the seam.
    let horizontal = grid_with_cells(5, 5, &[(4, 0), (0, 0), (1, 0)]);
    let vertical = grid_with_cells(5, 5, &[(0, 4), (0, 0), (0, 1)]);

    let once = advance(&horizontal);
    assert_eq!(once, vertical);
    assert_eq!(advance(&once), horizontal);
}

#[test]
fn glider_translates_one_cell_per_four_generations() {
    let glider = |x0: i32, y0: i32| {
        grid_with_cells(
            8,
            8,
            &[
                (x0 + 1, y0),
                (x0 + 2, y0 + 1),
                (x0, y0 + 2),
                (x0 + 1, y0 + 2),
                (x0 + 2, y0 + 2),
            ],
        )
    };

    let mut grid = glider(2, 2);
    for _ in 0..4 {
        grid = advance(&grid);
    }
    assert_eq!(grid, glider(3, 3));
}

#[test]
fn glider_circumnavigates_the_torus() {
    let start = grid_with_cells(8, 8, &[(3, 2), (4, 3), (2, 4), (3, 4), (4, 4)]);

    // One cell of diagonal travel per four generations; 32 generations
    // bring it all the way around an 8x8 torus.
    let mut grid = start.clone();
    for _ in 0..32 {
        grid = advance(&grid);
    }
    assert_eq!(grid, start);
}

#[test]
fn identically_seeded_simulations_stay_identical() {
    let config = GridConfig::new(20, 20);

    let mut a = Simulation::new(config).unwrap();
    let mut b = Simulation::new(config).unwrap();
    a.reseed(&mut StdRng::seed_from_u64(42));
    b.reseed(&mut StdRng::seed_from_u64(42));

    for _ in 0..50 {
        a.step();
        b.step();
        assert_eq!(a.current(), b.current());
    }
}
