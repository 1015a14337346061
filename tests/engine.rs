use lifegrid::{CellState, Grid, LifeEngine, LifeError};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn alive_cells(engine: &LifeEngine) -> Vec<(usize, usize)> {
    engine.grid().live_cells().collect()
}

fn engine_with(rows: usize, cols: usize, cells: &[(usize, usize)]) -> LifeEngine {
    let mut engine = LifeEngine::new(rows, cols).unwrap();
    for &(row, col) in cells {
        engine.set_cell(row, col, CellState::Alive).unwrap();
    }
    engine
}

#[test]
fn empty_board_stays_empty() {
    for (rows, cols) in [(1, 1), (3, 7), (10, 10)] {
        let mut engine = LifeEngine::new(rows, cols).unwrap();
        for _ in 0..3 {
            engine.step();
        }
        assert!(engine.is_extinct(), "{rows}x{cols} grew life from nothing");
    }
}

#[test]
fn isolated_cell_dies() {
    let mut engine = engine_with(5, 5, &[(2, 2)]);
    engine.step();
    assert_eq!(engine.get_cell(2, 2).unwrap(), CellState::Dead);
    assert!(engine.is_extinct());
}

#[test]
fn block_is_still_life() {
    let block = [(3, 3), (3, 4), (4, 3), (4, 4)];
    let mut engine = engine_with(8, 8, &block);
    for _ in 0..5 {
        engine.step();
        assert_eq!(alive_cells(&engine), block);
    }
}

#[test]
fn blinker_oscillates_with_period_two() {
    let horizontal = [(2, 1), (2, 2), (2, 3)];
    let vertical = [(1, 2), (2, 2), (3, 2)];
    let mut engine = engine_with(5, 5, &horizontal);

    engine.step();
    assert_eq!(alive_cells(&engine), vertical);
    engine.step();
    assert_eq!(alive_cells(&engine), horizontal);
}

#[test]
fn corner_sees_only_three_neighbors() {
    // Every existing cell of the 3x3 neighborhood around (0, 0).
    let mut engine = engine_with(10, 10, &[(0, 0), (0, 1), (1, 0), (1, 1)]);
    assert_eq!(engine.grid().live_neighbors(0, 0).unwrap(), 3);

    // The 2x2 corner block survives intact; nothing appears past the edge.
    engine.step();
    assert_eq!(alive_cells(&engine), vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
}

#[test]
fn edge_sees_only_five_neighbors() {
    let mut engine = LifeEngine::new(4, 5).unwrap();
    for row in 0..2 {
        for col in 0..5 {
            engine.set_cell(row, col, CellState::Alive).unwrap();
        }
    }
    for col in 1..4 {
        assert_eq!(engine.grid().live_neighbors(0, col).unwrap(), 5);
    }
    assert_eq!(engine.grid().live_neighbors(0, 4).unwrap(), 3);
}

#[test]
fn blinker_on_edge_is_clipped() {
    // Vertical phase would need row -1; the edge must not wrap it to the bottom.
    let mut engine = engine_with(5, 5, &[(0, 1), (0, 2), (0, 3)]);
    engine.step();
    assert_eq!(alive_cells(&engine), vec![(0, 2), (1, 2)]);
    engine.step();
    assert!(engine.is_extinct());
}

#[test]
fn coordinates_are_bounds_checked() {
    let mut engine = LifeEngine::new(4, 6).unwrap();

    for (row, col) in [(4, 0), (0, 6), (4, 6), (usize::MAX, 0)] {
        assert_eq!(
            engine.get_cell(row, col),
            Err(LifeError::OutOfBounds {
                row,
                col,
                rows: 4,
                cols: 6
            })
        );
        assert!(engine.set_cell(row, col, CellState::Alive).is_err());
    }
    assert!(engine.is_extinct());

    for row in 0..4 {
        for col in 0..6 {
            assert_eq!(engine.get_cell(row, col), Ok(CellState::Dead));
            assert!(engine.set_cell(row, col, CellState::Alive).is_ok());
        }
    }
    assert_eq!(engine.population(), 24);
}

#[test]
fn clear_kills_everything() {
    let mut engine = LifeEngine::new(10, 10).unwrap();
    engine.randomize_seeded(11);
    engine.clear();
    for row in 0..10 {
        for col in 0..10 {
            assert_eq!(engine.get_cell(row, col).unwrap(), CellState::Dead);
        }
    }
}

#[test]
fn randomize_is_reproducible_per_seed() {
    let mut a = LifeEngine::new(10, 10).unwrap();
    let mut b = LifeEngine::new(10, 10).unwrap();
    a.randomize(&mut StdRng::seed_from_u64(2024));
    b.randomize(&mut StdRng::seed_from_u64(2024));
    assert_eq!(a.grid(), b.grid());

    let mut c = LifeEngine::new(10, 10).unwrap();
    c.randomize(&mut StdRng::seed_from_u64(2025));
    assert_ne!(a.grid(), c.grid());
}

#[test]
fn randomize_overwrites_previous_board() {
    let mut seeded = LifeEngine::new(10, 10).unwrap();
    seeded.randomize_seeded(5);

    let mut dirty = LifeEngine::new(10, 10).unwrap();
    for row in 0..10 {
        for col in 0..10 {
            dirty.set_cell(row, col, CellState::Alive).unwrap();
        }
    }
    dirty.randomize_seeded(5);
    assert_eq!(dirty.grid(), seeded.grid());
}

#[test]
fn fresh_board_is_dead_at_generation_zero() {
    let engine = LifeEngine::new(6, 7).unwrap();
    assert_eq!(engine.dimensions(), (6, 7));
    assert_eq!(engine.generation(), 0);
    for row in 0..6 {
        for col in 0..7 {
            assert_eq!(engine.get_cell(row, col).unwrap(), CellState::Dead);
        }
    }
}

#[test]
fn zero_steps_keep_every_edit() {
    let mut engine = LifeEngine::new(6, 6).unwrap();
    engine.set_cell(0, 0, CellState::Alive).unwrap();
    engine.set_cell(1, 4, CellState::Alive).unwrap();
    engine.set_cell(3, 3, CellState::Alive).unwrap();
    engine.set_cell(5, 5, CellState::Alive).unwrap();
    engine.toggle_cell(3, 3).unwrap();
    engine.toggle_cell(4, 1).unwrap();
    engine.set_cell(0, 0, CellState::Dead).unwrap();
    engine.set_cell(2, 2, CellState::Dead).unwrap();

    assert_eq!(alive_cells(&engine), vec![(1, 4), (4, 1), (5, 5)]);
    assert_eq!(engine.population(), 3);
    assert_eq!(engine.generation(), 0);
}

#[test]
fn step_reads_only_the_previous_generation() {
    // With in-place updates the row-major scan would see (1, 1) born before
    // visiting (1, 2) and the result would differ from the blinker phase.
    let mut engine = engine_with(3, 3, &[(0, 1), (1, 1), (2, 1)]);
    let next = engine.step().clone();
    let expected: Grid = "...\n###\n...".parse().unwrap();
    assert_eq!(next, expected);
}
