use std::collections::HashSet;

use color_life::domain::{Cell, ConwayRule, Grid, LiveColor, Position, World, advance_generation};
use rand::{SeedableRng, rngs::StdRng};

fn seed(world: &mut World, cells: &[(i32, i32)]) {
    for &(x, y) in cells {
        world.front_mut().set(Position::new(x, y), Cell::LIVE).unwrap();
    }
}

fn collect_live(grid: &Grid) -> HashSet<(i32, i32)> {
    grid.alive_positions().map(|p| (p.x, p.y)).collect()
}

/// Reference step over a finite board, written independently of the crate
fn step_naive(cells: &HashSet<(i32, i32)>, width: i32, height: i32) -> HashSet<(i32, i32)> {
    let mut next = HashSet::new();
    for y in 0..height {
        for x in 0..width {
            let mut neighbors = 0;
            for dy in -1..=1 {
                for dx in -1..=1 {
                    if (dx, dy) != (0, 0) && cells.contains(&(x + dx, y + dy)) {
                        neighbors += 1;
                    }
                }
            }
            let alive = cells.contains(&(x, y));
            if (alive && (neighbors == 2 || neighbors == 3)) || (!alive && neighbors == 3) {
                next.insert((x, y));
            }
        }
    }
    next
}

#[test]
fn blinker_period_two() {
    let mut world = World::new(7, 7);
    seed(&mut world, &[(2, 1), (2, 2), (2, 3)]);
    let original = world.front().clone();

    world.step(&ConwayRule, &LiveColor::default()).unwrap();
    let expected: HashSet<_> = [(1, 2), (2, 2), (3, 2)].into_iter().collect();
    assert_eq!(collect_live(world.front()), expected);

    world.step(&ConwayRule, &LiveColor::default()).unwrap();
    assert_eq!(world.front(), &original);
}

#[test]
fn glider_dies_against_the_edge() {
    // Finite boundary: a glider cannot wrap, it collapses into a block in the corner
    let mut world = World::new(6, 6);
    seed(&mut world, &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);
    for _ in 0..40 {
        world.step(&ConwayRule, &LiveColor::default()).unwrap();
    }
    let expected: HashSet<_> = [(4, 4), (5, 4), (4, 5), (5, 5)].into_iter().collect();
    assert_eq!(collect_live(world.front()), expected);
}

#[test]
fn matches_reference_on_random_soup() {
    let (width, height) = (24, 17);
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut world = World::new(width, height);
    world.front_mut().randomize(&mut rng, 0.35, |_| Cell::LIVE);

    let mut expected = collect_live(world.front());
    for generation in 0..30 {
        world.step(&ConwayRule, &LiveColor::default()).unwrap();
        expected = step_naive(&expected, width as i32, height as i32);
        assert_eq!(collect_live(world.front()), expected, "diverged at generation {generation}");
    }
}

#[test]
fn colored_cells_count_by_channel_not_alpha() {
    let mut front = Grid::new(3, 3);
    // Three transparent but colored cells bring the center to life
    for (x, y, cell) in [
        (0, 0, Cell::new(1.0, 0.0, 0.0, 0.0)),
        (1, 0, Cell::new(0.0, 1.0, 0.0, 0.0)),
        (2, 0, Cell::new(0.0, 0.0, 1.0, 0.0)),
    ] {
        front.set(Position::new(x, y), cell).unwrap();
    }
    let mut back = Grid::new(3, 3);
    advance_generation(&front, &mut back, &ConwayRule, &LiveColor::default()).unwrap();
    assert_eq!(back.get(Position::new(1, 1)), Ok(Cell::LIVE));
}
