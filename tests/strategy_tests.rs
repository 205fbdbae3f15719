use std::collections::HashSet;

use rand::{rngs::SmallRng, SeedableRng};
use seabattle::strategy::{place_ship_randomly, random_placement};
use seabattle::{
    place_fleet_randomly, AiPlayer, Cell, GameConfig, Grid, GridError, Orientation, Player,
    TargetMemory,
};

#[test]
fn test_target_memory_covers_every_cell_once() {
    let n = 7;
    let mut rng = SmallRng::seed_from_u64(7);
    let mut memory = TargetMemory::new();
    let mut seen = HashSet::new();
    for _ in 0..n * n {
        let target = memory.next_target(&mut rng, n).unwrap();
        assert!(target.0 < n && target.1 < n);
        assert!(seen.insert(target), "duplicate target {:?}", target);
    }
    assert_eq!(seen.len(), n * n);
    assert_eq!(memory.len(), n * n);
    assert_eq!(memory.next_target(&mut rng, n), None);
}

#[test]
fn test_target_memory_records_shots() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut memory = TargetMemory::new();
    assert!(memory.is_empty());
    let (r, c) = memory.next_target(&mut rng, 10).unwrap();
    assert!(memory.has_fired(r, c));
    assert_eq!(memory.next_target(&mut rng, 0), None);
}

#[test]
fn test_place_fleet_standard() {
    let config = GameConfig::standard();
    let mut rng = SmallRng::seed_from_u64(42);
    let mut grid = Grid::new(config.size()).unwrap();
    place_fleet_randomly(&mut grid, config.fleet(), &mut rng).unwrap();

    let lengths: Vec<usize> = grid.ships().iter().map(|s| s.length()).collect();
    assert_eq!(lengths, config.fleet());
    let ship_cells = (0..10)
        .flat_map(|r| (0..10).map(move |c| (r, c)))
        .filter(|&(r, c)| grid.cell(r, c) == Some(Cell::Ship))
        .count();
    assert_eq!(ship_cells, config.total_ship_cells());
}

#[test]
fn test_reproducible_placement() {
    let config = GameConfig::standard();
    let mut g1 = Grid::new(10).unwrap();
    let mut g2 = Grid::new(10).unwrap();
    place_fleet_randomly(&mut g1, config.fleet(), &mut SmallRng::seed_from_u64(99)).unwrap();
    place_fleet_randomly(&mut g2, config.fleet(), &mut SmallRng::seed_from_u64(99)).unwrap();
    assert_eq!(g1, g2);
}

#[test]
fn test_random_placement_is_valid_and_pure() {
    let mut grid = Grid::new(10).unwrap();
    grid.place_ship(0, 0, 4, Orientation::Horizontal).unwrap();
    let before = grid.clone();
    let mut rng = SmallRng::seed_from_u64(3);
    let (r, c, o) = random_placement(&grid, 3, &mut rng).unwrap();
    assert_eq!(grid, before);
    grid.place_ship(r, c, 3, o).unwrap();
}

#[test]
fn test_random_placement_errors() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut grid = Grid::new(3).unwrap();
    assert_eq!(
        random_placement(&grid, 4, &mut rng),
        Err(GridError::ShipOutOfBounds)
    );
    assert_eq!(random_placement(&grid, 0, &mut rng), Err(GridError::ZeroLength));

    // a ship in the centre of a 3x3 grid blocks every other cell
    grid.place_ship(1, 1, 1, Orientation::Horizontal).unwrap();
    assert_eq!(
        place_ship_randomly(&mut grid, 1, &mut rng),
        Err(GridError::UnableToPlaceShip)
    );
    assert_eq!(grid.ships().len(), 1);
}

#[test]
fn test_ai_player_places_and_targets() {
    let config = GameConfig::new(6, vec![3, 2, 1]).unwrap();
    let mut ai = AiPlayer::new(SmallRng::seed_from_u64(11));
    let mut own = Grid::new(config.size()).unwrap();
    ai.place_fleet(&mut own, config.fleet()).unwrap();
    assert_eq!(own.ships().len(), 3);

    let enemy = Grid::new(config.size()).unwrap();
    let mut seen = HashSet::new();
    for _ in 0..36 {
        assert!(seen.insert(ai.select_target(enemy.fog()).unwrap()));
    }
    assert_eq!(ai.memory().len(), 36);
    assert!(ai.select_target(enemy.fog()).is_err());
}
