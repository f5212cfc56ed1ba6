use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{Board, BoardError, Cell, Coordinate, FleetPlacer, ShotOutcome, BOARD_SIZE};

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    FleetPlacer::default().generate_valid_board(&mut rng).unwrap()
}

fn cells(board: &Board) -> Vec<Cell> {
    board.rows().flatten().copied().collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn first_shot_lands_second_is_rejected(
        seed in any::<u64>(),
        row in 0..BOARD_SIZE as i32,
        col in 0..BOARD_SIZE as i32,
    ) {
        let mut board = random_board(seed);
        let target = Coordinate::new(row, col);
        let before = cells(&board);
        let outcome = board.fire_at(target).unwrap();
        let after = cells(&board);

        let idx = row as usize * BOARD_SIZE + col as usize;
        match outcome {
            ShotOutcome::Miss => prop_assert_eq!(after[idx], Cell::Miss),
            ShotOutcome::Hit | ShotOutcome::Sunk => prop_assert_eq!(after[idx], Cell::Hit),
        }
        if outcome != ShotOutcome::Sunk {
            let changed = before.iter().zip(&after).filter(|(b, a)| b != a).count();
            prop_assert_eq!(changed, 1);
        }

        let snapshot = board.clone();
        prop_assert_eq!(board.fire_at(target).unwrap_err(), BoardError::AlreadyTargeted);
        prop_assert_eq!(board, snapshot);
    }

    #[test]
    fn out_of_bounds_leaves_board_unmodified(
        seed in any::<u64>(),
        row in -10i32..20,
        col in -10i32..20,
    ) {
        let size = BOARD_SIZE as i32;
        prop_assume!(row < 0 || row >= size || col < 0 || col >= size);
        let mut board = random_board(seed);
        let snapshot = board.clone();
        prop_assert_eq!(board.fire_at(Coordinate::new(row, col)).unwrap_err(), BoardError::OutOfBounds);
        prop_assert_eq!(board, snapshot);
    }

    #[test]
    fn sinking_every_ship_counts_each_once(seed in any::<u64>()) {
        let mut board = random_board(seed);
        let ships: Vec<_> = board.ships().to_vec();
        for (i, ship) in ships.iter().enumerate() {
            prop_assert!(!board.all_destroyed());
            for target in ship.cells() {
                board.fire_at(target).unwrap();
            }
            prop_assert_eq!(board.destroyed_count(), i + 1);
            prop_assert_eq!(board.ships()[i].remaining_hits(), 0);
        }
        prop_assert!(board.all_destroyed());
        prop_assert_eq!(board.destroyed_count(), board.ships().len());
    }
}
