#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use std::io::Cursor;

    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use seabattle::{
        parse_target, ui, Board, BoardError, CliPlayer, Coordinate, InputError, Orientation, Player,
        PlayerError, Ship, ShotOutcome,
    };

    #[test]
    fn test_parse_target() {
        assert_eq!(parse_target("1 1"), Ok(Coordinate::new(0, 0)));
        assert_eq!(parse_target("  6\t3 "), Ok(Coordinate::new(5, 2)));
        // zero becomes an off-grid axis
        assert_eq!(parse_target("0 4"), Ok(Coordinate::new(-1, 3)));
    }

    #[test]
    fn test_parse_target_saturates_large_numbers() {
        assert_eq!(
            parse_target("99999999999 1"),
            Ok(Coordinate::new(i32::MAX - 1, 0))
        );
        assert_eq!(
            parse_target("2 99999999999999999999999"),
            Ok(Coordinate::new(1, i32::MAX - 1))
        );
    }

    #[test]
    fn test_large_number_rejected_by_board() {
        let input = Cursor::new("99999999999 1\n3 3\n");
        let mut player = CliPlayer::new(input);
        let mut rng = SmallRng::seed_from_u64(0);
        let mut board = Board::new(6);

        assert_eq!(
            board.fire_at(parse_target("99999999999 1").unwrap()).unwrap_err(),
            BoardError::OutOfBounds
        );
        let shot = player.fire(&mut rng, &mut board).unwrap();
        assert_eq!(shot.target, Coordinate::new(2, 2));
        assert_eq!(shot.outcome, ShotOutcome::Miss);
    }

    #[test]
    fn test_parse_target_errors() {
        assert_eq!(parse_target(""), Err(InputError::WrongTokenCount(0)));
        assert_eq!(parse_target("3"), Err(InputError::WrongTokenCount(1)));
        assert_eq!(parse_target("1 2 3"), Err(InputError::WrongTokenCount(3)));
        assert_eq!(
            parse_target("a 2"),
            Err(InputError::NotANumber("a".to_string()))
        );
        assert_eq!(
            parse_target("2 -1"),
            Err(InputError::NotANumber("-1".to_string()))
        );
    }

    #[test]
    fn test_cli_player_reprompts_on_bad_input() {
        let input = Cursor::new("hello\n1\nx y\n2 3\n");
        let mut player = CliPlayer::new(input);
        let mut rng = SmallRng::seed_from_u64(0);
        assert_eq!(
            player.choose_target(&mut rng, 6).unwrap(),
            Coordinate::new(1, 2)
        );
        assert_eq!(
            player.choose_target(&mut rng, 6).unwrap_err(),
            PlayerError::InputClosed
        );
    }

    #[test]
    fn test_cli_player_fires_until_accepted() {
        let input = Cursor::new("7 1\n1 1\n1 1\n1 2\n");
        let mut player = CliPlayer::new(input);
        let mut rng = SmallRng::seed_from_u64(0);
        let mut board = Board::new(6);
        board
            .place_ship(Ship::new(Coordinate::new(0, 0), 2, Orientation::Horizontal))
            .unwrap();

        let shot = player.fire(&mut rng, &mut board).unwrap();
        assert_eq!(shot.target, Coordinate::new(0, 0));
        assert_eq!(shot.outcome, ShotOutcome::Hit);
        let shot = player.fire(&mut rng, &mut board).unwrap();
        assert_eq!(shot.target, Coordinate::new(0, 1));
        assert_eq!(shot.outcome, ShotOutcome::Sunk);
    }

    #[test]
    fn test_render_hides_concealed_ships() {
        let mut board = Board::new(6);
        board
            .place_ship(Ship::new(Coordinate::new(0, 0), 2, Orientation::Horizontal))
            .unwrap();
        board.fire_at(Coordinate::new(0, 0)).unwrap();
        board.fire_at(Coordinate::new(5, 5)).unwrap();

        let shown = ui::render_board(&board);
        let lines: Vec<&str> = shown.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "  1 2 3 4 5 6");
        assert_eq!(lines[1], "1 X ■ O O O O");
        assert_eq!(lines[6], "6 O O O O O T");

        board.set_concealed(true);
        let hidden = ui::render_board(&board);
        assert_eq!(hidden.lines().nth(1), Some("1 X O O O O O"));
        assert!(!hidden.contains('■'));
    }

    #[test]
    fn test_render_marks_revealed_water() {
        let mut board = Board::new(6);
        board
            .place_ship(Ship::new(Coordinate::new(0, 0), 1, Orientation::Horizontal))
            .unwrap();
        board.set_concealed(true);
        board.fire_at(Coordinate::new(0, 0)).unwrap();
        let shown = ui::render_board(&board);
        let lines: Vec<&str> = shown.lines().collect();
        assert_eq!(lines[1], "1 X . O O O O");
        assert_eq!(lines[2], "2 . . O O O O");
    }
}
