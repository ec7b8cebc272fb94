use super::*;

#[test]
fn test_color_opponent() {
    assert_eq!(Color::Black.opponent(), Color::White);
    assert_eq!(Color::White.opponent(), Color::Black);
}

#[test]
fn test_color_stone_round_trip() {
    assert_eq!(Stone::from(Color::Black), Stone::Black);
    assert_eq!(Stone::Black.color(), Some(Color::Black));
    assert_eq!(Stone::White.color(), Some(Color::White));
    assert_eq!(Stone::Empty.color(), None);
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new(8, 12);
    assert_eq!(board.rows(), 8);
    assert_eq!(board.cols(), 12);
    assert!(board.is_board_empty());
    assert_eq!(board.stone_count(), 0);
    assert_eq!(board.positions().count(), 96);
}

#[test]
fn test_default_board_is_19x19() {
    let board = Board::default();
    assert_eq!(board.rows(), DEFAULT_SIZE);
    assert_eq!(board.cols(), DEFAULT_SIZE);
}

#[test]
fn test_checked_pos_rectangular() {
    // Columns must be bounded by the column count, not the row count
    let board = Board::new(3, 10);
    assert_eq!(board.checked_pos(2, 9), Some(Pos::new(2, 9)));
    assert_eq!(board.checked_pos(3, 0), None);
    assert_eq!(board.checked_pos(0, 10), None);
    assert_eq!(board.checked_pos(-1, 0), None);
    assert_eq!(board.checked_pos(0, -1), None);
}

#[test]
fn test_place_and_get() {
    let mut board = Board::new(5, 5);
    board.place_stone(Pos::new(2, 3), Color::White);
    assert_eq!(board.get(Pos::new(2, 3)), Stone::White);
    assert!(!board.is_empty(Pos::new(2, 3)));
    assert!(board.is_empty(Pos::new(3, 2)));
    assert_eq!(board.stone_count(), 1);
}

#[test]
fn test_get_off_board_reads_empty() {
    let board = Board::new(2, 2);
    assert_eq!(board.get(Pos::new(5, 5)), Stone::Empty);
    assert!(!board.contains(Pos::new(5, 5)));
}

#[test]
fn test_is_full() {
    let mut board = Board::new(1, 2);
    assert!(!board.is_full());
    board.place_stone(Pos::new(0, 0), Color::Black);
    board.place_stone(Pos::new(0, 1), Color::White);
    assert!(board.is_full());
}

#[test]
fn test_step_stays_on_board() {
    let board = Board::new(4, 6);
    let origin = Pos::new(0, 0);
    assert_eq!(board.step(origin, Direction::SouthEast, 3), Some(Pos::new(3, 3)));
    assert_eq!(board.step(origin, Direction::SouthEast, 4), None);
    assert_eq!(board.step(origin, Direction::North, 1), None);
    assert_eq!(board.step(origin, Direction::East, 5), Some(Pos::new(0, 5)));
    assert_eq!(board.step(origin, Direction::East, 6), None);
    assert_eq!(board.step(origin, Direction::West, 0), Some(origin));
}

#[test]
fn test_direction_opposites_cancel() {
    for dir in Direction::ALL {
        let (dr, dc) = dir.delta();
        let (or, oc) = dir.opposite().delta();
        assert_eq!((dr + or, dc + oc), (0, 0), "{dir:?}");
        assert_eq!(dir.opposite().opposite(), dir);
    }
}

#[test]
fn test_axes_cover_all_directions_once() {
    let mut seen = Vec::new();
    for axis in Axis::ALL {
        let (a, b) = axis.directions();
        assert_eq!(a.opposite(), b, "{axis:?} must pair opposite directions");
        seen.push(a);
        seen.push(b);
    }
    for dir in Direction::ALL {
        assert_eq!(seen.iter().filter(|&&d| d == dir).count(), 1, "{dir:?}");
    }
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}
