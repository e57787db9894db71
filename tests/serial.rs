//! Integration tests for the persisted JSON form.

use tactics_board::{Board, Figure, Position, TileInfo};

fn sample_board() -> Board {
    let mut board = Board::new();
    board.create_empty_tiles(
        (0..3).flat_map(|y| (0..4).map(move |x| Position::new(x, y))),
    );
    board
        .add_figure(0, 0, Figure::new("giant", 2, 2).unwrap())
        .unwrap();
    board
        .add_figure(3, 2, Figure::new("pawn", 1, 1).unwrap())
        .unwrap();
    board
}

#[test]
fn round_trip_preserves_the_board() {
    let board = sample_board();
    let restored = Board::try_from_json(&board.to_json()).unwrap();
    assert_eq!(restored, board);
}

#[test]
fn round_trip_of_an_empty_board() {
    let board = Board::new();
    let restored = Board::try_from_json(&board.to_json()).unwrap();
    assert_eq!(restored, board);
}

#[test]
fn round_trip_survives_mutation_history() {
    let mut board = sample_board();
    board.move_figure(Position::new(3, 2), Position::new(2, 2));
    board.remove_tile(Position::new(0, 0));
    board.create_empty_tile(5, 5);
    let restored = Board::try_from_json(&board.to_json()).unwrap();
    assert_eq!(restored, board);
}

#[test]
fn encoding_is_deterministic() {
    // Two boards with the same contents built in different orders encode
    // identically.
    let board = sample_board();
    let mut other = Board::new();
    other
        .create_empty_tiles((0..3).rev().flat_map(|y| (0..4).rev().map(move |x| Position::new(x, y))));
    other
        .add_figure(3, 2, Figure::new("pawn", 1, 1).unwrap())
        .unwrap();
    other
        .add_figure(0, 0, Figure::new("giant", 2, 2).unwrap())
        .unwrap();
    assert_eq!(board.to_json(), other.to_json());
}

#[test]
fn wire_shape_is_stable() {
    let json = r#"{
        "tiles": [{"x": 0, "y": 0}, {"x": 1, "y": 0}],
        "figures": [
            {"position": {"x": 0, "y": 0},
             "figure": {"name": "giant", "width": 2, "height": 1}}
        ]
    }"#;
    let board = Board::try_from_json(json).unwrap();
    assert!(board.has_tile(0, 0));
    assert!(board.has_tile(1, 0));
    match board.get_tile(Position::new(1, 0)) {
        TileInfo::Occupied(info) => {
            assert_eq!(info.name(), "giant");
            assert_eq!((info.width(), info.height()), (2, 1));
        }
        other => panic!("expected an occupied tile, got {:?}", other),
    }
}

#[test]
fn rejects_malformed_json() {
    assert!(Board::try_from_json("").is_none());
    assert!(Board::try_from_json("not json").is_none());
    assert!(Board::try_from_json("{\"tiles\": []}").is_none());
    assert!(Board::try_from_json("{\"tiles\": [], \"figures\": 3}").is_none());
}

#[test]
fn rejects_figures_without_tile_support() {
    let json = r#"{
        "tiles": [{"x": 0, "y": 0}],
        "figures": [
            {"position": {"x": 0, "y": 0},
             "figure": {"name": "giant", "width": 2, "height": 1}}
        ]
    }"#;
    assert!(Board::try_from_json(json).is_none());
}

#[test]
fn rejects_overlapping_figures() {
    let json = r#"{
        "tiles": [{"x": 0, "y": 0}, {"x": 1, "y": 0}],
        "figures": [
            {"position": {"x": 0, "y": 0},
             "figure": {"name": "giant", "width": 2, "height": 1}},
            {"position": {"x": 1, "y": 0},
             "figure": {"name": "pawn", "width": 1, "height": 1}}
        ]
    }"#;
    assert!(Board::try_from_json(json).is_none());
}

#[test]
fn rejects_nonpositive_figure_extent() {
    let json = r#"{
        "tiles": [{"x": 0, "y": 0}],
        "figures": [
            {"position": {"x": 0, "y": 0},
             "figure": {"name": "ghost", "width": 0, "height": 1}}
        ]
    }"#;
    assert!(Board::try_from_json(json).is_none());
}
