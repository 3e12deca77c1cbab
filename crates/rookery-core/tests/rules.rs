//! End-to-end rules tests through the public API.
//!
//! Covers turn flow from the starting position, king safety, castling
//! preconditions, and capture bookkeeping.

use rookery_core::{Board, CastleSide, Color, Coord, MoveError, PieceKind};

fn sq(name: &str) -> Coord {
    Coord::from_algebraic(name).unwrap()
}

/// Kings on e1/e8 and both white rooks at home, nothing else.
fn white_castling_setup() -> Board {
    let mut board = Board::empty();
    board.place(sq("e1"), PieceKind::King, Color::White);
    board.place(sq("a1"), PieceKind::Rook, Color::White);
    board.place(sq("h1"), PieceKind::Rook, Color::White);
    board.place(sq("e8"), PieceKind::King, Color::Black);
    board
}

#[test]
fn e2e4_from_the_start() {
    let mut board = Board::new();
    board.play(sq("e2"), sq("e4")).unwrap();
    assert!(board.piece_at(sq("e2")).is_none());
    let pawn = board.piece_at(sq("e4")).unwrap();
    assert_eq!((pawn.kind(), pawn.color()), (PieceKind::Pawn, Color::White));
    assert_eq!(board.side_to_move(), Color::Black);
}

#[test]
fn sides_alternate() {
    let mut board = Board::new();
    board.play(sq("g1"), sq("f3")).unwrap();
    assert_eq!(
        board.play(sq("f3"), sq("g5")),
        Err(MoveError::NotYourTurn {
            side_to_move: Color::Black
        })
    );
    board.play(sq("g8"), sq("f6")).unwrap();
    board.play(sq("f3"), sq("g5")).unwrap();
    assert_eq!(board.side_to_move(), Color::Black);
}

#[test]
fn every_starting_pawn_has_two_forward_moves() {
    let board = Board::new();
    for color in Color::ALL {
        for x in 0..8 {
            let from = board.cell(x, color.pawn_row()).unwrap().coord();
            assert_eq!(board.legal_destinations(from).len(), 2, "pawn on {from}");
        }
    }
}

#[test]
fn twenty_opening_moves_for_white() {
    let board = Board::new();
    let total: usize = board
        .squares()
        .filter(|s| s.piece().is_some_and(|p| p.color() == Color::White))
        .map(|s| board.legal_destinations(s.coord()).len())
        .sum();
    assert_eq!(total, 20);
}

#[test]
fn pawn_loses_double_step_after_moving() {
    let mut board = Board::new();
    board.play(sq("a2"), sq("a3")).unwrap();
    board.play(sq("h7"), sq("h6")).unwrap();
    assert_eq!(board.legal_destinations(sq("a3")), vec![sq("a4")]);
}

#[test]
fn king_cannot_step_onto_an_open_file() {
    let mut board = Board::empty();
    board.place(sq("e1"), PieceKind::King, Color::White);
    board.place(sq("e8"), PieceKind::Rook, Color::Black);
    board.place(sq("a8"), PieceKind::King, Color::Black);
    let before = board.clone();

    assert_eq!(
        board.play(sq("e1"), sq("e2")),
        Err(MoveError::IllegalMove {
            from: sq("e1"),
            to: sq("e2")
        })
    );
    assert_eq!(board, before);
}

#[test]
fn king_never_moves_onto_an_attacked_square() {
    let mut board = Board::empty();
    board.place(sq("d4"), PieceKind::King, Color::White);
    board.place(sq("c7"), PieceKind::Rook, Color::Black);
    board.place(sq("f6"), PieceKind::Knight, Color::Black);
    board.place(sq("b2"), PieceKind::Pawn, Color::Black);
    board.place(sq("h8"), PieceKind::King, Color::Black);

    let king = board.square(sq("d4"));
    let dests = king.legal_destinations();
    assert!(!dests.is_empty());
    for to in Coord::all() {
        if king.is_under_attack(to) {
            assert!(!dests.contains(&to), "king may not move to attacked {to}");
        }
    }
}

#[test]
fn kings_keep_their_distance() {
    let mut board = Board::empty();
    board.place(sq("e4"), PieceKind::King, Color::White);
    board.place(sq("e6"), PieceKind::King, Color::Black);
    let dests = board.legal_destinations(sq("e4"));
    for forbidden in ["d5", "e5", "f5"] {
        assert!(!dests.contains(&sq(forbidden)));
    }
    assert_eq!(dests.len(), 5);
}

#[test]
fn checker_is_reported_for_the_side_to_move() {
    let mut board = Board::new();
    for (from, to) in [("e2", "e4"), ("f7", "f6"), ("d1", "h5")] {
        board.play(sq(from), sq(to)).unwrap();
    }
    assert_eq!(board.checker(Color::Black), Some(sq("h5")));
    assert!(board.is_in_check(Color::Black));
}

#[test]
fn white_kingside_castle() {
    let mut board = white_castling_setup();
    assert!(board.can_castle(Color::White, CastleSide::KingSide));

    let outcome = board.play(sq("e1"), sq("g1")).unwrap();
    assert_eq!(outcome.castle, Some(CastleSide::KingSide));
    let king = board.piece_at(sq("g1")).unwrap();
    let rook = board.piece_at(sq("f1")).unwrap();
    assert_eq!(king.kind(), PieceKind::King);
    assert_eq!(rook.kind(), PieceKind::Rook);
    assert!(king.has_moved());
    assert!(rook.has_moved());
    assert!(board.piece_at(sq("h1")).is_none());
    assert_eq!(board.side_to_move(), Color::Black);
    board.validate().unwrap();
}

#[test]
fn castling_through_an_attacked_square_is_rejected() {
    let mut board = white_castling_setup();
    board.place(sq("f8"), PieceKind::Rook, Color::Black);
    assert!(!board.can_castle(Color::White, CastleSide::KingSide));
    assert!(board.can_castle(Color::White, CastleSide::QueenSide));
    assert!(board.play(sq("e1"), sq("g1")).is_err());
}

#[test]
fn castling_into_check_is_rejected() {
    let mut board = white_castling_setup();
    board.place(sq("c5"), PieceKind::Bishop, Color::Black);
    // c5 bishop hits g1.
    assert!(!board.can_castle(Color::White, CastleSide::KingSide));
}

#[test]
fn castling_out_of_check_is_rejected() {
    let mut board = white_castling_setup();
    board.place(sq("e5"), PieceKind::Rook, Color::Black);
    assert!(board.is_in_check(Color::White));
    for side in CastleSide::ALL {
        assert!(!board.can_castle(Color::White, side));
    }
}

#[test]
fn queenside_castling_refuses_attacked_king_path() {
    for attacker in ["d8", "c8"] {
        let mut board = white_castling_setup();
        board.place(sq(attacker), PieceKind::Rook, Color::Black);
        assert!(
            !board.can_castle(Color::White, CastleSide::QueenSide),
            "rook on {attacker}"
        );
        assert!(board.can_castle(Color::White, CastleSide::KingSide));

        let before = board.clone();
        assert_eq!(
            board.play(sq("e1"), sq("c1")),
            Err(MoveError::IllegalMove {
                from: sq("e1"),
                to: sq("c1")
            })
        );
        assert_eq!(board, before);
    }
}

#[test]
fn queenside_rook_may_cross_an_attacked_square() {
    let mut board = white_castling_setup();
    board.place(sq("b8"), PieceKind::Rook, Color::Black);
    assert!(board.can_castle(Color::White, CastleSide::QueenSide));
    board.play(sq("e1"), sq("c1")).unwrap();
    assert_eq!(board.piece_at(sq("d1")).unwrap().kind(), PieceKind::Rook);
}

#[test]
fn castling_needs_an_empty_path() {
    let mut board = white_castling_setup();
    board.place(sq("b1"), PieceKind::Knight, Color::White);
    assert!(!board.can_castle(Color::White, CastleSide::QueenSide));
    assert!(board.can_castle(Color::White, CastleSide::KingSide));
}

#[test]
fn moved_rook_cannot_castle() {
    let mut board = white_castling_setup();
    board.play(sq("h1"), sq("h2")).unwrap();
    board.play(sq("e8"), sq("d8")).unwrap();
    board.play(sq("h2"), sq("h1")).unwrap();
    board.play(sq("d8"), sq("e8")).unwrap();
    assert!(!board.can_castle(Color::White, CastleSide::KingSide));
    assert!(board.can_castle(Color::White, CastleSide::QueenSide));
}

#[test]
fn moved_king_cannot_castle() {
    let mut board = white_castling_setup();
    board.play(sq("e1"), sq("e2")).unwrap();
    board.play(sq("e8"), sq("d8")).unwrap();
    board.play(sq("e2"), sq("e1")).unwrap();
    board.play(sq("d8"), sq("e8")).unwrap();
    for side in CastleSide::ALL {
        assert!(!board.can_castle(Color::White, side));
    }
}

#[test]
fn enemy_rook_in_the_corner_does_not_castle() {
    let mut board = Board::empty();
    board.place(sq("e1"), PieceKind::King, Color::White);
    board.place(sq("h1"), PieceKind::Rook, Color::Black);
    board.place(sq("a8"), PieceKind::King, Color::Black);
    assert!(!board.can_castle(Color::White, CastleSide::KingSide));
}

#[test]
fn captures_accumulate_per_color_in_order() {
    let mut board = Board::new();
    let script = [
        ("e2", "e4"),
        ("d7", "d5"),
        ("e4", "d5"),
        ("d8", "d5"),
        ("b1", "c3"),
        ("d5", "a2"),
        ("a1", "a2"),
    ];
    for (from, to) in script {
        board.play(sq(from), sq(to)).unwrap();
    }

    let lost_black: Vec<PieceKind> = board
        .lost_pieces(Color::Black)
        .iter()
        .map(|p| p.kind())
        .collect();
    let lost_white: Vec<PieceKind> = board
        .lost_pieces(Color::White)
        .iter()
        .map(|p| p.kind())
        .collect();
    assert_eq!(lost_black, vec![PieceKind::Pawn, PieceKind::Queen]);
    assert_eq!(lost_white, vec![PieceKind::Pawn, PieceKind::Pawn]);

    let on_board = board.squares().filter(|s| !s.is_empty()).count();
    assert_eq!(on_board + lost_black.len() + lost_white.len(), 32);
    board.validate().unwrap();
}

#[test]
fn highlights_follow_selection_and_clear_after_play() {
    let mut board = Board::new();
    let dests = board.select(sq("e2"));
    assert_eq!(board.highlighted(), dests);
    board.play(sq("e2"), sq("e4")).unwrap();
    assert!(board.highlighted().is_empty());
}
