//! Static evaluation tests.

use crate::board::{Board, BoardBuilder, Color, PieceKind, Square};

#[test]
fn starting_position_is_balanced() {
    assert_eq!(Board::new().evaluate(), 0);
}

#[test]
fn missing_enemy_rook_shows_as_material_edge() {
    let board = Board::from_fen("rnbqkbn1/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQ - 0 1");
    assert!(board.evaluate() > 0);
}

#[test]
fn mirrored_positions_score_opposite() {
    let white_pawn = BoardBuilder::new()
        .piece(Square(4, 4), PieceKind::WhitePawn) // e4
        .piece(Square(7, 4), PieceKind::WhiteKing)
        .piece(Square(0, 4), PieceKind::BlackKing)
        .build()
        .unwrap();

    let black_pawn = BoardBuilder::new()
        .piece(Square(3, 4), PieceKind::BlackPawn) // e5, the vertical mirror
        .piece(Square(7, 4), PieceKind::WhiteKing)
        .piece(Square(0, 4), PieceKind::BlackKing)
        .side_to_move(Color::Black)
        .build()
        .unwrap();

    assert_eq!(white_pawn.evaluate(), -black_pawn.evaluate());
}

#[test]
fn central_pawn_outscores_rim_pawn() {
    let center = BoardBuilder::new()
        .piece(Square(4, 4), PieceKind::WhitePawn) // e4
        .piece(Square(7, 4), PieceKind::WhiteKing)
        .piece(Square(0, 4), PieceKind::BlackKing)
        .build()
        .unwrap();

    let rim = BoardBuilder::new()
        .piece(Square(4, 0), PieceKind::WhitePawn) // a4
        .piece(Square(7, 4), PieceKind::WhiteKing)
        .piece(Square(0, 4), PieceKind::BlackKing)
        .build()
        .unwrap();

    assert!(center.evaluate() > rim.evaluate());
}
