//! SAN output tests.

use super::make_unmake::find_move;
use crate::board::{Board, Piece, Square};

fn san_for(fen: &str, from: Square, to: Square, promotion: Option<Piece>) -> String {
    let mut board = Board::from_fen(fen);
    let mv = find_move(&mut board, from, to, promotion);
    board.move_to_san(mv)
}

#[test]
fn test_pawn_push() {
    let mut board = Board::new();
    let mv = find_move(&mut board, Square(1, 4), Square(3, 4), None);
    assert_eq!(board.move_to_san(mv), "e4");
}

#[test]
fn test_piece_move() {
    let mut board = Board::new();
    let mv = find_move(&mut board, Square(0, 6), Square(2, 5), None);
    assert_eq!(board.move_to_san(mv), "Nf3");
}

#[test]
fn test_pawn_capture_includes_file() {
    let san = san_for(
        "rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2",
        Square(3, 4),
        Square(4, 3),
        None,
    );
    assert_eq!(san, "exd5");
}

#[test]
fn test_en_passant_capture_notation() {
    let san = san_for(
        "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
        Square(4, 4),
        Square(5, 5),
        None,
    );
    assert_eq!(san, "exf6");
}

#[test]
fn test_piece_capture() {
    let san = san_for(
        "4k3/8/8/3p4/8/4N3/8/4K3 w - - 0 1",
        Square(2, 4),
        Square(4, 3),
        None,
    );
    assert_eq!(san, "Nxd5");
}

#[test]
fn test_castling_notation() {
    let kingside = san_for("4k3/8/8/8/8/8/8/4K2R w K - 0 1", Square(0, 4), Square(0, 6), None);
    assert_eq!(kingside, "O-O");

    let queenside = san_for("4k3/8/8/8/8/8/8/R3K3 w Q - 0 1", Square(0, 4), Square(0, 2), None);
    assert_eq!(queenside, "O-O-O");
}

#[test]
fn test_promotion_notation() {
    // The new queen checks along the back rank.
    let san = san_for("4k3/P7/8/8/8/8/8/4K3 w - - 0 1", Square(6, 0), Square(7, 0), Some(Piece::Queen));
    assert_eq!(san, "a8=Q+");

    let underpromotion = san_for(
        "4k3/P7/8/8/8/8/8/4K3 w - - 0 1",
        Square(6, 0),
        Square(7, 0),
        Some(Piece::Knight),
    );
    assert_eq!(underpromotion, "a8=N");
}

#[test]
fn test_file_disambiguation() {
    // Knights on b1 and f1 can both reach d2.
    let san = san_for(
        "4k3/8/8/8/8/8/8/1N2KN2 w - - 0 1",
        Square(0, 1),
        Square(1, 3),
        None,
    );
    assert_eq!(san, "Nbd2");
}

#[test]
fn test_rank_disambiguation() {
    // Rooks on a1 and a5 share the a-file; the rank disambiguates.
    let san = san_for(
        "4k3/8/8/R7/8/8/8/R3K3 w - - 0 1",
        Square(0, 0),
        Square(2, 0),
        None,
    );
    assert_eq!(san, "R1a3");
}

#[test]
fn test_full_disambiguation() {
    // Queens on a1, a4, and e1 can all reach d1: a4 shares the a1
    // queen's file and e1 shares its rank, so both coordinates are
    // needed. The black king sits on b8, off every queen's line.
    let san = san_for(
        "1k6/8/8/8/Q7/8/8/Q3Q1K1 w - - 0 1",
        Square(0, 0),
        Square(0, 3),
        None,
    );
    assert_eq!(san, "Qa1d1");
}

#[test]
fn test_no_disambiguation_when_other_knight_pinned() {
    // Only legal moves count as ambiguous: the c3 knight is pinned by
    // the a5 bishop, so the g1 knight reaches e2 without a file letter.
    let san = san_for(
        "4k3/8/8/b7/8/2N5/8/4K1N1 w - - 0 1",
        Square(0, 6),
        Square(1, 4),
        None,
    );
    assert_eq!(san, "Ne2");
}

#[test]
fn test_check_suffix() {
    let san = san_for("4k3/8/8/8/8/8/8/R3K3 w - - 0 1", Square(0, 0), Square(7, 0), None);
    assert_eq!(san, "Ra8+");
}

#[test]
fn test_checkmate_suffix() {
    let san = san_for(
        "6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1",
        Square(0, 0),
        Square(7, 0),
        None,
    );
    assert_eq!(san, "Ra8#");
}
