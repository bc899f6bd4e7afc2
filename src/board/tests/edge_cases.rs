//! Special positions and edge cases.

use super::make_unmake::find_move;
use crate::board::{Board, Color, GameResult, Piece, Square};

#[test]
fn test_en_passant_only_available_immediately() {
    let mut board = Board::new();
    board.make_move_uci("e2e4").unwrap();
    board.make_move_uci("a7a6").unwrap();
    board.make_move_uci("e4e5").unwrap();
    board.make_move_uci("d7d5").unwrap();
    assert_eq!(board.en_passant_target(), Some(Square(5, 3)));

    // Decline the capture; the right is gone next turn.
    board.make_move_uci("h2h3").unwrap();
    board.make_move_uci("a6a5").unwrap();
    assert_eq!(board.en_passant_target(), None);
    let moves = board.generate_moves();
    assert!(moves.iter().all(|m| !m.is_en_passant()));
}

#[test]
fn test_en_passant_illegal_when_exposing_king() {
    // Capturing en passant removes both pawns from the fifth rank and
    // exposes the white king to the rook on h5.
    let mut board = Board::from_fen("8/8/8/KPp4r/8/8/6k1/8 w - c6 0 1");
    let moves = board.generate_moves();
    assert!(
        moves.iter().all(|m| !m.is_en_passant()),
        "en passant should be filtered: {:?}",
        moves.as_slice()
    );
}

#[test]
fn test_castling_rejected_through_attacked_square() {
    // Black rook on f8 covers f1, the kingside transit square.
    let mut board = Board::from_fen("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    let moves = board.generate_moves();
    assert!(!moves.iter().any(|m| m.is_castling() && m.to == Square(0, 6)));
    // Queenside is unaffected.
    assert!(moves.iter().any(|m| m.is_castling() && m.to == Square(0, 2)));
}

#[test]
fn test_castling_rejected_while_in_check() {
    let mut board = Board::from_fen("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    let moves = board.generate_moves();
    assert!(moves.iter().all(|m| !m.is_castling()));
}

#[test]
fn test_castling_allowed_with_attacked_rook_square() {
    // b1 is attacked, but the king never crosses it; queenside castling
    // stays legal.
    let mut board = Board::from_fen("1r5k/8/8/8/8/8/8/R3K3 w Q - 0 1");
    let moves = board.generate_moves();
    assert!(moves.iter().any(|m| m.is_castling() && m.to == Square(0, 2)));
}

#[test]
fn test_castling_blocked_by_piece() {
    let mut board = Board::from_fen("4k3/8/8/8/8/8/8/RN2K2R w KQ - 0 1");
    let moves = board.generate_moves();
    assert!(moves.iter().any(|m| m.is_castling() && m.to == Square(0, 6)));
    assert!(!moves.iter().any(|m| m.is_castling() && m.to == Square(0, 2)));
}

#[test]
fn test_promotion_generates_all_four_pieces() {
    let mut board = Board::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let moves = board.generate_moves();
    let promotions: Vec<Piece> = moves
        .iter()
        .filter(|m| m.from == Square(6, 0))
        .filter_map(|m| m.promotion())
        .collect();
    assert_eq!(promotions.len(), 4);
    for piece in [Piece::Queen, Piece::Rook, Piece::Bishop, Piece::Knight] {
        assert!(promotions.contains(&piece));
    }
}

#[test]
fn test_pinned_piece_cannot_move_off_line() {
    // The e-file knight is pinned against the king by the rook.
    let mut board = Board::from_fen("4r1k1/8/8/8/8/4N3/8/4K3 w - - 0 1");
    let moves = board.generate_moves();
    assert!(moves.iter().all(|m| m.from != Square(2, 4)));
}

#[test]
fn test_checkmate_back_rank() {
    let mut board = Board::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1");
    board.make_move_uci("a1a8").unwrap();
    assert!(board.is_checkmate());
    assert_eq!(
        board.game_result(),
        Some(GameResult::Checkmate {
            winner: Color::White
        })
    );
}

#[test]
fn test_stalemate() {
    // Black to move, king on a8 with no legal moves and not in check.
    let mut board = Board::from_fen("k7/8/1Q6/8/8/8/8/4K3 b - - 0 1");
    assert!(board.is_stalemate());
    assert!(!board.is_checkmate());
    assert_eq!(board.game_result(), Some(GameResult::Stalemate));
}

#[test]
fn test_check_evasion_only_moves() {
    // Every legal move must address the check.
    let mut board = Board::from_fen("4k3/8/8/8/8/8/4r3/4K3 w - - 0 1");
    let mover = board.side_to_move();
    assert!(board.is_in_check(mover));
    let moves = board.generate_moves();
    assert!(!moves.is_empty());
    for m in moves.iter() {
        let info = board.make_move(*m);
        assert!(!board.is_in_check(mover), "move {m} leaves king in check");
        board.unmake_move(*m, info);
    }
}

#[test]
fn test_play_records_history() {
    let mut board = Board::new();
    let e4 = find_move(&mut board, Square(1, 4), Square(3, 4), None);
    let san = board.play(e4);
    assert_eq!(san, "e4");
    assert_eq!(board.move_history(), &["e4".to_string()]);
}
