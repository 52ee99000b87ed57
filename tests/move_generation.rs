//! Perft counts pin down the move generator: the slightest slip in
//! castling, en passant or pin handling shows up as a wrong node count.

use medusa::chess::position::{perft, Position};
use pretty_assertions::assert_eq;

fn setup(fen: &str) -> Position {
    Position::from_fen(fen).expect("parsing legal position")
}

#[test]
fn perft_starting_position() {
    let position = Position::starting();
    assert_eq!(perft(&position, 1), 20);
    assert_eq!(perft(&position, 2), 400);
    assert_eq!(perft(&position, 3), 8_902);
    assert_eq!(perft(&position, 4), 197_281);
}

#[test]
fn perft_kiwipete() {
    // The classic movegen torture position: checks, pins, castling both
    // ways, en passant and promotions all at once.
    let position = setup("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
    assert_eq!(perft(&position, 1), 48);
    assert_eq!(perft(&position, 2), 2_039);
    assert_eq!(perft(&position, 3), 97_862);
}

#[test]
fn perft_en_passant_discoveries() {
    // Discovered checks through the en passant capture square.
    let position = setup("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1");
    assert_eq!(perft(&position, 1), 14);
    assert_eq!(perft(&position, 2), 191);
    assert_eq!(perft(&position, 3), 2_812);
    assert_eq!(perft(&position, 4), 43_238);
}

#[test]
fn perft_promotions() {
    let position = setup("n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1");
    assert_eq!(perft(&position, 1), 24);
    assert_eq!(perft(&position, 2), 496);
    assert_eq!(perft(&position, 3), 9_483);
}

#[test]
fn double_check_forces_the_king_to_move() {
    // Both the rook and the bishop attack the king: every legal reply is a
    // king move (the queen can neither block both lines nor capture both
    // attackers).
    let position = setup("4k3/8/8/8/8/2b5/4r3/3QK3 w - - 0 30");
    assert!(position.in_check());
    for next_move in position.generate_moves() {
        assert_eq!(next_move.from(), medusa::chess::core::Square::E1);
    }
}
