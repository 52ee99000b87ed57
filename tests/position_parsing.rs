//! FEN acceptance and rejection suite: everything the engine accepts must
//! round-trip exactly, and the obviously broken positions must be refused
//! for the stated reason.

use medusa::chess::position::Position;
use pretty_assertions::assert_eq;

fn setup(fen: &str) -> Position {
    Position::from_fen(fen).expect("parsing legal position")
}

fn expect_legal_position(input: &str) {
    let position = setup(input);
    assert_eq!(position.to_string(), input);
}

#[test]
fn basic_positions_round_trip() {
    expect_legal_position("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    expect_legal_position("2r3r1/p3k3/1p3pp1/1B5p/5P2/2P1p1P1/PP4KP/3R4 w - - 0 34");
    expect_legal_position("rnbqk1nr/p3bppp/1p2p3/2ppP3/3P4/P7/1PP1NPPP/R1BQKBNR w KQkq c6 0 7");
    expect_legal_position(
        "r2qkb1r/1pp1pp1p/p1np1np1/1B6/3PP1b1/2N1BN2/PPP2PPP/R2QK2R w KQkq - 0 7",
    );
    expect_legal_position("8/8/8/8/2P5/3k4/8/KB6 b - c3 0 1");
    expect_legal_position(
        "rnbq1rk1/pp4pp/1b1ppn2/2p2p2/2PP4/1P2PN2/PB2BPPP/RN1Q1RK1 w - c6 0 9",
    );
    expect_legal_position("5r1k/6pp/p1Q5/2p1B3/5n2/6q1/PPP3P1/5R1K b - - 0 34");
}

#[test]
fn trimmed_fen_defaults_the_clocks() {
    let position = setup("rnbqkb1r/pp2pppp/3p1n2/8/3NP3/2N5/PPP2PPP/R1BQKB1R b KQkq -");
    assert_eq!(position.halfmove_clock(), 0);
    assert_eq!(position.fullmove_counter(), 1);
}

#[test]
fn prefixed_and_padded_input_is_cleaned_up() {
    let position =
        Position::try_from("fen rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1\n")
            .expect("parsing prefixed FEN");
    assert_eq!(position, Position::starting());
}

#[test]
fn round_trip_survives_play() {
    let mut position = Position::starting();
    // Walk a game that exercises castling, en passant targets and captures;
    // every intermediate position must survive a FEN round trip bit-exact.
    for uci in [
        "e2e4", "c7c5", "g1f3", "d7d6", "d2d4", "c5d4", "f3d4", "g8f6", "b1c3", "a7a6", "f1e2",
        "e7e5", "d4b3", "f8e7", "e1g1", "e8g8",
    ] {
        let next_move = medusa::chess::notation::parse_uci(&position, uci).expect("legal move");
        position.make_move(&next_move);
        let reparsed = Position::from_fen(&position.to_string()).expect("own FEN must parse");
        assert_eq!(reparsed, position, "after {uci}");
    }
}

#[test]
fn consistent_castle_rights_are_accepted() {
    // The same placements that fail below parse fine once the stale rights
    // are dropped.
    let _ = setup("4k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
    let _ = setup("r3k3/8/8/8/8/8/8/4K3 w q - 0 1");
}

#[test]
#[should_panic(expected = "rank size should be exactly 8")]
fn empty_input() {
    let _ = setup("");
}

#[test]
#[should_panic(expected = "unknown piece symbol: expected within \"KQRBNPkqrbnp\", got 'w'")]
fn garbage_input() {
    let _ = setup("what is this");
}

#[test]
#[should_panic(expected = "there should be 8 ranks")]
fn seven_ranks() {
    let _ = setup("rnbqkbnr/pppppppp/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
}

#[test]
#[should_panic(expected = "expected 8 ranks")]
fn nine_ranks() {
    let _ = setup("8/8/8/8/8/8/8/8/8 w - - 0 1");
}

#[test]
#[should_panic(expected = "missing side to move")]
fn missing_side_to_move() {
    let _ = setup("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR");
}

#[test]
#[should_panic(expected = "missing castling rights")]
fn missing_castling_rights() {
    let _ = setup("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w");
}

#[test]
#[should_panic(expected = "missing en passant square")]
fn missing_en_passant_square() {
    let _ = setup("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq");
}

#[test]
#[should_panic(expected = "unknown color: expected 'w' or 'b', got 'x'")]
fn bad_side_to_move() {
    let _ = setup("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1");
}

#[test]
#[should_panic(expected = "unknown castling rights: expected 1..=4 symbols or '-', got 'KQkqq'")]
fn bad_castling_rights() {
    let _ = setup("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkqq - 0 1");
}

#[test]
#[should_panic(expected = "unknown rank: expected within '1'..='8', got '9'")]
fn bad_en_passant_square() {
    let _ = setup("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e9 0 1");
}

#[test]
#[should_panic(expected = "halfmove clock can not be parsed: zero")]
fn bad_halfmove_clock() {
    let _ = setup("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - zero 1");
}

#[test]
#[should_panic(expected = "fullmove counter can not be 0")]
fn zero_fullmove_counter() {
    let _ = setup("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 0");
}

#[test]
#[should_panic(expected = "trailing symbols after the fullmove counter")]
fn trailing_symbols() {
    let _ = setup("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1 extra");
}

#[test]
#[should_panic(expected = "expected 1 White king, got 0")]
fn no_white_king() {
    let _ = setup("3k4/8/8/8/8/8/8/8 w - - 0 1");
}

#[test]
#[should_panic(expected = "expected 1 Black king, got 0")]
fn no_black_king() {
    let _ = setup("8/8/8/8/8/8/8/3K4 w - - 0 1");
}

#[test]
#[should_panic(expected = "expected 1 White king, got 3")]
fn too_many_kings() {
    let _ = setup("1kkk4/8/8/8/8/8/8/1KKK4 w - - 0 1");
}

#[test]
#[should_panic(expected = "expected <= 8 White pawns, got 9")]
fn too_many_white_pawns() {
    let _ = setup("rnbqkbnr/pppppppp/8/8/8/P7/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
}

#[test]
#[should_panic(expected = "pawns can not be placed on backranks")]
fn pawns_on_backranks() {
    let _ = setup("3kr3/8/8/8/8/5Q2/8/1KP5 w - - 0 1");
}

#[test]
#[should_panic(expected = "the side not to move can not be in check")]
fn resting_side_in_check() {
    let _ = setup("4k3/4R3/8/8/8/8/8/4K3 w - - 0 10");
}

#[test]
#[should_panic(expected = "castle right K requires the king on e1")]
fn castle_rights_with_displaced_king() {
    let _ = setup("4k3/8/8/8/8/8/8/R2K3R w KQ - 0 1");
}

#[test]
#[should_panic(expected = "castle right K requires a rook on h1")]
fn castle_rights_without_kingside_rook() {
    let _ = setup("4k3/8/8/8/8/8/8/R3K3 w KQ - 0 1");
}

#[test]
#[should_panic(expected = "castle right q requires a rook on a8")]
fn castle_rights_without_black_queenside_rook() {
    let _ = setup("1r2k3/8/8/8/8/8/8/4K3 w q - 0 1");
}

#[test]
#[should_panic(expected = "expected en passant square to be on rank 6, got 3")]
fn wrong_en_passant_rank() {
    let _ = setup("rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e3 0 1");
}

#[test]
#[should_panic(expected = "en passant square is not behind a just-pushed pawn")]
fn en_passant_without_pushed_pawn() {
    let _ = setup("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq d3 0 1");
}
