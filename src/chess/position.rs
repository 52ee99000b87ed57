//! Provides fully-specified chess position implementation: stores
//! information about the board and tracks the state of castling, en passant,
//! move clocks etc.
//!
//! The move generator and move making are also implemented here as the only
//! ways of producing and mutating a [`Position`].

use std::fmt::{self, Write};

use anyhow::{bail, Context};

use crate::chess::attacks::{self, KNIGHT_OFFSETS};
use crate::chess::board::Board;
use crate::chess::core::{
    CastleRights, Color, Direction, File, Move, MoveKind, MoveList, Piece, PieceKind, Promotion,
    Rank, Square,
};

/// A complete chess position: piece placement, side to move, castling
/// rights, en passant target and move clocks.
///
/// The structure is small and `Clone` is cheap: the search and the legality
/// filter copy positions instead of undoing moves, and
/// [`crate::chess::game::Game`] snapshots them for its history.
///
/// [`Position::from_fen`] is the only public way of constructing an arbitrary
/// position and it validates its input, so everything downstream (move
/// generation in particular) can rely on the state being sane: exactly one
/// king per side, no pawns on backranks, castling rights consistent with
/// king and rook placement.
#[derive(Clone, PartialEq, Eq)]
pub struct Position {
    board: Board,
    side_to_move: Color,
    castling: CastleRights,
    en_passant_square: Option<Square>,
    halfmove_clock: u8,
    fullmove_counter: u16,
}

impl Position {
    /// Creates the starting position of the standard chess.
    ///
    /// ```
    /// use medusa::chess::position::Position;
    ///
    /// assert_eq!(
    ///     &Position::starting().to_string(),
    ///     "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
    /// );
    /// ```
    #[must_use]
    pub fn starting() -> Self {
        Self {
            board: Board::starting(),
            side_to_move: Color::White,
            castling: CastleRights::all(),
            en_passant_square: None,
            halfmove_clock: 0,
            fullmove_counter: 1,
        }
    }

    /// The player to make the next move.
    #[must_use]
    pub const fn us(&self) -> Color {
        self.side_to_move
    }

    /// The player who waits for the next move.
    #[must_use]
    pub fn them(&self) -> Color {
        !self.us()
    }

    /// Returns the piece standing on `square`, if any.
    #[must_use]
    pub const fn at(&self, square: Square) -> Option<Piece> {
        self.board.at(square)
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn castle_rights(&self) -> CastleRights {
        self.castling
    }

    /// Number of plies since the last capture or pawn move.
    #[must_use]
    pub const fn halfmove_clock(&self) -> u8 {
        self.halfmove_clock
    }

    /// Number of the next full move, starting at 1.
    #[must_use]
    pub const fn fullmove_counter(&self) -> u16 {
        self.fullmove_counter
    }

    /// The square a pawn just skipped with a two-square advance, if the last
    /// move was one.
    #[must_use]
    pub const fn en_passant_square(&self) -> Option<Square> {
        self.en_passant_square
    }

    /// Number of plies played since the start of the game, derived from the
    /// move counter so that positions loaded from FEN are counted from move
    /// one, not from the moment of loading.
    #[must_use]
    pub fn plies_played(&self) -> u32 {
        u32::from(self.fullmove_counter - 1) * 2
            + match self.side_to_move {
                Color::White => 0,
                Color::Black => 1,
            }
    }

    /// Parses board from Forsyth-Edwards Notation and checks its correctness.
    /// The parser accepts full FEN and trimmed FEN (first 4 parts; the clocks
    /// default to "0 1").
    ///
    /// FEN ::=
    ///       Piece Placement
    ///   ' ' Side to move
    ///   ' ' Castling ability
    ///   ' ' En passant target square
    ///   ' ' Halfmove clock
    ///   ' ' Fullmove counter
    ///
    /// # Errors
    ///
    /// Malformed input or an illegal position (missing kings, pawns on
    /// backranks, castling rights without the king/rook on their home
    /// squares, an impossible en passant target, the resting side left in
    /// check) is rejected.
    pub fn from_fen(input: &str) -> anyhow::Result<Self> {
        let mut parts = input.split(' ');
        let board = match parts.next() {
            Some(placement) => Board::from_fen_placement(placement)?,
            None => bail!("missing pieces placement"),
        };
        let side_to_move = match parts.next() {
            Some(value) => value.try_into()?,
            None => bail!("missing side to move"),
        };
        let castling = match parts.next() {
            Some(value) => value.try_into()?,
            None => bail!("missing castling rights"),
        };
        let en_passant_square = match parts.next() {
            Some("-") => None,
            Some(value) => Some(value.try_into()?),
            None => bail!("missing en passant square"),
        };
        let halfmove_clock = match parts.next() {
            Some(value) => Some(
                value
                    .parse::<u8>()
                    .with_context(|| format!("halfmove clock can not be parsed: {value}"))?,
            ),
            None => None,
        };
        let fullmove_counter = match parts.next() {
            Some(value) => match value
                .parse::<u16>()
                .with_context(|| format!("fullmove counter can not be parsed: {value}"))?
            {
                0 => bail!("fullmove counter can not be 0"),
                counter => Some(counter),
            },
            None => match halfmove_clock {
                Some(_) => bail!("if halfmove clock is present, fullmove counter must be present"),
                None => None,
            },
        };
        if parts.next().is_some() {
            bail!("trailing symbols after the fullmove counter");
        }

        let result = Self {
            board,
            side_to_move,
            castling,
            en_passant_square,
            halfmove_clock: halfmove_clock.unwrap_or(0),
            fullmove_counter: fullmove_counter.unwrap_or(1),
        };
        match validate(&result) {
            Ok(()) => Ok(result),
            Err(e) => Err(e.context("illegal position")),
        }
    }

    /// Checks whether the position is valid, i.e. could have been reached in
    /// a legal game. Only positions produced by tests or debug assertions go
    /// through this; [`Position::from_fen`] already validates its output.
    #[must_use]
    pub(crate) fn is_legal(&self) -> bool {
        validate(self).is_ok()
    }

    /// Checks whether the king of `player` is currently attacked.
    #[must_use]
    pub fn is_in_check(&self, player: Color) -> bool {
        match self.board.king(player) {
            Some(king) => attacks::is_attacked(&self.board, king, !player),
            None => false,
        }
    }

    /// Checks whether the side to move is in check.
    #[must_use]
    pub fn in_check(&self) -> bool {
        self.is_in_check(self.us())
    }

    /// Calculates the list of legal moves (i.e. the moves that do not leave
    /// our king in check).
    ///
    /// Candidate moves are generated per piece movement rules and then
    /// filtered by applying each one to a scratch copy of the position:
    /// whatever leaves the mover's king attacked is discarded. The returned
    /// order (castles, then queens down to pawns, king last) front-loads the
    /// moves that tend to cause earlier alpha-beta cutoffs.
    #[must_use]
    pub fn generate_moves(&self) -> MoveList {
        debug_assert!(self.is_legal());
        let mut candidates = MoveList::new();
        self.generate_castle_moves(&mut candidates);
        for kind in [
            PieceKind::Queen,
            PieceKind::Rook,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Pawn,
            PieceKind::King,
        ] {
            for from in Square::iter() {
                if self.at(from)
                    != Some(Piece {
                        owner: self.us(),
                        kind,
                    })
                {
                    continue;
                }
                match kind {
                    PieceKind::Queen => {
                        self.generate_slider_moves(from, &Direction::ORTHOGONAL, &mut candidates);
                        self.generate_slider_moves(from, &Direction::DIAGONAL, &mut candidates);
                    },
                    PieceKind::Rook => {
                        self.generate_slider_moves(from, &Direction::ORTHOGONAL, &mut candidates);
                    },
                    PieceKind::Bishop => {
                        self.generate_slider_moves(from, &Direction::DIAGONAL, &mut candidates);
                    },
                    PieceKind::Knight => self.generate_knight_moves(from, &mut candidates),
                    PieceKind::Pawn => self.generate_pawn_moves(from, &mut candidates),
                    PieceKind::King => self.generate_king_moves(from, &mut candidates),
                }
            }
        }

        let mut moves = MoveList::new();
        for candidate in candidates {
            let mut next = self.clone();
            next.make_move(&candidate);
            if !next.is_in_check(self.us()) {
                moves.push(candidate);
            }
        }
        moves
    }

    fn push_step(&self, from: Square, to: Square, moves: &mut MoveList) {
        match self.at(to) {
            None => moves.push(Move::new(from, to, MoveKind::Regular)),
            Some(piece) if piece.owner == self.them() => {
                moves.push(Move::new(from, to, MoveKind::Capture));
            },
            Some(_) => (),
        }
    }

    fn generate_slider_moves(
        &self,
        from: Square,
        directions: &[Direction],
        moves: &mut MoveList,
    ) {
        for &direction in directions {
            let mut current = from;
            while let Some(to) = current.shift(direction) {
                match self.at(to) {
                    None => moves.push(Move::new(from, to, MoveKind::Regular)),
                    Some(piece) => {
                        if piece.owner == self.them() {
                            moves.push(Move::new(from, to, MoveKind::Capture));
                        }
                        break;
                    },
                }
                current = to;
            }
        }
    }

    fn generate_knight_moves(&self, from: Square, moves: &mut MoveList) {
        for (file_delta, rank_delta) in KNIGHT_OFFSETS {
            if let Some(to) = attacks::offset(from, file_delta, rank_delta) {
                self.push_step(from, to, moves);
            }
        }
    }

    fn generate_king_moves(&self, from: Square, moves: &mut MoveList) {
        for direction in [
            Direction::UpLeft,
            Direction::Up,
            Direction::UpRight,
            Direction::Right,
            Direction::Left,
            Direction::DownLeft,
            Direction::Down,
            Direction::DownRight,
        ] {
            if let Some(to) = from.shift(direction) {
                self.push_step(from, to, moves);
            }
        }
    }

    fn generate_pawn_moves(&self, from: Square, moves: &mut MoveList) {
        let (us, them) = (self.us(), self.them());
        let push = pawn_push_direction(us);
        let capture_directions = match us {
            Color::White => [Direction::UpLeft, Direction::UpRight],
            Color::Black => [Direction::DownLeft, Direction::DownRight],
        };
        let promotion_rank = Rank::backrank(them);

        for direction in capture_directions {
            let Some(to) = from.shift(direction) else {
                continue;
            };
            if Some(to) == self.en_passant_square {
                moves.push(Move::new(from, to, MoveKind::EnPassant));
                continue;
            }
            match self.at(to) {
                Some(piece) if piece.owner == them => {
                    if to.rank() == promotion_rank {
                        for promotion in Promotion::ALL {
                            moves.push(Move::new(
                                from,
                                to,
                                MoveKind::CapturePromotion(promotion),
                            ));
                        }
                    } else {
                        moves.push(Move::new(from, to, MoveKind::Capture));
                    }
                },
                _ => (),
            }
        }

        let Some(one_up) = from.shift(push) else {
            return;
        };
        if self.at(one_up).is_some() {
            return;
        }
        if one_up.rank() == promotion_rank {
            for promotion in Promotion::ALL {
                moves.push(Move::new(from, one_up, MoveKind::Promotion(promotion)));
            }
        } else {
            moves.push(Move::new(from, one_up, MoveKind::Regular));
        }
        if from.rank() == Rank::pawns_starting(us) {
            if let Some(two_up) = one_up.shift(push) {
                if self.at(two_up).is_none() {
                    moves.push(Move::new(from, two_up, MoveKind::DoublePush));
                }
            }
        }
    }

    /// Castling preconditions checked here: the matching right is set, the
    /// squares between king and rook are empty, the king is not currently in
    /// check and the square the king passes through is not attacked. The
    /// landing square is validated by the common legality filter like any
    /// other king move.
    fn generate_castle_moves(&self, moves: &mut MoveList) {
        let us = self.us();
        let (short, long) = match us {
            Color::White => (CastleRights::WHITE_SHORT, CastleRights::WHITE_LONG),
            Color::Black => (CastleRights::BLACK_SHORT, CastleRights::BLACK_LONG),
        };
        if !self.castling.intersects(short | long) || self.in_check() {
            return;
        }
        let backrank = Rank::backrank(us);
        let king = Square::new(File::E, backrank);
        let squares = |file| Square::new(file, backrank);
        if self.castling.contains(short)
            && self.at(squares(File::F)).is_none()
            && self.at(squares(File::G)).is_none()
            && !attacks::is_attacked(&self.board, squares(File::F), self.them())
        {
            moves.push(Move::new(king, squares(File::G), MoveKind::CastleShort));
        }
        if self.castling.contains(long)
            && self.at(squares(File::B)).is_none()
            && self.at(squares(File::C)).is_none()
            && self.at(squares(File::D)).is_none()
            && !attacks::is_attacked(&self.board, squares(File::D), self.them())
        {
            moves.push(Move::new(king, squares(File::C), MoveKind::CastleLong));
        }
    }

    /// Transitions to the next position by applying the move.
    ///
    /// The move must come from [`Position::generate_moves`] of this very
    /// position; applying anything else corrupts the state. External input
    /// goes through [`crate::chess::game::Game::make_move`], which validates
    /// first.
    pub fn make_move(&mut self, next_move: &Move) {
        let us = self.side_to_move;
        let moving = self
            .board
            .at(next_move.from())
            .expect("the move must start from an occupied square");
        debug_assert_eq!(moving.owner, us);

        // Reset on captures and pawn moves below.
        self.halfmove_clock += 1;
        if next_move.is_capture() || moving.kind == PieceKind::Pawn {
            self.halfmove_clock = 0;
        }

        self.update_castle_rights(next_move);
        self.en_passant_square = None;

        let backrank = Rank::backrank(us);
        match next_move.kind() {
            MoveKind::Regular | MoveKind::Capture => {
                self.board.clear(next_move.from());
                self.board.set(next_move.to(), moving);
            },
            MoveKind::DoublePush => {
                self.board.clear(next_move.from());
                self.board.set(next_move.to(), moving);
                self.en_passant_square = next_move.from().shift(pawn_push_direction(us));
            },
            MoveKind::EnPassant => {
                self.board.clear(next_move.from());
                self.board.set(next_move.to(), moving);
                // The captured pawn shares the mover's starting rank and the
                // destination file.
                self.board
                    .clear(Square::new(next_move.to().file(), next_move.from().rank()));
            },
            MoveKind::CastleShort => {
                self.board.clear(next_move.from());
                self.board.set(next_move.to(), moving);
                let rook = Square::new(File::H, backrank);
                let rook_piece = self.board.at(rook).expect("castling without a rook");
                self.board.clear(rook);
                self.board.set(Square::new(File::F, backrank), rook_piece);
            },
            MoveKind::CastleLong => {
                self.board.clear(next_move.from());
                self.board.set(next_move.to(), moving);
                let rook = Square::new(File::A, backrank);
                let rook_piece = self.board.at(rook).expect("castling without a rook");
                self.board.clear(rook);
                self.board.set(Square::new(File::D, backrank), rook_piece);
            },
            MoveKind::Promotion(promotion) | MoveKind::CapturePromotion(promotion) => {
                self.board.clear(next_move.from());
                self.board.set(
                    next_move.to(),
                    Piece {
                        owner: us,
                        kind: promotion.kind(),
                    },
                );
            },
        }

        if us == Color::Black {
            self.fullmove_counter += 1;
        }
        self.side_to_move = !us;
    }

    /// Any king move clears both rights of the moving side, a rook move from
    /// its home corner clears the matching right, and a capture landing on a
    /// home corner clears the matching right of the captured side.
    fn update_castle_rights(&mut self, next_move: &Move) {
        for square in [next_move.from(), next_move.to()] {
            let cleared = match square {
                Square::E1 => CastleRights::WHITE_SHORT | CastleRights::WHITE_LONG,
                Square::H1 => CastleRights::WHITE_SHORT,
                Square::A1 => CastleRights::WHITE_LONG,
                Square::E8 => CastleRights::BLACK_SHORT | CastleRights::BLACK_LONG,
                Square::H8 => CastleRights::BLACK_SHORT,
                Square::A8 => CastleRights::BLACK_LONG,
                _ => continue,
            };
            self.castling.remove(cleared);
        }
    }
}

impl TryFrom<&str> for Position {
    type Error = anyhow::Error;

    fn try_from(input: &str) -> anyhow::Result<Self> {
        let input = input.trim();
        for prefix in ["fen ", "epd "] {
            if let Some(stripped) = input.strip_prefix(prefix) {
                return Self::from_fen(stripped);
            }
        }
        Self::from_fen(input)
    }
}

impl fmt::Display for Position {
    /// Returns position representation in Forsyth-Edwards Notation (FEN).
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.board.write_fen_placement(f)?;
        write!(f, " {} ", self.side_to_move)?;
        write!(f, "{} ", self.castling)?;
        match self.en_passant_square {
            Some(square) => write!(f, "{square} "),
            None => write!(f, "- "),
        }?;
        write!(f, "{} {}", self.halfmove_clock, self.fullmove_counter)
    }
}

impl fmt::Debug for Position {
    /// Dumps the board in a human readable format ('.' for empty square, FEN
    /// algebraic symbol for piece).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board:")?;
        write!(f, "{:?}", self.board)?;
        f.write_char('\n')?;
        writeln!(f, "Player to move: {:?}", &self.side_to_move)?;
        writeln!(f, "Fullmove counter: {:?}", &self.fullmove_counter)?;
        writeln!(f, "En Passant: {:?}", &self.en_passant_square)?;
        writeln!(f, "Castling rights: {}", &self.castling)?;
        writeln!(f, "FEN: {}", &self)
    }
}

/// [Perft] (**per**formance **t**esting) is a technique for checking
/// correctness of move generation by traversing the tree of possible
/// positions (nodes) and calculating all the leaf nodes at certain depth.
///
/// [Perft]: https://www.chessprogramming.org/Perft
#[must_use]
pub fn perft(position: &Position, depth: u8) -> u64 {
    debug_assert!(position.is_legal());
    if depth == 0 {
        return 1;
    }
    if depth == 1 {
        return position.generate_moves().len() as u64;
    }
    let mut nodes = 0;
    for next_move in position.generate_moves() {
        let mut next_position = position.clone();
        next_position.make_move(&next_move);
        nodes += perft(&next_position, depth - 1);
    }
    nodes
}

pub(in crate::chess) const fn pawn_push_direction(player: Color) -> Direction {
    match player {
        Color::White => Direction::Up,
        Color::Black => Direction::Down,
    }
}

/// Checks if the position is "legal", i.e. if it can be reasoned about by
/// the engine. This employs a limited number of heuristics that filter out
/// the most obvious incorrect positions and prevents them from being
/// analyzed, setting up a barrier between untrusted input (UCI front-end,
/// user FEN) and the engine.
fn validate(position: &Position) -> anyhow::Result<()> {
    for player in [Color::White, Color::Black] {
        let kings = position.board.count(player, PieceKind::King);
        if kings != 1 {
            bail!("expected 1 {player:?} king, got {kings}");
        }
        let pawns = position.board.count(player, PieceKind::Pawn);
        if pawns > 8 {
            bail!("expected <= 8 {player:?} pawns, got {pawns}");
        }
    }
    for rank in [Rank::Rank1, Rank::Rank8] {
        for file in File::iter() {
            if let Some(piece) = position.board.at(Square::new(file, rank)) {
                if piece.kind == PieceKind::Pawn {
                    bail!("pawns can not be placed on backranks");
                }
            }
        }
    }
    // The resting side must not be left in check: the previous ply could not
    // have ended with the mover's own king attacked.
    if position.is_in_check(position.them()) {
        bail!("the side not to move can not be in check");
    }
    // A castle right survives only while the king and the matching rook sit
    // on their home squares.
    for (symbol, right, king, rook_home) in [
        ('K', CastleRights::WHITE_SHORT, Square::E1, Square::H1),
        ('Q', CastleRights::WHITE_LONG, Square::E1, Square::A1),
        ('k', CastleRights::BLACK_SHORT, Square::E8, Square::H8),
        ('q', CastleRights::BLACK_LONG, Square::E8, Square::A8),
    ] {
        if !position.castling.contains(right) {
            continue;
        }
        let owner = match king {
            Square::E1 => Color::White,
            _ => Color::Black,
        };
        if position.board.at(king)
            != Some(Piece {
                owner,
                kind: PieceKind::King,
            })
        {
            bail!("castle right {symbol} requires the king on {king}");
        }
        if position.board.at(rook_home)
            != Some(Piece {
                owner,
                kind: PieceKind::Rook,
            })
        {
            bail!("castle right {symbol} requires a rook on {rook_home}");
        }
    }
    if let Some(en_passant_square) = position.en_passant_square {
        let expected_rank = match position.side_to_move {
            Color::White => Rank::Rank6,
            Color::Black => Rank::Rank3,
        };
        if en_passant_square.rank() != expected_rank {
            bail!(
                "expected en passant square to be on rank {}, got {}",
                expected_rank as u8 + 1,
                en_passant_square.rank() as u8 + 1
            );
        }
        // A pawn that was just pushed by our opponent should be in front of
        // the en passant square.
        let pushed_pawn = en_passant_square
            .shift(pawn_push_direction(position.them()))
            .expect("en passant square can not be on a backrank");
        if position.board.at(pushed_pawn)
            != Some(Piece {
                owner: position.them(),
                kind: PieceKind::Pawn,
            })
        {
            bail!("en passant square is not behind a just-pushed pawn");
        }
    }
    Ok(())
}
