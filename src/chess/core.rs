//! Board primitives commonly used within [`crate::chess`].

use std::{fmt, mem};

use anyhow::bail;

#[allow(missing_docs)]
pub const BOARD_WIDTH: u8 = 8;
#[allow(missing_docs)]
pub const BOARD_SIZE: u8 = BOARD_WIDTH * BOARD_WIDTH;

/// Represents a column (vertical row) of the chessboard. In chess notation, it
/// is normally represented with a lowercase letter.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum File {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl File {
    /// Iterates over files from A to H.
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> {
        (0..BOARD_WIDTH).map(|index| unsafe { mem::transmute::<u8, Self>(index) })
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", (b'a' + *self as u8) as char)
    }
}

impl TryFrom<char> for File {
    type Error = anyhow::Error;

    fn try_from(file: char) -> anyhow::Result<Self> {
        match file {
            'a'..='h' => Ok(unsafe { mem::transmute::<u8, Self>(file as u8 - b'a') }),
            _ => bail!("unknown file: expected within 'a'..='h', got '{file}'"),
        }
    }
}

impl TryFrom<u8> for File {
    type Error = anyhow::Error;

    fn try_from(column: u8) -> anyhow::Result<Self> {
        match column {
            0..=7 => Ok(unsafe { mem::transmute::<u8, Self>(column) }),
            _ => bail!("unknown file: expected within 0..BOARD_WIDTH, got {column}"),
        }
    }
}

/// Represents a horizontal row of the chessboard. In chess notation, it is
/// represented with a number. The implementation assumes zero-based values
/// (i.e. rank 1 would be 0).
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Rank {
    Rank1,
    Rank2,
    Rank3,
    Rank4,
    Rank5,
    Rank6,
    Rank7,
    Rank8,
}

impl Rank {
    /// Iterates over ranks from 1 to 8.
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> {
        (0..BOARD_WIDTH).map(|index| unsafe { mem::transmute::<u8, Self>(index) })
    }

    /// The rank the player's pieces start on.
    #[must_use]
    pub const fn backrank(player: Color) -> Self {
        match player {
            Color::White => Self::Rank1,
            Color::Black => Self::Rank8,
        }
    }

    /// The rank the player's pawns start on.
    #[must_use]
    pub const fn pawns_starting(player: Color) -> Self {
        match player {
            Color::White => Self::Rank2,
            Color::Black => Self::Rank7,
        }
    }
}

impl TryFrom<char> for Rank {
    type Error = anyhow::Error;

    fn try_from(rank: char) -> anyhow::Result<Self> {
        match rank {
            '1'..='8' => Ok(unsafe { mem::transmute::<u8, Self>(rank as u8 - b'1') }),
            _ => bail!("unknown rank: expected within '1'..='8', got '{rank}'"),
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = anyhow::Error;

    fn try_from(row: u8) -> anyhow::Result<Self> {
        match row {
            0..=7 => Ok(unsafe { mem::transmute::<u8, Self>(row) }),
            _ => bail!("unknown rank: expected within 0..BOARD_WIDTH, got {row}"),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", *self as u8 + 1)
    }
}

/// Board squares: from left to right, from bottom to the top:
///
/// ```
/// use medusa::chess::core::Square;
///
/// assert_eq!(Square::A1 as u8, 0);
/// assert_eq!(Square::E1 as u8, 4);
/// assert_eq!(Square::H1 as u8, 7);
/// assert_eq!(Square::A4 as u8, 8 * 3);
/// assert_eq!(Square::H8 as u8, 63);
/// ```
///
/// Square is a compact representation using only one byte.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[rustfmt::skip]
#[allow(missing_docs)]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

impl Square {
    /// Connects file (column) and rank (row) to form a full square.
    #[must_use]
    pub fn new(file: File, rank: Rank) -> Self {
        unsafe { mem::transmute(file as u8 + (rank as u8) * BOARD_WIDTH) }
    }

    /// Returns file (column) on which the square is located.
    #[must_use]
    pub fn file(self) -> File {
        unsafe { mem::transmute(self as u8 % BOARD_WIDTH) }
    }

    /// Returns rank (row) on which the square is located.
    #[must_use]
    pub fn rank(self) -> Rank {
        unsafe { mem::transmute(self as u8 / BOARD_WIDTH) }
    }

    /// Iterates over all squares, from A1 to H8.
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> {
        (0..BOARD_SIZE).map(|index| unsafe { mem::transmute::<u8, Self>(index) })
    }

    /// Returns the square shifted one step in `direction`, or `None` if that
    /// would leave the board.
    #[must_use]
    pub(in crate::chess) fn shift(self, direction: Direction) -> Option<Self> {
        match direction {
            Direction::UpLeft | Direction::Left | Direction::DownLeft => {
                if self.file() == File::A {
                    return None;
                }
            },
            Direction::UpRight | Direction::Right | Direction::DownRight => {
                if self.file() == File::H {
                    return None;
                }
            },
            _ => (),
        }
        let shift: i8 = match direction {
            Direction::UpLeft => BOARD_WIDTH as i8 - 1,
            Direction::Up => BOARD_WIDTH as i8,
            Direction::UpRight => BOARD_WIDTH as i8 + 1,
            Direction::Right => 1,
            Direction::Left => -1,
            Direction::DownLeft => -(BOARD_WIDTH as i8 + 1),
            Direction::Down => -(BOARD_WIDTH as i8),
            Direction::DownRight => -(BOARD_WIDTH as i8 - 1),
        };
        let candidate = self as i8 + shift;
        if candidate < 0 {
            return None;
        }
        match Self::try_from(candidate as u8) {
            Ok(square) => Some(square),
            Err(_) => None,
        }
    }
}

impl TryFrom<u8> for Square {
    type Error = anyhow::Error;

    /// Creates a square given its position on the board.
    ///
    /// # Errors
    ///
    /// If given square index is outside 0..[`BOARD_SIZE`] range.
    fn try_from(square_index: u8) -> anyhow::Result<Self> {
        const MAX_INDEX: u8 = BOARD_SIZE - 1;
        match square_index {
            0..=MAX_INDEX => Ok(unsafe { mem::transmute::<u8, Self>(square_index) }),
            _ => bail!("unknown square index: needs to be in 0..BOARD_SIZE, got {square_index}"),
        }
    }
}

impl TryFrom<&str> for Square {
    type Error = anyhow::Error;

    fn try_from(square: &str) -> anyhow::Result<Self> {
        let mut chars = square.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => Ok(Self::new(file.try_into()?, rank.try_into()?)),
            _ => bail!("unknown square: should be two chars, got '{square}'"),
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

/// A standard game of chess is played between two players: White (having the
/// advantage of the first turn) and Black.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

impl std::ops::Not for Color {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }
}

impl TryFrom<&str> for Color {
    type Error = anyhow::Error;

    fn try_from(color: &str) -> anyhow::Result<Self> {
        match color {
            "w" => Ok(Self::White),
            "b" => Ok(Self::Black),
            _ => bail!("unknown color: expected 'w' or 'b', got '{color}'"),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::White => 'w',
                Self::Black => 'b',
            }
        )
    }
}

/// Standard [chess pieces].
///
/// [chess pieces]: https://en.wikipedia.org/wiki/Chess_piece
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    /// Uppercase letter used for the piece in Standard Algebraic Notation.
    /// Pawns have no letter.
    #[must_use]
    pub const fn algebraic_letter(self) -> Option<char> {
        match self {
            Self::King => Some('K'),
            Self::Queen => Some('Q'),
            Self::Rook => Some('R'),
            Self::Bishop => Some('B'),
            Self::Knight => Some('N'),
            Self::Pawn => None,
        }
    }
}

impl TryFrom<char> for PieceKind {
    type Error = anyhow::Error;

    /// Parses the uppercase SAN letter of a piece (`P` is accepted for
    /// completeness even though SAN leaves it out).
    fn try_from(letter: char) -> anyhow::Result<Self> {
        match letter {
            'K' => Ok(Self::King),
            'Q' => Ok(Self::Queen),
            'R' => Ok(Self::Rook),
            'B' => Ok(Self::Bishop),
            'N' => Ok(Self::Knight),
            'P' => Ok(Self::Pawn),
            _ => bail!("unknown piece letter: expected within \"KQRBNP\", got '{letter}'"),
        }
    }
}

/// Represents a specific piece owned by a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    #[allow(missing_docs)]
    pub owner: Color,
    #[allow(missing_docs)]
    pub kind: PieceKind,
}

impl Piece {
    /// Algebraic notation symbol used in FEN. Uppercase for white, lowercase
    /// for black.
    pub(in crate::chess) fn algebraic_symbol(&self) -> char {
        let result = match self.kind {
            PieceKind::King => 'k',
            PieceKind::Queen => 'q',
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            PieceKind::Pawn => 'p',
        };
        match self.owner {
            Color::White => result.to_ascii_uppercase(),
            Color::Black => result,
        }
    }
}

impl TryFrom<char> for Piece {
    type Error = anyhow::Error;

    fn try_from(symbol: char) -> anyhow::Result<Self> {
        let owner = if symbol.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match symbol.to_ascii_lowercase() {
            'k' => PieceKind::King,
            'q' => PieceKind::Queen,
            'r' => PieceKind::Rook,
            'b' => PieceKind::Bishop,
            'n' => PieceKind::Knight,
            'p' => PieceKind::Pawn,
            _ => bail!("unknown piece symbol: expected within \"KQRBNPkqrbnp\", got '{symbol}'"),
        };
        Ok(Self { owner, kind })
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.algebraic_symbol())
    }
}

/// A piece a pawn promotes to when it reaches the opponent's back rank.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Promotion {
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl Promotion {
    /// All four promotion targets in the order moves are generated.
    pub const ALL: [Self; 4] = [Self::Queen, Self::Rook, Self::Bishop, Self::Knight];

    #[allow(missing_docs)]
    #[must_use]
    pub const fn kind(self) -> PieceKind {
        match self {
            Self::Queen => PieceKind::Queen,
            Self::Rook => PieceKind::Rook,
            Self::Bishop => PieceKind::Bishop,
            Self::Knight => PieceKind::Knight,
        }
    }

    /// Lowercase letter used in UCI coordinate notation (`e7e8q`).
    #[must_use]
    pub const fn uci_letter(self) -> char {
        match self {
            Self::Queen => 'q',
            Self::Rook => 'r',
            Self::Bishop => 'b',
            Self::Knight => 'n',
        }
    }
}

impl TryFrom<char> for Promotion {
    type Error = anyhow::Error;

    fn try_from(letter: char) -> anyhow::Result<Self> {
        match letter.to_ascii_lowercase() {
            'q' => Ok(Self::Queen),
            'r' => Ok(Self::Rook),
            'b' => Ok(Self::Bishop),
            'n' => Ok(Self::Knight),
            _ => bail!("unknown promotion: expected within \"qrbn\", got '{letter}'"),
        }
    }
}

bitflags::bitflags! {
    /// Track the ability to [castle] each side (kingside is often referred to
    /// as O-O or OO, queenside -- O-O-O or OOO). When the king moves, the
    /// player loses the ability to castle both sides, when a rook moves, the
    /// player loses the ability to castle its corresponding side.
    ///
    /// [castle]: https://www.chessprogramming.org/Castling
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct CastleRights: u8 {
        #[allow(missing_docs)]
        const WHITE_SHORT = 0b0001;
        #[allow(missing_docs)]
        const WHITE_LONG = 0b0010;
        #[allow(missing_docs)]
        const BLACK_SHORT = 0b0100;
        #[allow(missing_docs)]
        const BLACK_LONG = 0b1000;
    }
}

impl TryFrom<&str> for CastleRights {
    type Error = anyhow::Error;

    /// Parses the castling ability FEN chunk (`KQkq`, any subset, or `-`).
    fn try_from(fen: &str) -> anyhow::Result<Self> {
        if fen == "-" {
            return Ok(Self::empty());
        }
        if fen.is_empty() || fen.len() > 4 {
            bail!("unknown castling rights: expected 1..=4 symbols or '-', got '{fen}'");
        }
        let mut result = Self::empty();
        for symbol in fen.chars() {
            let flag = match symbol {
                'K' => Self::WHITE_SHORT,
                'Q' => Self::WHITE_LONG,
                'k' => Self::BLACK_SHORT,
                'q' => Self::BLACK_LONG,
                _ => bail!("unknown castling rights symbol: got '{symbol}'"),
            };
            if result.contains(flag) {
                bail!("duplicate castling rights symbol: '{symbol}'");
            }
            result |= flag;
        }
        Ok(result)
    }
}

impl fmt::Display for CastleRights {
    /// Prints castling rights of both sides in the FEN format.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        for (flag, symbol) in [
            (Self::WHITE_SHORT, 'K'),
            (Self::WHITE_LONG, 'Q'),
            (Self::BLACK_SHORT, 'k'),
            (Self::BLACK_LONG, 'q'),
        ] {
            if self.contains(flag) {
                write!(f, "{symbol}")?;
            }
        }
        Ok(())
    }
}

/// Directions on the board from the perspective of the White player: "up"
/// means towards rank 8.
#[derive(Copy, Clone, Debug)]
#[allow(missing_docs)]
pub(in crate::chess) enum Direction {
    UpLeft,
    Up,
    UpRight,
    Right,
    Left,
    DownLeft,
    Down,
    DownRight,
}

impl Direction {
    pub(in crate::chess) const ORTHOGONAL: [Self; 4] =
        [Self::Up, Self::Down, Self::Left, Self::Right];
    pub(in crate::chess) const DIAGONAL: [Self; 4] =
        [Self::UpLeft, Self::UpRight, Self::DownLeft, Self::DownRight];
}

/// What a move does to the board beyond relocating the moving piece. Needed
/// to apply and render the move without re-deriving its effects.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveKind {
    Regular,
    Capture,
    DoublePush,
    EnPassant,
    CastleShort,
    CastleLong,
    Promotion(Promotion),
    CapturePromotion(Promotion),
}

/// A move of a single piece from one square to another. Castling is encoded
/// as the king's two-square move.
///
/// The Standard Algebraic form of a move depends on the position it is played
/// in and is produced by [`crate::chess::notation`]; `Move` itself only
/// renders the position-independent UCI coordinate form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    from: Square,
    to: Square,
    kind: MoveKind,
}

impl Move {
    #[allow(missing_docs)]
    #[must_use]
    pub const fn new(from: Square, to: Square, kind: MoveKind) -> Self {
        Self { from, to, kind }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn from(&self) -> Square {
        self.from
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn to(&self) -> Square {
        self.to
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn kind(&self) -> MoveKind {
        self.kind
    }

    /// Returns the piece the pawn promotes to, if the move is a promotion.
    #[must_use]
    pub const fn promotion(&self) -> Option<Promotion> {
        match self.kind {
            MoveKind::Promotion(promotion) | MoveKind::CapturePromotion(promotion) => {
                Some(promotion)
            },
            _ => None,
        }
    }

    /// Returns true if the move takes an opponent's piece (including en
    /// passant).
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        matches!(
            self.kind,
            MoveKind::Capture | MoveKind::EnPassant | MoveKind::CapturePromotion(_)
        )
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn is_castle(&self) -> bool {
        matches!(self.kind, MoveKind::CastleShort | MoveKind::CastleLong)
    }
}

impl fmt::Display for Move {
    /// Formats the move in UCI coordinate notation (`e2e4`, `e7e8q`; castling
    /// is the king move, e.g. `e1g1`).
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promotion) = self.promotion() {
            write!(f, "{}", promotion.uci_letter())?;
        }
        Ok(())
    }
}

/// Moves are stored on the stack: positions can't have more than 256 legal
/// or candidate moves.
pub type MoveList = arrayvec::ArrayVec<Move, 256>;

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn rank() {
        assert_eq!(
            ('1'..='9')
                .filter_map(|ch| Rank::try_from(ch).ok())
                .collect::<Vec<Rank>>(),
            Rank::iter().collect::<Vec<Rank>>()
        );
        assert!(Rank::try_from('0').is_err());
        assert!(Rank::try_from(BOARD_WIDTH).is_err());
        assert_eq!(Rank::Rank4.to_string(), "4");
    }

    #[test]
    fn file() {
        assert_eq!(
            ('a'..='i')
                .filter_map(|ch| File::try_from(ch).ok())
                .collect::<Vec<File>>(),
            File::iter().collect::<Vec<File>>()
        );
        assert!(File::try_from('i').is_err());
        assert!(File::try_from(BOARD_WIDTH).is_err());
        assert_eq!(File::C.to_string(), "c");
    }

    #[test]
    fn square() {
        assert_eq!(Square::new(File::E, Rank::Rank4), Square::E4);
        assert_eq!(Square::E4.file(), File::E);
        assert_eq!(Square::E4.rank(), Rank::Rank4);
        assert_eq!(Square::try_from("h8").unwrap(), Square::H8);
        assert_eq!(Square::try_from("a1").unwrap(), Square::A1);
        assert!(Square::try_from("a9").is_err());
        assert!(Square::try_from("i1").is_err());
        assert!(Square::try_from("a").is_err());
        assert!(Square::try_from("a1x").is_err());
        assert!(Square::try_from(BOARD_SIZE).is_err());
        assert_eq!(Square::B7.to_string(), "b7");
    }

    #[test]
    fn square_size() {
        assert_eq!(std::mem::size_of::<Square>(), 1);
        // Niche optimization keeps the mailbox board at one byte per slot.
        assert_eq!(
            std::mem::size_of::<Option<Piece>>(),
            std::mem::size_of::<Piece>()
        );
    }

    #[test]
    fn shift_within_board() {
        let square = Square::E4;
        assert_eq!(square.shift(Direction::Up), Some(Square::E5));
        assert_eq!(square.shift(Direction::Down), Some(Square::E3));
        assert_eq!(square.shift(Direction::Left), Some(Square::D4));
        assert_eq!(square.shift(Direction::Right), Some(Square::F4));
        assert_eq!(square.shift(Direction::UpLeft), Some(Square::D5));
        assert_eq!(square.shift(Direction::UpRight), Some(Square::F5));
        assert_eq!(square.shift(Direction::DownLeft), Some(Square::D3));
        assert_eq!(square.shift(Direction::DownRight), Some(Square::F3));
    }

    #[test]
    fn shift_off_board() {
        for direction in [Direction::Left, Direction::UpLeft, Direction::DownLeft] {
            assert_eq!(Square::A4.shift(direction), None);
        }
        for direction in [Direction::Right, Direction::UpRight, Direction::DownRight] {
            assert_eq!(Square::H4.shift(direction), None);
        }
        for direction in [Direction::Down, Direction::DownLeft, Direction::DownRight] {
            assert_eq!(Square::E1.shift(direction), None);
        }
        for direction in [Direction::Up, Direction::UpLeft, Direction::UpRight] {
            assert_eq!(Square::E8.shift(direction), None);
        }
        assert_eq!(Square::A1.shift(Direction::Down), None);
        assert_eq!(Square::H8.shift(Direction::UpRight), None);
    }

    #[test]
    fn castle_rights() {
        assert_eq!(CastleRights::try_from("KQkq").unwrap(), CastleRights::all());
        assert_eq!(CastleRights::try_from("-").unwrap(), CastleRights::empty());
        assert_eq!(
            CastleRights::try_from("Kq").unwrap(),
            CastleRights::WHITE_SHORT | CastleRights::BLACK_LONG
        );
        assert!(CastleRights::try_from("").is_err());
        assert!(CastleRights::try_from("KQkqK").is_err());
        assert!(CastleRights::try_from("KK").is_err());
        assert!(CastleRights::try_from("x").is_err());

        assert_eq!(CastleRights::all().to_string(), "KQkq");
        assert_eq!(CastleRights::empty().to_string(), "-");
        assert_eq!(
            (CastleRights::WHITE_LONG | CastleRights::BLACK_SHORT).to_string(),
            "Qk"
        );
    }

    #[test]
    fn move_display() {
        assert_eq!(
            Move::new(Square::E2, Square::E4, MoveKind::DoublePush).to_string(),
            "e2e4"
        );
        assert_eq!(
            Move::new(Square::E7, Square::E8, MoveKind::Promotion(Promotion::Queen)).to_string(),
            "e7e8q"
        );
        assert_eq!(
            Move::new(
                Square::D7,
                Square::C8,
                MoveKind::CapturePromotion(Promotion::Knight)
            )
            .to_string(),
            "d7c8n"
        );
        assert_eq!(
            Move::new(Square::E1, Square::G1, MoveKind::CastleShort).to_string(),
            "e1g1"
        );
    }

    #[test]
    fn piece_symbols() {
        assert_eq!(
            Piece::try_from('N').unwrap(),
            Piece {
                owner: Color::White,
                kind: PieceKind::Knight
            }
        );
        assert_eq!(
            Piece::try_from('p').unwrap(),
            Piece {
                owner: Color::Black,
                kind: PieceKind::Pawn
            }
        );
        assert!(Piece::try_from('x').is_err());
        assert_eq!(
            Piece {
                owner: Color::Black,
                kind: PieceKind::Queen
            }
            .to_string(),
            "q"
        );
    }
}
