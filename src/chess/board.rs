//! Mailbox board representation: piece placement for all 64 squares.
//!
//! The placement is deliberately small (64 bytes thanks to the niche
//! optimization of [`Option<Piece>`]) so that positions can be copied freely
//! by the search and snapshotted by the game history.

use std::fmt::{self, Write};

use anyhow::bail;

use crate::chess::core::{
    Color, File, Piece, PieceKind, Rank, Square, BOARD_SIZE, BOARD_WIDTH,
};

/// Piece placement of a chess position: which piece, if any, stands on each
/// square. All other state (side to move, castling, clocks) lives in
/// [`crate::chess::position::Position`].
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; BOARD_SIZE as usize],
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            squares: [None; BOARD_SIZE as usize],
        }
    }

    /// Creates the piece placement of the standard chess starting position.
    #[must_use]
    pub fn starting() -> Self {
        const BACKRANK: [PieceKind; BOARD_WIDTH as usize] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        let mut board = Self::empty();
        for (file, kind) in File::iter().zip(BACKRANK) {
            for owner in [Color::White, Color::Black] {
                board.set(
                    Square::new(file, Rank::backrank(owner)),
                    Piece { owner, kind },
                );
                board.set(
                    Square::new(file, Rank::pawns_starting(owner)),
                    Piece {
                        owner,
                        kind: PieceKind::Pawn,
                    },
                );
            }
        }
        board
    }

    /// Returns the piece standing on `square`, if any.
    #[must_use]
    pub const fn at(&self, square: Square) -> Option<Piece> {
        self.squares[square as usize]
    }

    pub(in crate::chess) fn set(&mut self, square: Square, piece: Piece) {
        self.squares[square as usize] = Some(piece);
    }

    pub(in crate::chess) fn clear(&mut self, square: Square) {
        self.squares[square as usize] = None;
    }

    /// Locates the king of the given player. There is exactly one king on any
    /// validated board, so the scan is cheap and infallible for positions
    /// produced by this crate.
    #[must_use]
    pub fn king(&self, player: Color) -> Option<Square> {
        Square::iter().find(|square| {
            self.at(*square)
                == Some(Piece {
                    owner: player,
                    kind: PieceKind::King,
                })
        })
    }

    /// Counts pieces of the given kind and owner.
    #[must_use]
    pub fn count(&self, player: Color, kind: PieceKind) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|piece| piece.owner == player && piece.kind == kind)
            .count()
    }

    /// Parses the piece placement FEN chunk (ranks 8 to 1, `/`-separated,
    /// digits compressing runs of empty squares).
    pub(in crate::chess) fn from_fen_placement(placement: &str) -> anyhow::Result<Self> {
        let mut board = Self::empty();
        let mut rank_id = 8;
        for rank_fen in placement.split('/') {
            if rank_id == 0 {
                bail!("expected 8 ranks, got {placement}");
            }
            rank_id -= 1;
            let rank = Rank::try_from(rank_id)?;
            let mut file: u8 = 0;
            for symbol in rank_fen.chars() {
                if file >= BOARD_WIDTH {
                    bail!("rank {rank} is longer than {BOARD_WIDTH} squares: {rank_fen}");
                }
                match symbol {
                    '0' => bail!("empty square run can not be 0"),
                    '1'..='8' => {
                        file += symbol as u8 - b'0';
                        continue;
                    },
                    _ => (),
                }
                board.set(Square::new(file.try_into()?, rank), symbol.try_into()?);
                file += 1;
            }
            if file != BOARD_WIDTH {
                bail!("rank size should be exactly {BOARD_WIDTH}, got {rank_fen} of length {file}");
            }
        }
        if rank_id != 0 {
            bail!("there should be 8 ranks, got {placement}");
        }
        Ok(board)
    }

    /// Writes the piece placement FEN chunk.
    pub(in crate::chess) fn write_fen_placement(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for rank in Rank::iter().rev() {
            let mut empty_squares = 0;
            for file in File::iter() {
                match self.at(Square::new(file, rank)) {
                    Some(piece) => {
                        if empty_squares != 0 {
                            write!(f, "{empty_squares}")?;
                            empty_squares = 0;
                        }
                        write!(f, "{piece}")?;
                    },
                    None => empty_squares += 1,
                }
            }
            if empty_squares != 0 {
                write!(f, "{empty_squares}")?;
            }
            if rank != Rank::Rank1 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    /// Dumps the board in a human readable format ('.' for an empty square,
    /// FEN algebraic symbol for a piece), rank 8 on top.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::iter().rev() {
            for file in File::iter() {
                match self.at(Square::new(file, rank)) {
                    Some(piece) => write!(f, "{piece}"),
                    None => f.write_char('.'),
                }?;
                if file != File::H {
                    f.write_char(' ')?;
                }
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn starting_placement() {
        let board = Board::starting();
        assert_eq!(
            format!("{board:?}"),
            "r n b q k b n r\n\
             p p p p p p p p\n\
             . . . . . . . .\n\
             . . . . . . . .\n\
             . . . . . . . .\n\
             . . . . . . . .\n\
             P P P P P P P P\n\
             R N B Q K B N R\n"
        );
        assert_eq!(board.king(Color::White), Some(Square::E1));
        assert_eq!(board.king(Color::Black), Some(Square::E8));
        assert_eq!(board.count(Color::White, PieceKind::Pawn), 8);
        assert_eq!(board.count(Color::Black, PieceKind::Rook), 2);
    }

    #[test]
    fn placement_roundtrip() {
        let placement = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";
        let board = Board::from_fen_placement(placement).unwrap();
        assert_eq!(board, Board::starting());
    }

    #[test]
    fn bad_placements() {
        assert!(Board::from_fen_placement("8/8/8/8/8/8/8").is_err());
        assert!(Board::from_fen_placement("9/8/8/8/8/8/8/8").is_err());
        assert!(Board::from_fen_placement("8/8/8/8/8/8/8/8/8").is_err());
        assert!(Board::from_fen_placement("x7/8/8/8/8/8/8/8").is_err());
        assert!(Board::from_fen_placement("08/8/8/8/8/8/8/8").is_err());
        assert!(Board::from_fen_placement("ppppppppp/8/8/8/8/8/8/8").is_err());
    }
}
