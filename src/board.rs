//! Capability interface to an external rules engine.
//!
//! The engine does not represent chess positions itself. It searches any
//! state that can generate its legal moves, apply and revert them, and
//! answer a small set of queries. A caller plugs a rules engine in by
//! implementing [`Board`] for its position type and [`BoardMove`] for its
//! move type; a scripted test double satisfies the same contract.
//!
//! The position is owned by the caller. The engine only ever mutates it
//! through strictly nested, balanced [`Board::make_move`]/[`Board::undo_move`]
//! pairs, so the state observed after any search call is identical to the
//! state before it.

use std::fmt::Debug;

use arrayvec::ArrayVec;

use crate::coretypes::{Color, PieceKind, Square, MAX_MOVES, MAX_PIECES};

/// Fixed-capacity container for the legal moves of a single position.
pub type MoveList<M> = ArrayVec<M, MAX_MOVES>;

/// Fixed-capacity container for the squares of one piece kind and color.
pub type SquareList = ArrayVec<Square, MAX_PIECES>;

/// Mode flag for legal move generation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MoveGen {
    /// Every legal move.
    All,
    /// Only tactically forcing moves (captures, promotions), used at search
    /// leaves to avoid misjudging positions mid-exchange.
    Noisy,
}

/// Attributes of an opaque move value produced by a rules engine.
///
/// Moves are compared for equality to recognize a principal move, so two
/// values describing the same move must compare equal.
pub trait BoardMove: Copy + Eq + Debug {
    /// Square the moving piece starts on.
    fn origin(&self) -> Square;

    /// Square the moving piece lands on.
    fn destination(&self) -> Square;

    /// Kind of the piece being moved.
    fn moved_kind(&self) -> PieceKind;

    /// Kind of the captured piece, or None for a quiet move.
    fn captured_kind(&self) -> Option<PieceKind>;

    /// Kind the pawn promotes to, or None.
    fn promoted_kind(&self) -> Option<PieceKind>;

    /// True if this move is a castling move.
    fn is_castle(&self) -> bool;

    fn is_capture(&self) -> bool {
        self.captured_kind().is_some()
    }

    fn is_promotion(&self) -> bool {
        self.promoted_kind().is_some()
    }
}

/// Queries and mutations the engine requires from a rules engine.
pub trait Board {
    type Move: BoardMove;

    /// The player whose turn it is.
    fn side_to_move(&self) -> Color;

    /// True if the side to move is checkmated.
    fn is_checkmate(&self) -> bool;

    /// True if the position is drawn, by whatever rules the engine applies
    /// (stalemate, repetition, fifty-move, insufficient material).
    fn is_draw(&self) -> bool;

    /// True if `square` is attacked by any piece of the side not to move.
    fn is_attacked_by_opponent(&self, square: Square) -> bool;

    /// Generates legal moves for the side to move. Generation order must be
    /// deterministic for a given position, it is the tie-break order of the
    /// move ranker.
    fn legal_moves(&self, movegen: MoveGen) -> MoveList<Self::Move>;

    /// Applies a move. Must be reverted with [`Board::undo_move`] before the
    /// enclosing search call returns.
    fn make_move(&mut self, mv: Self::Move);

    /// Reverts the most recent unreverted [`Board::make_move`].
    fn undo_move(&mut self, mv: Self::Move);

    /// Squares holding pieces of the given kind and color, in deterministic
    /// order.
    fn pieces(&self, color: Color, kind: PieceKind) -> SquareList;

    /// Square of the given side's king.
    fn king_square(&self, color: Color) -> Square;
}
