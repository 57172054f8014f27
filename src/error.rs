//! Tempo Engine error type.
//!
//! Cancellation is not an error anywhere in the engine, it is the expected
//! exit of a time-boxed search. The only condition reported through this
//! type is a position with no legal moves at all, which the caller is
//! expected to have classified as game over before asking for a move.

use thiserror::Error;

/// Tempo Engine generic result type.
pub type Result<T> = std::result::Result<T, Error>;

/// A list specifying general errors for Tempo engine.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[non_exhaustive]
pub enum Error {
    /// The searched position has no legal moves, so no best move exists.
    #[error("searched position has no legal moves")]
    NoLegalMoves,
}
