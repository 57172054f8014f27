//! Iterative Deepening Search.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Instant;

use log::debug;

use crate::board::{Board, MoveGen};
use crate::coretypes::{Cp, PlyKind};
use crate::error::{Error, Result};
use crate::moveorder::pick_best_move;
use crate::search::{SearchResult, Searcher};

/// Searches the game tree at increasing depth until the cancellation flag
/// fires or the depth ceiling is reached, and returns the best move of the
/// deepest iteration that recorded one.
///
/// Each iteration runs a full-width negamax seeded with the best move found
/// so far as principal move. An iteration interrupted mid-way may still have
/// recorded an improving root move, which is promoted like a completed one;
/// everything else it computed is discarded.
///
/// If cancellation fires before any iteration records a move, the single
/// highest-ranked legal move is returned instead, so a position with at
/// least one legal move always yields a move. A position with none is the
/// caller's game-over condition and surfaces as [`Error::NoLegalMoves`].
pub fn ids<B: Board>(
    board: &mut B,
    stopper: Arc<AtomicBool>,
    max_depth: PlyKind,
) -> Result<SearchResult<B::Move>> {
    let instant = Instant::now();
    let player = board.side_to_move();
    let mut searcher: Searcher<B> = Searcher::new(stopper);
    let mut best: Option<(B::Move, Cp, PlyKind)> = None;

    for depth in 0..max_depth {
        searcher.start_iteration(depth as i32, best.map(|(mv, _, _)| mv));
        let score = searcher.negamax(board, depth as i32, -Cp::CHECKMATE, Cp::CHECKMATE);

        if let Some(mv) = searcher.best_root_move() {
            debug!("depth {depth} best {mv:?} score {score}");
            best = Some((mv, score, depth));
        }
        if searcher.stopped() {
            break;
        }
    }

    let stopped = searcher.stopped();
    match best {
        Some((best_move, score, depth)) => Ok(SearchResult {
            best_move,
            score,
            depth,
            nodes: searcher.nodes(),
            elapsed: instant.elapsed(),
            stopped,
            player,
        }),
        None => {
            // Cancelled before even one root child was scored. Fall back to
            // the ranker's pick over the full legal move list.
            let legal_moves = board.legal_moves(MoveGen::All);
            let best_move = pick_best_move(board, &legal_moves).ok_or(Error::NoLegalMoves)?;
            debug!("no iteration completed, falling back to ranked move {best_move:?}");
            Ok(SearchResult {
                best_move,
                score: Cp(0),
                depth: 0,
                nodes: searcher.nodes(),
                elapsed: instant.elapsed(),
                stopped,
                player,
            })
        }
    }
}
