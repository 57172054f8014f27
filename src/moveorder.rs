//! Move Ordering
//!
//! Functions used for ordering a list of moves from best to worst,
//! or for picking the best move out of a list of moves.
//!
//! Move ordering is important for alpha-beta pruning performance.
//! If the best or good moves are searched early on in an alpha-beta search,
//! pruning occurs more frequently.
//!
//! Ratings are a cheap approximation built from move attributes alone, they
//! are never authoritative: the search still visits every move it does not
//! prune. The principal move, when one is known, is pinned to the front with
//! a sentinel rating so each iteration re-searches the previous best line
//! first.

use std::cmp::Reverse;

use crate::board::{Board, BoardMove, MoveList};
use crate::coretypes::{Cp, CpKind};
use crate::eval::table_delta;

/// Sentinel rating for the principal move, above any additive rating.
const PRINCIPAL_RATING: CpKind = Cp::CHECKMATE.0;
/// Bias for captures that win or break even on material.
const CAPTURE_WIN_BIAS: CpKind = 8_000_000;
/// Bias for captures that lose material onto a defended square. Still above
/// every quiet rating, bad captures are merely searched after good ones.
const CAPTURE_LOSE_BIAS: CpKind = 2_000_000;
const PROMOTE_BIAS: CpKind = 6_000_000;
const CASTLE_BIAS: CpKind = 1_000_000;
/// Penalty for walking a piece onto an attacked square without compensation.
const ATTACKED_PENALTY: CpKind = 50;

/// Rates a single move without searching it.
pub fn rate_move<B: Board>(board: &B, mv: B::Move, principal: Option<B::Move>) -> CpKind {
    if Some(mv) == principal {
        return PRINCIPAL_RATING;
    }

    let mut rating = 0;
    let destination_attacked = board.is_attacked_by_opponent(mv.destination());

    if let Some(victim) = mv.captured_kind() {
        rating += (victim.centipawns() - mv.moved_kind().centipawns()).0;
        rating += if rating < 0 && destination_attacked {
            CAPTURE_LOSE_BIAS
        } else {
            CAPTURE_WIN_BIAS
        };
    } else {
        if mv.is_promotion() {
            rating += PROMOTE_BIAS;
        }
        if mv.is_castle() {
            rating += CASTLE_BIAS;
        }
        if destination_attacked {
            rating -= ATTACKED_PENALTY;
        }
        rating += table_delta(mv.moved_kind(), mv.origin(), mv.destination());
    }

    rating
}

/// Orders moves descending by rating. The sort is stable, so equally rated
/// moves keep their generation order and the ordering is reproducible.
pub fn order_moves<B: Board>(
    board: &B,
    mut moves: MoveList<B::Move>,
    principal: Option<B::Move>,
) -> MoveList<B::Move> {
    moves.sort_by_cached_key(|&mv| Reverse(rate_move(board, mv, principal)));
    moves
}

/// Picks the single highest-rated move from a list, first of equals.
/// This backs the controller's fallback when a search is cancelled before
/// recording any root move.
pub fn pick_best_move<B: Board>(board: &B, moves: &MoveList<B::Move>) -> Option<B::Move> {
    let mut best: Option<(CpKind, B::Move)> = None;
    for &mv in moves.iter() {
        let rating = rate_move(board, mv, None);
        match best {
            Some((best_rating, _)) if rating <= best_rating => {}
            _ => best = Some((rating, mv)),
        }
    }
    best.map(|(_, mv)| mv)
}
