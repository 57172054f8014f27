//! Negamax implementation of Minimax with Alpha-Beta pruning.

use std::cmp;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::board::{Board, MoveGen};
use crate::coretypes::Cp;
use crate::eval::evaluate;
use crate::moveorder::order_moves;

/// Per-call search state: the target depth of the current iteration, the
/// principal move used to seed move ordering, the best move discovered at
/// the root so far, and the shared cancellation flag.
///
/// A `Searcher` lives for one `think` invocation and is never shared between
/// calls. The cancellation flag is its only cross-thread state: a deadline
/// timer stores `true` once, the search polls it and never blocks.
pub struct Searcher<B: Board> {
    target_depth: i32,
    principal: Option<B::Move>,
    best_root_move: Option<B::Move>,
    stopper: Arc<AtomicBool>,
    nodes: u64,
}

impl<B: Board> Searcher<B> {
    pub fn new(stopper: Arc<AtomicBool>) -> Self {
        Self {
            target_depth: 0,
            principal: None,
            best_root_move: None,
            stopper,
            nodes: 0,
        }
    }

    /// Arms the searcher for one iteration of deepening. The principal move
    /// is the best move of the previous, shallower iteration, searched first
    /// at every node it appears in.
    pub fn start_iteration(&mut self, target_depth: i32, principal: Option<B::Move>) {
        self.target_depth = target_depth;
        self.principal = principal;
        self.best_root_move = None;
    }

    /// Best move recorded at the root during the current iteration, if any
    /// child improved alpha before cancellation.
    pub fn best_root_move(&self) -> Option<B::Move> {
        self.best_root_move
    }

    /// Number of nodes visited across all iterations so far.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// True once the deadline timer has fired.
    pub fn stopped(&self) -> bool {
        self.stopper.load(Ordering::Relaxed)
    }

    /// Negamax search with alpha-beta pruning, scoring relative to the side
    /// to move. The score of each child is negated before comparison, so the
    /// maxing player is always the current one.
    ///
    /// Fail-soft on the low side: the final `alpha` is returned rather than
    /// a hard bound, preserving information for the caller. A cancelled call
    /// returns the neutral score 0 without touching `alpha` or the recorded
    /// root move, its result must not be trusted.
    ///
    /// At `depth <= 0` a stand-pat evaluation may cut off or raise `alpha`,
    /// and move generation is restricted to noisy moves. This is a minimal
    /// quiescence stand-in, not a full quiescence search.
    pub fn negamax(&mut self, board: &mut B, depth: i32, mut alpha: Cp, beta: Cp) -> Cp {
        debug_assert!(alpha <= beta);

        if self.stopped() {
            return Cp(0);
        }
        self.nodes += 1;

        if depth <= 0 {
            let stand_pat = evaluate(board);
            if stand_pat >= beta {
                return beta;
            }
            alpha = cmp::max(alpha, stand_pat);
        }

        if board.is_checkmate() {
            return -Cp::CHECKMATE;
        }
        if board.is_draw() {
            return Cp(0);
        }

        let movegen = if depth > 0 { MoveGen::All } else { MoveGen::Noisy };
        let moves = order_moves(board, board.legal_moves(movegen), self.principal);

        for mv in moves {
            board.make_move(mv);
            let score = -self.negamax(board, depth - 1, -beta, -alpha);
            board.undo_move(mv);

            if self.stopped() {
                return Cp(0);
            }

            if score > alpha {
                alpha = score;
                if depth == self.target_depth {
                    self.best_root_move = Some(mv);
                }
                if alpha >= beta {
                    // Beta cutoff, no sibling can affect the result.
                    break;
                }
            }
        }

        alpha
    }
}
