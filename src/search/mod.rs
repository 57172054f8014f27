//! Search functions.

mod ids;
mod negamax;

pub use ids::*;
pub use negamax::*;

use std::fmt::{self, Display};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

use crate::board::{Board, BoardMove};
use crate::coretypes::{Color, Cp, PlyKind, MAX_DEPTH};
use crate::error::Result;
use crate::timeman;

/// The results found from running a search on some root position.
#[derive(Debug, Clone)]
pub struct SearchResult<M> {
    /// The best move to make for the searched position.
    pub best_move: M,
    /// Centipawn score of the best move, relative to the root player.
    pub score: Cp,
    /// Depth in plies of the deepest iteration that produced `best_move`.
    /// That iteration was only fully searched if `stopped` is false.
    pub depth: PlyKind,
    /// Total number of nodes visited in the search.
    pub nodes: u64,
    /// Total time elapsed from the start to the end of the search.
    pub elapsed: Duration,
    /// Flag that indicates this search was cut short by its deadline.
    pub stopped: bool,
    /// The player to move for the root position that was searched.
    pub player: Color,
}

impl<M> SearchResult<M> {
    /// Get average nodes per second of search.
    pub fn nps(&self) -> f64 {
        (self.nodes as f64 / self.elapsed.as_secs_f64()).round()
    }

    /// Returns the color who is leading from the root position, or None if
    /// the position is considered even.
    pub fn leading(&self) -> Option<Color> {
        match (self.score.signum(), self.player) {
            (1, player) => Some(player),
            (-1, player) => Some(!player),
            _ => None,
        }
    }
}

impl<M: BoardMove> Display for SearchResult<M> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "SearchResult {{")?;
        writeln!(f, "    best_move: {:?}", self.best_move)?;
        writeln!(f, "    score    : {}", self.score)?;
        writeln!(f, "    player   : {:?}", self.player)?;
        writeln!(f, "    depth    : {}", self.depth)?;
        writeln!(f, "    nodes    : {}", self.nodes)?;
        writeln!(
            f,
            "    elapsed  : {}.{:03}s",
            self.elapsed.as_secs(),
            self.elapsed.subsec_millis()
        )?;
        writeln!(f, "    stopped  : {}", self.stopped)?;
        write!(f, "}}")
    }
}

/// Tempo Engine primary blocking search function. Searches the position for
/// up to `movetime`, then returns the best move found.
pub fn search<B: Board>(board: &mut B, movetime: Duration) -> Result<SearchResult<B::Move>> {
    let stopper = Arc::new(AtomicBool::new(false));
    timeman::start_timer(Arc::clone(&stopper), movetime);
    ids(board, stopper, MAX_DEPTH)
}
