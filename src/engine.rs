//! Engine struct acts as a simplified API for the various parts of the Tempo engine.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

use log::debug;

use crate::board::Board;
use crate::coretypes::{PlyKind, MAX_DEPTH};
use crate::error::Result;
use crate::search::{self, SearchResult};
use crate::timeman::{self, Clock, TimePolicy};

/// EngineBuilder allows for parameters of an Engine to be set and built once,
/// avoiding repeating costly initialization steps of making then changing an Engine.
///
/// Default values:
///
/// * `time_policy`: the stock constants, see [`TimePolicy`]
/// * `max_depth`: 128
#[derive(Debug, Clone, PartialEq)]
pub struct EngineBuilder {
    time_policy: TimePolicy,
    max_depth: PlyKind,
}

impl EngineBuilder {
    /// Create a new default EngineBuilder.
    pub fn new() -> Self {
        Self {
            time_policy: TimePolicy::default(),
            max_depth: MAX_DEPTH,
        }
    }

    /// Create and return a new Engine.
    pub fn build(&self) -> Engine {
        Engine {
            time_policy: self.time_policy,
            max_depth: self.max_depth,
        }
    }

    /// Set the engine's per-move time budget policy.
    pub fn time_policy(mut self, time_policy: TimePolicy) -> Self {
        self.time_policy = time_policy;
        self
    }

    /// Set the engine's iterative deepening ceiling.
    pub fn max_depth(mut self, max_depth: PlyKind) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Engine wraps up all parameters required for running a clock-driven search.
///
/// The engine is stateless between moves: each [`Engine::think`] computes a
/// fresh budget, arms a fresh deadline timer, and searches synchronously on
/// the calling thread. A timer left over from an earlier call only ever
/// touches that call's own flag.
#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    time_policy: TimePolicy,
    max_depth: PlyKind,
}

impl Engine {
    pub fn new() -> Self {
        EngineBuilder::new().build()
    }

    /// Picks a move for the given position under the given clock.
    ///
    /// Blocks for up to the computed think time. Returns the best move of
    /// the deepest iteration the deadline allowed, or the highest-ranked
    /// legal move if the deadline fired before any iteration finished a
    /// single root child. Errs only when the position has no legal moves.
    pub fn think<B: Board>(&self, board: &mut B, clock: Clock) -> Result<SearchResult<B::Move>> {
        let movetime = self.time_policy.think_time(clock);
        debug!("think time {}ms", movetime.as_millis());

        let stopper = Arc::new(AtomicBool::new(false));
        timeman::start_timer(Arc::clone(&stopper), movetime);
        search::ids(board, stopper, self.max_depth)
    }

    /// Picks a move with an explicit per-move time budget, bypassing the
    /// clock policy.
    pub fn think_movetime<B: Board>(
        &self,
        board: &mut B,
        movetime: Duration,
    ) -> Result<SearchResult<B::Move>> {
        let stopper = Arc::new(AtomicBool::new(false));
        timeman::start_timer(Arc::clone(&stopper), movetime);
        search::ids(board, stopper, self.max_depth)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
