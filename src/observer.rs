//! Optional instrumentation for engine operations.
//!
//! The engine reports how long each of its operations took to an injected
//! [`Observer`]. The default [`NoopObserver`] discards everything;
//! [`ExecutionTimes`] accumulates totals that can be printed after a game.
//!
//! Without the `std` feature there is no clock, so every reported duration is
//! zero and only the call counts carry information.

extern crate alloc;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;
use core::time::Duration;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::sync::Mutex;

/// An instrumented engine operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Building and shuffling a replacement deck.
    Shuffle,
    /// Drawing a single card.
    Deal,
    /// Collecting bets from every seated player.
    CollectBets,
    /// Dealing the two opening cards to every hand.
    InitialDeal,
    /// One player's complete turn.
    PlayerTurn,
    /// The dealer's complete turn.
    DealerTurn,
    /// Settling every bet against the dealer.
    Settlement,
    /// A full round, from betting to settlement.
    Round,
}

impl Operation {
    /// All operations in reporting order.
    pub const ALL: [Self; 8] = [
        Self::Shuffle,
        Self::Deal,
        Self::CollectBets,
        Self::InitialDeal,
        Self::PlayerTurn,
        Self::DealerTurn,
        Self::Settlement,
        Self::Round,
    ];

    /// Returns a short snake-case name for the operation.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shuffle => "shuffle",
            Self::Deal => "deal",
            Self::CollectBets => "collect_bets",
            Self::InitialDeal => "initial_deal",
            Self::PlayerTurn => "player_turn",
            Self::DealerTurn => "dealer_turn",
            Self::Settlement => "settlement",
            Self::Round => "round",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A sink for operation timings.
pub trait Observer: Send + Sync {
    /// Records one completed operation.
    fn record(&self, operation: Operation, elapsed: Duration);
}

/// An observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    fn record(&self, _operation: Operation, _elapsed: Duration) {}
}

impl<T: Observer + ?Sized> Observer for Arc<T> {
    fn record(&self, operation: Operation, elapsed: Duration) {
        (**self).record(operation, elapsed);
    }
}

/// Accumulated statistics for one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OperationStats {
    /// Number of recorded calls.
    pub calls: u64,
    /// Total time spent across all calls.
    pub total: Duration,
}

impl OperationStats {
    /// Returns the average time per call, or zero if nothing was recorded.
    ///
    /// ```
    /// use core::time::Duration;
    ///
    /// use blackjack_engine::OperationStats;
    ///
    /// let stats = OperationStats {
    ///     calls: 4,
    ///     total: Duration::from_millis(10),
    /// };
    /// assert_eq!(stats.mean(), Duration::from_micros(2_500));
    /// assert_eq!(OperationStats::default().mean(), Duration::ZERO);
    /// ```
    #[must_use]
    pub fn mean(&self) -> Duration {
        if self.calls == 0 {
            return Duration::ZERO;
        }
        Duration::from_nanos((self.total.as_nanos() / u128::from(self.calls)) as u64)
    }
}

/// An observer that accumulates call counts and total durations.
///
/// Share it with the game through an [`Arc`] to read the report afterwards:
///
/// ```
/// use std::sync::Arc;
///
/// use blackjack_engine::{ExecutionTimes, Game, GameOptions};
///
/// let times = Arc::new(ExecutionTimes::new());
/// let game = Game::new(GameOptions::default(), 7).with_observer(Arc::clone(&times));
/// let _ = game;
/// assert!(times.report().is_empty());
/// ```
pub struct ExecutionTimes {
    stats: Mutex<HashMap<Operation, OperationStats>>,
}

impl ExecutionTimes {
    /// Creates an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stats: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the statistics for a single operation.
    pub fn get(&self, operation: Operation) -> OperationStats {
        self.stats
            .lock()
            .get(&operation)
            .copied()
            .unwrap_or_default()
    }

    /// Returns every operation that was recorded at least once, in
    /// [`Operation::ALL`] order.
    pub fn report(&self) -> Vec<(Operation, OperationStats)> {
        let stats = self.stats.lock();
        Operation::ALL
            .iter()
            .filter_map(|op| stats.get(op).map(|s| (*op, *s)))
            .filter(|(_, s)| s.calls > 0)
            .collect()
    }

    /// Clears all accumulated statistics.
    pub fn reset(&self) {
        self.stats.lock().clear();
    }
}

impl Observer for ExecutionTimes {
    fn record(&self, operation: Operation, elapsed: Duration) {
        let mut stats = self.stats.lock();
        let entry = stats.entry(operation).or_default();
        entry.calls += 1;
        entry.total += elapsed;
    }
}

impl Default for ExecutionTimes {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ExecutionTimes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutionTimes")
            .field("report", &self.report())
            .finish()
    }
}

/// Measures the wall time of an operation when a clock is available.
pub(crate) struct Stopwatch {
    #[cfg(feature = "std")]
    start: std::time::Instant,
}

impl Stopwatch {
    pub(crate) fn start() -> Self {
        Self {
            #[cfg(feature = "std")]
            start: std::time::Instant::now(),
        }
    }

    #[cfg(feature = "std")]
    pub(crate) fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    #[cfg(not(feature = "std"))]
    pub(crate) const fn elapsed(&self) -> Duration {
        Duration::ZERO
    }
}
