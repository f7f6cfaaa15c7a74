// ============================================================================
// tick-signals - Fold Combinators
// Accumulate over every value seen so far in a caller-owned state cell
// ============================================================================

use crate::collections::history::History;
use crate::core::signal::Signal;

/// Fold over the past.
///
/// When a value `x` arrives, computes `f(x, &state)`, stores the result in
/// `state` and emits it. When nothing arrives, emits nothing and leaves
/// `state` untouched.
///
/// `state` is owned by the caller and must outlive the dataflow graph; give
/// each `fold_past` call site its own cell.
///
/// # Example
///
/// ```
/// use tick_signals::{fold_past, Signal};
///
/// let mut total = 0;
/// let ticks = [Signal::Present(1), Signal::Absent, Signal::Present(2)];
/// let out: Vec<_> = ticks
///     .into_iter()
///     .map(|s| fold_past(|x, acc: &i32| acc + x, &mut total, s))
///     .collect();
///
/// assert_eq!(out, [Signal::Present(1), Signal::Absent, Signal::Present(3)]);
/// assert_eq!(total, 3);
/// ```
pub fn fold_past<T, S: Clone>(
    f: impl FnOnce(T, &S) -> S,
    state: &mut S,
    incoming: Signal<T>,
) -> Signal<S> {
    match incoming {
        Signal::Present(x) => {
            *state = f(x, &*state);
            Signal::Present(state.clone())
        }
        Signal::Absent => Signal::Absent,
    }
}

/// Record the last `N` values into a caller-owned [`History`].
///
/// A [`fold_past`] whose step pushes the new value and evicts the oldest.
/// Emits the updated history on ticks where a value arrives.
///
/// A history started with [`History::new`] is only partly filled: it emits
/// fewer than `N` values until `N` values have arrived. Start from
/// [`History::filled`] or [`History::from_array`] to always emit exactly `N`.
///
/// ```
/// use tick_signals::{record, History, Signal};
///
/// let mut last_three: History<u8, 3> = History::filled(0);
/// record(Signal::Present(5), &mut last_three);
/// let out = record(Signal::Present(6), &mut last_three);
///
/// assert_eq!(out.value().map(History::as_slice), Some(&[0, 5, 6][..]));
/// ```
pub fn record<T: Clone, const N: usize>(
    incoming: Signal<T>,
    history: &mut History<T, N>,
) -> Signal<History<T, N>> {
    fold_past(|x, past: &History<T, N>| past.pushed(x), history, incoming)
}

// =============================================================================
// TESTS
// =============================================================================
