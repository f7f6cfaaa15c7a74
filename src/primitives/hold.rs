// ============================================================================
// tick-signals - Hold Combinators
// Remember the last value seen: latch it, or suppress its repeats
// ============================================================================

use crate::core::equality::{equals, EqualsFn};
use crate::core::signal::Signal;

// =============================================================================
// LATCH
// =============================================================================

/// Hold the most recent value, emitting it every tick.
///
/// A present input overwrites `cell` and passes through. An absent input
/// emits whatever `cell` holds, so `latch` is present on every tick.
///
/// Before the first value arrives the output is the caller's initial
/// contents of `cell`. There is no "not yet set" state; if one is needed,
/// latch a `Signal<T>` or `Option<T>` and start the cell empty.
///
/// ```
/// use tick_signals::{latch, Signal};
///
/// let mut setpoint = 0;
/// assert_eq!(latch(Signal::Present(10), &mut setpoint), Signal::Present(10));
/// assert_eq!(latch(Signal::Absent, &mut setpoint), Signal::Present(10));
/// ```
pub fn latch<T: Clone>(incoming: Signal<T>, cell: &mut T) -> Signal<T> {
    match incoming {
        Signal::Present(x) => {
            *cell = x.clone();
            Signal::Present(x)
        }
        Signal::Absent => Signal::Present(cell.clone()),
    }
}

// =============================================================================
// DROP REPEATS
// =============================================================================

/// Suppress a value equal to the last one let through.
///
/// `prev` starts as `None`, so the first value always passes. Absent input
/// stays absent and does not touch `prev`; a value reappearing after a
/// different one passes again.
///
/// ```
/// use tick_signals::{drop_repeats, Signal};
///
/// let mut prev = None;
/// assert_eq!(drop_repeats(Signal::Present(5), &mut prev), Signal::Present(5));
/// assert_eq!(drop_repeats(Signal::Present(5), &mut prev), Signal::Absent);
/// assert_eq!(drop_repeats(Signal::Present(7), &mut prev), Signal::Present(7));
/// ```
pub fn drop_repeats<T: PartialEq + Clone>(incoming: Signal<T>, prev: &mut Option<T>) -> Signal<T> {
    drop_repeats_by(equals, incoming, prev)
}

/// [`drop_repeats`] with a caller-chosen notion of equality.
///
/// Use [`safe_equals_f32`](crate::equality::safe_equals_f32) so a stuck-NaN
/// sensor counts as repeating, or [`never_equals`](crate::equality::never_equals)
/// to disable suppression without rewiring the graph.
pub fn drop_repeats_by<T: Clone>(
    eq: EqualsFn<T>,
    incoming: Signal<T>,
    prev: &mut Option<T>,
) -> Signal<T> {
    match incoming {
        Signal::Present(x) => {
            if let Some(last) = prev.as_ref() {
                if eq(last, &x) {
                    log_trace!("drop_repeats: suppressed repeat");
                    return Signal::Absent;
                }
            }
            *prev = Some(x.clone());
            Signal::Present(x)
        }
        Signal::Absent => Signal::Absent,
    }
}

// =============================================================================
// TESTS
// =============================================================================
