// ============================================================================
// tick-signals - Lift Combinators
// Combine two signals that update at different ticks
// ============================================================================

use crate::core::signal::Signal;

/// Combine the latest values of two signals.
///
/// Each side's effective value is its new value if present this tick, or the
/// value remembered in `pair` otherwise. Both effective values are written
/// back to `pair` every call. The output is absent only when neither side
/// updated; otherwise it is `f(&a, &b)` over the effective values.
///
/// `pair` must start out holding sensible values for both sides, since the
/// first update on one side combines with whatever the other side holds.
///
/// ```
/// use tick_signals::{map2, Signal};
///
/// let mut last = (0, 0);
/// let sum = |a: &i32, b: &i32| a + b;
///
/// assert_eq!(map2(sum, Signal::Present(2), Signal::Absent, &mut last), Signal::Present(2));
/// assert_eq!(map2(sum, Signal::Absent, Signal::Present(5), &mut last), Signal::Present(7));
/// assert_eq!(map2(sum, Signal::Absent, Signal::Absent, &mut last), Signal::Absent);
/// ```
pub fn map2<A, B, C>(
    f: impl FnOnce(&A, &B) -> C,
    a: Signal<A>,
    b: Signal<B>,
    pair: &mut (A, B),
) -> Signal<C> {
    let updated = a.is_present() || b.is_present();
    if let Signal::Present(x) = a {
        pair.0 = x;
    }
    if let Signal::Present(y) = b {
        pair.1 = y;
    }
    if updated {
        Signal::Present(f(&pair.0, &pair.1))
    } else {
        Signal::Absent
    }
}

/// [`map2`] that emits the pair of latest values itself.
pub fn zip<A: Clone, B: Clone>(a: Signal<A>, b: Signal<B>, pair: &mut (A, B)) -> Signal<(A, B)> {
    map2(|x: &A, y: &B| (x.clone(), y.clone()), a, b, pair)
}
