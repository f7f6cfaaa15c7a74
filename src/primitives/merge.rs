// ============================================================================
// tick-signals - Merge Combinators
// Combine several sources into one, earliest source wins
// ============================================================================

use crate::core::either::Either;
use crate::core::signal::Signal;

/// `a` if present, otherwise `b`.
///
/// ```
/// use tick_signals::{merge, Signal};
///
/// assert_eq!(merge(Signal::Present(1), Signal::Present(2)), Signal::Present(1));
/// assert_eq!(merge(Signal::Absent, Signal::Present(2)), Signal::Present(2));
/// ```
pub fn merge<T>(a: Signal<T>, b: Signal<T>) -> Signal<T> {
    match a {
        Signal::Present(_) => a,
        Signal::Absent => b,
    }
}

/// The first present signal among `N` sources, scanning from index 0.
///
/// The source count is part of the type, so the scan visits exactly `N`
/// slots and a graph wired for a different count fails to compile.
///
/// ```
/// use tick_signals::{merge_many, Signal};
///
/// let buttons = [Signal::Absent, Signal::Present('b'), Signal::Present('c')];
/// assert_eq!(merge_many(buttons), Signal::Present('b'));
/// ```
pub fn merge_many<T, const N: usize>(signals: [Signal<T>; N]) -> Signal<T> {
    signals.into_iter().find_map(Signal::into_option).into()
}

/// Tag whichever signal is present, preferring `a` when both are.
pub fn join<A, B>(a: Signal<A>, b: Signal<B>) -> Signal<Either<A, B>> {
    match (a, b) {
        (Signal::Present(x), _) => Signal::Present(Either::Left(x)),
        (Signal::Absent, Signal::Present(y)) => Signal::Present(Either::Right(y)),
        (Signal::Absent, Signal::Absent) => Signal::Absent,
    }
}
